use crate::{Grid, GridError};
use std::path::{Path, PathBuf};

/// Largest generation count accepted; every generation is kept in memory.
pub const MAX_GENERATIONS: u64 = 100_000;

/// Generation count and starting board read from an input file.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Input {
    pub generations: u64,
    pub grid: Grid,
}

/// Malformed input. Line numbers are 1-based and count the generation line.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line 1: missing generation count")]
    MissingGenerations,
    #[error("line 1: invalid generation count {text:?}")]
    InvalidGenerations {
        text: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("line 1: generation count {generations} exceeds the limit of {max}")]
    TooManyGenerations { generations: u64, max: u64 },
    #[error("no grid rows after the generation count")]
    MissingGrid,
    #[error("line {line}: empty grid row")]
    EmptyRow { line: usize },
    #[error("line {line}: row has {found} cells, expected {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}, column {column}: unexpected {found:?}, expected '0' or '1'")]
    InvalidCell {
        line: usize,
        column: usize,
        found: char,
    },
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Parses the generation count line followed by rows of `0`/`1` characters.
pub fn parse_input(data: &str) -> Result<Input, InputError> {
    let mut lines = data
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line));

    let first = lines.next().ok_or(InputError::MissingGenerations)?.trim();
    if first.is_empty() {
        return Err(InputError::MissingGenerations);
    }
    let generations = first
        .parse::<u64>()
        .map_err(|source| InputError::InvalidGenerations {
            text: first.to_string(),
            source,
        })?;
    if generations > MAX_GENERATIONS {
        return Err(InputError::TooManyGenerations {
            generations,
            max: MAX_GENERATIONS,
        });
    }

    let mut rows: Vec<Vec<u8>> = vec![];
    for (i, line) in lines.enumerate() {
        let line_no = i + 2;
        if line.is_empty() {
            return Err(InputError::EmptyRow { line: line_no });
        }
        let row = line
            .chars()
            .enumerate()
            .map(|(j, c)| match c {
                '0' => Ok(0),
                '1' => Ok(1),
                _ => Err(InputError::InvalidCell {
                    line: line_no,
                    column: j + 1,
                    found: c,
                }),
            })
            .collect::<Result<Vec<u8>, _>>()?;
        if let Some(expected) = rows.first().map(Vec::len) {
            if row.len() != expected {
                return Err(InputError::RaggedRow {
                    line: line_no,
                    expected,
                    found: row.len(),
                });
            }
        }
        rows.push(row);
    }
    if rows.is_empty() {
        return Err(InputError::MissingGrid);
    }

    let grid = Grid::from_rows(rows)?;
    Ok(Input { generations, grid })
}

/// Reads and parses an input file.
pub fn load_input(path: impl AsRef<Path>) -> Result<Input, InputError> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let input = parse_input(&data)?;
    tracing::info!(
        path = %path.display(),
        generations = input.generations,
        rows = input.grid.rows(),
        cols = input.grid.cols(),
        "loaded input"
    );
    Ok(input)
}
