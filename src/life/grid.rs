use std::fmt;

/// Rectangular field of dead/alive cells stored row-major.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    cells: Vec<bool>,
    rows: usize,
    cols: usize,
}

/// Reasons a bitmap cannot become a [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid has no rows")]
    Empty,
    #[error("row {row} is empty")]
    EmptyRow { row: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("cell ({row}, {col}) has value {value}, expected 0 or 1")]
    InvalidCell { row: usize, col: usize, value: u8 },
}

impl Grid {
    /// Creates an all-dead grid of `rows x cols` cells.
    pub fn blank(rows: usize, cols: usize) -> Self {
        assert!(rows >= 1 && cols >= 1);
        Self {
            cells: vec![false; rows * cols],
            rows,
            cols,
        }
    }

    /// Builds a grid from a literal 0/1 bitmap, one inner vector per row.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, GridError> {
        let cols = rows.first().ok_or(GridError::Empty)?.len();
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (r, row) in rows.iter().enumerate() {
            if row.is_empty() {
                return Err(GridError::EmptyRow { row: r });
            }
            if row.len() != cols {
                return Err(GridError::Ragged {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
            for (c, &value) in row.iter().enumerate() {
                match value {
                    0 => cells.push(false),
                    1 => cells.push(true),
                    _ => return Err(GridError::InvalidCell { row: r, col: c, value }),
                }
            }
        }
        Ok(Self {
            cells,
            rows: rows.len(),
            cols,
        })
    }

    /// Create a grid with random cells.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn random(rows: usize, cols: usize, seed: Option<u64>, fill_rate: f64) -> Self {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        let mut result = Self::blank(rows, cols);
        for cell in result.cells.iter_mut() {
            *cell = rng.gen_bool(fill_rate);
        }
        result
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[col + row * self.cols]
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        self.cells[col + row * self.cols] = alive;
    }

    /// Value of the cell at a signed position; anything off the board is dead.
    pub(crate) fn value_at(&self, row: isize, col: isize) -> u8 {
        if row < 0 || col < 0 || row as usize >= self.rows || col as usize >= self.cols {
            return 0;
        }
        self.get(row as usize, col as usize) as u8
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks_exact(self.cols) {
            for &cell in row {
                write!(f, "{}", cell as u8)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_rejects_ragged_and_non_binary() {
        assert_eq!(Grid::from_rows(vec![]), Err(GridError::Empty));
        assert_eq!(
            Grid::from_rows(vec![vec![0, 1], vec![1]]),
            Err(GridError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            Grid::from_rows(vec![vec![0, 2]]),
            Err(GridError::InvalidCell {
                row: 0,
                col: 1,
                value: 2
            })
        );
        assert_eq!(
            Grid::from_rows(vec![vec![]]),
            Err(GridError::EmptyRow { row: 0 })
        );
    }

    #[test]
    fn display_round_trips_bitmap() {
        let grid = Grid::from_rows(vec![vec![0, 1, 0], vec![1, 1, 0]]).unwrap();
        assert_eq!(grid.to_string(), "010\n110\n");
        assert_eq!(grid.population(), 3);
        assert!(grid.get(1, 0));
        assert!(!grid.get(1, 2));
    }

    #[test]
    fn value_at_is_zero_off_board() {
        let grid = Grid::from_rows(vec![vec![1, 1], vec![1, 1]]).unwrap();
        assert_eq!(grid.value_at(-1, 0), 0);
        assert_eq!(grid.value_at(0, -1), 0);
        assert_eq!(grid.value_at(2, 0), 0);
        assert_eq!(grid.value_at(0, 2), 0);
        assert_eq!(grid.value_at(1, 1), 1);
    }

    #[test]
    fn random_is_reproducible_with_seed() {
        const SEED: u64 = 42;
        let a = Grid::random(16, 24, Some(SEED), 0.3);
        let b = Grid::random(16, 24, Some(SEED), 0.3);
        assert_eq!(a, b);
        assert_eq!((a.rows(), a.cols()), (16, 24));
    }
}
