use super::{CellStatus, Grid};

const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Number of alive cells among the 8 neighbors of (`row`, `col`).
///
/// Positions outside the grid count as dead; there is no wraparound.
pub fn neighbor_count(grid: &Grid, row: usize, col: usize) -> u8 {
    let (row, col) = (row as isize, col as isize);
    NEIGHBOR_OFFSETS
        .iter()
        .map(|&(dr, dc)| grid.value_at(row + dr, col + dc))
        .sum()
}

/// Live-neighbor counts for every cell of a grid, same shape as the grid.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct NeighborCounts {
    counts: Vec<u8>,
    cols: usize,
}

impl NeighborCounts {
    pub fn of(grid: &Grid) -> Self {
        let (rows, cols) = (grid.rows(), grid.cols());
        let mut counts = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                counts.push(neighbor_count(grid, row, col));
            }
        }
        Self { counts, cols }
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.counts[col + row * self.cols]
    }

    pub(crate) fn as_slice(&self) -> &[u8] {
        &self.counts
    }
}

/// Advances `grid` by one generation in place.
///
/// Every count is taken from the pre-step state before any cell changes.
pub fn step(grid: &mut Grid) {
    let counts = NeighborCounts::of(grid);
    for (cell, &n) in grid.cells_mut().iter_mut().zip(counts.as_slice()) {
        *cell = CellStatus::classify(*cell, n).survives();
    }
}

/// Owns the board during precomputation and tracks how far it has advanced.
pub struct Simulator {
    grid: Grid,
    generation: u64,
}

impl Simulator {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn step(&mut self) {
        step(&mut self.grid);
        self.generation += 1;
        tracing::trace!(
            generation = self.generation,
            population = self.grid.population(),
            "stepped"
        );
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }
}
