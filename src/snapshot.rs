use crate::life::{CellStatus, Grid, NeighborCounts};
use serde::Serialize;

/// Which fill the UI should paint a cell with.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorRole {
    Alive,
    Dead,
}

/// One plotted cell.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct CellRecord {
    pub row: usize,
    pub col: usize,
    /// Plot x, centered in the cell's unit square.
    pub x: f64,
    /// Plot y, row axis flipped so row 0 is at the top.
    pub y: f64,
    pub neighbors: u8,
    pub status: CellStatus,
    pub role: ColorRole,
}

/// Render-ready view of the grid at one generation.
#[derive(Clone, PartialEq, Debug, Default, Serialize)]
pub struct Snapshot {
    pub alive: Vec<CellRecord>,
    pub dead: Vec<CellRecord>,
}

impl Snapshot {
    /// Classifies every cell of `grid`; both collections come out row-major.
    pub fn build(grid: &Grid) -> Self {
        let rows = grid.rows();
        let counts = NeighborCounts::of(grid);
        let mut snapshot = Self::default();
        for row in 0..rows {
            for col in 0..grid.cols() {
                let alive = grid.get(row, col);
                let neighbors = counts.get(row, col);
                let record = CellRecord {
                    row,
                    col,
                    x: col as f64 + 0.5,
                    y: rows as f64 - row as f64 - 0.5,
                    neighbors,
                    status: CellStatus::classify(alive, neighbors),
                    role: if alive {
                        ColorRole::Alive
                    } else {
                        ColorRole::Dead
                    },
                };
                if alive {
                    snapshot.alive.push(record);
                } else {
                    snapshot.dead.push(record);
                }
            }
        }
        snapshot
    }

    pub fn population(&self) -> usize {
        self.alive.len()
    }

    /// Total number of cells, alive and dead.
    pub fn len(&self) -> usize {
        self.alive.len() + self.dead.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every record, alive cells first.
    pub fn records(&self) -> impl Iterator<Item = &CellRecord> {
        self.alive.iter().chain(self.dead.iter())
    }
}
