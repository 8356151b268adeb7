mod grid;
mod simulator;
mod status;

pub use grid::{Grid, GridError};
pub use simulator::{neighbor_count, step, NeighborCounts, Simulator};
pub use status::CellStatus;
