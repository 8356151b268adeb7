mod gui;
mod history;
mod life;
mod playback;
mod snapshot;
mod utils;

pub use gui::{App, Config};
pub use history::{simulate_all, SnapshotHistory};
pub use life::{neighbor_count, step, CellStatus, Grid, GridError, NeighborCounts, Simulator};
pub use playback::{Command, NamedColor, Palette, PlaybackController, PlaybackState, PlaybackTimer};
pub use snapshot::{CellRecord, ColorRole, Snapshot};
pub use utils::{load_input, parse_input, Input, InputError, MAX_GENERATIONS};
