mod controller;
mod palette;
mod timer;

pub use controller::{Command, PlaybackController, PlaybackState};
pub use palette::{NamedColor, Palette};
pub use timer::PlaybackTimer;
