mod parse_input;

pub use parse_input::{load_input, parse_input, Input, InputError, MAX_GENERATIONS};
