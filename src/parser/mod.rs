//! Payload parsing.

pub mod payload;

pub use payload::{load_screen, parse_screen_str, parse_screen_value};
