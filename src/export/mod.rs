//! Rendering applied themes.

pub mod stylesheet;

pub use stylesheet::Stylesheet;
