//! Card theme: gold accents on ivory panels over a deep plum backdrop.

mod styles;

pub use styles::GLOBAL_STYLES;
