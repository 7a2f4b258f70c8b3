//! Closed outlines that a shadow can be cast from.

mod path;

pub use path::*;
