//! Index data structures.

pub mod inverted;

pub use inverted::*;
