//! Shared utility modules used across Shrike components.

pub mod concurrent_map;

pub use concurrent_map::*;
