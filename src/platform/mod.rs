//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (pointer, touch, keyboard)

pub mod input;

pub use input::{InputSampler, apply_key, client_to_canvas};
