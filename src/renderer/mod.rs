//! Rendering module
//!
//! `scene` builds a backend-agnostic draw list from the game state; `canvas`
//! paints it with the browser's 2D context.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod colors;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderState;
pub use scene::{DrawCmd, MISSION_PLACEHOLDER, build_frame};
