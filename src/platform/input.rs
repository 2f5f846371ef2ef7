//! Input sampling
//!
//! Collects raw pointer/touch/keyboard events between frames and turns them
//! into a single [`TickInput`] per tick. A known pointer position always wins
//! over held keys; the two are never blended.

use glam::Vec2;

use crate::sim::{HeldKeys, TickInput};

/// Record a key transition by DOM `KeyboardEvent.code`.
/// Returns false for keys that don't steer.
pub fn apply_key(keys: &mut HeldKeys, code: &str, down: bool) -> bool {
    let slot = match code {
        "ArrowLeft" | "KeyA" => &mut keys.left,
        "ArrowRight" | "KeyD" => &mut keys.right,
        "ArrowUp" | "KeyW" => &mut keys.up,
        "ArrowDown" | "KeyS" => &mut keys.down,
        _ => return false,
    };
    *slot = down;
    true
}

/// Map a client-space point into canvas backing space.
///
/// `rect_origin`/`rect_size` are the canvas' displayed bounds (CSS pixels),
/// `backing_size` is its internal resolution. Returns `None` while the canvas
/// has no displayed area.
pub fn client_to_canvas(
    client: Vec2,
    rect_origin: Vec2,
    rect_size: Vec2,
    backing_size: Vec2,
) -> Option<Vec2> {
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
        return None;
    }
    let scale = backing_size / rect_size;
    Some((client - rect_origin) * scale)
}

/// Pointer and keyboard state accumulated between ticks
#[derive(Debug, Clone, Default)]
pub struct InputSampler {
    pointer: Option<Vec2>,
    keys: HeldKeys,
}

impl InputSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest pointer/touch position in canvas space
    pub fn pointer_moved(&mut self, pos: Vec2) {
        self.pointer = Some(pos);
    }

    pub fn key_down(&mut self, code: &str) -> bool {
        apply_key(&mut self.keys, code, true)
    }

    pub fn key_up(&mut self, code: &str) -> bool {
        apply_key(&mut self.keys, code, false)
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    pub fn keys(&self) -> HeldKeys {
        self.keys
    }

    /// Forget everything. The pointer goes back to unknown so a new session
    /// doesn't snap the craft to wherever the cursor was last seen.
    pub fn reset(&mut self) {
        self.pointer = None;
        self.keys = HeldKeys::default();
    }

    /// Build the input for the next tick
    pub fn sample(&self) -> TickInput {
        match self.pointer {
            Some(target) => TickInput::pointer(target),
            None => TickInput::keys(self.keys),
        }
    }
}
