//! Sky Ace - a top-down arcade shooter
//!
//! Core modules:
//! - `sim`: Fixed-timestep simulation (spawning, movement, collisions, score)
//! - `renderer`: Draw-list generation and the 2D canvas backend
//! - `platform`: Browser input sampling
//! - `tuning`: Data-driven game balance
//! - `briefing`: Mission briefing text shown alongside the run

pub mod briefing;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use briefing::MissionBriefing;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Nominal simulation step (one tick per animation frame)
    pub const TICK_MS: f64 = 16.0;

    /// Playfield dimensions (logical units)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Entity sizes
    pub const PLAYER_SIZE: f32 = 40.0;
    pub const ENEMY_SIZE: f32 = 35.0;
    pub const BULLET_SIZE: f32 = 6.0;
    /// Bullets are stretched vertically for a sense of speed
    pub const BULLET_LENGTH: f32 = BULLET_SIZE * 3.0;
    pub const PARTICLE_SIZE: f32 = 4.0;

    /// Player spawn point (top-left of the sprite)
    pub const PLAYER_START_X: f32 = CANVAS_WIDTH / 2.0;
    pub const PLAYER_START_Y: f32 = CANVAS_HEIGHT - 100.0;

    /// Bullets above this line are pruned
    pub const BULLET_PRUNE_Y: f32 = -50.0;
    /// Where a spent bullet is parked until the next prune
    pub const BULLET_PARK_Y: f32 = -100.0;
}

/// Entity colors (RGBA). Display only, never read by gameplay.
pub mod palette {
    pub const PLAYER: [f32; 4] = [0.231, 0.510, 0.965, 1.0]; // #3b82f6
    pub const ENEMY: [f32; 4] = [0.937, 0.267, 0.267, 1.0]; // #ef4444
    pub const BULLET: [f32; 4] = [0.984, 0.749, 0.141, 1.0]; // #fbbf24
}
