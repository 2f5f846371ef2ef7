//! Data-driven game balance
//!
//! Every gameplay constant lives here so a host can override them from JSON
//! without touching the simulation. Defaults reproduce the stock arcade feel.

use serde::{Deserialize, Serialize};

/// Largest particle burst a single explosion may spawn
pub const MAX_BURST_COUNT: u32 = 256;

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Minimum time between enemy spawns (ms)
    pub spawn_interval_ms: f64,
    /// Auto-fire cooldown (ms)
    pub fire_cooldown_ms: f64,
    /// Minimum time between externally published score updates (ms)
    pub score_sync_interval_ms: f64,

    /// Slowest enemy descent (units per tick)
    pub enemy_base_speed: f32,
    /// Random extra descent speed, drawn from [0, jitter)
    pub enemy_speed_jitter: f32,
    /// Bullet climb speed (units per tick)
    pub bullet_speed: f32,
    /// Keyboard movement per held key (units per tick)
    pub player_key_speed: f32,
    /// Fraction of the remaining distance covered per tick when following a pointer
    pub pointer_smoothing: f32,

    /// Starting hit points
    pub player_hp: i32,
    /// Score credited per destroyed enemy
    pub kill_score: u64,

    /// Particles per explosion burst
    pub burst_count: u32,
    /// Spread of burst velocity components (each in [-spread/2, spread/2))
    pub burst_spread: f32,
    /// Particle life lost per tick (life starts at 1.0)
    pub particle_decay: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            spawn_interval_ms: 800.0,
            fire_cooldown_ms: 100.0,
            score_sync_interval_ms: 100.0,

            enemy_base_speed: 6.0,
            enemy_speed_jitter: 3.0,
            bullet_speed: 20.0,
            player_key_speed: 10.0,
            pointer_smoothing: 0.5,

            player_hp: 3,
            kill_score: 100,

            burst_count: 12,
            burst_spread: 15.0,
            particle_decay: 0.08,
        }
    }
}

impl Tuning {
    /// Parse tuning overrides from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        Ok(tuning.sanitized())
    }

    /// Clamp values that would break the simulation back into range
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if !(self.pointer_smoothing > 0.0 && self.pointer_smoothing <= 1.0) {
            log::warn!(
                "pointer_smoothing {} out of (0, 1], using {}",
                self.pointer_smoothing,
                defaults.pointer_smoothing
            );
            self.pointer_smoothing = defaults.pointer_smoothing;
        }
        if self.player_hp < 1 {
            log::warn!("player_hp {} < 1, using {}", self.player_hp, defaults.player_hp);
            self.player_hp = defaults.player_hp;
        }
        if self.burst_count > MAX_BURST_COUNT {
            log::warn!(
                "burst_count {} above {}, capping",
                self.burst_count,
                MAX_BURST_COUNT
            );
            self.burst_count = MAX_BURST_COUNT;
        }
        if self.particle_decay <= 0.0 {
            log::warn!(
                "particle_decay {} would keep particles alive forever, using {}",
                self.particle_decay,
                defaults.particle_decay
            );
            self.particle_decay = defaults.particle_decay;
        }

        // Negative timings and speeds have no meaning
        self.spawn_interval_ms = self.spawn_interval_ms.max(0.0);
        self.fire_cooldown_ms = self.fire_cooldown_ms.max(0.0);
        self.score_sync_interval_ms = self.score_sync_interval_ms.max(0.0);
        self.enemy_base_speed = self.enemy_base_speed.max(0.0);
        self.enemy_speed_jitter = self.enemy_speed_jitter.max(0.0);
        self.bullet_speed = self.bullet_speed.max(0.0);
        self.player_key_speed = self.player_key_speed.max(0.0);
        self.burst_spread = self.burst_spread.max(0.0);

        self
    }
}
