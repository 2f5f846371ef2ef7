//! Game state and core simulation types
//!
//! Everything a session owns lives in [`GameState`]: the player, the three
//! entity collections, the session clock and the spawn/fire/score timers.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::score::ScoreBridge;
use crate::consts::*;
use crate::palette;
use crate::tuning::Tuning;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting on the menu screen
    Menu,
    /// Active gameplay; the only phase in which ticks advance
    Playing,
    /// Run ended
    GameOver,
}

/// Something the host should know about after a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    EnemySpawned { id: u32, x: f32 },
    BulletFired { id: u32 },
    /// An enemy was shot down
    EnemyDestroyed { id: u32, bullet: u32 },
    /// An enemy rammed the player
    PlayerHit { enemy: u32, hp: i32 },
    /// New externally visible score
    ScorePublished { score: u64 },
    /// Fired once per session, on the tick hp first reaches zero
    GameOver { final_score: u64 },
}

/// A rectangular entity: player, enemy, bullet or particle body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Displacement per tick
    pub speed: f32,
    pub color: [f32; 4],
    /// Zero or below means "remove after this tick"
    pub hp: i32,
}

impl Entity {
    /// An enemy entering just above the top edge
    pub fn enemy(id: u32, x: f32, speed: f32) -> Self {
        Self {
            id,
            pos: Vec2::new(x, -ENEMY_SIZE),
            size: Vec2::splat(ENEMY_SIZE),
            speed,
            color: palette::ENEMY,
            hp: 1,
        }
    }

    /// A bullet whose top edge sits at `pos.y`, horizontally centered on `center_x`
    pub fn bullet(id: u32, center_x: f32, top: f32, speed: f32) -> Self {
        Self {
            id,
            pos: Vec2::new(center_x - BULLET_SIZE / 2.0, top),
            size: Vec2::new(BULLET_SIZE, BULLET_LENGTH),
            speed,
            color: palette::BULLET,
            hp: 1,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }
}

/// The player's craft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub ship: Entity,
    /// Internal score; only ever increased by kills
    pub score: u64,
}

impl Player {
    pub fn new(hp: i32) -> Self {
        Self {
            ship: Entity {
                id: 0,
                pos: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
                size: Vec2::splat(PLAYER_SIZE),
                speed: 0.0,
                color: palette::PLAYER,
                hp,
            },
            score: 0,
        }
    }
}

/// A cosmetic explosion fragment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub body: Entity,
    pub vel: Vec2,
    /// 1.0 at birth, removed at zero
    pub life: f32,
    pub max_life: f32,
}

impl Particle {
    pub fn new(id: u32, pos: Vec2, vel: Vec2, color: [f32; 4]) -> Self {
        Self {
            body: Entity {
                id,
                pos,
                size: Vec2::splat(PARTICLE_SIZE),
                speed: 0.0,
                color,
                hp: 1,
            },
            vel,
            life: 1.0,
            max_life: 1.0,
        }
    }

    /// Remaining life as an opacity in [0, 1]
    pub fn alpha(&self) -> f32 {
        if self.max_life <= 0.0 {
            return 0.0;
        }
        (self.life / self.max_life).clamp(0.0, 1.0)
    }
}

/// Complete session state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    pub phase: GamePhase,
    /// Session clock (sum of tick deltas)
    pub time_ms: f64,
    /// Ticks run this session
    pub time_ticks: u64,
    pub player: Player,
    pub enemies: Vec<Entity>,
    pub bullets: Vec<Entity>,
    pub particles: Vec<Particle>,
    /// Session time of the last enemy spawn
    pub last_spawn_ms: Option<f64>,
    /// Session time of the last shot
    pub last_shot_ms: Option<f64>,
    pub score_bridge: ScoreBridge,
    /// Sessions started since creation
    pub sessions: u32,
    next_id: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

impl GameState {
    /// A fresh state sitting on the menu
    pub fn new(tuning: Tuning) -> Self {
        Self {
            phase: GamePhase::Menu,
            time_ms: 0.0,
            time_ticks: 0,
            player: Player::new(tuning.player_hp),
            enemies: Vec::new(),
            bullets: Vec::new(),
            particles: Vec::new(),
            last_spawn_ms: None,
            last_shot_ms: None,
            score_bridge: ScoreBridge::new(tuning.score_sync_interval_ms),
            sessions: 0,
            next_id: 1,
            tuning,
        }
    }

    /// Allocate a new entity ID (0 is the player)
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1).max(1);
        id
    }

    /// Reset everything and enter `Playing`. Restarting never resumes.
    pub fn start_session(&mut self) {
        self.player = Player::new(self.tuning.player_hp);
        self.enemies.clear();
        self.bullets.clear();
        self.particles.clear();
        self.time_ms = 0.0;
        self.time_ticks = 0;
        self.last_spawn_ms = None;
        self.last_shot_ms = None;
        self.score_bridge = ScoreBridge::new(self.tuning.score_sync_interval_ms);
        self.next_id = 1;
        self.sessions += 1;
        self.phase = GamePhase::Playing;

        log::info!("Session {} started (hp {})", self.sessions, self.player.ship.hp);
    }

    /// Return to the menu from `Playing` or `GameOver`. Entity collections
    /// are left untouched. Returns the final score if the bridge still owed
    /// it to the host.
    pub fn stop_session(&mut self) -> Option<u64> {
        match self.phase {
            GamePhase::Playing => log::info!(
                "Session {} stopped after {} ticks, score {}",
                self.sessions,
                self.time_ticks,
                self.player.score
            ),
            GamePhase::GameOver => log::debug!("Leaving game over for the menu"),
            GamePhase::Menu => {}
        }
        self.phase = GamePhase::Menu;
        self.score_bridge.flush(self.player.score, self.time_ms)
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Score as last shown to the outside
    pub fn published_score(&self) -> u64 {
        self.score_bridge.published()
    }
}
