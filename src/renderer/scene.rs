//! Draw-list generation
//!
//! Turns a read-only view of the game state into an ordered list of 2D
//! primitives. Nothing here touches the simulation; the backend only has to
//! know how to paint each [`DrawCmd`].

use glam::Vec2;

use super::colors;
use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::sim::{Entity, GameState};

/// Grid cell size (logical units)
const GRID_SPACING: f32 = 50.0;
/// Grid scroll rate: one unit every this many ms
const GRID_SCROLL_MS_PER_UNIT: f64 = 20.0;
/// Blink half-period for a destroyed craft (ms)
const BLINK_MS: f64 = 100.0;
/// Engine glow radius and its offset above the sprite's bottom edge
const ENGINE_GLOW_RADIUS: f32 = 8.0;
const ENGINE_GLOW_INSET: f32 = 5.0;
/// Depth of the notch cut into the craft's tail
const TAIL_NOTCH: f32 = 10.0;

const HEALTH_PIP_SIZE: f32 = 20.0;
const HEALTH_PIP_STRIDE: f32 = 25.0;
const HUD_MARGIN: f32 = 20.0;
const LABEL_FONT_PX: f32 = 16.0;

/// Shown until a briefing arrives
pub const MISSION_PLACEHOLDER: &str = "Unknown";

/// A single 2D drawing primitive in playfield coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect {
        pos: Vec2,
        size: Vec2,
        color: [f32; 4],
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: [f32; 4],
        width: f32,
    },
    /// Closed, filled polygon
    Polygon { points: Vec<Vec2>, color: [f32; 4] },
    Circle {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
    },
    Text {
        pos: Vec2,
        text: String,
        color: [f32; 4],
        size_px: f32,
    },
}

/// Vertical scroll of the background grid at `time_ms`
pub fn grid_offset(time_ms: f64) -> f32 {
    ((time_ms / GRID_SCROLL_MS_PER_UNIT) % GRID_SPACING as f64) as f32
}

/// Whether a destroyed craft is in the visible half of its blink
fn blink_visible(time_ms: f64) -> bool {
    (time_ms / BLINK_MS).floor() as i64 % 2 == 0
}

/// Build the full frame: background, grid, player, enemies, bullets,
/// particles, objective label, health pips.
///
/// `time_ms` is wall-clock time and only drives decoration.
pub fn build_frame(state: &GameState, mission_name: Option<&str>, time_ms: f64) -> Vec<DrawCmd> {
    let mut cmds = Vec::with_capacity(
        32 + state.enemies.len() + state.bullets.len() + state.particles.len(),
    );

    cmds.push(DrawCmd::Rect {
        pos: Vec2::ZERO,
        size: Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT),
        color: colors::BACKGROUND,
    });
    push_grid(&mut cmds, time_ms);

    let ship = &state.player.ship;
    if ship.is_alive() || blink_visible(time_ms) {
        push_player(&mut cmds, ship);
    }

    for enemy in &state.enemies {
        cmds.push(DrawCmd::Polygon {
            points: enemy_outline(enemy),
            color: enemy.color,
        });
    }

    for bullet in &state.bullets {
        cmds.push(DrawCmd::Rect {
            pos: bullet.pos,
            size: bullet.size,
            color: bullet.color,
        });
    }

    for particle in &state.particles {
        let mut color = particle.body.color;
        color[3] *= particle.alpha();
        cmds.push(DrawCmd::Rect {
            pos: particle.body.pos,
            size: particle.body.size,
            color,
        });
    }

    let name = mission_name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(MISSION_PLACEHOLDER);
    cmds.push(DrawCmd::Text {
        pos: Vec2::new(HUD_MARGIN, CANVAS_HEIGHT - HUD_MARGIN),
        text: format!("CURRENT OBJECTIVE: {}", name),
        color: colors::LABEL,
        size_px: LABEL_FONT_PX,
    });

    for i in 0..ship.hp.max(0) {
        cmds.push(DrawCmd::Rect {
            pos: Vec2::new(HUD_MARGIN + i as f32 * HEALTH_PIP_STRIDE, HUD_MARGIN),
            size: Vec2::splat(HEALTH_PIP_SIZE),
            color: colors::HEALTH,
        });
    }

    cmds
}

fn push_grid(cmds: &mut Vec<DrawCmd>, time_ms: f64) {
    let offset = grid_offset(time_ms);

    let mut x = 0.0;
    while x < CANVAS_WIDTH {
        cmds.push(DrawCmd::Line {
            from: Vec2::new(x, 0.0),
            to: Vec2::new(x, CANVAS_HEIGHT),
            color: colors::GRID,
            width: 1.0,
        });
        x += GRID_SPACING;
    }

    let mut y = 0.0;
    while y < CANVAS_HEIGHT {
        cmds.push(DrawCmd::Line {
            from: Vec2::new(0.0, y + offset),
            to: Vec2::new(CANVAS_WIDTH, y + offset),
            color: colors::GRID,
            width: 1.0,
        });
        y += GRID_SPACING;
    }
}

fn push_player(cmds: &mut Vec<DrawCmd>, ship: &Entity) {
    let Vec2 { x, y } = ship.pos;
    let Vec2 { x: w, y: h } = ship.size;

    // Arrowhead with a notched tail
    cmds.push(DrawCmd::Polygon {
        points: vec![
            Vec2::new(x + w / 2.0, y),
            Vec2::new(x + w, y + h),
            Vec2::new(x + w / 2.0, y + h - TAIL_NOTCH),
            Vec2::new(x, y + h),
        ],
        color: ship.color,
    });
    cmds.push(DrawCmd::Circle {
        center: Vec2::new(x + w / 2.0, y + h - ENGINE_GLOW_INSET),
        radius: ENGINE_GLOW_RADIUS,
        color: colors::ENGINE_GLOW,
    });
}

/// Downward-pointing triangle filling the enemy's box
fn enemy_outline(enemy: &Entity) -> Vec<Vec2> {
    let Vec2 { x, y } = enemy.pos;
    let Vec2 { x: w, y: h } = enemy.size;
    vec![
        Vec2::new(x, y),
        Vec2::new(x + w, y),
        Vec2::new(x + w / 2.0, y + h),
    ]
}
