//! Fixed timestep simulation tick
//!
//! One call advances the session by one step. The phases run in a fixed order
//! because later phases read what earlier ones wrote:
//! spawn → move player → auto-fire → advance → prune → bullet hits →
//! score sync → player hits → cleanup.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{clamp_to_playfield, entities_overlap};
use super::rng::RandomSource;
use super::state::{Entity, GameEvent, GamePhase, GameState, Particle};
use crate::consts::*;
use crate::palette;

/// Directional keys currently held down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl HeldKeys {
    pub fn any(&self) -> bool {
        self.left || self.right || self.up || self.down
    }

    /// Unit step per axis; opposite keys cancel
    pub fn axis(&self) -> Vec2 {
        let x = self.right as i32 - self.left as i32;
        let y = self.down as i32 - self.up as i32;
        Vec2::new(x as f32, y as f32)
    }
}

/// How the player wants to move this tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Steering {
    /// Glide toward a canvas-space point (craft center)
    Pointer(Vec2),
    /// Step along held directions
    Keys(HeldKeys),
}

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    pub steering: Steering,
}

impl Default for TickInput {
    fn default() -> Self {
        Self::keys(HeldKeys::default())
    }
}

impl TickInput {
    pub fn pointer(target: Vec2) -> Self {
        Self {
            steering: Steering::Pointer(target),
        }
    }

    pub fn keys(keys: HeldKeys) -> Self {
        Self {
            steering: Steering::Keys(keys),
        }
    }
}

/// What happened during a tick, in order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickOutcome {
    pub events: Vec<GameEvent>,
}

impl TickOutcome {
    /// Latest score published this tick
    pub fn published_score(&self) -> Option<u64> {
        self.events.iter().rev().find_map(|e| match e {
            GameEvent::ScorePublished { score } => Some(*score),
            _ => None,
        })
    }

    pub fn is_game_over(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, GameEvent::GameOver { .. }))
    }

    fn push(&mut self, event: GameEvent) {
        log::trace!("{:?}", event);
        self.events.push(event);
    }
}

/// True if a timer that last fired at `last` may fire again at `now`
#[inline]
fn interval_elapsed(last: Option<f64>, now: f64, interval: f64) -> bool {
    last.is_none_or(|t| now - t > interval)
}

/// Advance the game state by one step of `dt_ms`.
///
/// Does nothing unless the session is `Playing`, so a stopped or finished
/// session keeps its last computed entities.
pub fn tick<R: RandomSource + ?Sized>(
    state: &mut GameState,
    input: &TickInput,
    dt_ms: f64,
    rng: &mut R,
) -> TickOutcome {
    let mut outcome = TickOutcome::default();
    if state.phase != GamePhase::Playing {
        return outcome;
    }

    state.time_ticks += 1;
    state.time_ms += dt_ms;
    let now = state.time_ms;

    spawn_enemy(state, now, rng, &mut outcome);
    move_player(state, input);
    auto_fire(state, now, &mut outcome);
    advance(state);
    prune(state);
    collide_bullets(state, rng, &mut outcome);
    sync_score(state, now, &mut outcome);
    collide_player(state, rng, &mut outcome);
    cleanup(state);

    outcome
}

fn spawn_enemy<R: RandomSource + ?Sized>(
    state: &mut GameState,
    now: f64,
    rng: &mut R,
    outcome: &mut TickOutcome,
) {
    if !interval_elapsed(state.last_spawn_ms, now, state.tuning.spawn_interval_ms) {
        return;
    }

    let x = rng.next_f32() * (CANVAS_WIDTH - ENEMY_SIZE);
    let speed = state.tuning.enemy_base_speed + rng.next_f32() * state.tuning.enemy_speed_jitter;
    let id = state.next_entity_id();
    state.enemies.push(Entity::enemy(id, x, speed));
    state.last_spawn_ms = Some(now);

    log::debug!("Enemy {} spawned at x={:.1}, speed {:.2}", id, x, speed);
    outcome.push(GameEvent::EnemySpawned { id, x });
}

fn move_player(state: &mut GameState, input: &TickInput) {
    let ship = &mut state.player.ship;

    match input.steering {
        Steering::Pointer(target) => {
            // Exponential glide so the craft trails the cursor without overshoot
            let goal = target - ship.size * 0.5;
            ship.pos += (goal - ship.pos) * state.tuning.pointer_smoothing;
        }
        Steering::Keys(keys) => {
            ship.pos += keys.axis() * state.tuning.player_key_speed;
        }
    }

    ship.pos = clamp_to_playfield(ship.pos, ship.size);
}

fn auto_fire(state: &mut GameState, now: f64, outcome: &mut TickOutcome) {
    if !interval_elapsed(state.last_shot_ms, now, state.tuning.fire_cooldown_ms) {
        return;
    }

    let ship = &state.player.ship;
    let (center_x, top) = (ship.center().x, ship.pos.y);
    let id = state.next_entity_id();
    state
        .bullets
        .push(Entity::bullet(id, center_x, top, state.tuning.bullet_speed));
    state.last_shot_ms = Some(now);
    outcome.push(GameEvent::BulletFired { id });
}

fn advance(state: &mut GameState) {
    for bullet in &mut state.bullets {
        bullet.pos.y -= bullet.speed;
    }
    for enemy in &mut state.enemies {
        enemy.pos.y += enemy.speed;
    }
    let decay = state.tuning.particle_decay;
    for particle in &mut state.particles {
        particle.body.pos += particle.vel;
        particle.life -= decay;
    }
}

fn prune(state: &mut GameState) {
    state
        .bullets
        .retain(|b| b.is_alive() && b.pos.y > BULLET_PRUNE_Y);
    state.particles.retain(|p| p.life > 0.0);
}

fn collide_bullets<R: RandomSource + ?Sized>(
    state: &mut GameState,
    rng: &mut R,
    outcome: &mut TickOutcome,
) {
    let mut blasts: Vec<Vec2> = Vec::new();

    for bullet in state.bullets.iter_mut() {
        if !bullet.is_alive() {
            continue;
        }
        // A zeroed enemy can't be hit again, and a bullet stops at its first hit
        if let Some(enemy) = state
            .enemies
            .iter_mut()
            .find(|e| e.is_alive() && entities_overlap(bullet, e))
        {
            enemy.hp = 0;
            bullet.hp = 0;
            bullet.pos.y = BULLET_PARK_Y;
            blasts.push(enemy.center());
            outcome.push(GameEvent::EnemyDestroyed {
                id: enemy.id,
                bullet: bullet.id,
            });
        }
    }

    state.player.score += state.tuning.kill_score * blasts.len() as u64;
    for center in blasts {
        spawn_burst(state, center, palette::ENEMY, rng);
    }
}

fn sync_score(state: &mut GameState, now: f64, outcome: &mut TickOutcome) {
    if let Some(score) = state.score_bridge.poll(state.player.score, now) {
        outcome.push(GameEvent::ScorePublished { score });
    }
}

fn collide_player<R: RandomSource + ?Sized>(
    state: &mut GameState,
    rng: &mut R,
    outcome: &mut TickOutcome,
) {
    let ship = state.player.ship.clone();
    let mut rammed: Vec<u32> = Vec::new();

    for enemy in state.enemies.iter_mut() {
        if enemy.is_alive() && entities_overlap(enemy, &ship) {
            enemy.hp = 0;
            rammed.push(enemy.id);
        }
    }

    for enemy in rammed {
        state.player.ship.hp -= 1;
        outcome.push(GameEvent::PlayerHit {
            enemy,
            hp: state.player.ship.hp,
        });
        spawn_burst(state, ship.center(), palette::PLAYER, rng);
    }

    if state.player.ship.hp <= 0 && state.phase == GamePhase::Playing {
        state.phase = GamePhase::GameOver;
        if let Some(score) = state.score_bridge.flush(state.player.score, state.time_ms) {
            outcome.push(GameEvent::ScorePublished { score });
        }
        let final_score = state.player.score;
        log::info!(
            "Game over after {} ticks, final score {}",
            state.time_ticks,
            final_score
        );
        outcome.push(GameEvent::GameOver { final_score });
    }
}

fn cleanup(state: &mut GameState) {
    state
        .enemies
        .retain(|e| e.is_alive() && e.pos.y <= CANVAS_HEIGHT);
}

/// Scatter a burst of particles from `center` with random velocities
fn spawn_burst<R: RandomSource + ?Sized>(
    state: &mut GameState,
    center: Vec2,
    color: [f32; 4],
    rng: &mut R,
) {
    let spread = state.tuning.burst_spread;
    for _ in 0..state.tuning.burst_count {
        let vel = Vec2::new(
            (rng.next_f32() - 0.5) * spread,
            (rng.next_f32() - 0.5) * spread,
        );
        let id = state.next_entity_id();
        state.particles.push(Particle::new(id, center, vel, color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::SequenceRandom;
    use crate::tuning::Tuning;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    /// A started session with spawning and auto-fire switched off
    fn quiet_session() -> GameState {
        let mut state = GameState::new(Tuning {
            spawn_interval_ms: f64::INFINITY,
            fire_cooldown_ms: f64::INFINITY,
            ..Default::default()
        });
        state.start_session();
        state.last_spawn_ms = Some(0.0);
        state.last_shot_ms = Some(0.0);
        state
    }

    fn place_enemy(state: &mut GameState, pos: Vec2, speed: f32) -> u32 {
        let id = state.next_entity_id();
        let mut enemy = Entity::enemy(id, pos.x, speed);
        enemy.pos.y = pos.y;
        state.enemies.push(enemy);
        id
    }

    fn place_bullet(state: &mut GameState, pos: Vec2) -> u32 {
        let id = state.next_entity_id();
        let mut bullet = Entity::bullet(id, 0.0, pos.y, 0.0);
        bullet.pos.x = pos.x;
        state.bullets.push(bullet);
        id
    }

    fn count(outcome: &TickOutcome, pred: impl Fn(&GameEvent) -> bool) -> usize {
        outcome.events.iter().filter(|e| pred(e)).count()
    }

    #[test]
    fn test_tick_outside_playing_is_noop() {
        let mut state = GameState::default();
        let mut rng = SequenceRandom::constant(0.5);
        let before = state.clone();

        let outcome = tick(&mut state, &TickInput::default(), TICK_MS, &mut rng);
        assert!(outcome.events.is_empty());
        assert_eq!(state, before);
    }

    #[test]
    fn test_first_tick_spawns_and_fires() {
        let mut state = GameState::default();
        state.start_session();
        let mut rng = SequenceRandom::constant(0.5);

        let outcome = tick(&mut state, &TickInput::default(), TICK_MS, &mut rng);

        assert_eq!(state.enemies.len(), 1);
        let enemy = &state.enemies[0];
        assert_eq!(enemy.pos.x, 0.5 * (CANVAS_WIDTH - ENEMY_SIZE));
        assert_eq!(enemy.speed, 7.5);
        assert_eq!(enemy.pos.y, -ENEMY_SIZE + 7.5);

        assert_eq!(state.bullets.len(), 1);
        assert_eq!(state.bullets[0].pos, Vec2::new(417.0, 480.0));

        assert_eq!(count(&outcome, |e| matches!(e, GameEvent::EnemySpawned { .. })), 1);
        assert_eq!(count(&outcome, |e| matches!(e, GameEvent::BulletFired { .. })), 1);
    }

    #[test]
    fn test_spawn_interval() {
        let mut state = GameState::default();
        state.start_session();
        let mut rng = SequenceRandom::constant(0.25);

        let mut spawns = 0;
        for _ in 0..100 {
            let outcome = tick(&mut state, &TickInput::default(), TICK_MS, &mut rng);
            spawns += count(&outcome, |e| matches!(e, GameEvent::EnemySpawned { .. }));
        }
        // Ticks 1, 52 (816 ms later): 1600 ms of session time
        assert_eq!(spawns, 2);
    }

    #[test]
    fn test_constant_rng_spawns_at_fixed_x() {
        let mut state = GameState::default();
        state.start_session();
        let mut rng = SequenceRandom::constant(0.1);

        for _ in 0..300 {
            let outcome = tick(&mut state, &TickInput::default(), TICK_MS, &mut rng);
            for event in &outcome.events {
                if let GameEvent::EnemySpawned { x, .. } = event {
                    assert_eq!(*x, 0.1 * (CANVAS_WIDTH - ENEMY_SIZE));
                }
            }
            if !state.is_playing() {
                break;
            }
        }
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut a = GameState::default();
        let mut b = GameState::default();
        a.start_session();
        b.start_session();
        let mut rng_a = Pcg32::seed_from_u64(42);
        let mut rng_b = Pcg32::seed_from_u64(42);

        let left = TickInput::keys(HeldKeys {
            left: true,
            ..Default::default()
        });
        for i in 0..400 {
            let input = if i % 60 < 30 { left } else { TickInput::default() };
            let out_a = tick(&mut a, &input, TICK_MS, &mut rng_a);
            let out_b = tick(&mut b, &input, TICK_MS, &mut rng_b);
            assert_eq!(out_a, out_b);
        }
        assert_eq!(a, b);
    }

    #[test]
    fn test_enemy_falls_through_untouched() {
        let mut state = quiet_session();
        state.player.ship.pos = Vec2::new(100.0, 500.0);
        let id = place_enemy(&mut state, Vec2::new(400.0, -35.0), 6.0);
        let mut rng = SequenceRandom::constant(0.5);

        for _ in 0..105 {
            tick(&mut state, &TickInput::default(), TICK_MS, &mut rng);
        }
        let enemy = state.enemies.iter().find(|e| e.id == id).unwrap();
        assert_eq!(enemy.pos.y, 595.0);

        tick(&mut state, &TickInput::default(), TICK_MS, &mut rng);
        assert!(state.enemies.iter().all(|e| e.id != id));
        assert_eq!(state.player.score, 0);
        assert_eq!(state.player.ship.hp, 3);
    }

    #[test]
    fn test_overlapping_bullets_credit_once() {
        let mut state = quiet_session();
        let enemy = place_enemy(&mut state, Vec2::new(300.0, 200.0), 0.0);
        for dx in [0.0, 10.0, 20.0] {
            place_bullet(&mut state, Vec2::new(300.0 + dx, 210.0));
        }
        let mut rng = SequenceRandom::constant(0.5);

        let outcome = tick(&mut state, &TickInput::default(), TICK_MS, &mut rng);

        assert_eq!(state.player.score, 100);
        let destroyed = count(&outcome, |e| {
            matches!(e, GameEvent::EnemyDestroyed { id, .. } if *id == enemy)
        });
        assert_eq!(destroyed, 1);
        assert!(state.enemies.is_empty());
        assert_eq!(state.particles.len(), 12);
        assert_eq!(state.bullets.iter().filter(|b| b.is_alive()).count(), 2);

        // The spent bullet is parked off-screen until the next prune
        let spent: Vec<_> = state.bullets.iter().filter(|b| !b.is_alive()).collect();
        assert_eq!(spent.len(), 1);
        assert_eq!(spent[0].pos.y, BULLET_PARK_Y);

        tick(&mut state, &TickInput::default(), TICK_MS, &mut rng);
        assert_eq!(state.bullets.len(), 2);
        assert_eq!(state.player.score, 100);
    }

    #[test]
    fn test_bullet_hits_one_enemy() {
        let mut state = quiet_session();
        place_enemy(&mut state, Vec2::new(300.0, 200.0), 0.0);
        place_enemy(&mut state, Vec2::new(302.0, 205.0), 0.0);
        place_bullet(&mut state, Vec2::new(310.0, 210.0));
        let mut rng = SequenceRandom::constant(0.5);

        tick(&mut state, &TickInput::default(), TICK_MS, &mut rng);
        assert_eq!(state.player.score, 100);
        assert_eq!(state.enemies.len(), 1);
    }

    #[test]
    fn test_touching_bullet_misses() {
        let mut state = quiet_session();
        place_enemy(&mut state, Vec2::new(300.0, 200.0), 0.0);
        // Bullet's left edge sits exactly on the enemy's right edge
        place_bullet(&mut state, Vec2::new(335.0, 210.0));
        let mut rng = SequenceRandom::constant(0.5);

        tick(&mut state, &TickInput::default(), TICK_MS, &mut rng);
        assert_eq!(state.player.score, 0);
        assert_eq!(state.enemies.len(), 1);
    }

    #[test]
    fn test_three_rams_end_the_game_once() {
        let mut state = quiet_session();
        let mut rng = SequenceRandom::constant(0.5);
        let mut game_overs = 0;

        for expected_hp in [2, 1, 0] {
            let at = state.player.ship.pos;
            place_enemy(&mut state, at, 0.0);
            let outcome = tick(&mut state, &TickInput::default(), TICK_MS, &mut rng);
            assert_eq!(state.player.ship.hp, expected_hp);
            assert!(state.enemies.is_empty());
            game_overs += count(&outcome, |e| matches!(e, GameEvent::GameOver { .. }));
        }
        assert_eq!(game_overs, 1);
        assert_eq!(state.phase, GamePhase::GameOver);

        // Frozen from here on
        let at = state.player.ship.pos;
        place_enemy(&mut state, at, 0.0);
        let frozen = state.clone();
        let outcome = tick(&mut state, &TickInput::default(), TICK_MS, &mut rng);
        assert!(outcome.events.is_empty());
        assert_eq!(state, frozen);
    }

    #[test]
    fn test_simultaneous_rams_single_game_over() {
        let mut state = quiet_session();
        let at = state.player.ship.pos;
        for _ in 0..5 {
            place_enemy(&mut state, at, 0.0);
        }
        let mut rng = SequenceRandom::constant(0.5);

        let outcome = tick(&mut state, &TickInput::default(), TICK_MS, &mut rng);
        assert_eq!(state.player.ship.hp, -2);
        assert_eq!(count(&outcome, |e| matches!(e, GameEvent::PlayerHit { .. })), 5);
        assert_eq!(count(&outcome, |e| matches!(e, GameEvent::GameOver { .. })), 1);
        assert!(outcome.is_game_over());
    }

    #[test]
    fn test_score_flushed_on_game_over() {
        let mut state = quiet_session();
        let mut rng = SequenceRandom::constant(0.5);

        place_enemy(&mut state, Vec2::new(100.0, 100.0), 0.0);
        place_bullet(&mut state, Vec2::new(110.0, 110.0));
        let outcome = tick(&mut state, &TickInput::default(), TICK_MS, &mut rng);
        assert_eq!(outcome.published_score(), Some(100));

        // Next kill lands inside the throttle window, then the player dies
        state.player.ship.hp = 1;
        place_enemy(&mut state, Vec2::new(100.0, 100.0), 0.0);
        place_bullet(&mut state, Vec2::new(110.0, 110.0));
        let at = state.player.ship.pos;
        place_enemy(&mut state, at, 0.0);
        let outcome = tick(&mut state, &TickInput::default(), TICK_MS, &mut rng);

        let tail: Vec<_> = outcome.events.iter().rev().take(2).cloned().collect();
        assert_eq!(
            tail,
            vec![
                GameEvent::GameOver { final_score: 200 },
                GameEvent::ScorePublished { score: 200 },
            ]
        );
        assert_eq!(state.published_score(), 200);
    }

    #[test]
    fn test_fire_rate_is_bounded() {
        let mut state = GameState::new(Tuning {
            spawn_interval_ms: f64::INFINITY,
            ..Default::default()
        });
        state.start_session();
        state.last_spawn_ms = Some(0.0);
        let mut rng = SequenceRandom::constant(0.5);

        let mut shots = 0;
        while state.time_ms + TICK_MS <= 1000.0 {
            let outcome = tick(&mut state, &TickInput::default(), TICK_MS, &mut rng);
            shots += count(&outcome, |e| matches!(e, GameEvent::BulletFired { .. }));
        }
        assert!(shots <= 1000 / 100 + 1);
        // 16 ms ticks fire every 7th tick (112 ms)
        assert_eq!(shots, 9);
    }

    #[test]
    fn test_pointer_glide() {
        let mut state = quiet_session();
        let mut rng = SequenceRandom::constant(0.5);
        // Aim the craft's center at (120, 120): goal top-left is (100, 100)
        let input = TickInput::pointer(Vec2::new(120.0, 120.0));

        tick(&mut state, &input, TICK_MS, &mut rng);
        assert_eq!(state.player.ship.pos, Vec2::new(250.0, 300.0));
        tick(&mut state, &input, TICK_MS, &mut rng);
        assert_eq!(state.player.ship.pos, Vec2::new(175.0, 200.0));
    }

    #[test]
    fn test_diagonal_keys_and_clamp() {
        let mut state = quiet_session();
        let mut rng = SequenceRandom::constant(0.5);
        let input = TickInput::keys(HeldKeys {
            right: true,
            down: true,
            ..Default::default()
        });

        tick(&mut state, &input, TICK_MS, &mut rng);
        assert_eq!(state.player.ship.pos, Vec2::new(410.0, 510.0));

        for _ in 0..100 {
            tick(&mut state, &input, TICK_MS, &mut rng);
        }
        assert_eq!(state.player.ship.pos, Vec2::new(760.0, 560.0));
    }

    #[test]
    fn test_particles_fade_out() {
        let mut state = quiet_session();
        place_enemy(&mut state, Vec2::new(300.0, 200.0), 0.0);
        place_bullet(&mut state, Vec2::new(310.0, 210.0));
        let mut rng = SequenceRandom::constant(0.75);

        tick(&mut state, &TickInput::default(), TICK_MS, &mut rng);
        assert_eq!(state.particles.len(), 12);
        let p = &state.particles[0];
        assert_eq!(p.body.pos, Vec2::new(317.5, 217.5));
        assert_eq!(p.vel, Vec2::new(3.75, 3.75));

        // life: 1.0 - 0.08 * n stays positive for 12 more ticks
        for _ in 0..12 {
            tick(&mut state, &TickInput::default(), TICK_MS, &mut rng);
        }
        assert_eq!(state.particles.len(), 12);
        tick(&mut state, &TickInput::default(), TICK_MS, &mut rng);
        assert!(state.particles.is_empty());
    }

    #[test]
    fn test_stopped_session_keeps_entities() {
        let mut state = GameState::default();
        state.start_session();
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..20 {
            tick(&mut state, &TickInput::default(), TICK_MS, &mut rng);
        }
        state.stop_session();
        let snapshot = state.clone();

        let outcome = tick(&mut state, &TickInput::default(), TICK_MS, &mut rng);
        assert!(outcome.events.is_empty());
        assert_eq!(state, snapshot);
        assert!(!state.bullets.is_empty());
    }

    fn steering_strategy() -> impl Strategy<Value = TickInput> {
        prop_oneof![
            (-200.0f32..1000.0, -200.0f32..800.0)
                .prop_map(|(x, y)| TickInput::pointer(Vec2::new(x, y))),
            (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
                |(left, right, up, down)| TickInput::keys(HeldKeys {
                    left,
                    right,
                    up,
                    down
                })
            ),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_session_invariants(
            seed in any::<u64>(),
            inputs in prop::collection::vec(steering_strategy(), 1..400),
        ) {
            let mut state = GameState::default();
            state.start_session();
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut last_published = 0u64;
            let mut kills = 0u64;
            let mut game_overs = 0;

            for input in &inputs {
                let score_before = state.player.score;
                let outcome = tick(&mut state, input, TICK_MS, &mut rng);

                let ship = &state.player.ship;
                prop_assert!(ship.pos.x >= 0.0 && ship.pos.x <= CANVAS_WIDTH - ship.size.x);
                prop_assert!(ship.pos.y >= 0.0 && ship.pos.y <= CANVAS_HEIGHT - ship.size.y);

                prop_assert!(state.player.score >= score_before);
                kills += outcome.events.iter()
                    .filter(|e| matches!(e, GameEvent::EnemyDestroyed { .. }))
                    .count() as u64;
                prop_assert_eq!(state.player.score, kills * 100);

                if let Some(p) = outcome.published_score() {
                    prop_assert!(p >= last_published);
                    prop_assert!(p <= state.player.score);
                    last_published = p;
                }

                // No zeroed enemy survives a tick
                prop_assert!(state.enemies.iter().all(|e| e.is_alive()));

                if outcome.is_game_over() {
                    game_overs += 1;
                    prop_assert_eq!(state.published_score(), state.player.score);
                }
            }
            prop_assert!(game_overs <= 1);
        }
    }
}
