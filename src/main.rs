//! Sky Ace entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use sky_ace::consts::TICK_MS;
    use sky_ace::platform::{InputSampler, client_to_canvas};
    use sky_ace::renderer::{CanvasRenderState, build_frame};
    use sky_ace::sim::{GameEvent, GamePhase, GameState, TickOutcome, tick};
    use sky_ace::{MissionBriefing, Tuning};

    /// Element holding optional tuning overrides as JSON
    const TUNING_ELEMENT_ID: &str = "sky-ace-tuning";
    /// Element holding a pre-fetched briefing as JSON
    const BRIEFING_ELEMENT_ID: &str = "sky-ace-briefing";

    thread_local! {
        static GAME: RefCell<Option<Rc<RefCell<Game>>>> = const { RefCell::new(None) };
    }

    /// Game instance holding all state
    struct Game {
        state: GameState,
        rng: Pcg32,
        input: InputSampler,
        canvas: HtmlCanvasElement,
        render_state: CanvasRenderState,
        briefing: Option<MissionBriefing>,
        /// An animation frame is scheduled
        running: bool,
    }

    impl Game {
        fn new(
            tuning: Tuning,
            seed: u64,
            canvas: HtmlCanvasElement,
            render_state: CanvasRenderState,
        ) -> Self {
            Self {
                state: GameState::new(tuning),
                rng: Pcg32::seed_from_u64(seed),
                input: InputSampler::new(),
                canvas,
                render_state,
                briefing: None,
                running: false,
            }
        }

        /// Map a client-space point onto the playfield and remember it
        fn pointer_at(&mut self, client_x: f32, client_y: f32) {
            let rect = self.canvas.get_bounding_client_rect();
            let mapped = client_to_canvas(
                Vec2::new(client_x, client_y),
                Vec2::new(rect.left() as f32, rect.top() as f32),
                Vec2::new(rect.width() as f32, rect.height() as f32),
                Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32),
            );
            if let Some(pos) = mapped {
                self.input.pointer_moved(pos);
            }
        }

        fn start(&mut self) {
            self.input.reset();
            self.state.start_session();
        }

        /// Run one simulation tick
        fn update(&mut self) -> TickOutcome {
            let input = self.input.sample();
            tick(&mut self.state, &input, TICK_MS, &mut self.rng)
        }

        /// Render the current frame
        fn render(&self, time: f64) {
            let name = self.briefing.as_ref().map(|b| b.name.as_str());
            let cmds = build_frame(&self.state, name, time);
            if let Err(e) = self.render_state.render(&cmds) {
                log::warn!("Render error: {:?}", e);
            }
        }

        /// Push tick events out to the DOM
        fn apply_outcome(&self, outcome: &TickOutcome) {
            for event in &outcome.events {
                match event {
                    GameEvent::ScorePublished { score } => set_hud_score(*score),
                    GameEvent::GameOver { final_score } => {
                        log::info!("Mission failed, final score {}", final_score);
                        update_overlays(GamePhase::GameOver, *final_score);
                    }
                    _ => {}
                }
            }
        }

        fn set_briefing(&mut self, briefing: MissionBriefing) {
            log::info!(
                "Briefing: {} ({}, pilot {})",
                briefing.name,
                briefing.theme.as_str(),
                briefing.pilot_callsign
            );
            show_briefing(&briefing);
            self.briefing = Some(briefing);
        }
    }

    fn document() -> Option<Document> {
        web_sys::window()?.document()
    }

    /// Text content of a JSON `<script>` block, if the page provides one
    fn read_json_block(id: &str) -> Option<String> {
        document()?
            .get_element_by_id(id)?
            .text_content()
            .filter(|s| !s.trim().is_empty())
    }

    fn set_text(id: &str, text: &str) {
        if let Some(el) = document().and_then(|d| d.get_element_by_id(id)) {
            el.set_text_content(Some(text));
        }
    }

    /// Show or hide one of the `.overlay` panels
    fn set_overlay_visible(id: &str, visible: bool) {
        if let Some(el) = document().and_then(|d| d.get_element_by_id(id)) {
            let class = if visible { "overlay" } else { "overlay hidden" };
            let _ = el.set_attribute("class", class);
        }
    }

    fn set_hud_score(score: u64) {
        set_text("hud-score", &score.to_string());
    }

    fn update_overlays(phase: GamePhase, published_score: u64) {
        set_overlay_visible("menu", phase == GamePhase::Menu);
        set_overlay_visible("game-over", phase == GamePhase::GameOver);
        if phase == GamePhase::GameOver {
            set_text("final-score", &published_score.to_string());
        }
    }

    fn show_briefing(briefing: &MissionBriefing) {
        set_text("briefing-name", &briefing.name);
        set_text("briefing-objective", &briefing.objective);
        set_text("briefing-callsign", &briefing.pilot_callsign);
        set_text("briefing-theme", &briefing.theme.as_str().to_uppercase());
    }

    fn load_tuning() -> Tuning {
        let Some(json) = read_json_block(TUNING_ELEMENT_ID) else {
            return Tuning::default();
        };
        match Tuning::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning overrides");
                tuning
            }
            Err(e) => {
                log::error!("Bad tuning JSON, using defaults: {}", e);
                Tuning::default()
            }
        }
    }

    /// Deliver a briefing that arrived after startup
    #[wasm_bindgen]
    pub fn set_mission_briefing(json: &str) {
        let briefing = MissionBriefing::from_json_or_fallback(Some(json));
        GAME.with(|slot| {
            if let Some(game) = slot.borrow().as_ref() {
                game.borrow_mut().set_briefing(briefing);
            }
        });
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Sky Ace starting...");

        let document = document().expect("no document");
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let render_state = match CanvasRenderState::new(&canvas) {
            Ok(r) => r,
            Err(e) => {
                log::error!("Failed to set up canvas: {:?}", e);
                return;
            }
        };

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(
            load_tuning(),
            seed,
            canvas.clone(),
            render_state,
        )));
        log::info!("Game initialized with seed: {}", seed);

        // A briefing may already be on the page; otherwise the placeholder
        // shows until set_mission_briefing is called
        if let Some(json) = read_json_block(BRIEFING_ELEMENT_ID) {
            let briefing = MissionBriefing::from_json_or_fallback(Some(&json));
            game.borrow_mut().set_briefing(briefing);
        }

        GAME.with(|slot| *slot.borrow_mut() = Some(game.clone()));

        setup_input_handlers(&canvas, game.clone());
        setup_buttons(game.clone());

        update_overlays(GamePhase::Menu, 0);
        // Paint the idle playfield behind the menu
        game.borrow().render(js_sys::Date::now());

        log::info!("Sky Ace ready");
    }

    fn start_session(game: &Rc<RefCell<Game>>) {
        let schedule = {
            let mut g = game.borrow_mut();
            g.start();
            set_hud_score(g.state.published_score());
            update_overlays(GamePhase::Playing, 0);
            let schedule = !g.running;
            g.running = true;
            schedule
        };
        if schedule {
            request_animation_frame(game.clone());
        }
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let Some(document) = document() else {
            return;
        };

        if let Some(btn) = document.get_element_by_id("start-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                start_session(&game);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Re-deploy returns to the menu with the current briefing
        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                if let Some(score) = g.state.stop_session() {
                    set_hud_score(score);
                }
                update_overlays(GamePhase::Menu, g.state.published_score());
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        // Mouse move - absolute position anywhere in the window
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                game.borrow_mut()
                    .pointer_at(event.client_x() as f32, event.client_y() as f32);
            });
            let _ = window
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move - first finger steers, page must not scroll
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    game.borrow_mut()
                        .pointer_at(touch.client_x() as f32, touch.client_y() as f32);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                // Steering keys must not scroll the page
                if game.borrow_mut().input.key_down(&event.code()) {
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().input.key_up(&event.code());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let keep_running = {
            let mut g = game.borrow_mut();
            let outcome = g.update();
            g.apply_outcome(&outcome);
            g.render(time);

            // Leaving Playing stops scheduling; the last frame stays on screen
            let playing = g.state.is_playing();
            g.running = playing;
            playing
        };

        if keep_running {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use sky_ace::consts::TICK_MS;
    use sky_ace::sim::{GameEvent, GameState, HeldKeys, TickInput, tick};
    use sky_ace::{MissionBriefing, Tuning};

    /// One minute of play at one tick per frame
    pub const MAX_TICKS: u64 = 60 * 60;
    /// Ticks spent sweeping in each direction
    const SWEEP_TICKS: u64 = 45;

    /// Tuning from the JSON file named by the first argument, if any
    pub fn load_tuning(path: Option<String>) -> Tuning {
        let Some(path) = path else {
            return Tuning::default();
        };
        let parsed = std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|json| Tuning::from_json(&json).map_err(|e| e.to_string()));
        match parsed {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path);
                tuning
            }
            Err(e) => {
                log::error!("Failed to load tuning from {}: {}", path, e);
                Tuning::default()
            }
        }
    }

    /// Sweep left and right across the bottom of the field until the run ends
    pub fn run(tuning: Tuning, seed: u64, max_ticks: u64) -> GameState {
        let briefing = MissionBriefing::from_json_or_fallback(None);
        log::info!("Mission: {} - {}", briefing.name, briefing.objective);

        let mut state = GameState::new(tuning);
        let mut rng = Pcg32::seed_from_u64(seed);
        state.start_session();

        while state.is_playing() && state.time_ticks < max_ticks {
            let sweeping_left = (state.time_ticks / SWEEP_TICKS) % 2 == 0;
            let input = TickInput::keys(HeldKeys {
                left: sweeping_left,
                right: !sweeping_left,
                ..Default::default()
            });

            let outcome = tick(&mut state, &input, TICK_MS, &mut rng);
            for event in &outcome.events {
                match event {
                    GameEvent::ScorePublished { score } => log::info!("Score: {}", score),
                    GameEvent::PlayerHit { hp, .. } => log::warn!("Hit! hp {}", hp),
                    GameEvent::GameOver { final_score } => {
                        log::info!("Game over, final score {}", final_score)
                    }
                    other => log::debug!("{:?}", other),
                }
            }
        }

        // A finished run already flushed its score; keep GameOver for the summary
        if state.is_playing() {
            if let Some(score) = state.stop_session() {
                log::info!("Score: {}", score);
            }
        }
        state
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Sky Ace (native) starting...");
    log::info!("Native mode runs a headless session - run with `trunk serve` for the web version");

    let tuning = headless::load_tuning(std::env::args().nth(1));
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("Seed: {}", seed);

    let state = headless::run(tuning, seed, headless::MAX_TICKS);

    let summary = serde_json::json!({
        "seed": seed,
        "ticks": state.time_ticks,
        "phase": state.phase,
        "score": state.player.score,
        "published_score": state.published_score(),
        "hp": state.player.ship.hp,
        "enemies_on_field": state.enemies.len(),
    });
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to encode summary: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
