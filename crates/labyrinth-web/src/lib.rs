//! Browser bridge for the word labyrinth.
//!
//! wasm-bindgen cannot export a stateful struct with a single global instance, so
//! the runner lives in a `thread_local!` and every export is a free function.
//! Game state reaches JS as JSON: poll `get_snapshot_json` after `game_tick`, and
//! `drain_events_json` for one-shot effects (flashes, messages, level up).

pub mod runner;

pub use runner::GameRunner;

use std::cell::RefCell;

use labyrinth_engine::{Command, GameConfig, InputEvent, PointerKind};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<GameRunner>> = const { RefCell::new(None) };
}

fn with_runner<R>(f: impl FnOnce(&mut GameRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow.as_mut().expect("Game not initialized. Call game_init() first.");
        f(runner)
    })
}

fn random_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}

fn install(config: GameConfig) {
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(GameRunner::new(config));
    });
}

/// Set up logging and a session with default settings and a random seed.
#[wasm_bindgen]
pub fn game_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    install(GameConfig {
        seed: random_seed(),
        ..GameConfig::default()
    });
    log::info!("word-labyrinth: initialized");
}

/// Like `game_init`, with settings from JSON. A config without a `seed` gets a random one.
#[wasm_bindgen]
pub fn game_init_with_config(json: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let mut config = GameConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let seeded = serde_json::from_str::<serde_json::Value>(json)
        .map(|v| v.get("seed").is_some())
        .unwrap_or(false);
    if !seeded {
        config.seed = random_seed();
    }
    install(config);
    log::info!("word-labyrinth: initialized from config");
    Ok(())
}

#[wasm_bindgen]
pub fn game_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

/// Board placement in pointer coordinates. Call again whenever the board is re-laid out.
#[wasm_bindgen]
pub fn game_set_layout(origin_x: f32, origin_y: f32, cell_size: f32) {
    with_runner(|r| r.set_layout(origin_x, origin_y, cell_size));
}

// ---- Word list ----

#[wasm_bindgen]
pub fn game_load_dictionary(text: &str) {
    with_runner(|r| r.load_dictionary(text));
}

#[wasm_bindgen]
pub fn game_dictionary_failed(reason: &str) {
    with_runner(|r| r.dictionary_failed(reason));
}

// ---- Input ----

fn pointer_kind(touch: bool) -> PointerKind {
    if touch {
        PointerKind::Touch
    } else {
        PointerKind::Mouse
    }
}

#[wasm_bindgen]
pub fn game_pointer_down(x: f32, y: f32, touch: bool) {
    with_runner(|r| r.push_input(InputEvent::PointerDown { x, y, kind: pointer_kind(touch) }));
}

#[wasm_bindgen]
pub fn game_pointer_move(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
}

#[wasm_bindgen]
pub fn game_pointer_up() {
    with_runner(|r| r.push_input(InputEvent::PointerUp));
}

#[wasm_bindgen]
pub fn game_pointer_cancel() {
    with_runner(|r| r.push_input(InputEvent::PointerCancel));
}

/// UI button by numeric id (1 start, 2 pause, 3 submit, 4 clear, 5 shuffle, 6 restart).
#[wasm_bindgen]
pub fn game_command(kind: u32) {
    match Command::from_kind(kind) {
        Some(command) => with_runner(|r| r.push_input(InputEvent::Command(command))),
        None => log::warn!("Unknown command id {kind}"),
    }
}

// ---- State ----

#[wasm_bindgen]
pub fn get_snapshot_json() -> String {
    with_runner(|r| r.snapshot_json())
}

#[wasm_bindgen]
pub fn drain_events_json() -> String {
    with_runner(|r| r.drain_events_json())
}
