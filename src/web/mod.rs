//! Browser bindings for the memory game (feature `wasm`).
//!
//! JS owns the DOM: it forwards clicks to `flip`, calls `advance` from a
//! `requestAnimationFrame` loop with the elapsed milliseconds, and renders
//! whatever `drain` returns.
//!
//! # Quick Start
//!
//! ```js
//! import init, { WebMemoryGame } from "./pkg/bloom_match.js";
//!
//! await init();
//! const game = new WebMemoryGame(null, null, window.innerWidth);
//! game.start();
//!
//! let last = performance.now();
//! function frame(now) {
//!   game.advance(now - last);
//!   last = now;
//!   const { events, flowers, celebration } = JSON.parse(game.drain());
//!   // ...update cards, counters, scrapbook, confetti
//!   requestAnimationFrame(frame);
//! }
//! requestAnimationFrame(frame);
//! ```

mod storage;

pub use storage::LocalStorageScoreStore;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::cards::CardPosition;
use crate::celebration::{Celebration, CelebrationConfig, CelebrationCue};
use crate::core::{GameConfig, GameRng};
use crate::engine::{GameEvent, MatchEngine};
use crate::rewards::FlowerCollection;
use crate::session::{best_score_label, format_clock};

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
}

/// Flower awarded on this frame.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CollectedFlower {
    key: String,
    name: String,
    glyph: String,
    notification: String,
}

/// Everything that happened since the last `drain`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Frame {
    events: Vec<GameEvent>,
    flowers: Vec<CollectedFlower>,
    celebration: Option<CelebrationCue>,
    collection_status: String,
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Memory game with flower rewards and celebration, driven from JS.
#[wasm_bindgen]
pub struct WebMemoryGame {
    engine: MatchEngine<LocalStorageScoreStore>,
    flowers: FlowerCollection,
    celebration: Celebration,
    /// Sub-millisecond remainder carried between `advance` calls.
    carry_ms: f64,
}

#[wasm_bindgen]
impl WebMemoryGame {
    /// Create a game. Both configs are optional JSON strings.
    #[wasm_bindgen(constructor)]
    pub fn new(
        game_config: Option<String>,
        celebration_config: Option<String>,
        viewport_width: f32,
    ) -> Result<WebMemoryGame, JsValue> {
        let config = match game_config {
            Some(json) => GameConfig::from_json(&json).map_err(to_js)?,
            None => GameConfig::default(),
        };
        let celebration_config = match celebration_config {
            Some(json) => CelebrationConfig::from_json(&json).map_err(to_js)?,
            None => CelebrationConfig::default(),
        };

        let seed = GameRng::from_entropy().seed();
        let flowers = FlowerCollection::new(config.alphabet.clone(), seed);
        let engine = MatchEngine::new(config, LocalStorageScoreStore::default(), seed).map_err(to_js)?;

        Ok(Self {
            engine,
            flowers,
            celebration: Celebration::new(celebration_config, seed, viewport_width),
            carry_ms: 0.0,
        })
    }

    /// Deal a new game.
    pub fn start(&mut self) {
        self.engine.start();
    }

    /// Abandon the current game and deal a new one.
    pub fn reset(&mut self) {
        self.engine.reset();
    }

    /// Flip the card at `position`. Returns false if the flip was ignored.
    pub fn flip(&mut self, position: u8) -> bool {
        self.engine.flip(CardPosition::new(position)).is_accepted()
    }

    /// Advance the game clock by wall-clock milliseconds.
    pub fn advance(&mut self, delta_ms: f64) {
        if !delta_ms.is_finite() || delta_ms <= 0.0 {
            return;
        }
        let total = self.carry_ms + delta_ms;
        let whole = total.floor();
        self.carry_ms = total - whole;
        self.engine.advance(whole as u64);
    }

    /// Drain pending notifications as a JSON `Frame`.
    pub fn drain(&mut self) -> Result<String, JsValue> {
        let events = self.engine.drain_events();
        let mut flowers = Vec::new();
        let mut celebration = None;

        for event in &events {
            if let Some(symbol) = self.flowers.observe(event) {
                if let Some(flower) = self.flowers.flower(symbol) {
                    flowers.push(CollectedFlower {
                        key: flower.key.clone(),
                        name: flower.name.clone(),
                        glyph: flower.glyph.clone(),
                        notification: FlowerCollection::notification(flower),
                    });
                }
            }
            if let Some(cue) = self.celebration.observe(event) {
                celebration = Some(cue);
            }
        }

        let frame = Frame {
            events,
            flowers,
            celebration,
            collection_status: self.flowers.status_message(),
        };
        serde_json::to_string(&frame).map_err(to_js)
    }

    /// Current cards and counters as JSON.
    pub fn snapshot(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.engine.snapshot()).map_err(to_js)
    }

    /// Glyph shown on a card face.
    pub fn glyph(&self, position: u8) -> Option<String> {
        let card = self.engine.card(CardPosition::new(position))?;
        self.engine
            .config()
            .alphabet
            .get(card.symbol)
            .map(|f| f.glyph.clone())
    }

    pub fn moves_label(&self) -> String {
        self.engine.moves().to_string()
    }

    pub fn time_label(&self) -> String {
        format_clock(self.engine.elapsed_seconds())
    }

    pub fn best_score_label(&self) -> String {
        best_score_label(self.engine.best_score())
    }

    /// Flip mute. Returns the new mute-button glyph.
    pub fn toggle_mute(&mut self) -> String {
        let audio = self.celebration.audio_mut();
        audio.toggle_mute();
        audio.mute_glyph().to_string()
    }

    /// Set the slider volume. Returns the volume to apply to audio elements.
    pub fn set_volume(&mut self, volume: f32) -> f32 {
        let audio = self.celebration.audio_mut();
        audio.set_volume(volume);
        audio.effective_volume()
    }

    pub fn effective_volume(&self) -> f32 {
        self.celebration.audio().effective_volume()
    }

    pub fn set_viewport_width(&mut self, width: f32) {
        self.celebration.set_viewport_width(width);
    }
}
