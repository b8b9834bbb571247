//! Win celebration: win sound cue plus a confetti burst.
//!
//! `Celebration` listens to engine events and turns the win dialog opening
//! into a `CelebrationCue` for the host to play.

pub mod audio;
pub mod confetti;

use serde::{Deserialize, Serialize};

pub use audio::AudioSettings;
pub use confetti::{confetti_burst, ConfettiConfig, ConfettiPiece};

use crate::core::{ConfigError, GameRng};
use crate::engine::GameEvent;

/// Celebration configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CelebrationConfig {
    pub initial_volume: f32,
    pub confetti: ConfettiConfig,
}

impl Default for CelebrationConfig {
    fn default() -> Self {
        Self {
            initial_volume: AudioSettings::DEFAULT_VOLUME,
            confetti: ConfettiConfig::default(),
        }
    }
}

impl CelebrationConfig {
    /// Parse a JSON configuration. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// What the host should do when a game is won.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CelebrationCue {
    /// Volume for the win sound (0 when muted).
    pub win_sound_volume: f32,
    pub confetti: Vec<ConfettiPiece>,
}

/// Audio settings plus confetti generation.
#[derive(Clone, Debug)]
pub struct Celebration {
    config: CelebrationConfig,
    audio: AudioSettings,
    rng: GameRng,
    viewport_width: f32,
}

impl Celebration {
    /// Create a celebration for a viewport `viewport_width` px wide.
    #[must_use]
    pub fn new(config: CelebrationConfig, seed: u64, viewport_width: f32) -> Self {
        Self {
            audio: AudioSettings::new(config.initial_volume),
            config,
            rng: GameRng::new(seed).for_context("confetti"),
            viewport_width,
        }
    }

    #[must_use]
    pub fn audio(&self) -> &AudioSettings {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut AudioSettings {
        &mut self.audio
    }

    /// Track viewport resizes.
    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = width;
    }

    /// React to an engine event. Only `WinRevealed` produces a cue.
    pub fn observe(&mut self, event: &GameEvent) -> Option<CelebrationCue> {
        match event {
            GameEvent::WinRevealed { .. } => Some(self.cue()),
            _ => None,
        }
    }

    /// Build a cue unconditionally.
    pub fn cue(&mut self) -> CelebrationCue {
        CelebrationCue {
            win_sound_volume: self.audio.effective_volume(),
            confetti: confetti_burst(&self.config.confetti, self.viewport_width, &mut self.rng),
        }
    }
}
