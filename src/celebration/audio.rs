//! Background music and win-sound settings.
//!
//! Only the settings live here; the host owns the audio elements and
//! applies `effective_volume()` to both the music and the win sound.
//! Playback refusal (autoplay blocking) is the host's concern.

use serde::{Deserialize, Serialize};

/// Shared volume and mute state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioSettings {
    volume: f32,
    muted: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self::new(AudioSettings::DEFAULT_VOLUME)
    }
}

impl AudioSettings {
    /// Initial background-music volume.
    pub const DEFAULT_VOLUME: f32 = 0.3;

    /// Create unmuted settings at `volume` (clamped to `[0, 1]`).
    #[must_use]
    pub fn new(volume: f32) -> Self {
        Self {
            volume: clamp_volume(volume),
            muted: false,
        }
    }

    /// Slider volume, independent of mute.
    #[must_use]
    pub fn volume(&self) -> f32 {
        self.volume
    }

    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Set the slider volume. Out-of-range and NaN input is clamped.
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = clamp_volume(volume);
    }

    /// Flip mute. Returns the new muted state.
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    /// Volume to apply to audio output.
    #[must_use]
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.volume
        }
    }

    /// Glyph for the mute button.
    #[must_use]
    pub fn mute_glyph(&self) -> &'static str {
        if self.muted {
            "🔈"
        } else {
            "🔊"
        }
    }
}

fn clamp_volume(volume: f32) -> f32 {
    if volume.is_nan() {
        0.0
    } else {
        volume.clamp(0.0, 1.0)
    }
}
