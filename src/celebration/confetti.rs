//! Confetti burst layout.
//!
//! Produces one descriptor per piece; the host turns each into a falling
//! element after `delay_ms` and removes it after `fall_seconds`.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// Shape of a confetti burst.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfettiConfig {
    pub piece_count: usize,
    /// Delay between consecutive pieces.
    pub stagger_ms: u32,
    pub palette: Vec<String>,
    pub min_fall_seconds: f32,
    pub fall_spread_seconds: f32,
    pub min_size_px: f32,
    pub size_spread_px: f32,
}

impl Default for ConfettiConfig {
    fn default() -> Self {
        Self {
            piece_count: 100,
            stagger_ms: 50,
            palette: ["#007bff", "#ff69b4", "#f8f9fa", "#6c757d", "#28a745"]
                .into_iter()
                .map(String::from)
                .collect(),
            min_fall_seconds: 3.0,
            fall_spread_seconds: 2.0,
            min_size_px: 5.0,
            size_spread_px: 10.0,
        }
    }
}

/// One falling piece.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfettiPiece {
    /// Delay after the burst starts before this piece appears.
    pub delay_ms: u32,
    /// Horizontal start position in px, within the viewport.
    pub start_x: f32,
    pub color: String,
    pub rotation_deg: f32,
    pub fall_seconds: f32,
    pub size_px: f32,
}

/// Lay out a burst across a viewport `viewport_width` px wide.
pub fn confetti_burst(config: &ConfettiConfig, viewport_width: f32, rng: &mut GameRng) -> Vec<ConfettiPiece> {
    let width = viewport_width.max(0.0);

    (0..config.piece_count)
        .map(|i| {
            let color = rng.choose(&config.palette).cloned().unwrap_or_default();
            ConfettiPiece {
                delay_ms: i as u32 * config.stagger_ms,
                start_x: rng.gen_unit() * width,
                color,
                rotation_deg: rng.gen_unit() * 360.0,
                fall_seconds: config.min_fall_seconds + rng.gen_unit() * config.fall_spread_seconds,
                size_px: config.min_size_px + rng.gen_unit() * config.size_spread_px,
            }
        })
        .collect()
}
