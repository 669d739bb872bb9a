//! Widget tuning: timings, storage keys, default anchors
//!
//! `Default` carries the production values; every field can be overridden
//! from JSON with the rest falling back to defaults.

use serde::Deserialize;

use crate::primitives::{Breakpoint, Position, Viewport};

use super::scroll::ScrollPolicy;

/// localStorage keys for the two persisted values
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub visible: String,
    pub position: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            visible: "magicpost-bot-visible".to_string(),
            position: "magicpost-bot-position".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub rotation_interval_ms: u32,
    /// How long a fresh rotation keeps the `new-message` pulse
    pub highlight_ms: u32,
    /// How long a tap tip stays in the bubble
    pub tip_ms: u32,
    /// Delay before the bubble closes after the pointer leaves
    pub hover_hide_ms: u32,
    pub tap_threshold_ms: f64,
    pub scroll: ScrollPolicy,
    pub keys: StorageKeys,
    /// Default position on desktop when nothing is stored
    pub desktop_anchor: Position,
    /// Default distance from the right and bottom edges on narrow screens
    pub mobile_inset: (f32, f32),
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            rotation_interval_ms: 10_000,
            highlight_ms: 2_000,
            tip_ms: 5_000,
            hover_hide_ms: 1_000,
            tap_threshold_ms: super::drag::TAP_THRESHOLD_MS,
            scroll: ScrollPolicy::default(),
            keys: StorageKeys::default(),
            desktop_anchor: Position::new(50.0, 50.0),
            mobile_inset: (110.0, 180.0),
        }
    }
}

impl WidgetConfig {
    /// Unclamped starting position for a first run on `viewport`
    pub fn default_position(&self, viewport: Viewport) -> Position {
        if Breakpoint::of(viewport).is_mobile() {
            let (right, bottom) = self.mobile_inset;
            Position::new(viewport.width - right, viewport.height - bottom)
        } else {
            self.desktop_anchor
        }
    }
}
