//! Passive repositioning - the widget drifts down slowly as the page scrolls

use serde::Deserialize;

use crate::primitives::Viewport;
use crate::primitives::bounded::bounded_f32;

bounded_f32!(Damping, 0.0, 1.0);

/// Vertical anchor that follows page scroll at a fraction of its speed
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollPolicy {
    /// Resting `y` with the page scrolled to the top
    pub base_y: f32,
    /// Fraction of the scroll offset added to `base_y`
    pub damping: Damping,
    /// Distance from the bottom edge the drift never passes
    pub bottom_margin: f32,
}

impl Default for ScrollPolicy {
    fn default() -> Self {
        Self {
            base_y: 50.0,
            damping: Damping::new(0.1),
            bottom_margin: 120.0,
        }
    }
}

impl ScrollPolicy {
    /// Desired `y` for a scroll offset, before the solver runs.
    ///
    /// `base_y` wins over the bottom cap when the window is too short for
    /// both; the solver then pulls the widget back inside.
    pub fn target_y(&self, scroll_offset: f32, viewport: Viewport) -> f32 {
        let drifted = self.base_y + scroll_offset * self.damping;
        drifted
            .min(viewport.height - self.bottom_margin)
            .max(self.base_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VP: Viewport = Viewport::new(1280.0, 800.0);

    #[test]
    fn top_of_page_rests_at_base() {
        assert_eq!(ScrollPolicy::default().target_y(0.0, VP), 50.0);
    }

    #[test]
    fn drifts_at_a_tenth() {
        let y = ScrollPolicy::default().target_y(1000.0, VP);
        assert!((y - 150.0).abs() < 1e-3);
    }

    #[test]
    fn capped_above_bottom_margin() {
        assert_eq!(ScrollPolicy::default().target_y(100_000.0, VP), 680.0);
    }

    #[test]
    fn never_above_base() {
        assert_eq!(ScrollPolicy::default().target_y(-500.0, VP), 50.0);
        let short = Viewport::new(400.0, 100.0);
        assert_eq!(ScrollPolicy::default().target_y(3000.0, short), 50.0);
    }

    #[test]
    fn partial_override() {
        let p: ScrollPolicy = serde_json::from_str(r#"{"damping": 0.5}"#).unwrap();
        assert_eq!(p.damping.value(), 0.5);
        assert_eq!(p.base_y, 50.0);
    }
}
