//! Position and Viewport - pixel geometry relative to the browser window
//!
//! Positions are offsets from the viewport's top-left corner, the same
//! coordinate space as `clientX` / `clientY` and CSS `left` / `top` on a
//! `position: fixed` element.

use serde::{Deserialize, Serialize};

/// Top-left corner of the widget in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Component-wise difference, `self - other`
    pub fn offset_from(&self, other: &Self) -> (f32, f32) {
        (self.x - other.x, self.y - other.y)
    }

    pub fn with_y(&self, y: f32) -> Self {
        Self { x: self.x, y }
    }

    pub fn to_css(&self) -> String {
        format!("left: {}px; top: {}px;", self.x, self.y)
    }
}

/// Visible area of the browser window in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}

/// Read the live window size, falling back to the default desktop viewport
/// when there is no window (native tests, prerendering).
pub fn viewport_size() -> Viewport {
    let Some(window) = web_sys::window() else {
        return Viewport::default();
    };
    let w = window.inner_width().ok().and_then(|v| v.as_f64());
    let h = window.inner_height().ok().and_then(|v| v.as_f64());
    match (w, h) {
        (Some(w), Some(h)) => Viewport::new(w as f32, h as f32),
        _ => Viewport::default(),
    }
}
