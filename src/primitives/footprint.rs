//! Footprint - rendered widget size, chosen by viewport breakpoint

use super::position::Viewport;

/// Discrete layout tiers keyed on viewport width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Breakpoint {
    Phone,
    Tablet,
    Desktop,
}

impl Breakpoint {
    pub const PHONE_MAX: f32 = 480.0;
    pub const TABLET_MAX: f32 = 768.0;

    pub fn of(viewport: Viewport) -> Self {
        match viewport.width {
            w if w <= Self::PHONE_MAX => Self::Phone,
            w if w <= Self::TABLET_MAX => Self::Tablet,
            _ => Self::Desktop,
        }
    }

    /// Narrow layouts anchor the widget bottom-right by default
    pub fn is_mobile(&self) -> bool {
        !matches!(self, Self::Desktop)
    }

    /// Side length of the square widget at this tier
    pub fn side(&self) -> f32 {
        match self {
            Self::Phone => 90.0,
            Self::Tablet => 100.0,
            Self::Desktop => 120.0,
        }
    }
}

/// On-screen size of the widget in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    pub width: f32,
    pub height: f32,
}

impl Footprint {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn for_viewport(viewport: Viewport) -> Self {
        let side = Breakpoint::of(viewport).side();
        Self::new(side, side)
    }

    pub fn to_css(&self) -> String {
        format!("width: {}px; height: {}px;", self.width, self.height)
    }
}
