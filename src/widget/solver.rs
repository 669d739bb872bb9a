//! Constraint solver - keeps the widget inside the visible window

use crate::primitives::{Footprint, Position, Viewport};

/// Largest legal top-left corner; never negative even when the widget is
/// bigger than the viewport.
fn upper_bound(footprint: Footprint, viewport: Viewport) -> Position {
    Position::new(
        (viewport.width - footprint.width).max(0.0),
        (viewport.height - footprint.height).max(0.0),
    )
}

/// Clamp `position` to `[0, vw - fw] x [0, vh - fh]`.
pub fn clamp(position: Position, footprint: Footprint, viewport: Viewport) -> Position {
    let max = upper_bound(footprint, viewport);
    Position::new(position.x.clamp(0.0, max.x), position.y.clamp(0.0, max.y))
}

pub fn contains(position: Position, footprint: Footprint, viewport: Viewport) -> bool {
    let max = upper_bound(footprint, viewport);
    (0.0..=max.x).contains(&position.x) && (0.0..=max.y).contains(&position.y)
}
