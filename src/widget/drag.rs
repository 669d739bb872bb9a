//! Drag session state machine
//!
//! `Idle` until a press, `Dragging` until the matching release. Moves
//! translate the pointer by the grab offset captured at press time, so the
//! widget does not jump under the cursor.

use crate::primitives::{Footprint, Position, Viewport};

use super::solver;

/// Press-to-release interval below which a release counts as a tap
pub const TAP_THRESHOLD_MS: f64 = 200.0;

/// State captured at press time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer position minus widget position at press
    pub grab_offset: (f32, f32),
    pub pressed_at: f64,
}

/// Outcome of a release that ended a session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Release {
    pub duration_ms: f64,
    pub is_tap: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// Start (or restart) a session.
    pub fn press(&mut self, pointer: Position, current: Position, now: f64) {
        *self = Self::Dragging(DragSession {
            grab_offset: pointer.offset_from(&current),
            pressed_at: now,
        });
    }

    /// New clamped widget position for a pointer move; `None` when idle.
    pub fn drag_to(
        &self,
        pointer: Position,
        footprint: Footprint,
        viewport: Viewport,
    ) -> Option<Position> {
        let Self::Dragging(session) = self else {
            return None;
        };
        let (dx, dy) = session.grab_offset;
        Some(solver::clamp(pointer.translate(-dx, -dy), footprint, viewport))
    }

    /// End the session. A stray release while idle is a no-op.
    pub fn release(&mut self, now: f64, threshold_ms: f64) -> Option<Release> {
        let Self::Dragging(session) = std::mem::take(self) else {
            return None;
        };
        let duration_ms = now - session.pressed_at;
        Some(Release {
            duration_ms,
            is_tap: duration_ms < threshold_ms,
        })
    }

    /// Drop the session without producing a release.
    pub fn abandon(&mut self) -> bool {
        let was = self.is_dragging();
        *self = Self::Idle;
        was
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VP: Viewport = Viewport::new(1000.0, 800.0);
    const FP: Footprint = Footprint::new(120.0, 120.0);

    #[test]
    fn default_is_idle() {
        let state = DragState::default();
        assert!(!state.is_dragging());
        assert_eq!(state.drag_to(Position::new(10.0, 10.0), FP, VP), None);
    }

    #[test]
    fn press_records_grab_offset() {
        let mut state = DragState::default();
        state.press(Position::new(100.0, 100.0), Position::new(80.0, 80.0), 5.0);
        assert_eq!(
            state,
            DragState::Dragging(DragSession { grab_offset: (20.0, 20.0), pressed_at: 5.0 })
        );
    }

    #[test]
    fn move_keeps_grab_offset() {
        let mut state = DragState::default();
        state.press(Position::new(100.0, 100.0), Position::new(80.0, 80.0), 0.0);
        let p = state.drag_to(Position::new(150.0, 100.0), FP, VP);
        assert_eq!(p, Some(Position::new(130.0, 80.0)));
    }

    #[test]
    fn move_is_clamped() {
        let mut state = DragState::default();
        state.press(Position::new(10.0, 10.0), Position::new(0.0, 0.0), 0.0);
        let p = state.drag_to(Position::new(5000.0, -300.0), FP, VP);
        assert_eq!(p, Some(Position::new(880.0, 0.0)));
    }

    #[test]
    fn quick_release_is_tap() {
        let mut state = DragState::default();
        state.press(Position::default(), Position::default(), 1000.0);
        let r = state.release(1150.0, TAP_THRESHOLD_MS).unwrap();
        assert!(r.is_tap);
        assert_eq!(r.duration_ms, 150.0);
        assert!(!state.is_dragging());
    }

    #[test]
    fn threshold_is_exclusive() {
        let mut state = DragState::default();
        state.press(Position::default(), Position::default(), 0.0);
        assert!(!state.release(200.0, TAP_THRESHOLD_MS).unwrap().is_tap);
    }

    #[test]
    fn slow_release_is_not_tap() {
        let mut state = DragState::default();
        state.press(Position::default(), Position::default(), 0.0);
        assert!(!state.release(250.0, TAP_THRESHOLD_MS).unwrap().is_tap);
    }

    #[test]
    fn stray_release_is_noop() {
        let mut state = DragState::default();
        assert_eq!(state.release(10.0, TAP_THRESHOLD_MS), None);
        assert_eq!(state, DragState::Idle);
    }

    #[test]
    fn abandon_then_release_is_noop() {
        let mut state = DragState::default();
        state.press(Position::default(), Position::default(), 0.0);
        assert!(state.abandon());
        assert_eq!(state.release(50.0, TAP_THRESHOLD_MS), None);
        assert!(!state.abandon());
    }
}
