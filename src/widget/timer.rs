//! Deferred effects requested by the controller
//!
//! The controller never sleeps. It hands back a [`Timer`] and the host
//! calls `on_timer(kind)` once `after_ms` has elapsed. Each kind carries the
//! generation it was issued under; a timer whose generation is stale by the
//! time it fires does nothing.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// End the tip window and close the bubble
    ClearTip { generation: u64 },
    /// End the `new-message` pulse
    ClearHighlight { generation: u64 },
    /// Close the bubble after the pointer left
    HideBubble { generation: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    pub kind: TimerKind,
    pub after_ms: u32,
}

impl Timer {
    pub const fn new(kind: TimerKind, after_ms: u32) -> Self {
        Self { kind, after_ms }
    }
}
