//! The transient promotional popover.
//!
//! Hidden by default; shown by hand or by a one-shot delayed trigger on
//! the home page, and hidden again by hand, by Escape, or by an expiry
//! timer armed when it becomes visible. Deadlines live in single slots:
//! re-showing overwrites the pending expiry, and hiding clears it, so a
//! stale timer can never fire into the wrong state.

use std::time::{Duration, Instant};

/// Delay before the one-shot auto-show after the app starts.
pub const AUTO_SHOW_DELAY: Duration = Duration::from_secs(4);
/// How long the popover stays up before expiring on its own.
pub const AUTO_HIDE_AFTER: Duration = Duration::from_secs(8);

#[derive(Debug, Clone, Default)]
pub struct Popover {
    visible: bool,
    show_at: Option<Instant>,
    hide_at: Option<Instant>,
}

impl Popover {
    /// A popover that only ever shows when triggered by hand.
    pub fn new() -> Self {
        Self::default()
    }

    /// A popover with the one-shot auto-show armed, for the home page.
    pub fn with_auto_show(now: Instant) -> Self {
        Self {
            visible: false,
            show_at: Some(now + AUTO_SHOW_DELAY),
            hide_at: None,
        }
    }

    /// Show the popover and (re)arm its expiry. Showing while visible
    /// restarts the expiry window.
    pub fn show(&mut self, now: Instant) {
        self.visible = true;
        self.hide_at = Some(now + AUTO_HIDE_AFTER);
    }

    /// Hide the popover and drop any pending expiry. A no-op when
    /// already hidden.
    pub fn hide(&mut self) {
        self.visible = false;
        self.hide_at = None;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Fire any deadline that has come due.
    pub fn tick(&mut self, now: Instant) {
        if self.show_at.is_some_and(|at| at <= now) {
            self.show_at = None;
            self.show(now);
        }
        if self.hide_at.is_some_and(|at| at <= now) {
            self.hide();
        }
    }

    /// Whether a deadline is armed, so the event loop can poll faster.
    pub fn has_deadline(&self) -> bool {
        self.show_at.is_some() || self.hide_at.is_some()
    }
}
