//! Resize gate: decides when a window resize warrants rebuilding carousels.
//!
//! Rebuilds are full teardowns, so they only happen when the width crosses
//! one of the carousels' breakpoints or moves by more than a small jitter
//! allowance. The recorded width only advances when a rebuild is granted; a
//! slow drag therefore accumulates until it clears the allowance.

#[cfg(test)]
#[path = "resize_test.rs"]
mod resize_test;

use crate::consts::{DEFAULT_BREAKPOINT_PX, RESIZE_JITTER_PX};

/// Tracks the width carousels were last built at.
#[derive(Debug, Clone)]
pub struct ResizeGate {
    breakpoints: Vec<f64>,
    jitter_px: f64,
    last_width: f64,
}

impl ResizeGate {
    /// Gate at the default breakpoint, starting from `initial_width`.
    #[must_use]
    pub fn new(initial_width: f64) -> Self {
        Self { breakpoints: vec![DEFAULT_BREAKPOINT_PX], jitter_px: RESIZE_JITTER_PX, last_width: initial_width }
    }

    /// Replace the watched breakpoints. An empty set leaves only the jitter rule.
    #[must_use]
    pub fn with_breakpoints(mut self, breakpoints: impl IntoIterator<Item = f64>) -> Self {
        self.breakpoints = breakpoints.into_iter().collect();
        self.breakpoints.sort_by(f64::total_cmp);
        self.breakpoints.dedup();
        self
    }

    /// Whether going from the last built width to `width` crosses any breakpoint.
    fn crosses_breakpoint(&self, width: f64) -> bool {
        self.breakpoints.iter().any(|&bp| (self.last_width >= bp) != (width >= bp))
    }

    /// Offer a settled width. Returns `true` (and records it) when a rebuild is due.
    pub fn observe(&mut self, width: f64) -> bool {
        let due = self.crosses_breakpoint(width) || (width - self.last_width).abs() > self.jitter_px;
        if due {
            self.last_width = width;
        }
        due
    }
}
