//! Visibility tracking: which slide the user is actually looking at.
//!
//! After a free scroll (drag, swipe momentum, trackpad) that bypasses the
//! navigation controls, intersection samples arrive asynchronously, possibly
//! several per physical scroll. Every sample at or above the threshold is a
//! report; the controller drops reports for the slide that is already current.

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

use crate::consts::VISIBILITY_THRESHOLD;

/// One intersection observation for one slide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionSample {
    /// Slide index in document order.
    pub index: usize,
    /// Whether the slide intersects the viewport at all.
    pub is_intersecting: bool,
    /// Fraction of the slide inside the viewport, `0.0..=1.0`.
    pub ratio: f64,
}

impl IntersectionSample {
    #[must_use]
    pub fn new(index: usize, is_intersecting: bool, ratio: f64) -> Self {
        Self { index, is_intersecting, ratio }
    }
}

/// Filters intersection samples into "this slide is current" reports.
#[derive(Debug, Clone)]
pub struct VisibilityTracker {
    threshold: f64,
    connected: bool,
}

impl Default for VisibilityTracker {
    fn default() -> Self {
        Self { threshold: VISIBILITY_THRESHOLD, connected: false }
    }
}

impl VisibilityTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The ratio handed to the observer as its threshold.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn start(&mut self) {
        self.connected = true;
    }

    /// Disconnect. Samples delivered afterwards are dropped.
    pub fn stop(&mut self) {
        self.connected = false;
    }

    /// Whether a single sample marks its slide as current.
    #[must_use]
    pub fn is_current(&self, sample: &IntersectionSample) -> bool {
        sample.is_intersecting && sample.ratio >= self.threshold
    }

    /// Slide indices to report, in delivery order.
    ///
    /// Indices at or past `slide_count` are dropped, as is everything while
    /// disconnected.
    #[must_use]
    pub fn reports(&self, samples: &[IntersectionSample], slide_count: usize) -> Vec<usize> {
        if !self.connected {
            return Vec::new();
        }
        samples
            .iter()
            .filter(|sample| sample.index < slide_count && self.is_current(sample))
            .map(|sample| sample.index)
            .collect()
    }
}
