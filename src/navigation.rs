//! Navigation input: previous/next directions, swipes, arrow keys, and
//! whether the previous/next controls are shown at all.
//!
//! Navigation never wraps on its own. It only proposes `current ∓ 1`; the
//! controller owns wrap-around. Because the carousel loops, the controls are
//! never disabled at an edge: they are either shown or hidden outright.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use crate::config::CarouselConfig;
use crate::consts::SWIPE_THRESHOLD_PX;

/// Which way to step from the current slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    /// Raw (unwrapped) target index one step from `current`.
    #[must_use]
    pub fn target_from(self, current: usize) -> isize {
        let current = isize::try_from(current).unwrap_or(isize::MAX);
        match self {
            Self::Previous => current.saturating_sub(1),
            Self::Next => current.saturating_add(1),
        }
    }

    /// Map a browser `KeyboardEvent.key` to a direction.
    ///
    /// A `Some` result means the host must also suppress the key's default
    /// action so the page does not scroll.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Previous),
            "ArrowRight" => Some(Self::Next),
            _ => None,
        }
    }

    /// Classify a completed horizontal touch gesture.
    ///
    /// Travel at or under the threshold is not a swipe. Leftward travel
    /// (`start > end`) advances.
    #[must_use]
    pub fn from_swipe(start_x: f64, end_x: f64) -> Option<Self> {
        let diff = start_x - end_x;
        if diff.abs() <= SWIPE_THRESHOLD_PX {
            return None;
        }
        if diff > 0.0 { Some(Self::Next) } else { Some(Self::Previous) }
    }
}

/// Touch-start / touch-end pairing for one viewport.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    start_x: Option<f64>,
}

impl SwipeTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record where a touch began.
    pub fn touch_start(&mut self, client_x: f64) {
        self.start_x = Some(client_x);
    }

    /// Finish the gesture. A touch-end without a recorded start is ignored.
    pub fn touch_end(&mut self, client_x: f64) -> Option<Direction> {
        let start = self.start_x.take()?;
        Direction::from_swipe(start, client_x)
    }

    /// Forget any half-finished gesture.
    pub fn reset(&mut self) {
        self.start_x = None;
    }
}

/// Whether the previous/next controls and pagination are shown.
///
/// Hidden when there is nothing to navigate between, or when the carousel
/// hands over to the static grid at or above its breakpoint.
#[must_use]
pub fn controls_visible(slide_count: usize, config: &CarouselConfig, viewport_width: f64) -> bool {
    if slide_count <= 1 {
        return false;
    }
    !config.grid_engaged(viewport_width)
}
