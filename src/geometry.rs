//! Index wrap-around and scroll-offset geometry.
//!
//! The carousel loops: asking for the slide before the first lands on the
//! last, and asking for the slide after the last lands on the first. The
//! scroll target centers a slide inside the viewport instead of aligning it
//! to an edge.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// Position and width of a slide inside the scrolling track, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideRect {
    /// Distance from the track's left edge to the slide's left edge.
    pub offset_left: f64,
    /// Rendered width of the slide.
    pub width: f64,
}

impl SlideRect {
    #[must_use]
    pub fn new(offset_left: f64, width: f64) -> Self {
        Self { offset_left, width }
    }
}

/// Live layout queries against the rendering surface.
///
/// Geometry is read at navigation time rather than captured at bind time, so
/// a slide that reflowed since initialization is still centered correctly.
pub trait ViewportBinding {
    /// Width of the visible part of the viewport.
    fn visible_width(&self) -> f64;

    /// Geometry of the slide at `index`, or `None` if it is gone.
    fn slide_rect(&self, index: usize) -> Option<SlideRect>;
}

/// Resolve a raw (possibly negative or past-the-end) index into `0..len`.
///
/// Returns `None` only when there is nothing to index into.
#[must_use]
pub fn wrap_index(raw: isize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let Ok(len_signed) = isize::try_from(len) else {
        return None;
    };
    Some(raw.rem_euclid(len_signed).unsigned_abs())
}

/// Horizontal scroll offset that centers `slide` within a viewport of `visible_width`.
#[must_use]
pub fn center_offset(slide: SlideRect, visible_width: f64) -> f64 {
    slide.offset_left - (visible_width - slide.width) / 2.0
}
