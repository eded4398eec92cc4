//! Shared numeric constants for the carousel crate.

// ── Layout ──────────────────────────────────────────────────────

/// Viewport width (CSS pixels) at which grid-mode carousels hand over to the static grid.
pub const DEFAULT_BREAKPOINT_PX: f64 = 1024.0;

// ── Gestures ────────────────────────────────────────────────────

/// Horizontal travel a swipe must exceed before it navigates.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

// ── Visibility ──────────────────────────────────────────────────

/// Minimum intersection ratio for a slide to count as the current one.
pub const VISIBILITY_THRESHOLD: f64 = 0.51;

// ── Resize ──────────────────────────────────────────────────────

/// Width change that forces a rebuild even without a breakpoint crossing.
pub const RESIZE_JITTER_PX: f64 = 50.0;

/// Quiet period after the last resize event before the gate is consulted.
pub const RESIZE_DEBOUNCE_MS: u32 = 250;

// ── Markup ──────────────────────────────────────────────────────

/// Class toggled on the active pagination indicator and the 3D active slide.
pub const ACTIVE_CLASS: &str = "is-active";

/// Class given to each generated pagination indicator.
pub const INDICATOR_CLASS: &str = "carousel-pagination-btn";
