//! Carousel configuration: behavior flags, markup selectors, and page presets.
//!
//! Both records are immutable once a controller is built. A breakpoint
//! crossing rebuilds the controller; it never mutates its configuration.
//! Options deserialize from camelCase JSON; the portfolio page's two
//! carousels ship as presets.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_BREAKPOINT_PX;

/// Behavior flags for one carousel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CarouselConfig {
    /// Hand over to a static grid layout at or above `breakpoint_px`.
    #[serde(alias = "desktopGridOn")]
    pub desktop_grid_mode: bool,
    /// Keep an `is-active` marker on the current slide for 3D styling.
    #[serde(rename = "is3DMode", alias = "is3D")]
    pub is_3d_mode: bool,
    /// Width separating carousel mode from grid mode.
    pub breakpoint_px: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self { desktop_grid_mode: false, is_3d_mode: false, breakpoint_px: DEFAULT_BREAKPOINT_PX }
    }
}

impl CarouselConfig {
    /// Whether the static grid takes over at this viewport width.
    #[must_use]
    pub fn grid_engaged(&self, viewport_width: f64) -> bool {
        self.desktop_grid_mode && viewport_width >= self.breakpoint_px
    }
}

/// Where the carousel's parts live in the page markup.
///
/// `viewport` and `track` are required; everything else is optional and its
/// absence turns the matching behavior into a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CarouselSelectors {
    #[serde(alias = "viewportSelector")]
    pub viewport: String,
    #[serde(alias = "trackSelector")]
    pub track: String,
    #[serde(alias = "prevBtnSelector")]
    pub prev_button: Option<String>,
    #[serde(alias = "nextBtnSelector")]
    pub next_button: Option<String>,
    #[serde(alias = "paginationSelector")]
    pub pagination: Option<String>,
    /// Element *id* (not selector) of the assistive-technology live region.
    pub live_region_id: Option<String>,
    /// Container whose visibility follows the carousel's active state.
    #[serde(alias = "controlsSelector")]
    pub controls: Option<String>,
}

/// Everything needed to construct one carousel.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselOptions {
    #[serde(flatten)]
    pub selectors: CarouselSelectors,
    #[serde(flatten)]
    pub config: CarouselConfig,
}

impl CarouselOptions {
    /// The data-visualization carousel: always a carousel, no 3D marker.
    #[must_use]
    pub fn viz() -> Self {
        Self {
            selectors: CarouselSelectors {
                viewport: ".viz-carousel-viewport".to_owned(),
                track: "#viz-carousel-track".to_owned(),
                prev_button: Some("#viz-prev-btn".to_owned()),
                next_button: Some("#viz-next-btn".to_owned()),
                pagination: Some("#viz-pagination".to_owned()),
                live_region_id: Some("viz-live-region".to_owned()),
                controls: Some(".viz-carousel-container .carousel-controls".to_owned()),
            },
            config: CarouselConfig::default(),
        }
    }

    /// The testimonial carousel: a grid on desktop, 3D-styled on smaller screens.
    #[must_use]
    pub fn testimonial() -> Self {
        Self {
            selectors: CarouselSelectors {
                viewport: ".testimonial-carousel-viewport".to_owned(),
                track: "#testimonial-carousel-track".to_owned(),
                prev_button: Some("#testimonial-prev-btn".to_owned()),
                next_button: Some("#testimonial-next-btn".to_owned()),
                pagination: Some("#testimonial-pagination".to_owned()),
                live_region_id: Some("testimonial-live-region".to_owned()),
                controls: Some(".testimonial-carousel-container .carousel-controls".to_owned()),
            },
            config: CarouselConfig { desktop_grid_mode: true, is_3d_mode: true, ..CarouselConfig::default() },
        }
    }
}
