//! The portfolio page's carousels.
//!
//! The set of carousels on the page is known up front, so the page owns one
//! named instance of each instead of a registry that grows and shrinks. On a
//! settled resize, both are rebuilt together when the [`ResizeGate`] allows;
//! the gate watches every breakpoint the carousels are configured with.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use serde::{Deserialize, Serialize};

use crate::config::CarouselOptions;
use crate::error::CarouselError;
use crate::resize::ResizeGate;

/// The carousels the portfolio page renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselName {
    /// Data-visualization showcase.
    Viz,
    /// Client testimonials.
    Testimonial,
}

impl CarouselName {
    pub const ALL: [Self; 2] = [Self::Viz, Self::Testimonial];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Viz => "viz",
            Self::Testimonial => "testimonial",
        }
    }

    /// Built-in options for this carousel's markup.
    #[must_use]
    pub fn options(self) -> CarouselOptions {
        match self {
            Self::Viz => CarouselOptions::viz(),
            Self::Testimonial => CarouselOptions::testimonial(),
        }
    }
}

/// Options for every carousel on the page.
///
/// A carousel left out of the JSON document keeps its built-in preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageOptions {
    pub viz: CarouselOptions,
    pub testimonial: CarouselOptions,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self { viz: CarouselName::Viz.options(), testimonial: CarouselName::Testimonial.options() }
    }
}

impl PageOptions {
    /// Parse page options from a JSON object keyed by carousel name.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::InvalidConfig`] when the document is not a
    /// valid options object.
    pub fn from_json(json: &str) -> Result<Self, CarouselError> {
        let options = serde_json::from_str(json)?;
        Ok(options)
    }

    #[must_use]
    pub fn get(&self, name: CarouselName) -> &CarouselOptions {
        match name {
            CarouselName::Viz => &self.viz,
            CarouselName::Testimonial => &self.testimonial,
        }
    }
}

/// Something the page can rebuild and tear down.
pub trait Rebuild {
    /// Full teardown and re-initialization against the current layout.
    fn reconfigure(&mut self);

    /// Teardown only.
    fn destroy(&mut self);
}

/// Owns the page's named carousels.
#[derive(Debug)]
pub struct PortfolioCarousels<C> {
    viz: C,
    testimonial: C,
    gate: ResizeGate,
}

impl<C: Rebuild> PortfolioCarousels<C> {
    /// Build every carousel with `build` and remember the starting width.
    pub fn new<F>(initial_width: f64, options: &PageOptions, mut build: F) -> Self
    where
        F: FnMut(CarouselName, CarouselOptions) -> C,
    {
        let breakpoints = CarouselName::ALL.map(|name| options.get(name).config.breakpoint_px);
        Self {
            viz: build(CarouselName::Viz, options.viz.clone()),
            testimonial: build(CarouselName::Testimonial, options.testimonial.clone()),
            gate: ResizeGate::new(initial_width).with_breakpoints(breakpoints),
        }
    }

    #[must_use]
    pub fn get(&self, name: CarouselName) -> &C {
        match name {
            CarouselName::Viz => &self.viz,
            CarouselName::Testimonial => &self.testimonial,
        }
    }

    pub fn get_mut(&mut self, name: CarouselName) -> &mut C {
        match name {
            CarouselName::Viz => &mut self.viz,
            CarouselName::Testimonial => &mut self.testimonial,
        }
    }

    /// Offer a settled window width; rebuild both carousels when due.
    pub fn resized(&mut self, width: f64) -> bool {
        if !self.gate.observe(width) {
            return false;
        }
        log::debug!("rebuilding carousels at width {width}");
        for name in CarouselName::ALL {
            self.get_mut(name).reconfigure();
        }
        true
    }

    /// Tear every carousel down.
    pub fn destroy(&mut self) {
        for name in CarouselName::ALL {
            self.get_mut(name).destroy();
        }
    }
}
