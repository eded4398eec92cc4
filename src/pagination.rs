//! Pagination indicators: one per slide, exactly one active.
//!
//! The indicator set is rebuilt from scratch on every initialization and
//! never patched. Activation routing is expressed as data: activating
//! indicator `i` asks the controller to go to slide `i`.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use crate::slides::SlideSet;

/// A single pagination indicator as the host should render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicator {
    /// Slide this indicator selects.
    pub index: usize,
    /// Accessible label, e.g. `"Go to slide 3"`.
    pub label: String,
    /// Element id of the controlled slide, for `aria-controls`.
    pub controls: Option<String>,
    /// Whether this indicator reflects the current slide.
    pub active: bool,
}

/// The indicator set for one carousel.
#[derive(Debug, Clone, Default)]
pub struct Pagination {
    indicators: Vec<Indicator>,
}

impl Pagination {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard any previous indicators and create one per slide, the first active.
    pub fn build(&mut self, slides: &SlideSet) -> &[Indicator] {
        self.indicators = slides
            .iter()
            .map(|slide| Indicator {
                index: slide.index,
                label: format!("Go to slide {}", slide.index + 1),
                controls: slide.element_id.clone(),
                active: slide.index == 0,
            })
            .collect();
        &self.indicators
    }

    /// Mark the indicator at `index` active and clear every other one.
    pub fn set_active(&mut self, index: usize) {
        for indicator in &mut self.indicators {
            indicator.active = indicator.index == index;
        }
    }

    /// Remove all indicators.
    pub fn clear(&mut self) {
        self.indicators.clear();
    }

    /// Slide index targeted by activating indicator `index`, if it exists.
    #[must_use]
    pub fn activate(&self, index: usize) -> Option<usize> {
        self.indicators.get(index).map(|indicator| indicator.index)
    }

    #[must_use]
    pub fn indicators(&self) -> &[Indicator] {
        &self.indicators
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indicators.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }
}
