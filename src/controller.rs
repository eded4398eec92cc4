//! Carousel state machine.
//!
//! `CarouselCore` owns the only mutable carousel state (the current slide
//! index) and is its only writer. Navigation commands and visibility reports
//! are two independent event sources that can only *propose* an index; the
//! core wraps it, drops it if it names the slide that is already current,
//! and otherwise answers with the [`Effect`]s the host must apply.
//!
//! LIFECYCLE
//! =========
//! `Idle` (never initialized, or destroyed) → `initialize` → `Active` or
//! `Inactive`. `reconfigure` is a full `destroy` + `initialize`; there is no
//! transition between `Active` and `Inactive` mid-session.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::config::CarouselConfig;
use crate::error::CarouselError;
use crate::geometry::{ViewportBinding, center_offset, wrap_index};
use crate::navigation::{Direction, SwipeTracker, controls_visible};
use crate::pagination::{Indicator, Pagination};
use crate::slides::SlideSet;
use crate::visibility::{IntersectionSample, VisibilityTracker};

/// Lifecycle phase of a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing bound: never initialized, or destroyed.
    #[default]
    Idle,
    /// Bound, but not navigable: too few slides, grid layout engaged, or a
    /// required element was missing. Controls are hidden, no index tracking.
    Inactive,
    /// Controls shown, index tracked.
    Active,
}

/// Changes the host must apply to the page, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Show or hide the previous/next controls container.
    SetControlsVisible(bool),
    /// Give every slide `tabindex="-1"` so it can take programmatic focus.
    MakeSlidesFocusable,
    /// Replace the pagination container's contents with these indicators.
    RenderPagination(Vec<Indicator>),
    /// Empty the pagination container.
    ClearPagination,
    /// Mark exactly this indicator active.
    SetActiveIndicator(usize),
    /// Attach previous/next, keyboard and touch listeners.
    AttachNavigation,
    /// Detach everything `AttachNavigation` attached.
    DetachNavigation,
    /// Observe every slide's intersection with the viewport at this ratio.
    StartTracking { threshold: f64 },
    /// Disconnect the intersection observer.
    StopTracking,
    /// Smooth-scroll the viewport to this horizontal offset.
    ScrollTo { left: f64 },
    /// Focus this slide without scrolling.
    FocusSlide(usize),
    /// Move the `is-active` slide marker (3D mode only).
    SetActiveSlide(usize),
    /// Replace the live region's text.
    Announce(String),
}

/// Live-region text for the slide at `index`.
#[must_use]
pub fn announcement(index: usize, count: usize) -> String {
    format!("Slide {} of {}", index + 1, count)
}

/// The carousel controller, free of any DOM handle.
#[derive(Debug, Clone)]
pub struct CarouselCore {
    config: CarouselConfig,
    phase: Phase,
    slides: SlideSet,
    current_index: usize,
    pagination: Pagination,
    tracker: VisibilityTracker,
    swipe: SwipeTracker,
}

impl CarouselCore {
    #[must_use]
    pub fn new(config: CarouselConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
            slides: SlideSet::default(),
            current_index: 0,
            pagination: Pagination::new(),
            tracker: VisibilityTracker::new(),
            swipe: SwipeTracker::new(),
        }
    }

    // --- Lifecycle ---

    /// Capture the slide set and decide between `Active` and `Inactive`.
    ///
    /// An already initialized carousel is torn down first, so listeners and
    /// indicators never accumulate.
    pub fn initialize(&mut self, slides: SlideSet, viewport_width: f64) -> Vec<Effect> {
        let mut effects = self.destroy();

        self.slides = slides;
        self.current_index = 0;
        self.swipe.reset();

        if !controls_visible(self.slides.len(), &self.config, viewport_width) {
            log::debug!(
                "carousel inactive: {} slide(s), grid engaged: {}",
                self.slides.len(),
                self.config.grid_engaged(viewport_width)
            );
            self.phase = Phase::Inactive;
            effects.push(Effect::SetControlsVisible(false));
            return effects;
        }

        self.phase = Phase::Active;
        self.tracker.start();
        let indicators = self.pagination.build(&self.slides).to_vec();
        effects.extend([
            Effect::SetControlsVisible(true),
            Effect::MakeSlidesFocusable,
            Effect::RenderPagination(indicators),
            Effect::AttachNavigation,
            Effect::StartTracking { threshold: self.tracker.threshold() },
        ]);
        if self.config.is_3d_mode {
            effects.push(Effect::SetActiveSlide(0));
        }
        log::debug!("carousel active with {} slides", self.slides.len());
        effects
    }

    /// Record that the carousel's markup could not be bound.
    ///
    /// The carousel stays inert; nothing on the page is touched.
    pub fn bind_failed(&mut self, err: &CarouselError) -> Vec<Effect> {
        if err.is_missing_binding() {
            log::warn!("carousel disabled: {err}");
        } else {
            log::error!("carousel disabled: {err}");
        }
        let effects = self.destroy();
        self.slides = SlideSet::default();
        self.current_index = 0;
        self.phase = Phase::Inactive;
        effects
    }

    /// Full teardown followed by a fresh initialize.
    pub fn reconfigure(&mut self, slides: SlideSet, viewport_width: f64) -> Vec<Effect> {
        log::debug!("carousel reconfigure at width {viewport_width}");
        let mut effects = self.destroy();
        effects.extend(self.initialize(slides, viewport_width));
        effects
    }

    /// Stop tracking, remove indicators, detach navigation. Idempotent.
    pub fn destroy(&mut self) -> Vec<Effect> {
        if self.phase == Phase::Idle {
            return Vec::new();
        }
        let mut effects = Vec::new();
        if self.is_tracking() {
            self.tracker.stop();
            effects.push(Effect::StopTracking);
        }
        if self.phase == Phase::Active {
            effects.push(Effect::DetachNavigation);
        }
        self.pagination.clear();
        effects.push(Effect::ClearPagination);
        if self.config.desktop_grid_mode {
            effects.push(Effect::SetControlsVisible(true));
        }
        self.swipe.reset();
        self.phase = Phase::Idle;
        effects
    }

    // --- Index changes ---

    /// Present the slide at `raw`, wrapped into range, with a smooth scroll.
    ///
    /// Asking for the slide that is already current does nothing at all.
    pub fn go_to(&mut self, raw: isize, viewport: &impl ViewportBinding) -> Vec<Effect> {
        if self.phase != Phase::Active {
            return Vec::new();
        }
        let Some(index) = wrap_index(raw, self.slides.len()) else {
            return Vec::new();
        };
        if index == self.current_index {
            return Vec::new();
        }
        let Some(rect) = viewport.slide_rect(index) else {
            log::debug!("carousel slide {index} has no layout; ignoring");
            return Vec::new();
        };

        let mut effects = vec![Effect::ScrollTo { left: center_offset(rect, viewport.visible_width()) }];
        effects.extend(self.commit(index));
        effects.push(Effect::FocusSlide(index));
        effects
    }

    /// Step one slide from the current one.
    pub fn step(&mut self, direction: Direction, viewport: &impl ViewportBinding) -> Vec<Effect> {
        self.go_to(direction.target_from(self.current_index), viewport)
    }

    pub fn previous(&mut self, viewport: &impl ViewportBinding) -> Vec<Effect> {
        self.step(Direction::Previous, viewport)
    }

    pub fn next(&mut self, viewport: &impl ViewportBinding) -> Vec<Effect> {
        self.step(Direction::Next, viewport)
    }

    /// Reconcile with the slide the user scrolled to on their own.
    ///
    /// Same bookkeeping as [`Self::go_to`] but no scroll and no focus move:
    /// the slide is already on screen and the gesture may still be settling.
    pub fn report_visible(&mut self, index: usize) -> Vec<Effect> {
        if self.phase != Phase::Active || index >= self.slides.len() || index == self.current_index {
            return Vec::new();
        }
        self.commit(index)
    }

    fn commit(&mut self, index: usize) -> Vec<Effect> {
        self.current_index = index;
        self.pagination.set_active(index);
        let mut effects = vec![Effect::SetActiveIndicator(index)];
        if self.config.is_3d_mode {
            effects.push(Effect::SetActiveSlide(index));
        }
        effects.push(Effect::Announce(announcement(index, self.slides.len())));
        effects
    }

    // --- Event inputs ---

    /// A pagination indicator was activated.
    pub fn activate_indicator(&mut self, indicator: usize, viewport: &impl ViewportBinding) -> Vec<Effect> {
        match self.pagination.activate(indicator) {
            Some(index) => self.go_to(isize::try_from(index).unwrap_or(isize::MAX), viewport),
            None => Vec::new(),
        }
    }

    /// A key went down while the viewport had focus.
    ///
    /// `Some` means the key belongs to the carousel and its default action
    /// must be suppressed.
    pub fn key_down(&mut self, key: &str, viewport: &impl ViewportBinding) -> Option<Vec<Effect>> {
        if self.phase != Phase::Active {
            return None;
        }
        let direction = Direction::from_key(key)?;
        Some(self.step(direction, viewport))
    }

    pub fn touch_start(&mut self, client_x: f64) {
        self.swipe.touch_start(client_x);
    }

    pub fn touch_end(&mut self, client_x: f64, viewport: &impl ViewportBinding) -> Vec<Effect> {
        match self.swipe.touch_end(client_x) {
            Some(direction) => self.step(direction, viewport),
            None => Vec::new(),
        }
    }

    /// A batch of intersection observations arrived.
    pub fn intersections(&mut self, samples: &[IntersectionSample]) -> Vec<Effect> {
        self.tracker
            .reports(samples, self.slides.len())
            .into_iter()
            .flat_map(|index| self.report_visible(index))
            .collect()
    }

    // --- Queries ---

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// The current slide, or `None` when the carousel is not tracking an index.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        (self.phase == Phase::Active).then_some(self.current_index)
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn slides(&self) -> &SlideSet {
        &self.slides
    }

    #[must_use]
    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Whether the previous/next controls are currently shown.
    #[must_use]
    pub fn controls_visible(&self) -> bool {
        self.phase == Phase::Active
    }

    #[must_use]
    pub(crate) fn is_tracking(&self) -> bool {
        self.tracker.is_connected()
    }
}
