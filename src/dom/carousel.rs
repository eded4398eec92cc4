//! One carousel bound to the live document.
//!
//! `DomCarousel` owns a [`CarouselCore`] plus the element handles it was
//! bound to. Listeners and the intersection observer hold only a weak
//! reference back, so dropping the carousel releases everything.

#[cfg(all(test, target_arch = "wasm32"))]
#[path = "carousel_test.rs"]
mod carousel_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Event, FocusOptions, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, ScrollBehavior, ScrollToOptions, TouchEvent,
};

use crate::binding::Bindings;
use crate::config::CarouselOptions;
use crate::consts::{ACTIVE_CLASS, INDICATOR_CLASS};
use crate::controller::{CarouselCore, Effect};
use crate::error::CarouselError;
use crate::geometry::{SlideRect, ViewportBinding};
use crate::navigation::Direction;
use crate::page::Rebuild;
use crate::pagination::Indicator;
use crate::slides::SlideSet;
use crate::visibility::IntersectionSample;

use super::{DocumentResolver, js_err, window_width};

type Shared = Rc<RefCell<Inner>>;
type WeakShared = Weak<RefCell<Inner>>;

/// A carousel bound to page markup.
pub struct DomCarousel {
    inner: Shared,
}

struct Inner {
    options: CarouselOptions,
    core: CarouselCore,
    bound: Option<Bound>,
}

struct Bound {
    handles: Bindings<HtmlElement>,
    slides: Vec<HtmlElement>,
    navigation: Vec<Listener>,
    indicators: Vec<(HtmlElement, Listener)>,
    observer: Option<Observer>,
}

/// A running intersection observer; dropping it disconnects.
struct Observer {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// An attached event listener. Dropping it removes it from its target, so
/// the closure is never freed while the DOM can still call it.
struct Listener {
    target: HtmlElement,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(
        target: &HtmlElement,
        event: &'static str,
        passive: bool,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, CarouselError> {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                closure.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|err| js_err("addEventListener", &err))?;
        Ok(Self { target: target.clone(), event, closure })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref())
        {
            log::warn!("{}", js_err("removeEventListener", &err));
        }
    }
}

/// Live layout read from the bound elements.
struct DomLayout<'a> {
    viewport: &'a HtmlElement,
    slides: &'a [HtmlElement],
}

impl ViewportBinding for DomLayout<'_> {
    fn visible_width(&self) -> f64 {
        f64::from(self.viewport.client_width())
    }

    fn slide_rect(&self, index: usize) -> Option<SlideRect> {
        let slide = self.slides.get(index)?;
        Some(SlideRect::new(f64::from(slide.offset_left()), f64::from(slide.client_width())))
    }
}

impl Bound {
    fn layout(&self) -> DomLayout<'_> {
        DomLayout { viewport: &self.handles.viewport, slides: &self.slides }
    }

    fn slide_index(&self, target: &web_sys::Element) -> Option<usize> {
        let target: &web_sys::Node = target;
        self.slides.iter().position(|slide| slide.is_same_node(Some(target)))
    }
}

impl DomCarousel {
    /// Bind to the markup named by `options` and initialize.
    ///
    /// Missing markup leaves the carousel inert and logs a warning.
    #[must_use]
    pub fn new(options: CarouselOptions) -> Self {
        let core = CarouselCore::new(options.config);
        let inner = Rc::new(RefCell::new(Inner { options, core, bound: None }));
        bind(&inner);
        Self { inner }
    }

    /// Tear down, re-resolve every selector, and initialize again.
    pub fn reconfigure(&mut self) {
        teardown(&self.inner);
        bind(&self.inner);
    }

    /// Stop tracking, remove indicators, and detach listeners. Idempotent.
    pub fn destroy(&mut self) {
        teardown(&self.inner);
    }

}

impl Rebuild for DomCarousel {
    fn reconfigure(&mut self) {
        DomCarousel::reconfigure(self);
    }

    fn destroy(&mut self) {
        DomCarousel::destroy(self);
    }
}

impl Drop for DomCarousel {
    fn drop(&mut self) {
        teardown(&self.inner);
    }
}

// --- Lifecycle ---

fn bind(shared: &Shared) {
    let selectors = shared.borrow().options.selectors.clone();
    let resolved = DocumentResolver::current()
        .ok_or(CarouselError::Dom { op: "document", detail: "no document".to_owned() })
        .and_then(|resolver| Bindings::resolve(&resolver, &selectors));

    let effects = {
        let mut inner = shared.borrow_mut();
        match resolved {
            Ok(handles) => {
                let slides = collect_slides(&handles.track);
                let slide_set = SlideSet::from_ids(slides.iter().map(|slide| Some(slide.id())));
                inner.bound = Some(Bound { handles, slides, navigation: Vec::new(), indicators: Vec::new(), observer: None });
                inner.core.initialize(slide_set, window_width())
            }
            Err(err) => {
                inner.bound = None;
                inner.core.bind_failed(&err)
            }
        }
    };
    apply(shared, effects);
}

fn teardown(shared: &Shared) {
    let effects = shared.borrow_mut().core.destroy();
    apply(shared, effects);
    shared.borrow_mut().bound = None;
}

fn collect_slides(track: &HtmlElement) -> Vec<HtmlElement> {
    let children = track.children();
    (0..children.length())
        .filter_map(|i| children.item(i))
        .filter_map(|el| el.dyn_ref::<HtmlElement>().cloned())
        .collect()
}

// --- Events ---

/// Run a controller call against the live layout, then apply what it returns.
fn dispatch(weak: &WeakShared, call: impl FnOnce(&mut CarouselCore, &DomLayout<'_>) -> Vec<Effect>) {
    let Some(shared) = weak.upgrade() else {
        return;
    };
    let effects = {
        let Ok(mut inner) = shared.try_borrow_mut() else {
            log::debug!("carousel busy; event dropped");
            return;
        };
        let Inner { core, bound, .. } = &mut *inner;
        let Some(bound) = bound.as_ref() else {
            return;
        };
        call(core, &bound.layout())
    };
    apply(&shared, effects);
}

/// Listeners go into `bound` as soon as they are attached, so a later
/// failure still leaves every earlier one owned and detachable.
fn attach_navigation(weak: &WeakShared, bound: &mut Bound) -> Result<(), CarouselError> {
    for (button, direction) in [
        (bound.handles.prev_button.as_ref(), Direction::Previous),
        (bound.handles.next_button.as_ref(), Direction::Next),
    ] {
        if let Some(button) = button {
            let weak = weak.clone();
            bound.navigation.push(Listener::attach(button, "click", false, move |_event| {
                dispatch(&weak, |core, layout| core.step(direction, layout));
            })?);
        }
    }

    let viewport = &bound.handles.viewport;
    let on_key = weak.clone();
    bound.navigation.push(Listener::attach(viewport, "keydown", false, move |event| {
        let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let key = key_event.key();
        dispatch(&on_key, |core, layout| match core.key_down(&key, layout) {
            Some(effects) => {
                event.prevent_default();
                effects
            }
            None => Vec::new(),
        });
    })?);

    let on_touch_start = weak.clone();
    bound.navigation.push(Listener::attach(viewport, "touchstart", true, move |event| {
        let Some(x) = event.dyn_ref::<TouchEvent>().and_then(|t| t.touches().get(0)).map(|t| t.client_x()) else {
            return;
        };
        dispatch(&on_touch_start, |core, _layout| {
            core.touch_start(f64::from(x));
            Vec::new()
        });
    })?);

    let on_touch_end = weak.clone();
    bound.navigation.push(Listener::attach(viewport, "touchend", true, move |event| {
        let Some(x) = event.dyn_ref::<TouchEvent>().and_then(|t| t.changed_touches().get(0)).map(|t| t.client_x())
        else {
            return;
        };
        dispatch(&on_touch_end, |core, layout| core.touch_end(f64::from(x), layout));
    })?);
    Ok(())
}

fn start_tracking(weak: &WeakShared, bound: &mut Bound, threshold: f64) -> Result<(), CarouselError> {
    let on_entries = weak.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            let Some(shared) = on_entries.upgrade() else {
                return;
            };
            let effects = {
                let Ok(mut inner) = shared.try_borrow_mut() else {
                    return;
                };
                let Inner { core, bound, .. } = &mut *inner;
                let Some(bound) = bound.as_ref() else {
                    return;
                };
                let samples: Vec<IntersectionSample> = entries
                    .iter()
                    .filter_map(|value| {
                        let entry = value.dyn_ref::<IntersectionObserverEntry>()?;
                        let index = bound.slide_index(&entry.target())?;
                        Some(IntersectionSample::new(index, entry.is_intersecting(), entry.intersection_ratio()))
                    })
                    .collect();
                core.intersections(&samples)
            };
            apply(&shared, effects);
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_root(Some(bound.handles.viewport.unchecked_ref()));
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(|err| js_err("IntersectionObserver", &err))?;
    for slide in &bound.slides {
        observer.observe(slide);
    }
    bound.observer = Some(Observer { observer, _callback: callback });
    Ok(())
}

fn render_pagination(weak: &WeakShared, bound: &mut Bound, indicators: &[Indicator]) -> Result<(), CarouselError> {
    clear_pagination(bound);
    let Some(container) = bound.handles.pagination.clone() else {
        return Ok(());
    };
    let document = container.owner_document().ok_or(CarouselError::Dom {
        op: "ownerDocument",
        detail: "pagination container is detached".to_owned(),
    })?;

    for indicator in indicators {
        let button = document
            .create_element("button")
            .map_err(|err| js_err("createElement", &err))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| CarouselError::Dom { op: "createElement", detail: "not an HTMLElement".to_owned() })?;
        set_attr(&button, "type", "button")?;
        button.set_class_name(INDICATOR_CLASS);
        set_attr(&button, "role", "tab")?;
        set_attr(&button, "aria-label", &indicator.label)?;
        if let Some(controls) = &indicator.controls {
            set_attr(&button, "aria-controls", controls)?;
        }
        mark(&button, indicator.active)?;

        container.append_child(&button).map_err(|err| js_err("appendChild", &err))?;
        let target = indicator.index;
        let weak = weak.clone();
        let listener = Listener::attach(&button, "click", false, move |_event| {
            dispatch(&weak, |core, layout| core.activate_indicator(target, layout));
        })?;
        bound.indicators.push((button, listener));
    }
    Ok(())
}

fn clear_pagination(bound: &mut Bound) {
    bound.indicators.clear();
    if let Some(container) = &bound.handles.pagination {
        container.set_inner_html("");
    }
}

// --- Effects ---

fn apply(shared: &Shared, effects: Vec<Effect>) {
    if effects.is_empty() {
        return;
    }
    let weak = Rc::downgrade(shared);
    let Ok(mut inner) = shared.try_borrow_mut() else {
        log::warn!("carousel busy; {} effect(s) dropped", effects.len());
        return;
    };
    let Some(bound) = inner.bound.as_mut() else {
        return;
    };
    for effect in effects {
        if let Err(err) = apply_one(&weak, bound, effect) {
            log::warn!("carousel effect failed: {err}");
        }
    }
}

fn apply_one(weak: &WeakShared, bound: &mut Bound, effect: Effect) -> Result<(), CarouselError> {
    match effect {
        Effect::SetControlsVisible(visible) => {
            if let Some(controls) = &bound.handles.controls {
                controls
                    .style()
                    .set_property("display", if visible { "flex" } else { "none" })
                    .map_err(|err| js_err("style.display", &err))?;
            }
        }
        Effect::MakeSlidesFocusable => {
            for slide in &bound.slides {
                set_attr(slide, "tabindex", "-1")?;
            }
        }
        Effect::RenderPagination(indicators) => render_pagination(weak, bound, &indicators)?,
        Effect::ClearPagination => clear_pagination(bound),
        Effect::SetActiveIndicator(index) => {
            for (i, (button, _)) in bound.indicators.iter().enumerate() {
                mark(button, i == index)?;
            }
        }
        Effect::AttachNavigation => attach_navigation(weak, bound)?,
        Effect::DetachNavigation => bound.navigation.clear(),
        Effect::StartTracking { threshold } => start_tracking(weak, bound, threshold)?,
        Effect::StopTracking => bound.observer = None,
        Effect::ScrollTo { left } => {
            let options = ScrollToOptions::new();
            options.set_left(left);
            options.set_behavior(ScrollBehavior::Smooth);
            bound.handles.viewport.scroll_to_with_scroll_to_options(&options);
        }
        Effect::FocusSlide(index) => {
            if let Some(slide) = bound.slides.get(index) {
                let options = FocusOptions::new();
                options.set_prevent_scroll(true);
                slide.focus_with_options(&options).map_err(|err| js_err("focus", &err))?;
            }
        }
        Effect::SetActiveSlide(index) => {
            for (i, slide) in bound.slides.iter().enumerate() {
                slide
                    .class_list()
                    .toggle_with_force(ACTIVE_CLASS, i == index)
                    .map_err(|err| js_err("classList.toggle", &err))?;
            }
        }
        Effect::Announce(text) => {
            if let Some(live_region) = &bound.handles.live_region {
                live_region.set_text_content(Some(&text));
            }
        }
    }
    Ok(())
}

fn set_attr(el: &HtmlElement, name: &str, value: &str) -> Result<(), CarouselError> {
    el.set_attribute(name, value).map_err(|err| js_err("setAttribute", &err))
}

/// Reflect an indicator's active state in its class and `aria-selected`.
fn mark(button: &HtmlElement, active: bool) -> Result<(), CarouselError> {
    button
        .class_list()
        .toggle_with_force(ACTIVE_CLASS, active)
        .map_err(|err| js_err("classList.toggle", &err))?;
    set_attr(button, "aria-selected", if active { "true" } else { "false" })
}
