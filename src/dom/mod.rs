//! Browser host: binds carousels to the page and applies their effects.
//!
//! Everything in here depends on `web_sys` and only builds with the
//! `hydrate` feature. The controller never sees a DOM handle; this module
//! resolves selectors, turns DOM events into controller calls, and turns the
//! returned [`crate::Effect`]s back into DOM mutations.
//!
//! TRADE-OFFS
//! ==========
//! DOM calls that the browser rejects are logged and skipped, never raised.

pub mod carousel;
pub mod page;

use std::cell::RefCell;

use wasm_bindgen::{JsCast, JsError};
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use crate::binding::Resolver;
use crate::error::CarouselError;
use crate::page::PageOptions;

pub use carousel::DomCarousel;
pub use page::DomPage;

thread_local! {
    static PAGE: RefCell<Option<DomPage>> = const { RefCell::new(None) };
}

/// WASM entry point: install logging, then mount the page's carousels.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&JsValue::from_str(&err.to_string()));
    }

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(|| mount(&PageOptions::default()));
        if let Err(err) = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()) {
            log::warn!("{}", js_err("addEventListener", &err));
        }
    } else {
        mount(&PageOptions::default());
    }
}

/// Rebuild the page's carousels from a JSON options document.
///
/// The document is keyed by carousel name (`viz`, `testimonial`); a carousel
/// it leaves out keeps its preset. The previous mount is torn down first.
///
/// # Errors
///
/// Fails on a malformed document, leaving the current mount in place.
#[wasm_bindgen(js_name = mountWithOptions)]
pub fn mount_with_options(json: &str) -> Result<(), JsError> {
    let options = PageOptions::from_json(json)?;
    mount(&options);
    Ok(())
}

fn mount(options: &PageOptions) {
    drop(PAGE.with(|slot| slot.borrow_mut().take()));
    match DomPage::mount(options) {
        Ok(page) => {
            PAGE.with(|slot| *slot.borrow_mut() = Some(page));
            log::info!("carousels initialized");
        }
        Err(err) => log::warn!("carousels not mounted: {err}"),
    }
}

/// Resolves selectors against a live document.
#[derive(Debug, Clone)]
pub struct DocumentResolver {
    document: Document,
}

impl DocumentResolver {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Resolver for the current window's document, if there is one.
    #[must_use]
    pub fn current() -> Option<Self> {
        web_sys::window().and_then(|w| w.document()).map(Self::new)
    }
}

impl Resolver for DocumentResolver {
    type Handle = HtmlElement;

    fn query(&self, selector: &str) -> Option<HtmlElement> {
        match self.document.query_selector(selector) {
            Ok(found) => found.and_then(|el| el.dyn_ref::<HtmlElement>().cloned()),
            Err(err) => {
                log::warn!("{}", js_err("querySelector", &err));
                None
            }
        }
    }

    fn by_id(&self, id: &str) -> Option<HtmlElement> {
        self.document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_ref::<HtmlElement>().cloned())
    }
}

/// Current `window.innerWidth`, or `0.0` outside a window.
#[must_use]
pub fn window_width() -> f64 {
    let Some(window) = web_sys::window() else {
        return 0.0;
    };
    match window.inner_width() {
        Ok(width) => width.as_f64().unwrap_or(0.0),
        Err(err) => {
            log::warn!("{}", js_err("innerWidth", &err));
            0.0
        }
    }
}

/// Wrap a rejected DOM call.
pub(crate) fn js_err(op: &'static str, value: &JsValue) -> CarouselError {
    let detail = value.as_string().unwrap_or_else(|| format!("{value:?}"));
    CarouselError::Dom { op, detail }
}
