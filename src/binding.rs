//! Bind-once resolution of carousel selectors into element handles.
//!
//! Selectors are looked up once when a carousel is constructed and again
//! only on an explicit reconfigure. The two required parts (viewport and
//! track) turn into an explicit [`CarouselError::MissingBinding`]; every
//! optional part simply resolves to `None`.

#[cfg(test)]
#[path = "binding_test.rs"]
mod binding_test;

use crate::config::CarouselSelectors;
use crate::error::CarouselError;

/// Looks elements up in whatever document the host renders into.
pub trait Resolver {
    type Handle: Clone;

    /// First element matching a CSS selector.
    fn query(&self, selector: &str) -> Option<Self::Handle>;

    /// Element with the given id.
    fn by_id(&self, id: &str) -> Option<Self::Handle>;
}

/// Resolved handles for one carousel.
#[derive(Debug, Clone)]
pub struct Bindings<H> {
    pub viewport: H,
    pub track: H,
    pub prev_button: Option<H>,
    pub next_button: Option<H>,
    pub pagination: Option<H>,
    pub live_region: Option<H>,
    pub controls: Option<H>,
}

impl<H: Clone> Bindings<H> {
    /// Resolve every selector against `resolver`.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::MissingBinding`] when the viewport or the
    /// track cannot be found.
    pub fn resolve<R>(resolver: &R, selectors: &CarouselSelectors) -> Result<Self, CarouselError>
    where
        R: Resolver<Handle = H>,
    {
        let viewport = required(resolver, "viewport", &selectors.viewport)?;
        let track = required(resolver, "track", &selectors.track)?;
        Ok(Self {
            viewport,
            track,
            prev_button: optional(resolver, selectors.prev_button.as_deref()),
            next_button: optional(resolver, selectors.next_button.as_deref()),
            pagination: optional(resolver, selectors.pagination.as_deref()),
            live_region: selectors
                .live_region_id
                .as_deref()
                .filter(|id| !id.is_empty())
                .and_then(|id| resolver.by_id(id)),
            controls: optional(resolver, selectors.controls.as_deref()),
        })
    }
}

fn required<R: Resolver>(resolver: &R, role: &'static str, selector: &str) -> Result<R::Handle, CarouselError> {
    let found = if selector.is_empty() { None } else { resolver.query(selector) };
    found.ok_or_else(|| CarouselError::MissingBinding { role, selector: selector.to_owned() })
}

fn optional<R: Resolver>(resolver: &R, selector: Option<&str>) -> Option<R::Handle> {
    selector.filter(|s| !s.is_empty()).and_then(|s| resolver.query(s))
}
