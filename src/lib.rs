//! Slide carousel controller for the portfolio page.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! carousel lifecycle: binding to the page markup, tracking which slide is
//! current, wrapping navigation at both ends, centering the target slide in
//! the viewport, and tearing everything down again when the layout crosses a
//! breakpoint. The controller itself is a pure state machine that returns
//! [`controller::Effect`]s; the [`dom`] host (behind the `hydrate` feature)
//! is the only code that touches the document.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Carousel state machine ([`controller::CarouselCore`]) and its effects |
//! | [`slides`] | Fixed, ordered slide set |
//! | [`pagination`] | One indicator per slide, exactly one active |
//! | [`navigation`] | Previous/next directions, swipe and arrow-key mapping, control visibility |
//! | [`visibility`] | Intersection samples to "current slide" reports |
//! | [`geometry`] | Index wrap-around and centering scroll offset |
//! | [`binding`] | Bind-once handle resolution for the carousel markup |
//! | [`config`] | Configuration record, selectors, and page presets |
//! | [`resize`] | Breakpoint / jitter gate deciding when to rebuild |
//! | [`page`] | The page's named carousel pair |
//! | [`error`] | Crate error type |
//! | [`consts`] | Shared numeric constants (thresholds, breakpoint, debounce) |
//! | `dom` | web-sys host that applies effects and wires events (`hydrate` only) |

pub mod binding;
pub mod config;
pub mod consts;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod navigation;
pub mod page;
pub mod pagination;
pub mod resize;
pub mod slides;
pub mod visibility;

#[cfg(feature = "hydrate")]
pub mod dom;

pub use controller::{CarouselCore, Effect, Phase};
pub use error::CarouselError;
