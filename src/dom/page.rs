//! Page mount: both carousels plus the debounced window-resize hook.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, Window};

use crate::consts::RESIZE_DEBOUNCE_MS;
use crate::error::CarouselError;
use crate::page::{PageOptions, PortfolioCarousels};

use super::{DomCarousel, js_err, window_width};

type Carousels = Rc<RefCell<PortfolioCarousels<DomCarousel>>>;

/// The mounted page: owns the carousels and the resize listener.
pub struct DomPage {
    window: Window,
    carousels: Carousels,
    pending: Rc<RefCell<Option<Timeout>>>,
    on_resize: Closure<dyn FnMut(Event)>,
}

impl DomPage {
    /// Bind every carousel and start listening for resizes.
    ///
    /// # Errors
    ///
    /// Fails only when there is no window or the resize listener cannot be
    /// attached. Missing carousel markup is logged, not returned.
    pub fn mount(options: &PageOptions) -> Result<Self, CarouselError> {
        let window = web_sys::window()
            .ok_or(CarouselError::Dom { op: "window", detail: "no global window".to_owned() })?;

        let carousels: Carousels = Rc::new(RefCell::new(PortfolioCarousels::new(window_width(), options, |name, options| {
            log::debug!("mounting {} carousel", name.as_str());
            DomCarousel::new(options)
        })));
        let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

        let on_resize = {
            let carousels = Rc::downgrade(&carousels);
            let pending = Rc::clone(&pending);
            Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                let carousels = carousels.clone();
                // Replacing the pending timeout drops, and so cancels, the previous one.
                *pending.borrow_mut() = Some(Timeout::new(RESIZE_DEBOUNCE_MS, move || {
                    if let Some(carousels) = carousels.upgrade() {
                        carousels.borrow_mut().resized(window_width());
                    }
                }));
            })
        };
        window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
            .map_err(|err| js_err("addEventListener", &err))?;

        Ok(Self { window, carousels, pending, on_resize })
    }
}

impl Drop for DomPage {
    fn drop(&mut self) {
        drop(self.pending.borrow_mut().take());
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref())
        {
            log::warn!("{}", js_err("removeEventListener", &err));
        }
        self.carousels.borrow_mut().destroy();
    }
}
