use crate::{dom, toast};
use site_core::{ContactForm, ScrollTracker, SectionRegistry};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// RAII wrapper around a DOM event listener.
///
/// The listener is attached on creation and removed on drop, so a dropped
/// page can never receive a stray callback. This replaces the
/// `Closure::forget` pattern with an explicit subscription lifetime.
pub struct EventSubscription {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventSubscription {
    pub fn listen(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            kind,
            closure,
        }
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// Scroll sampling: one state update per event, DOM touched only on edges.
pub fn wire_scroll(
    window: &web::Window,
    document: &web::Document,
    tracker: Rc<RefCell<ScrollTracker>>,
    registry: Rc<RefCell<SectionRegistry>>,
) -> EventSubscription {
    let document = document.clone();
    EventSubscription::listen(window.as_ref(), "scroll", move |_ev| {
        let Some(w) = web::window() else { return };
        let offset_y = w.scroll_y().unwrap_or(0.0);
        let update = tracker.borrow_mut().on_scroll(offset_y, &registry.borrow());
        if update.scrolled_changed {
            dom::set_navbar_scrolled(&document, tracker.borrow().state().scrolled_past_threshold);
        }
        if update.active_changed {
            let active = tracker.borrow().active_section();
            dom::set_active_nav_link(&document, active);
            log::debug!("[scroll] active section -> {active}");
        }
    })
}

/// Layout changes invalidate the measured section offsets, so re-measure and
/// keep the canvas backing store matched to its CSS size.
pub fn wire_resize(
    window: &web::Window,
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
    registry: Rc<RefCell<SectionRegistry>>,
) -> EventSubscription {
    let document = document.clone();
    let canvas = canvas.clone();
    EventSubscription::listen(window.as_ref(), "resize", move |_ev| {
        dom::sync_canvas_backing_size(&canvas);
        *registry.borrow_mut() = dom::measure_sections(&document);
    })
}

/// Contact form submission: no transport, log-only. A success shows the
/// confirmation toast and clears the fields; a validation failure leaves the
/// entered values in place.
pub fn wire_contact_form(document: &web::Document) -> anyhow::Result<EventSubscription> {
    let form = document
        .get_element_by_id("contact-form")
        .ok_or_else(|| anyhow::anyhow!("missing #contact-form"))?;
    let doc = document.clone();
    Ok(EventSubscription::listen(
        form.as_ref(),
        "submit",
        move |ev| {
            ev.prevent_default();
            let mut form = ContactForm {
                name: dom::input_value(&doc, "contact-name"),
                email: dom::input_value(&doc, "contact-email"),
                message: dom::textarea_value(&doc, "contact-message"),
            };
            match form.submit() {
                Ok(notice) => {
                    toast::show(&doc, &notice);
                    dom::clear_contact_form(&doc);
                }
                Err(e) => log::warn!("[form] rejected: {e}"),
            }
        },
    ))
}

/// The floating scroll-to-top button.
pub fn wire_to_top(document: &web::Document) -> anyhow::Result<EventSubscription> {
    let button = document
        .get_element_by_id("to-top")
        .ok_or_else(|| anyhow::anyhow!("missing #to-top"))?;
    Ok(EventSubscription::listen(
        button.as_ref(),
        "click",
        move |_ev| {
            if let Some(w) = web::window() {
                let opts = web::ScrollToOptions::new();
                opts.set_top(0.0);
                opts.set_behavior(web::ScrollBehavior::Smooth);
                w.scroll_to_with_scroll_to_options(&opts);
            }
        },
    ))
}
