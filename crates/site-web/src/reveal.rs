use crate::dom::js_err;
use site_core::{RevealSet, REVEAL_THRESHOLD_SECTION};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// One IntersectionObserver plus its callback, disconnected on drop.
pub struct RevealObserver {
    observer: web::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Observe every `[data-reveal]` block. The attribute value is the fractional
/// visibility threshold; blocks sharing a threshold share one observer.
///
/// The reveal is a one-way latch: on the first crossing the block gets the
/// `revealed` class (CSS runs the fixed-duration entrance) and is
/// unobserved, so scrolling out and back in never re-animates it.
pub fn wire_reveals(
    document: &web::Document,
    set: Rc<RefCell<RevealSet>>,
) -> anyhow::Result<Vec<RevealObserver>> {
    let list = document.query_selector_all("[data-reveal]").map_err(js_err)?;
    let mut groups: HashMap<String, Vec<web::Element>> = HashMap::new();
    for i in 0..list.length() {
        let Some(node) = list.item(i) else { continue };
        let Ok(el) = node.dyn_into::<web::Element>() else {
            continue;
        };
        let key = el.get_attribute("data-reveal").unwrap_or_default();
        groups.entry(key).or_default().push(el);
    }

    let mut observers = Vec::with_capacity(groups.len());
    for (key, elements) in groups {
        let threshold: f32 = key.parse().unwrap_or(REVEAL_THRESHOLD_SECTION);
        for el in &elements {
            set.borrow_mut().register(el.id(), threshold);
        }

        let set_cb = set.clone();
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    let ratio = entry.intersection_ratio() as f32;
                    if set_cb.borrow_mut().observe(&target.id(), ratio) {
                        let _ = target.class_list().add_1("revealed");
                        observer.unobserve(&target);
                        log::debug!("[reveal] {} revealed at {ratio:.2}", target.id());
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold as f64));
        let observer =
            web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(js_err)?;
        for el in &elements {
            observer.observe(el);
        }
        observers.push(RevealObserver {
            observer,
            _callback: callback,
        });
    }
    log::info!("[reveal] observing {} blocks", set.borrow().len());
    Ok(observers)
}
