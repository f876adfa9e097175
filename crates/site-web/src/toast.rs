use site_core::{Notice, TOAST_DISMISS_MS};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Show a transient notification. Auto-dismisses after [`TOAST_DISMISS_MS`];
/// the one-shot timeout closure frees itself after firing.
pub fn show(document: &web::Document, notice: &Notice) {
    let Some(root) = document.get_element_by_id("toast-root") else {
        log::warn!("[toast] missing #toast-root");
        return;
    };
    let Ok(el) = document.create_element("div") else {
        return;
    };
    let _ = el.set_attribute("class", "toast");
    if let Ok(title) = document.create_element("strong") {
        title.set_text_content(Some(&notice.title));
        let _ = el.append_child(title.as_ref());
    }
    if let Ok(desc) = document.create_element("p") {
        desc.set_text_content(Some(&notice.description));
        let _ = el.append_child(desc.as_ref());
    }
    let _ = root.append_child(el.as_ref());

    if let Some(w) = web::window() {
        let toast = el.clone();
        let cb = Closure::once_into_js(move || toast.remove());
        let _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.unchecked_ref(),
            TOAST_DISMISS_MS,
        );
    }
}
