use site_core::content::SECTION_IDS;
use site_core::{Section, SectionRegistry};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!(format!("{:?}", e))
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Measure every known section from the rendered layout, in document order.
/// Sections missing from the markup are skipped rather than measured as zero.
pub fn measure_sections(document: &web::Document) -> SectionRegistry {
    let mut sections = Vec::with_capacity(SECTION_IDS.len());
    for id in SECTION_IDS {
        let Some(el) = document.get_element_by_id(id) else {
            continue;
        };
        let Some(el) = el.dyn_ref::<web::HtmlElement>() else {
            continue;
        };
        sections.push(Section {
            id,
            top_offset: el.offset_top() as f64,
            height: el.offset_height() as f64,
        });
    }
    SectionRegistry::from_sections(sections)
}

pub fn set_navbar_scrolled(document: &web::Document, scrolled: bool) {
    if let Some(nav) = document.get_element_by_id("site-nav") {
        let list = nav.class_list();
        let _ = if scrolled {
            list.add_1("scrolled")
        } else {
            list.remove_1("scrolled")
        };
    }
}

/// Re-tag the nav links so exactly one carries the `active` class.
pub fn set_active_nav_link(document: &web::Document, active: &str) {
    let Ok(links) = document.query_selector_all("a[data-section]") else {
        return;
    };
    for i in 0..links.length() {
        let Some(node) = links.item(i) else { continue };
        let Some(el) = node.dyn_ref::<web::Element>() else {
            continue;
        };
        let is_active = el.get_attribute("data-section").as_deref() == Some(active);
        let list = el.class_list();
        let _ = if is_active {
            list.add_1("active")
        } else {
            list.remove_1("active")
        };
    }
}

pub fn input_value(document: &web::Document, id: &str) -> String {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
        .map(|i| i.value())
        .unwrap_or_default()
}

pub fn textarea_value(document: &web::Document, id: &str) -> String {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlTextAreaElement>().ok())
        .map(|t| t.value())
        .unwrap_or_default()
}

pub fn clear_contact_form(document: &web::Document) {
    for id in ["contact-name", "contact-email"] {
        if let Some(input) = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
        {
            input.set_value("");
        }
    }
    if let Some(area) = document
        .get_element_by_id("contact-message")
        .and_then(|el| el.dyn_into::<web::HtmlTextAreaElement>().ok())
    {
        area.set_value("");
    }
}
