#![cfg(target_arch = "wasm32")]

mod dom;
mod events;
mod frame;
mod render;
mod reveal;
mod sections;
mod toast;

use events::EventSubscription;
use frame::{FrameContext, FrameLoop};
use rand::rngs::StdRng;
use rand::SeedableRng;
use reveal::RevealObserver;
use site_core::{ParticleField, RevealSet, ScrollTracker, PARTICLE_COUNT};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Everything the live page owns. Dropping this tears down every listener,
/// observer, and the animation frame loop.
struct Page {
    _scroll: EventSubscription,
    _resize: EventSubscription,
    _submit: EventSubscription,
    _to_top: EventSubscription,
    _reveals: Vec<RevealObserver>,
    _frames: FrameLoop,
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("[init] starting");
    spawn_local(async {
        match init().await {
            Ok(page) => PAGE.with(|slot| *slot.borrow_mut() = Some(page)),
            Err(e) => log::error!("[init] failed: {e:?}"),
        }
    });
}

async fn init() -> anyhow::Result<Page> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = document
        .get_element_by_id("bg-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #bg-canvas"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| anyhow::anyhow!("#bg-canvas is not a canvas"))?;
    dom::sync_canvas_backing_size(&canvas);

    sections::populate(&document)?;

    // Measure after population so offsets include the rendered content.
    let registry = Rc::new(RefCell::new(dom::measure_sections(&document)));
    let tracker = Rc::new(RefCell::new(ScrollTracker::new()));
    dom::set_active_nav_link(&document, tracker.borrow().active_section());

    let scroll = events::wire_scroll(&window, &document, tracker.clone(), registry.clone());
    let resize = events::wire_resize(&window, &document, &canvas, registry.clone());
    let submit = events::wire_contact_form(&document)?;
    let to_top = events::wire_to_top(&document)?;

    let reveals = reveal::wire_reveals(&document, Rc::new(RefCell::new(RevealSet::new())))?;

    let mut rng = StdRng::from_entropy();
    let field = ParticleField::generate(PARTICLE_COUNT, &mut rng);
    let gpu = frame::init_gpu(&canvas, &field).await;
    let ctx = Rc::new(RefCell::new(FrameContext::new(canvas, document.clone(), gpu)));
    let frames = FrameLoop::start(ctx);

    log::info!("[init] page ready");
    Ok(Page {
        _scroll: scroll,
        _resize: resize,
        _submit: submit,
        _to_top: to_top,
        _reveals: reveals,
        _frames: frames,
    })
}
