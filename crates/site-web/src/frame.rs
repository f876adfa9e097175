use crate::render;
use instant::Instant;
use site_core::content::{active_role, HERO_ROLES};
use site_core::{rotation_angle, ParticleField};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Per-frame state for the particle background.
///
/// Rotation is recomputed from absolute elapsed time each tick, so skipped
/// frames (hidden tab, throttling) cause no drift and need no catch-up.
pub struct FrameContext {
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'static>>,
    document: web::Document,
    current_role: &'static str,
    started: Instant,
}

impl FrameContext {
    pub fn new(
        canvas: web::HtmlCanvasElement,
        document: web::Document,
        gpu: Option<render::GpuState<'static>>,
    ) -> Self {
        Self {
            canvas,
            gpu,
            document,
            current_role: HERO_ROLES[0],
            started: Instant::now(),
        }
    }

    pub fn frame(&mut self) {
        let elapsed = self.started.elapsed().as_secs_f64();

        // Hero role cycle; DOM touched only when the role actually changes.
        let role = active_role(elapsed);
        if role != self.current_role {
            self.current_role = role;
            if let Some(el) = self.document.get_element_by_id("hero-role") {
                el.set_text_content(Some(role));
            }
        }

        let angle = rotation_angle(elapsed);
        // No rendering surface: skip the tick; the next one resumes naturally.
        let Some(gpu) = self.gpu.as_mut() else { return };
        gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
        if let Err(e) = gpu.render(angle) {
            log::error!("[gpu] render error: {:?}", e);
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    field: &ParticleField,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for the surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, field).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[gpu] init error: {:?}", e);
            None
        }
    }
}

/// Handle for the requestAnimationFrame loop. Dropping it cancels the
/// pending frame, so no tick can run against a dropped page.
pub struct FrameLoop {
    raf_id: Rc<Cell<Option<i32>>>,
    _tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    pub fn start(ctx: Rc<RefCell<FrameContext>>) -> Self {
        let raf_id = Rc::new(Cell::new(None));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let tick_clone = tick.clone();
        let raf_clone = raf_id.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            ctx.borrow_mut().frame();
            if let Some(w) = web::window() {
                if let Ok(id) = w.request_animation_frame(
                    tick_clone
                        .borrow()
                        .as_ref()
                        .unwrap()
                        .as_ref()
                        .unchecked_ref(),
                ) {
                    raf_clone.set(Some(id));
                }
            }
        }) as Box<dyn FnMut()>));
        if let Some(w) = web::window() {
            if let Ok(id) = w
                .request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref())
            {
                raf_id.set(Some(id));
            }
        }
        Self {
            raf_id,
            _tick: tick,
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                let _ = w.cancel_animation_frame(id);
            }
        }
    }
}
