use crate::constants::MAX_FRAME_DT_SEC;
use crate::debug::DebugView;
use crate::render;
use instant::Instant;
use ripple_core::{OrbitCamera, SurfaceRegistry};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub registry: Rc<RefCell<SurfaceRegistry>>,
    pub camera: Rc<RefCell<OrbitCamera>>,
    pub debug_view: Rc<RefCell<DebugView>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        // Frame clock drives every surface's ripple; pointer events only move centers.
        self.registry.borrow_mut().advance(dt_sec);

        let w = self.canvas.width();
        let h = self.canvas.height();
        let camera = {
            let mut cam = self.camera.borrow_mut();
            cam.set_aspect(w, h);
            cam.transform()
        };

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(w, h);
            g.set_debug_view(*self.debug_view.borrow());
            let registry = self.registry.borrow();
            g.sync_surfaces(&registry);
            if let Err(e) = g.render(&registry, &camera) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
