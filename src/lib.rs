#![cfg(target_arch = "wasm32")]
use instant::Instant;
use ripple_core::{OrbitCamera, SurfaceLocator, SurfaceRegistry, ViewerConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod debug;
mod dom;
mod events;
mod frame;
mod input;
mod loader;
mod overlay;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Fetch the asset in the background and swap it into the registry.
/// A failed load leaves the registry empty; the loop keeps running.
fn spawn_asset_load(url: String, keys: events::KeyboardWiring) {
    spawn_local(async move {
        *keys.status.borrow_mut() = format!("loading {}", url);
        events::refresh_hint(&keys);
        match loader::load_surfaces(&url).await {
            Ok(surfaces) => {
                let interactive = surfaces.iter().filter(|s| s.is_interactive()).count();
                log::info!(
                    "[loader] {} surfaces ({} interactive) from {}",
                    surfaces.len(),
                    interactive,
                    url
                );
                let mut registry = keys.registry.borrow_mut();
                registry.replace_surfaces(surfaces);
                if let Some(bounds) = registry.bounds() {
                    keys.camera.borrow_mut().fit_to_bounds(&bounds);
                }
                drop(registry);
                *keys.status.borrow_mut() = "drag to orbit, wheel to zoom".to_string();
            }
            Err(e) => {
                log::error!("[loader] {} failed: {:?}", url, e);
                *keys.status.borrow_mut() = format!("failed to load {}", url);
            }
        }
        events::refresh_hint(&keys);
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ripple-viewer starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, constants::CANVAS_ID)?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let config = ViewerConfig::default();
    if let Err(e) = config.ripple.validate() {
        log::warn!("[config] default ripple parameters render nothing: {}", e);
    }
    let registry = Rc::new(RefCell::new(SurfaceRegistry::new(config.ripple)));
    let camera = Rc::new(RefCell::new(OrbitCamera::default()));
    let debug_view = Rc::new(RefCell::new(debug::DebugView::default()));
    let locator = SurfaceLocator::new(config.fallback);

    let keys = events::KeyboardWiring {
        registry: registry.clone(),
        camera: camera.clone(),
        debug_view: debug_view.clone(),
        status: Rc::new(RefCell::new(String::new())),
    };
    events::wire_global_keydown(keys.clone());
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        registry: registry.clone(),
        camera: camera.clone(),
        locator,
        pointer: Rc::new(RefCell::new(input::PointerState::default())),
    });
    overlay::show(&document);

    let gpu = frame::init_gpu(&canvas).await;
    if gpu.is_none() {
        *keys.status.borrow_mut() = "WebGPU unavailable".to_string();
        events::refresh_hint(&keys);
    }

    spawn_asset_load(loader::asset_url(&config.asset_url), keys);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        registry,
        camera,
        debug_view,
        canvas,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
