use crate::debug::DebugView;
use crate::overlay;
use ripple_core::{OrbitCamera, SurfaceRegistry};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct KeyboardWiring {
    pub registry: Rc<RefCell<SurfaceRegistry>>,
    pub camera: Rc<RefCell<OrbitCamera>>,
    pub debug_view: Rc<RefCell<DebugView>>,
    pub status: Rc<RefCell<String>>,
}

/// Refresh the hint overlay from the current viewer state.
pub fn refresh_hint(w: &KeyboardWiring) {
    if let Some(document) = crate::dom::window_document() {
        let registry = w.registry.borrow();
        let status = w.status.borrow();
        overlay::update_hint(
            &document,
            &overlay::HintStatus {
                view: *w.debug_view.borrow(),
                pulse: registry.defaults().pulse,
                surfaces: registry.len(),
                status: status.as_str(),
            },
        );
    }
}

pub fn handle_global_keydown(ev: &web::KeyboardEvent, w: &KeyboardWiring) {
    let key = ev.key();
    if let Some(view) = DebugView::for_digit(&key) {
        *w.debug_view.borrow_mut() = view;
        log::info!("[keys] debug view = {}", view.label());
        refresh_hint(w);
        return;
    }
    match key.as_str() {
        "p" | "P" => {
            let mut registry = w.registry.borrow_mut();
            let params = registry.defaults();
            let params = params.with_pulse(params.pulse.toggled());
            registry.set_all_parameters(params);
            log::info!("[keys] pulse policy = {:?}", params.pulse);
            drop(registry);
            refresh_hint(w);
        }
        "r" | "R" => {
            w.registry.borrow_mut().reset_all();
            log::info!("[keys] ripples reset");
        }
        "f" | "F" => {
            if let Some(bounds) = w.registry.borrow().bounds() {
                w.camera.borrow_mut().fit_to_bounds(&bounds);
            }
        }
        "h" | "H" => {
            if let Some(document) = crate::dom::window_document() {
                overlay::toggle(&document);
            }
            ev.prevent_default();
        }
        _ => {}
    }
}

pub fn wire_global_keydown(w: KeyboardWiring) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &w);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
