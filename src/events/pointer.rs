use crate::input;
use ripple_core::{OrbitCamera, SurfaceLocator, SurfaceRegistry};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub registry: Rc<RefCell<SurfaceRegistry>>,
    pub camera: Rc<RefCell<OrbitCamera>>,
    pub locator: SurfaceLocator,
    pub pointer: Rc<RefCell<input::PointerState>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
    wire_pointerleave(&w);
    wire_wheel(&w);
}

/// Re-run the locator for the current pointer position.
fn locate_at(w: &InputWiring, pos: glam::Vec2) {
    let camera = w.camera.borrow().transform();
    let mut registry = w.registry.borrow_mut();
    match input::px_to_ndc(pos, w.canvas.width(), w.canvas.height()) {
        Some(ndc) => {
            w.locator.handle_pointer(&mut registry, ndc, &camera);
        }
        None => w.locator.apply(&mut registry, None),
    }
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        let (delta, dragging) = {
            let mut ps = w.pointer.borrow_mut();
            let delta = ps.move_to(pos);
            (delta, ps.dragging)
        };
        if dragging {
            let (d_yaw, d_pitch) = input::drag_to_orbit(delta);
            w.camera.borrow_mut().orbit(d_yaw, d_pitch);
        }
        locate_at(&w, pos);
    }) as Box<dyn FnMut(_)>);

    _ = canvas_for_listener
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        w.pointer.borrow_mut().press(pos);
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let was_dragging = w.pointer.borrow().dragging;
        w.pointer.borrow_mut().release();
        _ = w.canvas.release_pointer_capture(ev.pointer_id());
        if was_dragging {
            log::debug!("[pointer] orbit drag finished");
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerleave(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        if !w.pointer.borrow().down {
            w.locator.apply(&mut w.registry.borrow_mut(), None);
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let factor = input::wheel_zoom_factor(ev.delta_y() as f32);
        w.camera.borrow_mut().zoom(factor);
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        locate_at(&w, pos);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}
