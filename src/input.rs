use glam::Vec2;
use web_sys as web;

#[derive(Default, Clone, Copy)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub down: bool,
    pub dragging: bool,
    pub press_x: f32,
    pub press_y: f32,
}

impl PointerState {
    /// Record a move and return the pixel delta since the last event.
    pub fn move_to(&mut self, pos: Vec2) -> Vec2 {
        let delta = Vec2::new(pos.x - self.x, pos.y - self.y);
        self.x = pos.x;
        self.y = pos.y;
        if self.down && !self.dragging {
            let travelled = Vec2::new(pos.x - self.press_x, pos.y - self.press_y).length();
            self.dragging = travelled >= crate::constants::DRAG_THRESHOLD_PX;
        }
        delta
    }

    pub fn press(&mut self, pos: Vec2) {
        self.x = pos.x;
        self.y = pos.y;
        self.press_x = pos.x;
        self.press_y = pos.y;
        self.down = true;
        self.dragging = false;
    }

    pub fn release(&mut self) {
        self.down = false;
        self.dragging = false;
    }
}

#[inline]
pub fn pointer_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width().max(1.0) as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height().max(1.0) as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

/// Backing-store pixels → normalized device coordinates (y up).
///
/// Returns `None` for an empty canvas or a point outside it.
#[inline]
pub fn px_to_ndc(px: Vec2, width: u32, height: u32) -> Option<Vec2> {
    if width == 0 || height == 0 || !px.is_finite() {
        return None;
    }
    let ndc = Vec2::new(
        2.0 * px.x / width as f32 - 1.0,
        1.0 - 2.0 * px.y / height as f32,
    );
    (ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0).then_some(ndc)
}

/// Orbit angles (yaw, pitch) for a drag of `delta` pixels.
#[inline]
pub fn drag_to_orbit(delta: Vec2) -> (f32, f32) {
    let k = crate::constants::ORBIT_RADIANS_PER_PX;
    (-delta.x * k, delta.y * k)
}

/// Distance multiplier for a wheel event; positive `delta_y` zooms out.
#[inline]
pub fn wheel_zoom_factor(delta_y: f32) -> f32 {
    if !delta_y.is_finite() {
        return 1.0;
    }
    (delta_y * crate::constants::ZOOM_PER_WHEEL_PX).clamp(-1.0, 1.0).exp()
}
