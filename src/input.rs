use glam::{Vec2, Vec3};
use web_sys as web;

/// Last known pointer position (canvas backing pixels) and button state,
/// shared between the event handlers and the frame loop.
#[derive(Default, Clone, Copy)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub down: bool,
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Hit-test a ray against every marker pick sphere and return the index of
/// the nearest intersection, ordered by distance from the viewer.
pub fn pick_marker(
    ray_origin: Vec3,
    ray_dir: Vec3,
    centers: &[Vec3],
    radius: f32,
) -> Option<usize> {
    let mut best = None::<(usize, f32)>;
    for (i, center) in centers.iter().enumerate() {
        if let Some(t) = ray_sphere(ray_origin, ray_dir, *center, radius) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best.map(|(i, _)| i)
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width().max(1.0) as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height().max(1.0) as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

/// Raw client (CSS pixel) coordinates, used for the click/drag distance so
/// the threshold is in true screen pixels regardless of devicePixelRatio.
#[inline]
pub fn pointer_client_px(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}
