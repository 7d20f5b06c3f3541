use crate::camera::OrbitCamera;
use crate::constants::{CURSOR_EXPLORE, CURSOR_INTERACTIVE, PICK_SPHERE_RADIUS};
use crate::core::interact::{ClickAction, GestureTracker};
use crate::core::scene::SceneState;
use crate::dom;
use crate::input::{self, PointerState};
use crate::panel::{self, InfoPanel};
use glam::Vec3;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<SceneState>>,
    pub camera: Rc<RefCell<OrbitCamera>>,
    pub tracker: Rc<RefCell<GestureTracker>>,
    pub pointer: Rc<RefCell<PointerState>>,
    pub panel: InfoPanel,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
    wire_wheel(&w);
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        let down = {
            let mut ps = w.pointer.borrow_mut();
            ps.x = pos.x;
            ps.y = pos.y;
            ps.down
        };

        if down {
            // A held button orbits the camera; the release classifier will
            // suppress the click if the pointer traveled far enough.
            w.camera
                .borrow_mut()
                .rotate_by(ev.movement_x() as f32, ev.movement_y() as f32);
        }

        // Hit-test on every move. The click handler trusts this result
        // rather than re-testing at release time.
        let (ro, rd) = {
            let cam = w.camera.borrow();
            cam.screen_to_world_ray(
                w.canvas.width() as f32,
                w.canvas.height() as f32,
                pos.x,
                pos.y,
            )
        };
        let hit = {
            let scene = w.scene.borrow();
            let centers: Vec<Vec3> = scene.markers.iter().map(|m| m.position).collect();
            input::pick_marker(ro, rd, &centers, PICK_SPHERE_RADIUS)
        };
        if w.scene.borrow_mut().set_hover(hit) {
            let cursor = if hit.is_some() {
                CURSOR_INTERACTIVE
            } else {
                CURSOR_EXPLORE
            };
            dom::set_cursor(&w.canvas, cursor);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        w.tracker
            .borrow_mut()
            .pointer_down(input::pointer_client_px(&ev));
        w.pointer.borrow_mut().down = true;
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
        let over_panel = panel::event_targets_panel(&ev);
        let hovered = w.scene.borrow().hovered();
        let action = w.tracker.borrow_mut().pointer_up(
            input::pointer_client_px(&ev),
            over_panel,
            hovered,
        );
        match action {
            ClickAction::ShowInfo(index) => {
                if let Some(doc) = dom::window_document() {
                    let scene = w.scene.borrow();
                    if let Some(marker) = scene.markers.get(index) {
                        w.panel.show(&doc, marker);
                        log::info!("[click] show info for marker {}", index);
                    }
                }
            }
            ClickAction::HideInfo => {
                if let Some(doc) = dom::window_document() {
                    w.panel.hide(&doc);
                }
            }
            ClickAction::None => {}
        }
        w.pointer.borrow_mut().down = false;
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        w.camera.borrow_mut().zoom_by(ev.delta_y() as f32);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}
