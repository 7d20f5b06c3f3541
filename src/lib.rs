#![cfg(target_arch = "wasm32")]
use crate::camera::OrbitCamera;
use crate::core::content;
use crate::core::interact::GestureTracker;
use crate::core::scene::{Marker, SceneState};
use crate::input::PointerState;
use glam::Vec3;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod panel;
mod render;

// Maintain canvas internal pixel size to match CSS size * devicePixelRatio
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

fn build_scene() -> SceneState {
    let markers: Vec<Marker> = content::ACHIEVEMENTS
        .iter()
        .map(|a| Marker {
            position: Vec3::from(a.position),
            title: a.title,
            description: a.description,
        })
        .collect();
    // Fresh decorative layout per visit; the markers themselves are fixed
    let seed = js_sys::Date::now() as u64;
    SceneState::new(
        markers,
        content::BACKGROUND_STAR_COUNT,
        content::PARTICLE_COUNT,
        seed,
    )
}

// Intro overlay: one start action dismisses it, then a transient hint
// appears and dismisses itself after a fixed delay.
fn wire_intro(document: &web::Document) {
    dom::add_click_listener(document, "start-button", move || {
        if let Some(doc) = dom::window_document() {
            overlay::hide(&doc);
            overlay::show_hint(&doc);
            dom::set_timeout_once(constants::HINT_DISMISS_MS, || {
                if let Some(doc) = dom::window_document() {
                    overlay::hide_hint(&doc);
                }
            });
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("starfield-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    wire_canvas_resize(&canvas);

    // Start the scene immediately; the intro overlay sits on top until the
    // start action dismisses it.
    static STARTED: AtomicBool = AtomicBool::new(false);
    if !STARTED.swap(true, Ordering::SeqCst) {
        let canvas_inner = canvas.clone();
        spawn_local(async move {
            let document = match dom::window_document() {
                Some(d) => d,
                None => return,
            };
            wire_intro(&document);

            let scene = Rc::new(RefCell::new(build_scene()));
            let camera = Rc::new(RefCell::new(OrbitCamera::new()));
            let tracker = Rc::new(RefCell::new(GestureTracker::default()));
            let pointer = Rc::new(RefCell::new(PointerState::default()));

            let panel = panel::InfoPanel::new();
            panel.wire_close(&document);

            dom::set_cursor(&canvas_inner, constants::CURSOR_EXPLORE);

            let (line_points, sprite_capacity) = {
                let s = scene.borrow();
                let points: Vec<Vec3> = s.markers.iter().map(|m| m.position).collect();
                let capacity =
                    s.markers.len() + s.stars.len() + s.particles.len() + content::NEBULAS.len();
                (points, capacity)
            };
            let gpu = frame::init_gpu(&canvas_inner, &line_points, sprite_capacity).await;

            events::wire_input_handlers(events::InputWiring {
                canvas: canvas_inner.clone(),
                scene: scene.clone(),
                camera: camera.clone(),
                tracker: tracker.clone(),
                pointer: pointer.clone(),
                panel,
            });

            let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
                scene,
                camera,
                pointer,
                canvas: canvas_inner,
                gpu,
                last_instant: Instant::now(),
                instances: Vec::with_capacity(sprite_capacity),
            }));
            frame::start_loop(frame_ctx);
        });
    }

    Ok(())
}
