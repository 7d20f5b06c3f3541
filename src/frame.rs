use crate::camera::OrbitCamera;
use crate::constants::*;
use crate::core::content;
use crate::core::scene::SceneState;
use crate::input::PointerState;
use crate::render::{self, SpriteInstance};
use glam::Vec3;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub scene: Rc<RefCell<SceneState>>,
    pub camera: Rc<RefCell<OrbitCamera>>,
    pub pointer: Rc<RefCell<PointerState>>,

    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,

    pub last_instant: Instant,
    pub instances: Vec<SpriteInstance>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_sec = dt.as_secs_f32();

        // Camera damping first; auto-rotation only while no button is held
        let idle = !self.pointer.borrow().down;
        self.camera.borrow_mut().update(dt_sec, idle);

        // Advance the scene clock and step every particle once
        let mut scene = self.scene.borrow_mut();
        scene.advance(dt_sec * 1000.0);

        // Rebuild the sprite batch back-to-front: haze, stars, dust, markers
        self.instances.clear();
        for n in content::NEBULAS.iter() {
            self.instances.push(SpriteInstance {
                pos: n.position,
                scale: n.scale,
                color: n.color,
                soft: NEBULA_SOFTNESS,
            });
        }
        for s in &scene.stars {
            let [r, g, b] = s.tint;
            self.instances.push(SpriteInstance {
                pos: s.position.to_array(),
                scale: s.size,
                color: [r, g, b, scene.star_opacity(s)],
                soft: STAR_SOFTNESS,
            });
        }
        let [pr, pg, pb] = content::PARTICLE_COLOR;
        for p in &scene.particles {
            self.instances.push(SpriteInstance {
                pos: p.position.to_array(),
                scale: PARTICLE_SIZE,
                color: [pr, pg, pb, PARTICLE_OPACITY],
                soft: PARTICLE_SOFTNESS,
            });
        }
        let [mr, mg, mb] = content::MARKER_COLOR;
        for (i, m) in scene.markers.iter().enumerate() {
            self.instances.push(SpriteInstance {
                pos: m.position.to_array(),
                scale: scene.marker_scale(i),
                color: [mr, mg, mb, scene.marker_opacity(i)],
                soft: MARKER_SOFTNESS,
            });
        }
        let line_opacity = scene.line_opacity();
        drop(scene);

        if let Some(g) = &mut self.gpu {
            let w = self.canvas.width();
            let h = self.canvas.height();
            g.resize_if_needed(w, h);
            let cam = self.camera.borrow();
            let aspect = w as f32 / h.max(1) as f32;
            g.set_camera(cam.view_proj(aspect), cam.right(), cam.up());
            drop(cam);
            if let Err(e) = g.render(&self.instances, line_opacity) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    line_points: &[Vec3],
    instance_capacity: usize,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, line_points, instance_capacity).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
