use crate::{dom, overlay, render};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use vibe_core::{ParticleInstance, VibeEngine};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything one canvas needs per animation frame: its engine, its
/// GPU state and the scratch instance buffer reused across frames.
pub struct FrameContext {
    pub engine: Rc<RefCell<VibeEngine>>,
    pub gpu: render::GpuState<'static>,
    pub canvas: web::HtmlCanvasElement,
    pub started: Instant,
    pub instances: Vec<ParticleInstance>,
    pub publish_overlay: bool,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = self.started.elapsed();
        let w = self.canvas.width();
        let h = self.canvas.height();

        let fps = {
            let mut engine = self.engine.borrow_mut();
            engine.set_resolution(w as f32, h as f32);
            let fps = engine.tick(now);
            engine.particles().write_instances(&mut self.instances);
            fps
        };
        let packed = self.engine.borrow().uniforms().packed();

        self.gpu.resize_if_needed(w, h);
        if let Err(e) = self.gpu.render(&packed, &self.instances) {
            log::error!("render error: {:?}", e);
        }

        if self.publish_overlay {
            if let Some(fps) = fps {
                if let Some(document) = dom::window_document() {
                    overlay::set_fps(&document, fps);
                }
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    scene_shader: &str,
    particle_capacity: usize,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, scene_shader, particle_capacity).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Self-rescheduling requestAnimationFrame loop.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
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
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
