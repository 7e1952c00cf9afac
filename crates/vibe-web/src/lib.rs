#![cfg(target_arch = "wasm32")]

//! WASM frontend: two engine instances (the interactive canvas and the
//! optional hero backdrop), WebGPU rendering and the DOM control
//! surface.

mod dom;
mod events;
mod export;
mod frame;
mod overlay;
mod render;

use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use vibe_core::{EngineConfig, VibeEngine, PARTICLE_COUNT};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("vibe-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas = lookup_canvas(&document, "vibe-canvas")?;
    dom::sync_canvas_backing_size(&canvas);
    dom::install_resize_listener(&canvas);

    let started = Instant::now();
    let seed = js_sys::Date::now() as u64;
    let engine = Rc::new(RefCell::new(VibeEngine::new(
        EngineConfig::interactive().with_seed(seed),
    )));
    engine
        .borrow_mut()
        .set_resolution(canvas.width() as f32, canvas.height() as f32);

    let gpu = frame::init_gpu(&canvas, vibe_core::BACKDROP_WGSL, PARTICLE_COUNT)
        .await
        .ok_or_else(|| anyhow::anyhow!("WebGPU unavailable"))?;
    let ctx = Rc::new(RefCell::new(frame::FrameContext {
        engine: engine.clone(),
        gpu,
        canvas: canvas.clone(),
        started,
        instances: Vec::new(),
        publish_overlay: true,
    }));

    // The hero backdrop is optional; pages without the canvas still run
    let mut hero_engine = None;
    let mut hero_ctx = None;
    if let Some(el) = document.get_element_by_id("hero-canvas") {
        if let Ok(hero_canvas) = el.dyn_into::<web::HtmlCanvasElement>() {
            dom::sync_canvas_backing_size(&hero_canvas);
            dom::install_resize_listener(&hero_canvas);
            let engine = Rc::new(RefCell::new(VibeEngine::new(
                EngineConfig::backdrop().with_seed(seed.wrapping_add(1)),
            )));
            engine
                .borrow_mut()
                .set_resolution(hero_canvas.width() as f32, hero_canvas.height() as f32);
            match frame::init_gpu(&hero_canvas, vibe_core::LIQUID_WGSL, 0).await {
                Some(gpu) => {
                    hero_ctx = Some(Rc::new(RefCell::new(frame::FrameContext {
                        engine: engine.clone(),
                        gpu,
                        canvas: hero_canvas,
                        started,
                        instances: Vec::new(),
                        publish_overlay: false,
                    })));
                    hero_engine = Some(engine);
                }
                None => log::warn!("hero backdrop disabled"),
            }
        }
    }

    events::wire_controls(
        &document,
        &engine,
        hero_engine.as_ref(),
        &canvas,
        &ctx,
        started,
    );
    overlay::update_labels(&document, &engine.borrow());
    overlay::update_code_preview(&document, &engine.borrow());

    frame::start_loop(ctx);
    if let Some(hero_ctx) = hero_ctx {
        frame::start_loop(hero_ctx);
    }
    Ok(())
}

fn lookup_canvas(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}
