use crate::frame::FrameContext;
use crate::{dom, export, overlay};
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use vibe_core::pointer::normalize_to_scene;
use vibe_core::{Mood, Palette, Param, VibeEngine};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const SLIDERS: [(&str, Param); 4] = [
    ("speed-slider", Param::Speed),
    ("complexity-slider", Param::Complexity),
    ("form-slider", Param::Form),
    ("particles-slider", Param::Particles),
];

pub fn wire_controls(
    document: &web::Document,
    engine: &Rc<RefCell<VibeEngine>>,
    hero_engine: Option<&Rc<RefCell<VibeEngine>>>,
    canvas: &web::HtmlCanvasElement,
    ctx: &Rc<RefCell<FrameContext>>,
    started: Instant,
) {
    wire_sliders(document, engine);
    wire_mood_buttons(document, engine, started);
    wire_palette_buttons(document, engine, started);

    {
        let engine_r = engine.clone();
        dom::add_click_listener(document, "randomize-btn", move || {
            randomize_now(&engine_r, started);
        });
    }
    {
        let ctx_e = ctx.clone();
        dom::add_click_listener(document, "export-btn", move || {
            export_now(&ctx_e);
        });
    }

    wire_keyboard(document, engine, canvas, ctx, started);
    wire_pointer(engine, canvas);
    if let Some(hero) = hero_engine {
        wire_hero_pointer(hero);
    }
}

fn wire_sliders(document: &web::Document, engine: &Rc<RefCell<VibeEngine>>) {
    for (id, param) in SLIDERS {
        let Some(input) = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
        else {
            continue;
        };
        let engine = engine.clone();
        let input_c = input.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
            if let Ok(percent) = input_c.value().parse::<f32>() {
                engine.borrow_mut().set_param_percent(param, percent);
                if let Some(document) = dom::window_document() {
                    overlay::update_code_preview(&document, &engine.borrow());
                }
            }
        }) as Box<dyn FnMut(_)>);
        let _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn wire_mood_buttons(document: &web::Document, engine: &Rc<RefCell<VibeEngine>>, started: Instant) {
    let Ok(list) = document.query_selector_all(".preset-btn") else {
        return;
    };
    for i in 0..list.length() {
        let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let Some(name) = el.get_attribute("data-mood") else {
            continue;
        };
        let mood = match Mood::parse(&name) {
            Ok(m) => m,
            Err(e) => {
                log::warn!("ignoring preset button: {}", e);
                continue;
            }
        };
        let engine = engine.clone();
        let el_c = el.clone();
        let closure = Closure::wrap(Box::new(move || {
            engine.borrow_mut().apply_mood(mood, started.elapsed());
            if let Some(document) = dom::window_document() {
                mark_active(&document, ".preset-btn", &el_c);
                overlay::update_labels(&document, &engine.borrow());
                overlay::update_code_preview(&document, &engine.borrow());
            }
        }) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn wire_palette_buttons(
    document: &web::Document,
    engine: &Rc<RefCell<VibeEngine>>,
    started: Instant,
) {
    let Ok(list) = document.query_selector_all(".palette-btn") else {
        return;
    };
    for i in 0..list.length() {
        let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let Some(name) = el.get_attribute("data-palette") else {
            continue;
        };
        let palette = match Palette::parse(&name) {
            Ok(p) => p,
            Err(e) => {
                log::warn!("ignoring palette button: {}", e);
                continue;
            }
        };
        let engine = engine.clone();
        let el_c = el.clone();
        let closure = Closure::wrap(Box::new(move || {
            engine.borrow_mut().apply_palette(palette, started.elapsed());
            if let Some(document) = dom::window_document() {
                mark_active(&document, ".palette-btn", &el_c);
                overlay::update_labels(&document, &engine.borrow());
                overlay::update_code_preview(&document, &engine.borrow());
            }
        }) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn wire_keyboard(
    document: &web::Document,
    engine: &Rc<RefCell<VibeEngine>>,
    canvas: &web::HtmlCanvasElement,
    ctx: &Rc<RefCell<FrameContext>>,
    started: Instant,
) {
    let engine_k = engine.clone();
    let ctx_k = ctx.clone();
    let canvas_k = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        // Ignore shortcuts while a slider or text field has focus
        if ev
            .target()
            .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
            .is_some()
        {
            return;
        }
        match ev.key().as_str() {
            "r" => randomize_now(&engine_k, started),
            "e" => export_now(&ctx_k),
            "f" => toggle_fullscreen(&canvas_k),
            _ => {}
        }
    }) as Box<dyn FnMut(_)>);
    let _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointer(engine: &Rc<RefCell<VibeEngine>>, canvas: &web::HtmlCanvasElement) {
    {
        let engine = engine.clone();
        let canvas_c = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let rect = canvas_c.get_bounding_client_rect();
            let uv = normalize_to_scene(
                Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
                Vec2::new(rect.left() as f32, rect.top() as f32),
                Vec2::new(rect.width() as f32, rect.height() as f32),
            );
            engine.borrow_mut().set_pointer_raw(uv);
            if let Some(document) = dom::window_document() {
                overlay::set_coords(&document, uv);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = canvas
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let engine = engine.clone();
        let canvas_c = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            if let Some(touch) = ev.touches().item(0) {
                let rect = canvas_c.get_bounding_client_rect();
                let uv = normalize_to_scene(
                    Vec2::new(touch.client_x() as f32, touch.client_y() as f32),
                    Vec2::new(rect.left() as f32, rect.top() as f32),
                    Vec2::new(rect.width() as f32, rect.height() as f32),
                );
                engine.borrow_mut().set_pointer_raw(uv);
            }
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        let _ =
            canvas.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// The hero backdrop follows the pointer anywhere on the page,
/// normalized against the viewport.
fn wire_hero_pointer(engine: &Rc<RefCell<VibeEngine>>) {
    let Some(window) = web::window() else {
        return;
    };
    let engine = engine.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let Some(w) = web::window() else { return };
        let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0) as f32;
        let height = w
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(1.0) as f32;
        let uv = normalize_to_scene(
            Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
            Vec2::ZERO,
            Vec2::new(width, height),
        );
        engine.borrow_mut().set_pointer_raw(uv);
    }) as Box<dyn FnMut(_)>);
    let _ = window.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn randomize_now(engine: &Rc<RefCell<VibeEngine>>, started: Instant) {
    let (mood, palette, particles) = engine.borrow_mut().randomize(started.elapsed());
    log::info!(
        "randomize: mood={} palette={} particles={:.2}",
        mood.name(),
        palette.name(),
        particles
    );
    if let Some(document) = dom::window_document() {
        mark_active_by_attr(&document, ".preset-btn", "data-mood", mood.name());
        mark_active_by_attr(&document, ".palette-btn", "data-palette", palette.name());
        if let Some(slider) = document
            .get_element_by_id("particles-slider")
            .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
        {
            slider.set_value(&format!("{:.0}", particles * 100.0));
        }
        overlay::update_labels(&document, &engine.borrow());
        overlay::update_code_preview(&document, &engine.borrow());
    }
}

fn export_now(ctx: &Rc<RefCell<FrameContext>>) {
    // Render a fresh frame so the snapshot is not a cleared canvas
    ctx.borrow_mut().frame();
    let canvas = ctx.borrow().canvas.clone();
    let Some(document) = dom::window_document() else {
        return;
    };
    match export::export_png(&document, &canvas) {
        Ok(()) => overlay::toast(&document, "image saved"),
        Err(e) => {
            log::error!("export failed: {}", e);
            overlay::toast(&document, "export failed");
        }
    }
}

fn toggle_fullscreen(canvas: &web::HtmlCanvasElement) {
    let Some(document) = dom::window_document() else {
        return;
    };
    if document.fullscreen_element().is_some() {
        document.exit_fullscreen();
    } else if let Err(e) = canvas.request_fullscreen() {
        log::warn!("fullscreen request failed: {:?}", e);
    }
}

fn mark_active(document: &web::Document, selector: &str, chosen: &web::Element) {
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                let _ = el.class_list().remove_1("active");
            }
        }
    }
    let _ = chosen.class_list().add_1("active");
}

fn mark_active_by_attr(document: &web::Document, selector: &str, attr: &str, value: &str) {
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                if el.get_attribute(attr).as_deref() == Some(value) {
                    let _ = el.class_list().add_1("active");
                } else {
                    let _ = el.class_list().remove_1("active");
                }
            }
        }
    }
}
