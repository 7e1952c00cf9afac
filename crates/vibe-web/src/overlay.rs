use glam::Vec2;
use vibe_core::VibeEngine;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

#[inline]
pub fn set_fps(document: &web::Document, fps: f32) {
    set_text(document, "fps-display", &format!("{:.0} fps", fps));
}

#[inline]
pub fn set_coords(document: &web::Document, uv: Vec2) {
    set_text(
        document,
        "mouse-coords",
        &format!("{:.2}, {:.2}", uv.x, uv.y),
    );
}

pub fn update_labels(document: &web::Document, engine: &VibeEngine) {
    set_text(document, "mood-display", engine.params().mood.name());
    set_text(document, "palette-display", engine.params().palette.name());
}

pub fn update_code_preview(document: &web::Document, engine: &VibeEngine) {
    set_text(document, "code-preview", &engine.settings_snippet());
}

/// Transient notification; hides itself after two seconds.
pub fn toast(document: &web::Document, message: &str) {
    if let Some(el) = document.get_element_by_id("toast") {
        el.set_text_content(Some(message));
        let _ = el.set_attribute("style", "");
        let el_hide = el.clone();
        let closure = Closure::wrap(Box::new(move || {
            let _ = el_hide.set_attribute("style", "display:none");
        }) as Box<dyn FnMut()>);
        if let Some(w) = web::window() {
            let _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                2000,
            );
        }
        closure.forget();
    }
}
