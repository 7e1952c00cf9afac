use vibe_core::EngineError;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn js_err(e: JsValue) -> EngineError {
    EngineError::ExportFailed(format!("{:?}", e))
}

/// Snapshot the WebGPU canvas into a watermarked PNG and trigger a
/// download. Must run in the same task as a render so the frame is
/// still resident in the canvas.
pub fn export_png(
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
) -> Result<(), EngineError> {
    let width = canvas.width();
    let height = canvas.height();
    if width == 0 || height == 0 {
        return Err(EngineError::ExportFailed("canvas has zero size".into()));
    }

    let out = document
        .create_element("canvas")
        .map_err(js_err)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| EngineError::ExportFailed("not a canvas element".into()))?;
    out.set_width(width);
    out.set_height(height);

    let ctx = out
        .get_context("2d")
        .map_err(js_err)?
        .ok_or_else(|| EngineError::ExportFailed("no 2d context".into()))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|_| EngineError::ExportFailed("no 2d context".into()))?;

    ctx.draw_image_with_html_canvas_element(canvas, 0.0, 0.0)
        .map_err(js_err)?;

    // Watermark in the bottom-right corner
    let font_px = (width as f64 * 0.035).max(24.0);
    ctx.set_font(&format!("bold {:.0}px sans-serif", font_px));
    ctx.set_text_align("right");
    ctx.set_text_baseline("bottom");
    ctx.set_shadow_color("rgba(0, 0, 0, 0.8)");
    ctx.set_shadow_blur(8.0);
    ctx.set_fill_style_str("rgba(255, 255, 255, 0.9)");
    let pad = font_px * 0.75;
    ctx.fill_text("VIBE", width as f64 - pad, height as f64 - pad)
        .map_err(js_err)?;

    let url = out.to_data_url().map_err(js_err)?;
    let anchor = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into::<web::HtmlAnchorElement>()
        .map_err(|_| EngineError::ExportFailed("not an anchor element".into()))?;
    anchor.set_download(&format!("vibe-{}.png", js_sys::Date::now() as u64));
    anchor.set_href(&url);
    anchor.click();
    Ok(())
}
