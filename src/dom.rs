use crate::core::{ParticleConfig, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

pub const ATTR_CANVAS_CLASS: &str = "data-class";
pub const ATTR_CANVAS_OPACITY: &str = "data-opacity";

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}

/// Current container size, or `None` while it has no area.
pub fn measure(container: &web::HtmlElement) -> Option<Viewport> {
    Viewport::measure(
        container.client_width() as f64,
        container.client_height() as f64,
        device_pixel_ratio(),
    )
}

pub fn read_config(container: &web::HtmlElement) -> ParticleConfig {
    ParticleConfig::from_attributes(|name| container.get_attribute(name))
}

/// Create the drawing canvas inside `container`, filling it.
pub fn create_canvas(container: &web::HtmlElement) -> anyhow::Result<web::HtmlCanvasElement> {
    let document = container
        .owner_document()
        .or_else(window_document)
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let mut style = String::from("display:block;width:100%;height:100%;pointer-events:none;");
    if let Some(opacity) = container
        .get_attribute(ATTR_CANVAS_OPACITY)
        .and_then(|s| s.trim().parse::<f32>().ok())
        .filter(|v| v.is_finite())
    {
        style.push_str(&format!("opacity:{};", opacity.clamp(0.0, 1.0)));
    }
    _ = canvas.set_attribute("style", &style);
    if let Some(class) = container.get_attribute(ATTR_CANVAS_CLASS) {
        canvas.set_class_name(&class);
    }
    // Keep the backing store valid until the first real measurement
    canvas.set_width(1);
    canvas.set_height(1);

    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(canvas)
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, (w_px, h_px): (u32, u32)) {
    if canvas.width() != w_px {
        canvas.set_width(w_px);
    }
    if canvas.height() != h_px {
        canvas.set_height(h_px);
    }
}

pub fn remove_canvas(canvas: &web::HtmlCanvasElement) {
    canvas.remove();
}
