use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Viewport size in CSS pixels.
pub fn viewport_size(window: &web::Window) -> (u32, u32) {
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|j| j.as_f64()).unwrap_or(1.0).max(1.0) as u32
    };
    (dim(window.inner_width()), dim(window.inner_height()))
}

/// Raw scroll metrics: (scroll_y, document_height, viewport_height).
pub fn scroll_metrics(window: &web::Window) -> (f64, f64, f64) {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let doc_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    let (_, vh) = viewport_size(window);
    (scroll_y, doc_height, vh as f64)
}

/// Keep the canvas backing store at CSS size * devicePixelRatio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// All elements matching `selector`, cast to `HtmlElement`.
pub fn collect_elements(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web::HtmlElement>().ok()) {
                out.push(el);
            }
        }
    }
    out
}

/// Parse a float out of a `data-*` attribute, with a default.
pub fn data_attr_f32(el: &web::HtmlElement, name: &str, default: f32) -> f32 {
    el.get_attribute(name)
        .and_then(|v| v.parse::<f32>().ok())
        .unwrap_or(default)
}

#[inline]
pub fn set_style(el: &web::HtmlElement, prop: &str, value: &str) {
    _ = el.style().set_property(prop, value);
}
