use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

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

/// Keep the canvas backing store sized to CSS size * devicePixelRatio.
pub fn install_resize_listener(canvas: &web::HtmlCanvasElement) {
    let canvas_resize = canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        let _ = w.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Toggle the cinematic HUD hint (letterbox bars etc. are styled in CSS).
pub fn set_cinematic_hud(document: &web::Document, active: bool) {
    if let Some(el) = document.get_element_by_id("hud") {
        let classes = el.class_list();
        if active {
            let _ = classes.add_1("cinematic");
        } else {
            let _ = classes.remove_1("cinematic");
        }
    }
}
