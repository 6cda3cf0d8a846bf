use super::ListenerHandle;
use ambient_core::state::{pointer_ndc, ViewState};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wire pointer movement into the shared view state as NDC coordinates.
/// Single writer; every consumer reads the same snapshot next frame.
pub fn wire_pointer(window: &web::Window, view: Rc<ViewState>) -> ListenerHandle {
    ListenerHandle::attach(window.as_ref(), "pointermove", move |ev| {
        if let Some(ev) = ev.dyn_ref::<web::PointerEvent>() {
            let (vw, vh) = view.viewport();
            view.write_pointer(pointer_ndc(
                ev.client_x() as f64,
                ev.client_y() as f64,
                vw as f64,
                vh as f64,
            ));
        }
    })
}
