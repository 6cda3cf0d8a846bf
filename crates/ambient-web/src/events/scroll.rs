use super::ListenerHandle;
use crate::dom;
use ambient_core::state::{scroll_state, ViewState};
use std::rc::Rc;
use web_sys as web;

/// Wire the window scroll position into the shared view state. The handler
/// only snapshots numbers; all consumers read the store on their next tick.
pub fn wire_scroll(window: &web::Window, view: Rc<ViewState>) -> ListenerHandle {
    let (y, doc_h, view_h) = dom::scroll_metrics(window);
    view.write_scroll(scroll_state(y, doc_h, view_h));

    let view_for_event = view.clone();
    ListenerHandle::attach(window.as_ref(), "scroll", move |_ev| {
        if let Some(w) = web::window() {
            let (y, doc_h, view_h) = dom::scroll_metrics(&w);
            view_for_event.write_scroll(scroll_state(y, doc_h, view_h));
        }
    })
}

/// Track viewport size and keep every registered canvas backing store at
/// CSS size * devicePixelRatio.
pub fn wire_resize(
    window: &web::Window,
    view: Rc<ViewState>,
    canvases: Vec<web::HtmlCanvasElement>,
) -> ListenerHandle {
    let (vw, vh) = dom::viewport_size(window);
    view.write_viewport(vw, vh);
    for canvas in &canvases {
        dom::sync_canvas_backing_size(canvas);
    }

    ListenerHandle::attach(window.as_ref(), "resize", move |_ev| {
        if let Some(w) = web::window() {
            let (vw, vh) = dom::viewport_size(&w);
            view.write_viewport(vw, vh);
            // Document height changes with viewport width; refresh progress.
            let (y, doc_h, view_h) = dom::scroll_metrics(&w);
            view.write_scroll(scroll_state(y, doc_h, view_h));
        }
        for canvas in &canvases {
            dom::sync_canvas_backing_size(canvas);
        }
    })
}
