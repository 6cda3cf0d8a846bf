//! DOM wiring for the reveal orchestrator.
//!
//! Containers are discovered by `[data-reveal]`; `[data-reveal-text]`
//! containers are split into word or character spans first. Arming is
//! driven by an IntersectionObserver rather than scroll polling, so it is
//! correct under instantaneous jumps. The observer callback only queues
//! ids into shared state; the frame tick consumes the queue, arms groups
//! with clock time, and applies per-item styles until each group is done.

use crate::dom;
use ambient_core::constants::REVEAL_VIEWPORT_TRIGGER;
use ambient_core::reveal::{ItemStyle, RevealConfig, RevealGroup, RevealPhase, RevealRegistry};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const GROUP_ID_ATTR: &str = "data-reveal-id";

struct DomGroup {
    id: u32,
    container: web::HtmlElement,
    items: Vec<web::HtmlElement>,
    styles_final: bool,
}

pub struct RevealOrchestrator {
    registry: RevealRegistry,
    groups: Vec<DomGroup>,
    pending_arms: Rc<RefCell<Vec<u32>>>,
    observer: Option<web::IntersectionObserver>,
    // Kept alive for the observer's lifetime.
    _callback: Option<Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>>,
}

impl RevealOrchestrator {
    pub fn mount(document: &web::Document, reduced_motion: bool) -> Self {
        let mut registry = RevealRegistry::default();
        let mut groups = Vec::new();

        for container in dom::collect_elements(document, "[data-reveal]") {
            let items = group_items(document, &container);
            if items.is_empty() {
                continue;
            }
            let cfg = if container.has_attribute("data-reveal-text") {
                RevealConfig::text()
            } else {
                RevealConfig::default()
            };
            let group = RevealGroup::new(items.len(), cfg, reduced_motion);
            let id = registry.insert(group);
            _ = container.set_attribute(GROUP_ID_ATTR, &id.to_string());

            // Pre-hide pending items; reduced-motion groups are already
            // done and the content is left untouched.
            if !reduced_motion {
                let hidden = ItemStyle::hidden_at(cfg.offset_px);
                for item in &items {
                    apply_item_style(item, hidden);
                }
            }
            groups.push(DomGroup {
                id,
                container,
                items,
                styles_final: reduced_motion,
            });
        }

        log::info!("[reveal] {} group(s) registered", groups.len());

        let pending_arms: Rc<RefCell<Vec<u32>>> = Rc::new(RefCell::new(Vec::new()));
        let (observer, callback) = if groups.is_empty() || reduced_motion {
            (None, None)
        } else {
            build_observer(&groups, pending_arms.clone())
        };

        Self {
            registry,
            groups,
            pending_arms,
            observer,
            _callback: callback,
        }
    }

    pub fn all_done(&self) -> bool {
        self.registry.all_done()
    }

    /// Frame tick: consume queued intersections, advance armed groups, and
    /// write item styles. `now_ms` comes from the animation clock.
    pub fn frame(&mut self, now_ms: f64) {
        for id in self.pending_arms.borrow_mut().drain(..) {
            if let Some(group) = self.registry.get_mut(id) {
                if group.on_intersect(now_ms) {
                    log::info!("[reveal] group {id} armed");
                }
            }
        }

        for dom_group in &mut self.groups {
            if dom_group.styles_final {
                continue;
            }
            let Some(group) = self.registry.get_mut(dom_group.id) else {
                continue;
            };
            match group.tick(now_ms) {
                RevealPhase::Pending => {}
                RevealPhase::Armed { .. } => {
                    for (i, item) in dom_group.items.iter().enumerate() {
                        apply_item_style(item, group.item_style(i, now_ms));
                    }
                }
                RevealPhase::Done => {
                    for item in &dom_group.items {
                        apply_item_style(item, ItemStyle::VISIBLE);
                    }
                    dom_group.styles_final = true;
                    if let Some(obs) = &self.observer {
                        obs.unobserve(&dom_group.container);
                    }
                }
            }
        }
    }

    /// Motion preference flipped to reduced mid-session: finish every group
    /// immediately and leave all content visible.
    pub fn force_done(&mut self) {
        for dom_group in &mut self.groups {
            if let Some(group) = self.registry.get_mut(dom_group.id) {
                group.force_done();
            }
            for item in &dom_group.items {
                apply_item_style(item, ItemStyle::VISIBLE);
            }
            dom_group.styles_final = true;
        }
        if let Some(obs) = &self.observer {
            obs.disconnect();
        }
    }

    /// Teardown: drop the observer and make sure no content stays hidden.
    /// Idempotent.
    pub fn unmount(&mut self) {
        if let Some(obs) = self.observer.take() {
            obs.disconnect();
        }
        self._callback = None;
        for dom_group in &mut self.groups {
            if !dom_group.styles_final {
                for item in &dom_group.items {
                    apply_item_style(item, ItemStyle::VISIBLE);
                }
                dom_group.styles_final = true;
            }
        }
    }
}

impl Drop for RevealOrchestrator {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn build_observer(
    groups: &[DomGroup],
    pending_arms: Rc<RefCell<Vec<u32>>>,
) -> (
    Option<web::IntersectionObserver>,
    Option<Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>>,
) {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _obs: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                if let Some(id) = entry
                    .target()
                    .get_attribute(GROUP_ID_ATTR)
                    .and_then(|v| v.parse::<u32>().ok())
                {
                    pending_arms.borrow_mut().push(id);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    // Shrinking the root by (1 - trigger) at the bottom fires the entry
    // when the container top crosses that fraction of viewport height.
    let bottom_margin = ((1.0 - REVEAL_VIEWPORT_TRIGGER) * 100.0).round();
    options.set_root_margin(&format!("0px 0px -{bottom_margin}%"));
    options.set_threshold(&JsValue::from_f64(0.0));

    match web::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(observer) => {
            for g in groups {
                observer.observe(&g.container);
            }
            (Some(observer), Some(callback))
        }
        Err(e) => {
            // No observation available: reveal everything rather than
            // leaving content hidden behind a trigger that can never fire.
            log::warn!("[reveal] IntersectionObserver unavailable: {e:?}");
            for g in groups {
                for item in &g.items {
                    apply_item_style(item, ItemStyle::VISIBLE);
                }
            }
            (None, None)
        }
    }
}

fn apply_item_style(el: &web::HtmlElement, style: ItemStyle) {
    dom::set_style(el, "opacity", &format!("{:.3}", style.opacity));
    if style.translate_y.abs() < 0.01 {
        dom::set_style(el, "transform", "none");
    } else {
        dom::set_style(
            el,
            "transform",
            &format!("translate3d(0, {:.2}px, 0)", style.translate_y),
        );
    }
}

/// Items of a reveal group: the container's element children, or the spans
/// produced by splitting a `[data-reveal-text]` container.
fn group_items(document: &web::Document, container: &web::HtmlElement) -> Vec<web::HtmlElement> {
    if let Some(granularity) = container.get_attribute("data-reveal-text") {
        return split_text(document, container, granularity == "chars");
    }
    let children = container.children();
    let mut items = Vec::with_capacity(children.length() as usize);
    for i in 0..children.length() {
        if let Some(el) = children
            .item(i)
            .and_then(|e| e.dyn_into::<web::HtmlElement>().ok())
        {
            items.push(el);
        }
    }
    items
}

/// Replace the container's text with one inline-block span per word (or
/// character), preserving whitespace between words.
fn split_text(
    document: &web::Document,
    container: &web::HtmlElement,
    per_char: bool,
) -> Vec<web::HtmlElement> {
    let text = container.text_content().unwrap_or_default();
    container.set_text_content(None);
    let mut items = Vec::new();

    let units: Vec<String> = if per_char {
        text.chars().map(|c| c.to_string()).collect()
    } else {
        text.split_whitespace().map(|w| w.to_string()).collect()
    };

    for (i, unit) in units.iter().enumerate() {
        let Ok(span) = document.create_element("span") else {
            continue;
        };
        let Ok(span) = span.dyn_into::<web::HtmlElement>() else {
            continue;
        };
        if per_char && unit == " " {
            span.set_text_content(Some("\u{a0}"));
        } else {
            span.set_text_content(Some(unit));
        }
        dom::set_style(&span, "display", "inline-block");
        _ = container.append_child(&span);
        if !per_char && i + 1 < units.len() {
            if let Ok(space) = document.create_element("span") {
                space.set_text_content(Some("\u{a0}"));
                _ = container.append_child(&space);
            }
        }
        items.push(span);
    }
    items
}
