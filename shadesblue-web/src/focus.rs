//! Focus containment, restoration and scroll locking for overlays.
//!
//! Every overlay (mobile drawer, accessibility menu, lightbox) uses the same
//! hook so their behaviour cannot drift apart.

#[cfg(target_arch = "wasm32")]
use crate::dom;
#[cfg(target_arch = "wasm32")]
use shadesblue_core::config::FOCUSABLE_SELECTOR;
#[cfg(target_arch = "wasm32")]
use shadesblue_core::{
    FocusCandidate, FocusTarget, Overlay, OverlayKey, ScrollLock, TrapOutcome, initial_focus,
    is_focusable, trap_tab,
};
#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{Element, HtmlElement};
use web_sys::KeyboardEvent;
use yew::hook;
use yew::prelude::*;

/// Attribute marking the element an overlay should focus first.
pub const AUTOFOCUS_ATTR: &str = "data-autofocus";

#[cfg(target_arch = "wasm32")]
thread_local! {
    static SCROLL_LOCK: RefCell<ScrollLock> = RefCell::new(ScrollLock::new());
}

#[cfg(target_arch = "wasm32")]
fn acquire_scroll_lock() {
    let Some(body) = dom::document().and_then(|doc| doc.body()) else {
        return;
    };
    let style = body.style();
    let current = style.get_property_value("overflow").unwrap_or_default();
    if SCROLL_LOCK.with(|lock| lock.borrow_mut().acquire(&current)) {
        let _ = style.set_property("overflow", ScrollLock::LOCKED_OVERFLOW);
    }
}

#[cfg(target_arch = "wasm32")]
fn release_scroll_lock() {
    let Some(previous) = SCROLL_LOCK.with(|lock| lock.borrow_mut().release()) else {
        return;
    };
    let Some(body) = dom::document().and_then(|doc| doc.body()) else {
        return;
    };
    let style = body.style();
    if previous.is_empty() {
        let _ = style.remove_property("overflow");
    } else {
        let _ = style.set_property("overflow", &previous);
    }
}

#[cfg(target_arch = "wasm32")]
const HIDDEN_SUBTREE_SELECTOR: &str = r#"[aria-hidden="true"], [hidden]"#;

#[cfg(target_arch = "wasm32")]
fn accepts_focus(el: &Element) -> bool {
    let tag = el.tag_name().to_ascii_lowercase();
    let input_type = el.get_attribute("type").map(|t| t.to_ascii_lowercase());
    let candidate = FocusCandidate {
        tag: &tag,
        has_href: el.has_attribute("href"),
        disabled: el.has_attribute("disabled"),
        input_type: input_type.as_deref(),
        tab_index: el
            .get_attribute("tabindex")
            .and_then(|raw| raw.trim().parse().ok()),
        aria_hidden: el.get_attribute("aria-hidden").as_deref() == Some("true"),
        hidden_ancestor: el
            .parent_element()
            .and_then(|parent| parent.closest(HIDDEN_SUBTREE_SELECTOR).ok().flatten())
            .is_some(),
    };
    is_focusable(&candidate)
}

/// Focusable descendants in document order.
#[cfg(target_arch = "wasm32")]
pub fn focusables(container: &Element) -> Vec<HtmlElement> {
    let Ok(nodes) = container.query_selector_all(FOCUSABLE_SELECTOR) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .filter(|el| accepts_focus(el))
        .collect()
}

#[cfg(target_arch = "wasm32")]
fn focus_container(container: &HtmlElement) {
    if !container.has_attribute("tabindex") {
        let _ = container.set_attribute("tabindex", "-1");
    }
    let _ = container.focus();
}

#[cfg(target_arch = "wasm32")]
fn focus_initial(container: &HtmlElement) {
    let items = focusables(container);
    let preferred = items.iter().position(|el| el.has_attribute(AUTOFOCUS_ATTR));
    match initial_focus(items.len(), preferred) {
        FocusTarget::Element(i) => {
            if let Some(el) = items.get(i) {
                let _ = el.focus();
            }
        }
        FocusTarget::Container => focus_container(container),
    }
}

/// Trap focus inside `container_ref` while `open`, locking page scroll.
///
/// Focus moves in after the overlay has rendered; closing restores it to the
/// element focused before opening, or to `trigger_ref` when that element is
/// gone. Closing before the deferred move runs cancels it.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_focus_trap(open: bool, container_ref: NodeRef, trigger_ref: NodeRef) {
    let overlay = use_mut_ref(Overlay::<HtmlElement>::new);
    use_effect_with(open, move |open| {
        let active = *open;
        let pending = if active && overlay.borrow_mut().open(dom::active_html_element()) {
            acquire_scroll_lock();
            let overlay = overlay.clone();
            let container_ref = container_ref.clone();
            dom::Timeout::start(0, move || {
                if overlay.borrow_mut().focus_settled()
                    && let Some(container) = container_ref.cast::<HtmlElement>()
                {
                    focus_initial(&container);
                }
            })
        } else {
            None
        };
        move || {
            drop(pending);
            if !active {
                return;
            }
            let fallback = trigger_ref
                .cast::<HtmlElement>()
                .or_else(|| dom::document().and_then(|doc| doc.body()));
            let outcome = match fallback {
                Some(fallback) => overlay
                    .borrow_mut()
                    .close(fallback, |el| el.is_connected()),
                None => {
                    *overlay.borrow_mut() = Overlay::new();
                    None
                }
            };
            release_scroll_lock();
            if let Some(outcome) = outcome {
                if outcome.cancelled_pending_focus {
                    log::debug!("overlay closed before initial focus");
                }
                let _ = outcome.restore_to.focus();
            }
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
#[hook]
pub fn use_focus_trap(open: bool, container_ref: NodeRef, trigger_ref: NodeRef) {
    let _ = (open, container_ref, trigger_ref);
}

/// Keydown handler for an open overlay: Escape closes, Tab wraps.
#[cfg(target_arch = "wasm32")]
pub fn focus_keydown_handler(
    container_ref: &NodeRef,
    on_close: Callback<()>,
) -> Callback<KeyboardEvent> {
    let container_ref = container_ref.clone();
    Callback::from(move |e: KeyboardEvent| {
        let Some(key) = OverlayKey::from_key(&e.key(), e.shift_key()) else {
            return;
        };
        let direction = match key {
            OverlayKey::Close => {
                e.prevent_default();
                on_close.emit(());
                return;
            }
            OverlayKey::Tab(direction) => direction,
        };
        let Some(container) = container_ref.cast::<HtmlElement>() else {
            return;
        };
        let items = focusables(&container);
        let active = dom::active_element().and_then(|active| {
            items.iter().position(|el| {
                let el: &Element = el;
                *el == active
            })
        });
        match trap_tab(items.len(), active, direction) {
            TrapOutcome::PassThrough => {}
            TrapOutcome::MoveTo(i) => {
                e.prevent_default();
                if let Some(el) = items.get(i) {
                    let _ = el.focus();
                }
            }
            TrapOutcome::HoldOnContainer => {
                e.prevent_default();
                focus_container(&container);
            }
        }
    })
}

#[cfg(not(target_arch = "wasm32"))]
pub fn focus_keydown_handler(
    container_ref: &NodeRef,
    on_close: Callback<()>,
) -> Callback<KeyboardEvent> {
    let _ = container_ref;
    Callback::from(move |_e: KeyboardEvent| {
        let _ = &on_close;
    })
}
