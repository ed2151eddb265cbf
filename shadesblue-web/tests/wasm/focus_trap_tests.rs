#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement, KeyboardEvent, KeyboardEventInit};
use yew::AppHandle;
use yew::prelude::*;

use shadesblue_web::components::drawer::Drawer;
use shadesblue_web::dom;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[derive(Properties, PartialEq, Clone)]
struct HarnessProps {
    with_autofocus: bool,
    empty: bool,
}

#[function_component(Harness)]
fn harness(props: &HarnessProps) -> Html {
    let open = use_state(|| false);
    let trigger_ref = use_node_ref();
    let show = {
        let open = open.clone();
        Callback::from(move |_| open.set(true))
    };
    let hide = {
        let open = open.clone();
        Callback::from(move |()| open.set(false))
    };
    let body = if props.empty {
        html! { <p>{ "Nothing to focus" }</p> }
    } else {
        let autofocus = props.with_autofocus.then_some(AttrValue::Static("true"));
        html! {
            <>
                <button id="t-first" type="button">{ "first" }</button>
                <button id="t-middle" type="button" data-autofocus={autofocus}>{ "middle" }</button>
                <div aria-hidden="true"><button id="t-shadowed" type="button">{ "shadowed" }</button></div>
                <button id="t-last" type="button">{ "last" }</button>
            </>
        }
    };
    html! {
        <>
            <button id="t-trigger" type="button" ref={trigger_ref.clone()} onclick={show}>
                { "open" }
            </button>
            <Drawer
                open={*open}
                id="t-drawer"
                label="Test drawer"
                on_close={hide}
                trigger_ref={trigger_ref}
            >
                { body }
            </Drawer>
        </>
    }
}

fn fresh_root() -> Element {
    let doc = dom::document().expect("document");
    let root = doc.create_element("div").expect("create root");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append root");
    root
}

async fn settle() {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        dom::window()
            .expect("window")
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 20)
            .expect("set timeout");
    });
    JsFuture::from(promise).await.expect("timer");
}

fn by_id(id: &str) -> HtmlElement {
    dom::element_by_id(id)
        .expect("element exists")
        .dyn_into()
        .expect("cast to html element")
}

fn active_id() -> Option<String> {
    dom::active_element().map(|el| el.id())
}

fn body_overflow() -> String {
    dom::document()
        .and_then(|doc| doc.body())
        .map(|body| body.style().get_property_value("overflow").unwrap_or_default())
        .unwrap_or_default()
}

fn press(target: &Element, key: &str, shift: bool) -> bool {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_shift_key(shift);
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event =
        KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).expect("keyboard event");
    target.dispatch_event(&event).expect("dispatch");
    event.default_prevented()
}

async fn open_harness(with_autofocus: bool, empty: bool) -> (AppHandle<Harness>, Element) {
    let root = fresh_root();
    let handle = yew::Renderer::<Harness>::with_root_and_props(
        root.clone(),
        HarnessProps {
            with_autofocus,
            empty,
        },
    )
    .render();
    settle().await;
    let trigger = by_id("t-trigger");
    trigger.focus().expect("focus trigger");
    trigger.click();
    settle().await;
    (handle, root)
}

#[wasm_bindgen_test]
async fn opening_focuses_marked_element_and_escape_restores_trigger() {
    let (handle, root) = open_harness(true, false).await;
    assert_eq!(active_id().as_deref(), Some("t-middle"));
    assert_eq!(body_overflow(), "hidden");

    assert!(press(&by_id("t-middle"), "Escape", false));
    settle().await;
    assert!(dom::element_by_id("t-drawer").is_none());
    assert_eq!(active_id().as_deref(), Some("t-trigger"));
    assert_eq!(body_overflow(), "");

    handle.destroy();
    root.remove();
}

#[wasm_bindgen_test]
async fn tab_wraps_at_both_ends_and_skips_hidden_subtrees() {
    let (handle, root) = open_harness(false, false).await;
    assert_eq!(active_id().as_deref(), Some("t-first"));

    by_id("t-last").focus().expect("focus last");
    assert!(press(&by_id("t-last"), "Tab", false));
    assert_eq!(active_id().as_deref(), Some("t-first"));

    assert!(press(&by_id("t-first"), "Tab", true));
    assert_eq!(active_id().as_deref(), Some("t-last"));

    // mid-list tabs are left to the browser
    by_id("t-middle").focus().expect("focus middle");
    assert!(!press(&by_id("t-middle"), "Tab", false));

    handle.destroy();
    root.remove();
    assert_eq!(body_overflow(), "");
}

#[wasm_bindgen_test]
async fn empty_overlay_focuses_its_panel() {
    let (handle, root) = open_harness(false, true).await;
    let active = dom::active_element().expect("something focused");
    assert!(active.class_list().contains("drawer__panel"));
    assert_eq!(active.get_attribute("tabindex").as_deref(), Some("-1"));

    assert!(press(&active, "Tab", false));
    let still = dom::active_element().expect("focus kept");
    assert!(still.class_list().contains("drawer__panel"));

    handle.destroy();
    root.remove();
}
