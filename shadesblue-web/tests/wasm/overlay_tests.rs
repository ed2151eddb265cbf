#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

use shadesblue_core::Overlay;
use shadesblue_web::dom;
use shadesblue_web::focus::focusables;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn mount(html: &str) -> HtmlElement {
    let doc = dom::document().expect("document");
    let host: HtmlElement = doc
        .create_element("div")
        .expect("create host")
        .dyn_into()
        .expect("cast host");
    host.set_inner_html(html);
    doc.body()
        .expect("document body")
        .append_child(&host)
        .expect("append host");
    host
}

fn by_id(id: &str) -> HtmlElement {
    dom::element_by_id(id)
        .expect("element exists")
        .dyn_into()
        .expect("cast to html element")
}

#[wasm_bindgen_test]
fn focusables_skip_disabled_hidden_subtrees_and_negative_tabindex() {
    let host = mount(
        r#"<button id="f-a">A</button>
           <button disabled>off</button>
           <a>no href</a>
           <a id="f-b" href="/x">B</a>
           <input type="hidden" />
           <input id="f-c" type="text" />
           <span tabindex="-1">skip</span>
           <button aria-hidden="true">hidden</button>
           <div aria-hidden="true"><a href="/y">inside hidden</a></div>
           <div hidden><button>collapsed</button></div>
           <div id="f-d" tabindex="0">D</div>"#,
    );
    let ids: Vec<String> = focusables(&host).iter().map(|el| el.id()).collect();
    assert_eq!(ids, ["f-a", "f-b", "f-c", "f-d"]);
    host.remove();
}

#[wasm_bindgen_test]
fn closing_restores_focus_to_the_captured_element() {
    let host = mount(r#"<button id="o-opener">open</button><button id="o-trigger">t</button>"#);
    let opener = by_id("o-opener");
    opener.focus().expect("focus opener");

    let mut overlay = Overlay::<HtmlElement>::new();
    assert!(overlay.open(dom::active_html_element()));
    let outcome = overlay
        .close(by_id("o-trigger"), |el| el.is_connected())
        .expect("was open");
    assert!(outcome.cancelled_pending_focus);
    outcome.restore_to.focus().expect("restore focus");
    assert_eq!(dom::active_element().map(|el| el.id()), Some("o-opener".into()));
    host.remove();
}

#[wasm_bindgen_test]
fn detached_opener_falls_back_to_the_trigger() {
    let host = mount(r#"<button id="d-opener">open</button><button id="d-trigger">t</button>"#);
    let opener = by_id("d-opener");
    opener.focus().expect("focus opener");

    let mut overlay = Overlay::<HtmlElement>::new();
    assert!(overlay.open(dom::active_html_element()));
    assert!(overlay.focus_settled());
    opener.remove();

    let outcome = overlay
        .close(by_id("d-trigger"), |el| el.is_connected())
        .expect("was open");
    assert!(!outcome.cancelled_pending_focus);
    assert_eq!(outcome.restore_to.id(), "d-trigger");
    host.remove();
}
