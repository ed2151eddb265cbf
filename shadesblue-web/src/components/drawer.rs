use crate::focus::{focus_keydown_handler, use_focus_trap};
use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub id: AttrValue,
    pub label: AttrValue,
    pub on_close: Callback<()>,
    /// Control that opened the sheet; focus returns here if the previously
    /// focused element is gone.
    pub trigger_ref: NodeRef,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Modal sheet with a backdrop. Focus is trapped in the panel while open.
#[function_component(Drawer)]
pub fn drawer(props: &Props) -> Html {
    let panel_ref = use_node_ref();
    use_focus_trap(props.open, panel_ref.clone(), props.trigger_ref.clone());

    if !props.open {
        return Html::default();
    }

    let on_keydown = focus_keydown_handler(&panel_ref, props.on_close.clone());
    let close = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <div
            id={props.id.clone()}
            class={classes!("drawer", props.class.clone())}
            role="dialog"
            aria-modal="true"
            aria-label={props.label.clone()}
        >
            <button
                type="button"
                class="drawer__backdrop"
                tabindex="-1"
                aria-label={t("nav.close_menu")}
                onclick={close}
            />
            <div class="drawer__panel" ref={panel_ref} onkeydown={on_keydown}>
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn props(open: bool) -> Props {
        Props {
            open,
            id: AttrValue::from("mobile-menu"),
            label: AttrValue::from("Mobile menu"),
            on_close: Callback::noop(),
            trigger_ref: NodeRef::default(),
            class: Classes::new(),
            children: Children::default(),
        }
    }

    #[test]
    fn closed_drawer_renders_nothing() {
        let html = block_on(LocalServerRenderer::<Drawer>::with_props(props(false)).render());
        assert!(!html.contains("mobile-menu"));
    }

    #[test]
    fn open_drawer_is_a_labelled_modal() {
        let html = block_on(LocalServerRenderer::<Drawer>::with_props(props(true)).render());
        assert!(html.contains(r#"role="dialog""#));
        assert!(html.contains(r#"aria-modal="true""#));
        assert!(html.contains(r#"aria-label="Mobile menu""#));
        assert!(html.contains("drawer__panel"));
    }
}
