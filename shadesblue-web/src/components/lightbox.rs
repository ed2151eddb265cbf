use crate::carousel::position_text;
use crate::focus::{focus_keydown_handler, use_focus_trap};
use crate::i18n::t;
use crate::paths::asset_path;
use shadesblue_core::{CarouselKey, Slide};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub slides: Vec<Slide>,
    /// Controlled by the host widget.
    pub index: usize,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
    pub on_close: Callback<()>,
    /// Where focus lands on close if the opener has left the document.
    pub trigger_ref: NodeRef,
}

/// Modal image viewer. The host mounts it while its viewer is open and
/// unmounts it to close; focus is trapped for that whole lifetime.
#[function_component(Lightbox)]
pub fn lightbox(props: &Props) -> Html {
    let panel_ref = use_node_ref();
    use_focus_trap(true, panel_ref.clone(), props.trigger_ref.clone());

    let Some(slide) = props.slides.get(props.index) else {
        return Html::default();
    };
    let total = props.slides.len();
    let navigable = total > 1;

    let on_keydown = {
        let trap = focus_keydown_handler(&panel_ref, props.on_close.clone());
        let on_prev = props.on_prev.clone();
        let on_next = props.on_next.clone();
        Callback::from(move |e: KeyboardEvent| {
            // the host widget listens for the same arrows
            e.stop_propagation();
            match CarouselKey::from_key(&e.key()) {
                Some(CarouselKey::Prev) if navigable => {
                    e.prevent_default();
                    on_prev.emit(());
                }
                Some(CarouselKey::Next) if navigable => {
                    e.prevent_default();
                    on_next.emit(());
                }
                _ => trap.emit(e),
            }
        })
    };
    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            if e.target() == e.current_target() {
                on_close.emit(());
            }
        })
    };
    let emit = |cb: &Callback<()>| {
        let cb = cb.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div
            class="lightbox"
            role="dialog"
            aria-modal="true"
            aria-label={t("lightbox.label")}
            onclick={on_backdrop}
        >
            <div class="lightbox__panel" ref={panel_ref} onkeydown={on_keydown}>
                <button
                    type="button"
                    class="lightbox__close"
                    aria-label={t("lightbox.close")}
                    data-autofocus="true"
                    onclick={emit(&props.on_close)}
                >
                    { t("lightbox.close_text") }
                </button>
                <figure class="lightbox__figure">
                    <img src={asset_path(&slide.src)} alt={slide.alt.clone()} />
                    if let Some(caption) = slide.caption.clone() {
                        <figcaption>{ caption }</figcaption>
                    }
                </figure>
                if navigable {
                    <div class="lightbox__nav">
                        <button
                            type="button"
                            class="lightbox__prev"
                            aria-label={t("lightbox.prev")}
                            onclick={emit(&props.on_prev)}
                        >
                            { "‹" }
                        </button>
                        <span class="lightbox__position" aria-live="polite">
                            { position_text("lightbox.position", props.index + 1, total) }
                        </span>
                        <button
                            type="button"
                            class="lightbox__next"
                            aria-label={t("lightbox.next")}
                            onclick={emit(&props.on_next)}
                        >
                            { "›" }
                        </button>
                    </div>
                }
            </div>
        </div>
    }
}
