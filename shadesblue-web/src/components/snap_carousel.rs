use crate::carousel::{CarouselAction, CarouselModel, arrow_key_handler, position_text, use_carousel};
use crate::components::lightbox::Lightbox;
use crate::i18n::{t, tr1};
use crate::paths::asset_path;
use shadesblue_core::config::SNAP_INTERVAL_MS;
use shadesblue_core::{IndexMode, Slide};
use yew::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::dom;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::HtmlElement;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub slides: Vec<Slide>,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or_default]
    pub autoplay: bool,
    /// Adds a zoom control on each slide that opens the lightbox.
    #[prop_or(true)]
    pub zoom: bool,
}

/// Horizontal distance of each slide from the track's scroll position.
#[cfg(target_arch = "wasm32")]
fn slide_offsets(track: &HtmlElement) -> Vec<f64> {
    let children = track.children();
    let scroll = f64::from(track.scroll_left());
    (0..children.length())
        .filter_map(|i| children.item(i))
        .filter_map(|child| child.dyn_into::<HtmlElement>().ok())
        .map(|child| f64::from(child.offset_left()) - scroll)
        .collect()
}

#[cfg(target_arch = "wasm32")]
fn scroll_to_slide(track: &HtmlElement, index: usize) {
    let Ok(index) = u32::try_from(index) else {
        return;
    };
    if let Some(child) = track
        .children()
        .item(index)
        .and_then(|child| child.dyn_into::<HtmlElement>().ok())
    {
        track.set_scroll_left(child.offset_left());
    }
}

/// Keep the host index in step with manual scrolling, and scroll the track
/// when the index changes for any other reason.
#[cfg(target_arch = "wasm32")]
#[yew::hook]
fn use_scroll_sync(model: UseReducerHandle<CarouselModel>, track_ref: NodeRef) {
    {
        let dispatcher = model.dispatcher();
        let track_ref = track_ref.clone();
        use_effect_with(model.state.len(), move |_| {
            let listener = track_ref.cast::<HtmlElement>().and_then(|track| {
                let target = track.clone();
                dom::Listener::new(&target, "scroll", move |_| {
                    dispatcher.dispatch(CarouselAction::Scrolled(slide_offsets(&track)));
                })
            });
            move || drop(listener)
        });
    }
    {
        let track_ref = track_ref.clone();
        use_effect_with((model.state.index(), model.follow), move |(index, follow)| {
            if *follow && let Some(track) = track_ref.cast::<HtmlElement>() {
                scroll_to_slide(&track, *index);
            }
            || ()
        });
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[yew::hook]
fn use_scroll_sync(model: UseReducerHandle<CarouselModel>, track_ref: NodeRef) {
    let _ = (model, track_ref);
}

/// Scroll-snap strip that stops at both ends. Optional autoplay pauses on
/// hover and whenever the lightbox is open.
#[function_component(SnapCarousel)]
pub fn snap_carousel(props: &Props) -> Html {
    let len = props.slides.len();
    let model = use_carousel(len, IndexMode::Clamp, props.autoplay, SNAP_INTERVAL_MS);
    let track_ref = use_node_ref();
    use_scroll_sync(model.clone(), track_ref.clone());

    if len == 0 {
        return Html::default();
    }

    let state = &model.state;
    let index = state.index();
    let dispatch = |action: CarouselAction| {
        let dispatcher = model.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(action.clone()))
    };
    let emit = |action: CarouselAction| {
        let dispatcher = model.dispatcher();
        Callback::from(move |()| dispatcher.dispatch(action.clone()))
    };

    let slides = props.slides.iter().enumerate().map(|(i, slide)| {
        html! {
            <figure
                class={classes!("snap-carousel__slide", (i == index).then_some("is-active"))}
                role="group"
                aria-roledescription="slide"
                aria-label={position_text("carousel.slide_label", i + 1, len)}
            >
                <img
                    src={asset_path(&slide.src)}
                    alt={slide.alt.clone()}
                    loading={if i == 0 { "eager" } else { "lazy" }}
                    draggable="false"
                />
                if props.zoom {
                    <button
                        type="button"
                        class="snap-carousel__zoom"
                        aria-label={tr1("carousel.zoom", "n", &(i + 1).to_string())}
                        onclick={dispatch(CarouselAction::OpenViewer(i))}
                    >
                        <span aria-hidden="true">{ "⤢" }</span>
                    </button>
                }
                if let Some(caption) = slide.caption.clone() {
                    <figcaption>{ caption }</figcaption>
                }
            </figure>
        }
    });

    let controls = if state.is_navigable() {
        let dots = (0..len).map(|i| {
            html! {
                <button
                    type="button"
                    class={classes!("snap-carousel__dot", (i == index).then_some("is-active"))}
                    aria-label={tr1("carousel.go_to_image", "n", &(i + 1).to_string())}
                    aria-current={(i == index).then_some(AttrValue::Static("true"))}
                    onclick={dispatch(CarouselAction::GoTo(i))}
                />
            }
        });
        html! {
            <div class="snap-carousel__controls">
                <button
                    type="button"
                    class="snap-carousel__prev"
                    aria-label={t("carousel.prev_image")}
                    disabled={!state.can_prev()}
                    onclick={dispatch(CarouselAction::Prev)}
                >
                    { "‹" }
                </button>
                <div class="snap-carousel__dots" role="group" aria-label={t("carousel.dots_label")}>
                    { for dots }
                </div>
                if props.autoplay {
                    <button
                        type="button"
                        class="snap-carousel__play"
                        aria-label={t(if state.is_playing() { "carousel.pause" } else { "carousel.play" })}
                        onclick={dispatch(CarouselAction::TogglePlaying)}
                    >
                        { t(if state.is_playing() { "carousel.pause_short" } else { "carousel.play_short" }) }
                    </button>
                }
                <button
                    type="button"
                    class="snap-carousel__next"
                    aria-label={t("carousel.next_image")}
                    disabled={!state.can_next()}
                    onclick={dispatch(CarouselAction::Next)}
                >
                    { "›" }
                </button>
            </div>
        }
    } else {
        Html::default()
    };

    let viewer = state.viewer_index().map_or_else(Html::default, |viewer| {
        html! {
            <Lightbox
                slides={props.slides.clone()}
                index={viewer}
                on_prev={emit(CarouselAction::ViewerPrev)}
                on_next={emit(CarouselAction::ViewerNext)}
                on_close={emit(CarouselAction::CloseViewer)}
                trigger_ref={track_ref.clone()}
            />
        }
    });

    html! {
        <section
            class="snap-carousel"
            aria-roledescription="carousel"
            aria-label={props.label.clone().unwrap_or_else(|| t("carousel.snap_label").into())}
            onkeydown={arrow_key_handler(&model)}
            onmouseenter={dispatch(CarouselAction::Hover(true))}
            onmouseleave={dispatch(CarouselAction::Hover(false))}
        >
            <div class="snap-carousel__track" ref={track_ref.clone()} tabindex="0">
                { for slides }
            </div>
            { controls }
            <p class="sr-only" aria-live="polite" aria-atomic="true">{ state.position_label() }</p>
            { viewer }
        </section>
    }
}
