use crate::carousel::{CarouselAction, position_text, use_carousel};
use crate::components::lightbox::Lightbox;
use crate::i18n::t;
use crate::paths::asset_path;
use shadesblue_core::config::SNAP_INTERVAL_MS;
use shadesblue_core::{IndexMode, Slide};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub slides: Vec<Slide>,
    #[prop_or_default]
    pub heading: Option<AttrValue>,
}

/// Thumbnail grid; each thumb opens the lightbox at its own index.
#[function_component(Gallery)]
pub fn gallery(props: &Props) -> Html {
    let len = props.slides.len();
    let model = use_carousel(len, IndexMode::Clamp, false, SNAP_INTERVAL_MS);
    let thumb_refs = use_memo(len, |len| vec![NodeRef::default(); *len]);

    if len == 0 {
        return Html::default();
    }

    let emit = |action: CarouselAction| {
        let dispatcher = model.dispatcher();
        Callback::from(move |()| dispatcher.dispatch(action.clone()))
    };

    let thumbs = props.slides.iter().enumerate().map(|(i, slide)| {
        let dispatcher = model.dispatcher();
        let onclick = Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(CarouselAction::OpenViewer(i));
        });
        let alt = if slide.alt.is_empty() {
            t("gallery.fallback_alt")
        } else {
            slide.alt.clone()
        };
        html! {
            <li class="gallery__item">
                <button
                    type="button"
                    class="gallery__thumb"
                    aria-label={position_text("gallery.open", i + 1, len)}
                    ref={thumb_refs.get(i).cloned().unwrap_or_default()}
                    {onclick}
                >
                    <img src={asset_path(&slide.src)} {alt} loading="lazy" />
                </button>
            </li>
        }
    });

    let viewer = model.state.viewer_index().map_or_else(Html::default, |viewer| {
        html! {
            <Lightbox
                slides={props.slides.clone()}
                index={viewer}
                on_prev={emit(CarouselAction::ViewerPrev)}
                on_next={emit(CarouselAction::ViewerNext)}
                on_close={emit(CarouselAction::CloseViewer)}
                trigger_ref={thumb_refs.get(viewer).cloned().unwrap_or_default()}
            />
        }
    });

    html! {
        <section class="gallery">
            <h2 class="gallery__heading">
                { props.heading.clone().unwrap_or_else(|| t("gallery.heading").into()) }
            </h2>
            <ul class="gallery__grid">
                { for thumbs }
            </ul>
            { viewer }
        </section>
    }
}
