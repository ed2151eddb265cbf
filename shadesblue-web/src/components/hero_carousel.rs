use crate::carousel::{CarouselAction, arrow_key_handler, position_text, use_carousel};
use crate::i18n::{t, tr1};
use crate::paths::asset_path;
use shadesblue_core::config::HERO_INTERVAL_MS;
use shadesblue_core::{IndexMode, Slide};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub slides: Vec<Slide>,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or(HERO_INTERVAL_MS)]
    pub interval_ms: u32,
}

/// Auto-advancing, wrapping slideshow. Hovering pauses it; the play/pause
/// control stops it outright.
#[function_component(HeroCarousel)]
pub fn hero_carousel(props: &Props) -> Html {
    let len = props.slides.len();
    let model = use_carousel(len, IndexMode::Wrap, true, props.interval_ms);

    if len == 0 {
        return Html::default();
    }

    let state = &model.state;
    let index = state.index();
    let dispatch = |action: CarouselAction| {
        let dispatcher = model.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(action.clone()))
    };

    let slides = props.slides.iter().enumerate().map(|(i, slide)| {
        let hidden = i != index;
        let image = html! {
            <img
                src={asset_path(&slide.src)}
                alt={slide.alt.clone()}
                loading={if i == 0 { "eager" } else { "lazy" }}
                draggable="false"
            />
        };
        html! {
            <div
                class="hero-carousel__slide"
                role="group"
                aria-roledescription="slide"
                aria-label={position_text("carousel.slide_label", i + 1, len)}
                aria-hidden={hidden.then_some(AttrValue::Static("true"))}
            >
                if let Some(href) = slide.href.clone() {
                    <a
                        href={href}
                        target="_blank"
                        rel="noopener noreferrer"
                        tabindex={hidden.then_some(AttrValue::Static("-1"))}
                    >
                        { image }
                    </a>
                } else {
                    { image }
                }
                if let Some(caption) = slide.caption.clone() {
                    <p class="hero-carousel__caption">{ caption }</p>
                }
            </div>
        }
    });

    let controls = if state.is_navigable() {
        let playing = state.is_playing();
        let dots = (0..len).map(|i| {
            html! {
                <button
                    type="button"
                    class={classes!("hero-carousel__dot", (i == index).then_some("is-active"))}
                    aria-label={tr1("carousel.go_to", "n", &(i + 1).to_string())}
                    aria-current={(i == index).then_some(AttrValue::Static("true"))}
                    onclick={dispatch(CarouselAction::GoTo(i))}
                />
            }
        });
        html! {
            <>
                <div class="hero-carousel__controls">
                    <button
                        type="button"
                        class="hero-carousel__prev"
                        aria-label={t("carousel.prev")}
                        onclick={dispatch(CarouselAction::Prev)}
                    >
                        { "‹" }
                    </button>
                    <button
                        type="button"
                        class="hero-carousel__play"
                        aria-label={t(if playing { "carousel.pause" } else { "carousel.play" })}
                        onclick={dispatch(CarouselAction::TogglePlaying)}
                    >
                        { t(if playing { "carousel.pause_short" } else { "carousel.play_short" }) }
                    </button>
                    <button
                        type="button"
                        class="hero-carousel__next"
                        aria-label={t("carousel.next")}
                        onclick={dispatch(CarouselAction::Next)}
                    >
                        { "›" }
                    </button>
                </div>
                <div class="hero-carousel__dots" role="group" aria-label={t("carousel.dots_label")}>
                    { for dots }
                </div>
            </>
        }
    } else {
        Html::default()
    };

    html! {
        <section
            class="hero-carousel"
            aria-roledescription="carousel"
            aria-label={props.label.clone().unwrap_or_else(|| t("carousel.hero_label").into())}
            tabindex="0"
            onkeydown={arrow_key_handler(&model)}
            onmouseenter={dispatch(CarouselAction::Hover(true))}
            onmouseleave={dispatch(CarouselAction::Hover(false))}
        >
            <div class="hero-carousel__viewport">
                <div
                    class="hero-carousel__track"
                    style={format!("transform: translateX(-{}%);", index * 100)}
                >
                    { for slides }
                </div>
            </div>
            { controls }
            <p class="sr-only" aria-live="polite" aria-atomic="true">{ state.position_label() }</p>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn slides(n: usize) -> Vec<Slide> {
        (1..=n)
            .map(|i| Slide::new(format!("images/shot-{i}.png"), format!("Shot {i}")))
            .collect()
    }

    fn render(n: usize) -> String {
        let props = Props {
            slides: slides(n),
            label: None,
            interval_ms: HERO_INTERVAL_MS,
        };
        block_on(LocalServerRenderer::<HeroCarousel>::with_props(props).render())
    }

    #[test]
    fn empty_carousel_renders_nothing() {
        assert!(!render(0).contains("hero-carousel"));
    }

    #[test]
    fn single_slide_has_no_controls() {
        let html = render(1);
        assert!(html.contains("Shot 1"));
        assert!(!html.contains("Next slide"));
        assert!(!html.contains("hero-carousel__dot"));
    }

    #[test]
    fn first_slide_is_current_and_others_hidden() {
        let html = render(3);
        assert!(html.contains(r#"aria-label="Image 1 of 3""#), "{html}");
        assert_eq!(html.matches(r#"aria-hidden="true""#).count(), 2);
        assert_eq!(html.matches(r#"aria-current="true""#).count(), 1);
        assert!(html.contains("Pause slideshow"));
        assert!(html.contains("1 / 3"));
    }
}
