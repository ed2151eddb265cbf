use crate::components::cta::{Cta, CtaVariant};
use crate::components::hero_carousel::HeroCarousel;
use crate::components::project_card::ProjectCard;
use crate::i18n::t;
use crate::paths::asset_path;
use crate::router::Route;
use shadesblue_core::config::HERO_INTERVAL_MS;
use shadesblue_core::{Catalog, Slide};
use yew::prelude::*;

const RESUME_PDF: &str = "Jason_Martin_Senior_Full_Stack_Developer.pdf";

/// Selected-work screenshots shown on the landing page.
#[must_use]
pub fn hero_slides() -> Vec<Slide> {
    vec![
        Slide::new(
            "images/home/afterschool-memphis.webp",
            "After School Memphis — Explore Schools & Programs interface",
        )
        .with_caption("After School Memphis — search + filters + map experience")
        .with_href("https://www.scsk12.org/afterschoolmemphis"),
        Slide::new(
            "images/home/we-are-901.webp",
            "We Are 901 campaign landing page",
        )
        .with_caption("Campaign landing page — We Are 901 / Somos 901")
        .with_href("https://www.scsk12.org/"),
        Slide::new(
            "images/home/mscs-website.webp",
            "MSCS district website homepage layout",
        )
        .with_caption("MSCS district website — enterprise homepage modules")
        .with_href("https://www.scsk12.org/"),
    ]
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let slides = use_memo((), |_| hero_slides());
    let featured = Catalog::embedded().featured();

    html! {
        <>
            <section class="container home-hero">
                <div class="home-hero__intro">
                    <h1>{ t("home.heading") }</h1>
                    <p class="lead">{ t("home.intro") }</p>
                    <div class="button-row">
                        <Cta to={Route::Portfolio}>{ t("cta.portfolio") }</Cta>
                        <Cta to={Route::Contact} variant={CtaVariant::Secondary}>
                            { t("cta.contact") }
                        </Cta>
                        <Cta
                            href={AttrValue::from(asset_path(RESUME_PDF))}
                            variant={CtaVariant::Secondary}
                            aria_label={AttrValue::from(t("cta.resume_label"))}
                        >
                            { t("cta.resume") }
                        </Cta>
                    </div>
                </div>
                <div class="home-hero__media">
                    <HeroCarousel slides={(*slides).clone()} interval_ms={HERO_INTERVAL_MS} />
                    <p class="muted small">{ t("home.carousel_note") }</p>
                </div>
            </section>
            if !featured.is_empty() {
                <section class="container home-featured" aria-labelledby="featured-heading">
                    <h2 id="featured-heading">{ t("home.featured") }</h2>
                    <div class="card-grid">
                        { for featured.into_iter().map(|p| html! {
                            <ProjectCard key={p.slug.clone()} project={p.clone()} />
                        }) }
                    </div>
                </section>
            }
        </>
    }
}
