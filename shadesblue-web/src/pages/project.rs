use crate::components::gallery::Gallery;
use crate::components::nav_link::NavLink;
use crate::components::snap_carousel::SnapCarousel;
use crate::dom;
use crate::i18n::t;
use crate::paths::asset_path;
use crate::router::Route;
use shadesblue_core::{Catalog, Project};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub slug: AttrValue,
}

fn did_items(project: &Project) -> Vec<String> {
    if project.did.is_empty() {
        ["front", "back", "a11y", "perf"]
            .iter()
            .map(|key| t(&format!("project.did_fallback.{key}")))
            .collect()
    } else {
        project.did.clone()
    }
}

fn case_section(marker: &'static str, title_key: &str, body: Html) -> Html {
    html! {
        <section class="case-card">
            <h2 class="case-card__title">
                <span class="case-card__marker" aria-hidden="true">{ marker }</span>
                { t(title_key) }
            </h2>
            { body }
        </section>
    }
}

fn visuals(project: &Project) -> Html {
    let slides = project.slides();
    if slides.len() >= 2 {
        html! {
            <div class="project__visual">
                <SnapCarousel slides={slides} autoplay={true} />
            </div>
        }
    } else if let Some(hero) = project.hero.as_deref() {
        html! {
            <figure class="project__visual">
                <img src={asset_path(hero)} alt={project.title.clone()} width="1600" height="900" />
            </figure>
        }
    } else {
        Html::default()
    }
}

fn case_study(project: &Project) -> Html {
    let problem = project
        .problem
        .clone()
        .unwrap_or_else(|| t("project.problem_fallback"));
    let did = did_items(project);

    html! {
        <div class="case-study">
            { case_section("P", "project.problem", html! { <p>{ problem }</p> }) }
            { case_section("W", "project.did", html! {
                <ul class="check-list">
                    { for did.into_iter().map(|item| html! { <li key={item.clone()}>{ item }</li> }) }
                </ul>
            }) }
            { case_section("I", "project.impact", html! {
                <ul class="dot-list">
                    { for project.impact.iter().map(|item| html! { <li key={item.clone()}>{ item.clone() }</li> }) }
                </ul>
            }) }
            if let Some(training) = project.training.clone() {
                { case_section("T", "project.training", html! { <p>{ training }</p> }) }
            }
            if !project.stack.is_empty() || project.links.live.is_some() {
                <div class="case-study__aside">
                    if !project.stack.is_empty() {
                        <section class="case-card">
                            <h2 class="case-card__title">{ t("project.stack") }</h2>
                            <ul class="chip-list">
                                { for project.stack.iter().map(|s| html! { <li key={s.clone()}>{ s.clone() }</li> }) }
                            </ul>
                        </section>
                    }
                    if let Some(live) = project.links.live.clone() {
                        <section class="case-card">
                            <h2 class="case-card__title">{ t("project.live") }</h2>
                            <a href={live.clone()} target="_blank" rel="noreferrer">
                                { live }
                                <span aria-hidden="true">{ " ↗" }</span>
                            </a>
                        </section>
                    }
                </div>
            }
        </div>
    }
}

#[function_component(ProjectPage)]
pub fn project_page(props: &Props) -> Html {
    let project = Catalog::embedded().get(&props.slug);

    {
        let title = project.map_or_else(
            || t("project.not_found"),
            |p| format!("{} · {}", p.title, t("site.name")),
        );
        use_effect_with(title, |title| {
            dom::set_title(title);
            || ()
        });
    }

    let Some(project) = project else {
        return html! {
            <section class="container page">{ t("project.not_found") }</section>
        };
    };
    let slides = project.slides();
    let meta = match project.year.as_deref() {
        Some(year) => format!("{} · {year}", project.role),
        None => project.role.clone(),
    };

    html! {
        <article class="container project">
            <div class="project__back">
                <NavLink to={Route::Portfolio} class={classes!("back-link")}>{ t("project.back") }</NavLink>
            </div>
            <header class="project__header">
                <h1>{ project.title.clone() }</h1>
                <p class="muted small">{ meta }</p>
            </header>
            { visuals(project) }
            if !slides.is_empty() {
                <Gallery {slides} />
            }
            { case_study(project) }
        </article>
    }
}
