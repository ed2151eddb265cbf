use crate::components::nav_link::NavLink;
use crate::i18n::{t, tr1};
use crate::paths::asset_path;
use crate::router::Route;
use shadesblue_core::Project;
use yew::prelude::*;

const PLACEHOLDER_IMAGE: &str = "images/photo-not-available.jpg";
const MAX_STACK_BADGES: usize = 8;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub project: Project,
}

fn external_link(href: &str, text: String, label: String) -> Html {
    html! {
        <a
            class="project-card__link"
            href={href.to_string()}
            target="_blank"
            rel="noopener noreferrer"
            aria-label={label}
        >
            { text }
        </a>
    }
}

#[function_component(ProjectCard)]
pub fn project_card(props: &Props) -> Html {
    let project = &props.project;
    let title = project.title.as_str();
    let image = asset_path(project.hero.as_deref().unwrap_or(PLACEHOLDER_IMAGE));

    let badges = if project.featured || project.source.is_some() {
        html! {
            <div class="project-card__badges">
                if project.featured {
                    <span class="badge badge--featured">{ t("card.featured") }</span>
                }
                if let Some(source) = project.source {
                    <span class="badge">{ t(&format!("portfolio.source.{}", source.as_str())) }</span>
                }
            </div>
        }
    } else {
        Html::default()
    };

    let stack = if project.stack.is_empty() {
        Html::default()
    } else {
        html! {
            <ul class="project-card__stack">
                { for project.stack.iter().take(MAX_STACK_BADGES).map(|s| html! { <li key={s.clone()}>{ s.clone() }</li> }) }
            </ul>
        }
    };

    html! {
        <article class="project-card">
            <NavLink
                to={Route::Project { slug: project.slug.clone() }}
                class={classes!("project-card__primary")}
                aria_label={AttrValue::from(tr1("card.view", "title", title))}
            >
                <div class="project-card__media">
                    <img src={image} alt={title.to_string()} loading="lazy" />
                </div>
                <div class="project-card__body">
                    { badges }
                    <h3 class="project-card__title">{ title.to_string() }</h3>
                    if !project.summary.is_empty() {
                        <p class="project-card__summary">{ project.summary.clone() }</p>
                    }
                    { stack }
                </div>
            </NavLink>
            <div class="project-card__links">
                if let Some(live) = project.links.live.as_deref() {
                    { external_link(live, t("card.live"), tr1("card.live_label", "title", title)) }
                }
                if let Some(hero) = project.hero.as_deref() {
                    {
                        external_link(
                            &asset_path(hero),
                            t("card.screenshot"),
                            tr1("card.screenshot_label", "title", title),
                        )
                    }
                }
                if let Some(repo) = project.links.repo.as_deref() {
                    { external_link(repo, t("card.repo"), tr1("card.repo_label", "title", title)) }
                }
            </div>
        </article>
    }
}
