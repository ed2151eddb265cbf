use crate::components::cta::{Cta, CtaVariant};
use crate::i18n::{t, t_list};
use crate::paths::mailto;
use crate::router::Route;
use shadesblue_core::config::CONTACT_EMAIL;
use yew::prelude::*;

const CAPABILITIES: [&str; 3] = ["front", "back", "mapping"];
const PROCESS: [&str; 4] = ["discover", "design", "build", "ship"];
const A11Y_POINTS: [&str; 5] = ["text_size", "underline", "contrast", "motion", "dark"];

fn capability(key: &str) -> Html {
    html! {
        <div class="card">
            <h2>{ t(&format!("what_i_do.{key}.title")) }</h2>
            <ul class="bullet-list">
                { for t_list(&format!("what_i_do.{key}.items")).into_iter().map(|item| html! { <li>{ item }</li> }) }
            </ul>
        </div>
    }
}

#[function_component(WhatIDoPage)]
pub fn what_i_do_page() -> Html {
    html! {
        <section class="container page">
            <h1>{ t("what_i_do.title") }</h1>
            <p class="lead">{ t("what_i_do.intro") }</p>

            <div class="card-grid card-grid--3">
                { for CAPABILITIES.into_iter().map(capability) }
            </div>

            <h2>{ t("what_i_do.process.title") }</h2>
            <ol class="process">
                { for PROCESS.into_iter().map(|step| html! {
                    <li class="card">
                        <h3>{ t(&format!("what_i_do.process.{step}")) }</h3>
                        <p class="small">{ t(&format!("what_i_do.process.{step}_body")) }</p>
                    </li>
                }) }
            </ol>

            <h2 id="accessibility">{ t("what_i_do.a11y.title") }</h2>
            <div class="card">
                <p>{ t("what_i_do.a11y.body") }</p>
                <ul class="bullet-list">
                    { for A11Y_POINTS.into_iter().map(|key| html! {
                        <li>{ t(&format!("what_i_do.a11y.{key}")) }</li>
                    }) }
                </ul>
                <p>
                    { t("what_i_do.a11y.workflow") }
                    { " " }
                    <a href={mailto(CONTACT_EMAIL, None)}>{ t("what_i_do.a11y.email") }</a>
                </p>
            </div>

            <div class="button-row">
                <Cta to={Route::Portfolio} variant={CtaVariant::Secondary}>{ t("cta.see_portfolio") }</Cta>
                <Cta to={Route::Contact}>{ t("cta.get_in_touch") }</Cta>
            </div>
        </section>
    }
}
