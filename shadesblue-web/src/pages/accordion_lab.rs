use crate::components::accordion::{Accordion, AccordionItem};
use crate::i18n::{t, t_list};
use yew::prelude::*;

#[function_component(AccordionLab)]
pub fn accordion_lab() -> Html {
    let items = vec![
        AccordionItem::new(
            t("labs.what_title"),
            html! { <p>{ t("labs.what_body") }</p> },
        ),
        AccordionItem::new(
            t("labs.keys_title"),
            html! {
                <ul class="bullet-list">
                    { for t_list("labs.keys_items").into_iter().map(|item| html! { <li>{ item }</li> }) }
                </ul>
            },
        ),
    ];

    html! {
        <section class="container page page--narrow">
            <h1>{ t("labs.accordion_title") }</h1>
            <p class="lead">{ t("labs.accordion_intro") }</p>
            <Accordion id="lab-accordion" {items} />
        </section>
    }
}
