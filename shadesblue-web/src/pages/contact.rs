use crate::i18n::t;
use crate::paths::mailto;
use shadesblue_core::config::CONTACT_EMAIL;
use yew::prelude::*;

const BOOKING_URL: &str = "https://calendly.com";

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    html! {
        <section class="container page">
            <h1>{ t("contact.title") }</h1>
            <p class="lead">{ t("contact.intro") }</p>
            <div class="button-row">
                <a class="cta cta--primary" href={mailto(CONTACT_EMAIL, None)}>{ t("contact.email") }</a>
                <a class="cta cta--secondary" href={BOOKING_URL} target="_blank" rel="noreferrer">
                    { t("contact.book") }
                </a>
            </div>
        </section>
    }
}
