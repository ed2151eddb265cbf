use crate::a11y::apply_color_theme;
use crate::dom;
use crate::i18n::t;
use crate::storage::preference_store;
use yew::prelude::*;

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_state(|| preference_store().load_theme(dom::system_prefers_dark()));
    let onclick = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = theme.toggled();
            preference_store().save_theme(next);
            apply_color_theme(next);
            theme.set(next);
        })
    };

    html! {
        <button
            type="button"
            class="theme-toggle"
            aria-label={t("theme.toggle")}
            aria-pressed={if theme.is_dark() { "true" } else { "false" }}
            {onclick}
        >
            <span class="theme-toggle__text">{ t("theme.label") }</span>
            <span class="theme-toggle__icon" aria-hidden="true">{ t("theme.icon") }</span>
        </button>
    }
}
