use crate::a11y::apply_preferences;
use crate::components::nav_link::route_href;
use crate::dom;
use crate::focus::{focus_keydown_handler, use_focus_trap};
use crate::i18n::{t, tr1};
use crate::paths::mailto;
use crate::router::Route;
use crate::storage::preference_store;
use shadesblue_core::config::{CONTACT_EMAIL, LIVE_REGION_ID, MENU_DIALOG_ID};
use shadesblue_core::{Announcement, MenuAction, TextSize, Toggle, apply_action, is_menu_shortcut};
use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent};
use yew::prelude::*;

const TITLE_ID: &str = "a11y-title";
const TEXT_SIZE_ID: &str = "a11y-text-size";

#[derive(Properties, PartialEq, Clone, Default)]
pub struct Props {
    /// Fired whenever the menu opens, so other overlays can close.
    #[prop_or_default]
    pub on_open: Callback<()>,
}

/// Live-region text for a menu action.
#[must_use]
pub fn announcement_text(announcement: Announcement) -> String {
    match announcement {
        Announcement::TextSize(size) => tr1(
            "announce.text_size",
            "size",
            &t(&format!("announce.size.{}", size.as_str())),
        ),
        Announcement::Toggled { toggle, on } => tr1(
            if on {
                "announce.toggle_on"
            } else {
                "announce.toggle_off"
            },
            "option",
            &t(toggle.i18n_key()),
        ),
        Announcement::Reset => t("announce.reset"),
    }
}

fn pressed(on: bool) -> &'static str {
    if on { "true" } else { "false" }
}

#[function_component(AccessibilityMenu)]
pub fn accessibility_menu(props: &Props) -> Html {
    let open = use_state(|| false);
    let record = use_state(|| preference_store().load());
    let message = use_state(String::new);
    let trigger_ref = use_node_ref();
    let panel_ref = use_node_ref();

    {
        let open = open.setter();
        let on_open = props.on_open.clone();
        use_effect_with((), move |()| {
            let listener = dom::Listener::on_window("keydown", move |event: Event| {
                let Some(e) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if is_menu_shortcut(&e.key(), e.alt_key(), e.shift_key()) {
                    e.prevent_default();
                    on_open.emit(());
                    open.set(true);
                }
            });
            move || drop(listener)
        });
    }

    use_focus_trap(*open, panel_ref.clone(), trigger_ref.clone());

    let act = {
        let record = record.clone();
        let message = message.clone();
        Callback::from(move |action: MenuAction| {
            let store = preference_store();
            let (next, announcement) = apply_action(*record, action);
            store.save(&next);
            apply_preferences(&next);
            record.set(next);
            message.set(announcement_text(announcement));
        })
    };
    let show = {
        let open = open.clone();
        let on_open = props.on_open.clone();
        Callback::from(move |_| {
            on_open.emit(());
            open.set(true);
        })
    };
    let hide = {
        let open = open.clone();
        Callback::from(move |()| open.set(false))
    };
    let hide_click = {
        let hide = hide.clone();
        Callback::from(move |_| hide.emit(()))
    };

    let body = if *open {
        let on_keydown = focus_keydown_handler(&panel_ref, hide.clone());
        let size_buttons: Html = TextSize::ALL
            .into_iter()
            .map(|size| {
                let act = act.clone();
                html! {
                    <button
                        type="button"
                        class={classes!("a11y-menu__option", (record.text_size == size).then_some("is-active"))}
                        aria-pressed={pressed(record.text_size == size)}
                        data-autofocus={(size == TextSize::Normal).then_some(AttrValue::Static("true"))}
                        onclick={Callback::from(move |_| act.emit(MenuAction::SetTextSize(size)))}
                    >
                        { t(&format!("menu.{}", size.as_str())) }
                    </button>
                }
            })
            .collect();
        let toggles: Html = [
            (Toggle::UnderlineLinks, MenuAction::ToggleUnderline, record.underline_links),
            (Toggle::HighContrast, MenuAction::ToggleHighContrast, record.high_contrast),
            (Toggle::ReduceMotion, MenuAction::ToggleReduceMotion, record.reduce_motion),
        ]
        .into_iter()
        .map(|(toggle, action, on)| {
            let act = act.clone();
            html! {
                <button
                    type="button"
                    class={classes!("a11y-menu__toggle", on.then_some("is-active"))}
                    aria-pressed={pressed(on)}
                    onclick={Callback::from(move |_| act.emit(action))}
                >
                    { t(toggle.i18n_key()) }
                </button>
            }
        })
        .collect();
        let reset = {
            let act = act.clone();
            Callback::from(move |_| act.emit(MenuAction::Reset))
        };

        html! {
            <>
                <button
                    type="button"
                    class="a11y-menu__backdrop"
                    tabindex="-1"
                    aria-label={t("menu.backdrop")}
                    onclick={hide_click.clone()}
                />
                <div class="a11y-menu__panel" ref={panel_ref.clone()} onkeydown={on_keydown}>
                    <div class="a11y-menu__head">
                        <h2 id={TITLE_ID}>{ t("menu.title") }</h2>
                        <button type="button" class="a11y-menu__close" onclick={hide_click}>
                            { t("menu.close") }
                        </button>
                    </div>
                    <div class="a11y-menu__body">
                        <div role="group" aria-labelledby={TEXT_SIZE_ID}>
                            <div id={TEXT_SIZE_ID} class="a11y-menu__label">{ t("menu.text_size") }</div>
                            <div class="a11y-menu__row">{ size_buttons }</div>
                        </div>
                        <div class="a11y-menu__toggles">{ toggles }</div>
                        <div class="a11y-menu__row">
                            <a href={format!("{}#accessibility", route_href(&Route::WhatIDo))}>
                                { t("menu.statement") }
                            </a>
                            <a href={mailto(CONTACT_EMAIL, Some(&t("menu.report_subject")))}>
                                { t("menu.report") }
                            </a>
                            <button type="button" class="a11y-menu__reset" onclick={reset}>
                                { t("menu.reset") }
                            </button>
                        </div>
                        <p class="a11y-menu__tip">{ tr1("menu.tip", "keys", "Alt+Shift+A") }</p>
                    </div>
                </div>
            </>
        }
    } else {
        Html::default()
    };

    html! {
        <>
            <button
                type="button"
                class="a11y-trigger"
                aria-haspopup="dialog"
                aria-controls={MENU_DIALOG_ID}
                aria-expanded={pressed(*open)}
                ref={trigger_ref}
                onclick={show}
            >
                { t("menu.trigger") }
            </button>
            <div id={LIVE_REGION_ID} class="sr-only" role="status" aria-live="polite">
                { (*message).clone() }
            </div>
            <div
                id={MENU_DIALOG_ID}
                class="a11y-menu"
                role="dialog"
                aria-modal="true"
                aria-labelledby={TITLE_ID}
                hidden={!*open}
            >
                { body }
            </div>
        </>
    }
}
