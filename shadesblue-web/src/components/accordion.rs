use shadesblue_core::{AccordionGroup, DisclosureIds};
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct AccordionItem {
    pub title: AttrValue,
    pub body: Html,
    pub open: bool,
}

impl AccordionItem {
    pub fn new(title: impl Into<AttrValue>, body: Html) -> Self {
        Self {
            title: title.into(),
            body,
            open: false,
        }
    }

    #[must_use]
    pub fn opened(mut self) -> Self {
        self.open = true;
        self
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Base for the trigger and panel ids; each item appends its index.
    pub id: AttrValue,
    pub items: Vec<AccordionItem>,
}

/// Independent disclosures: opening one panel leaves the others alone.
#[function_component(Accordion)]
pub fn accordion(props: &Props) -> Html {
    let group = {
        let initial: Vec<bool> = props.items.iter().map(|item| item.open).collect();
        use_state(move || AccordionGroup::new(&initial))
    };

    let panels = props.items.iter().enumerate().map(|(i, item)| {
        let ids = DisclosureIds::from_base(&format!("{}-{i}", props.id));
        let Some(panel) = group.panel(i) else {
            return Html::default();
        };
        let onclick = {
            let group = group.clone();
            Callback::from(move |_| {
                let mut next = (*group).clone();
                next.toggle(i);
                group.set(next);
            })
        };
        html! {
            <div class={classes!("accordion__item", panel.is_expanded().then_some("is-open"))}>
                <h3 class="accordion__heading">
                    <button
                        type="button"
                        id={ids.trigger.clone()}
                        class="accordion__trigger"
                        aria-expanded={panel.aria_expanded()}
                        aria-controls={ids.panel.clone()}
                        {onclick}
                    >
                        <span>{ item.title.clone() }</span>
                        <span class="accordion__icon" aria-hidden="true">
                            { if panel.is_expanded() { "−" } else { "+" } }
                        </span>
                    </button>
                </h3>
                <div
                    id={ids.panel}
                    class="accordion__panel"
                    role="region"
                    aria-labelledby={ids.trigger}
                    hidden={panel.panel_hidden()}
                >
                    { item.body.clone() }
                </div>
            </div>
        }
    });

    html! {
        <div class="accordion">
            { for panels }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn panels_reference_their_triggers() {
        let props = Props {
            id: AttrValue::from("faq"),
            items: vec![
                AccordionItem::new("What is this?", html! { <p>{"Semantics first."}</p> }).opened(),
                AccordionItem::new("Keyboard", html! { <p>{"Enter or Space."}</p> }),
            ],
        };
        let html = block_on(LocalServerRenderer::<Accordion>::with_props(props).render());
        assert!(html.contains(r#"id="faq-0""#), "{html}");
        assert!(html.contains(r#"aria-controls="faq-0-panel""#));
        assert!(html.contains(r#"aria-labelledby="faq-1""#));
        assert!(html.contains(r#"aria-expanded="true""#));
        assert!(html.contains(r#"aria-expanded="false""#));
        assert_eq!(html.matches(r#"hidden="hidden""#).count(), 1);
    }
}
