//! Call-to-action control that renders either as a link or as a button.

use yew::prelude::*;

use crate::config;

const BASE_CLASS: &str = "action";

/// Outbound links never hand the opener or referrer to the destination.
pub const LINK_REL: &str = "noopener noreferrer";

#[derive(Clone, PartialEq)]
pub enum Action {
    /// Plain hyperlink to `href`.
    Link { href: AttrValue },
    /// In-page button; clicking emits `on_activate`.
    Trigger { on_activate: Callback<()> },
}

impl Action {
    pub fn link(href: impl Into<AttrValue>) -> Self {
        Action::Link { href: href.into() }
    }

    pub fn trigger(on_activate: Callback<()>) -> Self {
        Action::Trigger { on_activate }
    }
}

pub fn action_classes(extra: &Classes) -> Classes {
    classes!(BASE_CLASS, extra.clone())
}

/// Adapts `on_activate` to a handler for any event type, dropping the event.
fn activation<E: 'static>(on_activate: &Callback<()>) -> Callback<E> {
    on_activate.reform(|_: E| ())
}

#[derive(Properties, PartialEq)]
pub struct ActionButtonProps {
    pub action: Action,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ActionButton)]
pub fn action_button(props: &ActionButtonProps) -> Html {
    let class = action_classes(&props.class);
    match &props.action {
        Action::Link { href } => html! {
            <a
                href={href.clone()}
                class={class}
                aria-label={props.aria_label.clone()}
                rel={LINK_REL}
            >
                { for props.children.iter() }
            </a>
        },
        Action::Trigger { on_activate } => {
            let onclick = activation::<MouseEvent>(on_activate);
            html! {
                <button
                    type="button"
                    class={class}
                    aria-label={props.aria_label.clone()}
                    {onclick}
                >
                    { for props.children.iter() }
                </button>
            }
        }
    }
}

/// The single outbound signup link used in the header, hero and closing section.
#[function_component(JoinBetaButton)]
pub fn join_beta_button() -> Html {
    html! {
        <ActionButton
            action={Action::link(config::BETA_SIGNUP_URL)}
            aria_label={Some(AttrValue::from(format!("Join the {} beta", config::BRAND_NAME)))}
            class="action-dark"
        >
            {"Join the Beta →"}
        </ActionButton>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn link_constructor_keeps_href() {
        match Action::link("https://example.com") {
            Action::Link { href } => assert_eq!(&*href, "https://example.com"),
            Action::Trigger { .. } => panic!("expected a link"),
        }
    }

    #[test]
    fn activation_emits_once_per_event() {
        let count = Rc::new(Cell::new(0));
        let on_activate = {
            let count = count.clone();
            Callback::from(move |_| count.set(count.get() + 1))
        };
        let handler = activation::<&str>(&on_activate);
        handler.emit("click");
        handler.emit("click");
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn action_class_prefixes_caller_classes() {
        assert_eq!(action_classes(&classes!("action-dark")).to_string(), "action action-dark");
    }

    #[test]
    fn trigger_is_never_equal_to_link() {
        let trigger = Action::trigger(Callback::from(|_| ()));
        assert!(trigger != Action::link("#"));
    }
}
