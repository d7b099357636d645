//! In-page anchor navigation.

use web_sys::{MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

/// Looks `name` up with `find` and hands the hit to `scroll`. A miss does
/// nothing. Returns whether a target was found.
pub fn resolve_and_scroll<T>(
    name: &str,
    find: impl FnOnce(&str) -> Option<T>,
    scroll: impl FnOnce(T),
) -> bool {
    match find(name) {
        Some(target) => {
            scroll(target);
            true
        }
        None => false,
    }
}

/// Smooth-scrolls the element with id `name` to the top of the viewport.
/// Silently does nothing when the current page has no such element.
pub fn scroll_to_section(name: &str) {
    let document = web_sys::window().and_then(|window| window.document());
    resolve_and_scroll(
        name,
        |name| document.and_then(|document| document.get_element_by_id(name)),
        |element| {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        },
    );
}

/// Click handler for anchor links. Suppresses the browser's default
/// hash navigation so the smooth scroll is the only effect.
pub fn anchor_callback(target: AttrValue) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_section(&target);
    })
}

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub target: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = anchor_callback(props.target.clone());
    html! {
        <a href={format!("#{}", props.target)} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn missing_target_is_a_no_op() {
        let scrolled = RefCell::new(Vec::new());
        let found = resolve_and_scroll("pricing", |_| None::<&str>, |t| {
            scrolled.borrow_mut().push(t)
        });
        assert!(!found);
        assert!(scrolled.borrow().is_empty());
    }

    #[test]
    fn lookups_keep_working_after_a_miss() {
        let sections = ["how", "faq"];
        let find = |name: &str| sections.iter().copied().find(|s| *s == name);
        let scrolled = RefCell::new(Vec::new());

        for name in ["missing", "faq", "how"] {
            resolve_and_scroll(name, find, |t| scrolled.borrow_mut().push(t));
        }
        assert_eq!(*scrolled.borrow(), vec!["faq", "how"]);
    }
}
