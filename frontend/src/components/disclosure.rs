//! Single-open disclosure group (accordion).
//!
//! The group owns one piece of state, the id of the expanded item, and
//! lives exactly as long as the mounted component. Items are rendered in
//! the order given. Ids are expected to be unique within a group; with
//! duplicates every item sharing the id mirrors the same open flag and a
//! toggle from any of them acts on all of them.

use std::rc::Rc;

use log::debug;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct DisclosureItem {
    pub id: AttrValue,
    pub prompt: AttrValue,
    pub detail: AttrValue,
}

impl DisclosureItem {
    pub fn new(
        id: impl Into<AttrValue>,
        prompt: impl Into<AttrValue>,
        detail: impl Into<AttrValue>,
    ) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            detail: detail.into(),
        }
    }
}

pub enum DisclosureAction {
    /// Close `id` if it is the open item, otherwise open it.
    Toggle(AttrValue),
    /// The rendered ids changed; close the group if the open id is gone.
    Retain(Vec<AttrValue>),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisclosureState {
    pub open_id: Option<AttrValue>,
}

/// What a trigger and its content region expose to assistive technology.
#[derive(Clone, Debug, PartialEq)]
pub struct AriaState {
    pub expanded: bool,
    pub controls: AttrValue,
    pub hidden: bool,
}

pub fn content_id(id: &str) -> AttrValue {
    AttrValue::from(format!("accordion-{id}"))
}

impl DisclosureState {
    /// First item open, or closed when there are no items.
    pub fn initial(items: &[DisclosureItem]) -> Self {
        Self {
            open_id: items.first().map(|item| item.id.clone()),
        }
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open_id.as_deref() == Some(id)
    }

    pub fn aria(&self, id: &str) -> AriaState {
        let expanded = self.is_open(id);
        AriaState {
            expanded,
            controls: content_id(id),
            hidden: !expanded,
        }
    }
}

impl Reducible for DisclosureState {
    type Action = DisclosureAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            DisclosureAction::Toggle(id) => {
                let open_id = if self.is_open(&id) { None } else { Some(id) };
                Rc::new(Self { open_id })
            }
            DisclosureAction::Retain(ids) => match &self.open_id {
                Some(open) if !ids.contains(open) => Rc::new(Self { open_id: None }),
                _ => self,
            },
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct DisclosureGroupProps {
    pub items: Vec<DisclosureItem>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(DisclosureGroup)]
pub fn disclosure_group(props: &DisclosureGroupProps) -> Html {
    let state = {
        let items = props.items.clone();
        use_reducer(move || DisclosureState::initial(&items))
    };

    {
        let state = state.clone();
        let ids: Vec<AttrValue> = props.items.iter().map(|item| item.id.clone()).collect();
        use_effect_with_deps(
            move |ids| {
                state.dispatch(DisclosureAction::Retain(ids.clone()));
                || ()
            },
            ids,
        );
    }

    html! {
        <div class={classes!("accordion", props.class.clone())}>
            { for props.items.iter().map(|item| {
                let aria = state.aria(&item.id);
                let onclick = {
                    let state = state.clone();
                    let id = item.id.clone();
                    Callback::from(move |_: MouseEvent| {
                        debug!("disclosure toggled: {}", id);
                        state.dispatch(DisclosureAction::Toggle(id.clone()));
                    })
                };
                html! {
                    <div class="accordion-item">
                        <button
                            type="button"
                            class="accordion-trigger"
                            aria-expanded={aria.expanded.to_string()}
                            aria-controls={aria.controls.clone()}
                            {onclick}
                        >
                            <span class="accordion-prompt">{ item.prompt.clone() }</span>
                            <span
                                class={classes!("accordion-chevron", aria.expanded.then_some("open"))}
                                aria-hidden="true"
                            >
                                {"▾"}
                            </span>
                        </button>
                        <div
                            id={aria.controls.clone()}
                            role="region"
                            aria-hidden={aria.hidden.to_string()}
                            class={classes!("accordion-content", aria.expanded.then_some("open"))}
                        >
                            <div class="accordion-detail">{ item.detail.clone() }</div>
                        </div>
                    </div>
                }
            }) }
            <style>
                {r#"
                .accordion > .accordion-item + .accordion-item {
                    border-top: 1px solid rgba(229, 229, 229, 0.7);
                }

                .accordion-item {
                    padding: 1rem 0;
                }

                .accordion-trigger {
                    width: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    padding: 0.5rem 0;
                    background: none;
                    border: none;
                    text-align: left;
                    cursor: pointer;
                    color: inherit;
                }

                .accordion-trigger:focus-visible {
                    outline: none;
                    box-shadow: 0 0 0 2px rgba(0, 0, 0, 0.1);
                }

                .accordion-prompt {
                    font-size: 1.125rem;
                    font-weight: 600;
                }

                .accordion-chevron {
                    flex-shrink: 0;
                    transition: transform 0.2s ease;
                }

                .accordion-chevron.open {
                    transform: rotate(180deg);
                }

                .accordion-content {
                    color: #525252;
                    overflow: hidden;
                    max-height: 0;
                    transition: max-height 0.3s ease;
                }

                .accordion-content.open {
                    max-height: 24rem;
                }

                .accordion-detail {
                    padding: 0.5rem 0.25rem 0 0;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faq() -> Vec<DisclosureItem> {
        vec![
            DisclosureItem::new("q1", "First?", "One."),
            DisclosureItem::new("q2", "Second?", "Two."),
            DisclosureItem::new("q3", "Third?", "Three."),
        ]
    }

    fn toggle(state: Rc<DisclosureState>, id: &str) -> Rc<DisclosureState> {
        state.reduce(DisclosureAction::Toggle(AttrValue::from(id.to_string())))
    }

    fn open_count(state: &DisclosureState, items: &[DisclosureItem]) -> usize {
        items.iter().filter(|item| state.is_open(&item.id)).count()
    }

    #[test]
    fn first_item_starts_open() {
        let items = faq();
        let state = DisclosureState::initial(&items);
        assert!(state.is_open("q1"));
        assert!(!state.is_open("q2"));
        assert!(!state.is_open("q3"));
    }

    #[test]
    fn empty_group_starts_closed() {
        let state = DisclosureState::initial(&[]);
        assert_eq!(state.open_id, None);
    }

    #[test]
    fn toggling_walks_through_open_and_closed() {
        let items = faq()[..2].to_vec();
        let state = Rc::new(DisclosureState::initial(&items));
        assert_eq!(state.open_id.as_deref(), Some("q1"));

        let state = toggle(state, "q2");
        assert_eq!(state.open_id.as_deref(), Some("q2"));

        let state = toggle(state, "q2");
        assert_eq!(state.open_id, None);

        let state = toggle(state, "q1");
        assert_eq!(state.open_id.as_deref(), Some("q1"));
    }

    #[test]
    fn at_most_one_item_open_for_every_short_toggle_sequence() {
        let items = faq();
        let ids = ["q1", "q2", "q3"];
        for a in ids {
            for b in ids {
                for c in ids {
                    for d in ids {
                        let mut state = Rc::new(DisclosureState::initial(&items));
                        for id in [a, b, c, d] {
                            state = toggle(state, id);
                            assert!(open_count(&state, &items) <= 1);
                        }
                    }
                }
            }
        }
    }

    fn state_with(open: Option<&str>) -> Rc<DisclosureState> {
        Rc::new(DisclosureState {
            open_id: open.map(|id| AttrValue::from(id.to_string())),
        })
    }

    #[test]
    fn double_toggle_from_closed_returns_to_closed() {
        for id in ["q1", "q2", "q3"] {
            let back = toggle(toggle(state_with(None), id), id);
            assert_eq!(back.open_id, None, "toggling {id} twice from closed");
        }
    }

    #[test]
    fn double_toggle_of_open_item_reopens_it() {
        for id in ["q1", "q2", "q3"] {
            let state = state_with(Some(id));
            let back = toggle(toggle(state.clone(), id), id);
            assert_eq!(back.open_id, state.open_id, "toggling open {id} twice");
        }
    }

    #[test]
    fn double_toggle_of_other_item_ends_closed() {
        let back = toggle(toggle(state_with(Some("q1")), "q2"), "q2");
        assert_eq!(back.open_id, None);
    }

    #[test]
    fn toggle_never_opens_another_item() {
        let items = faq();
        for start in [None, Some("q1"), Some("q2"), Some("q3")] {
            for id in ["q1", "q2", "q3"] {
                let next = toggle(state_with(start), id);
                for item in &items {
                    if &*item.id != id {
                        assert!(
                            !next.is_open(&item.id),
                            "toggling {id} from {start:?} opened {}",
                            item.id
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn aria_flags_mirror_open_state() {
        let items = faq();
        let mut state = Rc::new(DisclosureState::initial(&items));
        for id in ["q2", "q2", "q3", "q1"] {
            state = toggle(state, id);
            for item in &items {
                let aria = state.aria(&item.id);
                assert_eq!(aria.expanded, state.is_open(&item.id));
                assert_eq!(aria.hidden, !state.is_open(&item.id));
                assert_eq!(aria.controls, content_id(&item.id));
            }
        }
    }

    #[test]
    fn content_id_is_prefixed_item_id() {
        assert_eq!(&*content_id("q4"), "accordion-q4");
    }

    #[test]
    fn retain_closes_when_open_item_disappears() {
        let items = faq();
        let state = toggle(Rc::new(DisclosureState::initial(&items)), "q3");
        let kept = state
            .clone()
            .reduce(DisclosureAction::Retain(vec!["q1".into(), "q3".into()]));
        assert!(Rc::ptr_eq(&kept, &state));

        let dropped = state.reduce(DisclosureAction::Retain(vec!["q1".into()]));
        assert_eq!(dropped.open_id, None);
    }

    #[test]
    fn duplicate_ids_share_one_open_flag() {
        let items = vec![
            DisclosureItem::new("dup", "A?", "a"),
            DisclosureItem::new("dup", "B?", "b"),
        ];
        let state = DisclosureState::initial(&items);
        assert_eq!(open_count(&state, &items), 2);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, HtmlElement};

    wasm_bindgen_test_configure!(run_in_browser);

    #[derive(Properties, PartialEq)]
    struct FixtureProps {
        items: Vec<DisclosureItem>,
    }

    #[function_component(Fixture)]
    fn fixture(props: &FixtureProps) -> Html {
        html! { <DisclosureGroup items={props.items.clone()} /> }
    }

    async fn mount(items: Vec<DisclosureItem>) -> Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        yew::Renderer::<Fixture>::with_root_and_props(root.clone(), FixtureProps { items })
            .render();
        TimeoutFuture::new(10).await;
        root
    }

    fn triggers(root: &Element) -> Vec<HtmlElement> {
        let nodes = root.query_selector_all(".accordion-trigger").unwrap();
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .map(|node| node.dyn_into::<HtmlElement>().unwrap())
            .collect()
    }

    fn expanded(trigger: &HtmlElement) -> Option<String> {
        trigger.get_attribute("aria-expanded")
    }

    #[wasm_bindgen_test]
    async fn clicks_move_the_open_item() {
        let root = mount(vec![
            DisclosureItem::new("q1", "One?", "1"),
            DisclosureItem::new("q2", "Two?", "2"),
        ])
        .await;
        let buttons = triggers(&root);
        assert_eq!(buttons.len(), 2);
        assert_eq!(expanded(&buttons[0]).as_deref(), Some("true"));
        assert_eq!(expanded(&buttons[1]).as_deref(), Some("false"));

        buttons[1].click();
        TimeoutFuture::new(10).await;
        assert_eq!(expanded(&buttons[0]).as_deref(), Some("false"));
        assert_eq!(expanded(&buttons[1]).as_deref(), Some("true"));

        let region = root.query_selector("#accordion-q2").unwrap().unwrap();
        assert_eq!(region.get_attribute("aria-hidden").as_deref(), Some("false"));
        assert_eq!(
            buttons[1].get_attribute("aria-controls").as_deref(),
            Some("accordion-q2")
        );

        buttons[1].click();
        TimeoutFuture::new(10).await;
        assert_eq!(expanded(&buttons[1]).as_deref(), Some("false"));
        assert_eq!(region.get_attribute("aria-hidden").as_deref(), Some("true"));
    }

    #[wasm_bindgen_test]
    async fn empty_group_renders_no_triggers() {
        let root = mount(Vec::new()).await;
        assert!(triggers(&root).is_empty());
    }
}
