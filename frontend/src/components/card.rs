//! Card primitives and the marketing cards built from them.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CardPartProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Base class for a card part followed by the caller's extra classes.
pub fn part_classes(base: &'static str, extra: &Classes) -> Classes {
    classes!(base, extra.clone())
}

#[function_component(Card)]
pub fn card(props: &CardPartProps) -> Html {
    html! {
        <div class={part_classes("card", &props.class)}>
            { for props.children.iter() }
        </div>
    }
}

#[function_component(CardHeader)]
pub fn card_header(props: &CardPartProps) -> Html {
    html! {
        <div class={part_classes("card-header", &props.class)}>
            { for props.children.iter() }
        </div>
    }
}

#[function_component(CardTitle)]
pub fn card_title(props: &CardPartProps) -> Html {
    html! {
        <h3 class={part_classes("card-title", &props.class)}>
            { for props.children.iter() }
        </h3>
    }
}

#[function_component(CardDescription)]
pub fn card_description(props: &CardPartProps) -> Html {
    html! {
        <p class={part_classes("card-description", &props.class)}>
            { for props.children.iter() }
        </p>
    }
}

#[function_component(CardFooter)]
pub fn card_footer(props: &CardPartProps) -> Html {
    html! {
        <div class={part_classes("card-footer", &props.class)}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StepCardProps {
    pub number: u8,
    pub title: AttrValue,
    pub description: AttrValue,
}

#[function_component(StepCard)]
pub fn step_card(props: &StepCardProps) -> Html {
    html! {
        <Card>
            <CardHeader>
                <div class="step-heading">
                    <span class="step-number">{ props.number }</span>
                    <CardTitle>{ props.title.clone() }</CardTitle>
                </div>
                <CardDescription>{ props.description.clone() }</CardDescription>
            </CardHeader>
        </Card>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub value: AttrValue,
    pub label: AttrValue,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <Card class="text-center">
            <CardHeader>
                <div class="stat-value">{ props.value.clone() }</div>
                <CardDescription>{ props.label.clone() }</CardDescription>
            </CardHeader>
        </Card>
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialCardProps {
    pub quote: AttrValue,
    pub attribution: AttrValue,
}

fn quoted(quote: &str) -> String {
    format!("\"{quote}\"")
}

fn attributed(attribution: &str) -> String {
    format!("— {attribution}")
}

#[function_component(TestimonialCard)]
pub fn testimonial_card(props: &TestimonialCardProps) -> Html {
    html! {
        <Card>
            <CardHeader>
                <CardDescription class="quote">{ quoted(&props.quote) }</CardDescription>
            </CardHeader>
            <CardFooter>
                <div class="attribution">{ attributed(&props.attribution) }</div>
            </CardFooter>
        </Card>
    }
}

/// Shared card styles, mounted once by the page that uses cards.
#[function_component(CardStyles)]
pub fn card_styles() -> Html {
    html! {
        <style>
            {r#"
            .card {
                border-radius: 1rem;
                border: 1px solid rgba(229, 229, 229, 0.7);
                background: linear-gradient(135deg, rgba(255, 247, 237, 0.3), rgba(253, 242, 248, 0.3));
                box-shadow: 0 1px 0 rgba(0, 0, 0, 0.05);
                transition: box-shadow 0.2s ease, transform 0.2s ease;
            }

            .card:hover {
                box-shadow: 0 4px 12px rgba(0, 0, 0, 0.1);
                transform: translateY(-2px);
            }

            .card.text-center {
                text-align: center;
            }

            .card-header {
                padding: 1.5rem;
            }

            .card-footer {
                padding: 0 1.5rem 1.5rem;
            }

            .card-title {
                font-size: 1.25rem;
                font-weight: 600;
                margin: 0;
            }

            .card-description {
                margin-top: 0.5rem;
                color: #525252;
            }

            .card-description.quote {
                color: #171717;
            }

            .step-heading {
                display: flex;
                align-items: center;
                gap: 0.75rem;
            }

            .step-number {
                display: inline-flex;
                height: 1.75rem;
                width: 1.75rem;
                align-items: center;
                justify-content: center;
                border-radius: 9999px;
                background: #f5f5f5;
                color: #404040;
                font-size: 0.875rem;
            }

            .stat-value {
                font-size: 1.875rem;
                font-weight: 600;
            }

            .attribution {
                font-size: 0.875rem;
                color: #737373;
            }
            "#}
        </style>
    }
}
