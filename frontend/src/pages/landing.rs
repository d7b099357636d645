use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::action::{Action, ActionButton, JoinBetaButton};
use crate::components::card::{CardStyles, StatCard, StepCard, TestimonialCard};
use crate::components::disclosure::{DisclosureGroup, DisclosureItem};
use crate::config;
use crate::Route;

/// Questions mounted into the FAQ section, in display order.
pub fn faq_items() -> Vec<DisclosureItem> {
    vec![
        DisclosureItem::new(
            "q1",
            "How is Tomo different from tools like Calendly?",
            "Calendly is link-first. Tomo is chat-first, agent-led, and context-aware. It feels like a partner, not a booking link.",
        ),
        DisclosureItem::new(
            "q2",
            "Which calendars does Tomo support?",
            "Today: Google Calendar. Coming soon: Outlook, multi-calendar sync, and Slack/WhatsApp integration.",
        ),
        DisclosureItem::new(
            "q3",
            "Can Tomo suggest places to meet?",
            "Yes. Tomo recommends coffee shops and lunch spots, and checks the weather so you don't end up outdoors in the rain.",
        ),
        DisclosureItem::new(
            "q4",
            "Is my data private?",
            "Yes. Your calendar data is encrypted, only accessed with your permission, never sold, and never used to train models.",
        ),
    ]
}

const DIFFERENTIATORS: [(&str, &str); 5] = [
    ("Agent-first.", "Tomo doesn't just sync calendars, it reasons about them."),
    ("Smarter choices.", "Suggests the best times, not just open slots."),
    ("Context aware.", "Learns your habits and preferences."),
    (
        "Beyond time.",
        "Finds coffee shops, lunch spots, and adds contextual weather recommendations so your plans fit the day.",
    ),
    ("Lightweight.", "Connect your calendar, start chatting. No setup rituals."),
];

const PRIVACY_POINTS: [&str; 4] = [
    "Only access what you approve",
    "Fully encrypted",
    "Never sold",
    "Never used to train models",
];

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let open_demo = Callback::from(|_: ()| {
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target(config::DEMO_VIDEO_URL, "_blank");
        }
    });

    html! {
        <div class="landing">
            <CardStyles />
            <main>
                <section class="hero" style={format!("background-image: {};", config::HERO_BACKGROUND)}>
                    <div class="hero-overlay"></div>
                    <div class="hero-inner">
                        <h1>{"Turn Chats Into Plans Instantly"}</h1>
                        <p>
                            {"Stop juggling links and back-and-forth. Just tell Tomo what you want, lunch with Alice or a call with the team, and it's in your calendar."}
                        </p>
                        <div class="hero-cta">
                            <JoinBetaButton />
                        </div>
                    </div>
                </section>

                <div class="divider"></div>

                <section id="how" class="section">
                    <div class="container">
                        <h2>{"How it works"}</h2>
                        <div class="grid grid-3">
                            <StepCard
                                number={1}
                                title="Chat"
                                description="Type it like you'd text a friend: \"Let's do coffee with Sam next week.\""
                            />
                            <StepCard
                                number={2}
                                title="Propose"
                                description="Tomo checks calendars, handles time zones, and suggests a nearby spot."
                            />
                            <StepCard
                                number={3}
                                title="Confirm"
                                description="One tap and it's in everyone's calendar."
                            />
                        </div>

                        <div class="demo">
                            <div class="demo-media">
                                <img
                                    src={config::DEMO_THUMBNAIL_SRC}
                                    alt="Tomo chat interface video thumbnail"
                                    class="demo-thumbnail"
                                />
                                <ActionButton
                                    action={Action::trigger(open_demo)}
                                    aria_label={Some(AttrValue::from("Play the Tomo demo video"))}
                                    class="demo-play"
                                >
                                    <span class="demo-play-icon">
                                        <svg viewBox="0 0 24 24" fill="currentColor">
                                            <path d="M8 5v14l11-7z" />
                                        </svg>
                                    </span>
                                </ActionButton>
                            </div>
                            <div class="demo-caption">
                                <p class="demo-title">{"Watch Tomo Demo"}</p>
                                <p class="demo-subtitle">{"See Tomo in action with real conversations"}</p>
                            </div>
                        </div>
                    </div>
                </section>

                <div class="divider"></div>

                <section class="section">
                    <div class="container">
                        <h2>{"What early testers see"}</h2>
                        <div class="grid grid-3">
                            <StatCard value="5,000+ events" label="scheduled during beta" />
                            <StatCard value="12 hours/week" label="saved by early testers" />
                            <StatCard value="80% fewer messages" label="vs. manual scheduling" />
                        </div>
                    </div>
                </section>

                <div class="divider"></div>

                <section class="section">
                    <div class="container">
                        <h2>{"Why Tomo feels different"}</h2>
                        <div class="grid grid-2">
                            <ul class="differentiators">
                                { for DIFFERENTIATORS.iter().map(|(lead, rest)| html! {
                                    <li>
                                        <span class="lead">{ *lead }</span>
                                        {" "}
                                        <span class="muted">{ *rest }</span>
                                    </li>
                                }) }
                            </ul>
                            <div class="screenshot">
                                <img
                                    src={config::SCREENSHOT_SRC}
                                    alt="Tomo AI chat interface showing daily schedule and weather recommendations"
                                />
                            </div>
                        </div>
                    </div>
                </section>

                <div class="divider"></div>

                <section class="section">
                    <div class="container">
                        <h2>{"Not just another link"}</h2>
                        <p class="muted narrow">
                            {"Other tools hand you a booking page. Tomo gives you a partner. Instead of asking others to adapt to your scheduling link, Tomo works with you in chat to coordinate smarter, faster, and fairer."}
                        </p>
                    </div>
                </section>

                <div class="divider"></div>

                <section class="section">
                    <div class="container">
                        <h2>{"Loved by early testers"}</h2>
                        <div class="grid grid-3">
                            <TestimonialCard
                                quote="Tomo feels like texting a friend who actually gets things done."
                                attribution="Beta user, Sydney"
                            />
                            <TestimonialCard
                                quote="It just knows when not to book me at 7am. Calendly never cared."
                                attribution="Freelancer, London"
                            />
                            <TestimonialCard
                                quote="Suggests a coffee shop and checks the weather. Small things, big difference."
                                attribution="Consultant, New York"
                            />
                        </div>
                    </div>
                </section>

                <div class="divider"></div>

                <section id="faq" class="section">
                    <div class="container">
                        <h2>{"FAQ"}</h2>
                        <DisclosureGroup items={faq_items()} class="faq-list" />
                    </div>
                </section>

                <div class="divider"></div>

                <section id="privacy" class="section">
                    <div class="container">
                        <h2>{"Privacy, built-in"}</h2>
                        <ul class="privacy-points">
                            { for PRIVACY_POINTS.iter().map(|point| html! { <li class="muted">{ *point }</li> }) }
                        </ul>
                        <p class="muted">{"Trust is the foundation."}</p>
                        <p class="muted">
                            {"Read the full "}
                            <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                            {"."}
                        </p>
                    </div>
                </section>

                <div class="divider"></div>

                <section class="section">
                    <div class="container">
                        <h2>{"Ready to try?"}</h2>
                        <p class="muted">{"Join the beta today and see how effortless scheduling can feel."}</p>
                        <div class="closing-cta">
                            <JoinBetaButton />
                        </div>
                    </div>
                </section>
            </main>

            <style>
                {r#"
                .landing {
                    min-height: 100vh;
                    background: #ffffff;
                    color: #171717;
                }

                .hero {
                    position: relative;
                    min-height: 100vh;
                    padding: 5rem 0;
                    background-size: cover;
                    background-position: center;
                    background-repeat: no-repeat;
                }

                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.05);
                }

                .hero-inner {
                    position: relative;
                    z-index: 10;
                    max-width: 48rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    min-height: calc(100vh - 4rem);
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    text-align: center;
                }

                .hero h1 {
                    font-size: 3rem;
                    font-weight: 600;
                    letter-spacing: -0.025em;
                    color: #ffffff;
                }

                .hero p {
                    margin-top: 1.5rem;
                    line-height: 1.6;
                    color: #f5f5f5;
                }

                .hero-cta {
                    margin-top: 2rem;
                    display: flex;
                    justify-content: center;
                }

                .divider {
                    border-top: 1px solid rgba(229, 229, 229, 0.7);
                }

                .section {
                    padding: 5rem 0;
                }

                .container {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }

                .section h2 {
                    font-size: 1.875rem;
                    font-weight: 600;
                    letter-spacing: -0.025em;
                }

                .grid {
                    margin-top: 2rem;
                    display: grid;
                    gap: 1.5rem;
                }

                .grid-3 {
                    grid-template-columns: repeat(3, minmax(0, 1fr));
                }

                .grid-2 {
                    grid-template-columns: repeat(2, minmax(0, 1fr));
                    gap: 3rem;
                }

                .muted {
                    color: #525252;
                }

                .narrow {
                    max-width: 42rem;
                    line-height: 1.6;
                    margin-top: 1.5rem;
                }

                .demo {
                    margin-top: 2.5rem;
                    background: #111827;
                    border-radius: 1rem;
                    padding: 2rem;
                    overflow: hidden;
                }

                .demo-media {
                    position: relative;
                    max-width: 24rem;
                    margin: 0 auto;
                }

                .demo-thumbnail {
                    width: 100%;
                    border-radius: 1rem;
                    display: block;
                }

                .demo-play.action {
                    position: absolute;
                    inset: 0;
                    border-radius: 1rem;
                    background: rgba(0, 0, 0, 0.4);
                    padding: 0;
                }

                .demo-play.action:hover {
                    background: rgba(0, 0, 0, 0.5);
                }

                .demo-play-icon {
                    width: 5rem;
                    height: 5rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.9);
                    color: #1f2937;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    transition: transform 0.2s ease;
                }

                .demo-play:hover .demo-play-icon {
                    transform: scale(1.1);
                }

                .demo-play-icon svg {
                    width: 2rem;
                    height: 2rem;
                    margin-left: 0.25rem;
                }

                .demo-caption {
                    text-align: center;
                    margin-top: 1.5rem;
                }

                .demo-title {
                    color: #ffffff;
                    font-weight: 500;
                }

                .demo-subtitle {
                    color: #d1d5db;
                    font-size: 0.875rem;
                }

                .differentiators {
                    list-style: none;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .differentiators .lead {
                    font-weight: 600;
                }

                .screenshot img {
                    width: 100%;
                    max-width: 24rem;
                    display: block;
                    margin: 0 auto;
                    border-radius: 1rem;
                    border: 1px solid rgba(229, 229, 229, 0.8);
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                }

                .faq-list {
                    margin-top: 1.5rem;
                }

                .privacy-points {
                    margin-top: 1.5rem;
                    list-style: none;
                    padding: 0;
                    display: grid;
                    grid-template-columns: repeat(4, minmax(0, 1fr));
                    gap: 1rem;
                }

                .closing-cta {
                    margin-top: 2rem;
                }

                @media (max-width: 768px) {
                    .grid-3,
                    .grid-2,
                    .privacy-points {
                        grid-template-columns: minmax(0, 1fr);
                    }

                    .hero h1 {
                        font-size: 2.25rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn faq_ids_are_unique_and_ordered() {
        let items = faq_items();
        let ids: Vec<&str> = items.iter().map(|item| &*item.id).collect();
        assert_eq!(ids, ["q1", "q2", "q3", "q4"]);
        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), ids.len());
    }

    #[test]
    fn faq_entries_have_prompt_and_detail() {
        for item in faq_items() {
            assert!(item.prompt.ends_with('?'), "{} prompt", item.id);
            assert!(!item.detail.is_empty(), "{} detail", item.id);
        }
    }
}
