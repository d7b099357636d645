use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

/// Scroll to top only on initial mount.
#[hook]
fn use_scroll_to_top() {
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

#[derive(Properties, PartialEq)]
struct LegalLinksProps {
    current: Route,
}

#[function_component(LegalLinks)]
fn legal_links(props: &LegalLinksProps) -> Html {
    let other = match props.current {
        Route::Terms => html! { <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>> },
        _ => html! { <Link<Route> to={Route::Terms}>{"Terms of Service"}</Link<Route>> },
    };
    html! {
        <div class="legal-links">
            <Link<Route> to={Route::Home}>{"← Back to home"}</Link<Route>>
            {" | "}
            { other }
        </div>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    use_scroll_to_top();

    html! {
        <div class="legal-content privacy-policy">
            <h1>{"Privacy Policy"}</h1>

            <section>
                <h2>{"1. What We Collect"}</h2>
                <p>{"Tomo only processes the data needed to schedule on your behalf:"}</p>
                <ul>
                    <li>{"Account details you provide when joining the beta (name and email address)"}</li>
                    <li>{"Calendar events and availability from calendars you explicitly connect"}</li>
                    <li>{"Chat messages you send to Tomo while arranging plans"}</li>
                </ul>
            </section>

            <section>
                <h2>{"2. How We Use It"}</h2>
                <ul>
                    <li>{"Finding times that work for everyone in a conversation"}</li>
                    <li>{"Suggesting nearby places and checking the weather for a plan"}</li>
                    <li>{"Creating and updating events you have confirmed"}</li>
                </ul>
            </section>

            <section>
                <h2>{"3. What We Never Do"}</h2>
                <ul>
                    <li>{"Access calendars or data you have not approved"}</li>
                    <li>{"Sell your data to anyone"}</li>
                    <li>{"Use your data to train models"}</li>
                </ul>
            </section>

            <section>
                <h2>{"4. Security"}</h2>
                <ul>
                    <li>{"Calendar data is encrypted in transit and at rest"}</li>
                    <li>{"Access tokens are scoped to the permissions you grant"}</li>
                    <li>{"Access to production systems is limited to authorized personnel"}</li>
                </ul>
            </section>

            <section>
                <h2>{"5. Your Rights"}</h2>
                <p>{"You can at any time:"}</p>
                <ul>
                    <li>{"Disconnect a calendar, which revokes Tomo's access immediately"}</li>
                    <li>{"Request a copy of the data we hold about you"}</li>
                    <li>{"Request deletion of your account and associated data"}</li>
                </ul>
            </section>

            <section>
                <h2>{"6. Contact"}</h2>
                <p>
                    {"For privacy questions or to exercise your rights, contact "}
                    <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{ config::CONTACT_EMAIL }</a>
                </p>
            </section>

            <LegalLinks current={Route::Privacy} />
            <LegalStyles />
        </div>
    }
}

#[function_component(TermsOfService)]
pub fn terms_of_service() -> Html {
    use_scroll_to_top();

    html! {
        <div class="legal-content terms-of-service">
            <h1>{"Terms of Service"}</h1>

            <section>
                <h2>{"1. Introduction"}</h2>
                <p>{"These Terms govern your use of Tomo (\"Service\"), a chat-based scheduling assistant currently offered as a beta. By using the Service you agree to these Terms."}</p>
            </section>

            <section>
                <h2>{"2. Beta Access"}</h2>
                <ul>
                    <li>{"The Service is provided as an early beta and features may change or be removed."}</li>
                    <li>{"We may limit or end beta access at any time."}</li>
                    <li>{"Feedback you share may be used to improve the Service."}</li>
                </ul>
            </section>

            <section>
                <h2>{"3. Your Calendar"}</h2>
                <p>{"You are responsible for the calendars you connect and for reviewing the plans Tomo proposes before confirming them. Tomo only creates events after your confirmation."}</p>
            </section>

            <section>
                <h2>{"4. Acceptable Use"}</h2>
                <p>{"You agree not to use the Service for any unlawful purpose or in a way that could harm the Service or other users."}</p>
            </section>

            <section>
                <h2>{"5. Limitation of Liability"}</h2>
                <p>{"The Service is provided \"as is\" without warranties of any kind. Tomo is not liable for missed, double-booked or incorrect events arising from use of the Service."}</p>
            </section>

            <section>
                <h2>{"6. Privacy"}</h2>
                <p>
                    {"Our handling of your data is described in the "}
                    <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                    {", which forms part of these Terms."}
                </p>
            </section>

            <section>
                <h2>{"7. Changes to Terms"}</h2>
                <p>{"We may update these Terms from time to time. Continued use of the Service after a change constitutes acceptance of the updated Terms."}</p>
            </section>

            <section>
                <h2>{"8. Contact"}</h2>
                <p>
                    {"Questions about these Terms can be sent to "}
                    <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{ config::CONTACT_EMAIL }</a>
                </p>
            </section>

            <LegalLinks current={Route::Terms} />
            <LegalStyles />
        </div>
    }
}

#[function_component(LegalStyles)]
fn legal_styles() -> Html {
    html! {
        <style>
            {r#"
            .legal-content {
                min-height: 100vh;
                padding: 4rem 1.5rem;
                display: flex;
                flex-direction: column;
                align-items: center;
                color: #171717;
            }

            .legal-content h1 {
                font-size: 2rem;
                font-weight: 600;
                margin-bottom: 2rem;
            }

            .legal-content section {
                width: 100%;
                max-width: 42rem;
                padding: 1.5rem 2rem;
                margin: 0.75rem auto;
                border-radius: 1rem;
                border: 1px solid rgba(229, 229, 229, 0.7);
                background: linear-gradient(135deg, rgba(255, 247, 237, 0.3), rgba(253, 242, 248, 0.3));
            }

            .legal-content h2 {
                font-size: 1.25rem;
                font-weight: 600;
                margin-bottom: 1rem;
            }

            .legal-content p,
            .legal-content li {
                color: #525252;
                line-height: 1.6;
            }

            .legal-content ul {
                padding-left: 1.25rem;
            }

            .legal-links {
                margin-top: 2rem;
                text-align: center;
            }

            .legal-links a {
                color: #171717;
                transition: color 0.2s ease;
            }

            .legal-links a:hover {
                color: #737373;
            }
            "#}
        </style>
    }
}
