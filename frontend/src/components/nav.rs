use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::action::JoinBetaButton;
use crate::components::anchor::AnchorLink;
use crate::config;
use crate::Route;

/// Vertical scroll offset after which the header switches to its solid style.
const SCROLL_THRESHOLD: f64 = 64.0;

#[function_component(NavigationMenu)]
pub fn navigation_menu() -> Html {
    html! {
        <nav class="nav-menu">
            <AnchorLink target="how" class="nav-link">{"How it works"}</AnchorLink>
            <AnchorLink target="faq" class="nav-link">{"FAQ"}</AnchorLink>
            <JoinBetaButton />
        </nav>
    }
}

#[function_component(SiteHeader)]
pub fn site_header() -> Html {
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let listener = window.as_ref().map(|window| {
                    let scroll_window = window.clone();
                    let callback = Closure::wrap(Box::new(move || {
                        let offset = scroll_window.scroll_y().unwrap_or(0.0);
                        is_scrolled.set(offset > SCROLL_THRESHOLD);
                    }) as Box<dyn FnMut()>);
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                    callback
                });

                move || {
                    if let (Some(window), Some(callback)) = (window, listener) {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    html! {
        <header class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))}>
            <div class="site-header-inner">
                <Link<Route> to={Route::Home} classes="site-logo">
                    <img src={config::LOGO_SRC} alt={config::BRAND_NAME} />
                </Link<Route>>
                <NavigationMenu />
            </div>
            <style>
                {r#"
                .site-header {
                    position: sticky;
                    top: 0;
                    z-index: 30;
                    background: rgba(255, 255, 255, 0.8);
                    backdrop-filter: blur(8px);
                    border-bottom: 1px solid rgba(229, 229, 229, 0.7);
                    transition: background 0.2s ease, box-shadow 0.2s ease;
                }

                .site-header.scrolled {
                    background: #ffffff;
                    box-shadow: 0 1px 8px rgba(0, 0, 0, 0.06);
                }

                .site-header-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    height: 4rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .site-logo img {
                    height: 2rem;
                    width: auto;
                }

                .nav-menu {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }

                .nav-link {
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #404040;
                    text-decoration: none;
                    border-radius: 0.375rem;
                    padding: 0.25rem;
                }

                .nav-link:hover {
                    color: #000000;
                }

                .action {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 0.75rem;
                    padding: 0.75rem 1.25rem;
                    font-weight: 500;
                    text-decoration: none;
                    border: none;
                    cursor: pointer;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    transition: box-shadow 0.2s ease;
                }

                .action:hover {
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.1);
                }

                .action-dark {
                    background: #000000;
                    color: #ffffff;
                }

                @media (max-width: 640px) {
                    .nav-link {
                        display: none;
                    }
                }
                "#}
            </style>
        </header>
    }
}
