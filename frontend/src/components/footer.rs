use chrono::{Datelike, Local};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, config::BRAND_NAME)
}

const FOOTER_STYLES: &str = r#"
    .site-footer {
        border-top: 1px solid rgba(229, 229, 229, 0.7);
    }

    .site-footer-inner {
        max-width: 80rem;
        margin: 0 auto;
        padding: 2rem 1.5rem;
        display: flex;
        flex-wrap: wrap;
        gap: 1rem;
        justify-content: space-between;
        font-size: 0.875rem;
        color: #737373;
    }

    .footer-links {
        display: flex;
        gap: 0.5rem;
    }

    .site-footer a {
        color: #737373;
    }

    .site-footer a:hover {
        color: #000000;
    }
"#;

#[function_component(SiteFooter)]
pub fn site_footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="site-footer-inner">
                <span>{ copyright_line(year) }</span>
                <div class="footer-links">
                    <Link<Route> to={Route::Terms}>{"Terms"}</Link<Route>>
                    {" | "}
                    <Link<Route> to={Route::Privacy}>{"Privacy"}</Link<Route>>
                </div>
            </div>
            <style>{ FOOTER_STYLES }</style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_year_and_brand() {
        assert_eq!(copyright_line(2025), "© 2025 Tomo. All rights reserved.");
    }

    #[test]
    fn footer_links_are_styled_by_the_footer_itself() {
        assert!(FOOTER_STYLES.contains(".footer-links {"));
        assert!(!FOOTER_STYLES.contains("legal-links"));
    }
}
