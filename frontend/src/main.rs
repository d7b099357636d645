use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod components {
    pub mod action;
    pub mod anchor;
    pub mod card;
    pub mod disclosure;
    pub mod footer;
    pub mod nav;
}
mod pages {
    pub mod landing;
    pub mod termsprivacy;
}

use components::{footer::SiteFooter, nav::SiteHeader};
use pages::{
    landing::Landing,
    termsprivacy::{PrivacyPolicy, TermsOfService},
};

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/terms")]
    Terms,
    #[at("/privacy")]
    Privacy,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        }
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsOfService /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        }
        // Unknown paths land on the home page.
        Route::NotFound => {
            info!("Unknown path, redirecting to Home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <SiteHeader />
            <Switch<Route> render={switch} />
            <SiteFooter />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_paths_map_to_their_pages() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/terms"), Some(Route::Terms));
        assert_eq!(Route::recognize("/privacy"), Some(Route::Privacy));
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(Route::recognize("/pricing"), Some(Route::NotFound));
        assert_eq!(Route::recognize("/terms/extra"), Some(Route::NotFound));
    }

    #[test]
    fn routes_render_back_to_their_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Terms.to_path(), "/terms");
        assert_eq!(Route::Privacy.to_path(), "/privacy");
    }
}
