use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod assessment {
    pub mod calculator;
    pub mod questions;
    pub mod relay;
    pub mod state;
}
mod components {
    pub mod contact;
    pub mod faq;
    pub mod footer;
    pub mod mesh;
    pub mod navbar;
    pub mod projects;
    pub mod services;
    pub mod testimonials;
    pub mod theme_toggle;
}
mod pages {
    pub mod home;
    pub mod termsprivacy;
}

use components::theme_toggle::{apply_theme, stored_theme};
use pages::{
    home::Home,
    termsprivacy::{PrivacyPolicy, TermsOfService},
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/terms")]
    Terms,
    #[at("/privacy")]
    Privacy,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsOfService /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    // Re-apply the persisted theme before anything paints.
    use_effect_with_deps(
        move |_| {
            apply_theme(&stored_theme());
            || ()
        },
        (),
    );

    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
