use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod error;
mod hooks;
mod state {
    pub mod attachment;
    pub mod modal;
    pub mod navigation;
    pub mod particles;
    pub mod reveal;
    pub mod scroll;
}
mod dom {
    pub mod observer;
    pub mod scroll_bus;
    pub mod scroller;
}
mod components {
    pub mod modal;
    pub mod nav;
    pub mod reveal;
    pub mod upload_slot;
    pub mod whatsapp_fab;
}
mod pages {
    pub mod home;
    pub mod sections {
        pub mod contact;
        pub mod dialogs;
        pub mod hero;
        pub mod mission;
        pub mod partner;
        pub mod philosophy;
        pub mod services;
    }
}

use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
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
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
