use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod forms;
mod view_state;

mod components {
    pub mod contact;
    pub mod faq;
    pub mod footer;
    pub mod form_parts;
    pub mod hero;
    pub mod navigation;
    pub mod scroll_to_top;
    pub mod stories;
    pub mod support;
    pub mod timeline;
    pub mod toast;
    pub mod whistleblow;
}

mod pages {
    pub mod home;
    pub mod not_found;
}

use components::toast::ToastProvider;
use pages::{home::Home, not_found::NotFound};

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
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <Switch<Route> render={switch} />
            </ToastProvider>
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(Level::Info) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
