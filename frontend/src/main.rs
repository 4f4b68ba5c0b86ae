use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod icons;
mod rng;
mod shell;
mod scenes {
    pub mod projection;
    pub mod motion;
    pub mod canvas;
    pub mod hero_cloud;
    pub mod neural_flow;
}
mod diagrams {
    pub mod etl_pipeline;
    pub mod bi_dashboard;
    pub mod methodology_graph;
}
mod components {
    pub mod service_card;
    pub mod contact_form;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

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
            info!("Rendering landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Unknown path, falling back to landing page");
            html! { <Landing /> }
        },
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
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", err).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
