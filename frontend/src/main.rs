mod env_variable_utils;
mod models;
mod router;
mod search;
mod utils;

use crate::env_variable_utils::CONFIG;
use crate::router::{switch, Route};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    let level = if CONFIG.debug_mode {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));

    log::info!(
        "NAME: \"{}\", API: \"{}\", LAYOUT: \"{}\", DEBUG: \"{}\"",
        CONFIG.app_name,
        CONFIG.backend_url,
        CONFIG.layout.key(),
        CONFIG.debug_mode
    );

    yew::Renderer::<App>::new().render();
}
