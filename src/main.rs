mod api;
mod balance;
mod components;
mod config;
mod error;
mod format;
mod grouping;
mod model;
mod refresh;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    log::info!("expense tracker talking to {}", config::API_BASE_URL);

    yew::Renderer::<components::App>::new().render();
}
