mod components;
mod config;
mod hooks;
mod models;
mod services;
mod state;
mod utils;

fn main() {
    console_error_panic_hook::set_once();

    if config::CONFIG.enable_logging {
        wasm_logger::init(wasm_logger::Config::default());
    }

    log::info!("🚀 Coinflow PWA iniciando...");

    yew::Renderer::<components::App>::new().render();
}
