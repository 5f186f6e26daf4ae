use invoice_entry::{App, AppConfig, AppProps};

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    wasm_logger::init(wasm_logger::Config::new(config.log_level));
    log::info!("🚀 Invoice entry starting...");

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
