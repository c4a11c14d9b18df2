use log::{error, info};

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(page_fx::config::log_level()).expect("error initializing log");

    info!("Starting page effects");
    if let Err(err) = page_fx::start() {
        error!("page effects did not start: {}", err);
    }
}
