use log::{info, warn};

mod config;
mod dom;
mod error;
mod hero;
mod sms;
mod subscribe;

fn enhance_page() {
    let (window, document) = match (dom::window(), dom::document()) {
        (Ok(window), Ok(document)) => (window, document),
        (Err(e), _) | (_, Err(e)) => {
            warn!("Page enhancements skipped: {}", e);
            return;
        }
    };

    match hero::install(&window, &document) {
        Ok(true) => info!("Hero effects enabled"),
        Ok(false) => {}
        Err(e) => warn!("Hero effects failed: {}", e),
    }

    if let Err(e) = sms::install(&window, &document) {
        warn!("SMS country dropdowns failed: {}", e);
    }

    if subscribe::mount(&document) {
        info!("Subscribe form mounted");
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!("error initializing log:", e.to_string());
    }

    info!("Starting page enhancements");
    if let Err(e) = dom::on_ready(enhance_page) {
        warn!("Could not wait for the document: {}", e);
    }
}
