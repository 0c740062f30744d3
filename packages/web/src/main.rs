use dioxus::prelude::*;
use portal::PortalConfig;

use views::{Home, Portal};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/portal")]
    Portal {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    init_tracing();
    install_panic_hook();
    log_runtime_config();
    dioxus::launch(App);
}

#[cfg(feature = "server")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("panic: {info}");
    }));
}

fn log_runtime_config() {
    let config = PortalConfig::from_env();
    tracing::info!(
        default_language = %config.default_language,
        storage_key = %config.language_storage_key,
        "startup"
    );
    match config.data_dir.as_deref() {
        Some(dir) => tracing::info!(data_dir = %dir.display(), "startup: preferences directory"),
        None => tracing::info!("startup: no data directory, preferences kept in browser storage"),
    }
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::I18nProvider {
            ui::SessionProvider {
                ui::PortalTheme {
                    Router::<Route> {}
                }
            }
        }
    }
}
