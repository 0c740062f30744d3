use dioxus::prelude::*;
use tracing_subscriber::EnvFilter;

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
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    dioxus::launch(App);
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
