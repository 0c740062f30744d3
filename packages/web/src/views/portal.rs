use dioxus::prelude::*;
use ui::PortalShell;

use crate::Route;

/// Login and dashboards. Logging out goes back to the landing page.
#[component]
pub fn Portal() -> Element {
    let nav = navigator();

    rsx! {
        PortalShell {
            on_logout: move |_| {
                nav.push(Route::Home {});
            },
        }
    }
}
