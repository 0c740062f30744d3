use dioxus::prelude::*;
use ui::Hero;

use crate::Route;

#[component]
pub fn Home() -> Element {
    let portal_href = Route::Portal {}.to_string();

    rsx! {
        Hero { portal_href }
    }
}
