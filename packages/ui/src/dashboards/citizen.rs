use dioxus::prelude::*;
use portal::monitoring::{citizen_complaints, demo_divisions, open_count, Division};
use portal::TrKey;

use super::{ComplaintList, DashboardStyles, WqiMeter};

#[component]
pub fn CitizenDashboard() -> Element {
    let i18n = crate::use_i18n();
    let divisions = demo_divisions();
    let complaints = citizen_complaints();
    let open = open_count(&complaints);
    let total = complaints.len();

    rsx! {
        DashboardStyles {}
        div { class: "dashboard",
            div { class: "dashboard_header",
                h1 { {i18n.t(TrKey::UserDashboard)} }
                span { class: "badge badge_safe", {i18n.t(TrKey::UserLiveStatus)} }
            }

            section { class: "panel",
                h2 { {i18n.t(TrKey::UserDivisionWaterQuality)} }
                p { class: "hint", {i18n.t(TrKey::UserDivisionDesc)} }
                div { class: "card_grid",
                    for division in divisions {
                        DivisionQualityCard { key: "{division.id}", division }
                    }
                }
            }

            section { class: "panel",
                div { class: "panel_header",
                    h2 { {i18n.t(TrKey::UserMyComplaints)} }
                    span { class: "hint", "{open} / {total}" }
                }
                ComplaintList { complaints, show_priority: false }
                button { class: "btn primary", {i18n.t(TrKey::UserRegisterComplaint)} }
            }

            crate::WaterAssistant {}
        }
    }
}

#[component]
fn DivisionQualityCard(division: Division) -> Element {
    let i18n = crate::use_i18n();
    let lang = i18n.language();
    let (supply_key, supply_class) = if division.under_maintenance() {
        (TrKey::UserMaintenance, "badge badge_danger")
    } else {
        (TrKey::UserActive, "badge badge_safe")
    };

    rsx! {
        div { class: "card",
            div { class: "panel_header",
                h3 { {division.name(lang)} }
                span { class: supply_class, {i18n.t(supply_key)} }
            }
            div { class: "hint", {i18n.t(TrKey::UserWqiScore)} }
            WqiMeter { wqi: division.wqi }
            div { class: "hint",
                {i18n.t(TrKey::UserSupplyStatus)}
                ": "
                {i18n.t(supply_key)}
            }
        }
    }
}
