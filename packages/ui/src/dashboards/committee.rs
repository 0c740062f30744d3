use dioxus::prelude::*;
use portal::monitoring::{committee_complaints, demo_finances, demo_village, open_count};
use portal::{Language, TrKey};

use super::{ComplaintList, DashboardStyles, StatCard};

#[component]
pub fn CommitteeDashboard() -> Element {
    let i18n = crate::use_i18n();
    let lang = i18n.language();
    let village = demo_village();
    let finances = demo_finances();
    let complaints = committee_complaints();

    let village_name = match lang {
        Language::En => village.name_en,
        Language::Hi => village.name_hi,
    };
    let pending = open_count(&complaints);
    let total = complaints.len();
    let surplus = finances.monthly_surplus();

    let population = format!("{} · {} {}", village.population, village.households, i18n.t(TrKey::VwscHouseholds));

    rsx! {
        DashboardStyles {}
        div { class: "dashboard",
            div { class: "dashboard_header",
                h1 { {i18n.t(TrKey::VwscDashboard)} }
                span { class: "hint", "{village_name} · " {i18n.t(TrKey::VwscCommittee)} }
            }

            div { class: "card_grid",
                StatCard {
                    title: i18n.t(TrKey::VwscPopulation).to_string(),
                    value: village.population.to_string(),
                    hint: population,
                }
                StatCard {
                    title: i18n.t(TrKey::CommonWqi).to_string(),
                    value: village.wqi.to_string(),
                    hint: i18n.t(TrKey::VwscGoodQuality).to_string(),
                }
                StatCard {
                    title: i18n.t(TrKey::VwscTodaySupply).to_string(),
                    value: format!("{}%", village.today_supply_percent),
                    hint: i18n.t(TrKey::VwscHouseholds).to_string(),
                }
                StatCard {
                    title: i18n.t(TrKey::VwscMonthlyCollection).to_string(),
                    value: format!("₹{}", finances.monthly_collection),
                    hint: format!("{} {}", finances.pending_payments, i18n.t(TrKey::VwscPendingPayments)),
                }
                StatCard {
                    title: i18n.t(TrKey::VwscPendingComplaints).to_string(),
                    value: pending.to_string(),
                    hint: format!("{} {}", i18n.t(TrKey::VwscTotalComplaints), total),
                }
            }

            section { class: "panel",
                h2 { {i18n.t(TrKey::VwscWaterSchedule)} }
                p { class: "hint", {i18n.t(TrKey::VwscScheduleDesc)} }
                div { class: "schedule_row",
                    span { {i18n.t(TrKey::VwscMorning)} }
                    span { "{village.morning_slot}" }
                }
                div { class: "schedule_row",
                    span { {i18n.t(TrKey::VwscEvening)} }
                    span { "{village.evening_slot}" }
                }
            }

            section { class: "panel",
                h2 { {i18n.t(TrKey::VwscFinancialSummary)} }
                div { class: "finance_row",
                    span { {i18n.t(TrKey::VwscMonthlyCollection)} }
                    span { class: "text_safe", "₹{finances.monthly_collection}" }
                }
                div { class: "finance_row",
                    span { {i18n.t(TrKey::VwscMonthlyExpense)} }
                    span { class: "text_danger", "₹{finances.monthly_expense}" }
                }
                div { class: "finance_row",
                    span { {i18n.t(TrKey::VwscTotalBalance)} }
                    span { "₹{finances.balance}" }
                }
                div { class: "finance_row",
                    span { {i18n.t(TrKey::VwscFromLastMonth)} }
                    span { class: "text_safe", "+₹{surplus}" }
                }
            }

            section { class: "panel",
                h2 { {i18n.t(TrKey::VwscComplaintsTitle)} }
                ComplaintList { complaints, show_priority: true }
                button { class: "btn", {i18n.t(TrKey::VwscViewAll)} }
            }
        }
    }
}
