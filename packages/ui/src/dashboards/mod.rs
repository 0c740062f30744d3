//! Role dashboards over the demo monitoring data.

use dioxus::prelude::*;
use portal::monitoring::{wqi_fill_percent, Complaint, WqiBand};

mod admin;
mod citizen;
mod committee;
mod technician;

pub use admin::AdminDashboard;
pub use citizen::CitizenDashboard;
pub use committee::CommitteeDashboard;
pub use technician::TechnicianDashboard;

const DASHBOARD_CSS: Asset = asset!("/assets/styling/dashboard.css");

#[component]
fn DashboardStyles() -> Element {
    rsx! { document::Link { rel: "stylesheet", href: DASHBOARD_CSS } }
}

#[component]
fn StatCard(title: String, value: String, hint: String) -> Element {
    rsx! {
        div { class: "card stat_card",
            div { class: "stat_title", "{title}" }
            div { class: "stat_value", "{value}" }
            div { class: "hint", "{hint}" }
        }
    }
}

/// WQI score with its band color and a bar.
#[component]
fn WqiMeter(wqi: u8) -> Element {
    let i18n = crate::use_i18n();
    let band = WqiBand::from_wqi(wqi);
    let tone = band.tone().class();
    let fill = wqi_fill_percent(wqi);

    rsx! {
        div { class: "wqi_meter",
            span { class: "wqi_value text_{tone}", "{wqi}" }
            span { class: "badge badge_{tone}", {i18n.t(band.label_key())} }
            div { class: "bar",
                div { class: "bar_fill fill_{tone}", style: "width: {fill}%;" }
            }
        }
    }
}

#[component]
fn ComplaintList(complaints: Vec<Complaint>, show_priority: bool) -> Element {
    rsx! {
        ul { class: "complaint_list",
            for complaint in complaints {
                ComplaintRow { key: "{complaint.id}", complaint, show_priority }
            }
        }
    }
}

#[component]
fn ComplaintRow(complaint: Complaint, show_priority: bool) -> Element {
    let i18n = crate::use_i18n();
    let priority_tone = complaint.priority.tone().class();
    let status_class = if complaint.status.is_open() { "badge" } else { "badge badge_safe" };

    rsx! {
        li { class: "complaint_row",
            div {
                div { class: "complaint_issue", {i18n.t(complaint.issue)} }
                div { class: "hint", "{complaint.place} · {complaint.reported}" }
            }
            div { class: "complaint_tags",
                if show_priority {
                    span { class: "badge badge_{priority_tone}", {i18n.t(complaint.priority.label_key())} }
                }
                span { class: status_class, {i18n.t(complaint.status.label_key())} }
            }
        }
    }
}
