use dioxus::prelude::*;
use portal::monitoring::{demo_divisions, recent_complaints, Division, Priority, SystemMetrics};
use portal::{ReportForm, ReportFormError, TrKey};

use super::{ComplaintList, DashboardStyles, StatCard, WqiMeter};

/// Overview across every division, plus the technician report form.
#[component]
pub fn AdminDashboard() -> Element {
    let i18n = crate::use_i18n();
    let divisions = demo_divisions();
    let metrics = SystemMetrics::from_divisions(&divisions);
    let pump_total = divisions.len();
    let complaints = recent_complaints();

    rsx! {
        DashboardStyles {}
        div { class: "dashboard",
            div { class: "dashboard_header",
                h1 { {i18n.t(TrKey::AdminDashboard)} }
                span { class: "hint", {i18n.t(TrKey::AdminSubtitle)} }
            }

            h2 { {i18n.t(TrKey::AdminSystemOverview)} }
            div { class: "card_grid",
                StatCard {
                    title: i18n.t(TrKey::AdminTotalPopulation).to_string(),
                    value: metrics.total_population.to_string(),
                    hint: i18n.t(TrKey::AdminAcrossDivisions).to_string(),
                }
                StatCard {
                    title: i18n.t(TrKey::AdminAverageWQI).to_string(),
                    value: metrics.average_wqi.to_string(),
                    hint: i18n.t(TrKey::AdminSystemWide).to_string(),
                }
                StatCard {
                    title: i18n.t(TrKey::AdminActivePumps).to_string(),
                    value: format!("{}/{}", metrics.running_pumps, pump_total),
                    hint: i18n.t(TrKey::AdminPumpsOperational).to_string(),
                }
                StatCard {
                    title: i18n.t(TrKey::AdminOpenComplaints).to_string(),
                    value: metrics.total_complaints.to_string(),
                    hint: i18n.t(TrKey::AdminPendingResolution).to_string(),
                }
            }

            section { class: "panel",
                h2 { {i18n.t(TrKey::AdminQuickStats)} }
                div { class: "finance_row",
                    span { {i18n.t(TrKey::AdminAveragePressure)} }
                    span { "{metrics.average_pressure:.1} PSI" }
                }
                div { class: "finance_row",
                    span { {i18n.t(TrKey::AdminTotalLeakages)} }
                    span { class: "text_danger", "{metrics.total_leakages}" }
                }
            }

            section { class: "panel",
                h2 { {i18n.t(TrKey::AdminDivisions)} }
                div { class: "card_grid",
                    for division in divisions {
                        DivisionSummaryCard { key: "{division.id}", division }
                    }
                }
            }

            section { class: "panel",
                h2 { {i18n.t(TrKey::AdminRecentComplaints)} }
                p { class: "hint", {i18n.t(TrKey::AdminComplaintManagement)} }
                ComplaintList { complaints, show_priority: true }
            }

            TechnicianReportPanel {}
        }
    }
}

#[component]
fn DivisionSummaryCard(division: Division) -> Element {
    let i18n = crate::use_i18n();
    let name = division.name(i18n.language());
    let status_tone = division.pump.status.tone().class();

    rsx! {
        div { class: "card division_card",
            h3 { {name} }
            WqiMeter { wqi: division.wqi }
            div { class: "finance_row",
                span { {i18n.t(TrKey::VwscPopulation)} }
                span { "{division.population}" }
            }
            div { class: "finance_row",
                span { {i18n.t(TrKey::CommonPump)} }
                span { class: "badge badge_{status_tone}", {i18n.t(division.pump.status.label_key())} }
            }
            div { class: "finance_row",
                span { {i18n.t(TrKey::AdminComplaints)} }
                span { "{division.complaints}" }
            }
            if division.leakages > 0 {
                p { class: "text_danger",
                    "{division.leakages} "
                    {i18n.t(TrKey::AdminLeakageDetected)}
                }
            }
        }
    }
}

/// Instructions to a technician. Sending logs the report and clears the form.
#[component]
fn TechnicianReportPanel() -> Element {
    let i18n = crate::use_i18n();
    let mut form = use_signal(ReportForm::default);
    let mut error = use_signal(|| None::<ReportFormError>);
    let mut sent = use_signal(|| false);

    let technician = form.read().technician.clone();
    let message = form.read().message.clone();
    let active = form.read().priority;
    let can_submit = form.read().can_submit();

    let send = move |_| {
        let result = form.write().send();
        match result {
            Ok(_) => {
                error.set(None);
                sent.set(true);
            }
            Err(err) => error.set(Some(err)),
        }
    };

    rsx! {
        section { class: "panel",
            h2 { {i18n.t(TrKey::AdminSendReport)} }
            p { class: "hint", {i18n.t(TrKey::AdminReportDesc)} }
            div { class: "card report_form",
                label { r#for: "technician", {i18n.t(TrKey::AdminSelectTechnician)} }
                input {
                    id: "technician",
                    placeholder: i18n.t(TrKey::AdminTechnicianPlaceholder),
                    value: "{technician}",
                    oninput: move |evt| {
                        form.write().technician = evt.value();
                        sent.set(false);
                    },
                }
                label { r#for: "message", {i18n.t(TrKey::AdminReportMessage)} }
                textarea {
                    id: "message",
                    placeholder: i18n.t(TrKey::AdminMessagePlaceholder),
                    value: "{message}",
                    oninput: move |evt| {
                        form.write().message = evt.value();
                        sent.set(false);
                    },
                }
                span { {i18n.t(TrKey::AdminPriority)} }
                div { class: "priority_picker",
                    for priority in Priority::ALL {
                        button {
                            key: "{priority:?}",
                            class: if priority == active { "btn active" } else { "btn" },
                            onclick: move |_| form.write().priority = priority,
                            {i18n.t(priority.label_key())}
                        }
                    }
                }
                if let Some(err) = error() {
                    p { class: "error", {i18n.t(err.message_key())} }
                }
                if sent() {
                    p { class: "text_safe", {i18n.t(TrKey::AdminReportSent)} }
                }
                button {
                    class: "btn primary",
                    disabled: !can_submit,
                    onclick: send,
                    {i18n.t(TrKey::AdminSendButton)}
                }
            }
        }
    }
}
