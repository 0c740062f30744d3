use dioxus::prelude::*;
use portal::monitoring::{demo_sensors, PumpBoard, PumpStatus};
use portal::TrKey;

use super::DashboardStyles;

/// Pump control panel. Mode and start/stop toggles only change the local
/// board; nothing is sent to real pumps.
#[component]
pub fn TechnicianDashboard() -> Element {
    let i18n = crate::use_i18n();
    let lang = i18n.language();
    let mut board = use_signal(PumpBoard::default);
    let sensors = demo_sensors();

    let readings = [
        (TrKey::CommonPhLevel, format!("{:.1}", sensors.ph)),
        (TrKey::CommonTurbidity, format!("{:.1} NTU", sensors.turbidity)),
        (TrKey::CommonDissolvedOxygen, format!("{:.1} mg/L", sensors.dissolved_oxygen)),
        (TrKey::CommonNitrate, format!("{:.1} mg/L", sensors.nitrate)),
        (TrKey::CommonPressure, format!("{:.1} PSI", sensors.pressure)),
        (TrKey::CommonFlowRate, format!("{:.1} L/min", sensors.flow_rate)),
    ];

    let rows: Vec<_> = board
        .read()
        .divisions()
        .iter()
        .map(|d| (d.id, d.name(lang), d.pump))
        .collect();

    rsx! {
        DashboardStyles {}
        div { class: "dashboard",
            div { class: "dashboard_header",
                h1 { {i18n.t(TrKey::TechnicianDashboard)} }
                span { class: "hint", {i18n.t(TrKey::TechnicianSystemControl)} }
            }

            section { class: "panel",
                h2 { {i18n.t(TrKey::TechnicianPumpControl)} }
                p { class: "hint", {i18n.t(TrKey::TechnicianPumpControlDesc)} }
                div { class: "card_grid",
                    for (id, name, pump) in rows {
                        div { key: "{id}", class: "card pump_card",
                            h3 { {name} }
                            div { class: "pump_row",
                                span { class: "hint", {i18n.t(TrKey::TechnicianMode)} }
                                button {
                                    class: "btn",
                                    onclick: move |_| {
                                        board.write().toggle_mode(id);
                                    },
                                    {i18n.t(pump.mode.label_key())}
                                }
                            }
                            div { class: "pump_row",
                                span { class: "hint", {i18n.t(TrKey::TechnicianStatus)} }
                                PumpStatusBadge { status: pump.status }
                            }
                            div { class: "pump_row",
                                span { class: "hint", {i18n.t(TrKey::TechnicianRuntime)} }
                                span { "{pump.runtime_hours:.1}h" }
                            }
                            button {
                                class: "btn primary",
                                onclick: move |_| {
                                    board.write().toggle_status(id);
                                },
                                if pump.status == PumpStatus::Running {
                                    {i18n.t(TrKey::TechnicianStopPump)}
                                } else {
                                    {i18n.t(TrKey::TechnicianStartPump)}
                                }
                            }
                        }
                    }
                }
                p { class: "hint", {i18n.t(TrKey::TechnicianAutoSchedule)} }
            }

            section { class: "panel",
                h2 { {i18n.t(TrKey::TechnicianLiveSensorData)} }
                div { class: "card_grid",
                    for (label, value) in readings {
                        div { key: "{label}", class: "card stat_card",
                            div { class: "stat_title", {i18n.t(label)} }
                            div { class: "stat_value", "{value}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PumpStatusBadge(status: PumpStatus) -> Element {
    let i18n = crate::use_i18n();
    let tone = status.tone().class();
    rsx! {
        span { class: "badge badge_{tone}", {i18n.t(status.label_key())} }
    }
}
