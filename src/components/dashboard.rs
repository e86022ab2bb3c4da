use dioxus::prelude::*;

use crate::api;
use crate::components::common::{ErrorMessage, LoadingSpinner};
use crate::models::{Check, CheckStatus, CheckSummary};
use crate::state::AUTH_STATE;

#[component]
pub fn DashboardPage() -> Element {
    let mut checks = use_signal(Vec::<Check>::new);
    let mut is_loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);

    use_effect(move || {
        spawn(async move {
            is_loading.set(true);
            match api::checks::list_checks().await {
                Ok(data) => {
                    checks.set(data);
                    error.set(None);
                }
                Err(e) => error.set(Some(format!("Failed to load checks: {}", e))),
            }
            is_loading.set(false);
        });
    });

    let org_name = AUTH_STATE.read().org_name().unwrap_or("Dashboard").to_string();

    rsx! {
        div { class: "flex-1 overflow-y-auto p-6",
            div { class: "flex items-center justify-between mb-6",
                h1 { class: "text-2xl font-bold", "{org_name}" }
                span { class: "text-sm text-gray-500", "{checks.read().len()} checks" }
            }

            if let Some(err) = error.read().as_ref() {
                ErrorMessage { message: err.clone() }
            }

            if *is_loading.read() {
                LoadingSpinner {}
            } else if checks.read().is_empty() {
                p { class: "text-center text-gray-500 py-8", "No checks yet." }
            } else {
                div { class: "card overflow-x-auto",
                    table { class: "table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "URL" }
                                th { "Status" }
                                th { "Uptime (24h)" }
                                th { "Last Checked" }
                            }
                        }
                        tbody {
                            for check in checks.read().iter().cloned() {
                                CheckTableRow { key: "{check.id}", check }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CheckTableRow(check: Check) -> Element {
    let mut summary = use_signal(|| None::<CheckSummary>);
    let check_id = check.id;

    use_effect(move || {
        spawn(async move {
            if let Ok(data) = api::checks::check_summary(check_id, 24).await {
                summary.set(Some(data));
            }
        });
    });

    let last_checked = check
        .last_checked_at
        .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| "Never".to_string());

    rsx! {
        tr {
            td { class: "font-medium", "{check.name}" }
            td { class: "text-gray-500 truncate", "{check.url}" }
            td { StatusBadge { status: check.last_status } }
            td { UptimeBadge { summary: summary.read().clone() } }
            td { class: "text-gray-500", "{last_checked}" }
        }
    }
}

#[component]
pub fn StatusBadge(status: CheckStatus) -> Element {
    let class = status.badge_class();
    let name = status.display_name();
    rsx! {
        span { class: "{class}", "{name}" }
    }
}

#[component]
fn UptimeBadge(summary: Option<CheckSummary>) -> Element {
    match summary {
        Some(s) if s.total_runs > 0 => {
            let class = if s.uptime_percentage >= 99.0 {
                "badge badge-green"
            } else if s.uptime_percentage >= 95.0 {
                "badge badge-yellow"
            } else {
                "badge badge-red"
            };
            rsx! {
                span { class: "{class}", {format!("{:.1}%", s.uptime_percentage)} }
            }
        }
        Some(_) => rsx! {
            span { class: "badge badge-gray", "No data" }
        },
        None => rsx! {
            span { class: "badge badge-gray", "..." }
        },
    }
}
