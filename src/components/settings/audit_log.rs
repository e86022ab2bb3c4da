use dioxus::prelude::*;

use crate::api;
use crate::components::common::LoadingSpinner;
use crate::models::{action_display, AuditLog, AuditLogQuery};

const PAGE_SIZE: i64 = 50;

const TIME_WINDOWS: [(i64, &str); 3] = [
    (24, "Last 24 hours"),
    (168, "Last 7 days"),
    (720, "Last 30 days"),
];

#[component]
pub fn AuditLogTab() -> Element {
    let mut logs = use_signal(Vec::<AuditLog>::new);
    let mut total = use_signal(|| 0i64);
    let mut is_loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);
    let mut actions = use_signal(Vec::<String>::new);
    let mut selected_action = use_signal(String::new);
    let mut window_hours = use_signal(|| 168i64);
    let mut offset = use_signal(|| 0i64);

    // Filter dropdown contents; errors here are ignored, the filter
    // just stays empty.
    use_effect(move || {
        spawn(async move {
            if let Ok(data) = api::audit::get_audit_actions().await {
                actions.set(data);
            }
        });
    });

    // Reading the filter signals subscribes this effect, so changing
    // any of them refetches the page.
    use_effect(move || {
        let query = AuditLogQuery {
            limit: PAGE_SIZE,
            offset: offset(),
            action: Some(selected_action()).filter(|a| !a.is_empty()),
            window_hours: window_hours(),
        };
        spawn(async move {
            is_loading.set(true);
            match api::audit::get_audit_logs(&query).await {
                Ok(page) => {
                    logs.set(page.audit_logs);
                    total.set(page.total);
                    error.set(None);
                }
                Err(e) => error.set(Some(format!("Failed to load audit logs: {}", e))),
            }
            is_loading.set(false);
        });
    });

    let total_pages = (total() + PAGE_SIZE - 1) / PAGE_SIZE;
    let current_page = offset() / PAGE_SIZE + 1;

    rsx! {
        div { class: "p-6",
            h2 { class: "text-lg font-semibold mb-4", "Audit Log" }
            p { class: "text-sm text-gray-500 mb-4",
                "Security and activity events for your organization."
            }

            div { class: "flex gap-4 mb-4",
                div {
                    label { class: "form-label-xs", "Time Range" }
                    select {
                        class: "form-select",
                        value: "{window_hours}",
                        onchange: move |e| {
                            if let Ok(hours) = e.value().parse() {
                                window_hours.set(hours);
                                offset.set(0);
                            }
                        },
                        for (value, label) in TIME_WINDOWS {
                            option { value: "{value}", "{label}" }
                        }
                    }
                }
                div {
                    label { class: "form-label-xs", "Action Type" }
                    select {
                        class: "form-select",
                        value: "{selected_action}",
                        onchange: move |e| {
                            selected_action.set(e.value());
                            offset.set(0);
                        },
                        option { value: "", "All Actions" }
                        for action in actions.read().iter() {
                            option { value: "{action}", {action_display(action).0.to_string()} }
                        }
                    }
                }
            }

            if let Some(err) = error.read().as_ref() {
                div { class: "alert alert-error mb-4",
                    "{err}"
                    button {
                        class: "link ml-2",
                        onclick: move |_| error.set(None),
                        "Dismiss"
                    }
                }
            }

            if *is_loading.read() {
                LoadingSpinner {}
            } else {
                table { class: "table",
                    thead {
                        tr {
                            th { "Time" }
                            th { "Action" }
                            th { "User" }
                            th { "Details" }
                            th { "IP" }
                        }
                    }
                    tbody {
                        for log in logs.read().iter() {
                            AuditLogRow { key: "{log.id}", log: log.clone() }
                        }
                    }
                }

                if logs.read().is_empty() {
                    p { class: "text-center text-gray-500 py-8", "No audit logs found." }
                }

                if total_pages > 1 {
                    div { class: "flex items-center justify-between mt-4 pt-4 border-t",
                        p { class: "text-sm text-gray-500",
                            {format!("Showing {} to {} of {} entries",
                                offset() + 1,
                                (offset() + PAGE_SIZE).min(total()),
                                total())}
                        }
                        div { class: "flex items-center gap-2",
                            button {
                                class: "btn btn-secondary btn-sm",
                                disabled: offset() == 0,
                                onclick: move |_| offset.set((offset() - PAGE_SIZE).max(0)),
                                "Previous"
                            }
                            span { class: "text-sm text-gray-500",
                                "Page {current_page} of {total_pages}"
                            }
                            button {
                                class: "btn btn-secondary btn-sm",
                                disabled: offset() + PAGE_SIZE >= total(),
                                onclick: move |_| offset.set(offset() + PAGE_SIZE),
                                "Next"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AuditLogRow(log: AuditLog) -> Element {
    let (label, badge_class) = action_display(&log.action);
    let label = label.to_string();
    let details = log.details_text();
    let time = log.created_at.format("%Y-%m-%d %H:%M:%S").to_string();

    rsx! {
        tr {
            td { class: "text-gray-500", "{time}" }
            td {
                span { class: "{badge_class}", "{label}" }
            }
            td {
                if let Some(email) = log.user_email.as_ref() {
                    "{email}"
                } else {
                    span { class: "text-gray-400", "System" }
                }
            }
            td { class: "text-gray-500 truncate",
                {details.unwrap_or_else(|| "-".to_string())}
            }
            td { class: "text-gray-400 font-mono",
                {log.ip_address.clone().unwrap_or_else(|| "-".to_string())}
            }
        }
    }
}
