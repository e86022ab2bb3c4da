use dioxus::prelude::*;

use crate::api;
use crate::components::common::{ErrorMessage, LoadingSpinner};
use crate::models::ApiKey;

#[component]
pub fn ApiKeysTab() -> Element {
    let mut keys = use_signal(Vec::<ApiKey>::new);
    let mut is_loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);

    use_effect(move || {
        spawn(async move {
            is_loading.set(true);
            match api::members::list_api_keys().await {
                Ok(data) => {
                    keys.set(data);
                    error.set(None);
                }
                Err(e) => error.set(Some(format!("Failed to load API keys: {}", e))),
            }
            is_loading.set(false);
        });
    });

    rsx! {
        div { class: "p-6",
            h2 { class: "text-lg font-semibold mb-4", "API Keys" }

            if let Some(err) = error.read().as_ref() {
                ErrorMessage { message: err.clone() }
            }

            if *is_loading.read() {
                LoadingSpinner {}
            } else if keys.read().is_empty() {
                p { class: "text-center text-gray-500 py-8", "No API keys." }
            } else {
                table { class: "table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Key" }
                            th { "Last Used" }
                            th { "Created" }
                        }
                    }
                    tbody {
                        for key in keys.read().iter() {
                            tr { key: "{key.id}",
                                td { "{key.name}" }
                                td { class: "font-mono text-gray-500", "{key.key_prefix}..." }
                                td { class: "text-gray-500",
                                    {key.last_used_at.map(|t| t.format("%Y-%m-%d %H:%M").to_string()).unwrap_or_else(|| "Never".to_string())}
                                }
                                td { class: "text-gray-500",
                                    {key.created_at.format("%Y-%m-%d").to_string()}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
