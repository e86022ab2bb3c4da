use dioxus::prelude::*;

use crate::api;
use crate::components::common::{ErrorMessage, LoadingSpinner};
use crate::models::Member;

#[component]
pub fn MembersTab() -> Element {
    let mut members = use_signal(Vec::<Member>::new);
    let mut is_loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);

    use_effect(move || {
        spawn(async move {
            is_loading.set(true);
            match api::members::list_members().await {
                Ok(data) => {
                    members.set(data);
                    error.set(None);
                }
                Err(e) => error.set(Some(format!("Failed to load members: {}", e))),
            }
            is_loading.set(false);
        });
    });

    rsx! {
        div { class: "p-6",
            h2 { class: "text-lg font-semibold mb-4", "Members" }

            if let Some(err) = error.read().as_ref() {
                ErrorMessage { message: err.clone() }
            }

            if *is_loading.read() {
                LoadingSpinner {}
            } else {
                table { class: "table",
                    thead {
                        tr {
                            th { "Email" }
                            th { "Role" }
                            th { "Joined" }
                        }
                    }
                    tbody {
                        for member in members.read().iter() {
                            tr { key: "{member.id}",
                                td { "{member.email}" }
                                td { {member.role.display_name()} }
                                td { class: "text-gray-500",
                                    {member.created_at.format("%Y-%m-%d").to_string()}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
