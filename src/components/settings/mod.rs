use dioxus::prelude::*;

use crate::state::AUTH_STATE;

mod api_keys;
mod audit_log;
mod members;

use api_keys::ApiKeysTab;
use audit_log::AuditLogTab;
use members::MembersTab;

#[derive(Clone, Copy, PartialEq)]
enum SettingsTab {
    Members,
    ApiKeys,
    AuditLog,
}

impl SettingsTab {
    fn label(&self) -> &str {
        match self {
            SettingsTab::Members => "Members",
            SettingsTab::ApiKeys => "API Keys",
            SettingsTab::AuditLog => "Audit Log",
        }
    }

    fn admin_only(&self) -> bool {
        matches!(self, SettingsTab::AuditLog)
    }
}

const TABS: [SettingsTab; 3] = [SettingsTab::Members, SettingsTab::ApiKeys, SettingsTab::AuditLog];

#[component]
pub fn SettingsPage() -> Element {
    let mut active = use_signal(|| SettingsTab::Members);

    let auth = AUTH_STATE.read();
    let can_manage = auth.can_manage_settings();
    let org_name = auth.org_name().unwrap_or("").to_string();
    let email = auth.email().unwrap_or("").to_string();
    drop(auth);

    let visible: Vec<SettingsTab> = TABS
        .into_iter()
        .filter(|t| !t.admin_only() || can_manage)
        .collect();

    rsx! {
        div { class: "flex-1 overflow-y-auto p-6",
            div { class: "flex items-center justify-between mb-6",
                div {
                    h1 { class: "text-2xl font-bold", "Organization Settings" }
                    if !org_name.is_empty() {
                        p { class: "text-sm text-gray-500 mt-1", "{org_name}" }
                    }
                }
                p { class: "text-sm text-gray-500", "{email}" }
            }

            div { class: "tab-bar mb-6",
                for tab in visible {
                    button {
                        class: if active() == tab { "tab tab-active" } else { "tab" },
                        onclick: move |_| active.set(tab),
                        {tab.label()}
                    }
                }
            }

            div { class: "card",
                match active() {
                    SettingsTab::Members => rsx! { MembersTab {} },
                    SettingsTab::ApiKeys => rsx! { ApiKeysTab {} },
                    SettingsTab::AuditLog => rsx! { AuditLogTab {} },
                }
            }
        }
    }
}
