use dioxus::prelude::*;

use crate::components::{AcceptInvitePage, DashboardPage, LoginPage, SettingsPage};
use crate::AppLayout;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    // Authenticated routes share the AppLayout chrome
    #[layout(AppLayout)]
        #[route("/")]
        Home {},

        #[route("/dashboard")]
        Dashboard {},

        #[route("/org/:slug/dashboard")]
        OrgDashboard { slug: String },

        #[route("/settings")]
        Settings {},
    #[end_layout]

    // Login and the invite landing page are outside the layout; the
    // invite page must work for callers with no session at all.
    #[route("/login")]
    Login {},

    #[route("/invite/:token")]
    AcceptInvite { token: String },
}

// Route handler components
#[component]
fn Home() -> Element {
    rsx! { DashboardPage {} }
}

#[component]
fn Dashboard() -> Element {
    rsx! { DashboardPage {} }
}

#[component]
fn OrgDashboard(slug: String) -> Element {
    // The API scopes checks by the caller's org; the slug only names
    // the destination in the address bar
    let _ = slug;
    rsx! { DashboardPage {} }
}

#[component]
fn Settings() -> Element {
    rsx! { SettingsPage {} }
}

#[component]
fn Login() -> Element {
    rsx! { LoginPage {} }
}

#[component]
fn AcceptInvite(token: String) -> Element {
    rsx! { AcceptInvitePage { token } }
}
