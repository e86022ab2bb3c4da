//! Beacon - uptime monitoring dashboard frontend.
//!
//! Dioxus app (web + desktop) over the Beacon HTTP API: organizations
//! manage checks, members, API keys, and audit history, and new members
//! join via one-time invite links.

mod api;
mod components;
mod invite;
mod models;
mod routes;
mod state;

use dioxus::prelude::*;
use routes::Route;
use state::AUTH_STATE;

fn main() {
    // On wasm, just run the app
    #[cfg(target_arch = "wasm32")]
    {
        run_app();
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer())
            .with(tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("beacon_dashboard=info".parse().unwrap()))
            .init();

        // Load environment variables
        dotenvy::dotenv().ok();

        run_app();
    }
}

fn run_app() {
    // Get API URL - on wasm use the page origin, on native use env var
    #[cfg(target_arch = "wasm32")]
    let api_url = {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_else(|| "http://localhost:8080".to_string())
    };

    #[cfg(not(target_arch = "wasm32"))]
    let api_url = std::env::var("API_URL")
        .unwrap_or_else(|_| "http://localhost:8080".to_string());

    api::init_api_client(&api_url);

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global styles
        style { {include_str!("../assets/styles.css")} }

        Router::<Route> {}
    }
}

/// Chrome for all authenticated routes. Unauthenticated visitors see
/// the login page instead; the invite landing page lives outside this
/// layout so it stays reachable without a session.
#[component]
pub fn AppLayout() -> Element {
    // A held token without a cached identity (fresh page load, or an
    // invite join whose best-effort refresh failed) gets one refresh
    // attempt before falling back to the login form.
    use_effect(move || {
        let needs_identity =
            AUTH_STATE.peek().user.is_none() && api::api_client().get_token().is_some();
        if needs_identity {
            spawn(async move {
                match api::auth::refresh_current_user().await {
                    Ok(user) => {
                        if let Some(token) = api::api_client().get_token() {
                            state::set_auth(user, token);
                        }
                    }
                    Err(err) => tracing::warn!("identity refresh failed: {}", err),
                }
            });
        }
    });

    let auth_state = AUTH_STATE.read();
    if !auth_state.is_authenticated() {
        drop(auth_state);
        return rsx! { components::LoginPage {} };
    }
    drop(auth_state);

    rsx! {
        div { class: "h-screen flex flex-col bg-gray-100",
            TopBar {}

            div { class: "flex-1 flex overflow-hidden",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn TopBar() -> Element {
    let auth_state = AUTH_STATE.read();
    let org_name = auth_state.org_name().unwrap_or("Beacon").to_string();
    let email = auth_state.email().unwrap_or("").to_string();
    drop(auth_state);

    let logout = move |_| {
        spawn(async move {
            api::auth::logout().await;
            state::clear_auth();
        });
    };

    rsx! {
        header { class: "topbar",
            div { class: "flex items-center gap-3",
                span { class: "text-xl", "\u{1F4E1}" }
                h1 { class: "text-lg font-bold", "{org_name}" }
            }

            div { class: "flex items-center gap-4",
                Link { class: "link", to: Route::Settings {}, "Settings" }
                span { class: "text-gray-500 text-sm", "{email}" }
                button {
                    class: "btn btn-secondary btn-sm",
                    onclick: logout,
                    "Logout"
                }
            }
        }
    }
}
