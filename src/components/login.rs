use dioxus::prelude::*;

use crate::api;
use crate::state;

#[component]
pub fn LoginPage() -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut is_loading = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let mut login = move |_| {
        let email_value = email();
        let password_value = password();

        if email_value.is_empty() || password_value.is_empty() {
            error.set(Some("Please enter email and password".to_string()));
            return;
        }

        is_loading.set(true);
        error.set(None);

        spawn(async move {
            match api::auth::login(&email_value, &password_value).await {
                Ok(response) => {
                    let route = response.user.dashboard_route();
                    state::set_auth(response.user, response.token);
                    navigator().push(route);
                }
                Err(_) => {
                    error.set(Some("Invalid email or password".to_string()));
                }
            }
            is_loading.set(false);
        });
    };

    rsx! {
        div { class: "min-h-screen flex items-center justify-center bg-gray-50",
            div { class: "card w-full max-w-md p-8",
                div { class: "text-center mb-8",
                    h1 { class: "text-2xl font-bold", "Beacon" }
                    p { class: "text-gray-500", "Sign in to your organization" }
                }

                if let Some(err) = error.read().as_ref() {
                    div { class: "alert alert-error mb-4", "{err}" }
                }

                form {
                    onsubmit: move |e| {
                        e.prevent_default();
                        login(e);
                    },

                    div { class: "mb-4",
                        label { class: "form-label", "Email" }
                        input {
                            class: "form-input",
                            r#type: "email",
                            placeholder: "you@example.com",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                        }
                    }

                    div { class: "mb-6",
                        label { class: "form-label", "Password" }
                        input {
                            class: "form-input",
                            r#type: "password",
                            placeholder: "Enter your password",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                        }
                    }

                    button {
                        class: "btn btn-primary w-full",
                        r#type: "submit",
                        disabled: *is_loading.read(),
                        if *is_loading.read() { "Logging in..." } else { "Login" }
                    }
                }
            }
        }
    }
}
