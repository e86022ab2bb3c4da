use dioxus::prelude::*;

use crate::api;
use crate::invite::{run_submit, ApiAuthority, Authority, RedemptionFlow, RedemptionState, SubmitOutcome};
use crate::routes::Route;
use crate::state;

/// Entry point for `/invite/:token`. The page is a thin view over
/// [`RedemptionFlow`]; every mutation goes through the flow's methods,
/// and in-flight calls die with the page because `spawn` ties tasks to
/// the component scope.
#[component]
pub fn AcceptInvitePage(token: String) -> Element {
    let mut flow = use_signal(|| RedemptionFlow::new(token));

    // Exactly one resolve per flow instance, issued on entry.
    use_effect(move || {
        spawn(async move {
            let token = flow.peek().token().to_string();
            let result = ApiAuthority.invite_info(&token).await;
            flow.write().resolve_settled(result);
        });
    });

    let mut submit = move |_| {
        // The gate transitions to Submitting; a second click finds it
        // closed and issues nothing.
        let (ok, token, password) = {
            let mut f = flow.write();
            let ok = f.begin_submit();
            (ok, f.token().to_string(), f.input().password.clone())
        };
        if !ok {
            return;
        }

        spawn(async move {
            match run_submit(&token, &password, &ApiAuthority).await {
                SubmitOutcome::Accepted { identity } => {
                    if let Some(user) = identity {
                        match api::api_client().get_token() {
                            Some(session) => state::set_auth(user, session),
                            None => state::set_user(user),
                        }
                    }
                    let route = {
                        let mut f = flow.write();
                        f.submit_settled(Ok(()));
                        f.dashboard_route()
                    };
                    navigator().push(route);
                }
                SubmitOutcome::Rejected(err) => {
                    flow.write().submit_settled(Err(err));
                }
            }
        });
    };

    let state = flow.read().state().clone();

    match state {
        RedemptionState::Loading => rsx! {
            div { class: "min-h-screen flex items-center justify-center bg-gray-50",
                div { class: "text-center",
                    div { class: "spinner" }
                    p { class: "mt-4 text-gray-500", "Loading invite..." }
                }
            }
        },
        RedemptionState::InvalidInvite { message } => rsx! {
            div { class: "min-h-screen flex items-center justify-center bg-gray-50",
                div { class: "card w-full max-w-md p-8 text-center",
                    div { class: "icon-circle icon-circle-red", "\u{2715}" }
                    h1 { class: "text-xl font-bold mb-2", "Invalid Invite" }
                    p { class: "text-gray-500 mb-6", "{message}" }
                    Link { class: "btn btn-primary", to: Route::Login {}, "Go to Login" }
                }
            }
        },
        RedemptionState::ReadyToJoin { .. } | RedemptionState::Submitting | RedemptionState::Joined => {
            rsx! { JoinForm { flow, onsubmit: move |e| submit(e) } }
        }
    }
}

#[component]
fn JoinForm(flow: Signal<RedemptionFlow>, onsubmit: EventHandler<FormEvent>) -> Element {
    let mut flow = flow;
    let f = flow.read();

    let Some(info) = f.info().cloned() else {
        // Interactive states always carry a snapshot
        return rsx! {
            div { class: "min-h-screen flex items-center justify-center bg-gray-50",
                div { class: "spinner" }
            }
        };
    };

    let error = match f.state() {
        RedemptionState::ReadyToJoin { error } => error.clone(),
        _ => None,
    };
    let is_submitting = f.is_submitting();
    let submittable = f.submittable();
    let show_mismatch = f.input().show_mismatch();
    let password = f.input().password.clone();
    let confirm = f.input().confirm.clone();
    let role_name = info.role.display_name().to_string();
    let expires = info.expires_at.format("%B %e, %Y").to_string();
    drop(f);

    rsx! {
        div { class: "min-h-screen flex items-center justify-center bg-gray-50 py-12",
            div { class: "w-full max-w-md",
                div { class: "text-center mb-8",
                    h1 { class: "text-2xl font-bold", "Join {info.org_name}" }
                    p { class: "mt-2 text-gray-500",
                        "You've been invited to join as a "
                        span { class: "font-medium", "{role_name}" }
                    }
                }

                div { class: "card p-6",
                    if let Some(err) = error {
                        div { class: "alert alert-error mb-4", "{err}" }
                    }

                    form {
                        onsubmit: move |e| {
                            e.prevent_default();
                            onsubmit.call(e);
                        },

                        div { class: "mb-4",
                            label { class: "form-label", "Email" }
                            input {
                                class: "form-input form-input-disabled",
                                r#type: "email",
                                value: "{info.email}",
                                disabled: true,
                            }
                        }

                        div { class: "mb-4",
                            label { class: "form-label", "Create Password" }
                            input {
                                class: "form-input",
                                r#type: "password",
                                placeholder: "At least 8 characters",
                                value: "{password}",
                                disabled: is_submitting,
                                oninput: move |e| flow.write().set_password(e.value()),
                            }
                        }

                        div { class: "mb-4",
                            label { class: "form-label", "Confirm Password" }
                            input {
                                class: if show_mismatch { "form-input form-input-invalid" } else { "form-input" },
                                r#type: "password",
                                placeholder: "Repeat your password",
                                value: "{confirm}",
                                disabled: is_submitting,
                                oninput: move |e| flow.write().set_confirm(e.value()),
                            }
                            if show_mismatch {
                                p { class: "form-hint form-hint-error", "Passwords do not match" }
                            }
                        }

                        button {
                            class: "btn btn-primary w-full",
                            r#type: "submit",
                            disabled: !submittable,
                            if is_submitting { "Creating Account..." } else { "Accept Invite & Join" }
                        }
                    }

                    p { class: "mt-4 text-center text-sm text-gray-500",
                        "Already have an account? "
                        Link { class: "link", to: Route::Login {}, "Log in" }
                    }
                }

                p { class: "mt-4 text-center text-xs text-gray-400",
                    "This invite expires on {expires}"
                }
            }
        }
    }
}
