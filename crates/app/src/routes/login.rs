use crate::auth::{use_api, use_auth};
use crate::routes::{route_for_path, Route};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBriefcase, LdLock, LdUser};
use dioxus_free_icons::Icon;
use shared_types::{authorize, normalize_route, RouteDecision, Session, LOGIN_ROUTE};

/// Where to go after signing in: the remembered page if the new session may
/// open it, otherwise the dashboard. Never the sign-in page itself.
pub fn destination(session: &Session, redirect: Option<&str>) -> Route {
    match redirect {
        Some(path)
            if normalize_route(path) != LOGIN_ROUTE
                && authorize(session, path) == RouteDecision::Allow =>
        {
            route_for_path(path)
        }
        _ => Route::Dashboard {},
    }
}

/// Username/password sign-in form.
/// Accepts an optional `redirect` query param set by the access gate.
#[component]
pub fn Login(redirect: Option<String>) -> Element {
    let mut auth = use_auth();
    let api = use_api();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Store redirect in a signal so closures can read it without moving ownership
    let redirect_target = use_signal(move || redirect);

    let go_to_destination = move || {
        let target = destination(&auth.session.peek(), redirect_target.peek().as_deref());
        navigator().replace(target);
    };

    // An existing session never sees the form
    if auth.is_authenticated() {
        go_to_destination();
    }

    let handle_login = move |evt: FormEvent| {
        let api = api.clone();
        async move {
            evt.prevent_default();
            if loading() {
                return;
            }
            loading.set(true);
            error_msg.set(None);

            match client::auth::login(&api, &mut auth, &username(), &password()).await {
                Ok(_) => go_to_destination(),
                Err(e) => {
                    password.set(String::new());
                    error_msg.set(Some(e.friendly_message()));
                }
            }
            loading.set(false);
        }
    };

    let submit_disabled = loading() || username().trim().is_empty() || password().is_empty();

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                div { class: "auth-header",
                    div { class: "auth-logo",
                        Icon::<LdBriefcase> { icon: LdBriefcase, width: 32, height: 32 }
                    }
                    h1 { class: "auth-title", "WorkSphere" }
                    p { class: "auth-description", "Sign in to your account" }
                }

                if let Some(err) = error_msg() {
                    div { class: "auth-error", role: "alert", "{err}" }
                }

                form { class: "auth-form", onsubmit: handle_login,
                    div { class: "auth-field",
                        label { r#for: "username", "Username" }
                        div { class: "auth-input",
                            Icon::<LdUser> { icon: LdUser, width: 16, height: 16 }
                            input {
                                id: "username",
                                r#type: "text",
                                autocomplete: "username",
                                placeholder: "Enter your username",
                                disabled: loading(),
                                value: username(),
                                oninput: move |e: FormEvent| username.set(e.value()),
                            }
                        }
                    }
                    div { class: "auth-field",
                        label { r#for: "password", "Password" }
                        div { class: "auth-input",
                            Icon::<LdLock> { icon: LdLock, width: 16, height: 16 }
                            input {
                                id: "password",
                                r#type: "password",
                                autocomplete: "current-password",
                                placeholder: "Enter your password",
                                disabled: loading(),
                                value: password(),
                                oninput: move |e: FormEvent| password.set(e.value()),
                            }
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "auth-submit",
                        disabled: submit_disabled,
                        if loading() { "Signing in..." } else { "Sign In" }
                    }
                }
            }
        }
    }
}
