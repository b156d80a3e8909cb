use client::ApiClient;
use dioxus::prelude::*;

mod auth;
mod routes;
use auth::{use_auth, AuthState};
use routes::Route;

/// Signed-in user details shown in the navbar.
/// Backed by `Memo`s that read directly from `AuthState`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProfileState {
    pub display_name: Memo<String>,
    pub email: Memo<String>,
    pub role_label: Memo<&'static str>,
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    let api = use_hook(ApiClient::from_config);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        match api {
            Ok(api) => rsx! { Shell { api } },
            Err(err) => {
                tracing::error!(error = %err, "Backend client unavailable");
                rsx! {
                    div { class: "auth-guard-loading",
                        p { "{err.friendly_message()}" }
                    }
                }
            }
        }
    }
}

/// Provides auth, profile and backend context to every route.
#[component]
fn Shell(api: ApiClient) -> Element {
    use_hook(|| {
        tracing::info!(platform = client_platform(), base_url = %api.base_url(), "WorkSphere starting");
    });
    use_context_provider(|| api);
    use_context_provider(AuthState::new);

    let auth = use_auth();
    let display_name = use_memo(move || {
        auth.session
            .read()
            .identity()
            .map(|u| u.display_name())
            .unwrap_or_else(|| "Guest".to_string())
    });
    let email = use_memo(move || {
        auth.session
            .read()
            .identity()
            .map(|u| u.email.clone())
            .unwrap_or_default()
    });
    let role_label = use_memo(move || {
        auth.session
            .read()
            .identity()
            .map(|u| u.role_label())
            .unwrap_or("User")
    });

    use_context_provider(|| ProfileState {
        display_name,
        email,
        role_label,
    });

    rsx! {
        Router::<Route> {}
    }
}
