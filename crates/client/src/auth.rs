use crate::api::ApiClient;
use shared_types::{AppError, LoginRequest, Session, SessionStore};

/// Verify credentials with the backend and store the resulting session.
///
/// The store is only written on success. An identity the backend accepts but
/// that carries no known role, or is disabled, is refused here so it never
/// reaches a dashboard.
#[tracing::instrument(skip(api, store, password))]
pub async fn login<S: SessionStore>(
    api: &ApiClient,
    store: &mut S,
    username: &str,
    password: &str,
) -> Result<Session, AppError> {
    let request = LoginRequest {
        username: username.trim().to_string(),
        password: password.to_string(),
    };
    let response = api.login(&request).await?;

    if !response.user.enabled {
        tracing::warn!(user_id = response.user.id, "Login refused for disabled account");
        return Err(AppError::authentication("This account is disabled"));
    }

    let session = Session::from(response);
    if !session.is_authenticated() {
        tracing::warn!("Login refused for identity without a WorkSphere role");
        return Err(AppError::authentication(
            "This account has no WorkSphere role assigned",
        ));
    }

    tracing::info!(roles = ?session.roles(), "Signed in");
    store.set(session.clone());
    Ok(session)
}

/// Drop identity and token.
pub fn logout<S: SessionStore>(store: &mut S) {
    store.clear();
    tracing::info!("Signed out");
}

pub fn current_session<S: SessionStore>(store: &S) -> Session {
    store.get()
}
