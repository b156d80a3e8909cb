use reqwest::StatusCode;
use shared_types::{ApiConfig, AppError, DashboardStats, LoginRequest, LoginResponse};

/// HTTP client for the WorkSphere REST backend.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self, AppError> {
        let builder = reqwest::Client::builder();

        // The browser fetch backend has no client-side timeout.
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(std::time::Duration::from_secs(config.timeout_secs));

        let http = builder
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { http, config })
    }

    /// Client configured from `config.toml` and the environment.
    pub fn from_config() -> Result<Self, AppError> {
        Self::new(crate::config::api_config().clone())
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `POST /auth/login`.
    #[tracing::instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AppError> {
        let response = self
            .http
            .post(self.config.endpoint("/auth/login"))
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(login_error(status, &body));
        }

        response
            .json::<LoginResponse>()
            .await
            .map_err(|e| AppError::invalid_response(format!("Malformed login response: {e}")))
    }

    /// `GET /admin/stats` with the session's bearer token.
    #[tracing::instrument(skip_all)]
    pub async fn admin_stats(&self, token: &str) -> Result<DashboardStats, AppError> {
        let response = self
            .http
            .get(self.config.endpoint("/admin/stats"))
            .bearer_auth(token)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(protected_error(status, &body));
        }

        response
            .json::<DashboardStats>()
            .await
            .map_err(|e| AppError::invalid_response(format!("Malformed stats response: {e}")))
    }
}

/// Clients are equal when they target the same backend.
impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

fn transport_error(e: reqwest::Error) -> AppError {
    tracing::warn!(error = %e, "Backend request failed");
    AppError::network(e.to_string())
}

/// Map a failed login response. Client errors mean rejected credentials,
/// server errors mean the backend is unavailable.
pub(crate) fn login_error(status: StatusCode, body: &str) -> AppError {
    let message = AppError::backend_message(body);
    if status.is_server_error() {
        AppError::network(message.unwrap_or_else(|| format!("Server error ({status})")))
    } else {
        AppError::authentication(
            message.unwrap_or_else(|| "Invalid username or password".to_string()),
        )
    }
}

/// Map a failed response from a token-protected endpoint.
pub(crate) fn protected_error(status: StatusCode, body: &str) -> AppError {
    let message = AppError::backend_message(body);
    match status {
        StatusCode::UNAUTHORIZED => AppError::unauthorized(
            message.unwrap_or_else(|| "Session expired".to_string()),
        ),
        StatusCode::FORBIDDEN => AppError::forbidden(
            message.unwrap_or_else(|| "You do not have access to this resource".to_string()),
        ),
        StatusCode::NOT_FOUND => {
            AppError::not_found(message.unwrap_or_else(|| "Resource not found".to_string()))
        }
        s if s.is_server_error() => {
            AppError::network(message.unwrap_or_else(|| format!("Server error ({s})")))
        }
        s => AppError::invalid_response(format!("Unexpected status {s}")),
    }
}
