use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of client-side errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    /// Backend rejected the supplied credentials.
    Authentication,
    /// Backend unreachable or failing.
    Network,
    /// Token rejected on a protected call; the session is no longer valid.
    Unauthorized,
    /// Token valid but the backend refused the operation for this role.
    Forbidden,
    NotFound,
    /// Response body did not match the expected shape.
    InvalidResponse,
    Internal,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::Authentication => write!(f, "AuthenticationError"),
            AppErrorKind::Network => write!(f, "NetworkError"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::Forbidden => write!(f, "Forbidden"),
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::InvalidResponse => write!(f, "InvalidResponse"),
            AppErrorKind::Internal => write!(f, "InternalError"),
        }
    }
}

/// Structured error shared by the client library and the UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
}

/// Error body shapes the backend is known to send.
#[derive(Deserialize)]
struct BackendErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl AppError {
    fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Authentication, message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Network, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Unauthorized, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Forbidden, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::NotFound, message)
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::InvalidResponse, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Internal, message)
    }

    /// True when the error means the stored session must be dropped.
    pub fn ends_session(&self) -> bool {
        self.kind == AppErrorKind::Unauthorized
    }

    /// Pull a human-readable message out of a backend error body.
    ///
    /// Accepts `{"message": ...}`, `{"error": ..., "message": ...}` and plain
    /// text. Returns `None` for empty bodies.
    pub fn backend_message(body: &str) -> Option<String> {
        let body = body.trim();
        if body.is_empty() {
            return None;
        }
        match serde_json::from_str::<BackendErrorBody>(body) {
            Ok(parsed) => parsed
                .message
                .or(parsed.error)
                .filter(|m| !m.trim().is_empty()),
            Err(_) if body.starts_with('{') || body.starts_with('<') => None,
            Err(_) => Some(body.to_string()),
        }
    }

    /// Message suitable for direct display.
    pub fn friendly_message(&self) -> String {
        match self.kind {
            AppErrorKind::Network => {
                "Unable to reach the server. Please try again.".to_string()
            }
            AppErrorKind::Unauthorized => {
                "Your session has expired. Please sign in again.".to_string()
            }
            AppErrorKind::InvalidResponse | AppErrorKind::Internal => {
                "Something went wrong. Please try again.".to_string()
            }
            AppErrorKind::Authentication | AppErrorKind::Forbidden | AppErrorKind::NotFound => {
                self.message.clone()
            }
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}
