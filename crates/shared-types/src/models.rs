use crate::role::{Role, RoleSet};
use serde::{Deserialize, Serialize};

/// Authenticated user profile as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub roles: RoleSet,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

impl Identity {
    /// "First Last", falling back to the username when both names are blank.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }

    /// Label of the highest-precedence role, or "User" for none.
    pub fn role_label(&self) -> &'static str {
        self.roles.primary().map(|r| r.label()).unwrap_or("User")
    }
}

/// Login request body for `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response.
///
/// Accepts both the nested `{token, user}` shape and the flat shape where the
/// profile fields sit next to the token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(from = "LoginResponseWire")]
pub struct LoginResponse {
    pub token: String,
    pub user: Identity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LoginResponseWire {
    Nested {
        token: String,
        user: Identity,
        #[serde(default)]
        message: Option<String>,
    },
    Flat(FlatLoginResponse),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FlatLoginResponse {
    token: String,
    username: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    full_name: String,
    #[serde(default)]
    roles: RoleSet,
    #[serde(default)]
    user_type: Option<String>,
    #[serde(default)]
    user_id: Option<i64>,
    #[serde(default)]
    message: Option<String>,
}

impl From<LoginResponseWire> for LoginResponse {
    fn from(wire: LoginResponseWire) -> Self {
        match wire {
            LoginResponseWire::Nested {
                token,
                user,
                message,
            } => Self {
                token,
                user,
                message,
            },
            LoginResponseWire::Flat(flat) => {
                let mut roles = flat.roles;
                if roles.is_empty() {
                    roles.extend(flat.user_type.as_deref().and_then(Role::parse));
                }
                let full_name = flat.full_name.trim();
                let (first_name, last_name) = match full_name.split_once(char::is_whitespace) {
                    Some((first, last)) => (first.to_string(), last.trim().to_string()),
                    None => (full_name.to_string(), String::new()),
                };
                Self {
                    token: flat.token,
                    user: Identity {
                        id: flat.user_id.unwrap_or_default(),
                        username: flat.username,
                        email: flat.email,
                        first_name,
                        last_name,
                        roles,
                        enabled: true,
                    },
                    message: flat.message,
                }
            }
        }
    }
}

/// Organisation-wide counters shown on the admin dashboard.
///
/// Every field defaults to zero so a partial payload (or a failed fetch)
/// still renders.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub total_employees: i64,
    #[serde(default)]
    pub total_projects: i64,
    #[serde(default, rename = "totalHRs")]
    pub total_hrs: i64,
    #[serde(default)]
    pub total_managers: i64,
    #[serde(default)]
    pub active_projects: i64,
    #[serde(default)]
    pub pending_leaves: i64,
}

impl DashboardStats {
    /// Projects that are not active. Never negative even if the backend
    /// reports more active than total projects.
    pub fn completed_projects(&self) -> i64 {
        (self.total_projects - self.active_projects).max(0)
    }
}

/// Live authentication context of the running client.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    identity: Option<Identity>,
    token: Option<String>,
}

impl Session {
    /// A session with no identity.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(identity: Identity, token: impl Into<String>) -> Self {
        Self {
            identity: Some(identity),
            token: Some(token.into()),
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Roles of the current identity; empty when there is none.
    pub fn roles(&self) -> RoleSet {
        self.identity
            .as_ref()
            .map(|i| i.roles)
            .unwrap_or_default()
    }

    /// True when an enabled identity with at least one known role is present.
    pub fn is_authenticated(&self) -> bool {
        self.identity
            .as_ref()
            .map(|i| i.enabled && !i.roles.is_empty())
            .unwrap_or(false)
    }
}

impl From<LoginResponse> for Session {
    fn from(resp: LoginResponse) -> Self {
        Session::authenticated(resp.user, resp.token)
    }
}
