use crate::role::{Role, RoleSet};
use serde::{Deserialize, Serialize};

/// Top-level dashboard rendered for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewId {
    Admin,
    Hr,
    Manager,
    Employee,
}

impl ViewId {
    pub fn title(&self) -> &'static str {
        match self {
            ViewId::Admin => "Admin Dashboard",
            ViewId::Hr => "HR Dashboard",
            ViewId::Manager => "Manager Dashboard",
            ViewId::Employee => "Employee Dashboard",
        }
    }

    /// Role whose dashboard this is.
    pub fn role(&self) -> Role {
        match self {
            ViewId::Admin => Role::Admin,
            ViewId::Hr => Role::Hr,
            ViewId::Manager => Role::Manager,
            ViewId::Employee => Role::Employee,
        }
    }
}

/// Outcome of dashboard selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardSelection {
    View(ViewId),
    Unauthenticated,
}

/// First matching entry wins.
const PRECEDENCE: [(Role, ViewId); 4] = [
    (Role::Admin, ViewId::Admin),
    (Role::Hr, ViewId::Hr),
    (Role::Manager, ViewId::Manager),
    (Role::Employee, ViewId::Employee),
];

/// Pick exactly one dashboard for a role set.
pub fn select(roles: RoleSet) -> DashboardSelection {
    PRECEDENCE
        .iter()
        .find(|(role, _)| roles.contains(*role))
        .map(|(_, view)| DashboardSelection::View(*view))
        .unwrap_or(DashboardSelection::Unauthenticated)
}
