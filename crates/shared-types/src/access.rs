//! Route access gate.
//!
//! Every protected route is checked against the session before it renders.
//! Role areas (`/admin`, `/hr`, `/manager`, `/employee`) additionally require
//! the role that owns the area.

use crate::models::Session;
use crate::navigation::{section_for_path, DASHBOARD_ROUTE};

pub const LOGIN_ROUTE: &str = "/login";
pub const ROOT_ROUTE: &str = "/";

/// Decision returned by [`authorize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    RedirectTo(&'static str),
}

/// Strip query, fragment and trailing slashes. The root stays `/`.
pub fn normalize_route(route: &str) -> &str {
    let end = route.find(['?', '#']).unwrap_or(route.len());
    let path = route[..end].trim_end_matches('/');
    if path.is_empty() {
        ROOT_ROUTE
    } else {
        path
    }
}

/// Decide whether `session` may reach `route`.
pub fn authorize(session: &Session, route: &str) -> RouteDecision {
    if !session.is_authenticated() {
        return RouteDecision::RedirectTo(LOGIN_ROUTE);
    }

    let path = normalize_route(route);
    if path == ROOT_ROUTE || path == DASHBOARD_ROUTE {
        return RouteDecision::Allow;
    }

    match section_for_path(path) {
        Some(section) if !session.roles().contains(section.role) => {
            RouteDecision::RedirectTo(DASHBOARD_ROUTE)
        }
        _ => RouteDecision::Allow,
    }
}
