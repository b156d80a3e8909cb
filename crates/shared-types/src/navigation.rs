//! Role-based navigation tree.
//!
//! The sidebar is a fixed "Dashboard" entry followed by one section per role
//! held, in precedence order. Section contents are static; only their
//! presence depends on the role set.

use crate::role::{Role, RoleSet};
use serde::Serialize;

/// Route of the dashboard entry.
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// Icon shown next to a navigation entry. Rendering is up to the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IconRef {
    Home,
    Settings,
    Chart,
    Users,
    Briefcase,
    Calendar,
    Award,
    User,
    Document,
}

/// Where a navigation entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NavTarget {
    /// A concrete client route.
    Route(&'static str),
    /// Non-navigable entry that only groups children.
    Placeholder,
}

impl NavTarget {
    pub fn route(&self) -> Option<&'static str> {
        match self {
            NavTarget::Route(r) => Some(r),
            NavTarget::Placeholder => None,
        }
    }
}

/// One entry in the rendered menu tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationNode {
    pub label: &'static str,
    pub icon: IconRef,
    pub target: NavTarget,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavigationNode>,
}

impl NavigationNode {
    fn leaf(label: &'static str, icon: IconRef, route: &'static str) -> Self {
        Self {
            label,
            icon,
            target: NavTarget::Route(route),
            children: Vec::new(),
        }
    }

    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }
}

/// A leaf entry inside a role section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionItem {
    pub label: &'static str,
    pub icon: IconRef,
    pub route: &'static str,
}

/// Statically defined menu section owned by one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleSection {
    pub role: Role,
    pub label: &'static str,
    pub icon: IconRef,
    /// Path prefix of every route in this section, e.g. `/admin`.
    pub area: &'static str,
    pub items: &'static [SectionItem],
}

impl RoleSection {
    fn node(&self) -> NavigationNode {
        NavigationNode {
            label: self.label,
            icon: self.icon,
            target: NavTarget::Placeholder,
            children: self
                .items
                .iter()
                .map(|item| NavigationNode::leaf(item.label, item.icon, item.route))
                .collect(),
        }
    }
}

const fn item(label: &'static str, icon: IconRef, route: &'static str) -> SectionItem {
    SectionItem { label, icon, route }
}

/// Role sections in precedence order.
pub static SECTIONS: [RoleSection; 4] = [
    RoleSection {
        role: Role::Admin,
        label: "Admin",
        icon: IconRef::Settings,
        area: "/admin",
        items: &[
            item("Statistics", IconRef::Chart, "/admin/stats"),
            item("User Management", IconRef::Users, "/admin/users"),
        ],
    },
    RoleSection {
        role: Role::Hr,
        label: "HR Management",
        icon: IconRef::Users,
        area: "/hr",
        items: &[
            item("Employees", IconRef::Users, "/hr/employees"),
            item("Projects", IconRef::Briefcase, "/hr/projects"),
            item("Leave Requests", IconRef::Calendar, "/hr/leaves"),
        ],
    },
    RoleSection {
        role: Role::Manager,
        label: "Manager",
        icon: IconRef::Briefcase,
        area: "/manager",
        items: &[
            item("My Projects", IconRef::Briefcase, "/manager/projects"),
            item("Team Members", IconRef::Users, "/manager/team"),
            item("Performance", IconRef::Award, "/manager/performance"),
            item("Leave Approvals", IconRef::Calendar, "/manager/leaves"),
        ],
    },
    RoleSection {
        role: Role::Employee,
        label: "Employee",
        icon: IconRef::User,
        area: "/employee",
        items: &[
            item("My Profile", IconRef::User, "/employee/profile"),
            item("Leave Requests", IconRef::Calendar, "/employee/leaves"),
            item("Performance", IconRef::Award, "/employee/performance"),
            item("Documents", IconRef::Document, "/employee/documents"),
        ],
    },
];

/// Build the ordered menu for a role set.
pub fn build_menu(roles: RoleSet) -> Vec<NavigationNode> {
    let mut menu = vec![NavigationNode::leaf("Dashboard", IconRef::Home, DASHBOARD_ROUTE)];
    menu.extend(
        SECTIONS
            .iter()
            .filter(|section| roles.contains(section.role))
            .map(RoleSection::node),
    );
    menu
}

/// Section owned by a role.
pub fn section_for(role: Role) -> &'static RoleSection {
    match role {
        Role::Admin => &SECTIONS[0],
        Role::Hr => &SECTIONS[1],
        Role::Manager => &SECTIONS[2],
        Role::Employee => &SECTIONS[3],
    }
}

/// Section whose area prefixes `path` (`/hr` matches `/hr` and `/hr/leaves`,
/// not `/hrx`).
pub fn section_for_path(path: &str) -> Option<&'static RoleSection> {
    SECTIONS.iter().find(|section| {
        path.strip_prefix(section.area)
            .map(|rest| rest.is_empty() || rest.starts_with('/'))
            .unwrap_or(false)
    })
}

/// Leaf entry whose route is exactly `path`.
pub fn find_item(path: &str) -> Option<(&'static RoleSection, &'static SectionItem)> {
    let section = section_for_path(path)?;
    section
        .items
        .iter()
        .find(|item| item.route == path)
        .map(|item| (section, item))
}
