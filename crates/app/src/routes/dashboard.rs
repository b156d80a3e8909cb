use crate::auth::{use_api, use_auth, use_dashboard_selection};
use crate::routes::sidebar::NavIcon;
use crate::routes::{route_for_path, Route};
use client::stats::load_admin_stats;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdX;
use dioxus_free_icons::Icon;
use shared_types::{section_for, DashboardSelection, IconRef, Role, ViewId};

/// Number of stat cards on the admin dashboard.
const STAT_CARD_COUNT: usize = 4;

/// Landing page: exactly one dashboard view for the current roles.
#[component]
pub fn Dashboard() -> Element {
    match use_dashboard_selection() {
        DashboardSelection::View(ViewId::Admin) => rsx! { AdminDashboard {} },
        DashboardSelection::View(view) => rsx! { RoleDashboard { view } },
        DashboardSelection::Unauthenticated => {
            navigator().replace(Route::Login { redirect: None });
            rsx! {}
        }
    }
}

/// Organisation statistics. Loading shows placeholders, failures show zeros
/// and a dismissible notice.
#[component]
fn AdminDashboard() -> Element {
    let api = use_api();
    let auth = use_auth();
    let mut dismissed = use_signal(|| false);

    let stats_load = use_resource(move || {
        let api = api.clone();
        let mut store = auth;
        async move { load_admin_stats(&api, &mut store).await }
    });

    // Clone the result out of the resource guard to avoid lifetime issues.
    let result = stats_load.read().as_ref().cloned();

    if result.as_ref().is_some_and(|load| load.session_expired) {
        navigator().replace(Route::Login { redirect: None });
    }

    let stats = result.as_ref().map(|load| load.stats);
    let notice = result
        .as_ref()
        .and_then(|load| load.notice.clone())
        .filter(|_| !dismissed());

    rsx! {
        div { class: "dashboard",
            DashboardHeader {
                title: ViewId::Admin.title(),
                subtitle: "Overview of your organization",
            }

            if let Some(message) = notice {
                StatsNotice { message, on_dismiss: move |_| dismissed.set(true) }
            }

            match stats {
                Some(stats) => rsx! {
                    div { class: "stat-grid",
                        StatCard { title: "Total Employees", icon: IconRef::Users, value: stats.total_employees }
                        StatCard { title: "Total Projects", icon: IconRef::Briefcase, value: stats.total_projects }
                        StatCard { title: "HR Managers", icon: IconRef::User, value: stats.total_hrs }
                        StatCard { title: "Active Projects", icon: IconRef::Chart, value: stats.active_projects }
                    }
                    div { class: "dashboard-panels",
                        ProjectStatus {
                            active: stats.active_projects,
                            completed: stats.completed_projects(),
                        }
                        div { class: "panel",
                            h3 { class: "panel-title", "Pending Leaves" }
                            span { class: "stat-number", "{stats.pending_leaves}" }
                        }
                    }
                },
                None => rsx! { LoadingSkeletons {} },
            }

            QuickLinks { role: Role::Admin }
        }
    }
}

/// HR, Manager and Employee landing pages.
#[component]
fn RoleDashboard(view: ViewId) -> Element {
    let auth = use_auth();
    let name = auth
        .session
        .read()
        .identity()
        .map(|user| user.display_name())
        .unwrap_or_default();
    let subtitle = format!("Welcome back, {name}");

    rsx! {
        div { class: "dashboard",
            DashboardHeader { title: view.title(), subtitle }
            QuickLinks { role: view.role() }
        }
    }
}

#[component]
fn DashboardHeader(title: &'static str, subtitle: String) -> Element {
    rsx! {
        div { class: "dashboard-header",
            h2 { class: "dashboard-title", "{title}" }
            p { class: "dashboard-subtitle", "{subtitle}" }
        }
    }
}

/// A single headline number.
#[component]
pub fn StatCard(title: &'static str, icon: IconRef, value: i64) -> Element {
    rsx! {
        div { class: "stat-card",
            div { class: "stat-icon", NavIcon { icon, size: 24 } }
            div { class: "stat-body",
                span { class: "stat-label", "{title}" }
                span { class: "stat-number", "{value}" }
            }
        }
    }
}

/// Active vs completed projects.
#[component]
pub fn ProjectStatus(active: i64, completed: i64) -> Element {
    rsx! {
        div { class: "panel",
            h3 { class: "panel-title", "Project Status" }
            div { class: "status-row",
                span { class: "status-label", "Active" }
                span { class: "status-value status-active", "{active}" }
            }
            div { class: "status-row",
                span { class: "status-label", "Completed" }
                span { class: "status-value status-completed", "{completed}" }
            }
        }
    }
}

/// Dismissible warning above the stats.
#[component]
pub fn StatsNotice(message: String, on_dismiss: EventHandler<MouseEvent>) -> Element {
    rsx! {
        div { class: "notice notice-error", role: "alert",
            span { class: "notice-message", "{message}" }
            button {
                r#type: "button",
                class: "notice-dismiss",
                aria_label: "Dismiss",
                onclick: move |evt| on_dismiss.call(evt),
                Icon::<LdX> { icon: LdX, width: 14, height: 14 }
            }
        }
    }
}

/// Grid of placeholders shown during the initial stats load.
#[component]
fn LoadingSkeletons() -> Element {
    rsx! {
        div { class: "stat-grid",
            for i in 0..STAT_CARD_COUNT {
                div { key: "{i}", class: "stat-card skeleton",
                    div { class: "skeleton-line skeleton-short" }
                    div { class: "skeleton-line skeleton-tall" }
                }
            }
        }
    }
}

/// Shortcuts into the role's own section of the menu.
#[component]
fn QuickLinks(role: Role) -> Element {
    let section = section_for(role);

    rsx! {
        div { class: "panel quick-links",
            h3 { class: "panel-title", "Quick Actions" }
            div { class: "quick-link-grid",
                for item in section.items.iter() {
                    Link { key: "{item.route}", to: route_for_path(item.route), class: "quick-link",
                        NavIcon { icon: item.icon, size: 20 }
                        span { "{item.label}" }
                    }
                }
            }
        }
    }
}
