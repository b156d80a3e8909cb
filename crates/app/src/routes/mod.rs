pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod section;
pub mod sidebar;

use crate::auth::{use_auth, use_menu};
use crate::ProfileState;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBriefcase, LdLogOut};
use dioxus_free_icons::Icon;
use shared_types::{
    authorize, dashboard::select, find_item, DashboardSelection, RoleSet, RouteDecision, Session,
    DASHBOARD_ROUTE, LOGIN_ROUTE, ROOT_ROUTE,
};

use dashboard::Dashboard;
use login::Login;
use not_found::NotFound;
use section::Section;
use sidebar::SidebarMenu;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login?:redirect")]
    Login { redirect: Option<String> },
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/:area/:page")]
    Section { area: String, page: String },
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Client route for a path; unknown paths land on the not-found page.
pub fn route_for_path(path: &str) -> Route {
    path.parse().unwrap_or_else(|_| Route::NotFound {
        route: path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
    })
}

/// Where to send a user the access gate turned away from `from`.
/// Login remembers the requested page unless it was a dashboard entry point.
pub fn redirect_route(target: &str, from: &str) -> Route {
    if target == LOGIN_ROUTE {
        let redirect = (from != ROOT_ROUTE && from != DASHBOARD_ROUTE && from != LOGIN_ROUTE)
            .then(|| from.to_string());
        Route::Login { redirect }
    } else {
        route_for_path(target)
    }
}

/// Redirect the access gate issues for `route`, or `None` when it may render.
pub fn guard_redirect(session: &Session, route: &Route) -> Option<Route> {
    let path = route.to_string();
    match authorize(session, &path) {
        RouteDecision::Allow => None,
        RouteDecision::RedirectTo(target) => {
            tracing::info!(from = %path, to = target, "Route access redirected");
            Some(redirect_route(target, &path))
        }
    }
}

/// Navbar heading for a route.
pub fn page_title(route: &Route, roles: RoleSet) -> String {
    match route {
        Route::Login { .. } => "Sign In".to_string(),
        Route::Home {} | Route::Dashboard {} => match select(roles) {
            DashboardSelection::View(view) => view.title().to_string(),
            DashboardSelection::Unauthenticated => "Dashboard".to_string(),
        },
        Route::Section { .. } => find_item(&route.to_string())
            .map(|(_, item)| item.label.to_string())
            .unwrap_or_else(|| "Not Found".to_string()),
        Route::NotFound { .. } => "Not Found".to_string(),
    }
}

/// Applies the route access rules to every route except sign-in.
#[component]
fn AuthGuard() -> Element {
    let auth = use_auth();
    let route: Route = use_route();
    let redirect = guard_redirect(&auth.session.read(), &route);

    match redirect {
        None => rsx! { Outlet::<Route> {} },
        Some(target) => {
            navigator().replace(target);
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting..." }
                }
            }
        }
    }
}

/// `/` always lands on the dashboard.
#[component]
fn Home() -> Element {
    navigator().replace(Route::Dashboard {});
    rsx! {}
}

/// Main app layout with sidebar and top navbar.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let profile: ProfileState = use_context();
    let mut auth = use_auth();
    let menu = use_menu();
    let roles = auth.session.read().roles();

    let title = page_title(&route, roles);
    let active = route.to_string();
    let display_name = profile.display_name.read().clone();
    let role_label = *profile.role_label.read();
    let email = profile.email.read().clone();

    rsx! {
        div { class: "app-shell",
            aside { class: "sidebar",
                div { class: "sidebar-brand",
                    Icon::<LdBriefcase> { icon: LdBriefcase, width: 22, height: 22 }
                    span { class: "sidebar-brand-name", "WorkSphere" }
                }
                SidebarMenu { nodes: menu(), active }
            }

            div { class: "app-main",
                header { class: "navbar",
                    h1 { class: "navbar-title", "{title}" }
                    div { class: "navbar-user",
                        div { class: "navbar-user-info",
                            span { class: "navbar-user-name", "{display_name}" }
                            span { class: "navbar-user-role", "{role_label}" }
                        }
                        button {
                            r#type: "button",
                            class: "navbar-logout",
                            title: "{email}",
                            onclick: move |_| {
                                client::auth::logout(&mut auth);
                                navigator().push(Route::Login { redirect: None });
                            },
                            Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                            "Sign Out"
                        }
                    }
                }

                main { class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
