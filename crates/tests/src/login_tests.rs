use client::auth;
use pretty_assertions::assert_eq;
use shared_types::{
    build_menu, select, AppErrorKind, DashboardSelection, MemorySessionStore, NavTarget, Role,
    SessionStore, ViewId,
};

use crate::common::{self, StubBackend, PASSWORD, TOKEN};
use axum::http::StatusCode;

fn labels(menu: &[shared_types::NavigationNode]) -> Vec<&'static str> {
    menu.iter().map(|n| n.label).collect()
}

#[tokio::test]
async fn test_hr_login_lands_on_hr_dashboard() {
    let api = common::default_backend().await;
    let mut store = MemorySessionStore::new();

    let session = auth::login(&api, &mut store, "hr", PASSWORD).await.unwrap();

    assert!(session.is_authenticated());
    assert_eq!(session.token(), Some(TOKEN));
    assert_eq!(store.get(), session);
    assert_eq!(select(session.roles()), DashboardSelection::View(ViewId::Hr));

    let menu = build_menu(session.roles());
    assert_eq!(labels(&menu), vec!["Dashboard", "HR Management"]);
    assert_eq!(menu[1].target, NavTarget::Placeholder);
    assert_eq!(
        labels(&menu[1].children),
        vec!["Employees", "Projects", "Leave Requests"]
    );
}

#[tokio::test]
async fn test_admin_manager_login_sees_both_sections() {
    let api = common::default_backend().await;
    let mut store = MemorySessionStore::new();

    let session = auth::login(&api, &mut store, "admin", PASSWORD).await.unwrap();

    assert!(session.roles().contains(Role::Admin));
    assert!(session.roles().contains(Role::Manager));
    assert_eq!(select(session.roles()), DashboardSelection::View(ViewId::Admin));
    assert_eq!(
        labels(&build_menu(session.roles())),
        vec!["Dashboard", "Admin", "Manager"]
    );
}

#[tokio::test]
async fn test_bare_string_roles_are_accepted() {
    let api = common::default_backend().await;
    let mut store = MemorySessionStore::new();

    let session = auth::login(&api, &mut store, "employee", PASSWORD).await.unwrap();

    assert_eq!(select(session.roles()), DashboardSelection::View(ViewId::Employee));
    let identity = session.identity().unwrap();
    assert_eq!(identity.display_name(), "employee");
    assert_eq!(identity.role_label(), "Employee");
}

#[tokio::test]
async fn test_username_is_trimmed() {
    let api = common::default_backend().await;
    let mut store = MemorySessionStore::new();

    let session = auth::login(&api, &mut store, "  manager ", PASSWORD).await.unwrap();
    assert_eq!(session.identity().unwrap().username, "manager");
}

#[tokio::test]
async fn test_bad_password_is_authentication_error() {
    let api = common::default_backend().await;
    let mut store = MemorySessionStore::new();

    let err = auth::login(&api, &mut store, "hr", "wrong").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Authentication);
    assert_eq!(err.friendly_message(), "Invalid username or password");
    assert!(!store.get().is_authenticated());
}

#[tokio::test]
async fn test_unknown_user_is_authentication_error() {
    let api = common::default_backend().await;
    let mut store = MemorySessionStore::new();

    let err = auth::login(&api, &mut store, "nobody", PASSWORD).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Authentication);
}

#[tokio::test]
async fn test_backend_failure_is_network_error() {
    let api = common::spawn_backend(StubBackend {
        login_status: StatusCode::SERVICE_UNAVAILABLE,
        ..StubBackend::default()
    })
    .await;
    let mut store = MemorySessionStore::new();

    let err = auth::login(&api, &mut store, "hr", PASSWORD).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Network);
    assert_eq!(err.message, "Database unavailable");
    assert!(store.get().identity().is_none());
}

#[tokio::test]
async fn test_identity_without_known_role_is_refused() {
    let api = common::default_backend().await;
    let mut store = MemorySessionStore::new();

    let err = auth::login(&api, &mut store, "contractor", PASSWORD)
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Authentication);
    assert!(store.get().identity().is_none());
}

#[tokio::test]
async fn test_disabled_account_is_refused() {
    let api = common::default_backend().await;
    let mut store = MemorySessionStore::new();

    let err = auth::login(&api, &mut store, "former", PASSWORD).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Authentication);
    assert_eq!(err.message, "This account is disabled");
    assert!(!store.get().is_authenticated());
}

#[tokio::test]
async fn test_failed_login_keeps_previous_session() {
    let api = common::default_backend().await;
    let mut store = MemorySessionStore::new();
    let first = auth::login(&api, &mut store, "hr", PASSWORD).await.unwrap();

    let _ = auth::login(&api, &mut store, "admin", "wrong").await.unwrap_err();

    assert_eq!(store.get(), first);
}
