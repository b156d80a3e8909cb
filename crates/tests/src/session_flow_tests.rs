use client::auth;
use pretty_assertions::assert_eq;
use shared_types::{
    authorize, MemorySessionStore, RouteDecision, SessionStore, DASHBOARD_ROUTE, LOGIN_ROUTE,
};

use crate::common::{self, PASSWORD};

#[test]
fn test_signed_out_user_is_sent_to_login() {
    let store = MemorySessionStore::new();
    let session = auth::current_session(&store);

    for route in ["/", DASHBOARD_ROUTE, "/hr/employees", "/employee/profile"] {
        assert_eq!(
            authorize(&session, route),
            RouteDecision::RedirectTo(LOGIN_ROUTE),
            "{route}"
        );
    }
}

#[tokio::test]
async fn test_hr_user_cannot_open_admin_area() {
    let api = common::default_backend().await;
    let mut store = MemorySessionStore::new();
    auth::login(&api, &mut store, "hr", PASSWORD).await.unwrap();
    let session = store.get();

    assert_eq!(authorize(&session, "/"), RouteDecision::Allow);
    assert_eq!(authorize(&session, DASHBOARD_ROUTE), RouteDecision::Allow);
    assert_eq!(authorize(&session, "/hr/leaves"), RouteDecision::Allow);
    assert_eq!(
        authorize(&session, "/admin/stats"),
        RouteDecision::RedirectTo(DASHBOARD_ROUTE)
    );
}

#[tokio::test]
async fn test_logout_closes_every_route() {
    let api = common::default_backend().await;
    let mut store = MemorySessionStore::new();
    auth::login(&api, &mut store, "manager", PASSWORD).await.unwrap();
    assert_eq!(
        authorize(&store.get(), "/manager/team"),
        RouteDecision::Allow
    );

    auth::logout(&mut store);

    let session = auth::current_session(&store);
    assert!(session.identity().is_none());
    assert_eq!(session.token(), None);
    assert_eq!(
        authorize(&session, DASHBOARD_ROUTE),
        RouteDecision::RedirectTo(LOGIN_ROUTE)
    );
    assert_eq!(
        authorize(&session, "/manager/team"),
        RouteDecision::RedirectTo(LOGIN_ROUTE)
    );
}

#[tokio::test]
async fn test_second_login_replaces_session() {
    let api = common::default_backend().await;
    let mut store = MemorySessionStore::new();
    auth::login(&api, &mut store, "employee", PASSWORD).await.unwrap();
    auth::login(&api, &mut store, "admin", PASSWORD).await.unwrap();

    let session = store.get();
    assert_eq!(session.identity().unwrap().username, "admin");
    assert_eq!(authorize(&session, "/admin/users"), RouteDecision::Allow);
}
