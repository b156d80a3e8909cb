use axum::http::StatusCode;
use client::{auth, stats};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{DashboardStats, MemorySessionStore, Session, SessionStore};
use std::cell::Cell;

use crate::common::{self, StubBackend, PASSWORD, TOKEN};

#[tokio::test]
async fn test_admin_stats_are_loaded_with_bearer_token() {
    let stub = StubBackend::default();
    let seen = stub.seen_auth.clone();
    let api = common::spawn_backend(stub).await;
    let mut store = MemorySessionStore::new();
    auth::login(&api, &mut store, "admin", PASSWORD).await.unwrap();

    let load = stats::load_admin_stats(&api, &mut store).await;

    assert_eq!(
        load.stats,
        DashboardStats {
            total_employees: 156,
            total_projects: 30,
            total_hrs: 4,
            total_managers: 12,
            active_projects: 24,
            pending_leaves: 8,
        }
    );
    assert_eq!(load.stats.completed_projects(), 6);
    assert_eq!(load.notice, None);
    assert!(!load.session_expired);
    assert_eq!(*seen.lock().unwrap(), vec![format!("Bearer {TOKEN}")]);
}

#[tokio::test]
async fn test_partial_stats_payload_defaults_to_zero() {
    let api = common::spawn_backend(StubBackend {
        stats_body: json!({"totalEmployees": 3}),
        ..StubBackend::default()
    })
    .await;
    let mut store = MemorySessionStore::new();
    auth::login(&api, &mut store, "admin", PASSWORD).await.unwrap();

    let load = stats::load_admin_stats(&api, &mut store).await;

    assert_eq!(load.stats.total_employees, 3);
    assert_eq!(load.stats.active_projects, 0);
    assert_eq!(load.notice, None);
}

#[tokio::test]
async fn test_server_error_degrades_to_zero_stats_with_notice() {
    let api = common::spawn_backend(StubBackend {
        stats_status: StatusCode::INTERNAL_SERVER_ERROR,
        ..StubBackend::default()
    })
    .await;
    let mut store = MemorySessionStore::new();
    auth::login(&api, &mut store, "admin", PASSWORD).await.unwrap();

    let load = stats::load_admin_stats(&api, &mut store).await;

    assert_eq!(load.stats, DashboardStats::default());
    assert_eq!(load.notice.as_deref(), Some(stats::STATS_FAILED_NOTICE));
    assert!(!load.session_expired);
    assert!(store.get().is_authenticated());
}

#[tokio::test]
async fn test_rejected_token_clears_session() {
    let api = common::default_backend().await;
    let mut store = MemorySessionStore::new();
    let session = auth::login(&api, &mut store, "admin", PASSWORD).await.unwrap();
    // Same identity, token the backend no longer honours.
    store.set(Session::authenticated(
        session.identity().unwrap().clone(),
        "expired-token",
    ));

    let load = stats::load_admin_stats(&api, &mut store).await;

    assert!(load.session_expired);
    assert_eq!(load.stats, DashboardStats::default());
    assert_eq!(
        load.notice.as_deref(),
        Some("Your session has expired. Please sign in again.")
    );
    assert!(store.get().identity().is_none());
}

#[tokio::test]
async fn test_signed_out_store_skips_request() {
    let stub = StubBackend::default();
    let seen = stub.seen_auth.clone();
    let api = common::spawn_backend(stub).await;
    let mut store = MemorySessionStore::new();

    let load = stats::load_admin_stats(&api, &mut store).await;

    assert!(load.session_expired);
    assert!(seen.lock().unwrap().is_empty());
}

/// Store whose session changes after the first read, as when a logout or a
/// new sign-in lands while the stats request is in flight.
struct ChangingStore {
    first: Session,
    current: Session,
    reads: Cell<usize>,
}

impl ChangingStore {
    fn new(first: Session, current: Session) -> Self {
        Self {
            first,
            current,
            reads: Cell::new(0),
        }
    }
}

impl SessionStore for ChangingStore {
    fn get(&self) -> Session {
        let reads = self.reads.get();
        self.reads.set(reads + 1);
        if reads == 0 {
            self.first.clone()
        } else {
            self.current.clone()
        }
    }

    fn set(&mut self, session: Session) {
        self.current = session;
    }

    fn clear(&mut self) {
        self.current = Session::anonymous();
    }
}

#[tokio::test]
async fn test_rejection_for_replaced_session_keeps_new_session() {
    let api = common::default_backend().await;
    let mut signed_in = MemorySessionStore::new();
    let fresh = auth::login(&api, &mut signed_in, "admin", PASSWORD).await.unwrap();
    let stale = Session::authenticated(fresh.identity().unwrap().clone(), "expired-token");
    let mut store = ChangingStore::new(stale, fresh.clone());

    let load = stats::load_admin_stats(&api, &mut store).await;

    assert!(!load.session_expired);
    assert_eq!(load.stats, DashboardStats::default());
    assert_eq!(load.notice.as_deref(), Some(stats::STATS_FAILED_NOTICE));
    assert_eq!(store.get(), fresh);
    assert_eq!(store.get().token(), Some(TOKEN));
}

#[tokio::test]
async fn test_rejection_after_logout_stays_signed_out() {
    let api = common::default_backend().await;
    let mut signed_in = MemorySessionStore::new();
    let fresh = auth::login(&api, &mut signed_in, "admin", PASSWORD).await.unwrap();
    let stale = Session::authenticated(fresh.identity().unwrap().clone(), "expired-token");
    let mut store = ChangingStore::new(stale, Session::anonymous());

    let load = stats::load_admin_stats(&api, &mut store).await;

    assert!(load.session_expired);
    assert_eq!(
        load.notice.as_deref(),
        Some("Your session has expired. Please sign in again.")
    );
    assert_eq!(store.get(), Session::anonymous());
}
