use client::ApiClient;
use dioxus::prelude::*;
use shared_types::{build_menu, dashboard, DashboardSelection, NavigationNode, RoleSet, Session, SessionStore};

/// Global authentication state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub session: Signal<Session>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            session: Signal::new(Session::anonymous()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }
}

/// `get` peeks so async loaders do not subscribe to the session.
/// Components that must re-render on login/logout read `session` directly.
impl SessionStore for AuthState {
    fn get(&self) -> Session {
        self.session.peek().clone()
    }

    fn set(&mut self, session: Session) {
        self.session.set(session);
    }

    fn clear(&mut self) {
        self.session.set(Session::anonymous());
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Hook to access the backend client.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Roles of the signed-in user; empty when signed out.
pub fn use_roles() -> RoleSet {
    use_auth().session.read().roles()
}

/// Sidebar entries for the current roles, rebuilt when the session changes.
pub fn use_menu() -> Memo<Vec<NavigationNode>> {
    let auth = use_auth();
    use_memo(move || build_menu(auth.session.read().roles()))
}

/// Which dashboard view the current roles land on.
pub fn use_dashboard_selection() -> DashboardSelection {
    dashboard::select(use_roles())
}
