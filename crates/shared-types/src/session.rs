use crate::models::Session;

/// Owner of the client's single [`Session`].
///
/// The gate and selector only read the session; `set` and `clear` are called
/// by login and logout.
pub trait SessionStore {
    fn get(&self) -> Session;
    fn set(&mut self, session: Session);
    fn clear(&mut self);
}

/// Plain in-memory store, used by tests and non-UI callers.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    session: Session,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Session {
        self.session.clone()
    }

    fn set(&mut self, session: Session) {
        self.session = session;
    }

    fn clear(&mut self) {
        self.session = Session::anonymous();
    }
}
