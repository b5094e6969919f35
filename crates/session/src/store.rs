//! Session id to state map
//!
//! The map lock is held only to find or insert an entry; each session's state
//! has its own lock, so sessions never wait on one another.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use parking_lot::{Mutex, RwLock};
use tracing::info;

use crate::state::SessionState;

/// Shared handle to one session's state
pub type SessionHandle = Arc<Mutex<SessionState>>;

/// Sessions of one process
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, SessionHandle>>,
    issued: AtomicU64,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session with default state, returning its id
    pub fn create(&self) -> (String, SessionHandle) {
        let n = self.issued.fetch_add(1, Ordering::Relaxed);
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        let id = format!("{:x}-{:x}", nanos, n);

        let handle = SessionHandle::default();
        self.sessions.write().insert(id.clone(), Arc::clone(&handle));
        info!("Started session {}", id);
        (id, handle)
    }

    pub fn get(&self, id: &str) -> Option<SessionHandle> {
        self.sessions.read().get(id).cloned()
    }

    /// State for `id`, starting a fresh session under that id if unknown
    pub fn get_or_create(&self, id: &str) -> SessionHandle {
        if let Some(handle) = self.get(id) {
            return handle;
        }
        Arc::clone(
            self.sessions
                .write()
                .entry(id.to_string())
                .or_insert_with(|| {
                    info!("Started session {}", id);
                    SessionHandle::default()
                }),
        )
    }

    /// End a session, discarding its state
    pub fn remove(&self, id: &str) -> bool {
        let removed = self.sessions.write().remove(id).is_some();
        if removed {
            info!("Ended session {}", id);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }
}
