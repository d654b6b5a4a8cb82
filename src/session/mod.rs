//! Client session identity.
//!
//! A session identifier is created lazily on first use, persisted in a
//! durable key-value store and read back on every later start.

mod id;
mod store;

pub use id::SessionId;
pub use store::{MemoryStore, SESSION_KEY, SessionStore, SqliteStore};

/// Opens the on-disk store, falling back to an in-memory store when the
/// data directory or database is unusable.
pub fn open_default_store() -> Box<dyn SessionStore> {
    match SqliteStore::open_default() {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!(
                error = %format!("{e:#}"),
                "session storage unavailable, session id will not be persisted"
            );
            Box::new(MemoryStore::default())
        }
    }
}

/// Returns the persisted session identifier, creating and persisting one
/// on first use.
///
/// An existing identifier is never regenerated. Storage failures do not
/// fail the call: the identifier is then only valid for this process. A
/// failed read never writes, so an id that is on disk but unreadable right
/// now survives for the next start.
pub fn get_or_create_session_id(store: &mut dyn SessionStore) -> SessionId {
    match store.load() {
        Ok(Some(id)) => {
            tracing::debug!(session_id = %id, "loaded session id");
            return id;
        }
        Ok(None) => {}
        Err(e) => {
            let id = SessionId::generate();
            tracing::warn!(
                error = %format!("{e:#}"),
                store = %store.describe(),
                "failed to read session id, using a new one for this run only"
            );
            return id;
        }
    }

    let id = SessionId::generate();
    if let Err(e) = store.save(&id) {
        tracing::warn!(
            error = %format!("{e:#}"),
            store = %store.describe(),
            "failed to persist session id, using it for this run only"
        );
    } else {
        tracing::info!(session_id = %id, store = %store.describe(), "created session id");
    }
    id
}
