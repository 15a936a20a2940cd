//! Client session identifiers persisted in key-value storage.

use uuid::Uuid;

use crate::storage::kv::KeyValueStore;

/// Storage key for the minesweeper game session id.
pub const MINESWEEPER_SESSION_KEY: &str = "minesweeper-session-id";

/// Returns the session id stored under `key`, creating and persisting a fresh UUID v4 when the
/// stored value is absent, unreadable, or not a UUID.
///
/// Write failures are ignored: the generated id is still returned and used for this session.
pub fn load_or_create_session_id<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Uuid {
    if let Ok(Some(raw)) = store.get(key) {
        if let Ok(id) = Uuid::parse_str(raw.trim()) {
            return id;
        }
    }
    let id = Uuid::new_v4();
    let _ = store.set(key, &id.to_string());
    id
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::storage::kv::{MemoryKeyValueStore, NoopKeyValueStore};

    #[test]
    fn existing_valid_id_is_reused() {
        let stored = "6f1c2a4e-8d3b-4f5a-9c7e-0b1d2e3f4a5b";
        let store = MemoryKeyValueStore::with_entry(MINESWEEPER_SESSION_KEY, stored);
        let id = load_or_create_session_id(&store, MINESWEEPER_SESSION_KEY);
        assert_eq!(id.to_string(), stored);
    }

    #[test]
    fn missing_id_is_generated_and_persisted() {
        let store = MemoryKeyValueStore::default();
        let id = load_or_create_session_id(&store, MINESWEEPER_SESSION_KEY);
        assert_eq!(id.get_version_num(), 4);
        assert_eq!(
            store.get(MINESWEEPER_SESSION_KEY).expect("get"),
            Some(id.to_string())
        );
        assert_eq!(load_or_create_session_id(&store, MINESWEEPER_SESSION_KEY), id);
    }

    #[test]
    fn garbage_id_is_replaced() {
        let store = MemoryKeyValueStore::with_entry(MINESWEEPER_SESSION_KEY, "not-a-uuid");
        let id = load_or_create_session_id(&store, MINESWEEPER_SESSION_KEY);
        assert_eq!(
            store.get(MINESWEEPER_SESSION_KEY).expect("get"),
            Some(id.to_string())
        );
    }

    #[test]
    fn unpersistable_store_still_yields_an_id() {
        let first = load_or_create_session_id(&NoopKeyValueStore, MINESWEEPER_SESSION_KEY);
        let second = load_or_create_session_id(&NoopKeyValueStore, MINESWEEPER_SESSION_KEY);
        assert_ne!(first, second);
    }
}
