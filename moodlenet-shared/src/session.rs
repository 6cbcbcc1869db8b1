//! # Session Storage
//!
//! Typed access to the persisted [`UserSession`]. The record lives under a
//! named, versioned key of a string key/value backend (browser local storage
//! in the web app, [`MemoryStorage`] in tests). The raw token is mirrored
//! under [`LEGACY_TOKEN_KEY`] for tooling that still reads it from there.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use crate::config::{DEFAULT_SESSION_KEY, LEGACY_TOKEN_KEY};
use crate::errors::{StorageError, StorageResult};
use crate::models::UserSession;

/// Minimal string key/value storage.
pub trait KeyValueStorage {
    /// Read a value, `None` when the key is absent.
    ///
    /// # Errors
    /// Returns an error if the backend cannot be reached.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write a value, replacing any previous one.
    ///
    /// # Errors
    /// Returns an error if the backend cannot be reached or is full.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove a key. Removing an absent key is not an error.
    ///
    /// # Errors
    /// Returns an error if the backend cannot be reached.
    fn delete(&self, key: &str) -> StorageResult<()>;
}

/// Read/write access to the current session record.
pub trait SessionStore {
    /// The stored session, or the unauthenticated default when none is stored.
    ///
    /// # Errors
    /// Returns an error if the backend fails or the record is unreadable.
    fn load(&self) -> StorageResult<UserSession>;

    /// Replace the stored session. Returns once the write has landed.
    ///
    /// # Errors
    /// Returns an error if the record cannot be written.
    fn save(&self, session: &UserSession) -> StorageResult<()>;

    /// Forget the stored session.
    ///
    /// # Errors
    /// Returns an error if the backend fails.
    fn clear(&self) -> StorageResult<()>;
}

impl<S: SessionStore + ?Sized> SessionStore for &S {
    fn load(&self) -> StorageResult<UserSession> {
        (**self).load()
    }

    fn save(&self, session: &UserSession) -> StorageResult<()> {
        (**self).save(session)
    }

    fn clear(&self) -> StorageResult<()> {
        (**self).clear()
    }
}

/// [`SessionStore`] serializing the session as JSON into a [`KeyValueStorage`].
#[derive(Debug, Clone)]
pub struct PersistentSessionStore<B> {
    backend: B,
    key: String,
}

impl<B: KeyValueStorage> PersistentSessionStore<B> {
    /// Store using the default versioned key.
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, DEFAULT_SESSION_KEY)
    }

    /// Store under a custom key.
    pub fn with_key(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: KeyValueStorage> SessionStore for PersistentSessionStore<B> {
    fn load(&self) -> StorageResult<UserSession> {
        match self.backend.get(&self.key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(UserSession::default()),
        }
    }

    /// Writes the record, then the legacy token mirror. If the mirror
    /// cannot be written the previous record is put back, so a failed save
    /// leaves the stored session as it was.
    fn save(&self, session: &UserSession) -> StorageResult<()> {
        let raw = serde_json::to_string(session)?;
        let previous = self.backend.get(&self.key)?;
        self.backend.set(&self.key, &raw)?;

        let mirrored = match session.bearer_token() {
            Some(token) => self.backend.set(LEGACY_TOKEN_KEY, token),
            None => self.backend.delete(LEGACY_TOKEN_KEY),
        };
        if let Err(err) = mirrored {
            let restored = match previous {
                Some(previous) => self.backend.set(&self.key, &previous),
                None => self.backend.delete(&self.key),
            };
            if let Err(restore_err) = restored {
                warn!(key = %self.key, error = %restore_err, "could not roll back session record");
            }
            return Err(err);
        }

        debug!(key = %self.key, authenticated = session.is_authenticated, "session saved");
        Ok(())
    }

    fn clear(&self) -> StorageResult<()> {
        self.backend.delete(&self.key)?;
        self.backend.delete(LEGACY_TOKEN_KEY)?;
        debug!(key = %self.key, "session cleared");
        Ok(())
    }
}

/// In-memory [`KeyValueStorage`]. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> StorageResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries.lock().map_err(|_| StorageError::Unavailable {
            message: "memory storage lock poisoned".to_string(),
        })
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> StorageResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

/// Session store kept entirely in memory.
pub type MemorySessionStore = PersistentSessionStore<MemoryStorage>;

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new(MemoryStorage::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;

    fn profile() -> User {
        User {
            id: "u1".to_string(),
            name: Some("Ada".to_string()),
            ..User::default()
        }
    }

    #[test]
    fn test_empty_store_loads_unauthenticated_session() {
        let store = MemorySessionStore::default();
        assert_eq!(store.load().unwrap(), UserSession::default());
    }

    #[test]
    fn test_save_then_load() {
        let store = MemorySessionStore::default();
        let session = UserSession::authenticated("tok", profile());
        store.save(&session).unwrap();
        assert_eq!(store.load().unwrap(), session);
    }

    #[test]
    fn test_save_overwrites_previous_session() {
        let store = MemorySessionStore::default();
        store
            .save(&UserSession::authenticated("old", User::default()))
            .unwrap();
        store
            .save(&UserSession::authenticated("new", profile()))
            .unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded.token.as_deref(), Some("new"));
        assert_eq!(loaded.profile, Some(profile()));
    }

    #[test]
    fn test_save_mirrors_token_under_legacy_key() {
        let backend = MemoryStorage::new();
        let store = PersistentSessionStore::new(backend.clone());
        store
            .save(&UserSession::authenticated("tok", profile()))
            .unwrap();
        assert_eq!(backend.get(LEGACY_TOKEN_KEY).unwrap().as_deref(), Some("tok"));
        assert!(backend.get(DEFAULT_SESSION_KEY).unwrap().is_some());
    }

    #[test]
    fn test_clear_removes_both_keys() {
        let backend = MemoryStorage::new();
        let store = PersistentSessionStore::new(backend.clone());
        store
            .save(&UserSession::authenticated("tok", profile()))
            .unwrap();
        store.clear().unwrap();
        assert!(backend.get(LEGACY_TOKEN_KEY).unwrap().is_none());
        assert!(backend.get(DEFAULT_SESSION_KEY).unwrap().is_none());
        assert!(!store.load().unwrap().is_authenticated);
    }

    /// Memory backend whose writes to one key always fail.
    #[derive(Debug, Clone)]
    struct FailingKeyStorage {
        inner: MemoryStorage,
        failing_key: &'static str,
    }

    impl FailingKeyStorage {
        fn new(failing_key: &'static str) -> Self {
            Self {
                inner: MemoryStorage::new(),
                failing_key,
            }
        }
    }

    impl KeyValueStorage for FailingKeyStorage {
        fn get(&self, key: &str) -> StorageResult<Option<String>> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> StorageResult<()> {
            if key == self.failing_key {
                return Err(StorageError::Unavailable {
                    message: "quota exceeded".to_string(),
                });
            }
            self.inner.set(key, value)
        }

        fn delete(&self, key: &str) -> StorageResult<()> {
            self.inner.delete(key)
        }
    }

    #[test]
    fn test_failed_mirror_write_keeps_empty_store_empty() {
        let backend = FailingKeyStorage::new(LEGACY_TOKEN_KEY);
        let store = PersistentSessionStore::new(backend.clone());

        let result = store.save(&UserSession::authenticated("tok", profile()));

        assert!(matches!(result, Err(StorageError::Unavailable { .. })));
        assert!(backend.inner.get(DEFAULT_SESSION_KEY).unwrap().is_none());
        assert_eq!(store.load().unwrap(), UserSession::default());
    }

    #[test]
    fn test_failed_mirror_write_restores_previous_record() {
        let backend = FailingKeyStorage::new(LEGACY_TOKEN_KEY);
        let store = PersistentSessionStore::new(backend.clone());
        let previous = UserSession {
            is_authenticated: false,
            token: None,
            profile: Some(profile()),
        };
        store.save(&previous).unwrap();

        assert!(store.save(&UserSession::authenticated("tok", profile())).is_err());

        assert_eq!(store.load().unwrap(), previous);
    }

    #[test]
    fn test_corrupt_record_is_a_serialization_error() {
        let backend = MemoryStorage::new();
        backend.set(DEFAULT_SESSION_KEY, "{not json").unwrap();
        let store = PersistentSessionStore::new(backend);
        assert!(matches!(
            store.load(),
            Err(StorageError::Serialization { .. })
        ));
    }

    #[test]
    fn test_custom_key() {
        let backend = MemoryStorage::new();
        let store = PersistentSessionStore::with_key(backend.clone(), "moodlenet.session.v2");
        store
            .save(&UserSession::authenticated("tok", profile()))
            .unwrap();
        assert_eq!(store.key(), "moodlenet.session.v2");
        assert!(backend.get("moodlenet.session.v2").unwrap().is_some());
        assert!(backend.get(DEFAULT_SESSION_KEY).unwrap().is_none());
    }
}
