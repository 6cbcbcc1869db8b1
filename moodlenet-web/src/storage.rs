//! Browser local storage as the backend of the session store.

use gloo_storage::{LocalStorage, Storage};
use shared::errors::{StorageError, StorageResult};
use shared::session::{KeyValueStorage, PersistentSessionStore};
use wasm_bindgen::JsValue;

/// Raw string access to `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

/// Session store used by the running app.
pub type BrowserSessionStore = PersistentSessionStore<BrowserStorage>;

/// The session store under the configured key.
pub fn session_store() -> BrowserSessionStore {
    let config = crate::config::FrontendConfig::new();
    PersistentSessionStore::with_key(BrowserStorage, config.client.session_key)
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        LocalStorage::raw().get_item(key).map_err(unavailable)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        LocalStorage::raw().set_item(key, value).map_err(unavailable)
    }

    fn delete(&self, key: &str) -> StorageResult<()> {
        LocalStorage::raw().remove_item(key).map_err(unavailable)
    }
}

fn unavailable(err: JsValue) -> StorageError {
    StorageError::Unavailable {
        message: err
            .as_string()
            .unwrap_or_else(|| "localStorage rejected the operation".to_string()),
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use shared::models::{User, UserSession};
    use shared::session::SessionStore;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_round_trip_through_local_storage() {
        let store = PersistentSessionStore::with_key(BrowserStorage, "moodlenet.session.test");
        let session = UserSession::authenticated("tok", User::default());
        store.save(&session).unwrap();
        assert_eq!(store.load().unwrap(), session);
        assert_eq!(
            BrowserStorage.get("user_access_token").unwrap().as_deref(),
            Some("tok")
        );
        store.clear().unwrap();
        assert!(!store.load().unwrap().is_authenticated);
    }
}
