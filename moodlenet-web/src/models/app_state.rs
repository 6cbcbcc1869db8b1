use shared::models::UserSession;
use shared::session::SessionStore;
use wasm_bindgen::prelude::*;
use yewdux::{Context, Store};

use crate::storage::session_store;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Application store. Mirrors the persisted session so route guards can
/// read it synchronously.
#[derive(Default, Clone, PartialEq, Debug)]
pub struct AppState {
    pub session: UserSession,
}

impl AppState {
    /// State seeded from the session store.
    pub fn restore() -> Self {
        match session_store().load() {
            Ok(session) => Self { session },
            Err(err) => {
                log(&format!("Could not restore session: {err}"));
                Self::default()
            }
        }
    }
}

impl Store for AppState {
    fn new(_cx: &Context) -> Self {
        Self::restore()
    }

    fn should_notify(&self, old: &Self) -> bool {
        self != old
    }
}
