//! Session token storage

use std::cell::RefCell;

#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};

/// localStorage key holding the session token
pub const TOKEN_KEY: &str = "token";

/// Where the session token lives between requests
pub trait SessionStore {
    fn token(&self) -> Option<String>;
    fn set_token(&self, token: &str);
    fn clear(&self);
}

/// Token storage backed by browser localStorage.
///
/// The token is kept as a raw string, not JSON, so the login page can write
/// it with a plain `localStorage.setItem`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageSession;

#[cfg(target_arch = "wasm32")]
impl SessionStore for LocalStorageSession {
    fn token(&self) -> Option<String> {
        LocalStorage::raw().get_item(TOKEN_KEY).ok().flatten()
    }

    fn set_token(&self, token: &str) {
        if let Err(e) = LocalStorage::raw().set_item(TOKEN_KEY, token) {
            log::error!("Failed to persist session token: {:?}", e);
        }
    }

    fn clear(&self) {
        LocalStorage::delete(TOKEN_KEY);
    }
}

/// In-process token storage for tests and non-browser hosts
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: RefCell<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: RefCell::new(Some(token.to_string())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set_token(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_holds_one_token_at_a_time() {
        let store = MemorySessionStore::new();
        assert_eq!(store.token(), None);

        store.set_token("first");
        store.set_token("second");
        assert_eq!(store.token().as_deref(), Some("second"));

        store.clear();
        assert_eq!(store.token(), None);
    }
}
