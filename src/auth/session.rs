use std::rc::Rc;

use super::navigator::{Navigator, LOGIN_PATH};
use super::storage::SessionStore;

/// Reserved token that switches the client to synthetic data.
///
/// The login page stores it when the visitor picks "try the demo", so the
/// dashboard works without a backend.
pub const DEMO_TOKEN: &str = "demo-token-bypass";

/// Login state on top of a session store
#[derive(Clone)]
pub struct Session {
    store: Rc<dyn SessionStore>,
    navigator: Rc<dyn Navigator>,
}

impl Session {
    pub fn new(store: Rc<dyn SessionStore>, navigator: Rc<dyn Navigator>) -> Self {
        Self { store, navigator }
    }

    /// Store the token handed out by the backend at login
    pub fn login(&self, token: &str) {
        self.store.set_token(token);
        log::info!("Session started");
    }

    /// Start a session served entirely by demo data
    pub fn login_demo(&self) {
        self.store.set_token(DEMO_TOKEN);
        log::info!("Demo session started");
    }

    /// Forget the token and go back to the login page
    pub fn logout(&self) {
        self.store.clear();
        log::info!("Session ended");
        self.navigator.redirect(LOGIN_PATH);
    }

    /// Drop the token after the backend rejected it
    pub fn expire(&self) {
        log::warn!("Session rejected by the API, clearing token");
        self.store.clear();
        self.navigator.redirect(LOGIN_PATH);
    }

    pub fn token(&self) -> Option<String> {
        self.store.token()
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.token().is_some_and(|t| !t.is_empty())
    }

    pub fn is_demo(&self) -> bool {
        self.store.token().as_deref() == Some(DEMO_TOKEN)
    }
}
