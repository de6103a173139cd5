//! Browser tests, run with `wasm-pack test --headless --firefox`
#![cfg(target_arch = "wasm32")]

use std::rc::Rc;

use energy_monitor_web::auth::{LocalStorageSession, NoopNavigator, SessionStore, TOKEN_KEY};
use energy_monitor_web::{Session, DEMO_TOKEN};
use gloo_storage::{LocalStorage, Storage};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn local_storage_session_round_trip() {
    let store = LocalStorageSession;
    store.clear();
    assert_eq!(store.token(), None);

    store.set_token("browser-token");
    assert_eq!(store.token().as_deref(), Some("browser-token"));
    assert_eq!(
        LocalStorage::raw().get_item(TOKEN_KEY).unwrap().as_deref(),
        Some("browser-token")
    );

    store.clear();
    assert_eq!(store.token(), None);
}

#[wasm_bindgen_test]
fn logout_removes_stored_token() {
    let store = Rc::new(LocalStorageSession);
    let session = Session::new(store.clone(), Rc::new(NoopNavigator));

    session.login_demo();
    assert!(session.is_demo());
    assert_eq!(store.token().as_deref(), Some(DEMO_TOKEN));

    session.logout();
    assert!(!session.is_authenticated());
    assert_eq!(LocalStorage::raw().get_item(TOKEN_KEY).unwrap(), None);
}
