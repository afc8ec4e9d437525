//! Browser-level smoke tests for the auth round trip.
//!
//! The auth calls await real timers, so they only run in a browser
//! (`wasm-pack test --headless --chrome`); on native targets this file
//! compiles to nothing.
#![cfg(target_arch = "wasm32")]

use frontend::api::auth::{login, logout};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn test_login_resolves_known_handle() {
    let user = login("ada").await.unwrap();
    assert_eq!(user.id, "user/ada");
    assert_eq!(user.handle, "ada");
}

#[wasm_bindgen_test]
async fn test_login_rejects_unknown_handle() {
    let result = login("nobody").await;
    assert!(result.is_err());
}

#[wasm_bindgen_test]
async fn test_logout_completes() {
    assert!(logout().await.is_ok());
}
