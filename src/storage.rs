//! Browser Token Storage
//!
//! `localStorage` backed slot for the bearer token.

use gear_catalog_core::{StorageError, TokenStorage, TOKEN_KEY};
use wasm_bindgen::JsValue;

/// Token slot in `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTokenStorage;

fn js_error(err: JsValue) -> StorageError {
    StorageError::Failed(format!("{:?}", err))
}

fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .ok_or(StorageError::Unavailable)?
        .local_storage()
        .map_err(js_error)?
        .ok_or(StorageError::Unavailable)
}

impl TokenStorage for LocalTokenStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        local_storage()?.get_item(TOKEN_KEY).map_err(js_error)
    }

    fn store(&self, token: &str) -> Result<(), StorageError> {
        local_storage()?.set_item(TOKEN_KEY, token).map_err(js_error)
    }

    fn clear(&self) -> Result<(), StorageError> {
        local_storage()?.remove_item(TOKEN_KEY).map_err(js_error)
    }
}
