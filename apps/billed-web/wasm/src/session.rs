//! Session held in localStorage

use billed_core::parse_session;
use billed_types::User;
use wasm_bindgen::prelude::*;
use web_sys::Storage;

/// Reads and clears the signed-in user and its token
pub struct SessionStore {
    storage: Storage,
    user_key: String,
    token_key: String,
}

impl SessionStore {
    pub fn open(user_key: &str, token_key: &str) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or("No window")?;
        let storage = window.local_storage()?.ok_or("No localStorage")?;
        Ok(Self {
            storage,
            user_key: user_key.to_string(),
            token_key: token_key.to_string(),
        })
    }

    /// Current user; a corrupt entry is removed and treated as signed out
    pub fn user(&self) -> Option<User> {
        let raw = self.storage.get_item(&self.user_key).ok().flatten();
        match parse_session(raw.as_deref()) {
            Ok(user) => user,
            Err(err) => {
                tracing::warn!(error = %err, "discarding stored session");
                let _ = self.storage.remove_item(&self.user_key);
                None
            }
        }
    }

    pub fn token(&self) -> Option<String> {
        self.storage
            .get_item(&self.token_key)
            .ok()
            .flatten()
            .filter(|t| !t.is_empty())
    }

    /// Sign out
    pub fn clear(&self) -> Result<(), JsValue> {
        self.storage.remove_item(&self.user_key)?;
        self.storage.remove_item(&self.token_key)?;
        Ok(())
    }
}
