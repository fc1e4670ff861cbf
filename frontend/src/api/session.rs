use std::{cell::RefCell, collections::HashMap};

use uuid::Uuid;

use super::types::{ApiError, LoginResponse};
use crate::utils::storage as storage_utils;

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const CURRENT_USER_KEY: &str = "current_user";
pub const DEVICE_LABEL_KEY: &str = "device_label";

/// Key/value store holding the signed-in session between page loads.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), ApiError>;
    fn remove(&self, key: &str);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        storage_utils::local_storage()
            .ok()
            .and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ApiError> {
        storage_utils::local_storage()?
            .set_item(key, value)
            .map_err(|_| ApiError::unknown(format!("Failed to store {}", key)))
    }

    fn remove(&self, key: &str) {
        if let Ok(storage) = storage_utils::local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: RefCell<HashMap<String, String>>,
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ApiError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

pub fn ensure_device_label(store: &dyn SessionStore) -> Result<String, ApiError> {
    if let Some(label) = store.get(DEVICE_LABEL_KEY) {
        if !label.trim().is_empty() {
            return Ok(label);
        }
    }
    let label = format!("device-{}", Uuid::new_v4());
    store.set(DEVICE_LABEL_KEY, &label)?;
    Ok(label)
}

pub fn persist_session(store: &dyn SessionStore, response: &LoginResponse) -> Result<(), ApiError> {
    match &response.access_token {
        Some(token) => store.set(ACCESS_TOKEN_KEY, token)?,
        None => store.remove(ACCESS_TOKEN_KEY),
    }
    match &response.refresh_token {
        Some(token) => store.set(REFRESH_TOKEN_KEY, token)?,
        None => store.remove(REFRESH_TOKEN_KEY),
    }
    let user_json = serde_json::to_string(&response.user)
        .map_err(|e| ApiError::unknown(format!("Failed to serialize user profile: {}", e)))?;
    store.set(CURRENT_USER_KEY, &user_json)
}

/// Drops tokens and the cached profile. The device label survives logout.
pub fn clear_session(store: &dyn SessionStore) {
    store.remove(ACCESS_TOKEN_KEY);
    store.remove(REFRESH_TOKEN_KEY);
    store.remove(CURRENT_USER_KEY);
}
