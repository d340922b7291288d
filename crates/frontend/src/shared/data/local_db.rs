//! Typed persistence adapter over browser localStorage.
//!
//! All collections live under a `(scope, collection)` key so that every
//! logged-in user sees their own data set. Parse failures are logged and
//! fall back to the provided default instead of wiping anything.

use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::window;

/// Which user's data set a key belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// Pre-login data (the user roster and session marker).
    Guest,
    /// Keys prefixed with the user id.
    User(String),
}

/// Persisted collections, one localStorage entry each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Stores,
    Products,
    Sales,
    Settings,
    VisitPlan,
}

impl Collection {
    pub fn key(&self) -> &'static str {
        match self {
            Collection::Stores => "stores",
            Collection::Products => "products",
            Collection::Sales => "sales",
            Collection::Settings => "settings",
            Collection::VisitPlan => "dailyVisitPlan",
        }
    }

    pub fn all() -> [Collection; 5] {
        [
            Collection::Stores,
            Collection::Products,
            Collection::Sales,
            Collection::Settings,
            Collection::VisitPlan,
        ]
    }
}

pub fn storage_key(scope: &Scope, collection: Collection) -> String {
    match scope {
        Scope::Guest => collection.key().to_string(),
        Scope::User(id) => format!("{}_{}", id, collection.key()),
    }
}

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Read a collection, falling back to `default` when absent or corrupt.
pub fn read_or<T: DeserializeOwned>(scope: &Scope, collection: Collection, default: T) -> T {
    let key = storage_key(scope, collection);
    let Some(raw) = get_local_storage().and_then(|s| s.get_item(&key).ok().flatten()) else {
        return default;
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("failed to parse localStorage key '{}': {}", key, err);
            default
        }
    }
}

pub fn write<T: Serialize>(scope: &Scope, collection: Collection, value: &T) {
    let key = storage_key(scope, collection);
    match serde_json::to_string(value) {
        Ok(json) => {
            if let Some(storage) = get_local_storage() {
                let _ = storage.set_item(&key, &json);
            }
        }
        Err(err) => log::error!("failed to serialize '{}': {}", key, err),
    }
}

pub fn remove(scope: &Scope, collection: Collection) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(&storage_key(scope, collection));
    }
}

/// Raw string entry outside the collection scheme (session marker, roster).
pub fn read_raw(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

pub fn write_raw(key: &str, value: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(key, value);
    }
}

pub fn remove_raw(key: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(key);
    }
}

/// One-shot markers used by the notifiers ("already shown" flags).
pub fn marker_present(key: &str) -> bool {
    read_raw(key).is_some()
}

pub fn set_marker(key: &str) {
    write_raw(key, "true");
}
