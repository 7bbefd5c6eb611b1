//! Profile persistence capability and its implementations.
//!
//! SYSTEM CONTEXT
//! ==============
//! The durable store is the only channel between the profile view and the
//! edit form; there is no shared in-memory profile state. Pages receive the
//! store through Leptos context instead of touching `document.cookie`
//! directly, so tests can substitute [`MemoryStore`].

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::util::cookies;

/// Durable string key-value storage for profile fields.
///
/// Absence is a valid state distinct from an empty value: a key that was
/// never written reads as `None`, while a cleared field reads as `Some("")`.
pub trait ProfileStore: Send + Sync {
    /// Stored value for `key`, or `None` if never set.
    fn read(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, overwriting any prior value. Never fails
    /// for well-formed string input.
    fn write(&self, key: &str, value: &str);

    /// Write every entry; used once per successful form submission.
    fn write_batch(&self, entries: &[(&str, String)]) {
        for (key, value) in entries {
            self.write(key, value);
        }
    }
}

/// Production store over `document.cookie`; browser-scoped, no expiry.
/// Outside a browser every read is absent and writes are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct CookieStore;

impl ProfileStore for CookieStore {
    fn read(&self, key: &str) -> Option<String> {
        cookies::read_cookie(key)
    }

    fn write(&self, key: &str, value: &str) {
        cookies::write_cookie(key, value);
    }
}

/// In-memory store with the same observable semantics minus durability.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl ProfileStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_owned(), value.to_owned());
        }
    }
}

/// Cloneable store handle provided to pages via context.
#[derive(Clone)]
pub struct ProfileStoreHandle(Arc<dyn ProfileStore>);

impl ProfileStoreHandle {
    /// The production cookie-backed store.
    pub fn cookie() -> Self {
        Self(Arc::new(CookieStore))
    }

    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self(store)
    }
}

impl std::ops::Deref for ProfileStoreHandle {
    type Target = dyn ProfileStore;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}
