//! Durable string preferences (the theme choice).
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser store is `window.localStorage`, scoped to the page origin and
//! surviving reloads. Storage can be disabled (private mode, quota, sandboxed
//! frames); every failure reads as "no stored value" and writes become
//! no-ops, which the theme controller already treats as the light default.

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Key/value preference persistence.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-process store; clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.set(key, value);
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().unwrap_or(None)
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).unwrap_or(None)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            if let Err(err) = storage.set_item(key, value) {
                log::debug!("localStorage write for {key} failed: {err:?}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }
}
