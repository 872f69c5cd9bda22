use std::sync::atomic::{AtomicBool, Ordering};

use super::{InMemoryKeyValueStore, KeyValueStore};
use crate::errors::{DatabaseError, Result};

/// Wraps an in-memory store and fails every call while `offline` is set.
#[derive(Default)]
pub(crate) struct FlakyStore {
    pub inner: InMemoryKeyValueStore,
    offline: AtomicBool,
}

impl FlakyStore {
    pub fn offline() -> Self {
        let store = Self::default();
        store.set_offline(true);
        store
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check(&self) -> Result<()> {
        if self.offline.load(Ordering::SeqCst) {
            Err(DatabaseError::ConnectionFailed("store offline".to_string()).into())
        } else {
            Ok(())
        }
    }
}

impl KeyValueStore for FlakyStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        self.check()?;
        self.inner.read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.check()?;
        self.inner.write(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.check()?;
        self.inner.remove(key)
    }
}
