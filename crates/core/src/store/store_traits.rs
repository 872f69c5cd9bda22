use crate::errors::Result;

/// String-keyed blob storage.
///
/// Implementations must be safe to share across threads. Callers treat every
/// error as "storage unavailable" and degrade, so implementations should not
/// panic on I/O failures.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` when absent.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Create or overwrite the value stored under `key`.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
