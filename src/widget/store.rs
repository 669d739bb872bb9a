//! Persisted placement store - string key/value storage holding JSON
//!
//! The widget only ever reads at construction and writes through on every
//! change. Corrupt values are treated as absent so a bad entry can never
//! break the host page.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage is not available in this context")]
    Unavailable,
    #[error("failed to write `{key}`: {message}")]
    Write { key: String, message: String },
    #[error("failed to encode `{key}`")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("corrupt value under `{key}`")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

pub trait PlacementStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Decode the value under `key`; `Ok(None)` when the key is absent.
pub fn read_json<T, S>(store: &S, key: &str) -> Result<Option<T>, StoreError>
where
    T: DeserializeOwned,
    S: PlacementStore + ?Sized,
{
    let Some(raw) = store.get(key) else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| StoreError::Decode { key: key.to_string(), source })
}

/// Like [`read_json`], but a corrupt value is logged and treated as absent.
pub fn load<T, S>(store: &S, key: &str) -> Option<T>
where
    T: DeserializeOwned,
    S: PlacementStore + ?Sized,
{
    read_json(store, key).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "ignoring persisted widget state");
        None
    })
}

pub fn save<T, S>(store: &mut S, key: &str, value: &T) -> Result<(), StoreError>
where
    T: Serialize + ?Sized,
    S: PlacementStore + ?Sized,
{
    let raw = serde_json::to_string(value)
        .map_err(|source| StoreError::Encode { key: key.to_string(), source })?;
    store.set(key, &raw)
}

/// HashMap-backed store for tests; counts writes and can be told to fail
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub entries: std::collections::HashMap<String, String>,
    pub writes: usize,
    pub fail_writes: bool,
}

#[cfg(test)]
impl MemoryStore {
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

#[cfg(test)]
impl PlacementStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Write {
                key: key.to_string(),
                message: "quota exceeded".to_string(),
            });
        }
        self.writes += 1;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
