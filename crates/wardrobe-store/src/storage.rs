//! Key-value JSON storage on the local filesystem.
//!
//! Each key maps to one `<key>.json` file inside the storage directory.
//! The payloads are plain JSON arrays/strings, byte-compatible with the
//! legacy web client's local-storage entries.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use wardrobe_core::RepositoryError;

/// Per-operation artificial delays, mirroring the legacy web client's
/// backend simulation. Disabled unless explicitly requested.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedLatency {
    /// Delay before a read completes.
    pub read: Duration,
    /// Delay before a write completes.
    pub write: Duration,
    /// Delay before a removal completes.
    pub remove: Duration,
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self {
            read: Duration::from_millis(500),
            write: Duration::from_millis(300),
            remove: Duration::from_millis(200),
        }
    }
}

/// Directory-backed JSON key-value store.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    dir: PathBuf,
    latency: Option<SimulatedLatency>,
}

impl JsonStorage {
    /// Create a store rooted at the given directory.
    ///
    /// The directory is created lazily on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            latency: None,
        }
    }

    /// Enable the legacy backend-simulation delays (500/300/200 ms for
    /// read/write/remove).
    #[must_use]
    pub fn with_simulated_latency(mut self) -> Self {
        self.latency = Some(SimulatedLatency::default());
        self
    }

    /// The platform-default storage directory.
    pub fn default_dir() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join("virtual-wardrobe"))
    }

    /// The storage directory this store writes into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    async fn pause(&self, pick: impl Fn(&SimulatedLatency) -> Duration) {
        if let Some(latency) = &self.latency {
            tokio::time::sleep(pick(latency)).await;
        }
    }

    /// Read and deserialize the value under `key`.
    ///
    /// Returns `Ok(None)` when no file exists for the key. A file that
    /// fails to parse is a `Serialization` error; callers decide whether
    /// that degrades or propagates.
    pub async fn read_key<T: DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<Option<T>, RepositoryError> {
        self.pause(|l| l.read).await;
        let path = self.key_path(key);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(RepositoryError::Storage(format!(
                    "failed to read {}: {e}",
                    path.display()
                )))
            }
        };
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| RepositoryError::Serialization(format!("corrupt payload for {key}: {e}")))
    }

    /// Serialize and write the value under `key`, replacing any previous
    /// payload.
    pub async fn write_key<T: Serialize>(&self, key: &str, value: &T) -> Result<(), RepositoryError> {
        self.pause(|l| l.write).await;
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| RepositoryError::Storage(format!("failed to create storage dir: {e}")))?;
        let json = serde_json::to_vec_pretty(value)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;
        let path = self.key_path(key);
        tokio::fs::write(&path, json).await.map_err(|e| {
            RepositoryError::Storage(format!("failed to write {}: {e}", path.display()))
        })
    }

    /// Remove the payload under `key`. Absent keys are a no-op.
    pub async fn remove_key(&self, key: &str) -> Result<(), RepositoryError> {
        self.pause(|l| l.remove).await;
        let path = self.key_path(key);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(RepositoryError::Storage(format!(
                "failed to remove {}: {e}",
                path.display()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_key_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let storage = JsonStorage::new(dir.path());
        let value: Option<Vec<String>> = storage.read_key("nothing").await.unwrap();
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_write_then_read_round_trips() {
        let dir = TempDir::new().unwrap();
        let storage = JsonStorage::new(dir.path());

        storage
            .write_key("items", &vec!["a".to_string(), "b".to_string()])
            .await
            .unwrap();
        let value: Option<Vec<String>> = storage.read_key("items").await.unwrap();
        assert_eq!(value, Some(vec!["a".to_string(), "b".to_string()]));
    }

    #[tokio::test]
    async fn test_corrupt_payload_is_serialization_error() {
        let dir = TempDir::new().unwrap();
        let storage = JsonStorage::new(dir.path());
        tokio::fs::create_dir_all(dir.path()).await.unwrap();
        tokio::fs::write(dir.path().join("items.json"), b"{not json")
            .await
            .unwrap();

        let result: Result<Option<Vec<String>>, _> = storage.read_key("items").await;
        assert!(matches!(result, Err(RepositoryError::Serialization(_))));
    }

    #[tokio::test]
    async fn test_remove_absent_key_is_noop() {
        let dir = TempDir::new().unwrap();
        let storage = JsonStorage::new(dir.path());
        storage.remove_key("nothing").await.unwrap();
    }
}
