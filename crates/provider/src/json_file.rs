//! JSON file snapshot adapter.
//!
//! Reads the raw snapshot contract from a file on disk. This is the handoff
//! format an external collector writes; anything the file does not carry is
//! left for the normalizer to default and flag.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use workpulse_core::RawSnapshot;

use super::{Result, SnapshotProvider};

/// File-based snapshot source.
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    /// Provider reading from `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl SnapshotProvider for JsonFileProvider {
    fn source(&self) -> &str {
        "json-file"
    }

    async fn fetch(&self) -> Result<RawSnapshot> {
        tracing::debug!(path = %self.path.display(), "reading snapshot");
        let data = fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProviderError;

    #[tokio::test]
    async fn test_reads_snapshot_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        let json = serde_json::json!({
            "team": {
                "sprint": { "name": "Sprint 14", "total_points": 89.0 },
                "risks": [
                    { "id": "INC-301", "kind": "incident", "wait_measure": 6.0 }
                ]
            }
        });
        std::fs::write(&path, serde_json::to_string_pretty(&json).unwrap()).unwrap();

        let provider = JsonFileProvider::new(&path);
        let snapshot = provider.fetch().await.unwrap();
        let team = snapshot.team.expect("team section");
        assert_eq!(team.sprint.unwrap().total_points, Some(89.0));
        assert_eq!(team.risks.len(), 1);
        assert!(snapshot.personal.is_none());
    }

    #[tokio::test]
    async fn test_missing_file_is_an_io_error() {
        let provider = JsonFileProvider::new("/nonexistent/snapshot.json");
        let err = provider.fetch().await.unwrap_err();
        assert!(matches!(err, ProviderError::Io(_)));
    }

    #[tokio::test]
    async fn test_malformed_json_is_a_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        std::fs::write(&path, "{ not json").unwrap();

        let provider = JsonFileProvider::new(&path);
        let err = provider.fetch().await.unwrap_err();
        assert!(matches!(err, ProviderError::Json(_)));
    }
}
