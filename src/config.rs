use crate::models::CurrentUser;
use crate::submission::SubmitConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Settings for the `listing-desk` binary
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeskConfig {
    pub submit: SubmitConfig,
    /// Signed-in user; `None` submits anonymously and is rejected
    pub user: Option<CurrentUser>,
    /// JSON list of form edits to replay
    pub draft: PathBuf,
    /// Where the final snapshot is written
    pub output: PathBuf,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            submit: SubmitConfig::default(),
            user: None,
            draft: PathBuf::from("draft.json"),
            output: PathBuf::from("last_draft.json"),
        }
    }
}

impl DeskConfig {
    /// Load from a JSON file; missing keys keep their defaults
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config {}", path.display()))?;

        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    /// Load `path` if it exists, otherwise use defaults
    pub async fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let exists = tokio::fs::try_exists(path)
            .await
            .with_context(|| format!("Failed to check for config {}", path.display()))?;

        if exists {
            Self::load(path).await
        } else {
            info!("No {} found, using default settings", path.display());
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserId;

    #[tokio::test]
    async fn test_load_merges_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("listing-desk.json");
        tokio::fs::write(
            &path,
            r#"{ "user": { "id": "u1" }, "submit": { "timeout_secs": 5 } }"#,
        )
        .await
        .unwrap();

        let config = DeskConfig::load(&path).await.unwrap();

        assert_eq!(config.user.map(|u| u.id), Some(UserId::from("u1")));
        assert_eq!(config.submit.timeout_secs, 5);
        assert_eq!(config.submit.endpoint, "/api/properties");
        assert_eq!(config.draft, PathBuf::from("draft.json"));
    }

    #[tokio::test]
    async fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();

        let config = DeskConfig::load_or_default(dir.path().join("listing-desk.json"))
            .await
            .unwrap();

        assert!(config.user.is_none());
        assert_eq!(config.output, PathBuf::from("last_draft.json"));
    }

    #[tokio::test]
    async fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("listing-desk.json");
        tokio::fs::write(&path, "{ not json").await.unwrap();

        assert!(DeskConfig::load(&path).await.is_err());
        assert!(DeskConfig::load_or_default(&path).await.is_err());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_unreadable_directory_is_an_error() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let locked = dir.path().join("locked");
        tokio::fs::create_dir(&locked).await.unwrap();
        tokio::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000))
            .await
            .unwrap();
        let path = locked.join("listing-desk.json");

        // root ignores permission bits; only assert when access is really denied
        let denied = tokio::fs::metadata(&path)
            .await
            .err()
            .map(|e| e.kind() == std::io::ErrorKind::PermissionDenied)
            .unwrap_or(false);
        let outcome = DeskConfig::load_or_default(&path).await;

        tokio::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755))
            .await
            .unwrap();
        if denied {
            assert!(outcome.is_err());
        }
    }
}
