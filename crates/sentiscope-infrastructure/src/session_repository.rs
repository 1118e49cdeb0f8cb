//! File-backed session repository.
//!
//! Persists the session record as JSON in `session.json` under the config
//! directory, with restricted permissions (0600) on Unix. The token is an
//! opaque credential and is never logged.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use sentiscope_core::repository::SessionRepository;
use sentiscope_core::session::StoredSession;

use crate::paths::SentiscopePaths;

/// Manages session persistence to the filesystem.
pub struct JsonSessionRepository {
    file_path: PathBuf,
}

impl JsonSessionRepository {
    /// Creates a repository backed by the given file path.
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Creates a repository at the default location
    /// (`~/.config/sentiscope/session.json`).
    ///
    /// # Errors
    ///
    /// Returns an error if the platform config directory cannot be
    /// determined.
    pub fn default_location() -> Result<Self> {
        let file_path = SentiscopePaths::default()
            .session_file()
            .context("Failed to resolve session file path")?;
        Ok(Self::new(file_path))
    }

    /// Writes `contents` to the session file with 0600 permissions on Unix.
    fn write_restricted(&self, contents: &str) -> Result<()> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(&self.file_path)
                .with_context(|| {
                    format!("Failed to open {} for writing", self.file_path.display())
                })?;
            file.write_all(contents.as_bytes())
                .with_context(|| format!("Failed to write to {}", self.file_path.display()))?;
        }

        #[cfg(not(unix))]
        {
            fs::write(&self.file_path, contents)
                .with_context(|| format!("Failed to write to {}", self.file_path.display()))?;
        }

        Ok(())
    }
}

#[async_trait]
impl SessionRepository for JsonSessionRepository {
    async fn load(&self) -> Result<Option<StoredSession>> {
        if !self.file_path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.file_path).with_context(|| {
            format!("Failed to read session file {}", self.file_path.display())
        })?;

        let stored = serde_json::from_str(&contents).with_context(|| {
            format!("Failed to parse session file {}", self.file_path.display())
        })?;
        Ok(Some(stored))
    }

    async fn save(&self, session: &StoredSession) -> Result<()> {
        let contents =
            serde_json::to_string_pretty(session).context("Failed to serialize session")?;
        self.write_restricted(&contents)?;
        tracing::debug!(
            "[JsonSessionRepository] session persisted for '{}'",
            session.username
        );
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.file_path) {
            Ok(()) => Ok(()),
            // Already cleared
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err).with_context(|| {
                format!("Failed to remove session file {}", self.file_path.display())
            }),
        }
    }
}
