//! Unified path management for sentiscope files.
//!
//! All persisted client state lives under a single config directory so the
//! session file and the optional `config.toml` stay side by side.
//!
//! This ensures consistency across all platforms (Linux, macOS, Windows).

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// The platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for sentiscope.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/sentiscope/        # Config directory
/// ├── config.toml              # Optional client configuration
/// └── session.json             # Persisted session (username + token)
/// ```
///
/// A base directory override can be injected (tests point this at a
/// tempdir).
#[derive(Debug, Clone, Default)]
pub struct SentiscopePaths {
    base_dir: Option<PathBuf>,
}

impl SentiscopePaths {
    /// Creates a path resolver, optionally rooted at `base_dir` instead of
    /// the platform config directory.
    pub fn new(base_dir: Option<PathBuf>) -> Self {
        Self { base_dir }
    }

    /// Returns the sentiscope configuration directory.
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        if let Some(base) = &self.base_dir {
            return Ok(base.clone());
        }
        dirs::config_dir()
            .map(|dir| dir.join("sentiscope"))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path of the persisted session file.
    pub fn session_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("session.json"))
    }

    /// Returns the path of the optional client config file.
    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_override() {
        let paths = SentiscopePaths::new(Some(PathBuf::from("/tmp/sentiscope-test")));
        assert_eq!(
            paths.session_file().unwrap(),
            PathBuf::from("/tmp/sentiscope-test/session.json")
        );
        assert_eq!(
            paths.config_file().unwrap(),
            PathBuf::from("/tmp/sentiscope-test/config.toml")
        );
    }

    #[test]
    fn test_default_lives_under_app_dir() {
        let paths = SentiscopePaths::default();
        if let Ok(dir) = paths.config_dir() {
            assert!(dir.ends_with("sentiscope"));
        }
    }
}
