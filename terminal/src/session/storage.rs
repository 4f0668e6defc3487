//! # Session Persistence
//!
//! Stores the bearer token and identity as a small JSON file so the
//! operator stays logged in across restarts. The file location defaults
//! to `./pdv-session.json` and can be overridden with the
//! `PDV_SESSION_FILE` environment variable.
//!
//! A corrupt or unreadable file is treated as "not logged in" and the
//! failure is logged, never surfaced to the operator.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use shared::UserInfo;

use crate::core::error::Result;

/// Environment variable overriding the session file location.
pub const SESSION_FILE_ENV: &str = "PDV_SESSION_FILE";

/// Default session file, relative to the working directory.
pub const DEFAULT_SESSION_FILE: &str = "pdv-session.json";

/// Persisted form of an authenticated session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredSession {
    pub token: String,
    pub user: UserInfo,
}

/// Resolve the session file path from the environment.
pub fn session_path() -> PathBuf {
    std::env::var(SESSION_FILE_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_SESSION_FILE))
}

/// Load the persisted session, if a valid one exists.
pub fn load(path: &Path) -> Option<StoredSession> {
    if !path.exists() {
        return None;
    }

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to read session file");
            return None;
        }
    };

    match serde_json::from_str(&content) {
        Ok(session) => Some(session),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Session file is corrupt, ignoring");
            None
        }
    }
}

/// Persist the session to disk.
pub fn save(path: &Path, session: &StoredSession) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let content = serde_json::to_string_pretty(session)?;
    std::fs::write(path, content)?;
    tracing::debug!(path = %path.display(), "Session persisted");
    Ok(())
}

/// Remove the persisted session. Missing file is not an error.
pub fn clear(path: &Path) {
    match std::fs::remove_file(path) {
        Ok(()) => tracing::debug!(path = %path.display(), "Session file removed"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to remove session file");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Role;

    fn sample() -> StoredSession {
        StoredSession {
            token: "jwt-token".to_string(),
            user: UserInfo {
                id: 7,
                username: "alice".to_string(),
                role: Role::Admin,
            },
        }
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        save(&path, &sample()).unwrap();
        assert_eq!(load(&path), Some(sample()));
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load(&dir.path().join("absent.json")), None);
    }

    #[test]
    fn test_corrupt_file_treated_as_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();

        assert_eq!(load(&path), None);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        save(&path, &sample()).unwrap();
        clear(&path);
        clear(&path);
        assert!(!path.exists());
    }
}
