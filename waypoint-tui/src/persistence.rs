//! Session persistence.
//!
//! The access token and last route survive restarts in a small JSON file.
//! Route guards only need to know whether a token exists, which is a
//! synchronous file check.

use crate::nav::Route;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedSession {
    pub access_token: Option<String>,
    pub last_route: Route,
}

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub fn load(path: &Path) -> Result<Option<PersistedSession>, PersistenceError> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(path)?;
    let session = serde_json::from_str::<PersistedSession>(&contents)?;
    Ok(Some(session))
}

pub fn save(path: &Path, session: &PersistedSession) -> Result<(), PersistenceError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = serde_json::to_string_pretty(session)?;
    std::fs::write(path, contents)?;
    Ok(())
}

pub fn clear(path: &Path) -> Result<(), PersistenceError> {
    if path.exists() {
        std::fs::remove_file(path)?;
    }
    Ok(())
}

/// Synchronous token-presence check for route guards. A missing or
/// unreadable file simply means no session.
pub fn has_session_token(path: &Path) -> bool {
    match load(path) {
        Ok(Some(session)) => session
            .access_token
            .as_deref()
            .is_some_and(|token| !token.is_empty()),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let session = PersistedSession {
            access_token: Some("tok".to_string()),
            last_route: Route::NoteDetail(5),
        };
        save(&path, &session).unwrap();

        let loaded = load(&path).unwrap().unwrap();
        assert_eq!(loaded.access_token.as_deref(), Some("tok"));
        assert_eq!(loaded.last_route, Route::NoteDetail(5));
    }

    #[test]
    fn missing_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        assert!(load(&path).unwrap().is_none());
        assert!(!has_session_token(&path));
    }

    #[test]
    fn has_session_token_requires_nonempty_token() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let session = PersistedSession {
            access_token: Some(String::new()),
            last_route: Route::Home,
        };
        save(&path, &session).unwrap();
        assert!(!has_session_token(&path));

        let session = PersistedSession {
            access_token: Some("tok".to_string()),
            last_route: Route::Home,
        };
        save(&path, &session).unwrap();
        assert!(has_session_token(&path));
    }

    #[test]
    fn corrupt_file_counts_as_no_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(!has_session_token(&path));
        assert!(load(&path).is_err());
    }

    #[test]
    fn clear_removes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let session = PersistedSession {
            access_token: Some("tok".to_string()),
            last_route: Route::Home,
        };
        save(&path, &session).unwrap();
        clear(&path).unwrap();
        assert!(!path.exists());
        // Clearing twice is fine.
        clear(&path).unwrap();
    }
}
