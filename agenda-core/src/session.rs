//! Session persistence for the authenticated user.
//!
//! The session (token, user id, display name) is stored as a TOML file
//! under the platform config directory. A session is either fully present
//! or fully absent: a file missing any of the three fields loads as no
//! session at all, so gating decisions never see a half-written state.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{AgendaError, AgendaResult};

/// An authenticated session bound to a server token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user_id: i64,
    pub name: String,
}

/// On-disk form of the session. Fields are optional so a partial file
/// loads as "no session" instead of failing the gate halfway.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredSession {
    token: Option<String>,
    user_id: Option<i64>,
    name: Option<String>,
}

/// File-backed store for the current session.
///
/// Owned by the composition root and passed explicitly to whatever needs
/// it; there is no ambient/global session state.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// A store backed by an explicit file path (used by tests).
    pub fn at(path: impl Into<PathBuf>) -> Self {
        SessionStore { path: path.into() }
    }

    /// A store at the platform default location
    /// (`<config dir>/agenda/session.toml`).
    pub fn open_default() -> AgendaResult<Self> {
        let dir = dirs::config_dir().ok_or_else(|| {
            AgendaError::Io(std::io::Error::other(
                "Could not determine config directory",
            ))
        })?;
        Ok(SessionStore {
            path: dir.join("agenda").join("session.toml"),
        })
    }

    /// Persist `session`, replacing whatever was stored before.
    pub fn save(&self, session: &Session) -> AgendaResult<()> {
        let stored = StoredSession {
            token: Some(session.token.clone()),
            user_id: Some(session.user_id),
            name: Some(session.name.clone()),
        };
        let contents = toml::to_string(&stored)
            .map_err(|e| AgendaError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, contents)?;

        Ok(())
    }

    /// The stored session, or `None` if the file is missing, unreadable,
    /// unparsable, or incomplete.
    pub fn current(&self) -> Option<Session> {
        let contents = std::fs::read_to_string(&self.path).ok()?;
        let stored: StoredSession = toml::from_str(&contents).ok()?;

        match (stored.token, stored.user_id, stored.name) {
            (Some(token), Some(user_id), Some(name)) => Some(Session {
                token,
                user_id,
                name,
            }),
            _ => None,
        }
    }

    /// Remove the stored session. Removing an absent session is fine.
    pub fn clear(&self) -> AgendaResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Session guard: the stored session, or [`AgendaError::SessionRequired`].
    ///
    /// A missing session is not transient, so there is nothing to retry;
    /// callers send the user to `agenda login`.
    pub fn require(&self) -> AgendaResult<Session> {
        self.current().ok_or(AgendaError::SessionRequired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> SessionStore {
        SessionStore::at(dir.path().join("session.toml"))
    }

    fn make_session() -> Session {
        Session {
            token: "tok-123".to_string(),
            user_id: 1,
            name: "Test User".to_string(),
        }
    }

    #[test]
    fn test_save_then_current_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save(&make_session()).unwrap();

        assert_eq!(store.current(), Some(make_session()));
    }

    #[test]
    fn test_current_is_none_without_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert_eq!(store.current(), None);
    }

    #[test]
    fn test_partial_file_loads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.toml");
        std::fs::write(&path, "token = \"tok-123\"\nuser_id = 1\n").unwrap();

        let store = SessionStore::at(&path);

        assert_eq!(store.current(), None);
    }

    #[test]
    fn test_garbage_file_loads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.toml");
        std::fs::write(&path, "not toml at all {{{").unwrap();

        assert_eq!(SessionStore::at(&path).current(), None);
    }

    #[test]
    fn test_clear_removes_the_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save(&make_session()).unwrap();
        store.clear().unwrap();

        assert_eq!(store.current(), None);
    }

    #[test]
    fn test_clear_on_empty_store_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert!(store.clear().is_ok());
    }

    #[test]
    fn test_require_gates_on_presence() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert!(matches!(
            store.require(),
            Err(AgendaError::SessionRequired)
        ));

        store.save(&make_session()).unwrap();
        assert_eq!(store.require().unwrap(), make_session());
    }
}
