//! File-backed session persistence.

use crate::error::{SessionError, SessionResult};
use crate::session::Session;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File name of the stored session inside the config directory.
pub const SESSION_FILE_NAME: &str = "session.json";

/// Stores the session as JSON at a fixed path.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// A store under the platform config directory (`<config>/procure/session.json`).
    pub fn default_location() -> SessionResult<Self> {
        let dir = dirs::config_dir().ok_or(SessionError::NoConfigDir)?;
        Ok(Self::new(dir.join("procure").join(SESSION_FILE_NAME)))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored session. Returns `Ok(None)` when nothing is stored.
    pub fn load(&self) -> SessionResult<Option<Session>> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let session = Session::from_json(&json).inspect_err(|e| {
            warn!("Unreadable session at {}: {}", self.path.display(), e);
        })?;
        debug!("Loaded session for user {}", session.user_id);
        Ok(Some(session))
    }

    /// Loads the session or fails with [`SessionError::NotLoggedIn`].
    pub fn require(&self) -> SessionResult<Session> {
        self.load()?.ok_or(SessionError::NotLoggedIn)
    }

    pub fn save(&self, session: &Session) -> SessionResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, json)?;
        debug!("Saved session for user {} to {}", session.user_id, self.path.display());
        Ok(())
    }

    /// Removes the stored session. Clearing an empty store is not an error.
    pub fn clear(&self) -> SessionResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("Cleared session at {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
