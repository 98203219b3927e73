use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Session file name in the data directory
const SESSION_FILE: &str = "session.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredSession {
    token: String,
    saved_at: DateTime<Utc>,
}

/// File-backed store for the session token.
///
/// Exactly one token is tracked per installation, under a fixed file name
/// with no per-user namespacing - concurrent sessions for different users on
/// the same machine are not supported. Reads serve a value cached at open
/// time; writes go through to disk synchronously so the token survives a
/// restart.
///
/// There is no way to clear a stored token. A new login overwrites the
/// previous one, and an expired token is discovered only when the server
/// rejects it.
pub struct SessionStore {
    data_dir: PathBuf,
    current: Option<StoredSession>,
}

impl SessionStore {
    /// Open the store, loading a previously saved token if one exists.
    /// A corrupt session file is logged and treated as no session.
    pub fn open(data_dir: PathBuf) -> Result<Self> {
        let path = data_dir.join(SESSION_FILE);
        let current = if path.exists() {
            let contents =
                std::fs::read_to_string(&path).context("Failed to read session file")?;
            match serde_json::from_str::<StoredSession>(&contents) {
                Ok(stored) => Some(stored),
                Err(e) => {
                    warn!(error = %e, "Ignoring unreadable session file");
                    None
                }
            }
        } else {
            None
        };

        Ok(Self { data_dir, current })
    }

    /// The stored token, or `None` if no login has ever succeeded here.
    pub fn token(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.token.as_str())
    }

    /// When the current token was stored. Diagnostic only - the client
    /// derives no expiry from this.
    pub fn saved_at(&self) -> Option<DateTime<Utc>> {
        self.current.as_ref().map(|s| s.saved_at)
    }

    /// Persist a new token, replacing any previous one. The in-memory value
    /// is only updated once the file write has succeeded.
    pub fn set_token(&mut self, token: String) -> Result<()> {
        let stored = StoredSession {
            token,
            saved_at: Utc::now(),
        };

        let path = self.session_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&stored)?;
        std::fs::write(&path, contents).context("Failed to write session file")?;

        self.current = Some(stored);
        Ok(())
    }

    fn session_path(&self) -> PathBuf {
        self.data_dir.join(SESSION_FILE)
    }
}
