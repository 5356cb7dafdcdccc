//! Session context holding the bearer token.
//!
//! The original front end kept its token in ambient browser storage; here
//! the session is an explicit object owned by the client. The token lives
//! in a plain file under the XDG data directory
//! (`$XDG_DATA_HOME/fieldwork/session`), is loaded once when the client
//! is built, and is discarded when the backend answers 401 — the
//! command-line analog of a forced logout.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use log::{debug, warn};

use crate::error::{ApiError, Result};

/// Bearer-token session state shared by all requests of one client.
pub struct Session {
    token: RwLock<Option<String>>,
    store: Option<PathBuf>,
}

impl Session {
    /// Create a session from an explicitly supplied token.
    ///
    /// Nothing is persisted: tokens passed on the command line or via the
    /// environment stay in memory only.
    pub fn with_token(token: String) -> Self {
        Self {
            token: RwLock::new(Some(token)),
            store: None,
        }
    }

    /// Load the session from a token file, falling back to the XDG data
    /// directory when no path is given. A missing file means logged out.
    pub fn load(store: Option<PathBuf>) -> Result<Self> {
        let path = match store {
            Some(path) => path,
            None => default_store_path()?,
        };

        let token = match fs::read_to_string(&path) {
            Ok(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            Err(error) if error.kind() == ErrorKind::NotFound => None,
            Err(error) => {
                return Err(ApiError::SessionStore {
                    path,
                    source: error,
                })
            }
        };

        Ok(Self {
            token: RwLock::new(token),
            store: Some(path),
        })
    }

    /// Current token, if the session is authenticated.
    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether the session currently holds a token.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Path of the backing token file, when the session is persisted.
    pub fn store_path(&self) -> Option<&Path> {
        self.store.as_deref()
    }

    /// Adopt a token and persist it to the session file.
    pub fn remember(&self, token: &str) -> Result<()> {
        if let Some(path) = &self.store {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|error| ApiError::SessionStore {
                    path: parent.to_path_buf(),
                    source: error,
                })?;
            }
            fs::write(path, token).map_err(|error| ApiError::SessionStore {
                path: path.clone(),
                source: error,
            })?;
            debug!("Session token stored at {}", path.display());
        }

        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
        Ok(())
    }

    /// Drop the token, in memory and on disk.
    ///
    /// Invoked by the client when the backend answers 401; removal
    /// failures are logged rather than propagated because the request
    /// that triggered the logout already carries the interesting error.
    pub fn forget(&self) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;

        if let Some(path) = &self.store {
            match fs::remove_file(path) {
                Ok(()) => debug!("Session token removed from {}", path.display()),
                Err(error) if error.kind() == ErrorKind::NotFound => {}
                Err(error) => warn!(
                    "Failed to remove session token at {}: {error}",
                    path.display()
                ),
            }
        }
    }
}

/// Returns the default session file path following the XDG Base
/// Directory specification.
fn default_store_path() -> Result<PathBuf> {
    xdg::BaseDirectories::with_prefix("fieldwork")
        .place_data_file("session")
        .map_err(|e| ApiError::XdgDirectory(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_means_logged_out() {
        let dir = tempfile::tempdir().expect("temp dir");
        let session = Session::load(Some(dir.path().join("session"))).expect("loadable");
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_remember_then_load_round_trips() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("session");

        let session = Session::load(Some(path.clone())).expect("loadable");
        session.remember("tok-123").expect("persistable");
        assert!(session.is_authenticated());

        let reloaded = Session::load(Some(path)).expect("loadable");
        assert_eq!(reloaded.token(), Some("tok-123".to_string()));
    }

    #[test]
    fn test_forget_clears_memory_and_disk() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("session");

        let session = Session::load(Some(path.clone())).expect("loadable");
        session.remember("tok-123").expect("persistable");
        session.forget();

        assert!(!session.is_authenticated());
        assert!(!path.exists());
    }

    #[test]
    fn test_explicit_token_is_not_persisted() {
        let session = Session::with_token("tok-direct".to_string());
        assert_eq!(session.store_path(), None);
        session.remember("tok-other").expect("in-memory update");
        assert_eq!(session.token(), Some("tok-other".to_string()));
    }

    #[test]
    fn test_blank_file_means_logged_out() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("session");
        fs::write(&path, "  \n").expect("writable");

        let session = Session::load(Some(path)).expect("loadable");
        assert!(!session.is_authenticated());
    }
}
