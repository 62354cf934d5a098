//! File-backed credential storage.
//!
//! Sessions persist to a JSON file so the CLI survives restarts. Opening
//! the store probes the location with a throwaway write first; when the
//! probe fails, [`open_default_store`] degrades to in-memory storage so
//! a read-only home directory never blocks login.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use homelib_core::model::User;
use homelib_core::store::{CredentialStore, MemoryStore, StoredCredentials};
use homelib_core::tokens::{AccessToken, RefreshToken};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Stored session data.
#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    access_token: String,
    refresh_token: Option<String>,
    user: Option<User>,
}

/// Credential store backed by a JSON session file.
///
/// Reads are served from a write-through cache; every mutation rewrites
/// the file via a temp file and rename. Persistence failures are logged
/// and swallowed: the in-memory session stays the source of truth for the
/// process lifetime.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    cache: RwLock<Option<StoredCredentials>>,
}

impl FileStore {
    /// Open a store at `path`, probing writability and loading any
    /// persisted session.
    ///
    /// # Errors
    ///
    /// Fails when the parent directory cannot be created or the probe
    /// write fails. A corrupt session file is not an error; it is logged
    /// and ignored.
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        probe(&path)?;

        let cache = RwLock::new(load(&path));
        Ok(Self { path, cache })
    }

    /// The session file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, credentials: Option<&StoredCredentials>) {
        let result = match credentials {
            Some(credentials) => write_session(&self.path, credentials),
            None => remove_session(&self.path),
        };
        if let Err(err) = result {
            warn!(error = %err, path = %self.path.display(), "failed to persist session file");
        }
    }
}

impl CredentialStore for FileStore {
    fn credentials(&self) -> Option<StoredCredentials> {
        self.cache.read().unwrap().clone()
    }

    fn set_session(&self, credentials: StoredCredentials) {
        let mut cache = self.cache.write().unwrap();
        self.persist(Some(&credentials));
        *cache = Some(credentials);
    }

    fn set_tokens(&self, access: AccessToken, refresh: Option<RefreshToken>) {
        let mut cache = self.cache.write().unwrap();
        let user = cache.as_ref().and_then(|c| c.user.clone());
        let credentials = StoredCredentials {
            access_token: access,
            refresh_token: refresh,
            user,
        };
        self.persist(Some(&credentials));
        *cache = Some(credentials);
    }

    fn clear(&self) -> bool {
        let mut cache = self.cache.write().unwrap();
        let had_session = cache.take().is_some();
        if had_session {
            self.persist(None);
        }
        had_session
    }
}

/// Open the store at the platform default location, falling back to
/// in-memory storage when the location is unusable.
pub fn open_default_store() -> Arc<dyn CredentialStore> {
    let Some(path) = default_session_path() else {
        warn!("could not determine data directory, sessions will not persist");
        return Arc::new(MemoryStore::new());
    };

    match FileStore::open(&path) {
        Ok(store) => {
            debug!(path = %path.display(), "using session file");
            Arc::new(store)
        }
        Err(err) => {
            warn!(error = %err, path = %path.display(),
                "session storage unavailable, falling back to in-memory store");
            Arc::new(MemoryStore::new())
        }
    }
}

/// Default session file path.
pub fn default_session_path() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("", "", "homelib")?;
    Some(dirs.data_dir().join("session.json"))
}

/// Verify the location is writable with a throwaway file.
fn probe(path: &Path) -> io::Result<()> {
    let marker = path.with_extension("probe");
    fs::write(&marker, b"probe")?;
    fs::remove_file(&marker)
}

fn load(path: &Path) -> Option<StoredCredentials> {
    if !path.exists() {
        return None;
    }
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(err) => {
            warn!(error = %err, "could not read session file, starting unauthenticated");
            return None;
        }
    };
    let stored: StoredSession = match serde_json::from_str(&json) {
        Ok(stored) => stored,
        Err(err) => {
            warn!(error = %err, "invalid session file, starting unauthenticated");
            return None;
        }
    };
    Some(StoredCredentials {
        access_token: AccessToken::new(stored.access_token),
        refresh_token: stored.refresh_token.map(RefreshToken::new),
        user: stored.user,
    })
}

fn write_session(path: &Path, credentials: &StoredCredentials) -> io::Result<()> {
    let stored = StoredSession {
        access_token: credentials.access_token.as_str().to_string(),
        refresh_token: credentials
            .refresh_token
            .as_ref()
            .map(|t| t.as_str().to_string()),
        user: credentials.user.clone(),
    };
    let json = serde_json::to_string_pretty(&stored).map_err(io::Error::other)?;

    // Write to a sibling temp file, then rename over the target so readers
    // never observe a half-written session
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, &json)?;

    // Set restrictive permissions (Unix only)
    #[cfg(unix)]
    {
        let mut perms = fs::metadata(&tmp)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(&tmp, perms)?;
    }

    fs::rename(&tmp, path)
}

fn remove_session(path: &Path) -> io::Result<()> {
    if path.exists() {
        fs::remove_file(path)?;
    }
    Ok(())
}
