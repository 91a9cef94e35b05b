use crate::error::ClientError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

/// Durable counterpart of the in-memory session: the token and its
/// expiry, written on every successful auth operation and removed on
/// logout or auth failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersistedSession {
    pub token: String,
    pub token_expiry: DateTime<Utc>,
}

/// Storage for the persisted session.
pub trait TokenStorage: Send + Sync {
    fn load(&self) -> Result<Option<PersistedSession>, ClientError>;
    fn store(&self, session: &PersistedSession) -> Result<(), ClientError>;
    fn clear(&self) -> Result<(), ClientError>;
}

/// Stores the session as a JSON document in the user's data directory.
#[derive(Debug)]
pub struct FileTokenStorage {
    path: PathBuf,
}

impl FileTokenStorage {
    pub fn new() -> Self {
        let path = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cargonaut")
            .join("session.json");
        Self { path }
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Default for FileTokenStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStorage for FileTokenStorage {
    fn load(&self) -> Result<Option<PersistedSession>, ClientError> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        // A corrupt document is treated as no session.
        Ok(serde_json::from_slice(&data).ok())
    }

    fn store(&self, session: &PersistedSession) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec(session)?;
        fs::write(&self.path, data)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), ClientError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// In-memory storage for embedders which do not want sessions on disk.
#[derive(Debug, Default)]
pub struct MemoryTokenStorage {
    session: Mutex<Option<PersistedSession>>,
}

impl MemoryTokenStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn load(&self) -> Result<Option<PersistedSession>, ClientError> {
        Ok(self.session.lock().unwrap().clone())
    }

    fn store(&self, session: &PersistedSession) -> Result<(), ClientError> {
        *self.session.lock().unwrap() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), ClientError> {
        *self.session.lock().unwrap() = None;
        Ok(())
    }
}
