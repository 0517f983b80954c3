use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{read_optional, write_atomic};
use crate::error::CoreError;
use crate::model::Credential;

/// On-disk shape, identical to the bridge's pairing success entry:
/// `{"success":{"username":"..."}}`.
#[derive(Serialize, Deserialize)]
struct CredentialFile {
    success: CredentialFileInner,
}

#[derive(Serialize, Deserialize)]
struct CredentialFileInner {
    username: String,
}

/// Persists the single paired-bridge credential.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored credential. `Ok(None)` if nothing has been paired yet.
    pub fn load(&self) -> Result<Option<Credential>, CoreError> {
        let Some(contents) = read_optional(&self.path)? else {
            debug!(path = %self.path.display(), "no stored credential");
            return Ok(None);
        };

        let file: CredentialFile = serde_json::from_str(&contents)
            .map_err(|e| CoreError::storage(&self.path, format!("invalid credential file: {e}")))?;

        if file.success.username.is_empty() {
            return Err(CoreError::storage(&self.path, "credential file has an empty username"));
        }

        debug!(path = %self.path.display(), "loaded stored credential");
        Ok(Some(Credential::new(file.success.username)))
    }

    /// Persist a credential, replacing any previous one.
    pub fn save(&self, credential: &Credential) -> Result<(), CoreError> {
        let file = CredentialFile {
            success: CredentialFileInner {
                username: credential.username().to_owned(),
            },
        };
        let json = serde_json::to_string_pretty(&file)
            .map_err(|e| CoreError::storage(&self.path, e))?;

        write_atomic(&self.path, &json)?;
        info!(path = %self.path.display(), "stored bridge credential");
        Ok(())
    }

    /// Delete the stored credential. Returns `false` if there was none.
    pub fn clear(&self) -> Result<bool, CoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                info!(path = %self.path.display(), "removed stored credential");
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(CoreError::storage(&self.path, e)),
        }
    }
}
