// src/core/token_store.rs
//! Credentials file standing in for the mobile keychain: save, load, clear.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredCredentials {
    pub access_token: String,
    pub refresh_token: String,
    /// Computed from `expires_in` at save time. Absent for sessions written
    /// by older builds; the JWT `exp` claim is the fallback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Persist a session, replacing whatever was stored before.
    pub fn save(&self, credentials: &StoredCredentials) -> Result<()> {
        let content = toml::to_string(credentials).context("Failed to encode credentials")?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write credentials: {}", self.path.display()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(&self.path, perms)
                .with_context(|| format!("Failed to restrict permissions: {}", self.path.display()))?;
        }

        Ok(())
    }

    /// Load the stored session. `None` means signed out; an unreadable or
    /// corrupt file is treated the same way rather than failing the command.
    pub fn load(&self) -> Option<StoredCredentials> {
        if !self.path.exists() {
            return None;
        }
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) => {
                warn!("Failed to read credentials file: {}", err);
                return None;
            }
        };
        match toml::from_str(&content) {
            Ok(credentials) => Some(credentials),
            Err(err) => {
                warn!("Ignoring corrupt credentials file: {}", err);
                None
            }
        }
    }

    /// Access token of the current session, if any.
    pub fn access_token(&self) -> Option<String> {
        self.load().map(|c| c.access_token)
    }

    /// Remove the stored session. Missing file is fine.
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err)
                .with_context(|| format!("Failed to remove credentials: {}", self.path.display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> TokenStore {
        let dir = std::env::temp_dir()
            .join("jobtrack-tests")
            .join(format!("{}-{}", name, std::process::id()));
        TokenStore::new(dir.join("credentials.toml"))
    }

    #[test]
    fn test_save_load_clear_round_trip() {
        let store = temp_store("round-trip");
        let credentials = StoredCredentials {
            access_token: "access-abc".into(),
            refresh_token: "refresh-def".into(),
            expires_at: Some(Utc::now()),
        };

        store.save(&credentials).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded.access_token, "access-abc");
        assert_eq!(loaded.refresh_token, "refresh-def");
        assert!(loaded.expires_at.is_some());

        store.clear().unwrap();
        assert!(store.load().is_none());
        // Clearing twice must not fail.
        store.clear().unwrap();
    }

    #[test]
    fn test_missing_file_means_signed_out() {
        let store = temp_store("missing");
        assert!(store.load().is_none());
        assert!(store.access_token().is_none());
    }

    #[test]
    fn test_corrupt_file_is_ignored() {
        let store = temp_store("corrupt");
        store
            .save(&StoredCredentials {
                access_token: "a".into(),
                refresh_token: "r".into(),
                expires_at: None,
            })
            .unwrap();
        std::fs::write(store.path.clone(), "not = [valid").unwrap();
        assert!(store.load().is_none());
        store.clear().unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_credentials_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let store = temp_store("perms");
        store
            .save(&StoredCredentials {
                access_token: "a".into(),
                refresh_token: "r".into(),
                expires_at: None,
            })
            .unwrap();

        let mode = std::fs::metadata(&store.path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        store.clear().unwrap();
    }
}
