//! Credential store
//!
//! A flat JSON object mapping account identifiers to stored secrets. Every
//! operation reads the whole file and every write replaces the whole file, so
//! the file is always the source of truth.

use crate::config::SecretPolicy;
use crate::{Result, StathleteError};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub mod secret;

/// Identifier → stored secret
pub type Accounts = BTreeMap<String, String>;

/// JSON-file backed credential store
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
    policy: SecretPolicy,
}

impl CredentialStore {
    /// Create a store over `path` using plaintext secrets
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            policy: SecretPolicy::Plaintext,
        }
    }

    /// Set the policy used for newly registered secrets and for verification
    pub fn with_policy(mut self, policy: SecretPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Active secret policy
    pub fn policy(&self) -> SecretPolicy {
        self.policy
    }

    /// Load all accounts
    ///
    /// A missing file is initialized to `{}` on disk and yields an empty map.
    pub fn load(&self) -> Result<Accounts> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "Initializing empty credential store");
            let accounts = Accounts::new();
            self.save(&accounts)?;
            return Ok(accounts);
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| self.unavailable(format!("failed to read: {}", e)))?;

        let accounts: Accounts = serde_json::from_str(&content)
            .map_err(|e| self.unavailable(format!("failed to parse: {}", e)))?;

        debug!(path = %self.path.display(), accounts = accounts.len(), "Loaded credential store");
        Ok(accounts)
    }

    /// Replace the store contents with `accounts`
    ///
    /// The file is written next to the target and renamed over it, so a reader
    /// sees either the old or the new contents.
    pub fn save(&self, accounts: &Accounts) -> Result<()> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        fs::create_dir_all(&parent).map_err(|e| {
            self.unavailable(format!("failed to create directory {}: {}", parent.display(), e))
        })?;

        let content = serde_json::to_string(accounts)
            .map_err(|e| self.unavailable(format!("failed to serialize: {}", e)))?;

        let mut temp_file = tempfile::NamedTempFile::new_in(&parent)
            .map_err(|e| self.unavailable(format!("failed to create temporary file: {}", e)))?;
        temp_file
            .write_all(content.as_bytes())
            .map_err(|e| self.unavailable(format!("failed to write: {}", e)))?;
        temp_file
            .persist(&self.path)
            .map_err(|e| self.unavailable(format!("failed to replace: {}", e.error)))?;

        debug!(path = %self.path.display(), accounts = accounts.len(), "Saved credential store");
        Ok(())
    }

    /// Register a new account
    pub fn register(&self, identifier: &str, secret: &str) -> Result<()> {
        let mut accounts = self.load()?;
        if accounts.contains_key(identifier) {
            return Err(StathleteError::AlreadyExists(identifier.to_string()));
        }

        accounts.insert(identifier.to_string(), secret::seal(self.policy, secret));
        self.save(&accounts)?;

        info!(identifier, policy = self.policy.description(), "Registered account");
        Ok(())
    }

    /// Check an identifier/secret pair
    pub fn authenticate(&self, identifier: &str, secret: &str) -> Result<bool> {
        let accounts = self.load()?;
        let matched = accounts
            .get(identifier)
            .is_some_and(|stored| secret::verify(self.policy, stored, secret));

        debug!(identifier, matched, "Authentication attempt");
        Ok(matched)
    }

    /// Whether an identifier is registered
    pub fn contains(&self, identifier: &str) -> Result<bool> {
        Ok(self.load()?.contains_key(identifier))
    }

    /// Number of registered accounts
    pub fn len(&self) -> Result<usize> {
        Ok(self.load()?.len())
    }

    /// Whether no accounts are registered
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    fn unavailable(&self, reason: String) -> StathleteError {
        StathleteError::StorageUnavailable {
            path: self.path.clone(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_store(temp_dir: &TempDir) -> CredentialStore {
        CredentialStore::new(temp_dir.path().join("users.json"))
    }

    #[test]
    fn test_first_load_creates_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        assert!(!store.path().exists());
        let accounts = store.load().unwrap();
        assert!(accounts.is_empty());

        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, "{}");
    }

    #[test]
    fn test_load_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let store = CredentialStore::new(temp_dir.path().join("a").join("b").join("users.json"));
        assert!(store.load().unwrap().is_empty());
        assert!(store.path().exists());
    }

    #[test]
    fn test_register_and_authenticate() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        store.register("alice", "pw1").unwrap();
        assert!(store.authenticate("alice", "pw1").unwrap());
        assert!(!store.authenticate("alice", "wrong").unwrap());
        assert!(!store.authenticate("Alice", "pw1").unwrap());
        assert!(!store.authenticate("bob", "pw1").unwrap());
    }

    #[test]
    fn test_duplicate_register_keeps_original_secret() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        store.register("alice", "pw1").unwrap();
        let err = store.register("alice", "pw2").unwrap_err();
        assert!(matches!(err, StathleteError::AlreadyExists(ref id) if id == "alice"));

        assert_eq!(store.load().unwrap().get("alice").map(String::as_str), Some("pw1"));
        assert!(store.authenticate("alice", "pw1").unwrap());
        assert!(!store.authenticate("alice", "pw2").unwrap());
    }

    #[test]
    fn test_file_format_is_flat_object() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        store.register("alice", "pw1").unwrap();
        store.register("bob", "hunter2").unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value, serde_json::json!({ "alice": "pw1", "bob": "hunter2" }));
    }

    #[test]
    fn test_reads_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);
        fs::write(store.path(), r#"{"carol": "s3cret"}"#).unwrap();

        assert!(store.authenticate("carol", "s3cret").unwrap());
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_corrupt_file_is_unavailable() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);
        fs::write(store.path(), "not json").unwrap();

        assert!(matches!(store.load(), Err(StathleteError::StorageUnavailable { .. })));
        assert!(matches!(
            store.authenticate("alice", "pw1"),
            Err(StathleteError::StorageUnavailable { .. })
        ));
        assert!(matches!(
            store.register("alice", "pw1"),
            Err(StathleteError::StorageUnavailable { .. })
        ));
        // The corrupt file is left as it was.
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "not json");
    }

    #[test]
    fn test_wrong_shape_is_unavailable() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);
        fs::write(store.path(), r#"{"alice": 42}"#).unwrap();

        assert!(matches!(store.load(), Err(StathleteError::StorageUnavailable { .. })));
    }

    #[test]
    fn test_salted_policy_never_stores_plaintext() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir).with_policy(SecretPolicy::SaltedSha256);

        store.register("alice", "pw1").unwrap();
        let stored = store.load().unwrap()["alice"].clone();
        assert_ne!(stored, "pw1");
        assert!(secret::is_sealed(&stored));

        assert!(store.authenticate("alice", "pw1").unwrap());
        assert!(!store.authenticate("alice", "pw2").unwrap());
    }

    #[test]
    fn test_count_and_contains() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        assert!(store.is_empty().unwrap());
        store.register("alice", "pw1").unwrap();
        store.register("bob", "pw2").unwrap();
        assert_eq!(store.len().unwrap(), 2);
        assert!(store.contains("bob").unwrap());
        assert!(!store.contains("carol").unwrap());
    }
}
