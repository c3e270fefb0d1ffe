//! Credential store properties exercised through the public API

use stathlete::config::SecretPolicy;
use stathlete::store::{Accounts, CredentialStore};
use stathlete::StathleteError;
use std::fs;
use tempfile::TempDir;

fn store_in(temp_dir: &TempDir) -> CredentialStore {
    CredentialStore::new(temp_dir.path().join("users.json"))
}

#[test]
fn test_load_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(&temp_dir);
    store.register("alice", "pw1").unwrap();

    let first = store.load().unwrap();
    let second = store.load().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_save_then_load_round_trips() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(&temp_dir);

    let mut accounts = Accounts::new();
    accounts.insert("alice".into(), "pw1".into());
    accounts.insert("Alice".into(), "different".into());
    accounts.insert("émilie@example.com".into(), "p\"w\\d".into());
    accounts.insert("".into(), "".into());

    store.save(&accounts).unwrap();
    assert_eq!(store.load().unwrap(), accounts);

    store.save(&Accounts::new()).unwrap();
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_second_register_fails_and_keeps_secret() {
    for policy in [SecretPolicy::Plaintext, SecretPolicy::SaltedSha256] {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir).with_policy(policy);

        store.register("alice", "pw1").unwrap();
        let stored_before = store.load().unwrap()["alice"].clone();

        assert!(matches!(
            store.register("alice", "pw2"),
            Err(StathleteError::AlreadyExists(_))
        ));
        assert_eq!(store.load().unwrap()["alice"], stored_before);
    }
}

#[test]
fn test_authenticate_requires_exact_secret() {
    for policy in [SecretPolicy::Plaintext, SecretPolicy::SaltedSha256] {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir).with_policy(policy);
        store.register("alice", "pw1").unwrap();

        assert!(store.authenticate("alice", "pw1").unwrap());
        for wrong in ["pw2", "PW1", "pw1 ", " pw1", ""] {
            assert!(!store.authenticate("alice", wrong).unwrap(), "{policy:?} accepted {wrong:?}");
        }
        assert!(!store.authenticate("alice ", "pw1").unwrap());
        assert!(!store.authenticate("nobody", "pw1").unwrap());
    }
}

#[test]
fn test_each_operation_reads_the_file() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(&temp_dir);
    store.register("alice", "pw1").unwrap();

    // An external edit is visible to the next call
    fs::write(store.path(), r#"{"alice":"changed"}"#).unwrap();
    assert!(!store.authenticate("alice", "pw1").unwrap());
    assert!(store.authenticate("alice", "changed").unwrap());
}

#[test]
fn test_save_leaves_no_temporary_files() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(&temp_dir);
    for i in 0..5 {
        store.register(&format!("user{i}"), "pw").unwrap();
    }

    let entries: Vec<_> = fs::read_dir(temp_dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(store.len().unwrap(), 5);
}

#[test]
fn test_unreadable_location_is_unavailable() {
    let temp_dir = TempDir::new().unwrap();
    // The store path is a directory, so it can be neither read nor replaced
    let store = CredentialStore::new(temp_dir.path());

    assert!(matches!(store.load(), Err(StathleteError::StorageUnavailable { .. })));
    assert!(matches!(
        store.register("alice", "pw1"),
        Err(StathleteError::StorageUnavailable { .. })
    ));
}
