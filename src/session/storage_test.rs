use super::*;

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_get_missing_is_none() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get("auth_token").unwrap(), None);
}

#[test]
fn memory_set_then_get() {
    let storage = MemoryStorage::new();
    storage.set("auth_token", "abc").unwrap();
    assert_eq!(storage.get("auth_token").unwrap().as_deref(), Some("abc"));
}

#[test]
fn memory_set_overwrites() {
    let storage = MemoryStorage::new();
    storage.set("k", "one").unwrap();
    storage.set("k", "two").unwrap();
    assert_eq!(storage.get("k").unwrap().as_deref(), Some("two"));
}

#[test]
fn memory_remove_deletes_only_that_key() {
    let storage = MemoryStorage::new();
    storage.set("a", "1").unwrap();
    storage.set("b", "2").unwrap();
    storage.remove("a").unwrap();
    assert_eq!(storage.get("a").unwrap(), None);
    assert_eq!(storage.get("b").unwrap().as_deref(), Some("2"));
}

// =============================================================
// FileStorage
// =============================================================

#[test]
fn file_missing_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path().join("session.json"));
    assert_eq!(storage.get("auth_token").unwrap(), None);
}

#[test]
fn file_persists_across_instances() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("session.json");

    FileStorage::new(&path).set("auth_token", "tok-1").unwrap();

    let reopened = FileStorage::new(&path);
    assert_eq!(reopened.get("auth_token").unwrap().as_deref(), Some("tok-1"));
}

#[test]
fn file_remove_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    let storage = FileStorage::new(&path);
    storage.set("auth_token", "tok").unwrap();
    storage.set("auth_user", "{}").unwrap();
    storage.remove("auth_token").unwrap();

    let reopened = FileStorage::new(&path);
    assert_eq!(reopened.get("auth_token").unwrap(), None);
    assert_eq!(reopened.get("auth_user").unwrap().as_deref(), Some("{}"));
}

#[test]
fn file_remove_missing_key_is_noop() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    let storage = FileStorage::new(&path);
    storage.remove("auth_token").unwrap();
    assert!(!path.exists());
}

#[test]
fn file_corrupt_reads_as_empty_and_recovers_on_write() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "{not json").unwrap();

    let storage = FileStorage::new(&path);
    assert_eq!(storage.get("auth_token").unwrap(), None);

    storage.set("auth_token", "fresh").unwrap();
    assert_eq!(storage.get("auth_token").unwrap().as_deref(), Some("fresh"));
}

#[test]
fn file_leaves_no_temp_file_behind() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    FileStorage::new(&path).set("auth_token", "t").unwrap();
    assert!(path.exists());
    assert!(!dir.path().join("session.json.tmp").exists());
}
