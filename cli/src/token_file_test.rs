use super::*;

#[test]
fn missing_file_means_no_token() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileTokenStore::new(dir.path().join("token"));
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn store_creates_parent_dirs_and_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileTokenStore::new(dir.path().join("nested/deeper/token"));
    store.store("abc").unwrap();
    assert_eq!(store.load().unwrap().as_deref(), Some("abc"));
}

#[test]
fn clear_leaves_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileTokenStore::new(dir.path().join("token"));
    store.store("abc").unwrap();
    store.clear().unwrap();
    assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "");
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn trailing_newline_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("token");
    std::fs::write(&path, "abc\n").unwrap();
    assert_eq!(FileTokenStore::new(path).load().unwrap().as_deref(), Some("abc"));
}

#[test]
fn unreadable_path_is_storage_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileTokenStore::new(dir.path());
    assert!(matches!(store.load(), Err(ApiError::Storage(_))));
}
