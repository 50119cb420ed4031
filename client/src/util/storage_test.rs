use super::*;

#[test]
fn memory_storage_clones_share_entries() {
    let storage = MemoryStorage::new();
    let reloaded = storage.clone();
    storage.set("k", "v").unwrap();
    assert_eq!(reloaded.get("k"), Some("v".to_owned()));
}

#[test]
fn memory_storage_missing_key_is_none() {
    assert_eq!(MemoryStorage::new().get("missing"), None);
}

#[test]
fn load_json_reads_saved_value() {
    let storage = MemoryStorage::new();
    save_json(&storage, "nums", &vec![1, 2, 3]).unwrap();
    assert_eq!(load_json::<Vec<i32>>(&storage, "nums"), Some(vec![1, 2, 3]));
}

#[test]
fn load_json_malformed_value_is_none() {
    let storage = MemoryStorage::new();
    storage.set("nums", "{not json").unwrap();
    assert_eq!(load_json::<Vec<i32>>(&storage, "nums"), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_storage_is_inert_natively() {
    let storage = BrowserStorage;
    assert_eq!(storage.get("account"), None);
    assert_eq!(storage.set("account", "{}"), Err(StorageError::Unavailable));
}
