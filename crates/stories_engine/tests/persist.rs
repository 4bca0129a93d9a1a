use std::fs;

use stories_engine::{ensure_state_dir, AtomicFileWriter, KeyValueStore, MemoryKeyValueStore};
use tempfile::TempDir;

#[test]
fn creates_missing_state_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("state");
    assert!(!new_dir.exists());
    ensure_state_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn atomic_write_replaces_existing() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());

    let first = writer.write("store.ron", "hello").unwrap();
    assert_eq!(first.file_name().unwrap(), "store.ron");
    assert_eq!(fs::read_to_string(&first).unwrap(), "hello");

    let second = writer.write("store.ron", "world").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "world");
}

#[test]
fn write_into_file_path_fails_cleanly() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = AtomicFileWriter::new(file_path.clone());
    assert!(writer.write("store.ron", "data").is_err());
    assert!(!file_path.with_file_name("store.ron").exists());
}

#[test]
fn memory_store_reads_back_writes() {
    let mut store = MemoryKeyValueStore::new().with_entry("search", "Rust");
    assert_eq!(store.get("search").as_deref(), Some("Rust"));
    assert_eq!(store.get("other"), None);

    store.set("search", "Redux").unwrap();
    assert_eq!(store.get("search").as_deref(), Some("Redux"));
}
