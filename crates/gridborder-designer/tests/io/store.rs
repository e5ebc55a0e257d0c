use gridborder_core::Color;
use gridborder_designer::model::LineKey;
use gridborder_designer::store::{DocumentStore, JsonFileStore, MemoryStore};
use gridborder_designer::Document;

#[test]
fn test_missing_file_loads_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("absent.json"));
    assert!(store.load().unwrap().is_none());
}

#[test]
fn test_json_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::new(dir.path().join("nested/state/diagram.json"));

    let mut doc = Document::new(8, 5).unwrap();
    doc.set_active_color(Color::rgb(10, 20, 30));
    doc.fill_column(3).unwrap();
    store.save(&doc.snapshot()).unwrap();

    let loaded = store.load().unwrap().unwrap();
    assert_eq!(loaded, doc.snapshot());
    assert!(store.path().exists());
}

#[test]
fn test_json_store_rejects_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("diagram.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();

    let store = JsonFileStore::new(&path);
    assert!(store.load().is_err());
}

#[test]
fn test_memory_store() {
    let mut store = MemoryStore::new();
    assert!(store.load().unwrap().is_none());

    let mut doc = Document::new(3, 3).unwrap();
    doc.add_line(LineKey::vertical(0, 0)).unwrap();
    store.save(&doc.snapshot()).unwrap();
    store.save(&doc.snapshot()).unwrap();

    assert_eq!(store.save_count(), 2);
    assert_eq!(store.load().unwrap(), Some(doc.snapshot()));
}
