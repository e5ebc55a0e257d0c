use gridborder_core::{Color, DocumentError};
use gridborder_designer::model::{HighlightKind, LineKey};
use gridborder_designer::serialization::{export_json, import_json, parse, DocumentFile};
use gridborder_designer::Document;

fn sample_document() -> Document {
    let mut doc = Document::new(6, 4).unwrap();
    doc.set_active_color(Color::rgb(0x12, 0x34, 0x56));
    doc.add_line(LineKey::horizontal(1, 2)).unwrap();
    doc.add_line(LineKey::vertical(6, 3)).unwrap();
    doc.apply_highlight(HighlightKind::Row, 1, Color::rgb(255, 0, 0))
        .unwrap();
    doc
}

#[test]
fn test_export_then_import_restores_document() {
    let doc = sample_document();
    let json = doc.export_json().unwrap();

    let mut restored = Document::new(2, 2).unwrap();
    restored.import_json(&json).unwrap();
    assert_eq!(restored.snapshot(), doc.snapshot());
}

#[test]
fn test_export_uses_documented_field_names() {
    let json = export_json(&sample_document().snapshot()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["version"], 1);
    assert_eq!(value["width"], 6);
    assert_eq!(value["currentColor"], "#123456");
    assert_eq!(value["lines"]["1,2,h"]["type"], "horizontal");
    assert_eq!(value["lines"]["6,3,v"]["x"], 6);
    assert_eq!(value["highlights"][0]["type"], "row");
}

#[test]
fn test_import_minimal_document() {
    let snapshot = import_json(r#"{"width": 3, "height": 2, "lines": {}}"#).unwrap();
    assert_eq!((snapshot.width(), snapshot.height()), (3, 2));
    assert!(snapshot.lines().is_empty());
    assert_eq!(snapshot.active_color(), Color::BLACK);
}

#[test]
fn test_import_rejects_bad_dimensions() {
    let err = import_json(r#"{"width": 0, "height": 2, "lines": {}}"#).unwrap_err();
    assert_eq!(err, DocumentError::invalid("width must be >= 1"));

    let err = import_json(r#"{"width": 2, "height": -1, "lines": {}}"#).unwrap_err();
    assert_eq!(err, DocumentError::invalid("height must be >= 1"));
}

#[test]
fn test_import_rejects_non_object_lines() {
    let err = import_json(r#"{"width": 2, "height": 2, "lines": []}"#).unwrap_err();
    assert_eq!(err, DocumentError::invalid("lines must be an object"));
}

#[test]
fn test_import_rejects_newer_version() {
    let err = import_json(r#"{"version": 9, "width": 2, "height": 2, "lines": {}}"#).unwrap_err();
    assert_eq!(err, DocumentError::UnsupportedVersion { version: 9 });
}

#[test]
fn test_import_rejects_bad_color() {
    let err = import_json(r#"{"width": 2, "height": 2, "lines": {}, "currentColor": "teal"}"#)
        .unwrap_err();
    assert_eq!(
        err,
        DocumentError::InvalidColor {
            value: "teal".to_string()
        }
    );
}

#[test]
fn test_import_drops_out_of_bounds_entries() {
    let text = r##"{
        "width": 2,
        "height": 2,
        "lines": {
            "0,0,h": {"x": 0, "y": 0, "type": "horizontal", "color": "#000000"},
            "5,0,h": {"x": 5, "y": 0, "type": "horizontal", "color": "#000000"}
        },
        "highlights": [
            {"type": "col", "index": 1, "color": "#00ff00", "timestamp": 10},
            {"type": "row", "index": 7, "color": "#00ff00", "timestamp": 11}
        ]
    }"##;
    let snapshot = import_json(text).unwrap();
    assert_eq!(snapshot.lines().len(), 1);
    assert_eq!(snapshot.highlights().len(), 1);
}

#[test]
fn test_failed_import_leaves_document_untouched() {
    let mut doc = sample_document();
    let before = doc.snapshot();
    let revision = doc.revision();

    assert!(doc.import_json("{ not json").is_err());
    assert!(doc.import_json(r#"{"width": 0, "height": 1, "lines": {}}"#).is_err());
    assert_eq!(doc.snapshot(), before);
    assert_eq!(doc.revision(), revision);
}

#[test]
fn test_document_file_round_trip_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("diagram.json");

    let file = DocumentFile::from_snapshot(&sample_document().snapshot());
    file.save_to_file(&path).unwrap();
    let loaded = DocumentFile::load_from_file(&path).unwrap();
    assert_eq!(loaded, file);
}

#[test]
fn test_parse_reports_broken_line_entry() {
    let err = parse(r#"{"width": 2, "height": 2, "lines": {"0,0,h": {"x": 0}}}"#).unwrap_err();
    match err {
        DocumentError::InvalidDocument { reason } => assert!(reason.starts_with("line '0,0,h'")),
        other => panic!("unexpected error {other:?}"),
    }
}
