use inscribe_core::{Label, Note, Priority, Shelf, Snapshot, Tag};
use uuid::Uuid;

#[test]
fn note_serialization_uses_backend_wire_fields() {
    let note_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let label = Label::with_id(
        Uuid::parse_str("66666666-7777-4888-8999-aaaaaaaaaaaa").unwrap(),
        "work",
    );
    let mut note = Note::with_id(note_id, "Standup", "daily sync", 1_700_000_000_000)
        .with_priority(Priority::High)
        .with_tags([Tag::from(&label)])
        .with_updated_at(1_700_000_360_000);
    note.trashed_from = Some(Shelf::Archives);

    let json = serde_json::to_value(&note).unwrap();
    assert_eq!(json["id"], note_id.to_string());
    assert_eq!(json["content"], "daily sync");
    assert_eq!(json["priority"], "high");
    assert_eq!(json["createdAt"], 1_700_000_000_000_i64);
    assert_eq!(json["updatedAt"], 1_700_000_360_000_i64);
    assert_eq!(json["tags"][0]["label"], "work");
    assert_eq!(json["trashedFrom"], "archives");
    assert!(json.get("color").is_none());

    let decoded: Note = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, note);
}

#[test]
fn missing_optional_fields_use_defaults() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "title": "bare",
        "content": "",
        "createdAt": 5,
        "updatedAt": 6
    });
    let note: Note = serde_json::from_value(value).unwrap();
    assert_eq!(note.priority, Priority::None);
    assert!(note.tags.is_empty());
    assert!(note.trashed_from.is_none());
    assert!(note.color.is_none());
}

#[test]
fn unknown_priority_is_rejected() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "title": "x",
        "content": "",
        "priority": "urgent",
        "createdAt": 1,
        "updatedAt": 1
    });
    assert!(serde_json::from_value::<Note>(value).is_err());
}

#[test]
fn snapshot_accepts_partial_payload() {
    let raw = r#"{"labels":[{"id":"66666666-7777-4888-8999-aaaaaaaaaaaa","label":"home"}]}"#;
    let snapshot: Snapshot = serde_json::from_str(raw).unwrap();
    assert!(snapshot.notes.is_empty());
    assert_eq!(snapshot.labels[0].label, "home");
}
