use jiff::Timestamp;
use jiff::civil::date;

use psychosuite_core::models::{Client, TestResult};
use psychosuite_store::backup::{backup_filename, export_backup, import_backup, parse_backup};
use psychosuite_store::db::Database;
use psychosuite_store::error::StoreError;

fn seeded_db(dir: &std::path::Path) -> Database {
    let db = Database::open(dir).unwrap();
    db.add_client(Client {
        id: "c1".to_string(),
        full_name: "Alice Example".to_string(),
        birth_date: date(1980, 5, 14),
        notes: "n/a".to_string(),
    })
    .unwrap();
    db.add_result(TestResult {
        id: "r1".to_string(),
        client_id: "c1".to_string(),
        test_id: "zung".to_string(),
        administered_at: Timestamp::UNIX_EPOCH,
        answers: vec![2; 20],
        total: 40,
        interpretation: Some("Mild depression (index 50)".to_string()),
    })
    .unwrap();
    db
}

#[test]
fn export_import_round_trip_preserves_order_and_content() {
    let src_dir = tempfile::tempdir().unwrap();
    let dst_dir = tempfile::tempdir().unwrap();
    let src = seeded_db(src_dir.path());
    let dst = Database::open(dst_dir.path()).unwrap();

    let json = export_backup(&src).unwrap();
    import_backup(&dst, &json).unwrap();

    assert_eq!(src.clients(), dst.clients());
    assert_eq!(src.results(), dst.results());
}

#[test]
fn import_replaces_existing_data() {
    let src_dir = tempfile::tempdir().unwrap();
    let dst_dir = tempfile::tempdir().unwrap();
    let src = seeded_db(src_dir.path());
    let dst = Database::open(dst_dir.path()).unwrap();
    dst.add_client(Client {
        id: "old".to_string(),
        full_name: "Pre-import Client".to_string(),
        birth_date: date(1990, 1, 1),
        notes: String::new(),
    })
    .unwrap();

    import_backup(&dst, &export_backup(&src).unwrap()).unwrap();
    let clients = dst.clients();
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].id, "c1");
}

#[test]
fn import_rejects_missing_arrays_and_leaves_store_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let db = seeded_db(dir.path());

    for bad in [
        r#"{"clients": []}"#,
        r#"{"results": []}"#,
        r#"{"clients": {}, "results": []}"#,
        "not json at all",
    ] {
        assert!(
            matches!(import_backup(&db, bad), Err(StoreError::InvalidBackup(_))),
            "accepted invalid backup: {bad}"
        );
    }

    // Existing data survives every rejected import.
    assert_eq!(db.clients().len(), 1);
    assert_eq!(db.results().len(), 1);
}

#[test]
fn legacy_camel_case_backup_parses() {
    let json = r#"{
        "clients": [{"id":"1","fullName":"Legacy","birthDate":"1975-03-02"}],
        "results": [{"id":"2","clientId":"1","testId":"mmse",
                     "date":"2024-01-02T10:30:00Z","answers":[1,1,1,1,1],"score":5}]
    }"#;
    let backup = parse_backup(json).unwrap();
    assert_eq!(backup.clients[0].full_name, "Legacy");
    assert_eq!(backup.results[0].total, 5);
}

#[test]
fn backup_filename_embeds_date() {
    assert_eq!(
        backup_filename(date(2024, 3, 9)),
        "psychosuite_backup_2024-03-09.json"
    );
}
