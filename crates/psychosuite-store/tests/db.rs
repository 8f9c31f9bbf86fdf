use jiff::Timestamp;
use jiff::civil::date;

use psychosuite_core::models::{Client, TestResult};
use psychosuite_store::db::Database;
use psychosuite_store::error::StoreError;

fn client(id: &str, name: &str) -> Client {
    Client {
        id: id.to_string(),
        full_name: name.to_string(),
        birth_date: date(1980, 5, 14),
        notes: String::new(),
    }
}

fn result(id: &str, client_id: &str, at: Timestamp) -> TestResult {
    TestResult {
        id: id.to_string(),
        client_id: client_id.to_string(),
        test_id: "hads".to_string(),
        administered_at: at,
        answers: vec![3, 2, 2, 1, 1],
        total: 9,
        interpretation: None,
    }
}

#[test]
fn clients_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::open(dir.path()).unwrap();

    assert!(db.clients().is_empty());
    db.add_client(client("c1", "Alice Example")).unwrap();
    db.add_client(client("c2", "Bob Example")).unwrap();

    let clients = db.clients();
    assert_eq!(clients.len(), 2);
    assert_eq!(clients[0].full_name, "Alice Example");
    assert_eq!(db.client("c2").unwrap().full_name, "Bob Example");
    assert!(matches!(
        db.client("c3"),
        Err(StoreError::ClientNotFound(_))
    ));
}

#[test]
fn update_client_edits_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::open(dir.path()).unwrap();
    db.add_client(client("c1", "Alice Example")).unwrap();

    let mut edited = client("c1", "Alice Renamed");
    edited.notes = "prefers morning appointments".to_string();
    db.update_client(edited).unwrap();

    let stored = db.client("c1").unwrap();
    assert_eq!(stored.full_name, "Alice Renamed");
    assert_eq!(stored.notes, "prefers morning appointments");
    assert_eq!(db.clients().len(), 1);

    assert!(db.update_client(client("missing", "X")).is_err());
}

#[test]
fn client_results_are_filtered_and_newest_first() {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::open(dir.path()).unwrap();
    let t0 = Timestamp::UNIX_EPOCH;
    let t1 = t0 + jiff::Span::new().hours(1);
    let t2 = t0 + jiff::Span::new().hours(2);

    db.add_result(result("r1", "c1", t0)).unwrap();
    db.add_result(result("r2", "c1", t2)).unwrap();
    db.add_result(result("r3", "c2", t1)).unwrap();

    let for_c1: Vec<String> = db
        .client_results("c1")
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(for_c1, vec!["r2", "r1"]);
}

#[test]
fn set_interpretation_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::open(dir.path()).unwrap();
    db.add_result(result("r1", "c1", Timestamp::UNIX_EPOCH)).unwrap();

    db.set_interpretation("r1", "first narrative").unwrap();
    assert_eq!(
        db.result("r1").unwrap().interpretation.as_deref(),
        Some("first narrative")
    );

    db.set_interpretation("r1", "second narrative").unwrap();
    assert_eq!(
        db.result("r1").unwrap().interpretation.as_deref(),
        Some("second narrative")
    );

    assert!(matches!(
        db.set_interpretation("missing", "x"),
        Err(StoreError::ResultNotFound(_))
    ));
}

#[test]
fn corrupt_document_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::open(dir.path()).unwrap();
    db.add_client(client("c1", "Alice Example")).unwrap();

    std::fs::write(dir.path().join("clients.json"), b"{ not json").unwrap();
    assert!(db.clients().is_empty());

    // The store recovers on the next write.
    db.add_client(client("c2", "Bob Example")).unwrap();
    assert_eq!(db.clients().len(), 1);
}

#[test]
fn concurrent_interpretation_and_result_writes_all_land() {
    use std::sync::Arc;

    let dir = tempfile::tempdir().unwrap();
    let db = Arc::new(Database::open(dir.path()).unwrap());
    db.add_result(result("r0", "c1", Timestamp::UNIX_EPOCH)).unwrap();

    // A background augmenter rewrites r0's interpretation while the
    // foreground keeps adding results to the same document.
    let augmenter = {
        let db = Arc::clone(&db);
        std::thread::spawn(move || {
            for i in 0..200 {
                db.set_interpretation("r0", &format!("narrative {i}")).unwrap();
            }
        })
    };
    for i in 1..=200 {
        db.add_result(result(&format!("r{i}"), "c1", Timestamp::UNIX_EPOCH))
            .unwrap();
    }
    augmenter.join().unwrap();

    assert_eq!(db.results().len(), 201);
    assert_eq!(
        db.result("r0").unwrap().interpretation.as_deref(),
        Some("narrative 199")
    );
}

#[test]
fn legacy_camel_case_documents_are_readable() {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::open(dir.path()).unwrap();

    std::fs::write(
        dir.path().join("clients.json"),
        r#"[{"id":"1700000000000","fullName":"Legacy Client","birthDate":"1975-03-02"}]"#,
    )
    .unwrap();
    std::fs::write(
        dir.path().join("results.json"),
        r#"[{"id":"1700000000001","clientId":"1700000000000","testId":"mmse",
            "date":"2024-01-02T10:30:00Z","answers":[1,1,1,0,0],"score":3}]"#,
    )
    .unwrap();

    let clients = db.clients();
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].full_name, "Legacy Client");
    assert_eq!(clients[0].birth_date, date(1975, 3, 2));

    let result = db.result("1700000000001").unwrap();
    assert_eq!(result.client_id, "1700000000000");
    assert_eq!(result.total, 3);
    assert!(result.interpretation.is_none());
}
