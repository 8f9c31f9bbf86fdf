use jiff::civil::date;

use psychosuite_core::models::{Client, TestResult};
use psychosuite_report::detail::format_detail;

#[test]
fn detail_report_lists_every_answer() {
    let client = Client {
        id: "c1".to_string(),
        full_name: "Alice Example".to_string(),
        birth_date: date(1980, 5, 14),
        notes: String::new(),
    };
    let result = TestResult {
        id: "r1".to_string(),
        client_id: "c1".to_string(),
        test_id: "mmse".to_string(),
        administered_at: "2024-01-02T10:30:00Z".parse().unwrap(),
        answers: vec![1, 0, 1, 1, 0],
        total: 3,
        interpretation: Some("model narrative".to_string()),
    };

    let text = format_detail(&client, &result).unwrap();
    assert!(text.contains("Client: Alice Example"));
    assert!(text.contains("Instrument: MMSE"));
    assert!(text.contains("Total score: 3"));
    assert!(text.contains("model narrative"));

    for n in 1..=5 {
        assert!(text.contains(&format!("Question {n}:")), "missing item {n}");
    }
    assert!(text.contains("What year is it?"));
    // Ladder summary is shown alongside the attached narrative.
    assert!(text.contains("Severe dementia"));
}
