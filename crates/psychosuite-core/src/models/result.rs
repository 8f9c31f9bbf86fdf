use serde::{Deserialize, Serialize};

/// One completed administration of an instrument to a client.
///
/// Invariants at creation time: `answers` has exactly one entry per
/// question of the instrument, each entry equals one of that question's
/// option scores, and `total` is the sum of `answers`. `interpretation`
/// starts out `None` while an AI narrative is pending and is overwritten,
/// never appended, by later augmentation calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    pub id: String,
    #[serde(alias = "clientId")]
    pub client_id: String,
    #[serde(alias = "testId")]
    pub test_id: String,
    #[serde(alias = "date")]
    pub administered_at: jiff::Timestamp,
    pub answers: Vec<u32>,
    #[serde(alias = "score")]
    pub total: u32,
    #[serde(default)]
    pub interpretation: Option<String>,
}
