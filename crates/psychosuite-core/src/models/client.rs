use serde::{Deserialize, Serialize};

/// A registered client. Created by the practitioner, mutated only by edit;
/// there is no delete operation.
///
/// The serde aliases accept records persisted by the two legacy prototype
/// schemas (camelCase, `name` vs `fullName`); everything is re-written in
/// the canonical snake_case form on the next save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    #[serde(alias = "fullName", alias = "name")]
    pub full_name: String,
    #[serde(alias = "birthDate")]
    pub birth_date: jiff::civil::Date,
    #[serde(default)]
    pub notes: String,
}
