use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ── Validation constants ────────────────────────────────────────────

/// Valid case status values produced by the generator.
pub const CASE_STATUSES: &[&str] = &[
    "Pending",
    "Disposed",
    "Under Consideration",
    "Next Hearing Scheduled",
];

/// Check whether a status string is a valid case status.
pub fn is_valid_case_status(s: &str) -> bool {
    CASE_STATUSES.contains(&s)
}

// ── DB row struct ───────────────────────────────────────────────────

/// A persisted case record. Once a logical key (case_type, case_number,
/// year, court) has been stored, every later search for it returns this
/// row verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema, sqlx::FromRow)]
pub struct CaseRecord {
    pub id: i64,
    pub case_type: String,
    pub case_number: i64,
    pub year: i64,
    pub court: String,
    pub parties: String,
    pub filing_date: NaiveDate,
    pub next_hearing_date: NaiveDate,
    pub status: String,
    pub judgment_path: Option<String>,
    pub created_at: NaiveDateTime,
}

/// A freshly generated case, before the store assigns `id` and
/// `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCase {
    pub case_type: String,
    pub case_number: i64,
    pub year: i64,
    pub court: String,
    pub parties: String,
    pub filing_date: NaiveDate,
    pub next_hearing_date: NaiveDate,
    pub status: String,
    pub judgment_path: Option<String>,
}

// ── API request types ───────────────────────────────────────────────

/// A JSON field that may arrive as an integer or a numeric string.
/// The search form submits numbers as strings; API clients send them
/// as integers.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(untagged)]
pub enum IntOrString {
    Int(i64),
    Text(String),
}

impl IntOrString {
    /// Parse out the integer value, if there is one.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            IntOrString::Int(n) => Some(*n),
            IntOrString::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// Request body for `POST /api/search-case`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchCaseRequest {
    #[serde(default)]
    pub case_type: Option<String>,
    #[serde(default)]
    pub case_number: Option<IntOrString>,
    #[serde(default)]
    pub year: Option<IntOrString>,
    #[serde(default)]
    pub court: Option<String>,
}
