use serde::{Deserialize, Serialize};

// ── Validation constants ────────────────────────────────────────────

/// Case type codes that appear on cause lists.
pub const CAUSE_LIST_CASE_TYPES: &[&str] = &["CRL", "CIV", "WP", "MAT", "SA"];

/// The fixed hearing time slots.
pub const HEARING_TIMES: &[&str] = &["10:30 AM", "11:00 AM", "11:30 AM", "02:00 PM", "02:30 PM"];

/// Check whether a hearing time is one of the fixed slots.
pub fn is_valid_hearing_time(s: &str) -> bool {
    HEARING_TIMES.contains(&s)
}

// ── Cause list types ────────────────────────────────────────────────

/// One scheduled hearing on a court's daily cause list. The entry set
/// for a (court, date) key is stored as a JSON array in the
/// `cause_lists.cases` column and returned verbatim on every later
/// fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CauseListEntry {
    /// Formatted as "N/YEAR", e.g. "317/2024".
    pub case_number: String,
    pub case_type: String,
    pub parties: String,
    pub judge: String,
    pub court_hall: String,
    pub hearing_time: String,
}

/// Persisted snapshot of a full cause list, written to the
/// `raw_response` column alongside the bare entry array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CauseListSnapshot {
    pub court: String,
    pub date: String,
    pub cases: Vec<CauseListEntry>,
}

/// Request body for `POST /api/cause-list`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CauseListRequest {
    #[serde(default)]
    pub court: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}
