use serde::{Deserialize, Serialize};

// ── Court directory ─────────────────────────────────────────────────

/// High courts, fixed order. The directory is reference data for the
/// client's dropdowns; court names in requests are deliberately not
/// checked against it.
pub const HIGH_COURTS: &[&str] = &[
    "Allahabad High Court",
    "Andhra Pradesh High Court",
    "Bombay High Court",
    "Calcutta High Court",
    "Chhattisgarh High Court",
    "Delhi High Court",
    "Gauhati High Court",
    "Gujarat High Court",
    "Himachal Pradesh High Court",
    "Jammu and Kashmir High Court",
    "Jharkhand High Court",
    "Karnataka High Court",
    "Kerala High Court",
    "Madhya Pradesh High Court",
    "Madras High Court",
    "Manipur High Court",
    "Meghalaya High Court",
    "Orissa High Court",
    "Patna High Court",
    "Punjab and Haryana High Court",
    "Rajasthan High Court",
    "Sikkim High Court",
    "Supreme Court of India",
    "Telangana High Court",
    "Tripura High Court",
    "Uttarakhand High Court",
];

/// District courts, fixed order.
pub const DISTRICT_COURTS: &[&str] = &[
    "New Delhi District Court",
    "Mumbai District Court",
    "Kolkata District Court",
    "Chennai District Court",
    "Bangalore District Court",
    "Hyderabad District Court",
    "Pune District Court",
    "Ahmedabad District Court",
    "Jaipur District Court",
    "Lucknow District Court",
];

/// API response shape for the court directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CourtsResponse {
    pub high_courts: Vec<String>,
    pub district_courts: Vec<String>,
}

impl CourtsResponse {
    /// Snapshot of the static directory.
    pub fn directory() -> Self {
        Self {
            high_courts: HIGH_COURTS.iter().map(|c| c.to_string()).collect(),
            district_courts: DISTRICT_COURTS.iter().map(|c| c.to_string()).collect(),
        }
    }
}
