//! Synthetic record generation.
//!
//! No real court registry is consulted: every record is a plausible
//! placeholder drawn from fixed phrase pools. Generation is pure with
//! respect to storage and has no failure modes. Randomness is not
//! seeded by the query key — two misses for the same key produce
//! different content, and only the first persisted one wins.

use chrono::{Datelike, NaiveDate};
use rand::Rng;

use shared_types::{
    CauseListEntry, NewCase, CASE_STATUSES, CAUSE_LIST_CASE_TYPES, HEARING_TIMES,
};

/// Party descriptions for generated case records.
const CASE_PARTIES: &[&str] = &[
    "Ram Kumar vs. State of Delhi",
    "ABC Company Ltd. vs. XYZ Corporation",
    "Priya Sharma vs. Municipal Corporation",
    "Union of India vs. Private Ltd.",
    "Citizen Welfare Association vs. State Government",
];

/// Party descriptions for generated cause list entries.
const CAUSE_LIST_PARTIES: &[&str] = &[
    "Ram Kumar vs. State",
    "ABC Ltd. vs. XYZ Corp",
    "Citizens Union vs. Municipal Corp",
    "State vs. John Doe",
    "Private Ltd. vs. Government",
];

/// Presiding judge names for generated cause list entries.
const JUDGES: &[&str] = &[
    "Hon'ble Justice A.K. Sharma",
    "Hon'ble Justice Priya Gupta",
    "Hon'ble Justice R.K. Singh",
    "Hon'ble Justice M. Patel",
    "Hon'ble Justice S. Kumar",
];

fn pick<'a>(rng: &mut impl Rng, pool: &[&'a str]) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}

/// Day 1..=28 is valid in every month, so generated dates never need
/// month-length arithmetic.
fn random_date_in(rng: &mut impl Rng, year: i32, months: std::ops::RangeInclusive<u32>) -> NaiveDate {
    let month = rng.gen_range(months);
    let day = rng.gen_range(1..=28);
    NaiveDate::from_ymd_opt(year, month, day).expect("day 1-28 exists in every month")
}

/// Generate a plausible case record for the given logical key.
///
/// The next hearing always lands in July-December 2024 regardless of
/// the filing year.
pub fn generate_case_data(case_type: &str, case_number: i64, year: i64, court: &str) -> NewCase {
    let mut rng = rand::thread_rng();

    // Years are not validated upstream; keep the filing date inside
    // chrono's representable range whatever arrives.
    let filing_year = year.clamp(1, 9999) as i32;

    let judgment_path = if rng.gen_bool(0.5) {
        Some(format!("/static/judgments/case_{case_number}_{year}.pdf"))
    } else {
        None
    };

    NewCase {
        case_type: case_type.to_string(),
        case_number,
        year,
        court: court.to_string(),
        parties: pick(&mut rng, CASE_PARTIES).to_string(),
        filing_date: random_date_in(&mut rng, filing_year, 1..=12),
        next_hearing_date: random_date_in(&mut rng, 2024, 7..=12),
        status: pick(&mut rng, CASE_STATUSES).to_string(),
        judgment_path,
    }
}

/// Generate the set of hearings scheduled on the given date: 5 to 20
/// entries, each drawn independently from the fixed pools. The court
/// name plays no part in the content; it only keys the stored record.
pub fn generate_cause_list(date: NaiveDate) -> Vec<CauseListEntry> {
    let mut rng = rand::thread_rng();
    let count = rng.gen_range(5..=20);

    (0..count)
        .map(|_| CauseListEntry {
            case_number: format!("{}/{}", rng.gen_range(1..=999), date.year()),
            case_type: pick(&mut rng, CAUSE_LIST_CASE_TYPES).to_string(),
            parties: pick(&mut rng, CAUSE_LIST_PARTIES).to_string(),
            judge: pick(&mut rng, JUDGES).to_string(),
            court_hall: format!("Court No. {}", rng.gen_range(1..=10)),
            hearing_time: pick(&mut rng, HEARING_TIMES).to_string(),
        })
        .collect()
}
