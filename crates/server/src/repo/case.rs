use shared_types::{AppError, CaseRecord, NewCase};
use sqlx::{Pool, Sqlite};

use crate::error_convert::SqlxErrorExt;

/// Find a case by its logical key. Exact match on all four fields.
pub async fn find_by_key(
    pool: &Pool<Sqlite>,
    case_type: &str,
    case_number: i64,
    year: i64,
    court: &str,
) -> Result<Option<CaseRecord>, AppError> {
    sqlx::query_as::<_, CaseRecord>(
        r#"
        SELECT id, case_type, case_number, year, court, parties,
               filing_date, next_hearing_date, status, judgment_path, created_at
        FROM cases
        WHERE case_type = ? AND case_number = ? AND year = ? AND court = ?
        "#,
    )
    .bind(case_type)
    .bind(case_number)
    .bind(year)
    .bind(court)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Insert a generated case, returning the stored row with its assigned
/// `id` and `created_at`.
///
/// Returns `None` when another request persisted the same logical key
/// first: the UNIQUE constraint turns the insert into a no-op and the
/// caller re-reads the winner instead of creating a duplicate.
pub async fn insert(pool: &Pool<Sqlite>, case: &NewCase) -> Result<Option<CaseRecord>, AppError> {
    let raw_response = serde_json::to_string(case)
        .map_err(|e| AppError::internal(format!("failed to serialize case snapshot: {e}")))?;

    sqlx::query_as::<_, CaseRecord>(
        r#"
        INSERT INTO cases
            (case_type, case_number, year, court, parties,
             filing_date, next_hearing_date, status, judgment_path, raw_response)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        ON CONFLICT (case_type, case_number, year, court) DO NOTHING
        RETURNING id, case_type, case_number, year, court, parties,
                  filing_date, next_hearing_date, status, judgment_path, created_at
        "#,
    )
    .bind(&case.case_type)
    .bind(case.case_number)
    .bind(case.year)
    .bind(&case.court)
    .bind(&case.parties)
    .bind(case.filing_date)
    .bind(case.next_hearing_date)
    .bind(&case.status)
    .bind(case.judgment_path.as_deref())
    .bind(raw_response)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// List the most recently created cases, newest first. `created_at`
/// has one-second resolution, so `id` breaks ties.
pub async fn list_recent(pool: &Pool<Sqlite>, limit: i64) -> Result<Vec<CaseRecord>, AppError> {
    sqlx::query_as::<_, CaseRecord>(
        r#"
        SELECT id, case_type, case_number, year, court, parties,
               filing_date, next_hearing_date, status, judgment_path, created_at
        FROM cases
        ORDER BY created_at DESC, id DESC
        LIMIT ?
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}
