use shared_types::{AppError, CauseListEntry, CauseListSnapshot};
use sqlx::{Pool, Sqlite};

use crate::error_convert::SqlxErrorExt;

/// Find the stored entry set for (court, date). The entries come back
/// exactly as first generated; the surrounding court/date metadata
/// stays in the row.
pub async fn find_by_key(
    pool: &Pool<Sqlite>,
    court: &str,
    date: &str,
) -> Result<Option<Vec<CauseListEntry>>, AppError> {
    let cases_json: Option<String> =
        sqlx::query_scalar("SELECT cases FROM cause_lists WHERE court = ? AND date = ?")
            .bind(court)
            .bind(date)
            .fetch_optional(pool)
            .await
            .map_err(SqlxErrorExt::into_app_error)?;

    match cases_json {
        Some(json) => {
            let entries = serde_json::from_str(&json).map_err(|e| {
                tracing::error!(error = %e, court, date, "stored cause list is not valid JSON");
                AppError::database("Database error")
            })?;
            Ok(Some(entries))
        }
        None => Ok(None),
    }
}

/// Persist a generated cause list together with its full snapshot.
///
/// Returns `false` when a concurrent request already stored a list for
/// this (court, date); the caller re-reads the winner's entries.
pub async fn insert(
    pool: &Pool<Sqlite>,
    court: &str,
    date: &str,
    entries: &[CauseListEntry],
) -> Result<bool, AppError> {
    let cases_json = serde_json::to_string(entries)
        .map_err(|e| AppError::internal(format!("failed to serialize cause list: {e}")))?;
    let snapshot = CauseListSnapshot {
        court: court.to_string(),
        date: date.to_string(),
        cases: entries.to_vec(),
    };
    let raw_response = serde_json::to_string(&snapshot)
        .map_err(|e| AppError::internal(format!("failed to serialize cause list snapshot: {e}")))?;

    let result = sqlx::query(
        r#"
        INSERT INTO cause_lists (court, date, cases, raw_response)
        VALUES (?, ?, ?, ?)
        ON CONFLICT (court, date) DO NOTHING
        "#,
    )
    .bind(court)
    .bind(date)
    .bind(cases_json)
    .bind(raw_response)
    .execute(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(result.rows_affected() > 0)
}
