use axum::{extract::State, Json};
use chrono::NaiveDate;
use sqlx::{Pool, Sqlite};

use shared_types::{AppError, CauseListEntry, CauseListRequest};

use crate::{mock, repo};

/// POST /api/cause-list
///
/// Lookup-or-generate keyed on (court, date). The response is the bare
/// entry array on both branches; the court/date wrapper exists only in
/// the persisted snapshot.
#[utoipa::path(
    post,
    path = "/api/cause-list",
    request_body = CauseListRequest,
    responses(
        (status = 200, description = "Hearings scheduled at the court on the date", body = Vec<CauseListEntry>),
        (status = 400, description = "Missing court or date", body = AppError),
        (status = 500, description = "Storage fault", body = AppError)
    ),
    tag = "cause-lists"
)]
pub async fn fetch_cause_list(
    State(pool): State<Pool<Sqlite>>,
    Json(body): Json<CauseListRequest>,
) -> Result<Json<Vec<CauseListEntry>>, AppError> {
    let court = body.court.as_deref().map(str::trim).filter(|s| !s.is_empty());
    let date = body.date.as_deref().map(str::trim).filter(|s| !s.is_empty());
    let (Some(court), Some(date)) = (court, date) else {
        return Err(AppError::bad_request("Missing court or date"));
    };
    let date: NaiveDate = date
        .parse()
        .map_err(|_| AppError::bad_request("date must be formatted YYYY-MM-DD"))?;
    // Normalized ISO form keys the stored row.
    let date_key = date.to_string();

    if let Some(entries) = repo::cause_list::find_by_key(&pool, court, &date_key).await? {
        return Ok(Json(entries));
    }

    let entries = mock::generate_cause_list(date);
    if repo::cause_list::insert(&pool, court, &date_key, &entries).await? {
        tracing::debug!(court, date = %date_key, entries = entries.len(), "stored new cause list");
        Ok(Json(entries))
    } else {
        // A concurrent miss for this (court, date) won the insert;
        // return its entries so both callers see one list.
        let stored = repo::cause_list::find_by_key(&pool, court, &date_key)
            .await?
            .ok_or_else(|| AppError::internal("cause list insert conflicted but no row found"))?;
        Ok(Json(stored))
    }
}
