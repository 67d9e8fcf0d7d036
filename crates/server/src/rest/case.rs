use axum::{extract::State, Json};
use sqlx::{Pool, Sqlite};

use shared_types::{AppError, CaseRecord, SearchCaseRequest};

use crate::{mock, repo};

/// POST /api/search-case
///
/// Lookup-or-generate: the first search for a logical key (case type,
/// case number, year, court) synthesizes a record and persists it;
/// every later search returns that stored row unchanged. Both branches
/// return the full row including `id` and `created_at`.
#[utoipa::path(
    post,
    path = "/api/search-case",
    request_body = SearchCaseRequest,
    responses(
        (status = 200, description = "Case record", body = CaseRecord),
        (status = 400, description = "Missing or unparseable field", body = AppError),
        (status = 500, description = "Storage fault", body = AppError)
    ),
    tag = "cases"
)]
pub async fn search_case(
    State(pool): State<Pool<Sqlite>>,
    Json(body): Json<SearchCaseRequest>,
) -> Result<Json<CaseRecord>, AppError> {
    let case_type = body.case_type.as_deref().map(str::trim).filter(|s| !s.is_empty());
    let court = body.court.as_deref().map(str::trim).filter(|s| !s.is_empty());
    let (Some(case_type), Some(case_number), Some(year), Some(court)) =
        (case_type, body.case_number.as_ref(), body.year.as_ref(), court)
    else {
        return Err(AppError::bad_request("Missing required fields"));
    };
    let case_number = case_number
        .as_int()
        .ok_or_else(|| AppError::bad_request("caseNumber must be an integer"))?;
    let year = year
        .as_int()
        .ok_or_else(|| AppError::bad_request("year must be an integer"))?;

    if let Some(record) = repo::case::find_by_key(&pool, case_type, case_number, year, court).await? {
        return Ok(Json(record));
    }

    let generated = mock::generate_case_data(case_type, case_number, year, court);
    match repo::case::insert(&pool, &generated).await? {
        Some(record) => {
            tracing::debug!(case_type, case_number, year, court, id = record.id, "stored new case record");
            Ok(Json(record))
        }
        // A concurrent miss for the same key won the insert; its row is
        // the record of record now.
        None => {
            let record = repo::case::find_by_key(&pool, case_type, case_number, year, court)
                .await?
                .ok_or_else(|| AppError::internal("case insert conflicted but no row found"))?;
            Ok(Json(record))
        }
    }
}

/// GET /api/cases
///
/// The 50 most recently created case records, newest first. Feeds the
/// dashboard; no generation happens here.
#[utoipa::path(
    get,
    path = "/api/cases",
    responses(
        (status = 200, description = "Recent case records", body = Vec<CaseRecord>),
        (status = 500, description = "Storage fault", body = AppError)
    ),
    tag = "cases"
)]
pub async fn list_recent_cases(
    State(pool): State<Pool<Sqlite>>,
) -> Result<Json<Vec<CaseRecord>>, AppError> {
    let records = repo::case::list_recent(&pool, 50).await?;
    Ok(Json(records))
}
