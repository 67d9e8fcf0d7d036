use axum::Router;
use sqlx::{Pool, Sqlite};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use shared_types::{
    AppError, AppErrorKind, CaseRecord, CauseListEntry, CauseListRequest, CourtsResponse,
    IntOrString, SearchCaseRequest,
};

use crate::db::AppState;
use crate::{health, rest};

#[derive(OpenApi)]
#[openapi(
    paths(
        rest::court::list_courts,
        rest::case::search_case,
        rest::case::list_recent_cases,
        rest::cause_list::fetch_cause_list,
        health::health_check,
    ),
    components(schemas(
        AppError,
        AppErrorKind,
        CaseRecord,
        CauseListEntry,
        CauseListRequest,
        CourtsResponse,
        IntOrString,
        SearchCaseRequest,
        health::HealthResponse,
    )),
    tags(
        (name = "courts", description = "Court directory reference data"),
        (name = "cases", description = "Case record search and dashboard endpoints"),
        (name = "cause-lists", description = "Daily cause list endpoints"),
        (name = "health", description = "Health check endpoint")
    ),
    info(
        title = "eCourts Mock API",
        description = "Legal case record and cause list lookup service backed by synthetic data",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

/// Build an Axum router that serves the API docs at `/docs`
/// and the REST API at `/api/*`.
pub fn api_router(pool: Pool<Sqlite>) -> Router {
    let state = AppState { pool };

    Router::new()
        .merge(rest::api_router())
        .route("/health", axum::routing::get(health::health_check))
        .with_state(state)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
}
