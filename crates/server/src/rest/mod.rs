pub mod case;
pub mod cause_list;
pub mod court;

use axum::{
    routing::{get, post},
    Router,
};

use crate::db::AppState;

/// Build the REST API router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        // Court directory
        .route("/api/courts", get(court::list_courts))
        // Case records
        .route("/api/search-case", post(case::search_case))
        .route("/api/cases", get(case::list_recent_cases))
        // Cause lists
        .route("/api/cause-list", post(cause_list::fetch_cause_list))
}
