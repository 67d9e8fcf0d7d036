use axum::Json;

use shared_types::CourtsResponse;

/// GET /api/courts
///
/// Static reference lists for the client's court dropdowns. Search
/// requests are deliberately not validated against them: any court
/// name is accepted as-is.
#[utoipa::path(
    get,
    path = "/api/courts",
    responses((status = 200, description = "Court directory", body = CourtsResponse)),
    tag = "courts"
)]
pub async fn list_courts() -> Json<CourtsResponse> {
    Json(CourtsResponse::directory())
}
