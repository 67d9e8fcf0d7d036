use axum::http::StatusCode;

use crate::common::{get_json, test_app};
use shared_types::{DISTRICT_COURTS, HIGH_COURTS};

#[tokio::test]
async fn courts_directory_has_fixed_counts() {
    let (app, _pool) = test_app().await;

    let (status, resp) = get_json(&app, "/api/courts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["high_courts"].as_array().unwrap().len(), 26);
    assert_eq!(resp["district_courts"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn courts_directory_preserves_documented_order() {
    let (app, _pool) = test_app().await;

    let (status, resp) = get_json(&app, "/api/courts").await;
    assert_eq!(status, StatusCode::OK);

    let high = resp["high_courts"].as_array().unwrap();
    for (i, name) in HIGH_COURTS.iter().enumerate() {
        assert_eq!(high[i], *name);
    }
    let district = resp["district_courts"].as_array().unwrap();
    for (i, name) in DISTRICT_COURTS.iter().enumerate() {
        assert_eq!(district[i], *name);
    }
}

#[tokio::test]
async fn courts_directory_is_stable_across_calls() {
    let (app, _pool) = test_app().await;

    let (_, first) = get_json(&app, "/api/courts").await;
    let (_, second) = get_json(&app, "/api/courts").await;
    assert_eq!(first, second);
}
