use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common::{count_rows, post_json, test_app};
use shared_types::is_valid_case_status;

#[tokio::test]
async fn first_search_generates_and_persists_a_record() {
    let (app, pool) = test_app().await;

    let (status, resp) = post_json(
        &app,
        "/api/search-case",
        r#"{"caseType":"WP","caseNumber":42,"year":2023,"court":"Delhi High Court"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["case_type"], "WP");
    assert_eq!(resp["case_number"], 42);
    assert_eq!(resp["year"], 2023);
    assert_eq!(resp["court"], "Delhi High Court");
    assert_eq!(resp["id"], 1);
    assert!(!resp["parties"].as_str().unwrap().is_empty());
    assert!(is_valid_case_status(resp["status"].as_str().unwrap()));
    // Filing date falls within the requested year.
    assert!(resp["filing_date"].as_str().unwrap().starts_with("2023-"));

    assert_eq!(count_rows(&pool, "cases").await, 1);
}

#[tokio::test]
async fn repeat_search_hits_the_stored_record() {
    let (app, pool) = test_app().await;
    let body = r#"{"caseType":"WP","caseNumber":42,"year":2023,"court":"Delhi High Court"}"#;

    let (_, first) = post_json(&app, "/api/search-case", body).await;
    let (status, second) = post_json(&app, "/api/search-case", body).await;

    assert_eq!(status, StatusCode::OK);
    // Identical response, field for field: nothing was re-generated.
    assert_eq!(first, second);
    assert_eq!(second["id"], 1);
    assert_eq!(count_rows(&pool, "cases").await, 1);
}

#[tokio::test]
async fn distinct_keys_get_distinct_records() {
    let (app, pool) = test_app().await;

    let (_, a) = post_json(
        &app,
        "/api/search-case",
        r#"{"caseType":"WP","caseNumber":42,"year":2023,"court":"Delhi High Court"}"#,
    )
    .await;
    // Same key except for the court: a different logical case.
    let (_, b) = post_json(
        &app,
        "/api/search-case",
        r#"{"caseType":"WP","caseNumber":42,"year":2023,"court":"Bombay High Court"}"#,
    )
    .await;

    assert_eq!(a["id"], 1);
    assert_eq!(b["id"], 2);
    assert_eq!(count_rows(&pool, "cases").await, 2);
}

#[tokio::test]
async fn numeric_fields_accepted_as_strings() {
    let (app, _pool) = test_app().await;

    // The search form submits numbers as strings.
    let (status, resp) = post_json(
        &app,
        "/api/search-case",
        r#"{"caseType":"CRL","caseNumber":"7","year":"2021","court":"Patna High Court"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["case_number"], 7);
    assert_eq!(resp["year"], 2021);
}

#[tokio::test]
async fn string_and_number_forms_address_the_same_record() {
    let (app, pool) = test_app().await;

    let (_, first) = post_json(
        &app,
        "/api/search-case",
        r#"{"caseType":"SA","caseNumber":"9","year":"2022","court":"Madras High Court"}"#,
    )
    .await;
    let (_, second) = post_json(
        &app,
        "/api/search-case",
        r#"{"caseType":"SA","caseNumber":9,"year":2022,"court":"Madras High Court"}"#,
    )
    .await;

    assert_eq!(first, second);
    assert_eq!(count_rows(&pool, "cases").await, 1);
}

#[tokio::test]
async fn generated_hearing_date_lands_in_second_half_of_2024() {
    let (app, _pool) = test_app().await;

    let (_, resp) = post_json(
        &app,
        "/api/search-case",
        r#"{"caseType":"MAT","caseNumber":3,"year":2019,"court":"Kerala High Court"}"#,
    )
    .await;

    let hearing = resp["next_hearing_date"].as_str().unwrap();
    let month: u32 = hearing[5..7].parse().unwrap();
    assert!(hearing.starts_with("2024-"));
    assert!((7..=12).contains(&month));
}

#[tokio::test]
async fn unknown_court_names_are_accepted() {
    let (app, _pool) = test_app().await;

    // The directory is advisory only; court names are not checked
    // against it.
    let (status, resp) = post_json(
        &app,
        "/api/search-case",
        r#"{"caseType":"WP","caseNumber":1,"year":2024,"court":"Tribunal of Nowhere"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["court"], "Tribunal of Nowhere");
}
