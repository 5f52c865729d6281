//! HTTP-level integration tests for the `/bulk-upload` endpoints.
//!
//! The key contracts: entity bulk-import is a plain repeated insert (and so
//! duplicates on resubmission), while assignment bulk-import upserts by
//! natural key (and so is idempotent).

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use sqlx::SqlitePool;

async fn seed(pool: &SqlitePool) -> (i64, i64) {
    let app = common::build_test_app(pool.clone());
    let person = body_json(
        post_json(
            app,
            "/people",
            serde_json::json!({"name": "Alice", "role": "Engineer"}),
        )
        .await,
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let client = body_json(post_json(app, "/clients", serde_json::json!({"name": "Acme"})).await).await;

    let app = common::build_test_app(pool.clone());
    let project = body_json(
        post_json(
            app,
            "/projects",
            serde_json::json!({"name": "Website", "clientId": client["id"]}),
        )
        .await,
    )
    .await;

    (
        person["id"].as_i64().unwrap(),
        project["id"].as_i64().unwrap(),
    )
}

// ---------------------------------------------------------------------------
// People / clients: plain inserts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn bulk_people_inserts_every_row(pool: SqlitePool) {
    let batch = serde_json::json!({
        "people": [
            {"name": "Alice", "role": "Engineer"},
            {"name": "Bob", "role": "Designer"},
        ]
    });

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/bulk-upload/people", batch).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let added = json["added"].as_array().unwrap();
    assert_eq!(added.len(), 2);
    assert_eq!(added[0]["name"], "Alice");
    assert!(added[0]["id"].is_number());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn bulk_people_is_not_idempotent(pool: SqlitePool) {
    let batch = serde_json::json!({
        "people": [
            {"name": "Alice", "role": "Engineer"},
            {"name": "Bob", "role": "Designer"},
        ]
    });

    for _ in 0..2 {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, "/bulk-upload/people", batch.clone()).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    // Two submissions, two copies of everyone.
    let app = common::build_test_app(pool);
    let list = body_json(get(app, "/people").await).await;
    assert_eq!(list.as_array().unwrap().len(), 4);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn bulk_people_with_malformed_row_rejects_whole_payload(pool: SqlitePool) {
    let batch = serde_json::json!({
        "people": [
            {"name": "Alice", "role": "Engineer"},
            {"name": "Bob"},
        ]
    });

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/bulk-upload/people", batch).await;
    assert!(response.status().is_client_error());

    // Nothing was written: the container failed to deserialize.
    let app = common::build_test_app(pool);
    let list = body_json(get(app, "/people").await).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn bulk_clients_inserts_every_row(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/bulk-upload/clients",
        serde_json::json!({"clients": [{"name": "Acme"}, {"name": "Globex"}]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let list = body_json(get(app, "/clients").await).await;
    assert_eq!(list.as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Projects: clientName resolution
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn bulk_projects_resolves_client_names(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let client = body_json(post_json(app, "/clients", serde_json::json!({"name": "Acme"})).await).await;
    let client_id = client["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/bulk-upload/projects",
        serde_json::json!({
            "projects": [
                {"name": "Website", "clientId": client_id},
                {"name": "Mobile App", "clientName": "acme"},
            ]
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let added = json["added"].as_array().unwrap();
    assert_eq!(added.len(), 2);
    assert_eq!(added[1]["clientId"], client_id);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn bulk_projects_unknown_client_aborts_with_400(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/clients", serde_json::json!({"name": "Acme"})).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/bulk-upload/projects",
        serde_json::json!({
            "projects": [
                {"name": "Website", "clientName": "Acme"},
                {"name": "Mystery", "clientName": "Nobody"},
            ]
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Client not found: Nobody");

    // Rows before the failing one were already inserted.
    let app = common::build_test_app(pool);
    let list = body_json(get(app, "/projects").await).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["name"], "Website");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn bulk_projects_row_without_client_reference_is_rejected(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/bulk-upload/projects",
        serde_json::json!({"projects": [{"name": "Orphan"}]}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Project requires clientId or clientName");
}

// ---------------------------------------------------------------------------
// Assignments: idempotent upsert
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn bulk_assignments_upserts_by_natural_key(pool: SqlitePool) {
    let (person_id, project_id) = seed(&pool).await;

    let batch = |percentage: i64| {
        serde_json::json!({
            "assignments": [{
                "personId": person_id,
                "projectId": project_id,
                "startDate": "2026-01-01",
                "endDate": "2026-01-14",
                "percentage": percentage,
            }]
        })
    };

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/bulk-upload/assignments", batch(50)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/bulk-upload/assignments", batch(75)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // One row per logical tuple, percentage from the second call.
    let app = common::build_test_app(pool);
    let list = body_json(get(app, "/assignments").await).await;
    let rows = list.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["percentage"], 75);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn bulk_assignments_resolves_names_and_periods(pool: SqlitePool) {
    seed(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/bulk-upload/assignments",
        serde_json::json!({
            "assignments": [{
                "personName": "alice",
                "projectName": "website",
                "clientName": "ACME",
                "period": 1,
            }]
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let added = json["added"].as_array().unwrap();
    assert_eq!(added[0]["startDate"], "2026-01-15");
    assert_eq!(added[0]["endDate"], "2026-01-28");
    assert_eq!(added[0]["percentage"], 100);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn bulk_assignments_bad_row_aborts_before_any_write(pool: SqlitePool) {
    let (person_id, project_id) = seed(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/bulk-upload/assignments",
        serde_json::json!({
            "assignments": [
                {
                    "personId": person_id,
                    "projectId": project_id,
                    "period": 0,
                },
                {
                    "personName": "Nobody",
                    "projectId": project_id,
                    "period": 1,
                },
            ]
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Person not found: Nobody");

    // The valid first row was not committed either.
    let app = common::build_test_app(pool);
    let list = body_json(get(app, "/assignments").await).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn bulk_assignments_mixes_updates_and_inserts(pool: SqlitePool) {
    let (person_id, project_id) = seed(&pool).await;

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/bulk-upload/assignments",
        serde_json::json!({
            "assignments": [{
                "personId": person_id,
                "projectId": project_id,
                "period": 0,
                "percentage": 40,
            }]
        }),
    )
    .await;

    // Second batch: same tuple (update) plus a new period (insert).
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/bulk-upload/assignments",
        serde_json::json!({
            "assignments": [
                {
                    "personId": person_id,
                    "projectId": project_id,
                    "period": 0,
                    "percentage": 60,
                },
                {
                    "personId": person_id,
                    "projectId": project_id,
                    "period": 1,
                },
            ]
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let list = body_json(get(app, "/assignments").await).await;
    let rows = list.as_array().unwrap();
    assert_eq!(rows.len(), 2);

    let updated = rows
        .iter()
        .find(|r| r["start_date"] == "2026-01-01")
        .unwrap();
    assert_eq!(updated["percentage"], 60);
}
