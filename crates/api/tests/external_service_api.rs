//! HTTP-level integration tests for the external-service endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json};
use sqlx::PgPool;

async fn create_workflow(pool: &PgPool) -> i64 {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/workflows",
            serde_json::json!({"name": "Shipping", "description": "Order dispatch"}),
        )
        .await,
    )
    .await;
    created["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn add_external_service_returns_success_message(pool: PgPool) {
    let workflow_id = create_workflow(&pool).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/workflows/{workflow_id}/external-services"),
        serde_json::json!({
            "externalServiceDetails": {
                "name": "carrier",
                "endpoint": "https://carrier.example.com"
            }
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(
        json["message"],
        "External service added to the workflow successfully"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn add_external_service_to_missing_workflow_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/workflows/999999/external-services",
        serde_json::json!({
            "externalServiceDetails": {
                "name": "carrier",
                "endpoint": "https://carrier.example.com"
            }
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Workflow not found");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn add_external_service_without_details_returns_400(pool: PgPool) {
    let workflow_id = create_workflow(&pool).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/workflows/{workflow_id}/external-services"),
        serde_json::json!({}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "External service details are required");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_external_services_returns_collection(pool: PgPool) {
    let workflow_id = create_workflow(&pool).await;

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        &format!("/workflows/{workflow_id}/external-services"),
        serde_json::json!({
            "externalServiceDetails": {
                "name": "carrier",
                "endpoint": "https://carrier.example.com"
            }
        }),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/workflows/{workflow_id}/external-services")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let services = json["externalServices"].as_array().unwrap();
    assert_eq!(services.len(), 1);
    assert_eq!(services[0]["name"], "carrier");
    assert_eq!(services[0]["workflow_id"], workflow_id);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_external_services_empty_returns_404(pool: PgPool) {
    let workflow_id = create_workflow(&pool).await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/workflows/{workflow_id}/external-services")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "No external services found for the workflow");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn remove_external_service_roundtrip(pool: PgPool) {
    let workflow_id = create_workflow(&pool).await;

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        &format!("/workflows/{workflow_id}/external-services"),
        serde_json::json!({
            "externalServiceDetails": {
                "name": "carrier",
                "endpoint": "https://carrier.example.com"
            }
        }),
    )
    .await;
    let service_id: i64 =
        sqlx::query_scalar("SELECT id FROM external_services WHERE workflow_id = $1")
            .bind(workflow_id)
            .fetch_one(&pool)
            .await
            .unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(
        app,
        &format!("/workflows/{workflow_id}/external-services/{service_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(
        json["message"],
        "External service removed from the workflow successfully"
    );

    // Removing again: the service no longer exists.
    let app = common::build_test_app(pool);
    let response = delete(
        app,
        &format!("/workflows/{workflow_id}/external-services/{service_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "External service not found");
}
