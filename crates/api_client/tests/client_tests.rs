//! Endpoint-level tests against the fake backend.

mod common;

use axum::http::StatusCode;
use core_types::TransactionKind;
use web_types::{DepartmentForm, NewDepartment, fallback};

#[tokio::test]
async fn test_dashboard_stats() {
    let backend = common::spawn().await;

    let stats = backend.client.dashboard_stats().await.unwrap();

    assert!((stats.margin - 50.0).abs() < f64::EPSILON);
    assert_eq!(stats.revenue_vs_payroll.len(), 2);
    assert_eq!(
        backend.state.requests_to("GET", "/dashboard/stats").await.len(),
        1
    );
}

#[tokio::test]
async fn test_treasury_balance_and_transactions() {
    let backend = common::spawn().await;

    let balance = backend.client.treasury_balance().await.unwrap();
    let transactions = backend.client.treasury_transactions().await.unwrap();

    assert_eq!(balance.balance_formatted, "10000.00 USDC");
    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0].kind, TransactionKind::Deposit);
}

#[tokio::test]
async fn test_top_up_posts_amount() {
    let backend = common::spawn().await;

    let response = backend.client.top_up(250.5).await.unwrap();

    assert!(response.success);
    assert_eq!(response.display_message(), "Top-up initiated");
    let bodies = backend.state.bodies_for("/treasury/top-up").await;
    assert_eq!(bodies, vec![serde_json::json!({ "amount": 250.5 })]);
}

#[tokio::test]
async fn test_create_department_sends_trimmed_name() {
    let backend = common::spawn().await;
    let form = DepartmentForm {
        name: "  Marketing ".to_string(),
    };

    let created = backend
        .client
        .create_department(&form.validate().unwrap())
        .await
        .unwrap();

    assert_eq!(created.name, "Marketing");
    assert_eq!(
        backend.state.bodies_for("/departments").await,
        vec![serde_json::json!({ "name": "Marketing" })]
    );

    let departments = backend.client.departments().await.unwrap();
    assert!(departments.iter().any(|d| d.name == "Marketing"));
}

#[tokio::test]
async fn test_invalid_department_form_sends_nothing() {
    let backend = common::spawn().await;
    let form = DepartmentForm {
        name: "   ".to_string(),
    };

    assert!(form.validate().is_err());
    assert!(backend.state.requests().await.is_empty());
}

#[tokio::test]
async fn test_analytics() {
    let backend = common::spawn().await;

    let analytics = backend.client.analytics().await.unwrap();

    assert_eq!(analytics.most_expensive_department, "Engineering");
    assert_eq!(analytics.total_employees, 1);
}

#[tokio::test]
async fn test_workers_view_fetches_both_resources() {
    let backend = common::spawn().await;

    let view = backend.client.workers_view().await.unwrap();

    assert_eq!(view.workers.len(), 1);
    assert_eq!(view.departments.len(), 2);
    assert_eq!(view.department_name(&view.workers[0]), "Engineering");
    assert_eq!(backend.state.requests_to("GET", "/workers").await.len(), 1);
    assert_eq!(backend.state.requests_to("GET", "/departments").await.len(), 1);
}

#[tokio::test]
async fn test_workers_view_fails_when_one_side_fails() {
    let backend = common::spawn().await;
    backend
        .state
        .inject("/departments", StatusCode::INTERNAL_SERVER_ERROR, "{}")
        .await;

    let err = backend.client.workers_view().await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert_eq!(err.user_message(fallback::LOAD_WORKERS), "Failed to load data");
}

#[tokio::test]
async fn test_treasury_view_fails_when_one_side_fails() {
    let backend = common::spawn().await;
    backend
        .state
        .inject("/treasury/transactions", StatusCode::BAD_GATEWAY, "")
        .await;

    let err = backend.client.treasury_view().await.unwrap_err();

    assert_eq!(err.status(), Some(502));
    assert!(err.detail().is_none());
}

#[tokio::test]
async fn test_error_detail_surfaced() {
    let backend = common::spawn().await;
    backend
        .state
        .inject(
            "/departments",
            StatusCode::BAD_REQUEST,
            r#"{"detail": "Department with this name already exists"}"#,
        )
        .await;

    let err = backend
        .client
        .create_department(&NewDepartment {
            name: "Engineering".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(
        err.user_message(fallback::CREATE_DEPARTMENT),
        "Department with this name already exists"
    );
}

#[tokio::test]
async fn test_unknown_worker_status_is_not_found() {
    let backend = common::spawn().await;

    let err = backend.client.set_worker_status(404, false).await.unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.detail(), Some("Worker 404 not found"));
}

#[tokio::test]
async fn test_malformed_json_is_an_error() {
    let backend = common::spawn().await;
    backend
        .state
        .inject("/analytics", StatusCode::OK, "{not json")
        .await;

    let err = backend.client.analytics().await.unwrap_err();

    assert!(matches!(err, api_client::ClientError::Json(_)));
}

#[tokio::test]
async fn test_unreachable_backend_is_http_error() {
    let client = api_client::BossBoardClient::new(api_client::ClientConfig::new(
        "http://127.0.0.1:9/api",
    ));

    let err = client.departments().await.unwrap_err();

    assert!(matches!(err, api_client::ClientError::Http(_)));
    assert_eq!(err.user_message(fallback::LOAD_DEPARTMENTS), "Failed to load departments");
}
