//! In-process fake of the BossBoard backend for client tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use api_client::{BossBoardClient, ClientConfig};
use axum::{
    Json, Router,
    body::Body,
    extract::{Path, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, patch, post},
};
use core_types::{
    AnalyticsData, DashboardStats, Department, DepartmentSpend, RevenuePayrollPoint,
    TransactionKind, TreasuryTransaction, TrendPoint, Worker,
};
use serde_json::{Value, json};
use tokio::sync::RwLock;
use web_types::{NewDepartment, NewWorker, TopUpRequest, TreasuryBalance, WorkerStatusUpdate};

/// A request as seen by the fake backend.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub at: Instant,
}

/// A canned response that replaces the real handler for one path.
#[derive(Debug, Clone)]
pub struct Injected {
    pub status: StatusCode,
    pub body: String,
}

#[derive(Default)]
struct Store {
    departments: Vec<Department>,
    workers: Vec<Worker>,
    transactions: Vec<TreasuryTransaction>,
    balance: f64,
    requests: Vec<RecordedRequest>,
    bodies: Vec<(String, Value)>,
    injected: HashMap<String, Injected>,
}

/// Shared state of the fake backend.
#[derive(Clone, Default)]
pub struct FakeState {
    store: Arc<RwLock<Store>>,
}

impl FakeState {
    fn seeded() -> Self {
        let store = Store {
            departments: vec![
                Department {
                    id: 1,
                    name: "Engineering".to_string(),
                    active: true,
                    worker_count: 1,
                    total_monthly_payroll: 4_000.0,
                },
                Department {
                    id: 2,
                    name: "Legacy".to_string(),
                    active: false,
                    worker_count: 0,
                    total_monthly_payroll: 0.0,
                },
            ],
            workers: vec![Worker {
                id: 7,
                name: "Bob".to_string(),
                department_id: 1,
                department_name: None,
                wallet: format!("0x{}", "7".repeat(40)),
                salary: 4_000_000_000,
                active: true,
            }],
            transactions: vec![TreasuryTransaction {
                id: "tx-1".to_string(),
                kind: TransactionKind::Deposit,
                amount: 10_000.0,
                timestamp: "2024-03-01T09:30:00Z".to_string(),
                description: Some("Initial funding".to_string()),
            }],
            balance: 10_000.0,
            ..Default::default()
        };
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Make every request to `path` answer with `status` and a raw body.
    pub async fn inject(&self, path: &str, status: StatusCode, body: &str) {
        self.store.write().await.injected.insert(
            path.to_string(),
            Injected {
                status,
                body: body.to_string(),
            },
        );
    }

    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.store.read().await.requests.clone()
    }

    /// Requests matching a method and path, in arrival order.
    pub async fn requests_to(&self, method: &str, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .await
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }

    /// JSON bodies received for a path, in arrival order.
    pub async fn bodies_for(&self, path: &str) -> Vec<Value> {
        self.store
            .read()
            .await
            .bodies
            .iter()
            .filter(|(p, _)| p == path)
            .map(|(_, b)| b.clone())
            .collect()
    }

    async fn record_body(&self, path: String, body: Value) {
        self.store.write().await.bodies.push((path, body));
    }
}

/// A running fake backend and a client pointed at it.
pub struct FakeBackend {
    pub state: FakeState,
    pub client: BossBoardClient,
}

/// Start a seeded fake backend on an ephemeral port.
pub async fn spawn() -> FakeBackend {
    let state = FakeState::seeded();
    let app = router(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = BossBoardClient::new(ClientConfig::new(format!("http://{addr}/api")));
    FakeBackend { state, client }
}

fn router(state: FakeState) -> Router {
    let api = Router::new()
        .route("/dashboard/stats", get(dashboard_stats))
        .route("/treasury/balance", get(treasury_balance))
        .route("/treasury/top-up", post(top_up))
        .route("/treasury/transactions", get(treasury_transactions))
        .route("/departments", get(list_departments).post(create_department))
        .route("/workers", get(list_workers).post(create_worker))
        .route("/workers/:id/status", patch(update_worker_status))
        .route("/analytics", get(analytics));

    Router::new()
        .nest("/api", api)
        .layer(middleware::from_fn_with_state(state.clone(), record_and_inject))
        .with_state(state)
}

/// Record every request and short-circuit paths with an injected response.
async fn record_and_inject(State(state): State<FakeState>, request: Request, next: Next) -> Response {
    let path = request
        .uri()
        .path()
        .strip_prefix("/api")
        .unwrap_or(request.uri().path())
        .to_string();

    let injected = {
        let mut store = state.store.write().await;
        store.requests.push(RecordedRequest {
            method: request.method().to_string(),
            path: path.clone(),
            at: Instant::now(),
        });
        store.injected.get(&path).cloned()
    };

    match injected {
        Some(Injected { status, body }) => Response::builder()
            .status(status)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap(),
        None => next.run(request).await,
    }
}

fn not_found(message: String) -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": message })))
}

async fn dashboard_stats() -> Json<DashboardStats> {
    Json(DashboardStats {
        treasury_balance: 10_000.0,
        revenue_this_month: 8_000.0,
        payroll_this_month: 4_000.0,
        profit: 4_000.0,
        margin: 50.0,
        revenue_vs_payroll: vec![
            RevenuePayrollPoint {
                date: "2024-01".to_string(),
                revenue: 7_000.0,
                payroll: 4_000.0,
            },
            RevenuePayrollPoint {
                date: "2024-02".to_string(),
                revenue: 8_000.0,
                payroll: 4_000.0,
            },
        ],
    })
}

async fn treasury_balance(State(state): State<FakeState>) -> Json<TreasuryBalance> {
    let balance = state.store.read().await.balance;
    Json(TreasuryBalance {
        balance,
        balance_formatted: format!("{balance:.2} USDC"),
    })
}

async fn top_up(State(state): State<FakeState>, Json(req): Json<TopUpRequest>) -> Json<Value> {
    state
        .record_body("/treasury/top-up".to_string(), json!(req))
        .await;

    let mut store = state.store.write().await;
    store.balance += req.amount;
    let id = format!("tx-{}", store.transactions.len() + 1);
    store.transactions.push(TreasuryTransaction {
        id,
        kind: TransactionKind::Deposit,
        amount: req.amount,
        timestamp: "2024-03-02T10:00:00Z".to_string(),
        description: Some("Circle top-up".to_string()),
    });

    Json(json!({ "success": true, "message": "Top-up initiated" }))
}

async fn treasury_transactions(State(state): State<FakeState>) -> Json<Vec<TreasuryTransaction>> {
    Json(state.store.read().await.transactions.clone())
}

async fn list_departments(State(state): State<FakeState>) -> Json<Vec<Department>> {
    Json(state.store.read().await.departments.clone())
}

async fn create_department(
    State(state): State<FakeState>,
    Json(req): Json<NewDepartment>,
) -> Json<Department> {
    state.record_body("/departments".to_string(), json!(req)).await;

    let mut store = state.store.write().await;
    let department = Department {
        id: store.departments.len() as u32 + 1,
        name: req.name,
        active: true,
        worker_count: 0,
        total_monthly_payroll: 0.0,
    };
    store.departments.push(department.clone());
    Json(department)
}

async fn list_workers(State(state): State<FakeState>) -> Json<Vec<Worker>> {
    Json(state.store.read().await.workers.clone())
}

async fn create_worker(
    State(state): State<FakeState>,
    Json(req): Json<NewWorker>,
) -> Result<Json<Worker>, (StatusCode, Json<Value>)> {
    state.record_body("/workers".to_string(), json!(req)).await;

    let mut store = state.store.write().await;
    if !store.departments.iter().any(|d| d.id == req.department_id) {
        return Err(not_found(format!("Department {} not found", req.department_id)));
    }

    let worker = Worker {
        id: store.workers.iter().map(|w| w.id).max().unwrap_or(0) + 1,
        name: req.name,
        department_id: req.department_id,
        department_name: None,
        wallet: req.wallet,
        salary: req.salary,
        active: true,
    };
    store.workers.push(worker.clone());
    Ok(Json(worker))
}

async fn update_worker_status(
    State(state): State<FakeState>,
    Path(id): Path<u32>,
    Json(req): Json<WorkerStatusUpdate>,
) -> Result<Json<Worker>, (StatusCode, Json<Value>)> {
    state
        .record_body(format!("/workers/{id}/status"), json!(req))
        .await;

    let mut store = state.store.write().await;
    let worker = store
        .workers
        .iter_mut()
        .find(|w| w.id == id)
        .ok_or_else(|| not_found(format!("Worker {id} not found")))?;
    worker.active = req.active;
    Ok(Json(worker.clone()))
}

async fn analytics() -> impl IntoResponse {
    Json(AnalyticsData {
        spend_per_department: vec![DepartmentSpend {
            name: "Engineering".to_string(),
            value: 4_000.0,
        }],
        payroll_trend: vec![TrendPoint {
            date: "2024-02".to_string(),
            amount: 4_000.0,
        }],
        profit_trend: vec![TrendPoint {
            date: "2024-02".to_string(),
            amount: 4_000.0,
        }],
        most_expensive_department: "Engineering".to_string(),
        total_employees: 1,
        average_salary: 4_000.0,
    })
}
