//! Typed async client for the BossBoard REST API.
//!
//! This crate provides:
//! - BossBoardClient: one method per backend endpoint
//! - WorkersView / TreasuryView: concurrent two-resource fetches
//!
//! Every method issues its requests exactly once. Nothing is retried,
//! cached or deduplicated; failures go straight back to the caller.

mod views;

use std::future::Future;
use std::time::Duration;

use core_types::{AnalyticsData, DashboardStats, Department, TreasuryTransaction, Worker};
pub use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};
use web_types::{
    ApiErrorBody, NewDepartment, NewWorker, TOP_UP_SETTLE_DELAY, TopUpRequest, TopUpResponse,
    TreasuryBalance, WorkerStatusUpdate,
};

pub use views::{TreasuryView, WorkersView};

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Wait `TOP_UP_SETTLE_DELAY` with the caller's timer, then run `next`.
///
/// `next` is not polled before the delay has elapsed, so requests it
/// makes go out no earlier than the delay after the call.
pub async fn settle_then<S, SleepFut, Next>(sleep: S, next: Next) -> Next::Output
where
    S: FnOnce(Duration) -> SleepFut,
    SleepFut: Future<Output = ()>,
    Next: Future,
{
    sleep(TOP_UP_SETTLE_DELAY).await;
    next.await
}

/// Errors from API calls.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{method} {path} returned status {status}")]
    Status {
        method: Method,
        path: String,
        status: u16,
        /// Message from the error body's `detail` field
        detail: Option<String>,
    },

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// Server-provided message, if the failure carried one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ClientError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// HTTP status of a rejected request.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message to show the user: the server detail verbatim, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Configuration for the API client.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL including the `/api` prefix (default: http://localhost:8000/api)
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Client for the BossBoard REST API.
#[derive(Debug, Clone)]
pub struct BossBoardClient {
    config: ClientConfig,
    client: reqwest::Client,
}

impl BossBoardClient {
    /// Create a new client with the given config.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// GET /dashboard/stats
    pub async fn dashboard_stats(&self) -> Result<DashboardStats> {
        self.get("/dashboard/stats").await
    }

    /// GET /treasury/balance
    pub async fn treasury_balance(&self) -> Result<TreasuryBalance> {
        self.get("/treasury/balance").await
    }

    /// POST /treasury/top-up
    ///
    /// Starts the external deposit flow; the balance changes later.
    pub async fn top_up(&self, amount: f64) -> Result<TopUpResponse> {
        self.send(Method::POST, "/treasury/top-up", &TopUpRequest { amount })
            .await
    }

    /// GET /treasury/transactions
    pub async fn treasury_transactions(&self) -> Result<Vec<TreasuryTransaction>> {
        self.get("/treasury/transactions").await
    }

    /// GET /departments
    pub async fn departments(&self) -> Result<Vec<Department>> {
        self.get("/departments").await
    }

    /// POST /departments
    pub async fn create_department(&self, department: &NewDepartment) -> Result<Department> {
        self.send(Method::POST, "/departments", department).await
    }

    /// GET /workers
    pub async fn workers(&self) -> Result<Vec<Worker>> {
        self.get("/workers").await
    }

    /// POST /workers
    pub async fn create_worker(&self, worker: &NewWorker) -> Result<Worker> {
        self.send(Method::POST, "/workers", worker).await
    }

    /// PATCH /workers/{id}/status
    pub async fn set_worker_status(&self, worker_id: u32, active: bool) -> Result<Worker> {
        let path = format!("/workers/{worker_id}/status");
        self.send(Method::PATCH, &path, &WorkerStatusUpdate { active })
            .await
    }

    /// Flip a worker's status. Sends the negation of the status shown.
    pub async fn toggle_worker(&self, worker: &Worker) -> Result<Worker> {
        self.set_worker_status(worker.id, !worker.active).await
    }

    /// GET /analytics
    pub async fn analytics(&self) -> Result<AnalyticsData> {
        self.get("/analytics").await
    }

    /// Fetch workers and departments concurrently.
    ///
    /// Fails as a whole if either request fails.
    pub async fn workers_view(&self) -> Result<WorkersView> {
        let (workers, departments) = futures::try_join!(self.workers(), self.departments())?;
        Ok(WorkersView {
            workers,
            departments,
        })
    }

    /// Fetch the treasury balance and transaction log concurrently.
    ///
    /// Fails as a whole if either request fails.
    pub async fn treasury_view(&self) -> Result<TreasuryView> {
        let (balance, transactions) =
            futures::try_join!(self.treasury_balance(), self.treasury_transactions())?;
        Ok(TreasuryView {
            balance,
            transactions,
        })
    }

    /// Top up, wait `TOP_UP_SETTLE_DELAY`, then re-read the treasury.
    ///
    /// `sleep` is supplied by the caller so the same flow runs on tokio
    /// and in the browser. The wait is fixed; nothing confirms settlement.
    pub async fn top_up_then_refresh<F, Fut>(
        &self,
        amount: f64,
        sleep: F,
    ) -> Result<(TopUpResponse, TreasuryView)>
    where
        F: FnOnce(Duration) -> Fut,
        Fut: Future<Output = ()>,
    {
        let response = self.top_up(amount).await?;
        let view = settle_then(sleep, self.treasury_view()).await?;
        Ok((response, view))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!(method = "GET", path, "sending request");
        let response = self
            .client
            .get(self.url(path))
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;
        Self::read(Method::GET, path, response).await
    }

    async fn send<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(%method, path, "sending request");
        let response = self
            .client
            .request(method.clone(), self.url(path))
            .header(ACCEPT, "application/json")
            .json(body)
            .send()
            .await?;
        Self::read(method, path, response).await
    }

    async fn read<T: DeserializeOwned>(
        method: Method,
        path: &str,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let detail = ApiErrorBody::parse(&body).and_then(|b| b.message());
            warn!(%method, path, status = status.as_u16(), ?detail, "request rejected");
            return Err(ClientError::Status {
                method,
                path: path.to_string(),
                status: status.as_u16(),
                detail,
            });
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

impl Default for BossBoardClient {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}
