//! Wire payloads for the BossBoard REST API.
//!
//! Entities live in `core_types`; this crate holds the request bodies,
//! the small response envelopes, the error body and the form validation
//! that turns raw user input into request bodies.

pub mod forms;

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub use forms::{DepartmentForm, FormError, TopUpForm, WorkerForm};

/// Delay between a successful top-up and the treasury re-read.
///
/// Settlement runs asynchronously on the server; there is no completion
/// signal to wait for.
pub const TOP_UP_SETTLE_DELAY: Duration = Duration::from_secs(2);

/// Fallback messages shown when a failure carries no server detail.
pub mod fallback {
    pub const LOAD_DASHBOARD: &str = "Failed to load dashboard stats";
    pub const LOAD_DEPARTMENTS: &str = "Failed to load departments";
    pub const LOAD_WORKERS: &str = "Failed to load data";
    pub const LOAD_TREASURY: &str = "Failed to load treasury data";
    pub const LOAD_ANALYTICS: &str = "Failed to load analytics";
    pub const CREATE_DEPARTMENT: &str = "Failed to create department";
    pub const ADD_WORKER: &str = "Failed to add worker";
    pub const UPDATE_WORKER_STATUS: &str = "Failed to update worker status";
    pub const TOP_UP: &str = "Failed to top up treasury";
    pub const TOP_UP_STARTED: &str = "Top-up initiated successfully";
}

/// POST /departments body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDepartment {
    pub name: String,
}

/// POST /workers body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorker {
    pub name: String,
    pub department_id: u32,
    pub wallet: String,
    /// Salary in USDC smallest units
    pub salary: u64,
}

/// PATCH /workers/{id}/status body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkerStatusUpdate {
    pub active: bool,
}

/// POST /treasury/top-up body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TopUpRequest {
    /// Amount in USDC (not smallest units)
    pub amount: f64,
}

/// GET /treasury/balance response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreasuryBalance {
    /// Balance in USDC
    pub balance: f64,
    /// Server-formatted balance, shown as-is
    pub balance_formatted: String,
}

/// POST /treasury/top-up response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopUpResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

impl TopUpResponse {
    /// Message to show after a successful top-up.
    pub fn display_message(&self) -> &str {
        if self.message.is_empty() {
            fallback::TOP_UP_STARTED
        } else {
            &self.message
        }
    }
}

/// Error body returned by the backend on non-2xx responses.
///
/// `detail` is usually a string; validation failures send a list of
/// `{loc, msg, type}` objects instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ApiErrorBody {
    /// Parse an error body, returning `None` when it is not JSON.
    pub fn parse(body: &[u8]) -> Option<Self> {
        serde_json::from_slice(body).ok()
    }

    /// Human-readable message carried by the body, if any.
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            serde_json::Value::Array(items) => {
                let msgs: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                    .collect();
                if msgs.is_empty() {
                    None
                } else {
                    Some(msgs.join("; "))
                }
            }
            _ => None,
        }
    }
}
