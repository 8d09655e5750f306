//! Core types for the BossBoard payroll dashboard.
//!
//! This crate defines the entities served by the BossBoard REST backend
//! and the display helpers (money, wallets, timestamps) shared by the
//! web frontend and the CLI.

pub mod money;
pub mod timestamp;
pub mod wallet;

use serde::{Deserialize, Serialize};

pub use money::{USDC_SCALE, format_percent, format_units, format_usd, units_to_usdc, usdc_to_units};
pub use timestamp::format_timestamp;
pub use wallet::{WALLET_LEN, WALLET_PREFIX, is_valid_wallet, shorten_wallet};

/// Label used when a worker's department cannot be resolved.
pub const UNKNOWN_DEPARTMENT: &str = "Unknown";

/// Badge label for an active/inactive flag.
pub fn status_label(active: bool) -> &'static str {
    if active { "Active" } else { "Inactive" }
}

/// A department with its server-computed aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    /// Unique department identifier
    pub id: u32,
    /// Display name
    pub name: String,
    /// Whether new workers may be assigned to it
    pub active: bool,
    /// Number of workers in the department
    #[serde(default)]
    pub worker_count: u32,
    /// Monthly payroll cost in USDC
    #[serde(default)]
    pub total_monthly_payroll: f64,
}

impl Department {
    pub fn status_label(&self) -> &'static str {
        status_label(self.active)
    }
}

/// A worker on the payroll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Worker {
    /// Unique worker identifier
    pub id: u32,
    /// Full name
    pub name: String,
    /// Owning department
    pub department_id: u32,
    /// Department name, when the server includes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_name: Option<String>,
    /// Payout wallet address (`0x` + 40 hex characters)
    pub wallet: String,
    /// Monthly salary in USDC smallest units (6 decimals)
    pub salary: u64,
    /// Whether the worker is eligible for payroll
    pub active: bool,
}

impl Worker {
    pub fn status_label(&self) -> &'static str {
        status_label(self.active)
    }

    /// Salary formatted as dollars.
    pub fn salary_display(&self) -> String {
        format_units(self.salary)
    }

    /// Resolve the department name against a department list, "Unknown"
    /// when the id matches none of them.
    pub fn department_label<'a>(&self, departments: &'a [Department]) -> &'a str {
        departments
            .iter()
            .find(|d| d.id == self.department_id)
            .map_or(UNKNOWN_DEPARTMENT, |d| d.name.as_str())
    }
}

/// Direction of a treasury movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Funds entering the treasury (top-ups)
    Deposit,
    /// Funds leaving the treasury to workers
    Payroll,
}

impl TransactionKind {
    pub fn label(self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Payroll => "Payroll",
        }
    }

    pub fn sign(self) -> char {
        match self {
            TransactionKind::Deposit => '+',
            TransactionKind::Payroll => '-',
        }
    }
}

/// An entry in the treasury's append-only log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreasuryTransaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Amount in USDC
    pub amount: f64,
    /// ISO-8601 timestamp as sent by the server
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TreasuryTransaction {
    /// Amount with its direction sign, e.g. `+$1,000.00`.
    pub fn signed_amount(&self) -> String {
        format!("{}{}", self.kind.sign(), format_usd(self.amount))
    }

    pub fn description_or_dash(&self) -> &str {
        match self.description.as_deref() {
            Some(d) if !d.is_empty() => d,
            _ => "-",
        }
    }
}

/// One point of the revenue vs payroll series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePayrollPoint {
    pub date: String,
    pub revenue: f64,
    pub payroll: f64,
}

/// Headline numbers for the dashboard page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub treasury_balance: f64,
    pub revenue_this_month: f64,
    pub payroll_this_month: f64,
    pub profit: f64,
    /// Profit margin in percent
    pub margin: f64,
    #[serde(default)]
    pub revenue_vs_payroll: Vec<RevenuePayrollPoint>,
}

/// Total spend of one department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentSpend {
    pub name: String,
    pub value: f64,
}

/// A dated amount in a trend series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: String,
    pub amount: f64,
}

/// Precomputed aggregates for the analytics page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsData {
    #[serde(default)]
    pub spend_per_department: Vec<DepartmentSpend>,
    #[serde(default)]
    pub payroll_trend: Vec<TrendPoint>,
    #[serde(default)]
    pub profit_trend: Vec<TrendPoint>,
    pub most_expensive_department: String,
    pub total_employees: u32,
    /// Average salary in USDC
    pub average_salary: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engineering() -> Department {
        Department {
            id: 1,
            name: "Engineering".to_string(),
            active: true,
            worker_count: 3,
            total_monthly_payroll: 15_000.0,
        }
    }

    fn alice() -> Worker {
        Worker {
            id: 7,
            name: "Alice".to_string(),
            department_id: 1,
            department_name: None,
            wallet: format!("0x{}", "a".repeat(40)),
            salary: 5_000 * USDC_SCALE,
            active: true,
        }
    }

    #[test]
    fn test_department_deserializes_camel_case() {
        let json = r#"{"id":2,"name":"Ops","active":false,"workerCount":4,"totalMonthlyPayroll":1234.5}"#;
        let dept: Department = serde_json::from_str(json).unwrap();

        assert_eq!(dept.id, 2);
        assert_eq!(dept.worker_count, 4);
        assert!((dept.total_monthly_payroll - 1234.5).abs() < f64::EPSILON);
        assert_eq!(dept.status_label(), "Inactive");
    }

    #[test]
    fn test_worker_wire_names() {
        let json = serde_json::to_value(alice()).unwrap();

        assert_eq!(json["departmentId"], 1);
        assert_eq!(json["salary"], 5_000_000_000u64);
        assert!(json.get("departmentName").is_none());
    }

    #[test]
    fn test_worker_salary_display() {
        assert_eq!(alice().salary_display(), "$5,000.00");
    }

    #[test]
    fn test_worker_department_label() {
        let mut worker = alice();
        assert_eq!(worker.department_label(&[engineering()]), "Engineering");

        worker.department_id = 99;
        assert_eq!(worker.department_label(&[engineering()]), UNKNOWN_DEPARTMENT);

        worker.department_name = Some("Sales".to_string());
        assert_eq!(worker.department_label(&[engineering()]), UNKNOWN_DEPARTMENT);
    }

    #[test]
    fn test_worker_status_label() {
        let mut worker = alice();
        assert_eq!(worker.status_label(), "Active");
        worker.active = false;
        assert_eq!(worker.status_label(), "Inactive");
    }

    #[test]
    fn test_transaction_kind_from_type_field() {
        let json = r#"{"id":"tx-1","type":"payroll","amount":250.0,"timestamp":"2024-03-01T09:30:00Z"}"#;
        let tx: TreasuryTransaction = serde_json::from_str(json).unwrap();

        assert_eq!(tx.kind, TransactionKind::Payroll);
        assert_eq!(tx.kind.label(), "Payroll");
        assert_eq!(tx.signed_amount(), "-$250.00");
        assert_eq!(tx.description_or_dash(), "-");
    }

    #[test]
    fn test_deposit_signed_amount() {
        let tx = TreasuryTransaction {
            id: "tx-2".to_string(),
            kind: TransactionKind::Deposit,
            amount: 1_000.0,
            timestamp: "2024-03-01T09:30:00Z".to_string(),
            description: Some("Circle top-up".to_string()),
        };

        assert_eq!(tx.signed_amount(), "+$1,000.00");
        assert_eq!(tx.description_or_dash(), "Circle top-up");
    }

    #[test]
    fn test_dashboard_stats_deserialization() {
        let json = r#"{
            "treasuryBalance": 10000.0,
            "revenueThisMonth": 5000.0,
            "payrollThisMonth": 3000.0,
            "profit": 2000.0,
            "margin": 40.0,
            "revenueVsPayroll": [{"date": "2024-01", "revenue": 5000.0, "payroll": 3000.0}]
        }"#;
        let stats: DashboardStats = serde_json::from_str(json).unwrap();

        assert_eq!(stats.revenue_vs_payroll.len(), 1);
        assert!((stats.margin - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_analytics_deserialization() {
        let json = r#"{
            "spendPerDepartment": [{"name": "Engineering", "value": 15000.0}],
            "payrollTrend": [{"date": "2024-01", "amount": 15000.0}],
            "profitTrend": [],
            "mostExpensiveDepartment": "Engineering",
            "totalEmployees": 3,
            "averageSalary": 5000.0
        }"#;
        let analytics: AnalyticsData = serde_json::from_str(json).unwrap();

        assert_eq!(analytics.most_expensive_department, "Engineering");
        assert_eq!(analytics.total_employees, 3);
        assert!(analytics.profit_trend.is_empty());
    }
}
