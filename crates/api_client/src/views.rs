//! Snapshots for pages that need two resources at once.

use core_types::{Department, TreasuryTransaction, Worker};
use web_types::TreasuryBalance;

/// Workers together with the departments needed to describe them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkersView {
    pub workers: Vec<Worker>,
    pub departments: Vec<Department>,
}

impl WorkersView {
    /// Departments that can receive new workers.
    pub fn active_departments(&self) -> impl Iterator<Item = &Department> {
        self.departments.iter().filter(|d| d.active)
    }

    /// Department name for a worker, "Unknown" when unresolved.
    pub fn department_name<'a>(&'a self, worker: &'a Worker) -> &'a str {
        worker.department_label(&self.departments)
    }

    pub fn find_worker(&self, worker_id: u32) -> Option<&Worker> {
        self.workers.iter().find(|w| w.id == worker_id)
    }
}

/// Treasury balance and its transaction log.
#[derive(Debug, Clone, PartialEq)]
pub struct TreasuryView {
    pub balance: TreasuryBalance,
    pub transactions: Vec<TreasuryTransaction>,
}
