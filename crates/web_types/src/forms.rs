//! Form input validation.
//!
//! Each form holds the raw strings typed by the user and validates them
//! into a request body. A failed validation never reaches the network.

use core_types::{is_valid_wallet, usdc_to_units};
use thiserror::Error;

use crate::{NewDepartment, NewWorker, TopUpRequest};

/// Department id meaning "no department selected".
pub const NO_DEPARTMENT: u32 = 0;

/// Client-side validation failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Department name is required")]
    DepartmentNameRequired,

    #[error("All fields are required")]
    MissingFields,

    #[error("Salary must be a positive number")]
    InvalidSalary,

    #[error("Invalid wallet address format (should be 0x followed by 40 hex characters)")]
    InvalidWallet,

    #[error("Please enter a valid amount")]
    InvalidAmount,
}

/// Department creation form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DepartmentForm {
    pub name: String,
}

impl DepartmentForm {
    pub fn validate(&self) -> Result<NewDepartment, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::DepartmentNameRequired);
        }
        Ok(NewDepartment {
            name: name.to_string(),
        })
    }
}

/// Worker creation form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkerForm {
    pub name: String,
    /// Selected department, `NO_DEPARTMENT` until one is picked
    pub department_id: u32,
    pub wallet: String,
    /// Salary in USDC as typed
    pub salary: String,
}

impl WorkerForm {
    /// Validate the form and convert the salary to smallest units.
    ///
    /// Checks run in a fixed order: required fields, salary, wallet. The
    /// wallet is checked exactly as typed and trimmed only for sending.
    pub fn validate(&self) -> Result<NewWorker, FormError> {
        let name = self.name.trim();
        let wallet = self.wallet.trim();
        let salary = self.salary.trim();

        if name.is_empty()
            || wallet.is_empty()
            || salary.is_empty()
            || self.department_id == NO_DEPARTMENT
        {
            return Err(FormError::MissingFields);
        }

        let salary = parse_positive(salary)
            .and_then(usdc_to_units)
            .ok_or(FormError::InvalidSalary)?;

        if !is_valid_wallet(&self.wallet) {
            return Err(FormError::InvalidWallet);
        }

        Ok(NewWorker {
            name: name.to_string(),
            department_id: self.department_id,
            wallet: wallet.to_string(),
            salary,
        })
    }
}

/// Treasury top-up form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TopUpForm {
    /// Amount in USDC as typed
    pub amount: String,
}

impl TopUpForm {
    pub fn validate(&self) -> Result<TopUpRequest, FormError> {
        parse_positive(self.amount.trim())
            .map(|amount| TopUpRequest { amount })
            .ok_or(FormError::InvalidAmount)
    }
}

/// Parse a finite number strictly greater than zero.
fn parse_positive(input: &str) -> Option<f64> {
    input
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}
