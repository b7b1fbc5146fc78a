use serde::{Deserialize, Serialize};

use crate::schedule::ScheduleRow;

/// Monetary amounts. Plain f64 so results match the closed-form formula bit for bit.
pub type Money = f64;

/// Rates expressed as fractions (0.0475 = 4.75%) unless the name says percent.
pub type Rate = f64;

/// Inputs describing one fixed-rate loan.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Amount borrowed.
    pub principal: Money,
    /// Annual interest rate as a percentage (4.75 means 4.75%).
    #[serde(alias = "rate")]
    pub annual_rate_percent: f64,
    /// Repayment term in years.
    pub years: i32,
}

impl LoanTerms {
    pub fn new(principal: Money, annual_rate_percent: f64, years: i32) -> Self {
        Self {
            principal,
            annual_rate_percent,
            years,
        }
    }
}

/// Headline figures for a loan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanSummary {
    pub loan_amount: Money,
    pub annual_rate_percent: f64,
    pub years: i32,
    pub periods: i32,
    pub monthly_rate: Rate,
    pub monthly_payment: Money,
    pub total_payback: Money,
    pub total_interest: Money,
}

/// Summary plus (optionally) the full payment schedule.
#[derive(Debug, Clone, Serialize)]
pub struct LoanAnalysis {
    pub summary: LoanSummary,
    pub schedule: Vec<ScheduleRow>,
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "f64".to_string(),
        },
    }
}
