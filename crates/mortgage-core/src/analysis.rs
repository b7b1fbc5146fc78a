//! Loan analysis wrapped in the standard computation envelope.
//!
//! Inputs are never rejected. Values that make the figures meaningless
//! (negative principal, non-positive term, zero rate, non-finite numbers)
//! are reported as warnings alongside the unchanged calculator output.

use std::time::Instant;

use log::warn;

use crate::calculator::AmortizationCalculator;
use crate::types::{with_metadata, ComputationOutput, LoanAnalysis, LoanTerms};
use crate::MortgageResult;

pub const METHODOLOGY: &str = "Fixed-rate annuity amortization";

/// Compute the summary for `terms`, with the full schedule when requested.
pub fn analyze_loan(
    terms: &LoanTerms,
    include_schedule: bool,
) -> MortgageResult<ComputationOutput<LoanAnalysis>> {
    let start = Instant::now();
    let warnings = input_warnings(terms);
    for w in &warnings {
        warn!("{w}");
    }

    let calc = AmortizationCalculator::from_terms(terms);
    let schedule = if include_schedule {
        calc.schedule().collect()
    } else {
        Vec::new()
    };

    let result = LoanAnalysis {
        summary: calc.summary(),
        schedule,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(METHODOLOGY, terms, warnings, elapsed, result))
}

fn input_warnings(terms: &LoanTerms) -> Vec<String> {
    let mut warnings = Vec::new();

    if !terms.principal.is_finite() || !terms.annual_rate_percent.is_finite() {
        warnings.push("Non-finite input; results are not meaningful".into());
    }
    if terms.principal < 0.0 {
        warnings.push(format!(
            "Negative principal ({}); figures will be negative",
            terms.principal
        ));
    }
    if terms.years <= 0 {
        warnings.push(format!(
            "Term of {} years schedules no payments; monthly payment is 0",
            terms.years
        ));
    }
    if terms.annual_rate_percent == 0.0 {
        warnings.push("Zero interest rate; monthly payment is defined as 0".into());
    }

    warnings
}
