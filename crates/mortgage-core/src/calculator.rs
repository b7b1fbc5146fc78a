//! Fixed-rate annuity calculator.
//!
//! The calculator holds the three loan inputs plus the per-period values
//! derived from them. Payment, payback and schedule are recomputed from the
//! current inputs on every call; nothing derived is cached.

use crate::schedule::Schedule;
use crate::types::{LoanSummary, LoanTerms, Money, Rate};

const MONTHS_PER_YEAR: i32 = 12;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AmortizationCalculator {
    loan_amount: Money,
    annual_rate_percent: f64,
    annual_interest_rate: Rate,
    monthly_interest_rate: Rate,
    total_years_to_repay: i32,
    number_of_payments: i32,
}

impl AmortizationCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a calculator with all three inputs applied.
    pub fn from_terms(terms: &LoanTerms) -> Self {
        let mut calc = Self::new();
        calc.set_loan_amount(terms.principal);
        calc.set_annual_interest_rate(terms.annual_rate_percent);
        calc.set_total_years_to_repay(terms.years);
        calc
    }

    /// Stores the principal verbatim.
    pub fn set_loan_amount(&mut self, amount: Money) {
        self.loan_amount = amount;
    }

    /// Takes the rate as a percentage (4.75 for 4.75%) and stores it as a fraction.
    pub fn set_annual_interest_rate(&mut self, rate_percent: f64) {
        self.annual_rate_percent = rate_percent;
        self.annual_interest_rate = rate_percent / 100.0;
        self.monthly_interest_rate = self.annual_interest_rate / 12.0;
    }

    /// Non-positive terms are accepted and produce no scheduled payments.
    pub fn set_total_years_to_repay(&mut self, years: i32) {
        self.total_years_to_repay = years;
        self.number_of_payments = years.saturating_mul(MONTHS_PER_YEAR);
    }

    pub fn loan_amount(&self) -> Money {
        self.loan_amount
    }

    /// Annual rate as a fraction.
    pub fn annual_interest_rate(&self) -> Rate {
        self.annual_interest_rate
    }

    /// Annual rate as originally entered.
    pub fn annual_rate_percent(&self) -> f64 {
        self.annual_rate_percent
    }

    pub fn monthly_interest_rate(&self) -> Rate {
        self.monthly_interest_rate
    }

    pub fn total_years_to_repay(&self) -> i32 {
        self.total_years_to_repay
    }

    pub fn number_of_payments(&self) -> i32 {
        self.number_of_payments
    }

    pub fn terms(&self) -> LoanTerms {
        LoanTerms::new(
            self.loan_amount,
            self.annual_rate_percent,
            self.total_years_to_repay,
        )
    }

    /// Fixed monthly payment from the annuity formula.
    ///
    /// `payment = P * r * (1 + r)^n / ((1 + r)^n - 1)`, with `r` the monthly
    /// rate and `n` the number of payments. Returns 0 when either is zero.
    pub fn monthly_payment(&self) -> Money {
        if self.monthly_interest_rate == 0.0 || self.number_of_payments == 0 {
            return 0.0;
        }

        let power_factor =
            (1.0 + self.monthly_interest_rate).powf(f64::from(self.number_of_payments));
        (self.loan_amount * self.monthly_interest_rate * power_factor) / (power_factor - 1.0)
    }

    pub fn total_payback(&self) -> Money {
        self.monthly_payment() * f64::from(self.number_of_payments)
    }

    /// Month-by-month schedule, starting again from the full principal on each call.
    pub fn schedule(&self) -> Schedule {
        Schedule::new(
            self.loan_amount,
            self.monthly_interest_rate,
            self.monthly_payment(),
            self.number_of_payments,
        )
    }

    pub fn summary(&self) -> LoanSummary {
        let monthly_payment = self.monthly_payment();
        let total_payback = monthly_payment * f64::from(self.number_of_payments);
        LoanSummary {
            loan_amount: self.loan_amount,
            annual_rate_percent: self.annual_rate_percent,
            years: self.total_years_to_repay,
            periods: self.number_of_payments,
            monthly_rate: self.monthly_interest_rate,
            monthly_payment,
            total_payback,
            total_interest: total_payback - self.loan_amount,
        }
    }
}

impl From<&LoanTerms> for AmortizationCalculator {
    fn from(terms: &LoanTerms) -> Self {
        Self::from_terms(terms)
    }
}
