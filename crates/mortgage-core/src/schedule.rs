//! Lazy amortization schedule.
//!
//! Rows are produced on demand from the starting balance. The schedule
//! always runs for the full number of periods, even when the balance has
//! already been paid down to zero: trailing rows then carry zero interest,
//! a principal portion equal to the payment, and a zero balance.

use serde::{Deserialize, Serialize};

use crate::types::{Money, Rate};

/// One payment period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// 1-based payment index.
    pub payment_number: u32,
    pub payment_amount: Money,
    pub interest: Money,
    pub principal: Money,
    /// Never negative.
    pub remaining_balance: Money,
}

/// Iterator over the rows of an amortization schedule.
#[derive(Debug, Clone)]
pub struct Schedule {
    balance: Money,
    monthly_rate: Rate,
    payment: Money,
    next: u32,
    periods: u32,
}

impl Schedule {
    /// A non-positive `periods` produces an empty schedule.
    pub fn new(principal: Money, monthly_rate: Rate, payment: Money, periods: i32) -> Self {
        Self {
            balance: principal,
            monthly_rate,
            payment,
            next: 1,
            periods: u32::try_from(periods).unwrap_or(0),
        }
    }

    pub fn payment(&self) -> Money {
        self.payment
    }
}

impl Iterator for Schedule {
    type Item = ScheduleRow;

    fn next(&mut self) -> Option<ScheduleRow> {
        if self.next > self.periods {
            return None;
        }

        let interest = self.monthly_rate * self.balance;
        let principal = self.payment - interest;
        self.balance -= principal;

        // floating-point drift can push the last balance just below zero
        if self.balance < 0.0 {
            self.balance = 0.0;
        }

        let row = ScheduleRow {
            payment_number: self.next,
            payment_amount: self.payment,
            interest,
            principal,
            remaining_balance: self.balance,
        };
        self.next += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.periods + 1).saturating_sub(self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Schedule {}

impl std::iter::FusedIterator for Schedule {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::AmortizationCalculator;
    use crate::types::LoanTerms;

    const ROW_TOL: f64 = 1e-6;

    fn loan(principal: f64, rate: f64, years: i32) -> AmortizationCalculator {
        AmortizationCalculator::from_terms(&LoanTerms::new(principal, rate, years))
    }

    #[test]
    fn test_length_matches_periods() {
        let calc = loan(100_000.0, 4.75, 30);
        let schedule = calc.schedule();
        assert_eq!(schedule.len(), 360);
        assert_eq!(schedule.count(), 360);
    }

    #[test]
    fn test_first_row_split() {
        let calc = loan(100_000.0, 4.75, 30);
        let first = calc.schedule().next().unwrap();
        assert_eq!(first.payment_number, 1);
        assert_eq!(first.interest, calc.monthly_interest_rate() * 100_000.0);
        assert_eq!(first.principal, calc.monthly_payment() - first.interest);
        assert_eq!(first.remaining_balance, 100_000.0 - first.principal);
    }

    #[test]
    fn test_last_row_pays_off() {
        let calc = loan(100_000.0, 4.75, 30);
        let last = calc.schedule().last().unwrap();
        assert_eq!(last.payment_number, 360);
        assert!(last.remaining_balance.abs() < 0.01);
    }

    #[test]
    fn test_rows_sum_to_payment() {
        let calc = loan(250_000.0, 6.5, 15);
        for row in calc.schedule() {
            assert!(row.remaining_balance >= 0.0);
            assert!((row.principal + row.interest - row.payment_amount).abs() < ROW_TOL);
        }
    }

    #[test]
    fn test_restartable() {
        let calc = loan(80_000.0, 3.25, 10);
        let first: Vec<_> = calc.schedule().collect();
        let second: Vec<_> = calc.schedule().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_negative_periods_is_empty() {
        let calc = loan(80_000.0, 3.25, -1);
        assert_eq!(calc.schedule().count(), 0);
    }

    #[test]
    fn test_rows_continue_after_payoff() {
        // payment larger than needed: balance hits zero early
        let mut schedule = Schedule::new(1_000.0, 0.01, 600.0, 4);
        let rows: Vec<_> = schedule.by_ref().collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1].remaining_balance, 0.0);
        assert_eq!(rows[2].interest, 0.0);
        assert_eq!(rows[2].principal, 600.0);
        assert_eq!(rows[3].remaining_balance, 0.0);
        assert!(schedule.next().is_none());
    }

    #[test]
    fn test_zero_rate_schedule_keeps_balance() {
        let calc = loan(12_000.0, 0.0, 1);
        let rows: Vec<_> = calc.schedule().collect();
        assert_eq!(rows.len(), 12);
        assert!(rows.iter().all(|r| r.payment_amount == 0.0));
        assert!(rows.iter().all(|r| r.remaining_balance == 12_000.0));
    }
}
