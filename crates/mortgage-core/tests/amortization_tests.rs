use mortgage_core::analysis::analyze_loan;
use mortgage_core::{AmortizationCalculator, LoanTerms, ScheduleRow};

fn assert_close(actual: f64, expected: f64, tol: f64, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{}: expected ~{}, got {} (diff = {})",
        msg,
        expected,
        actual,
        diff
    );
}

// ===========================================================================
// Payment figures
// ===========================================================================

#[test]
fn test_reference_thirty_year_loan() {
    let calc = AmortizationCalculator::from_terms(&LoanTerms::new(100_000.0, 4.75, 30));

    // r = 0.0475 / 12, n = 360
    assert_close(calc.monthly_payment(), 521.65, 0.005, "monthly payment");
    assert_eq!(format!("{:.2}", calc.monthly_payment()), "521.65");
    assert_eq!(calc.total_payback(), calc.monthly_payment() * 360.0);
}

#[test]
fn test_one_year_twelve_percent() {
    // 1% per month on 1,200 over 12 months
    let calc = AmortizationCalculator::from_terms(&LoanTerms::new(1_200.0, 12.0, 1));
    assert_close(calc.monthly_payment(), 106.62, 0.005, "monthly payment");
}

#[test]
fn test_setters_match_from_terms() {
    let mut calc = AmortizationCalculator::new();
    calc.set_loan_amount(325_000.0);
    calc.set_annual_interest_rate(6.875);
    calc.set_total_years_to_repay(25);

    let direct = AmortizationCalculator::from_terms(&LoanTerms::new(325_000.0, 6.875, 25));
    assert_eq!(calc, direct);
    assert_eq!(calc.monthly_payment(), direct.monthly_payment());
}

#[test]
fn test_zero_guards() {
    for terms in [
        LoanTerms::new(100_000.0, 5.0, 0),
        LoanTerms::new(100_000.0, 0.0, 30),
        LoanTerms::new(0.0, 0.0, 0),
    ] {
        let calc = AmortizationCalculator::from_terms(&terms);
        assert_eq!(calc.monthly_payment(), 0.0, "{terms:?}");
        assert_eq!(calc.total_payback(), 0.0, "{terms:?}");
    }
}

#[test]
fn test_negative_principal_flows_through() {
    let calc = AmortizationCalculator::from_terms(&LoanTerms::new(-100_000.0, 4.75, 30));
    assert_close(calc.monthly_payment(), -521.65, 0.005, "negative principal");
}

// ===========================================================================
// Schedule
// ===========================================================================

#[test]
fn test_schedule_totals() {
    let calc = AmortizationCalculator::from_terms(&LoanTerms::new(200_000.0, 5.5, 20));
    let rows: Vec<ScheduleRow> = calc.schedule().collect();

    assert_eq!(rows.len(), 240);

    let principal_paid: f64 = rows.iter().map(|r| r.principal).sum();
    assert_close(principal_paid, 200_000.0, 0.01, "principal repaid");

    let interest_paid: f64 = rows.iter().map(|r| r.interest).sum();
    assert_close(
        interest_paid,
        calc.total_payback() - 200_000.0,
        0.01,
        "interest paid",
    );
}

#[test]
fn test_balance_decreases_monotonically() {
    let calc = AmortizationCalculator::from_terms(&LoanTerms::new(150_000.0, 3.9, 15));
    let mut prev = 150_000.0;
    for row in calc.schedule() {
        assert!(row.remaining_balance <= prev);
        prev = row.remaining_balance;
    }
}

#[test]
fn test_payment_numbers_are_sequential() {
    let calc = AmortizationCalculator::from_terms(&LoanTerms::new(10_000.0, 7.0, 2));
    let numbers: Vec<u32> = calc.schedule().map(|r| r.payment_number).collect();
    assert_eq!(numbers, (1..=24).collect::<Vec<u32>>());
}

#[test]
fn test_mutation_invalidates_previous_schedule() {
    let mut calc = AmortizationCalculator::from_terms(&LoanTerms::new(10_000.0, 7.0, 2));
    let before: Vec<_> = calc.schedule().collect();
    calc.set_total_years_to_repay(3);
    let after: Vec<_> = calc.schedule().collect();
    assert_eq!(before.len(), 24);
    assert_eq!(after.len(), 36);
    assert!(after[0].payment_amount < before[0].payment_amount);
}

// ===========================================================================
// Analysis envelope
// ===========================================================================

#[test]
fn test_analysis_serializes() {
    let out = analyze_loan(&LoanTerms::new(100_000.0, 4.75, 30), true).unwrap();
    let json = serde_json::to_value(&out).unwrap();

    assert_eq!(json["result"]["summary"]["periods"], 360);
    assert_eq!(json["result"]["schedule"].as_array().unwrap().len(), 360);
    assert_eq!(json["result"]["schedule"][0]["payment_number"], 1);
    assert!(json["warnings"].as_array().unwrap().is_empty());
}

#[test]
fn test_terms_deserialize_with_rate_alias() {
    let terms: LoanTerms =
        serde_json::from_str(r#"{"principal": 90000, "rate": 5.25, "years": 15}"#).unwrap();
    assert_eq!(terms, LoanTerms::new(90_000.0, 5.25, 15));
}
