use clap::Args;
use log::info;
use serde_json::Value;

use mortgage_core::analysis::analyze_loan;
use mortgage_core::report::export_schedule;
use mortgage_core::{AmortizationCalculator, LoanTerms};

use crate::input;

/// Loan inputs shared by every loan subcommand
#[derive(Args)]
pub struct LoanArgs {
    /// Amount borrowed
    #[arg(long, alias = "amount", allow_negative_numbers = true)]
    pub principal: Option<f64>,

    /// Annual interest rate as a percentage (e.g. 4.75 for 4.75%)
    #[arg(long, allow_negative_numbers = true)]
    pub rate: Option<f64>,

    /// Term of the loan in years
    #[arg(long, allow_negative_numbers = true)]
    pub years: Option<i32>,

    /// Path to JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for schedule generation
#[derive(Args)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub loan: LoanArgs,

    /// Write the text schedule to this file instead of printing every row
    #[arg(long)]
    pub out: Option<String>,
}

fn resolve_terms(args: &LoanArgs) -> Result<LoanTerms, Box<dyn std::error::Error>> {
    let terms = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        LoanTerms {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            annual_rate_percent: args
                .rate
                .ok_or("--rate is required (or provide --input)")?,
            years: args
                .years
                .ok_or("--years is required (or provide --input)")?,
        }
    };
    Ok(terms)
}

pub fn run_payment(args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let terms = resolve_terms(&args)?;
    let result = analyze_loan(&terms, false)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let terms = resolve_terms(&args.loan)?;

    match args.out {
        Some(path) => {
            let calc = AmortizationCalculator::from_terms(&terms);
            export_schedule(&calc, &path)?;
            info!("payment schedule saved to {path}");
            let result = analyze_loan(&terms, false)?;
            Ok(serde_json::to_value(result)?)
        }
        None => {
            let result = analyze_loan(&terms, true)?;
            Ok(serde_json::to_value(result)?)
        }
    }
}
