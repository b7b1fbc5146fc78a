//! Plain-text loan reports: the console summary and the schedule file.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::{debug, info};

use crate::calculator::AmortizationCalculator;
use crate::error::MortgageError;
use crate::format::{fixed2, money, percent, BANNER_WIDTH};
use crate::schedule::ScheduleRow;
use crate::MortgageResult;

pub const SCHEDULE_TITLE: &str = "Mortgage Payment Schedule";

const NUMBER_WIDTH: usize = 6;
const AMOUNT_WIDTH: usize = 16;
const BALANCE_WIDTH: usize = 20;

/// Header block of the schedule file.
pub fn write_summary<W: Write>(calc: &AmortizationCalculator, out: &mut W) -> io::Result<()> {
    writeln!(out, "Loan Amount: {}", money(calc.loan_amount()))?;
    writeln!(
        out,
        "Annual Interest Rate: {}",
        percent(calc.annual_interest_rate() * 100.0)
    )?;
    writeln!(out, "Years to repay: {}", calc.total_years_to_repay())?;
    writeln!(out, "Monthly Payment: {}", money(calc.monthly_payment()))?;
    writeln!(out, "Total Pay Back: {}", money(calc.total_payback()))
}

/// Title, summary and one row per period.
pub fn write_schedule<W: Write>(calc: &AmortizationCalculator, out: &mut W) -> io::Result<()> {
    writeln!(out, "{SCHEDULE_TITLE}")?;
    writeln!(out, "{}", "=".repeat(BANNER_WIDTH))?;
    write_summary(calc, out)?;
    writeln!(out)?;
    writeln!(
        out,
        "{:>nw$}{:>aw$}{:>aw$}{:>aw$}{:>bw$}",
        "Pmt#",
        "Payment Amount",
        "Interest",
        "Principal",
        "Remaining Balance",
        nw = NUMBER_WIDTH,
        aw = AMOUNT_WIDTH,
        bw = BALANCE_WIDTH,
    )?;

    for row in calc.schedule() {
        writeln!(out, "{}", schedule_line(&row))?;
    }
    Ok(())
}

/// One fixed-width schedule row.
pub fn schedule_line(row: &ScheduleRow) -> String {
    format!(
        "{:>nw$}{:>aw$}{:>aw$}{:>aw$}{:>bw$}",
        row.payment_number,
        fixed2(row.payment_amount),
        fixed2(row.interest),
        fixed2(row.principal),
        fixed2(row.remaining_balance),
        nw = NUMBER_WIDTH,
        aw = AMOUNT_WIDTH,
        bw = BALANCE_WIDTH,
    )
}

/// Write the full schedule to `path`, creating or truncating it.
///
/// Failure to open or write the file is returned as [`MortgageError::Io`];
/// a partially written file may be left behind.
pub fn export_schedule(calc: &AmortizationCalculator, path: impl AsRef<Path>) -> MortgageResult<()> {
    let path = path.as_ref();
    let io_err = |source| MortgageError::Io {
        path: path.to_path_buf(),
        source,
    };

    debug!("opening {} for schedule export", path.display());
    let file = File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    write_schedule(calc, &mut out).map_err(io_err)?;
    out.flush().map_err(io_err)?;

    info!(
        "wrote {} payment rows to {}",
        calc.schedule().len(),
        path.display()
    );
    Ok(())
}

/// Aligned block shown after each loan in interactive mode.
pub fn render_console_summary(calc: &AmortizationCalculator) -> String {
    format!(
        "Loan Amount:{:>15}{}\n\
         Annual Interest Rate:{:>9}%\n\
         Years to repay:{:>13}\n\
         Monthly Payment:{:>11}{}\n\
         Total Pay Back:{:>12}{}\n",
        "$",
        fixed2(calc.loan_amount()),
        fixed2(calc.annual_rate_percent()),
        calc.total_years_to_repay(),
        "$",
        fixed2(calc.monthly_payment()),
        "$",
        fixed2(calc.total_payback()),
    )
}
