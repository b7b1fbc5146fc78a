//! Prompt-driven loop: one loan per iteration until the user declines
//! another or input runs out.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use log::error;

use mortgage_core::format::banner;
use mortgage_core::lifecycle::{with_calculator, LogHook};
use mortgage_core::report::{export_schedule, render_console_summary};
use mortgage_core::{AmortizationCalculator, MortgageError};

pub const PROGRAM_NAME: &str = "Mortgage Loan Calculator";

pub fn run<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<()> {
    write!(out, "{}", banner(PROGRAM_NAME))?;

    loop {
        let another = with_calculator(&LogHook, |loan| {
            process_loan(&mut *input, &mut *out, loan)
        })?;
        if !another {
            break;
        }
    }

    writeln!(
        out,
        "\nProgram terminated. Thank you for using the Mortgage Calculator."
    )?;
    out.flush()
}

/// Returns whether the user asked for another loan.
fn process_loan<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    loan: &mut AmortizationCalculator,
) -> io::Result<bool> {
    let Some(amount) = prompt_parse::<f64, _, _>(
        input,
        out,
        "\nEnter the amount of the loan: ",
        "loan amount",
    )?
    else {
        return Ok(false);
    };
    loan.set_loan_amount(amount);

    let Some(rate) = prompt_parse::<f64, _, _>(
        input,
        out,
        "Enter the annual interest rate as a percentage (e.g., 4.75 for 4.75%): ",
        "interest rate",
    )?
    else {
        return Ok(false);
    };
    loan.set_annual_interest_rate(rate);

    let Some(years) = prompt_parse::<i32, _, _>(
        input,
        out,
        "Enter the length of the loan in years: ",
        "years",
    )?
    else {
        return Ok(false);
    };
    loan.set_total_years_to_repay(years);

    write!(out, "\n{}", render_console_summary(loan))?;

    let generate = prompt_yes_no(
        input,
        out,
        "\nDo you want to generate the full payment schedule to a file? (y/n): ",
    )?;
    match generate {
        None => return Ok(false),
        Some(true) => {
            let Some(filename) = prompt_line(
                input,
                out,
                "Enter the output file name (e.g., schedule.txt): ",
            )?
            else {
                return Ok(false);
            };
            match export_schedule(loan, &filename) {
                Ok(()) => writeln!(out, "Payment schedule saved to {}", filename)?,
                Err(e) => {
                    error!("{e}");
                    writeln!(out, "ERROR: {}", e)?;
                }
            }
        }
        Some(false) => {}
    }

    let again = prompt_yes_no(input, out, "\nDo you wish to process another loan? (y/n): ")?;
    Ok(again.unwrap_or(false))
}

/// Next non-blank line, trimmed. `None` at end of input.
fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    loop {
        write!(out, "{}", prompt)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            return Ok(Some(trimmed.to_string()));
        }
    }
}

/// Re-prompts until the answer parses as `T`.
fn prompt_parse<T, R, W>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
    field: &str,
) -> io::Result<Option<T>>
where
    T: FromStr,
    R: BufRead,
    W: Write,
{
    loop {
        let Some(answer) = prompt_line(input, out, prompt)? else {
            return Ok(None);
        };
        match answer.parse::<T>() {
            Ok(v) => return Ok(Some(v)),
            Err(_) => {
                let e = MortgageError::InvalidInput {
                    field: field.to_string(),
                    reason: format!("'{}' is not a number", answer),
                };
                writeln!(out, "{}. Please try again.", e)?;
            }
        }
    }
}

/// Anything starting with `y` or `Y` is a yes.
fn prompt_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<bool>> {
    Ok(prompt_line(input, out, prompt)?
        .map(|answer| answer.starts_with(['y', 'Y'])))
}
