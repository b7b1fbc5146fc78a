//! Fixed-point text formatting for amounts and rates.

/// Width of the `=` rules framing the banner.
pub const BANNER_WIDTH: usize = 45;

/// Fixed-point with exactly two decimals.
pub fn fixed2(value: f64) -> String {
    format!("{value:.2}")
}

/// `$` prefixed amount, e.g. `$521.65`.
pub fn money(value: f64) -> String {
    format!("${}", fixed2(value))
}

/// Percentage as entered, e.g. `4.75%`.
pub fn percent(rate_percent: f64) -> String {
    format!("{}%", fixed2(rate_percent))
}

/// Welcome banner: two `=` rules around a right-aligned greeting.
pub fn banner(program_name: &str) -> String {
    let rule = "=".repeat(BANNER_WIDTH);
    format!("{rule}\n{:>30}\n{:>34}\n{rule}\n", "Welcome to the ", program_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fixed2_rounds() {
        assert_eq!(fixed2(521.647_336_503_113_7), "521.65");
        assert_eq!(fixed2(0.0), "0.00");
        assert_eq!(fixed2(1_000_000.0), "1000000.00");
        assert_eq!(fixed2(2.004), "2.00");
    }

    #[test]
    fn test_fixed2_has_no_ambient_state() {
        let a = fixed2(1.0 / 3.0);
        let _ = format!("{:.6}", 1.0 / 3.0);
        assert_eq!(fixed2(1.0 / 3.0), a);
    }

    #[test]
    fn test_money_and_percent() {
        assert_eq!(money(100_000.0), "$100000.00");
        assert_eq!(percent(4.75), "4.75%");
    }

    #[test]
    fn test_banner_layout() {
        let b = banner("Mortgage Loan Calculator");
        let lines: Vec<&str> = b.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "=".repeat(45));
        assert_eq!(lines[1].len(), 30);
        assert!(lines[1].ends_with("Welcome to the "));
        assert_eq!(lines[2], format!("{:>34}", "Mortgage Loan Calculator"));
        assert_eq!(lines[3], lines[0]);
    }
}
