use rust_decimal::Decimal;

use crate::portfolio::types::Portfolio;

/// Fallback shown when a portfolio report cannot be produced.
pub const UNAVAILABLE_MESSAGE: &str =
    "Unable to fetch wallet information. Please try again later.";

/// Format a USD amount to cents.
pub fn format_usd(amount: Decimal) -> String {
    format!("${:.2}", amount)
}

/// Format a SUI amount to four decimal places.
pub fn format_sui(amount: Decimal) -> String {
    format!("{:.4} SUI", amount)
}

/// Render the portfolio report: display name, address, totals.
pub fn format_portfolio(name: &str, address: &str, portfolio: &Portfolio) -> String {
    let mut output = format!("{}\n", name);
    output.push_str(&format!("Wallet Address: {}\n", address));
    output.push_str(&format!(
        "Total Value: {} ({})\n",
        format_usd(portfolio.total_usd),
        format_sui(portfolio.total_sui)
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(Decimal::from_str("123.456").unwrap()), "$123.46");
        assert_eq!(format_usd(Decimal::from_str("10.5").unwrap()), "$10.50");
        assert_eq!(format_usd(Decimal::ZERO), "$0.00");
    }

    #[test]
    fn test_format_sui() {
        assert_eq!(format_sui(Decimal::from_str("7.89012").unwrap()), "7.8901 SUI");
        assert_eq!(format_sui(Decimal::from_str("2.5").unwrap()), "2.5000 SUI");
    }

    #[test]
    fn test_format_portfolio() {
        let portfolio = Portfolio {
            total_sui: Decimal::from_str("7.89012").unwrap(),
            total_usd: Decimal::from_str("123.456").unwrap(),
        };
        let output = format_portfolio("Tracker", "0xabc", &portfolio);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "Tracker");
        assert_eq!(lines[1], "Wallet Address: 0xabc");
        assert_eq!(lines[2], "Total Value: $123.46 (7.8901 SUI)");
        assert!(output.ends_with('\n'));
    }
}
