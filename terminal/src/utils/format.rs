//! # Display Formatting
//!
//! Currency and timestamp formatting for the UI layer.

use chrono::{DateTime, Local, Utc};
use rust_decimal::Decimal;

/// Format a monetary amount as Brazilian Real, e.g. `R$ 12.50`.
pub fn format_currency(amount: Decimal) -> String {
    format!("R$ {:.2}", amount)
}

/// Format a UTC timestamp in the local timezone, e.g. `28/08/2026 14:05`.
pub fn format_datetime(timestamp: DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%d/%m/%Y %H:%M")
        .to_string()
}

/// Short date form used in sale tables, e.g. `28/08/2026`.
pub fn format_date(timestamp: DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_currency_two_decimal_places() {
        assert_eq!(format_currency(dec("12.5")), "R$ 12.50");
        assert_eq!(format_currency(dec("0")), "R$ 0.00");
        assert_eq!(format_currency(dec("1234.567")), "R$ 1234.57");
    }
}
