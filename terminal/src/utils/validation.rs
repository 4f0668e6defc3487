/// Validation utilities for user input

use rust_decimal::Decimal;

use crate::core::error::AppError;

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Validate a required text field
pub fn validate_required(field_name: &str, value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return ValidationResult::err(format!("{} is required", field_name));
    }
    ValidationResult::ok()
}

/// Parse a price entered in a form field
///
/// Accepts `12.50`, `12,50` and plain integers. Rejects empty, malformed
/// and negative values.
pub fn parse_price(input: &str) -> Result<Decimal, AppError> {
    let normalized = input.trim().replace(',', ".");
    if normalized.is_empty() {
        return Err(AppError::Validation("Price is required".to_string()));
    }

    let price: Decimal = normalized
        .parse()
        .map_err(|_| AppError::Validation(format!("Invalid price: {}", input.trim())))?;

    if price < Decimal::ZERO {
        return Err(AppError::Validation("Price cannot be negative".to_string()));
    }

    Ok(price)
}

/// Parse a stock quantity entered in a form field
pub fn parse_stock(input: &str) -> Result<i64, AppError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("Stock is required".to_string()));
    }

    let stock: i64 = trimmed
        .parse()
        .map_err(|_| AppError::Validation(format!("Invalid stock quantity: {}", trimmed)))?;

    if stock < 0 {
        return Err(AppError::Validation("Stock cannot be negative".to_string()));
    }

    Ok(stock)
}

/// Validate an optional `YYYY-MM-DD` date filter field
///
/// Empty input is valid (no filter). Returns the normalized date string.
pub fn parse_date_filter(input: &str) -> Result<Option<String>, AppError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    chrono::NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| {
        AppError::Validation(format!("Invalid date (expected YYYY-MM-DD): {}", trimmed))
    })?;

    Ok(Some(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_validation() {
        assert!(validate_required("Name", "Coffee").is_valid);
        assert!(!validate_required("Name", "").is_valid);
        assert!(!validate_required("Name", "   ").is_valid);
    }

    #[test]
    fn test_price_parsing() {
        assert_eq!(parse_price("12.50").unwrap().to_string(), "12.50");
        assert_eq!(parse_price("12,50").unwrap().to_string(), "12.50");
        assert_eq!(parse_price(" 7 ").unwrap().to_string(), "7");
        assert!(parse_price("").is_err());
        assert!(parse_price("abc").is_err());
        assert_eq!(
            parse_price("-1.00").unwrap_err().to_string(),
            "Price cannot be negative"
        );
    }

    #[test]
    fn test_stock_parsing() {
        assert_eq!(parse_stock("42").unwrap(), 42);
        assert_eq!(parse_stock(" 0 ").unwrap(), 0);
        assert!(parse_stock("").is_err());
        assert!(parse_stock("4.5").is_err());
        assert_eq!(
            parse_stock("-3").unwrap_err().to_string(),
            "Stock cannot be negative"
        );
    }

    #[test]
    fn test_date_filter_parsing() {
        assert_eq!(parse_date_filter("").unwrap(), None);
        assert_eq!(
            parse_date_filter("2026-08-28").unwrap(),
            Some("2026-08-28".to_string())
        );
        assert!(parse_date_filter("28/08/2026").is_err());
        assert!(parse_date_filter("2026-13-01").is_err());
    }

    #[test]
    fn test_validation_errors_render_without_prefix() {
        let error = parse_stock("abc").unwrap_err();
        assert!(matches!(error, AppError::Validation(_)));
        assert_eq!(error.to_string(), "Invalid stock quantity: abc");
    }
}
