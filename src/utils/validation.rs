use crate::utils::error::{CalcError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a positive number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_negative(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be zero or greater".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // Written so that NaN fails the check.
    if !(value >= min && value <= max) {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("amount", 1.0).is_ok());
        assert!(validate_positive("amount", 0.0).is_err());
        assert!(validate_positive("amount", -5.0).is_err());
        assert!(validate_positive("amount", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("growth", 0.0).is_ok());
        assert!(validate_non_negative("growth", -0.1).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("rate", 6.0, 3.0, 20.0).is_ok());
        assert!(validate_range("rate", 3.0, 3.0, 20.0).is_ok());
        assert!(validate_range("rate", 20.5, 3.0, 20.0).is_err());
        assert!(validate_range("rate", f64::NAN, 3.0, 20.0).is_err());
        assert!(validate_range("term", 0u32, 1, 30).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("currency", "₽").is_ok());
        assert!(validate_non_empty_string("currency", "   ").is_err());
    }
}
