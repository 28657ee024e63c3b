//! Error types for calculations and reference data loading

use thiserror::Error;

use crate::projection::MAX_HORIZON_YEARS;

/// Errors raised by the dividend formulas and the projection engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// A numeric input was negative or not finite
    #[error("invalid argument `{name}`: {value}")]
    InvalidArgument { name: &'static str, value: f64 },

    /// The computation needs an ETF price or yield but no record is available
    #[error("no reference data: {0}")]
    NoReferenceData(String),
}

impl CalcError {
    pub fn invalid(name: &'static str, value: f64) -> Self {
        CalcError::InvalidArgument { name, value }
    }
}

/// Errors raised while reading or building ETF reference data
#[derive(Debug, Error)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A record violates the reference data invariants (price, yield, ticker)
    #[error("invalid record: {0}")]
    InvalidRecord(String),
}

/// Reject negative and non-finite amounts
pub fn non_negative(name: &'static str, value: f64) -> Result<f64, CalcError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(CalcError::invalid(name, value))
    }
}

/// Convert a signed year count into a horizon, rejecting negatives and
/// anything past `MAX_HORIZON_YEARS`
pub fn horizon_years(value: i64) -> Result<u32, CalcError> {
    match u32::try_from(value) {
        Ok(years) if years <= MAX_HORIZON_YEARS => Ok(years),
        _ => Err(CalcError::invalid("horizon_years", value as f64)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_negative_accepts_zero() {
        assert_eq!(non_negative("amount", 0.0), Ok(0.0));
        assert_eq!(non_negative("amount", 12.5), Ok(12.5));
    }

    #[test]
    fn test_non_negative_rejects_bad_values() {
        assert!(non_negative("amount", -1.0).is_err());
        assert!(non_negative("amount", f64::NAN).is_err());
        assert!(non_negative("amount", f64::INFINITY).is_err());
    }

    #[test]
    fn test_horizon_conversion() {
        assert_eq!(horizon_years(10), Ok(10));
        assert_eq!(
            horizon_years(-1),
            Err(CalcError::InvalidArgument { name: "horizon_years", value: -1.0 })
        );
        assert_eq!(horizon_years(100), Ok(100));
        assert!(horizon_years(101).is_err());
        assert!(horizon_years(3_000_000_000).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = CalcError::invalid("monthly_contribution", -5.0);
        assert_eq!(err.to_string(), "invalid argument `monthly_contribution`: -5");
        let err = CalcError::NoReferenceData("empty ETF catalog".into());
        assert_eq!(err.to_string(), "no reference data: empty ETF catalog");
    }
}
