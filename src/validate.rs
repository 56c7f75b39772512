//! Validation of typed temperature entries.

use thiserror::Error;

use crate::config::RangeConfig;

/// Why a typed entry was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("Please enter a valid number.")]
    NotANumber,
    #[error("Please enter a value between {min} and {max}.")]
    OutOfRange { min: f64, max: f64 },
}

/// Parse a raw entry and check it against the displayable range.
///
/// Surrounding whitespace is accepted. Bounds are inclusive; non-finite
/// values parse but never fall inside the range.
pub fn parse_temperature(raw: &str, range: &RangeConfig) -> Result<f64, InputError> {
    let value: f64 = raw.trim().parse().map_err(|_| InputError::NotANumber)?;
    if !range.contains(value) {
        return Err(InputError::OutOfRange {
            min: range.min_temp,
            max: range.max_temp,
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range() -> RangeConfig {
        RangeConfig::default()
    }

    #[test]
    fn accepts_integer_entry() {
        assert_eq!(parse_temperature("22", &range()), Ok(22.0));
    }

    #[test]
    fn accepts_decimal_entry() {
        assert_eq!(parse_temperature("21.5", &range()), Ok(21.5));
    }

    #[test]
    fn accepts_surrounding_whitespace() {
        assert_eq!(parse_temperature(" 22 ", &range()), Ok(22.0));
    }

    #[test]
    fn rejects_non_numeric_entry() {
        assert_eq!(parse_temperature("abc", &range()), Err(InputError::NotANumber));
    }

    #[test]
    fn rejects_empty_entry() {
        assert_eq!(parse_temperature("", &range()), Err(InputError::NotANumber));
    }

    #[test]
    fn rejects_value_above_range() {
        assert_eq!(
            parse_temperature("50", &range()),
            Err(InputError::OutOfRange { min: 15.0, max: 30.0 })
        );
    }

    #[test]
    fn lower_bound_is_inclusive() {
        assert_eq!(parse_temperature("15", &range()), Ok(15.0));
    }

    #[test]
    fn upper_bound_is_inclusive() {
        assert_eq!(parse_temperature("30", &range()), Ok(30.0));
    }

    #[test]
    fn rejects_value_just_below_range() {
        assert_eq!(
            parse_temperature("14.999", &range()),
            Err(InputError::OutOfRange { min: 15.0, max: 30.0 })
        );
    }

    #[test]
    fn non_finite_entries_fall_out_of_range() {
        assert!(matches!(
            parse_temperature("nan", &range()),
            Err(InputError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_temperature("inf", &range()),
            Err(InputError::OutOfRange { .. })
        ));
    }
}
