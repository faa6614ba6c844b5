//! Number coercion and formatting shared by the CLI, import and export.

use crate::errors::{AppError, AppResult};

/// Coerce user-supplied text into a measurement value.
///
/// - empty / blank → `None`
/// - zero → `None` (contributes nothing to any total)
/// - anything that is not a finite number → `InvalidNumber`
pub fn parse_measure(s: &str) -> AppResult<Option<f64>> {
    let t = s.trim();
    if t.is_empty() {
        return Ok(None);
    }

    let v: f64 = t
        .parse()
        .map_err(|_| AppError::InvalidNumber(t.to_string()))?;

    if !v.is_finite() {
        return Err(AppError::InvalidNumber(t.to_string()));
    }

    Ok(if v == 0.0 { None } else { Some(v) })
}

pub fn parse_optional_measure(input: Option<&String>) -> AppResult<Option<f64>> {
    match input {
        Some(s) => parse_measure(s),
        None => Ok(None),
    }
}

/// Human form: at most two decimals, trailing zeros removed.
pub fn fmt_value(v: f64) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

/// Absent values render as `-`.
pub fn fmt_optional(v: Option<f64>) -> String {
    v.map(fmt_value).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coercion() {
        assert_eq!(parse_measure("").unwrap(), None);
        assert_eq!(parse_measure("  ").unwrap(), None);
        assert_eq!(parse_measure("0").unwrap(), None);
        assert_eq!(parse_measure("2").unwrap(), Some(2.0));
        assert_eq!(parse_measure(" 0.5 ").unwrap(), Some(0.5));
        assert!(matches!(parse_measure("two"), Err(AppError::InvalidNumber(_))));
        assert!(parse_measure("NaN").is_err());
        assert!(parse_measure("inf").is_err());
    }

    #[test]
    fn value_formatting() {
        assert_eq!(fmt_value(2.0), "2");
        assert_eq!(fmt_value(0.5), "0.5");
        assert_eq!(fmt_value(0.1 + 0.2), "0.3");
        assert_eq!(fmt_value(12.25), "12.25");
        assert_eq!(fmt_optional(None), "-");
    }
}
