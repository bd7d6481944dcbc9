// Utility helpers for parsing counts, the IFR ratio and console formatting.
use num_format::{Locale, ToFormattedString};
use thiserror::Error;

/// Why a count cell could not be read.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CountError {
    #[error("'{0}' is not a non-negative whole number")]
    Invalid(String),
}

/// Parse a case/death count cell.
///
/// - Empty or missing cells are `Ok(None)` (null).
/// - Non-negative integers parse directly.
/// - Integral, non-negative floats such as `12.0` are accepted, since some
///   daily exports write counts that way.
/// - Anything else is rejected with the raw text.
pub fn parse_count_safe(s: Option<&str>) -> Result<Option<u64>, CountError> {
    let raw = match s {
        Some(s) => s.trim(),
        None => return Ok(None),
    };
    if raw.is_empty() {
        return Ok(None);
    }
    if let Ok(v) = raw.parse::<u64>() {
        return Ok(Some(v));
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v <= u64::MAX as f64 => {
            Ok(Some(v as u64))
        }
        _ => Err(CountError::Invalid(raw.to_string())),
    }
}

/// Infection fatality ratio in percent.
///
/// Undefined (`None`) when either side is null or the confirmed count is
/// zero; never a division error and never infinity.
pub fn ifr(deaths: Option<u64>, confirmed: Option<u64>) -> Option<f64> {
    match (deaths, confirmed) {
        (Some(d), Some(c)) if c > 0 => Some(d as f64 / c as f64 * 100.0),
        _ => None,
    }
}

pub fn format_ifr(v: Option<f64>) -> String {
    match v {
        Some(v) => format!("{:.4}", v),
        None => "null".to_string(),
    }
}

pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    n.to_formatted_string(&Locale::en)
}

/// Capitalize the first character: `jan` -> `Jan`.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
