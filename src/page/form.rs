use chrono::{Local, NaiveDate};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormError {
    #[error("Missing required field '{0}'")]
    MissingField(&'static str),

    #[error("Invalid number '{value}' for field '{field}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Invalid date '{value}' for field '{field}', expected YYYY-MM-DD")]
    InvalidDate { field: &'static str, value: String },
}

pub fn required(field: &'static str, value: &str) -> Result<String, FormError> {
    if value.is_empty() {
        return Err(FormError::MissingField(field));
    }
    Ok(value.to_owned())
}

/// Empty input is stored as NULL, never as an empty string.
pub fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}

/// Parses a leading integer: optional whitespace and sign, then digits.
/// Anything after the digits is ignored, so "12kg" reads as 12.
pub fn leading_int(field: &'static str, value: &str) -> Result<i32, FormError> {
    let invalid = || FormError::InvalidNumber {
        field,
        value: value.to_owned(),
    };
    let trimmed = value.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return Err(invalid());
    }
    let magnitude: i64 = rest[..digits].parse().map_err(|_| invalid())?;
    let signed = if negative { -magnitude } else { magnitude };
    i32::try_from(signed).map_err(|_| invalid())
}

pub fn optional_int(field: &'static str, value: &str) -> Result<Option<i32>, FormError> {
    if value.is_empty() {
        return Ok(None);
    }
    leading_int(field, value).map(Some)
}

pub fn amount(field: &'static str, value: &str) -> Result<f64, FormError> {
    match value.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => Err(FormError::InvalidNumber {
            field,
            value: value.to_owned(),
        }),
    }
}

/// Empty input means today.
pub fn date_or_today(field: &'static str, value: &str) -> Result<NaiveDate, FormError> {
    if value.is_empty() {
        return Ok(Local::now().date_naive());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| FormError::InvalidDate {
        field,
        value: value.to_owned(),
    })
}

pub fn or_default(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_owned()
    } else {
        value.to_owned()
    }
}
