//! Field rules shared by the forms.
//!
//! Each rule is a pure function returning `Ok(())` or a [`ValidationError`]
//! whose `message` is ready to show to the user. They plug into
//! `#[validate(custom = "...")]` and can also be called directly.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use validator::ValidationError;

/// Ten digits, optionally followed by a three digit branch suffix.
static TAX_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{10}(-?\d{3})?$").unwrap());

/// Domestic (`0xxxxxxxxx`) or international (`+84xxxxxxxxx`) mobile number.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(0|\+84)\d{9}$").unwrap());

pub(crate) fn error(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

pub fn required_text(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error("required", "This field is required"));
    }
    Ok(())
}

pub fn positive_quantity(value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(error("positive", "Quantity must be greater than zero"));
    }
    Ok(())
}

/// Selection that must be made before submitting; used from schema checks.
pub fn present<T>(value: &Option<T>, message: &'static str) -> Result<(), ValidationError> {
    match value {
        Some(_) => Ok(()),
        None => Err(error("required", message)),
    }
}

pub fn tax_id(value: &str) -> Result<(), ValidationError> {
    if !TAX_ID_RE.is_match(value.trim()) {
        return Err(error(
            "tax_id",
            "Tax ID must have 10 digits, or 13 digits with a branch suffix",
        ));
    }
    Ok(())
}

pub fn phone_number(value: &str) -> Result<(), ValidationError> {
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    if !PHONE_RE.is_match(&compact) {
        return Err(error("phone", "Phone number is not valid"));
    }
    Ok(())
}

/// `start` must fall strictly before `end`.
pub fn date_range(start: NaiveDate, end: NaiveDate) -> Result<(), ValidationError> {
    if start >= end {
        return Err(error("date_range", "Start date must be before end date"));
    }
    Ok(())
}

pub fn not_before(date: NaiveDate, today: NaiveDate) -> Result<(), ValidationError> {
    if date < today {
        return Err(error("not_before", "Date cannot be in the past"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn message(err: ValidationError) -> String {
        err.message.unwrap().to_string()
    }

    #[rstest]
    #[case("1234567890", true)]
    #[case("1234567890123", true)]
    #[case("1234567890-123", true)]
    #[case("12345", false)]
    #[case("123456789", false)]
    #[case("12345678901", false)]
    #[case("12345abcde", false)]
    #[case("", false)]
    fn tax_id_digit_count(#[case] input: &str, #[case] valid: bool) {
        assert_eq!(tax_id(input).is_ok(), valid, "input {input:?}");
    }

    #[test]
    fn date_range_is_strict() {
        let start = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 11, 30).unwrap();
        assert!(date_range(start, end).is_ok());
        assert!(date_range(start, start).is_err());
        assert_eq!(
            message(date_range(end, start).unwrap_err()),
            "Start date must be before end date"
        );
    }

    #[rstest]
    #[case(0.0, false)]
    #[case(-3.5, false)]
    #[case(f64::NAN, false)]
    #[case(f64::INFINITY, false)]
    #[case(0.01, true)]
    #[case(1500.0, true)]
    fn positive_quantity_cases(#[case] value: f64, #[case] valid: bool) {
        assert_eq!(positive_quantity(value).is_ok(), valid);
    }

    #[test]
    fn present_carries_its_message() {
        assert!(present(&Some(1), "Stage is required").is_ok());
        assert_eq!(
            message(present::<u8>(&None, "Stage is required").unwrap_err()),
            "Stage is required"
        );
    }

    #[test]
    fn required_text_rejects_whitespace() {
        assert!(required_text("   ").is_err());
        assert!(required_text("Mùa vụ 2025").is_ok());
    }

    #[rstest]
    #[case("0912345678", true)]
    #[case("+84912345678", true)]
    #[case("0912 345 678", true)]
    #[case("912345678", false)]
    #[case("09123456789", false)]
    fn phone_number_cases(#[case] input: &str, #[case] valid: bool) {
        assert_eq!(phone_number(input).is_ok(), valid);
    }

    #[test]
    fn not_before_allows_today() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        assert!(not_before(today, today).is_ok());
        assert!(not_before(today.pred_opt().unwrap(), today).is_err());
    }
}
