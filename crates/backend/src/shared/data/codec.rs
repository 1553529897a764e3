//! TEXT column conversions. Dates are ISO `YYYY-MM-DD`, decimals are their
//! exact string form.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_date(text: &str) -> Result<NaiveDate> {
    // Older rows may carry a time part after the date
    let date_part = text.trim().get(..10).unwrap_or(text.trim());
    NaiveDate::parse_from_str(date_part, DATE_FORMAT)
        .with_context(|| format!("Invalid date column value: '{}'", text))
}

pub fn date_to_text(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn parse_decimal(text: &str) -> Result<Decimal> {
    let trimmed = text.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .with_context(|| format!("Invalid decimal column value: '{}'", text))
}

/// Empty strings and NULL both mean "no value"
pub fn parse_optional_decimal(text: Option<&str>) -> Result<Option<Decimal>> {
    match text.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_decimal(value).map(Some),
    }
}

pub fn decimal_to_text(value: Decimal) -> String {
    value.normalize().to_string()
}
