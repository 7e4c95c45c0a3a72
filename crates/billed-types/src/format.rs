//! Display formatting for bill fields
//!
//! Dates are rendered in the short French form used by the bills table,
//! e.g. `2004-04-04` becomes `4 Avr. 04`.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

use crate::types::DATE_FORMAT;

/// First three letters of the French short month names, capitalized
const MONTHS: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Jui", "Jui", "Aoû", "Sep", "Oct", "Nov", "Déc",
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid date: {0:?}")]
pub struct DateFormatError(pub String);

/// Format a `YYYY-MM-DD` date for display
pub fn format_date(raw: &str) -> Result<String, DateFormatError> {
    let date = NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| DateFormatError(raw.to_string()))?;
    Ok(format_naive_date(date))
}

/// Format an already parsed date
pub fn format_naive_date(date: NaiveDate) -> String {
    let month = MONTHS[date.month0() as usize];
    format!("{} {}. {:02}", date.day(), month, date.year().rem_euclid(100))
}

/// Format an amount in currency units
pub fn format_amount(amount: i64) -> String {
    format!("{} €", amount)
}
