pub mod auth;
pub mod new;
pub mod save;
pub mod show;

use anyhow::{Context, Result};
use chrono::NaiveDate;

/// Parse a `YYYY-MM-DD` argument.
pub(crate) fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .with_context(|| format!("Could not parse date \"{}\" (expected YYYY-MM-DD)", input))
}
