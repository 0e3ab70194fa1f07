//! Day-cell date arithmetic.
//!
//! A calendar carries up to two anchor dates, one per persistence mode; a
//! cell's date is always `anchor + offset days` against exactly one of them.

use chrono::{Duration, NaiveDate};

/// Resolve a day cell's calendar date from an anchor date and a day offset.
///
/// Offset bounds are the owning calendar's concern and are not validated
/// here.
pub fn resolve(anchor: NaiveDate, offset: u32) -> NaiveDate {
    anchor + Duration::days(i64::from(offset))
}

/// `YYYY-MM-DD` form used on the wire and in display.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// The anchor dates a calendar may carry.
///
/// Selection is mode-exclusive: the authenticated path reads only the
/// account anchor and the guest path only the device anchor. The two are
/// never merged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalendarAnchors {
    pub account: Option<NaiveDate>,
    pub device: Option<NaiveDate>,
}

impl CalendarAnchors {
    /// Cell date for the authenticated path.
    pub fn account_date(&self, offset: u32) -> Option<NaiveDate> {
        self.account.map(|anchor| resolve(anchor, offset))
    }

    /// Cell date for the guest path.
    pub fn device_date(&self, offset: u32) -> Option<NaiveDate> {
        self.device.map(|anchor| resolve(anchor, offset))
    }
}
