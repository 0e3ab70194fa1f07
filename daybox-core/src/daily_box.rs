//! The persisted record for one day cell.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::content::Content;

/// A persisted content record for a day cell, either device-local or
/// server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayBox {
    /// Assigned locally in guest mode, by the server otherwise.
    pub daily_box_id: String,
    pub date: NaiveDate,
    pub content: Content,
    /// Always written `false` here; the recipient-side reveal flow lives
    /// elsewhere and nothing in this crate flips it.
    pub is_open: bool,
}

impl DayBox {
    /// Build a guest-mode record with a fresh time-derived identifier.
    pub fn new_local(date: NaiveDate, content: Content) -> Self {
        DayBox {
            daily_box_id: local_box_id(),
            date,
            content,
            is_open: false,
        }
    }
}

/// Fresh identifier for guest-mode records: current epoch milliseconds as a
/// decimal string.
pub fn local_box_id() -> String {
    Utc::now().timestamp_millis().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_form_uses_camel_case_keys() {
        let day_box = DayBox::new_local(
            NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
            Content {
                text: "hi".to_string(),
                ..Default::default()
            },
        );
        let json = serde_json::to_value(&day_box).unwrap();
        assert!(json.get("dailyBoxId").is_some());
        assert_eq!(json["date"], "2024-01-03");
        assert_eq!(json["isOpen"], false);
        assert_eq!(json["content"]["text"], "hi");
    }

    #[test]
    fn local_box_id_is_a_millisecond_timestamp() {
        let id = local_box_id();
        let millis: i64 = id.parse().unwrap();
        assert!(millis > 1_600_000_000_000);
    }

    #[test]
    fn new_local_records_are_closed() {
        let day_box = DayBox::new_local(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            Content::default(),
        );
        assert!(!day_box.is_open);
    }
}
