//! Device-local calendar aggregate (guest mode).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::daily_box::DayBox;

/// Everything guest mode knows about one calendar. Stored as one JSON
/// document per calendar id in the local store.
///
/// `daily_boxes` is a sparse sequence positionally indexed by day offset;
/// holes serialize as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarRecord {
    #[serde(default)]
    pub title: String,
    /// Device-level anchor date for this calendar.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub daily_boxes: Vec<Option<DayBox>>,
}

impl CalendarRecord {
    /// Overwrite the sequence at `index`, padding earlier offsets with
    /// holes. Every other index is left untouched.
    pub fn put_daily_box(&mut self, index: usize, day_box: DayBox) {
        if self.daily_boxes.len() <= index {
            self.daily_boxes.resize(index + 1, None);
        }
        self.daily_boxes[index] = Some(day_box);
    }

    pub fn daily_box(&self, index: usize) -> Option<&DayBox> {
        self.daily_boxes.get(index).and_then(|slot| slot.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Content;

    fn make_box(text: &str) -> DayBox {
        DayBox {
            daily_box_id: "1700000000000".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            content: Content {
                text: text.to_string(),
                ..Default::default()
            },
            is_open: false,
        }
    }

    #[test]
    fn put_past_the_end_pads_with_holes() {
        let mut record = CalendarRecord::default();
        record.put_daily_box(2, make_box("hi"));

        assert_eq!(record.daily_boxes.len(), 3);
        assert!(record.daily_boxes[0].is_none());
        assert!(record.daily_boxes[1].is_none());
        assert_eq!(record.daily_box(2).unwrap().content.text, "hi");
    }

    #[test]
    fn put_overwrites_only_its_own_offset() {
        let mut record = CalendarRecord::default();
        record.put_daily_box(0, make_box("first"));
        record.put_daily_box(1, make_box("second"));
        record.put_daily_box(1, make_box("replaced"));

        assert_eq!(record.daily_box(0).unwrap().content.text, "first");
        assert_eq!(record.daily_box(1).unwrap().content.text, "replaced");
        assert_eq!(record.daily_boxes.len(), 2);
    }

    #[test]
    fn holes_round_trip_as_null() {
        let mut record = CalendarRecord::default();
        record.put_daily_box(1, make_box("hi"));

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["dailyBoxes"][0], serde_json::Value::Null);
        assert_eq!(json["dailyBoxes"][1]["content"]["text"], "hi");
    }
}
