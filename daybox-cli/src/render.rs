//! Colored terminal output for daybox records.

use owo_colors::OwoColorize;

use daybox_core::date::{format_date, resolve};
use daybox_core::{CalendarRecord, DayBox};

pub fn render_calendar(calendar_id: &str, record: &CalendarRecord) -> String {
    let heading = if record.title.is_empty() {
        calendar_id.to_string()
    } else {
        format!("{} ({})", record.title, calendar_id)
    };

    let mut lines = vec![format!("📅 {}", heading.bold())];

    if record.daily_boxes.is_empty() {
        lines.push(format!("   {}", "no day boxes yet".dimmed()));
        return lines.join("\n");
    }

    for (index, slot) in record.daily_boxes.iter().enumerate() {
        let day = match record.start_date {
            Some(anchor) => format_date(resolve(anchor, index as u32)),
            None => format!("day {}", index),
        };
        match slot {
            Some(day_box) => {
                lines.push(format!("   {} {}", day.green(), render_content(day_box)))
            }
            None => lines.push(format!("   {} {}", day.dimmed(), "empty".dimmed())),
        }
    }

    lines.join("\n")
}

fn render_content(day_box: &DayBox) -> String {
    let mut parts = Vec::new();
    if !day_box.content.text.is_empty() {
        parts.push(day_box.content.text.clone());
    }
    if !day_box.content.image.is_empty() {
        parts.push("[image]".to_string());
    }
    if !day_box.content.video.is_empty() {
        parts.push("[video]".to_string());
    }
    if !day_box.content.audio.is_empty() {
        parts.push("[audio]".to_string());
    }

    if parts.is_empty() {
        "(no content)".to_string()
    } else {
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use daybox_core::Content;

    #[test]
    fn content_line_lists_attachments_after_text() {
        let day_box = DayBox {
            daily_box_id: "1".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            content: Content {
                text: "hello".to_string(),
                image: "img".to_string(),
                audio: "aud".to_string(),
                ..Default::default()
            },
            is_open: false,
        };
        assert_eq!(render_content(&day_box), "hello [image] [audio]");
    }

    #[test]
    fn empty_content_is_marked() {
        let day_box = DayBox {
            daily_box_id: "1".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            content: Content::default(),
            is_open: false,
        };
        assert_eq!(render_content(&day_box), "(no content)");
    }
}
