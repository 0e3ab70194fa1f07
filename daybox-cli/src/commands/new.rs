use anyhow::Result;
use owo_colors::OwoColorize;

use daybox_core::date::format_date;
use daybox_core::{CalendarRecord, GlobalConfig, LocalStore};

use super::parse_date;

pub fn run(calendar_id: String, start_date: String, title: Option<String>) -> Result<()> {
    let config = GlobalConfig::load()?;
    let store = LocalStore::new(config.data_path());

    if store.load(&calendar_id)?.is_some() {
        anyhow::bail!("Calendar '{}' already exists", calendar_id);
    }

    let start_date = parse_date(&start_date)?;
    let record = CalendarRecord {
        title: title.unwrap_or_default(),
        start_date: Some(start_date),
        daily_boxes: Vec::new(),
    };
    store.save(&calendar_id, &record)?;

    println!(
        "{}",
        format!(
            "Created calendar '{}' starting {}",
            calendar_id,
            format_date(start_date)
        )
        .green()
    );

    Ok(())
}
