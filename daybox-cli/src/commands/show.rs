use anyhow::Result;

use daybox_core::{GlobalConfig, LocalStore};

use crate::render;

pub fn run(calendar_id: String) -> Result<()> {
    let config = GlobalConfig::load()?;
    let store = LocalStore::new(config.data_path());

    let Some(record) = store.load(&calendar_id)? else {
        anyhow::bail!("No local calendar '{}' found", calendar_id);
    };

    println!("{}", render::render_calendar(&calendar_id, &record));
    Ok(())
}
