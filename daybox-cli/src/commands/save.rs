//! Edit one day box and persist it through the gateway.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use daybox_core::gateway::{ErrorRedirect, ErrorRoute, ValiditySink};
use daybox_core::{
    CalendarAnchors, DayCell, GlobalConfig, ImageSource, LocalStore, PersistenceGateway,
    PersistenceMode, RemoteClient, Session, SubmitOutcome,
};

use super::parse_date;

#[allow(clippy::too_many_arguments)]
pub async fn run(
    calendar_id: String,
    day: u32,
    text: Option<String>,
    image: Option<String>,
    image_file: Option<PathBuf>,
    video: Option<String>,
    audio: Option<String>,
    start_date: Option<String>,
) -> Result<()> {
    let config = GlobalConfig::load()?;
    let store = LocalStore::new(config.data_path());

    let record = store.load(&calendar_id)?;
    let arg_anchor = start_date.as_deref().map(parse_date).transpose()?;
    let anchors = CalendarAnchors {
        account: arg_anchor,
        device: record.as_ref().and_then(|r| r.start_date).or(arg_anchor),
    };

    // A stored session selects the authenticated path; otherwise the save
    // stays on this device.
    let mode = match Session::load()? {
        Some(session) => PersistenceMode::Authenticated(session),
        None => PersistenceMode::Guest,
    };
    tracing::debug!(
        calendar = %calendar_id,
        day,
        authenticated = matches!(mode, PersistenceMode::Authenticated(_)),
        "submitting day box"
    );

    let mut cell = match record.as_ref().and_then(|r| r.daily_box(day as usize)) {
        Some(existing) => DayCell::from_existing(day, existing),
        None => DayCell::new(day),
    };
    cell.open_editor();

    if let Some(text) = text {
        cell.draft.text = text;
    }
    if let Some(url) = image {
        cell.draft.image = ImageSource::Url(url);
    }
    if let Some(path) = image_file {
        let bytes = std::fs::read(&path)
            .with_context(|| format!("Could not read image file {}", path.display()))?;
        cell.draft.image = ImageSource::Upload {
            bytes,
            mime: mime_for(&path),
        };
    }
    if let Some(video) = video {
        cell.draft.video = video;
    }
    if let Some(audio) = audio {
        cell.draft.audio = audio;
    }

    let mut gateway = PersistenceGateway::new(
        mode,
        store,
        RemoteClient::new(config.base_url.clone()),
        Box::new(PrintRoute),
        Box::new(Quiet),
    );

    match gateway.submit(&mut cell, &calendar_id, &anchors).await {
        SubmitOutcome::Saved => {
            println!(
                "{}",
                format!("Saved day {} of '{}'", day, calendar_id).green()
            );
        }
        SubmitOutcome::Failed => {
            let message = cell.error.as_deref().unwrap_or("save failed");
            eprintln!("{}", message.red());
        }
        // PrintRoute already reported the redirect.
        SubmitOutcome::RedirectedToError => {}
        SubmitOutcome::InFlight => {
            eprintln!("{}", "A save is already in progress for this day".yellow());
        }
    }

    Ok(())
}

/// Stands in for the app's error view: failures that abandon the editing
/// flow land on stderr.
struct PrintRoute;

impl ErrorRoute for PrintRoute {
    fn redirect_to_error(&mut self, redirect: ErrorRedirect) {
        let message = redirect
            .message
            .unwrap_or_else(|| "Not authorized".to_string());
        match redirect.status {
            Some(status) => {
                eprintln!("{}", format!("Save rejected: {} ({})", message, status).red())
            }
            None => eprintln!("{}", format!("Save rejected: {}", message).red()),
        }
    }
}

struct Quiet;

impl ValiditySink for Quiet {
    fn set_daily_boxes_valid(&mut self, _valid: bool) {}
}

/// Best-effort MIME type from the file extension.
fn mime_for(path: &Path) -> String {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let mime = match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    };
    mime.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_from_known_extensions() {
        assert_eq!(mime_for(Path::new("a.png")), "image/png");
        assert_eq!(mime_for(Path::new("b.JPG")), "image/jpeg");
        assert_eq!(mime_for(Path::new("c.webp")), "image/webp");
    }

    #[test]
    fn mime_falls_back_for_unknown_extensions() {
        assert_eq!(mime_for(Path::new("d.bin")), "application/octet-stream");
        assert_eq!(mime_for(Path::new("no-extension")), "application/octet-stream");
    }
}
