//! Dual-mode persistence for countdown-calendar day boxes.
//!
//! A day cell holds user-authored content (image, video reference, text,
//! audio reference) for one date in a calendar sequence. In guest mode
//! every record lives in device-local storage; with a session, records are
//! synchronized with the calendar service over HTTP. The `gateway` module
//! decides where a write goes, whether it creates or updates, and how
//! failures surface.

pub mod api;
pub mod calendar;
pub mod cell;
pub mod client;
pub mod config;
pub mod content;
pub mod daily_box;
pub mod date;
pub mod draft;
pub mod error;
pub mod gateway;
pub mod reconcile;
pub mod session;
pub mod store;

pub use calendar::CalendarRecord;
pub use cell::DayCell;
pub use client::RemoteClient;
pub use config::GlobalConfig;
pub use content::{Content, ImageSource};
pub use daily_box::DayBox;
pub use date::CalendarAnchors;
pub use draft::ContentDraft;
pub use error::{DayboxError, DayboxResult};
pub use gateway::{PersistenceGateway, PersistenceMode, SubmitOutcome};
pub use session::Session;
pub use store::LocalStore;
