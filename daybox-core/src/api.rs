//! Wire types for the calendar service's daily-box resource, and the trait
//! seam the gateway dispatches writes through.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::content::Content;
use crate::error::DayboxResult;
use crate::session::Session;

/// Body for `POST /calendars/{calendarId}/daily-boxes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDailyBoxRequest {
    pub date: NaiveDate,
    pub content: Content,
    pub is_open: bool,
}

/// Body for `PUT /calendars/{calendarId}/daily-boxes/{dailyBoxId}`.
/// Updates carry content only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateDailyBoxRequest {
    pub content: Content,
}

/// Success payload from either write: `{content, ...}`.
#[derive(Debug, Clone, Deserialize)]
pub struct DailyBoxResponse {
    /// Server-assigned record identifier, when the service includes one.
    #[serde(default, rename = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub content: Content,
}

/// Failure payload: `{message, status}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: Option<ErrorStatus>,
}

/// The service reports `status` as either a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorStatus {
    Code(u16),
    Text(String),
}

impl fmt::Display for ErrorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorStatus::Code(code) => write!(f, "{}", code),
            ErrorStatus::Text(text) => write!(f, "{}", text),
        }
    }
}

/// The two writes the gateway can issue against the service.
///
/// A seam so the gateway stays testable without a network; [`RemoteClient`]
/// is the production implementation.
///
/// [`RemoteClient`]: crate::client::RemoteClient
#[allow(async_fn_in_trait)]
pub trait DailyBoxApi {
    /// Create a new daily box under the calendar's collection.
    async fn create_daily_box(
        &self,
        session: &Session,
        calendar_id: &str,
        request: &CreateDailyBoxRequest,
    ) -> DayboxResult<DailyBoxResponse>;

    /// Update the one daily box named by `daily_box_id`.
    async fn update_daily_box(
        &self,
        session: &Session,
        calendar_id: &str,
        daily_box_id: &str,
        request: &UpdateDailyBoxRequest,
    ) -> DayboxResult<DailyBoxResponse>;
}
