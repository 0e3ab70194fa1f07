//! HTTP client for the calendar service.

use tracing::debug;

use crate::api::{
    CreateDailyBoxRequest, DailyBoxApi, DailyBoxResponse, ErrorBody, UpdateDailyBoxRequest,
};
use crate::error::{DayboxError, DayboxResult};
use crate::session::Session;

/// reqwest-backed implementation of [`DailyBoxApi`].
pub struct RemoteClient {
    http: reqwest::Client,
    base_url: String,
}

impl RemoteClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        RemoteClient {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn collection_url(&self, calendar_id: &str) -> String {
        format!("{}/calendars/{}/daily-boxes", self.base_url, calendar_id)
    }

    fn item_url(&self, calendar_id: &str, daily_box_id: &str) -> String {
        format!("{}/{}", self.collection_url(calendar_id), daily_box_id)
    }

    /// A non-success response carries `{message, status}` and becomes
    /// `Rejected`; anything that keeps us from a decoded body becomes
    /// `Transport`.
    async fn read_response(response: reqwest::Response) -> DayboxResult<DailyBoxResponse> {
        if !response.status().is_success() {
            let body: ErrorBody = response
                .json()
                .await
                .map_err(|e| DayboxError::Transport(e.to_string()))?;
            return Err(DayboxError::Rejected {
                message: body.message,
                status: body.status,
            });
        }

        response
            .json()
            .await
            .map_err(|e| DayboxError::Transport(e.to_string()))
    }
}

impl DailyBoxApi for RemoteClient {
    async fn create_daily_box(
        &self,
        session: &Session,
        calendar_id: &str,
        request: &CreateDailyBoxRequest,
    ) -> DayboxResult<DailyBoxResponse> {
        let token = session.bearer().ok_or(DayboxError::MissingCredential)?;

        debug!(calendar = calendar_id, "creating daily box");
        let response = self
            .http
            .post(self.collection_url(calendar_id))
            .bearer_auth(token)
            .json(request)
            .send()
            .await
            .map_err(|e| DayboxError::Transport(e.to_string()))?;

        Self::read_response(response).await
    }

    async fn update_daily_box(
        &self,
        session: &Session,
        calendar_id: &str,
        daily_box_id: &str,
        request: &UpdateDailyBoxRequest,
    ) -> DayboxResult<DailyBoxResponse> {
        let token = session.bearer().ok_or(DayboxError::MissingCredential)?;

        debug!(calendar = calendar_id, daily_box = daily_box_id, "updating daily box");
        let response = self
            .http
            .put(self.item_url(calendar_id, daily_box_id))
            .bearer_auth(token)
            .json(request)
            .send()
            .await
            .map_err(|e| DayboxError::Transport(e.to_string()))?;

        Self::read_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_target_collection_and_item() {
        let client = RemoteClient::new("http://localhost:3030");
        assert_eq!(
            client.collection_url("cal1"),
            "http://localhost:3030/calendars/cal1/daily-boxes"
        );
        assert_eq!(
            client.item_url("cal1", "abc123"),
            "http://localhost:3030/calendars/cal1/daily-boxes/abc123"
        );
    }
}
