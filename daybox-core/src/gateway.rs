//! Dual-mode persistence for day cells.
//!
//! The gateway is the single dispatch point between guest-mode device
//! storage and the authenticated remote service. A submission is one
//! logical unit of work: normalize the draft, close the edit surface,
//! branch once on mode, write, reconcile, signal. No failure propagates
//! past the submission boundary — each one becomes either a redirect
//! through the error route or a message on the cell.

use tracing::{debug, warn};

use crate::api::{
    CreateDailyBoxRequest, DailyBoxApi, DailyBoxResponse, ErrorStatus, UpdateDailyBoxRequest,
};
use crate::cell::DayCell;
use crate::content::Content;
use crate::daily_box::DayBox;
use crate::date::CalendarAnchors;
use crate::error::{DayboxError, DayboxResult};
use crate::reconcile;
use crate::session::Session;
use crate::store::LocalStore;

/// User-visible message for submissions that fail without one of their own.
pub const DEFAULT_SAVE_ERROR: &str =
    "입력 내용 저장 중 오류가 발생했습니다. 다시 시도해 주세요.";

/// Which persistence path a gateway drives. Decided once at construction,
/// not re-derived per branch.
#[derive(Debug, Clone)]
pub enum PersistenceMode {
    Guest,
    Authenticated(Session),
}

/// Payload handed to the error route when a submission leaves the editing
/// flow. Both fields are empty for the missing-credential case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorRedirect {
    pub message: Option<String>,
    pub status: Option<ErrorStatus>,
}

impl ErrorRedirect {
    /// Redirect with no server payload.
    pub fn bare() -> Self {
        ErrorRedirect::default()
    }

    pub fn with_payload(message: String, status: Option<ErrorStatus>) -> Self {
        ErrorRedirect {
            message: Some(message),
            status,
        }
    }
}

/// Navigation collaborator: where submissions that abandon the editing flow
/// are routed.
pub trait ErrorRoute {
    fn redirect_to_error(&mut self, redirect: ErrorRedirect);
}

/// Sink for the owning form's validity signal, flipped once at least one
/// box has synchronized.
pub trait ValiditySink {
    fn set_daily_boxes_valid(&mut self, valid: bool);
}

/// How a submission ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The write landed and the draft reflects the stored state.
    Saved,
    /// The error route was invoked; nothing was recorded on the cell.
    RedirectedToError,
    /// The cell's local error message was set.
    Failed,
    /// A submission was already outstanding for this cell; nothing was
    /// written.
    InFlight,
}

pub struct PersistenceGateway<A> {
    mode: PersistenceMode,
    store: LocalStore,
    api: A,
    route: Box<dyn ErrorRoute>,
    validity: Box<dyn ValiditySink>,
}

impl<A: DailyBoxApi> PersistenceGateway<A> {
    pub fn new(
        mode: PersistenceMode,
        store: LocalStore,
        api: A,
        route: Box<dyn ErrorRoute>,
        validity: Box<dyn ValiditySink>,
    ) -> Self {
        PersistenceGateway {
            mode,
            store,
            api,
            route,
            validity,
        }
    }

    pub fn mode(&self) -> &PersistenceMode {
        &self.mode
    }

    /// Persist a cell's draft.
    ///
    /// The edit surface closes before any write begins (optimistic
    /// dismissal), so failures surface only through the cell's error field
    /// or the error route, never by reopening the surface.
    pub async fn submit(
        &mut self,
        cell: &mut DayCell,
        calendar_id: &str,
        anchors: &CalendarAnchors,
    ) -> SubmitOutcome {
        if cell.is_in_flight() {
            debug!(index = cell.index, "submission already in flight, rejecting");
            return SubmitOutcome::InFlight;
        }

        let snapshot = cell.draft.normalized();
        cell.close_editor();

        let mode = self.mode.clone();
        match mode {
            PersistenceMode::Guest => self.submit_local(cell, calendar_id, anchors, snapshot),
            PersistenceMode::Authenticated(session) => {
                self.submit_remote(&session, cell, calendar_id, anchors, snapshot)
                    .await
            }
        }
    }

    fn submit_local(
        &mut self,
        cell: &mut DayCell,
        calendar_id: &str,
        anchors: &CalendarAnchors,
        snapshot: Content,
    ) -> SubmitOutcome {
        match self.write_local(cell, calendar_id, anchors, snapshot) {
            Ok(()) => {
                debug!(index = cell.index, calendar = calendar_id, "daily box saved locally");
                SubmitOutcome::Saved
            }
            Err(err) => {
                warn!(index = cell.index, error = %err, "local save failed");
                cell.error = Some(err.to_string());
                SubmitOutcome::Failed
            }
        }
    }

    /// Read aggregate, overwrite the cell's offset, write the aggregate
    /// back. One logical step; no partial-write recovery.
    fn write_local(
        &self,
        cell: &mut DayCell,
        calendar_id: &str,
        anchors: &CalendarAnchors,
        snapshot: Content,
    ) -> DayboxResult<()> {
        let date = anchors.device_date(cell.index).ok_or_else(|| {
            DayboxError::Config(format!("calendar '{}' has no local start date", calendar_id))
        })?;

        let mut record = self.store.load(calendar_id)?.unwrap_or_default();
        let day_box = DayBox::new_local(date, snapshot);
        cell.set_daily_box_id(day_box.daily_box_id.clone());
        record.put_daily_box(cell.index as usize, day_box);
        self.store.save(calendar_id, &record)
    }

    async fn submit_remote(
        &mut self,
        session: &Session,
        cell: &mut DayCell,
        calendar_id: &str,
        anchors: &CalendarAnchors,
        snapshot: Content,
    ) -> SubmitOutcome {
        if session.bearer().is_none() {
            // Hard redirect; no local message is recorded for a missing
            // credential.
            warn!(calendar = calendar_id, "no bearer credential, redirecting to error view");
            self.route.redirect_to_error(ErrorRedirect::bare());
            return SubmitOutcome::RedirectedToError;
        }

        cell.begin_submission();
        let result = self
            .write_remote(session, cell, calendar_id, anchors, snapshot)
            .await;
        cell.end_submission();

        match result {
            Ok(response) => {
                reconcile::apply(&response.content, &mut cell.draft);
                if let Some(id) = response.id {
                    cell.set_daily_box_id(id);
                }
                self.validity.set_daily_boxes_valid(true);
                debug!(index = cell.index, calendar = calendar_id, "daily box synchronized");
                SubmitOutcome::Saved
            }
            Err(DayboxError::Rejected { message, status }) => {
                warn!(index = cell.index, %message, "daily box write rejected");
                self.route
                    .redirect_to_error(ErrorRedirect::with_payload(message, status));
                SubmitOutcome::RedirectedToError
            }
            Err(err) => {
                let message = err.to_string();
                cell.error = Some(if message.is_empty() {
                    DEFAULT_SAVE_ERROR.to_string()
                } else {
                    message
                });
                SubmitOutcome::Failed
            }
        }
    }

    /// Exactly one intent-driven call: a known identifier updates that
    /// resource, no identifier creates through the collection.
    async fn write_remote(
        &self,
        session: &Session,
        cell: &DayCell,
        calendar_id: &str,
        anchors: &CalendarAnchors,
        snapshot: Content,
    ) -> DayboxResult<DailyBoxResponse> {
        match cell.daily_box_id() {
            Some(daily_box_id) => {
                let request = UpdateDailyBoxRequest { content: snapshot };
                self.api
                    .update_daily_box(session, calendar_id, daily_box_id, &request)
                    .await
            }
            None => {
                let date = anchors.account_date(cell.index).ok_or_else(|| {
                    DayboxError::Config(format!(
                        "calendar '{}' has no account start date",
                        calendar_id
                    ))
                })?;
                let request = CreateDailyBoxRequest {
                    date,
                    content: snapshot,
                    is_open: false,
                };
                self.api
                    .create_daily_box(session, calendar_id, &request)
                    .await
            }
        }
    }
}
