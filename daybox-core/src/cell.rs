//! One day cell under edit.

use crate::daily_box::DayBox;
use crate::draft::ContentDraft;

/// A single slot in the calendar sequence, as held by the edit surface.
///
/// Owns the draft from hydration until the cell is discarded, plus the
/// submission state the gateway drives: the editor-open flag, the in-flight
/// token, and the local error message.
#[derive(Debug, Clone, Default)]
pub struct DayCell {
    /// Day offset from the calendar's anchor date.
    pub index: u32,
    daily_box_id: Option<String>,
    pub draft: ContentDraft,
    editor_open: bool,
    in_flight: bool,
    /// User-visible message from the last failed submission.
    pub error: Option<String>,
}

impl DayCell {
    /// A cell with no existing record.
    pub fn new(index: u32) -> Self {
        DayCell {
            index,
            ..Default::default()
        }
    }

    /// A cell hydrated from an existing record: the known identifier plus
    /// all four content fields.
    pub fn from_existing(index: u32, existing: &DayBox) -> Self {
        let mut cell = DayCell::new(index);
        cell.daily_box_id = Some(existing.daily_box_id.clone());
        cell.draft.hydrate(&existing.content);
        cell
    }

    /// The known record identifier. Its presence is what turns the next
    /// authenticated submit into an update instead of a creation.
    pub fn daily_box_id(&self) -> Option<&str> {
        self.daily_box_id.as_deref()
    }

    pub(crate) fn set_daily_box_id(&mut self, id: String) {
        self.daily_box_id = Some(id);
    }

    pub fn open_editor(&mut self) {
        self.editor_open = true;
    }

    pub fn close_editor(&mut self) {
        self.editor_open = false;
    }

    pub fn is_editor_open(&self) -> bool {
        self.editor_open
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub(crate) fn begin_submission(&mut self) {
        self.in_flight = true;
    }

    pub(crate) fn end_submission(&mut self) {
        self.in_flight = false;
    }
}
