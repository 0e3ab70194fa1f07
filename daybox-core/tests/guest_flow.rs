//! End-to-end guest flow against the on-disk aggregate format.

use chrono::NaiveDate;
use daybox_core::api::{
    CreateDailyBoxRequest, DailyBoxApi, DailyBoxResponse, UpdateDailyBoxRequest,
};
use daybox_core::gateway::{ErrorRedirect, ErrorRoute, ValiditySink};
use daybox_core::{
    CalendarAnchors, DayCell, DayboxResult, ImageSource, LocalStore, PersistenceGateway,
    PersistenceMode, Session, SubmitOutcome,
};

struct NoRemote;

impl DailyBoxApi for NoRemote {
    async fn create_daily_box(
        &self,
        _session: &Session,
        _calendar_id: &str,
        _request: &CreateDailyBoxRequest,
    ) -> DayboxResult<DailyBoxResponse> {
        unreachable!("guest mode must not call the service")
    }

    async fn update_daily_box(
        &self,
        _session: &Session,
        _calendar_id: &str,
        _daily_box_id: &str,
        _request: &UpdateDailyBoxRequest,
    ) -> DayboxResult<DailyBoxResponse> {
        unreachable!("guest mode must not call the service")
    }
}

struct Ignore;

impl ErrorRoute for Ignore {
    fn redirect_to_error(&mut self, _redirect: ErrorRedirect) {}
}

impl ValiditySink for Ignore {
    fn set_daily_boxes_valid(&mut self, _valid: bool) {}
}

fn guest_gateway(root: &std::path::Path) -> PersistenceGateway<NoRemote> {
    PersistenceGateway::new(
        PersistenceMode::Guest,
        LocalStore::new(root),
        NoRemote,
        Box::new(Ignore),
        Box::new(Ignore),
    )
}

fn device_anchors() -> CalendarAnchors {
    CalendarAnchors {
        account: None,
        device: NaiveDate::from_ymd_opt(2024, 1, 1),
    }
}

#[tokio::test]
async fn guest_submit_round_trips_through_the_wire_format() {
    let dir = tempfile::tempdir().unwrap();
    let mut gateway = guest_gateway(dir.path());

    let mut cell = DayCell::new(2);
    cell.open_editor();
    cell.draft.text = "hi".to_string();

    let outcome = gateway.submit(&mut cell, "cal1", &device_anchors()).await;
    assert_eq!(outcome, SubmitOutcome::Saved);
    assert!(!cell.is_editor_open());

    let raw = std::fs::read_to_string(dir.path().join("cal1.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();

    let boxes = json["dailyBoxes"].as_array().unwrap();
    assert_eq!(boxes.len(), 3);
    assert!(boxes[0].is_null());
    assert!(boxes[1].is_null());

    let stored = &boxes[2];
    stored["dailyBoxId"]
        .as_str()
        .unwrap()
        .parse::<i64>()
        .unwrap();
    assert_eq!(stored["date"], "2024-01-03");
    assert_eq!(stored["isOpen"], false);
    assert_eq!(
        stored["content"],
        serde_json::json!({"image": "", "video": "", "text": "hi", "audio": ""})
    );

    // A cell hydrated for the same offset sees the stored record.
    let record = LocalStore::new(dir.path()).load("cal1").unwrap().unwrap();
    let rehydrated = DayCell::from_existing(2, record.daily_box(2).unwrap());
    assert_eq!(rehydrated.draft.text, "hi");
    assert!(rehydrated.daily_box_id().is_some());
}

#[tokio::test]
async fn uploaded_image_survives_the_guest_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut gateway = guest_gateway(dir.path());

    let mut cell = DayCell::new(0);
    cell.draft.image = ImageSource::Upload {
        bytes: b"png-bytes".to_vec(),
        mime: "image/png".to_string(),
    };

    let outcome = gateway.submit(&mut cell, "cal1", &device_anchors()).await;
    assert_eq!(outcome, SubmitOutcome::Saved);

    let record = LocalStore::new(dir.path()).load("cal1").unwrap().unwrap();
    let stored = record.daily_box(0).unwrap();
    assert!(stored.content.image.starts_with("data:image/png;base64,"));

    let rehydrated = DayCell::from_existing(0, stored);
    assert_eq!(
        rehydrated.draft.image,
        ImageSource::Url(stored.content.image.clone())
    );
}
