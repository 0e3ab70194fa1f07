//! Maps server responses back onto a cell's draft.

use crate::content::{Content, ImageSource};
use crate::draft::ContentDraft;

/// Assign a server content payload onto the draft, field for field.
///
/// The payload's fields are empty-string defaulted at the wire boundary, so
/// this never writes an absent value into the draft — symmetric with the
/// normalize step on the way out.
pub fn apply(content: &Content, draft: &mut ContentDraft) {
    draft.text = content.text.clone();
    draft.image = ImageSource::Url(content.image.clone());
    draft.video = content.video.clone();
    draft.audio = content.audio.clone();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_maps_all_four_fields() {
        let mut draft = ContentDraft::default();
        apply(
            &Content {
                text: "saved".to_string(),
                image: "img".to_string(),
                video: "vid".to_string(),
                audio: "aud".to_string(),
            },
            &mut draft,
        );
        assert_eq!(draft.text, "saved");
        assert_eq!(draft.image, ImageSource::Url("img".to_string()));
        assert_eq!(draft.video, "vid");
        assert_eq!(draft.audio, "aud");
    }

    #[test]
    fn apply_replaces_an_upload_with_the_stored_reference() {
        let mut draft = ContentDraft::default();
        draft.image = ImageSource::Upload {
            bytes: vec![1, 2, 3],
            mime: "image/png".to_string(),
        };
        apply(
            &Content {
                image: "https://cdn.example.com/a.png".to_string(),
                ..Default::default()
            },
            &mut draft,
        );
        assert_eq!(
            draft.image,
            ImageSource::Url("https://cdn.example.com/a.png".to_string())
        );
    }
}
