//! Content payload carried by a day box.

use base64::prelude::*;
use serde::{Deserialize, Serialize};

/// Placeholder message a fresh draft starts with.
pub const DEFAULT_MESSAGE: &str = "내용을 입력해주세요";

/// The four content fields of a day box.
///
/// Every field is a string on the wire; fields missing from an incoming
/// payload deserialize to empty strings, so a normalized snapshot never
/// carries an absent value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub video: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub audio: String,
}

/// Where a draft's image comes from.
///
/// `Upload` resolves to a `data:` URL at normalization time, so both
/// persistence branches carry it as an ordinary image string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Url(String),
    Upload { bytes: Vec<u8>, mime: String },
}

impl ImageSource {
    pub fn is_empty(&self) -> bool {
        match self {
            ImageSource::Url(url) => url.is_empty(),
            ImageSource::Upload { bytes, .. } => bytes.is_empty(),
        }
    }

    /// The string form that goes into a content snapshot.
    pub fn resolve(&self) -> String {
        match self {
            ImageSource::Url(url) => url.clone(),
            ImageSource::Upload { bytes, mime } => {
                format!("data:{};base64,{}", mime, BASE64_STANDARD.encode(bytes))
            }
        }
    }
}

impl Default for ImageSource {
    fn default() -> Self {
        ImageSource::Url(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_deserialize_to_empty_strings() {
        let content: Content = serde_json::from_str(r#"{"text": "hi"}"#).unwrap();
        assert_eq!(content.text, "hi");
        assert_eq!(content.image, "");
        assert_eq!(content.video, "");
        assert_eq!(content.audio, "");
    }

    #[test]
    fn upload_resolves_to_data_url() {
        let source = ImageSource::Upload {
            bytes: b"gift".to_vec(),
            mime: "image/png".to_string(),
        };
        assert_eq!(source.resolve(), "data:image/png;base64,Z2lmdA==");
    }

    #[test]
    fn url_resolves_verbatim() {
        let source = ImageSource::Url("https://example.com/a.png".to_string());
        assert_eq!(source.resolve(), "https://example.com/a.png");
        assert!(!source.is_empty());
        assert!(ImageSource::default().is_empty());
    }
}
