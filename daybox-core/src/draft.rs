//! In-memory staging area for a day cell's edits.

use crate::content::{Content, DEFAULT_MESSAGE, ImageSource};

/// Unsaved content for one day cell.
///
/// Lives from hydration until the cell is discarded; never persisted as-is.
/// Field mutation is raw assignment, no validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentDraft {
    pub image: ImageSource,
    pub video: String,
    pub text: String,
    pub audio: String,
}

impl Default for ContentDraft {
    fn default() -> Self {
        ContentDraft {
            image: ImageSource::default(),
            video: String::new(),
            text: DEFAULT_MESSAGE.to_string(),
            audio: String::new(),
        }
    }
}

impl ContentDraft {
    /// Overwrite every field from an existing record's content.
    pub fn hydrate(&mut self, content: &Content) {
        self.image = ImageSource::Url(content.image.clone());
        self.video = content.video.clone();
        self.text = content.text.clone();
        self.audio = content.audio.clone();
    }

    /// Snapshot for persistence. Every field comes out as a plain string,
    /// empty when unset.
    pub fn normalized(&self) -> Content {
        Content {
            image: self.image.resolve(),
            video: self.video.clone(),
            text: self.text.clone(),
            audio: self.audio.clone(),
        }
    }
}
