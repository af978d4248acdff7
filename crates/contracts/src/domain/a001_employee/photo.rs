use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ALLOWED_PHOTO_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/webp"];

/// 6 MiB.
pub const MAX_PHOTO_BYTES: u64 = 6 * 1024 * 1024;

/// Written into `photo_url` to ask the backend to drop the stored photo.
pub const PHOTO_CLEAR_SENTINEL: &str = "__clear__";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhotoError {
    #[error("Only JPG, PNG or WEBP allowed")]
    UnsupportedType(String),
    #[error("Photo too large (max 6MB)")]
    TooLarge(u64),
}

/// Metadata of a local file picked in the photo input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoSelection {
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

impl PhotoSelection {
    pub fn validate(&self) -> Result<(), PhotoError> {
        if !ALLOWED_PHOTO_TYPES.contains(&self.mime_type.as_str()) {
            return Err(PhotoError::UnsupportedType(self.mime_type.clone()));
        }
        if self.size_bytes > MAX_PHOTO_BYTES {
            return Err(PhotoError::TooLarge(self.size_bytes));
        }
        Ok(())
    }
}

/// What an update does to the stored photo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhotoAction {
    #[default]
    Keep,
    Url,
    Upload,
    Delete,
}

impl PhotoAction {
    pub const ALL: [PhotoAction; 4] = [
        PhotoAction::Keep,
        PhotoAction::Url,
        PhotoAction::Upload,
        PhotoAction::Delete,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PhotoAction::Keep => "keep",
            PhotoAction::Url => "url",
            PhotoAction::Upload => "upload",
            PhotoAction::Delete => "delete",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PhotoAction::Keep => "Keep current photo",
            PhotoAction::Url => "Replace with URL",
            PhotoAction::Upload => "Upload new photo",
            PhotoAction::Delete => "Remove photo",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str() == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(mime: &str, size: u64) -> PhotoSelection {
        PhotoSelection {
            name: "me.jpg".into(),
            mime_type: mime.into(),
            size_bytes: size,
        }
    }

    #[test]
    fn accepts_allowed_types_up_to_limit() {
        for mime in ALLOWED_PHOTO_TYPES {
            assert_eq!(photo(mime, MAX_PHOTO_BYTES).validate(), Ok(()));
        }
    }

    #[test]
    fn rejects_other_types() {
        assert_eq!(
            photo("image/gif", 10).validate(),
            Err(PhotoError::UnsupportedType("image/gif".into()))
        );
        assert!(photo("", 10).validate().is_err());
    }

    #[test]
    fn rejects_oversize() {
        let err = photo("image/png", MAX_PHOTO_BYTES + 1).validate().unwrap_err();
        assert_eq!(err.to_string(), "Photo too large (max 6MB)");
    }

    #[test]
    fn action_parse_matches_as_str() {
        for action in PhotoAction::ALL {
            assert_eq!(PhotoAction::parse(action.as_str()), Some(action));
        }
        assert_eq!(PhotoAction::parse("nope"), None);
    }
}
