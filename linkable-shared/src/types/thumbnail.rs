//! Thumbnail references for item types and items.

use serde::{Deserialize, Serialize};

/// A thumbnail is either a ready-to-use URL or a handle to an image that a
/// renderer may resize (displayed at roughly 200x200).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Thumbnail {
    /// An absolute or site-relative image URL.
    Url { url: String },
    /// A source image to be resized by the consumer.
    Image(ImageHandle),
}

/// A resizable source image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageHandle {
    /// Storage path of the source image.
    pub path: String,
    /// Requested width in pixels, if constrained.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Requested height in pixels, if constrained.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl Thumbnail {
    /// Create a URL thumbnail.
    pub fn url(url: impl Into<String>) -> Self {
        Self::Url { url: url.into() }
    }

    /// Create an image thumbnail without size constraints.
    pub fn image(path: impl Into<String>) -> Self {
        Self::Image(ImageHandle {
            path: path.into(),
            width: None,
            height: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thumbnail_is_tagged() {
        let json = serde_json::to_value(Thumbnail::url("/static/page.png")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "url", "url": "/static/page.png"})
        );

        let json = serde_json::to_value(Thumbnail::image("filer/a.jpg")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "image", "path": "filer/a.jpg"})
        );
    }
}
