//! Portfolio item categories and media precedence.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Kind of work a portfolio item showcases. Stored as lowercase text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Photography,
    Videography,
    Editing,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Photography,
        Category::Videography,
        Category::Editing,
    ];

    /// Column value.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Photography => "photography",
            Category::Videography => "videography",
            Category::Editing => "editing",
        }
    }

    /// Human-readable label used on visitor pages.
    pub fn label(self) -> &'static str {
        match self {
            Category::Photography => "Photography",
            Category::Videography => "Videography",
            Category::Editing => "Editing",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid category '{s}'. Valid categories: photography, videography, editing"
                ))
            })
    }
}

// ---------------------------------------------------------------------------
// Media precedence
// ---------------------------------------------------------------------------

/// The media chosen for display, in fixed priority order: an uploaded video
/// wins over a cover image, which wins over an external link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "source", rename_all = "snake_case")]
pub enum MediaKind {
    /// Path of the uploaded video file.
    Video(String),
    /// Path of the cover image.
    Image(String),
    /// External video URL (YouTube, Vimeo, ...).
    ExternalLink(String),
    None,
}

impl MediaKind {
    /// Resolve the display media from an item's three optional fields.
    ///
    /// Blank strings count as absent.
    pub fn resolve(
        video_file: Option<&str>,
        image_file: Option<&str>,
        video_url: Option<&str>,
    ) -> Self {
        let present = |v: Option<&str>| v.filter(|s| !s.trim().is_empty()).map(str::to_string);

        if let Some(video) = present(video_file) {
            MediaKind::Video(video)
        } else if let Some(image) = present(image_file) {
            MediaKind::Image(image)
        } else if let Some(url) = present(video_url) {
            MediaKind::ExternalLink(url)
        } else {
            MediaKind::None
        }
    }

    /// Short tag for list columns and templates.
    pub fn tag(&self) -> &'static str {
        match self {
            MediaKind::Video(_) => "video",
            MediaKind::Image(_) => "image",
            MediaKind::ExternalLink(_) => "external_link",
            MediaKind::None => "none",
        }
    }
}

/// Whether the item carries video content of any kind: an uploaded file
/// or an external link. A cover image does not change the answer.
pub fn is_media_video(video_file: Option<&str>, video_url: Option<&str>) -> bool {
    let present = |v: Option<&str>| v.is_some_and(|s| !s.trim().is_empty());
    present(video_file) || present(video_url)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn category_round_trips_through_str() {
        for c in Category::ALL {
            assert_eq!(c.as_str().parse::<Category>().unwrap(), c);
        }
    }

    #[test]
    fn category_rejects_unknown() {
        assert_matches!("drone".parse::<Category>(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn category_defaults_to_photography() {
        assert_eq!(Category::default(), Category::Photography);
    }

    #[test]
    fn video_beats_image() {
        let media = MediaKind::resolve(Some("v.mp4"), Some("c.jpg"), Some("https://x"));
        assert_eq!(media, MediaKind::Video("v.mp4".into()));
    }

    #[test]
    fn image_beats_external_link() {
        let media = MediaKind::resolve(None, Some("c.jpg"), Some("https://x"));
        assert_eq!(media, MediaKind::Image("c.jpg".into()));
    }

    #[test]
    fn external_link_only() {
        let media = MediaKind::resolve(None, None, Some("https://vimeo.com/1"));
        assert_eq!(media, MediaKind::ExternalLink("https://vimeo.com/1".into()));
        assert_eq!(media.tag(), "external_link");
    }

    #[test]
    fn nothing_set_is_none() {
        assert_eq!(MediaKind::resolve(None, None, None), MediaKind::None);
        assert_eq!(MediaKind::resolve(Some(""), Some(" "), None), MediaKind::None);
    }

    #[test]
    fn is_video_counts_file_or_url() {
        assert!(is_media_video(Some("v.mp4"), None));
        assert!(is_media_video(None, Some("https://youtu.be/x")));
        assert!(!is_media_video(None, None));
        assert!(!is_media_video(Some(""), None));
    }
}
