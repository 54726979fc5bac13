//! Upload purposes and the on-disk media layout.
//!
//! Every uploaded asset lives under `MEDIA_ROOT/<purpose dir>/` and records
//! store the path relative to `MEDIA_ROOT`. Visitors fetch assets through
//! [`MEDIA_URL_PREFIX`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// URL prefix under which `MEDIA_ROOT` is served.
pub const MEDIA_URL_PREFIX: &str = "/media";

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "mov"];
const SITE_ASSET_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "mp4", "webm", "mov"];

/// What an uploaded file is for; decides its sub-directory and accepted types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadPurpose {
    PortfolioImages,
    PortfolioVideos,
    PortfolioGallery,
    BlogFeaturedImages,
    SiteAssets,
}

impl UploadPurpose {
    pub const ALL: [UploadPurpose; 5] = [
        UploadPurpose::PortfolioImages,
        UploadPurpose::PortfolioVideos,
        UploadPurpose::PortfolioGallery,
        UploadPurpose::BlogFeaturedImages,
        UploadPurpose::SiteAssets,
    ];

    /// Sub-directory of `MEDIA_ROOT`.
    pub fn dir(self) -> &'static str {
        match self {
            UploadPurpose::PortfolioImages => "portfolio_images",
            UploadPurpose::PortfolioVideos => "portfolio_videos",
            UploadPurpose::PortfolioGallery => "portfolio_gallery",
            UploadPurpose::BlogFeaturedImages => "blog_featured_images",
            UploadPurpose::SiteAssets => "site_assets",
        }
    }

    pub fn allowed_extensions(self) -> &'static [&'static str] {
        match self {
            UploadPurpose::PortfolioImages
            | UploadPurpose::PortfolioGallery
            | UploadPurpose::BlogFeaturedImages => IMAGE_EXTENSIONS,
            UploadPurpose::PortfolioVideos => VIDEO_EXTENSIONS,
            UploadPurpose::SiteAssets => SITE_ASSET_EXTENSIONS,
        }
    }

    /// Check the client file name's extension and return it lowercased.
    pub fn validate_file_name(self, file_name: &str) -> Result<String, CoreError> {
        let ext = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        if ext.is_empty() || !self.allowed_extensions().contains(&ext.as_str()) {
            return Err(CoreError::Validation(format!(
                "Unsupported file type '{file_name}' for {self}. Allowed: {}",
                self.allowed_extensions().join(", ")
            )));
        }
        Ok(ext)
    }

    /// Relative path for a new upload: `<dir>/<uuid>.<ext>`.
    pub fn stored_path(self, ext: &str) -> String {
        format!("{}/{}.{ext}", self.dir(), uuid::Uuid::new_v4())
    }
}

impl fmt::Display for UploadPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir())
    }
}

impl FromStr for UploadPurpose {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UploadPurpose::ALL
            .into_iter()
            .find(|p| p.dir() == s)
            .ok_or_else(|| CoreError::Validation(format!("Unknown upload purpose '{s}'")))
    }
}

/// Public URL for a stored relative path.
pub fn media_url(path: &str) -> String {
    format!("{MEDIA_URL_PREFIX}/{}", path.trim_start_matches('/'))
}

/// Reject stored paths that could escape `MEDIA_ROOT`.
pub fn validate_media_path(path: &str) -> Result<(), CoreError> {
    if path.trim().is_empty() {
        return Err(CoreError::Validation("Media path must not be empty".into()));
    }
    if path.starts_with('/') || path.split('/').any(|seg| seg == "..") || path.contains('\\') {
        return Err(CoreError::Validation(format!(
            "Media path '{path}' must be relative to the media root"
        )));
    }
    Ok(())
}
