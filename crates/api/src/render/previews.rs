//! Thumbnail fragments for admin list columns.
//!
//! Each formatter returns either a small HTML tag pointing at the stored
//! media or a short placeholder label.

use folio_core::portfolio::MediaKind;
use folio_db::models::additional_image::AdditionalImage;
use folio_db::models::portfolio_item::PortfolioItem;
use folio_db::models::post::Post;
use folio_db::models::site_configuration::SiteConfiguration;

use super::media_src;

pub const NO_MEDIA: &str = "No Media";
pub const NO_IMAGE: &str = "No Image";
pub const NO_VIDEO: &str = "No Video";
pub const EXTERNAL_LINK: &str = "External Link";
pub const VIDEO_UPLOADED: &str = "Video Uploaded";

/// Preview of a portfolio item's primary media, by media precedence.
pub fn media_preview(item: &PortfolioItem) -> String {
    match item.media() {
        MediaKind::Video(path) => format!(
            "<video width=\"150\" height=\"100\" controls muted \
             style=\"object-fit: cover; border-radius: 8px;\">\
             <source src=\"{}\" type=\"video/mp4\">Video</video>",
            media_src(&path)
        ),
        MediaKind::Image(path) => format!(
            "<img src=\"{}\" width=\"150\" height=\"100\" \
             style=\"object-fit: cover; border-radius: 8px;\" />",
            media_src(&path)
        ),
        MediaKind::ExternalLink(_) => EXTERNAL_LINK.to_string(),
        MediaKind::None => NO_MEDIA.to_string(),
    }
}

/// Inline gallery thumbnail.
pub fn gallery_image_preview(image: &AdditionalImage) -> String {
    if image.image.trim().is_empty() {
        return NO_IMAGE.to_string();
    }
    format!(
        "<img src=\"{}\" width=\"100\" height=\"100\" \
         style=\"object-fit: cover; border-radius: 4px;\" />",
        media_src(&image.image)
    )
}

/// Featured image thumbnail for the post list.
pub fn post_image_preview(post: &Post) -> String {
    if post.featured_image.trim().is_empty() {
        return NO_IMAGE.to_string();
    }
    format!(
        "<img src=\"{}\" width=\"150\" height=\"100\" \
         style=\"object-fit: cover; border-radius: 8px;\" />",
        media_src(&post.featured_image)
    )
}

pub fn hero_preview(config: &SiteConfiguration) -> String {
    if config.hero_video.trim().is_empty() {
        NO_VIDEO.to_string()
    } else {
        VIDEO_UPLOADED.to_string()
    }
}

pub fn about_preview(config: &SiteConfiguration) -> String {
    if config.about_image.trim().is_empty() {
        return NO_IMAGE.to_string();
    }
    format!(
        "<img src=\"{}\" width=\"100\" style=\"border-radius: 4px;\" />",
        media_src(&config.about_image)
    )
}
