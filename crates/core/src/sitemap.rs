//! Sitemap (sitemaps.org 0.9) entries and XML rendering.

use crate::html::escape;
use crate::types::Timestamp;

/// How often a page is expected to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Daily,
    Weekly,
    Monthly,
}

impl ChangeFreq {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
        }
    }
}

/// Change frequency and priority shared by every entry of a group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SitemapGroup {
    pub changefreq: ChangeFreq,
    pub priority: f32,
}

pub const PORTFOLIO_GROUP: SitemapGroup = SitemapGroup {
    changefreq: ChangeFreq::Weekly,
    priority: 0.8,
};

pub const POST_GROUP: SitemapGroup = SitemapGroup {
    changefreq: ChangeFreq::Daily,
    priority: 0.9,
};

pub const STATIC_GROUP: SitemapGroup = SitemapGroup {
    changefreq: ChangeFreq::Monthly,
    priority: 0.5,
};

/// Paths of the static pages listed in the sitemap: home, services, blog.
pub const STATIC_PAGES: &[&str] = &["/", "/services/", "/blog/"];

/// One `<url>` element.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    /// Absolute URL.
    pub loc: String,
    pub lastmod: Option<Timestamp>,
    pub group: SitemapGroup,
}

impl SitemapEntry {
    /// Build an entry for a site-relative `path` under `base_url`.
    pub fn new(base_url: &str, path: &str, lastmod: Option<Timestamp>, group: SitemapGroup) -> Self {
        Self {
            loc: absolute_url(base_url, path),
            lastmod,
            group,
        }
    }
}

/// Join a base URL (with or without trailing slash) and a path.
pub fn absolute_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Render entries as a complete sitemap document, in the given order.
///
/// `lastmod` is written as a `YYYY-MM-DD` date.
pub fn render(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape(&entry.loc)));
        if let Some(lastmod) = entry.lastmod {
            xml.push_str(&format!(
                "    <lastmod>{}</lastmod>\n",
                lastmod.format("%Y-%m-%d")
            ));
        }
        xml.push_str(&format!(
            "    <changefreq>{}</changefreq>\n",
            entry.group.changefreq.as_str()
        ));
        xml.push_str(&format!(
            "    <priority>{:.1}</priority>\n",
            entry.group.priority
        ));
        xml.push_str("  </url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}
