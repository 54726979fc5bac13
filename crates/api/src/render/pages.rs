//! Visitor-facing pages.

use folio_core::html::escape;
use folio_core::portfolio::MediaKind;
use folio_db::models::additional_image::AdditionalImage;
use folio_db::models::portfolio_item::PortfolioItem;
use folio_db::models::post::Post;
use folio_db::models::site_configuration::SiteConfiguration;
use folio_db::models::testimonial::Testimonial;

use super::{layout, media_src};

/// Everything the home page shows.
pub struct HomeContext<'a> {
    pub portfolio_items: &'a [PortfolioItem],
    pub testimonials: &'a [Testimonial],
    pub latest_posts: &'a [Post],
    pub site_config: Option<&'a SiteConfiguration>,
    /// Set after a contact form submission redirects back.
    pub message_sent: bool,
}

pub fn home(ctx: &HomeContext<'_>) -> String {
    let mut body = String::new();

    // Hero
    body.push_str("<section id=\"hero\">\n");
    if let Some(config) = ctx.site_config {
        body.push_str(&format!(
            "<video autoplay muted loop playsinline><source src=\"{}\" type=\"video/mp4\"></video>\n",
            media_src(&config.hero_video)
        ));
    }
    body.push_str("</section>\n");

    // Portfolio grid
    body.push_str("<section id=\"portfolio\">\n<h2>Portfolio</h2>\n");
    if ctx.portfolio_items.is_empty() {
        body.push_str("<p>No projects yet.</p>\n");
    }
    for item in ctx.portfolio_items {
        body.push_str(&format!(
            "<article class=\"project\" data-category=\"{category}\">\n\
             <a href=\"{href}\">{media}<h3>{title}</h3></a>\n\
             <p class=\"category\">{label}</p>\n\
             </article>\n",
            category = item.category().as_str(),
            href = escape(&item.absolute_path()),
            media = card_media(item),
            title = escape(&item.title),
            label = item.category().label(),
        ));
    }
    body.push_str("</section>\n");

    // About
    if let Some(config) = ctx.site_config {
        body.push_str(&format!(
            "<section id=\"about\">\n<img src=\"{}\" alt=\"About\" />\n</section>\n",
            media_src(&config.about_image)
        ));
    }

    // Testimonials
    if !ctx.testimonials.is_empty() {
        body.push_str("<section id=\"testimonials\">\n<h2>Testimonials</h2>\n");
        for testimonial in ctx.testimonials {
            body.push_str(&testimonial_block(testimonial));
        }
        body.push_str("</section>\n");
    }

    // Latest posts
    if !ctx.latest_posts.is_empty() {
        body.push_str("<section id=\"latest-posts\">\n<h2>Latest Posts</h2>\n");
        for post in ctx.latest_posts {
            body.push_str(&post_card(post));
        }
        body.push_str("</section>\n");
    }

    // Contact
    body.push_str("<section id=\"contact\">\n<h2>Contact</h2>\n");
    if ctx.message_sent {
        body.push_str("<p class=\"message-sent\">Thank you! Your message has been sent.</p>\n");
    }
    body.push_str(
        "<form method=\"post\" action=\"/\">\n\
         <input type=\"text\" name=\"name\" placeholder=\"Name\" required>\n\
         <input type=\"email\" name=\"email\" placeholder=\"Email\" required>\n\
         <textarea name=\"message\" placeholder=\"Message\" required></textarea>\n\
         <button type=\"submit\">Send</button>\n\
         </form>\n\
         </section>\n",
    );

    layout("Portfolio", &body)
}

pub fn project_detail(item: &PortfolioItem, gallery: &[AdditionalImage]) -> String {
    let mut body = format!(
        "<article class=\"project-detail\">\n\
         <h1>{title}</h1>\n\
         <p class=\"category\">{label}</p>\n\
         <time datetime=\"{iso}\">{date}</time>\n\
         {media}\n\
         <div class=\"description\">{description}</div>\n",
        title = escape(&item.title),
        label = item.category().label(),
        iso = item.date_created.to_rfc3339(),
        date = item.date_created.format("%B %-d, %Y"),
        media = detail_media(item),
        description = escape(&item.description),
    );

    if !gallery.is_empty() {
        body.push_str("<section class=\"gallery\">\n");
        for image in gallery {
            body.push_str(&format!(
                "<figure><img src=\"{}\" alt=\"{caption}\" />",
                media_src(&image.image),
                caption = escape(&image.caption),
            ));
            if !image.caption.is_empty() {
                body.push_str(&format!("<figcaption>{}</figcaption>", escape(&image.caption)));
            }
            body.push_str("</figure>\n");
        }
        body.push_str("</section>\n");
    }
    body.push_str("</article>\n");

    layout(&item.title, &body)
}

pub fn services() -> String {
    layout(
        "Services",
        "<h1>Services</h1>\n\
         <section class=\"service\"><h2>Photography</h2>\
         <p>Portrait, event and product photography.</p></section>\n\
         <section class=\"service\"><h2>Videography</h2>\
         <p>Short films, promotional videos and event coverage.</p></section>\n\
         <section class=\"service\"><h2>Editing</h2>\
         <p>Colour grading, retouching and post-production.</p></section>\n\
         <p><a href=\"/#contact\">Get in touch</a></p>\n",
    )
}

pub fn blog_list(posts: &[Post]) -> String {
    let mut body = String::from("<h1>Blog</h1>\n");
    if posts.is_empty() {
        body.push_str("<p>No posts yet.</p>\n");
    }
    for post in posts {
        body.push_str(&post_card(post));
    }
    layout("Blog", &body)
}

pub fn blog_detail(post: &Post) -> String {
    // Post content is staff-authored rich text and rendered unescaped.
    let body = format!(
        "<article class=\"post\">\n\
         <h1>{title}</h1>\n\
         <time datetime=\"{iso}\">{date}</time>\n\
         <img src=\"{image}\" alt=\"{title}\" />\n\
         <div class=\"content\">{content}</div>\n\
         </article>\n\
         <p><a href=\"/blog/\">All posts</a></p>\n",
        title = escape(&post.title),
        iso = post.created_at.to_rfc3339(),
        date = post.created_at.format("%B %-d, %Y"),
        image = media_src(&post.featured_image),
        content = post.content,
    );
    layout(&post.title, &body)
}

pub fn not_found() -> String {
    layout(
        "Page not found",
        "<h1>Page not found</h1>\n<p>The page you requested does not exist.</p>\n\
         <p><a href=\"/\">Back to the portfolio</a></p>\n",
    )
}

pub fn server_error() -> String {
    layout(
        "Server error",
        "<h1>Something went wrong</h1>\n<p>Please try again later.</p>\n",
    )
}

/// Plain-text robots file allowing everything and pointing at the sitemap.
pub fn robots_txt(site_url: &str) -> String {
    format!(
        "User-agent: *\nDisallow: /admin/\n\nSitemap: {}\n",
        folio_core::sitemap::absolute_url(site_url, "/sitemap.xml")
    )
}

// ---------------------------------------------------------------------------
// Fragments
// ---------------------------------------------------------------------------

/// Thumbnail shown on portfolio cards.
fn card_media(item: &PortfolioItem) -> String {
    match item.media() {
        MediaKind::Video(path) => format!(
            "<video muted loop playsinline preload=\"metadata\"><source src=\"{}\" type=\"video/mp4\"></video>",
            media_src(&path)
        ),
        MediaKind::Image(path) => format!(
            "<img src=\"{}\" alt=\"{}\" />",
            media_src(&path),
            escape(&item.title)
        ),
        MediaKind::ExternalLink(_) => "<span class=\"external-video\">Video</span>".to_string(),
        MediaKind::None => String::new(),
    }
}

/// Full-size media on the project detail page.
fn detail_media(item: &PortfolioItem) -> String {
    match item.media() {
        MediaKind::Video(path) => format!(
            "<video controls><source src=\"{}\" type=\"video/mp4\"></video>",
            media_src(&path)
        ),
        MediaKind::Image(path) => format!(
            "<img src=\"{}\" alt=\"{}\" />",
            media_src(&path),
            escape(&item.title)
        ),
        MediaKind::ExternalLink(url) => format!(
            "<p class=\"external-video\"><a href=\"{}\" target=\"_blank\" rel=\"noopener\">Watch video</a></p>",
            escape(&url)
        ),
        MediaKind::None => String::new(),
    }
}

fn testimonial_block(testimonial: &Testimonial) -> String {
    let company = if testimonial.company.is_empty() {
        String::new()
    } else {
        format!(", {}", escape(&testimonial.company))
    };
    format!(
        "<blockquote>\n<p>{quote}</p>\n<footer>{name}{company}</footer>\n</blockquote>\n",
        quote = escape(&testimonial.quote),
        name = escape(&testimonial.client_name),
    )
}

fn post_card(post: &Post) -> String {
    format!(
        "<article class=\"post-card\">\n\
         <a href=\"{href}\"><img src=\"{image}\" alt=\"{title}\" /><h3>{title}</h3></a>\n\
         <time datetime=\"{iso}\">{date}</time>\n\
         <p>{excerpt}</p>\n\
         </article>\n",
        href = escape(&post.absolute_path()),
        image = media_src(&post.featured_image),
        title = escape(&post.title),
        iso = post.created_at.to_rfc3339(),
        date = post.created_at.format("%B %-d, %Y"),
        excerpt = escape(&post.excerpt),
    )
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn item() -> PortfolioItem {
        PortfolioItem {
            id: 1,
            title: "Sunset <Reel>".into(),
            category: "videography".into(),
            description: "Golden hour".into(),
            image_file: None,
            video_file: None,
            video_url: Some("https://vimeo.com/1".into()),
            slug: "sunset-reel".into(),
            date_created: Utc.with_ymd_and_hms(2024, 5, 17, 10, 0, 0).unwrap(),
            updated_at: Utc::now(),
        }
    }

    fn post() -> Post {
        Post {
            id: 1,
            title: "Hello".into(),
            slug: "hello".into(),
            featured_image: "blog_featured_images/h.jpg".into(),
            content: "<p>Rich <strong>text</strong></p>".into(),
            excerpt: "Short & sweet".into(),
            created_at: Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn home_shows_banner_only_after_submission() {
        let mut ctx = HomeContext {
            portfolio_items: &[],
            testimonials: &[],
            latest_posts: &[],
            site_config: None,
            message_sent: false,
        };
        assert!(!home(&ctx).contains("message-sent"));
        ctx.message_sent = true;
        assert!(home(&ctx).contains("message-sent"));
    }

    #[test]
    fn project_detail_escapes_title_and_links_external_video() {
        let gallery = vec![AdditionalImage {
            id: 1,
            portfolio_item_id: 1,
            image: "portfolio_gallery/g.jpg".into(),
            caption: "Behind the scenes".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }];
        let html = project_detail(&item(), &gallery);
        assert!(html.contains("<h1>Sunset &lt;Reel&gt;</h1>"));
        assert!(html.contains("href=\"https://vimeo.com/1\""));
        assert!(html.contains("/media/portfolio_gallery/g.jpg"));
        assert!(html.contains("<figcaption>Behind the scenes</figcaption>"));
        assert!(html.contains("May 17, 2024"));
    }

    #[test]
    fn blog_detail_keeps_rich_text() {
        let html = blog_detail(&post());
        assert!(html.contains("<p>Rich <strong>text</strong></p>"));
    }

    #[test]
    fn blog_list_escapes_excerpt() {
        let html = blog_list(&[post()]);
        assert!(html.contains("Short &amp; sweet"));
        assert!(html.contains("href=\"/blog/hello/\""));
    }

    #[test]
    fn robots_points_at_sitemap() {
        let txt = robots_txt("https://example.com/");
        assert!(txt.starts_with("User-agent: *"));
        assert!(txt.contains("Sitemap: https://example.com/sitemap.xml"));
    }
}
