//! Crawler-facing documents: `robots.txt` and `sitemap.xml`.

use std::fmt::Write;

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use chrono::NaiveDate;
use folio_core::view_model::ProjectView;

use crate::state::AppState;

/// A `<url>` entry of the sitemap.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub loc: String,
    pub last_modified: NaiveDate,
    pub change_frequency: &'static str,
    pub priority: f32,
}

/// GET /robots.txt
pub async fn robots(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(CONTENT_TYPE, "text/plain; charset=utf-8")],
        render_robots(&state.config.site_url),
    )
}

/// GET /sitemap.xml
pub async fn sitemap(State(state): State<AppState>) -> impl IntoResponse {
    let projects = state.gateway.published_projects().await;
    let today = chrono::Utc::now().date_naive();
    let entries = sitemap_entries(&state.config.site_url, &projects, today);
    (
        [(CONTENT_TYPE, "application/xml; charset=utf-8")],
        render_sitemap(&entries),
    )
}

/// Allow everything except the admin and the API.
pub fn render_robots(site_url: &str) -> String {
    format!(
        "User-Agent: *\nAllow: /\nDisallow: /admin\nDisallow: /api\n\nSitemap: {site_url}/sitemap.xml\n"
    )
}

/// The landing page, its two sections, then one entry per case study.
pub fn sitemap_entries(
    site_url: &str,
    projects: &[ProjectView],
    today: NaiveDate,
) -> Vec<SitemapEntry> {
    let mut entries = vec![
        SitemapEntry {
            loc: site_url.to_string(),
            last_modified: today,
            change_frequency: "monthly",
            priority: 1.0,
        },
        SitemapEntry {
            loc: format!("{site_url}/#work"),
            last_modified: today,
            change_frequency: "weekly",
            priority: 0.8,
        },
        SitemapEntry {
            loc: format!("{site_url}/#about"),
            last_modified: today,
            change_frequency: "monthly",
            priority: 0.7,
        },
    ];

    entries.extend(projects.iter().filter(|p| p.is_published()).map(|project| {
        SitemapEntry {
            loc: format!("{site_url}/projects/{}", project.slug),
            last_modified: project
                .updated_at
                .as_deref()
                .and_then(parse_date)
                .unwrap_or(today),
            change_frequency: "monthly",
            priority: 0.6,
        }
    }));

    entries
}

pub fn render_sitemap(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        // Writing to a String cannot fail.
        let _ = write!(
            xml,
            "<url>\n<loc>{}</loc>\n<lastmod>{}</lastmod>\n<changefreq>{}</changefreq>\n<priority>{:.1}</priority>\n</url>\n",
            escape_xml(&entry.loc),
            entry.last_modified.format("%Y-%m-%d"),
            entry.change_frequency,
            entry.priority,
        );
    }
    xml.push_str("</urlset>\n");
    xml
}

/// Date part of an RFC 3339 timestamp.
fn parse_date(timestamp: &str) -> Option<NaiveDate> {
    chrono::DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|dt| dt.date_naive())
}

fn escape_xml(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
