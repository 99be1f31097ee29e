//! View model normalizer.
//!
//! Converts raw CMS documents into the fixed view-model shapes. Every
//! rule is per-field and total: a missing or malformed field is replaced
//! by its default and never stops the other fields from normalizing.
//!
//! The only non-deterministic branch is identity synthesis for documents
//! with neither an `id` nor a `slug`.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::defaults::*;
use crate::media::{has_variants, validate_upload, IMAGE_VARIANTS};
use crate::schema::HEX_COLOR_PATTERN;
use crate::shapes::{rich_text_paragraphs, BioInput, ImageEntry, LabelEntry, SocialLinkEntry};
use crate::types::Document;
use crate::view_model::{
    AboutView, ImageView, Platform, ProjectStatus, ProjectView, SiteConfigView, SocialLinkView,
};

/// Absolute http(s) URL, as accepted by the site-config link validator.
pub const ABSOLUTE_URL_PATTERN: &str = r"^https?://\S+$";

static ABSOLUTE_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ABSOLUTE_URL_PATTERN).expect("valid regex"));

static HEX_COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HEX_COLOR_PATTERN).expect("valid regex"));

/* --------------------------------------------------------------------------
Field rules
-------------------------------------------------------------------------- */

/// Non-empty (trimmed) string field, or `default`.
pub fn text_or(doc: &Value, field: &str, default: &str) -> String {
    doc.get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(default)
        .to_string()
}

/// Optional non-empty string field.
fn opt_text(doc: &Value, field: &str) -> Option<String> {
    doc.get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Label list: plain strings or objects keyed by `key`. Invalid and empty
/// entries are dropped; an absent list is empty.
pub fn label_list(value: Option<&Value>, key: &str) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| LabelEntry::classify(item, key).label())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Coerce to a finite number the way a JavaScript `Number()` call would,
/// defaulting to 0 for anything that is not finite.
fn finite_number(value: Option<&Value>) -> f64 {
    let n = match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().unwrap_or(f64::NAN)
            }
        }
        Some(Value::Bool(b)) => f64::from(u8::from(*b)),
        _ => f64::NAN,
    };
    if n.is_finite() {
        n
    } else {
        0.0
    }
}

/// Integer field: coerced like [`finite_number`], then truncated toward
/// zero. Out-of-range values saturate.
pub fn integer(value: Option<&Value>) -> i64 {
    finite_number(value).trunc() as i64
}

/// JavaScript truthiness; absent and `null` are false.
pub fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

fn dimension(value: Option<&Value>) -> Option<u32> {
    let n = value?.as_f64()?;
    if n.is_finite() && n > 0.0 && n.fract() == 0.0 && n <= f64::from(u32::MAX) {
        Some(n as u32)
    } else {
        None
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn mime_type(media: &Map<String, Value>) -> Option<&str> {
    non_empty_str(media.get("mimeType"))
}

/// Whether a populated media document is something the media collection
/// accepts. Documents that declare no MIME type are trusted.
fn is_accepted_upload(media: &Map<String, Value>) -> bool {
    let Some(mime) = mime_type(media) else {
        return true;
    };
    let size = media.get("filesize").and_then(Value::as_u64).unwrap_or(0);
    match validate_upload(mime, size) {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!(error = %e, "Skipping unacceptable upload");
            false
        }
    }
}

/// Rendition URLs keyed by variant name. Reads the CMS `sizes.<name>.url`
/// layout, then the flattened `variants.<name>` of an already normalized
/// view. Variants missing a URL are left out.
fn variant_urls(media: &Map<String, Value>) -> BTreeMap<String, String> {
    IMAGE_VARIANTS
        .iter()
        .filter_map(|variant| {
            let generated = media
                .get("sizes")
                .and_then(|sizes| sizes.get(variant.name))
                .and_then(|size| non_empty_str(size.get("url")));
            let flattened = media
                .get("variants")
                .and_then(|variants| non_empty_str(variants.get(variant.name)));
            generated
                .or(flattened)
                .map(|url| (variant.name.to_string(), url.to_string()))
        })
        .collect()
}

fn image_from_media(media: &Map<String, Value>, default_alt: &str) -> Option<ImageView> {
    if mime_type(media).is_some_and(|mime| !has_variants(mime)) || !is_accepted_upload(media) {
        return None;
    }
    let url = non_empty_str(media.get("url"))?;
    let alt = non_empty_str(media.get("alt")).unwrap_or(default_alt);

    Some(ImageView {
        url: url.to_string(),
        alt: alt.to_string(),
        width: dimension(media.get("width")),
        height: dimension(media.get("height")),
        variants: variant_urls(media),
    })
}

/// A single upload field (e.g. `heroImage`). Unpopulated or url-less
/// uploads resolve to `None`.
pub fn image(value: Option<&Value>, default_alt: &str) -> Option<ImageView> {
    let value = value?;
    ImageEntry::classify(value)
        .media()
        .and_then(|media| image_from_media(media, default_alt))
}

/// An image list. Entries without a `url` are dropped; the others keep
/// their relative order.
pub fn image_list(value: Option<&Value>, default_alt: &str) -> Vec<ImageView> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| image(Some(item), default_alt))
                .collect()
        })
        .unwrap_or_default()
}

/// Whether `url` is a usable absolute http(s) URL.
pub fn is_absolute_url(url: &str) -> bool {
    ABSOLUTE_URL_RE.is_match(url)
}

/// Whether `color` is a six-digit hex color (case-insensitive).
pub fn is_hex_color(color: &str) -> bool {
    HEX_COLOR_RE.is_match(color)
}

fn social_link(entry: SocialLinkEntry<'_>) -> Option<SocialLinkView> {
    match entry {
        SocialLinkEntry::Bare(raw) => {
            let url = raw.trim();
            is_absolute_url(url).then(|| SocialLinkView {
                platform: Platform::from_url(url),
                url: url.to_string(),
                label: None,
            })
        }
        SocialLinkEntry::Structured {
            platform,
            url,
            label,
        } => {
            let url = url.map(str::trim).filter(|u| is_absolute_url(u))?;
            let platform = platform.map(Platform::parse).unwrap_or(Platform::Custom);
            let label = match platform {
                Platform::Custom => label
                    .map(str::trim)
                    .filter(|l| !l.is_empty())
                    .map(str::to_string),
                _ => None,
            };
            Some(SocialLinkView {
                platform,
                url: url.to_string(),
                label,
            })
        }
        SocialLinkEntry::Invalid => None,
    }
}

/// Social links in either accepted shape; entries without a usable URL
/// are dropped.
pub fn social_links(value: Option<&Value>) -> Vec<SocialLinkView> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| social_link(SocialLinkEntry::classify(item)))
                .collect()
        })
        .unwrap_or_default()
}

/// Stable identifier: `id` (string or number), then `slug`, then a fresh
/// UUID. The synthesized value exists only for list keys.
pub fn identity(doc: &Value) -> String {
    match doc.get("id") {
        Some(Value::String(s)) if !s.trim().is_empty() => return s.trim().to_string(),
        Some(Value::Number(n)) => return n.to_string(),
        _ => {}
    }
    opt_text(doc, "slug").unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
}

fn status(doc: &Value) -> ProjectStatus {
    match doc.get("status").and_then(Value::as_str) {
        Some(s) if s.trim().eq_ignore_ascii_case(ProjectStatus::Published.as_str()) => {
            ProjectStatus::Published
        }
        _ => ProjectStatus::Draft,
    }
}

fn timestamp(doc: &Value, field: &str) -> Option<String> {
    opt_text(doc, field).filter(|ts| chrono::DateTime::parse_from_rfc3339(ts).is_ok())
}

fn url_of_upload(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.trim()).filter(|s| !s.is_empty()).map(str::to_string),
        other => ImageEntry::classify(other)
            .media()
            .filter(|media| is_accepted_upload(media))
            .and_then(|media| non_empty_str(media.get("url")))
            .map(str::to_string),
    }
}

/* --------------------------------------------------------------------------
Document normalizers
-------------------------------------------------------------------------- */

/// Normalize one project document.
pub fn project(doc: &Document) -> ProjectView {
    let title = text_or(doc, "title", DEFAULT_PROJECT_TITLE);

    let background_color = doc
        .get("backgroundColor")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|c| is_hex_color(c))
        .unwrap_or(DEFAULT_BACKGROUND_COLOR)
        .to_string();

    ProjectView {
        id: identity(doc),
        subtitle: text_or(doc, "subtitle", DEFAULT_PROJECT_SUBTITLE),
        slug: text_or(doc, "slug", DEFAULT_PROJECT_SLUG),
        description: text_or(doc, "description", DEFAULT_PROJECT_DESCRIPTION),
        role: text_or(doc, "role", DEFAULT_PROJECT_ROLE),
        team: text_or(doc, "team", DEFAULT_PROJECT_TEAM),
        timeline: text_or(doc, "timeline", DEFAULT_PROJECT_TIMELINE),
        categories: label_list(doc.get("categories"), "name"),
        outcomes: label_list(doc.get("outcomes"), "text"),
        hero_image: image(doc.get("heroImage"), &title),
        background_color,
        carousel_images: image_list(doc.get("carouselImages"), &title),
        featured: truthy(doc.get("featured")),
        order: integer(doc.get("order")),
        status: status(doc),
        created_at: timestamp(doc, "createdAt"),
        updated_at: timestamp(doc, "updatedAt"),
        title,
    }
}

/// Normalize a list of project documents, preserving input order.
pub fn projects(docs: &[Document]) -> Vec<ProjectView> {
    docs.iter().map(project).collect()
}

/// Normalize the site-config global.
pub fn site_config(doc: &Document) -> SiteConfigView {
    SiteConfigView {
        name: text_or(doc, "name", DEFAULT_SITE_NAME),
        location: text_or(doc, "location", DEFAULT_SITE_LOCATION),
        email: text_or(doc, "email", DEFAULT_SITE_EMAIL),
        social_links: social_links(doc.get("socialLinks")),
        cv_url: url_of_upload(doc.get("cvFile")).or_else(|| opt_text(doc, "cvUrl")),
    }
}

/// Normalize the about-section global, in either schema version.
///
/// With the older single `bio`, its first paragraph fills `bioLeft` and
/// the remaining paragraphs fill `bioRight`, unless the split fields are
/// themselves present.
pub fn about_section(doc: &Document) -> AboutView {
    let non_empty = |s: Option<&str>| s.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string);

    let (left, right) = match BioInput::classify(doc) {
        BioInput::Split { left, right } => (non_empty(left), non_empty(right)),
        BioInput::Legacy { left, right, bio } => {
            let mut paragraphs = rich_text_paragraphs(bio).into_iter();
            let legacy_left = paragraphs.next();
            let rest: Vec<String> = paragraphs.collect();
            let legacy_right = (!rest.is_empty()).then(|| rest.join("\n\n"));
            (
                non_empty(left).or(legacy_left),
                non_empty(right).or(legacy_right),
            )
        }
    };

    let carousel = doc.get("imageCarousel").or_else(|| doc.get("carouselImages"));

    AboutView {
        bio_left: left.unwrap_or_else(|| DEFAULT_BIO_LEFT.to_string()),
        bio_right: right.unwrap_or_else(|| DEFAULT_BIO_RIGHT.to_string()),
        carousel_images: image_list(carousel, ABOUT_SECTION_TITLE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_project() -> Value {
        json!({
            "id": 7,
            "title": "Striker",
            "subtitle": "NFT-based Cricket Fantasy Game",
            "slug": "striker",
            "description": "Shipped a player-card fantasy system.",
            "role": "Product Designer II",
            "team": "2 Designers, 5 SDEs",
            "timeline": "Q2 2022 - Q4 2022",
            "categories": [{"name": "Web3"}, {"name": "NFT"}],
            "outcomes": [{"text": "25K Daily Active Users"}],
            "heroImage": {"id": 3, "url": "/media/hero.webp", "alt": "Hero", "width": 1920, "height": 1080},
            "backgroundColor": "#090E03",
            "carouselImages": [
                {"image": {"url": "/media/1.webp", "alt": "One"}},
                {"image": {"url": "/media/2.webp"}},
                {"image": {"url": "/media/3.webp", "width": 452, "height": 565}}
            ],
            "featured": true,
            "order": 1,
            "status": "published",
            "createdAt": "2024-01-02T03:04:05.000Z",
            "updatedAt": "2024-02-02T03:04:05.000Z"
        })
    }

    #[test]
    fn full_project_maps_every_field() {
        let view = project(&full_project());
        assert_eq!(view.id, "7");
        assert_eq!(view.title, "Striker");
        assert_eq!(view.categories, vec!["Web3", "NFT"]);
        assert_eq!(view.outcomes, vec!["25K Daily Active Users"]);
        assert_eq!(view.hero_image.as_ref().unwrap().alt, "Hero");
        assert_eq!(view.hero_image.as_ref().unwrap().width, Some(1920));
        assert_eq!(view.carousel_images.len(), 3);
        assert_eq!(view.carousel_images[1].alt, "Striker");
        assert_eq!(view.carousel_images[2].height, Some(565));
        assert!(view.featured);
        assert_eq!(view.order, 1);
        assert_eq!(view.status, ProjectStatus::Published);
        assert!(view.created_at.is_some());
    }

    #[test]
    fn empty_project_is_fully_defaulted() {
        let view = project(&json!({}));
        assert_eq!(view.title, DEFAULT_PROJECT_TITLE);
        assert_eq!(view.subtitle, DEFAULT_PROJECT_SUBTITLE);
        assert_eq!(view.slug, DEFAULT_PROJECT_SLUG);
        assert_eq!(view.description, DEFAULT_PROJECT_DESCRIPTION);
        assert_eq!(view.role, DEFAULT_PROJECT_ROLE);
        assert_eq!(view.team, DEFAULT_PROJECT_TEAM);
        assert_eq!(view.timeline, DEFAULT_PROJECT_TIMELINE);
        assert_eq!(view.background_color, DEFAULT_BACKGROUND_COLOR);
        assert!(view.categories.is_empty());
        assert!(view.outcomes.is_empty());
        assert!(view.carousel_images.is_empty());
        assert!(view.hero_image.is_none());
        assert!(!view.featured);
        assert_eq!(view.order, 0);
        assert_eq!(view.status, ProjectStatus::Draft);
        assert!(!view.id.is_empty());
    }

    #[test]
    fn non_object_document_is_fully_defaulted() {
        let view = project(&json!("garbage"));
        assert_eq!(view.title, DEFAULT_PROJECT_TITLE);
        let about = about_section(&Value::Null);
        assert_eq!(about.bio_left, DEFAULT_BIO_LEFT);
    }

    #[test]
    fn whitespace_string_uses_default() {
        let view = project(&json!({"title": "   "}));
        assert_eq!(view.title, DEFAULT_PROJECT_TITLE);
    }

    #[test]
    fn category_shapes_are_equivalent() {
        let plain = label_list(Some(&json!(["Web3", "NFT"])), "name");
        let keyed = label_list(Some(&json!([{"name": "Web3"}, {"name": "NFT"}])), "name");
        assert_eq!(plain, keyed);
    }

    #[test]
    fn outcome_shapes_are_equivalent() {
        let plain = label_list(Some(&json!(["25K DAU", "1M USD"])), "text");
        let keyed = label_list(Some(&json!([{"text": "25K DAU"}, {"text": "1M USD"}])), "text");
        assert_eq!(plain, keyed);
    }

    #[test]
    fn label_list_drops_invalid_entries() {
        let out = label_list(
            Some(&json!(["A", null, {"name": ""}, 4, {"other": "x"}, {"name": "B"}, ""])),
            "name",
        );
        assert_eq!(out, vec!["A", "B"]);
    }

    #[test]
    fn image_without_url_is_dropped_alone() {
        let out = image_list(
            Some(&json!([
                {"image": {"url": "/1.jpg", "alt": "one"}},
                {"image": {"alt": "no url"}},
                {"image": 12},
                {"image": {"url": "/3.jpg", "alt": "three"}}
            ])),
            "T",
        );
        assert_eq!(
            out,
            vec![
                ImageView { url: "/1.jpg".into(), alt: "one".into(), ..Default::default() },
                ImageView { url: "/3.jpg".into(), alt: "three".into(), ..Default::default() },
            ]
        );
    }

    #[test]
    fn scenario_about_section() {
        let doc = json!({
            "bioLeft": "",
            "bioRight": "X",
            "imageCarousel": [{"image": {"url": "/a.jpg"}}, {"image": {}}]
        });
        let about = about_section(&doc);
        assert_eq!(about.bio_left, DEFAULT_BIO_LEFT);
        assert_eq!(about.bio_right, "X");
        assert_eq!(
            about.carousel_images,
            vec![ImageView {
                url: "/a.jpg".into(),
                alt: ABOUT_SECTION_TITLE.into(),
                ..Default::default()
            }]
        );
    }

    #[test]
    fn scenario_social_links() {
        let links = social_links(Some(&json!([
            {"platform": "Twitter", "url": "https://x.com"},
            "not-a-link"
        ])));
        assert_eq!(
            links,
            vec![SocialLinkView {
                platform: Platform::Twitter,
                url: "https://x.com".into(),
                label: None
            }]
        );
    }

    #[test]
    fn scenario_non_numeric_order() {
        let view = project(&json!({"order": "abc"}));
        assert_eq!(view.order, 0);
    }

    #[test]
    fn numeric_string_order_is_coerced() {
        assert_eq!(integer(Some(&json!(" 12 "))), 12);
        assert_eq!(integer(Some(&json!("inf"))), 0);
        assert_eq!(integer(Some(&json!(null))), 0);
        assert_eq!(integer(Some(&json!(true))), 1);
    }

    #[test]
    fn fractional_order_is_truncated_to_an_integer() {
        assert_eq!(project(&json!({"order": 2.7})).order, 2);
        assert_eq!(project(&json!({"order": "-1.5"})).order, -1);
        assert_eq!(integer(Some(&json!(1e300))), i64::MAX);
        let serialized = serde_json::to_value(project(&json!({"order": 3.9}))).unwrap();
        assert_eq!(serialized["order"], json!(3));
    }

    #[test]
    fn featured_uses_truthiness() {
        assert!(truthy(Some(&json!(1))));
        assert!(truthy(Some(&json!("yes"))));
        assert!(!truthy(Some(&json!(0))));
        assert!(!truthy(Some(&json!(""))));
        assert!(!truthy(None));
    }

    #[test]
    fn social_link_platform_defaults_to_custom() {
        let links = social_links(Some(&json!([
            {"platform": "mastodon", "url": "https://mastodon.social/@me", "label": "Mastodon"},
            {"url": "https://example.com"},
            {"platform": "GitHub", "url": "https://github.com/me", "label": "ignored"},
            {"platform": "LinkedIn", "url": "ftp://nope"},
            "https://dribbble.com/me"
        ])));
        assert_eq!(links.len(), 4);
        assert_eq!(links[0].platform, Platform::Custom);
        assert_eq!(links[0].label.as_deref(), Some("Mastodon"));
        assert_eq!(links[1].platform, Platform::Custom);
        assert_eq!(links[2].platform, Platform::GitHub);
        assert_eq!(links[2].label, None);
        assert_eq!(links[3].platform, Platform::Dribbble);
    }

    #[test]
    fn identity_prefers_id_then_slug() {
        assert_eq!(identity(&json!({"id": "abc", "slug": "s"})), "abc");
        assert_eq!(identity(&json!({"id": 4})), "4");
        assert_eq!(identity(&json!({"slug": "striker"})), "striker");
        let a = identity(&json!({}));
        let b = identity(&json!({}));
        assert!(!a.is_empty());
        assert_ne!(a, b);
    }

    #[test]
    fn invalid_background_color_is_defaulted() {
        assert_eq!(project(&json!({"backgroundColor": "red"})).background_color, DEFAULT_BACKGROUND_COLOR);
        assert_eq!(project(&json!({"backgroundColor": "#a1b2c3"})).background_color, "#a1b2c3");
    }

    #[test]
    fn legacy_bio_is_split_into_columns() {
        let doc = json!({
            "bio": {"root": {"children": [
                {"children": [{"text": "Left column."}]},
                {"children": [{"text": "Right one."}]},
                {"children": [{"text": "Right two."}]}
            ]}}
        });
        let about = about_section(&doc);
        assert_eq!(about.bio_left, "Left column.");
        assert_eq!(about.bio_right, "Right one.\n\nRight two.");
    }

    #[test]
    fn split_fields_win_over_legacy_bio() {
        let doc = json!({"bioLeft": "Explicit", "bio": "Legacy one.\n\nLegacy two."});
        let about = about_section(&doc);
        assert_eq!(about.bio_left, "Explicit");
        assert_eq!(about.bio_right, "Legacy two.");
    }

    #[test]
    fn site_config_resolves_cv_upload() {
        let site = site_config(&json!({
            "name": "Jane",
            "email": "jane@example.com",
            "cvFile": {"id": 9, "url": "/media/cv.pdf"}
        }));
        assert_eq!(site.name, "Jane");
        assert_eq!(site.location, DEFAULT_SITE_LOCATION);
        assert_eq!(site.cv_url.as_deref(), Some("/media/cv.pdf"));
        assert!(site.social_links.is_empty());
    }

    #[test]
    fn unpopulated_cv_upload_is_none() {
        let site = site_config(&json!({"cvFile": 9}));
        assert_eq!(site.cv_url, None);
    }

    #[test]
    fn normalizing_a_project_view_is_idempotent() {
        let once = project(&full_project());
        let again = project(&serde_json::to_value(&once).unwrap());
        assert_eq!(once, again);
    }

    #[test]
    fn normalizing_defaults_is_idempotent() {
        let once = project(&json!({"slug": "only-slug"}));
        let again = project(&serde_json::to_value(&once).unwrap());
        assert_eq!(once, again);
    }

    #[test]
    fn normalizing_site_and_about_views_is_idempotent() {
        let site = site_config(&json!({
            "socialLinks": [
                {"platform": "custom", "url": "https://blog.example.com", "label": "Blog"},
                {"platform": "Twitter", "url": "https://x.com/me"}
            ],
            "cvFile": {"url": "/cv.pdf"}
        }));
        assert_eq!(site_config(&serde_json::to_value(&site).unwrap()), site);

        let about = about_section(&json!({
            "bio": "One.\n\nTwo.",
            "imageCarousel": [{"image": {"url": "/a.jpg", "width": 10}}]
        }));
        assert_eq!(about_section(&serde_json::to_value(&about).unwrap()), about);
    }

    #[test]
    fn generated_sizes_become_variants() {
        let hero = image(
            Some(&json!({
                "url": "/media/hero.png",
                "mimeType": "image/png",
                "filesize": 2048,
                "sizes": {
                    "thumbnail": {"url": "/media/hero-400x225.webp", "width": 400},
                    "card": {"url": "/media/hero-800x800.webp"},
                    "large": {"url": null},
                    "poster": {"url": "/media/ignored.webp"}
                }
            })),
            "Hero",
        )
        .unwrap();
        assert_eq!(hero.url, "/media/hero.png");
        assert_eq!(hero.variants.len(), 2);
        assert_eq!(hero.variants["thumbnail"], "/media/hero-400x225.webp");
        assert_eq!(hero.variants["card"], "/media/hero-800x800.webp");
        assert!(!hero.variants.contains_key("large"));
    }

    #[test]
    fn media_without_sizes_has_no_variants() {
        let hero = image(Some(&json!({"url": "/a.jpg"})), "A").unwrap();
        assert!(hero.variants.is_empty());
        let serialized = serde_json::to_value(&hero).unwrap();
        assert_eq!(serialized, json!({"url": "/a.jpg", "alt": "A"}));
    }

    #[test]
    fn non_image_upload_is_not_an_image() {
        let out = image_list(
            Some(&json!([
                {"image": {"url": "/cv.pdf", "mimeType": "application/pdf"}},
                {"image": {"url": "/big.png", "mimeType": "image/png", "filesize": 6 * 1024 * 1024}},
                {"image": {"url": "/ok.webp", "mimeType": "image/webp"}}
            ])),
            "T",
        );
        let urls: Vec<&str> = out.iter().map(|i| i.url.as_str()).collect();
        assert_eq!(urls, vec!["/ok.webp"]);
    }

    #[test]
    fn cv_upload_must_be_an_accepted_type() {
        let pdf = site_config(&json!({"cvFile": {"url": "/cv.pdf", "mimeType": "application/pdf"}}));
        assert_eq!(pdf.cv_url.as_deref(), Some("/cv.pdf"));
        let exe = site_config(&json!({"cvFile": {"url": "/cv.exe", "mimeType": "application/x-msdownload"}}));
        assert_eq!(exe.cv_url, None);
    }

    #[test]
    fn normalizing_an_image_with_variants_is_idempotent() {
        let once = image(
            Some(&json!({
                "url": "/m.jpg",
                "mimeType": "image/jpeg",
                "sizes": {"large": {"url": "/m-1920.webp"}}
            })),
            "M",
        )
        .unwrap();
        let again = image(Some(&serde_json::to_value(&once).unwrap()), "M").unwrap();
        assert_eq!(once, again);
        assert_eq!(again.variants["large"], "/m-1920.webp");
    }
}
