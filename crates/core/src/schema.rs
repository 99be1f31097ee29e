//! Field constraints of the CMS content schema.
//!
//! The admin enforces these on write. On read they are diagnostics only:
//! [`audit_project`] and friends list violations so the gateway can log
//! them, and the content is served regardless.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::normalize::{is_absolute_url, is_hex_color};
use crate::view_model::{AboutView, ProjectView, SiteConfigView};

/// Six-digit hex color; the admin validator is case-insensitive.
pub const HEX_COLOR_PATTERN: &str = r"(?i)^#[0-9A-F]{6}$";

static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid regex"));

/* --------------------------------------------------------------------------
Named limits
-------------------------------------------------------------------------- */

pub const TITLE_MAX: usize = 100;
pub const SUBTITLE_MAX: usize = 150;
pub const DESCRIPTION_MIN: usize = 200;
pub const DESCRIPTION_MAX: usize = 500;
pub const ROLE_MAX: usize = 100;
pub const TEAM_MAX: usize = 500;
pub const TIMELINE_MAX: usize = 50;
pub const CATEGORIES_MIN: usize = 1;
pub const CATEGORIES_MAX: usize = 8;
pub const OUTCOMES_MAX: usize = 5;
pub const OUTCOME_TEXT_MAX: usize = 100;
pub const CAROUSEL_MIN: usize = 3;
pub const CAROUSEL_MAX: usize = 10;
pub const ABOUT_CAROUSEL_MIN: usize = 4;
pub const ABOUT_CAROUSEL_MAX: usize = 12;
pub const SOCIAL_LINKS_MIN: usize = 1;
pub const SOCIAL_LINKS_MAX: usize = 10;
pub const ALT_TEXT_MAX: usize = 200;

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub rule_type: String,
    pub message: String,
}

impl FieldViolation {
    fn new(field: &str, rule_type: &str, message: String) -> Self {
        Self {
            field: field.to_string(),
            rule_type: rule_type.to_string(),
            message,
        }
    }
}

/* --------------------------------------------------------------------------
Validation functions
-------------------------------------------------------------------------- */

/// Character length of `value` within `[min, max]`.
pub fn validate_length(field: &str, value: &str, min: usize, max: usize) -> Result<(), CoreError> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(CoreError::Validation(format!(
            "{field} must be between {min} and {max} characters (got {len})"
        )));
    }
    Ok(())
}

/// Number of rows in an array field within `[min, max]`.
pub fn validate_rows(field: &str, rows: usize, min: usize, max: usize) -> Result<(), CoreError> {
    if rows < min || rows > max {
        return Err(CoreError::Validation(format!(
            "{field} must have between {min} and {max} rows (got {rows})"
        )));
    }
    Ok(())
}

pub fn validate_hex_color(value: &str) -> Result<(), CoreError> {
    if is_hex_color(value) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Must be valid hex color: '{value}'"
        )))
    }
}

pub fn validate_url(value: &str) -> Result<(), CoreError> {
    if is_absolute_url(value) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!("Must be valid URL: '{value}'")))
    }
}

/// Lowercase alphanumerics separated by single hyphens.
pub fn validate_slug(value: &str) -> Result<(), CoreError> {
    if SLUG_RE.is_match(value) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Slug must be lowercase alphanumerics and hyphens: '{value}'"
        )))
    }
}

/* --------------------------------------------------------------------------
Audits
-------------------------------------------------------------------------- */

fn push(violations: &mut Vec<FieldViolation>, field: &str, rule_type: &str, result: Result<(), CoreError>) {
    if let Err(CoreError::Validation(msg)) = result {
        violations.push(FieldViolation::new(field, rule_type, msg));
    }
}

/// List schema violations of a normalized project.
pub fn audit_project(project: &ProjectView) -> Vec<FieldViolation> {
    let mut v = Vec::new();
    push(&mut v, "title", "length", validate_length("title", &project.title, 1, TITLE_MAX));
    push(&mut v, "subtitle", "length", validate_length("subtitle", &project.subtitle, 1, SUBTITLE_MAX));
    push(&mut v, "slug", "format", validate_slug(&project.slug));
    push(
        &mut v,
        "description",
        "length",
        validate_length("description", &project.description, DESCRIPTION_MIN, DESCRIPTION_MAX),
    );
    push(&mut v, "role", "length", validate_length("role", &project.role, 1, ROLE_MAX));
    push(&mut v, "team", "length", validate_length("team", &project.team, 0, TEAM_MAX));
    push(&mut v, "timeline", "length", validate_length("timeline", &project.timeline, 1, TIMELINE_MAX));
    push(
        &mut v,
        "categories",
        "rows",
        validate_rows("categories", project.categories.len(), CATEGORIES_MIN, CATEGORIES_MAX),
    );
    push(&mut v, "outcomes", "rows", validate_rows("outcomes", project.outcomes.len(), 0, OUTCOMES_MAX));
    for outcome in &project.outcomes {
        push(&mut v, "outcomes.text", "length", validate_length("outcomes.text", outcome, 1, OUTCOME_TEXT_MAX));
    }
    push(&mut v, "backgroundColor", "format", validate_hex_color(&project.background_color));
    push(
        &mut v,
        "carouselImages",
        "rows",
        validate_rows("carouselImages", project.carousel_images.len(), CAROUSEL_MIN, CAROUSEL_MAX),
    );
    if project.hero_image.is_none() {
        v.push(FieldViolation::new("heroImage", "required", "heroImage is required".to_string()));
    }
    v
}

/// List schema violations of the about section.
pub fn audit_about(about: &AboutView) -> Vec<FieldViolation> {
    let mut v = Vec::new();
    push(
        &mut v,
        "imageCarousel",
        "rows",
        validate_rows("imageCarousel", about.carousel_images.len(), ABOUT_CAROUSEL_MIN, ABOUT_CAROUSEL_MAX),
    );
    for image in &about.carousel_images {
        push(&mut v, "imageCarousel.alt", "length", validate_length("alt", &image.alt, 0, ALT_TEXT_MAX));
    }
    v
}

/// List schema violations of the site config.
pub fn audit_site_config(site: &SiteConfigView) -> Vec<FieldViolation> {
    let mut v = Vec::new();
    push(
        &mut v,
        "socialLinks",
        "rows",
        validate_rows("socialLinks", site.social_links.len(), SOCIAL_LINKS_MIN, SOCIAL_LINKS_MAX),
    );
    for link in &site.social_links {
        push(&mut v, "socialLinks.url", "format", validate_url(&link.url));
    }
    if !site.email.contains('@') {
        v.push(FieldViolation::new("email", "format", format!("Must be an email address: '{}'", site.email)));
    }
    v
}

/// Report soft-invariant violations across the project list: duplicate
/// slugs and more than one featured project.
pub fn audit_project_list(projects: &[ProjectView]) -> Vec<FieldViolation> {
    let mut v = Vec::new();
    let mut seen = std::collections::HashSet::new();
    for project in projects {
        if !seen.insert(project.slug.as_str()) {
            v.push(FieldViolation::new(
                "slug",
                "unique",
                format!("Duplicate slug '{}'", project.slug),
            ));
        }
    }
    let featured = projects.iter().filter(|p| p.featured).count();
    if featured > 1 {
        v.push(FieldViolation::new(
            "featured",
            "at_most_one",
            format!("{featured} projects are featured; only one should be"),
        ));
    }
    v
}
