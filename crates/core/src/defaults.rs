//! Named defaults and static fallback records.
//!
//! Defaults fill individual missing fields during normalization. Fallback
//! records stand in for a whole global document when it cannot be read.

use serde_json::json;

use crate::query::GlobalSlug;
use crate::types::Document;

/* --------------------------------------------------------------------------
Project field defaults
-------------------------------------------------------------------------- */

pub const DEFAULT_PROJECT_TITLE: &str = "Untitled project";
pub const DEFAULT_PROJECT_SUBTITLE: &str = "Case study";
pub const DEFAULT_PROJECT_SLUG: &str = "untitled-project";
pub const DEFAULT_PROJECT_DESCRIPTION: &str = "Details for this case study are coming soon.";
pub const DEFAULT_PROJECT_ROLE: &str = "Product Designer";
pub const DEFAULT_PROJECT_TEAM: &str = "Not specified";
pub const DEFAULT_PROJECT_TIMELINE: &str = "Ongoing";

/// Background of the work section when a project has no valid color.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#090e03";

/* --------------------------------------------------------------------------
Site config field defaults
-------------------------------------------------------------------------- */

pub const DEFAULT_SITE_NAME: &str = "Portfolio";
pub const DEFAULT_SITE_LOCATION: &str = "Mumbai, India";
pub const DEFAULT_SITE_EMAIL: &str = "hello@example.com";

/* --------------------------------------------------------------------------
About section field defaults
-------------------------------------------------------------------------- */

/// Used as the alt text of about-section images without one.
pub const ABOUT_SECTION_TITLE: &str = "About";
pub const DEFAULT_BIO_LEFT: &str =
    "Product designer turning complex problems into intuitive, thoughtful experiences.";
pub const DEFAULT_BIO_RIGHT: &str =
    "More about my background and recent work is on its way.";

/* --------------------------------------------------------------------------
Fallback records
-------------------------------------------------------------------------- */

/// Raw site-config document served when the global cannot be fetched.
pub fn site_config_fallback() -> Document {
    json!({
        "name": DEFAULT_SITE_NAME,
        "location": DEFAULT_SITE_LOCATION,
        "email": DEFAULT_SITE_EMAIL,
        "socialLinks": [],
        "cvFile": null
    })
}

/// Raw about-section document served when the global cannot be fetched.
pub fn about_section_fallback() -> Document {
    json!({
        "bioLeft": DEFAULT_BIO_LEFT,
        "bioRight": DEFAULT_BIO_RIGHT,
        "imageCarousel": []
    })
}

/// Fallback record for a global slug.
pub fn global_fallback(slug: GlobalSlug) -> Document {
    match slug {
        GlobalSlug::SiteConfig => site_config_fallback(),
        GlobalSlug::AboutSection => about_section_fallback(),
    }
}
