//! Presentation-ready view models.
//!
//! Every field is required and always populated: the normalizer fills
//! gaps with defaults. The serialized (camelCase) form is itself an
//! accepted normalizer input, so normalizing a view model is a no-op.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Publication state of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Draft,
    Published,
}

impl ProjectStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Draft => "draft",
            ProjectStatus::Published => "published",
        }
    }
}

/// A resolved image reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageView {
    pub url: String,
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Generated renditions by variant name (`thumbnail`, `card`, `large`).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub variants: BTreeMap<String, String>,
}


/// Social network of a link. Unrecognized platforms map to `Custom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Twitter,
    LinkedIn,
    GitHub,
    Dribbble,
    Behance,
    Instagram,
    Custom,
}

impl Platform {
    pub const ALL: [Platform; 7] = [
        Platform::Twitter,
        Platform::LinkedIn,
        Platform::GitHub,
        Platform::Dribbble,
        Platform::Behance,
        Platform::Instagram,
        Platform::Custom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::LinkedIn => "linkedin",
            Platform::GitHub => "github",
            Platform::Dribbble => "dribbble",
            Platform::Behance => "behance",
            Platform::Instagram => "instagram",
            Platform::Custom => "custom",
        }
    }

    /// Case-insensitive parse of the CMS select value or its label.
    pub fn parse(raw: &str) -> Platform {
        let lowered = raw.trim().to_ascii_lowercase();
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str() == lowered)
            .unwrap_or(Platform::Custom)
    }

    /// Guess the platform of a bare URL from its host.
    pub fn from_url(url: &str) -> Platform {
        let host = url
            .split("://")
            .nth(1)
            .unwrap_or("")
            .split(['/', '?', '#'])
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();
        let host = host.strip_prefix("www.").unwrap_or(&host);

        match host {
            "twitter.com" | "x.com" => Platform::Twitter,
            "linkedin.com" => Platform::LinkedIn,
            "github.com" => Platform::GitHub,
            "dribbble.com" => Platform::Dribbble,
            "behance.net" => Platform::Behance,
            "instagram.com" => Platform::Instagram,
            _ => Platform::Custom,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinkView {
    pub platform: Platform,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub slug: String,
    pub description: String,
    pub role: String,
    pub team: String,
    pub timeline: String,
    pub categories: Vec<String>,
    pub outcomes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<ImageView>,
    pub background_color: String,
    pub carousel_images: Vec<ImageView>,
    pub featured: bool,
    pub order: i64,
    pub status: ProjectStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl ProjectView {
    pub fn is_published(&self) -> bool {
        self.status == ProjectStatus::Published
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfigView {
    pub name: String,
    pub location: String,
    pub email: String,
    pub social_links: Vec<SocialLinkView>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cv_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutView {
    pub bio_left: String,
    pub bio_right: String,
    pub carousel_images: Vec<ImageView>,
}

/// Everything the landing page needs, assembled from three reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    pub projects: Vec<ProjectView>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<ProjectView>,
    pub site: SiteConfigView,
    pub about: AboutView,
}

/// Keep published projects only, in ascending `order` (stable for ties).
pub fn published_in_order(projects: Vec<ProjectView>) -> Vec<ProjectView> {
    let mut published: Vec<ProjectView> =
        projects.into_iter().filter(ProjectView::is_published).collect();
    published.sort_by_key(|p| p.order);
    published
}

/// Pick the featured project among published ones.
///
/// At most one project should be featured. When several are, the one
/// with the lowest `order` wins and the rest are reported.
pub fn select_featured(projects: &[ProjectView]) -> Option<&ProjectView> {
    let mut featured: Vec<&ProjectView> = projects
        .iter()
        .filter(|p| p.featured && p.is_published())
        .collect();
    featured.sort_by_key(|p| p.order);

    if featured.len() > 1 {
        tracing::warn!(
            count = featured.len(),
            chosen = %featured[0].slug,
            "More than one project is marked featured"
        );
    }
    featured.first().copied()
}
