//! Logical resource descriptors for content reads.
//!
//! A [`CollectionQuery`] names a collection plus equality filters, sort
//! and limit. A [`GlobalSlug`] names a singleton document. Both are
//! source-agnostic: the REST client encodes them as a query string and the
//! direct client translates them into SQL.

use serde::{Deserialize, Serialize};

use crate::types::Document;

/// Status value of publicly visible projects.
pub const STATUS_PUBLISHED: &str = "published";

/// Field that defines project display order.
pub const ORDER_FIELD: &str = "order";

/// CMS collections known to the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Projects,
    Media,
}

impl Collection {
    /// Collection slug as used in REST paths and the document store.
    pub fn as_str(self) -> &'static str {
        match self {
            Collection::Projects => "projects",
            Collection::Media => "media",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Singleton documents known to the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GlobalSlug {
    #[serde(rename = "site-config")]
    SiteConfig,
    #[serde(rename = "about-section")]
    AboutSection,
}

impl GlobalSlug {
    pub fn as_str(self) -> &'static str {
        match self {
            GlobalSlug::SiteConfig => "site-config",
            GlobalSlug::AboutSection => "about-section",
        }
    }
}

impl std::fmt::Display for GlobalSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Right-hand side of an equality filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl FilterValue {
    /// Rendering used both in query strings and in JSON text comparisons
    /// (`doc->>'field'`), which agree for booleans, integers and strings.
    pub fn as_text(&self) -> String {
        match self {
            FilterValue::Bool(b) => b.to_string(),
            FilterValue::Int(n) => n.to_string(),
            FilterValue::Text(s) => s.clone(),
        }
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Bool(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Int(value)
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Text(value)
    }
}

/// `where[field][equals]=value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equals {
    pub field: String,
    pub value: FilterValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sort {
    pub field: String,
    pub direction: SortDirection,
}

impl Sort {
    /// Payload-style sort token: `field` or `-field` for descending.
    pub fn token(&self) -> String {
        match self.direction {
            SortDirection::Asc => self.field.clone(),
            SortDirection::Desc => format!("-{}", self.field),
        }
    }
}

/// A list query against one collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionQuery {
    pub collection: Collection,
    pub filters: Vec<Equals>,
    pub sort: Option<Sort>,
    pub limit: Option<u32>,
}

impl CollectionQuery {
    pub fn new(collection: Collection) -> Self {
        Self {
            collection,
            filters: Vec::new(),
            sort: None,
            limit: None,
        }
    }

    /// Add an equality filter.
    pub fn equals(mut self, field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.filters.push(Equals {
            field: field.into(),
            value: value.into(),
        });
        self
    }

    pub fn sort_asc(mut self, field: impl Into<String>) -> Self {
        self.sort = Some(Sort {
            field: field.into(),
            direction: SortDirection::Asc,
        });
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Published projects in display order.
    pub fn published_projects() -> Self {
        Self::new(Collection::Projects)
            .equals("status", STATUS_PUBLISHED)
            .sort_asc(ORDER_FIELD)
    }

    /// The featured published project, at most one.
    pub fn featured_project() -> Self {
        Self::new(Collection::Projects)
            .equals("featured", true)
            .equals("status", STATUS_PUBLISHED)
            .sort_asc(ORDER_FIELD)
            .limit(1)
    }

    /// A single published project by slug.
    pub fn project_by_slug(slug: &str) -> Self {
        Self::new(Collection::Projects)
            .equals("slug", slug)
            .equals("status", STATUS_PUBLISHED)
            .limit(1)
    }

    /// Encode as query-string pairs in the CMS REST dialect.
    ///
    /// Keys are returned unescaped (`where[status][equals]`); the HTTP
    /// client percent-encodes them.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self
            .filters
            .iter()
            .map(|f| (format!("where[{}][equals]", f.field), f.value.as_text()))
            .collect();

        if let Some(sort) = &self.sort {
            pairs.push(("sort".to_string(), sort.token()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        pairs
    }
}

/// A logical content reference: either a collection query or a global.
#[derive(Debug, Clone, PartialEq)]
pub enum Resource {
    Collection(CollectionQuery),
    Global(GlobalSlug),
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resource::Collection(q) => write!(f, "collection:{}", q.collection),
            Resource::Global(slug) => write!(f, "global:{slug}"),
        }
    }
}

/// Result of a list query, in the CMS pagination envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentList {
    #[serde(default)]
    pub docs: Vec<Document>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_docs: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_next_page: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
}

impl DocumentList {
    /// The fallback value for any failed list read: `{docs: []}`.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}
