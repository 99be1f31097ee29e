/// Primary keys of the direct document store are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// A raw CMS document as returned by either content source.
///
/// Documents are loosely typed: any field may be missing or carry one of
/// several historical shapes. The normalizer is the only place that
/// interprets them.
pub type Document = serde_json::Value;
