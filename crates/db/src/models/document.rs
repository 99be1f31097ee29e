//! Rows of the `cms_documents` and `cms_globals` tables.

use serde_json::Value;
use sqlx::FromRow;
use folio_core::types::{DbId, Document, Timestamp};

/// A row from the `cms_documents` table.
#[derive(Debug, Clone, FromRow)]
pub struct DocumentRow {
    pub id: DbId,
    pub collection: String,
    pub doc: Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl DocumentRow {
    /// The stored document with `id`, `createdAt` and `updatedAt` filled in
    /// from the row when the document itself does not carry them.
    pub fn into_document(self) -> Document {
        let mut doc = self.doc;
        if let Value::Object(map) = &mut doc {
            map.entry("id").or_insert_with(|| Value::from(self.id));
            map.entry("createdAt")
                .or_insert_with(|| Value::from(self.created_at.to_rfc3339()));
            map.entry("updatedAt")
                .or_insert_with(|| Value::from(self.updated_at.to_rfc3339()));
        }
        doc
    }
}

/// A row from the `cms_globals` table.
#[derive(Debug, Clone, FromRow)]
pub struct GlobalRow {
    pub slug: String,
    pub doc: Value,
    pub updated_at: Timestamp,
}
