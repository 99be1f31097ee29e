//! Repository for the `cms_documents` and `cms_globals` tables.
//!
//! Translates source-agnostic [`CollectionQuery`] values into SQL over the
//! JSONB document column. Equality filters compare `doc->>field` as text,
//! which matches the query-string rendering of booleans, integers and
//! strings.

use sqlx::{PgPool, Postgres, QueryBuilder};

use folio_core::query::{CollectionQuery, DocumentList, Equals, SortDirection};
use folio_core::types::Document;

use crate::models::document::{DocumentRow, GlobalRow};

// ---------------------------------------------------------------------------
// Column lists
// ---------------------------------------------------------------------------

const DOCUMENT_COLUMNS: &str = "id, collection, doc, created_at, updated_at";

const GLOBAL_COLUMNS: &str = "slug, doc, updated_at";

/// Read access to CMS documents stored in Postgres.
pub struct DocumentRepo;

impl DocumentRepo {
    /// Run a list query and return the matching documents in the CMS
    /// pagination envelope (always page 1).
    pub async fn find(pool: &PgPool, query: &CollectionQuery) -> Result<DocumentList, sqlx::Error> {
        let mut select = QueryBuilder::<Postgres>::new(format!(
            "SELECT {DOCUMENT_COLUMNS} FROM cms_documents WHERE collection = "
        ));
        select.push_bind(query.collection.as_str());
        push_filters(&mut select, &query.filters);

        match &query.sort {
            Some(sort) => {
                let direction = match sort.direction {
                    SortDirection::Asc => "ASC",
                    SortDirection::Desc => "DESC",
                };
                match sort.field.as_str() {
                    "createdAt" => select.push(format!(" ORDER BY created_at {direction}")),
                    "updatedAt" => select.push(format!(" ORDER BY updated_at {direction}")),
                    field => {
                        select.push(" ORDER BY doc -> ");
                        select.push_bind(field.to_string());
                        select.push(format!(" {direction} NULLS LAST"))
                    }
                };
                select.push(", id ASC");
            }
            None => {
                select.push(" ORDER BY id ASC");
            }
        }

        if let Some(limit) = query.limit {
            select.push(" LIMIT ");
            select.push_bind(i64::from(limit));
        }

        let rows = select.build_query_as::<DocumentRow>().fetch_all(pool).await?;

        let mut count = QueryBuilder::<Postgres>::new(
            "SELECT COUNT(*) FROM cms_documents WHERE collection = ",
        );
        count.push_bind(query.collection.as_str());
        push_filters(&mut count, &query.filters);
        let (total,) = count.build_query_as::<(i64,)>().fetch_one(pool).await?;

        let total = u64::try_from(total).unwrap_or(0);
        tracing::debug!(
            collection = %query.collection,
            returned = rows.len(),
            total,
            "Direct document query"
        );

        Ok(DocumentList {
            docs: rows.into_iter().map(DocumentRow::into_document).collect(),
            total_docs: Some(total),
            has_next_page: Some(query.limit.is_some_and(|limit| total > u64::from(limit))),
            page: Some(1),
        })
    }

    /// Fetch a global document by slug.
    pub async fn find_global(pool: &PgPool, slug: &str) -> Result<Option<Document>, sqlx::Error> {
        let query = format!("SELECT {GLOBAL_COLUMNS} FROM cms_globals WHERE slug = $1");
        let row = sqlx::query_as::<_, GlobalRow>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(|r| r.doc))
    }
}

fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, filters: &[Equals]) {
    for filter in filters {
        builder.push(" AND doc ->> ");
        builder.push_bind(filter.field.clone());
        builder.push(" = ");
        builder.push_bind(filter.value.as_text());
    }
}
