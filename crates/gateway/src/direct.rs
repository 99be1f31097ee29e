//! In-process CMS client.
//!
//! [`DirectClient`] is the seam between the gateway and a document source
//! that lives in the same process. [`PgDirectClient`] reads the Postgres
//! document store through [`folio_db::repositories::DocumentRepo`].

use async_trait::async_trait;

use folio_core::query::{CollectionQuery, DocumentList, GlobalSlug};
use folio_core::types::Document;
use folio_db::repositories::DocumentRepo;
use folio_db::DbPool;

use crate::error::GatewayError;

/// A content source queried in-process, without HTTP.
#[async_trait]
pub trait DirectClient: Send + Sync {
    /// Run a list query against a collection.
    async fn find(&self, query: &CollectionQuery) -> Result<DocumentList, GatewayError>;

    /// Fetch a global document; `None` if it has never been saved.
    async fn find_global(&self, slug: GlobalSlug) -> Result<Option<Document>, GatewayError>;
}

/// Direct client over the Postgres document store.
pub struct PgDirectClient {
    pool: DbPool,
}

impl PgDirectClient {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Open a pool, confirm the store answers and apply its migrations.
    pub async fn connect(database_url: &str) -> Result<Self, GatewayError> {
        let pool = folio_db::create_pool(database_url)
            .await
            .map_err(|e| GatewayError::ClientInit(format!("Failed to connect to document store: {e}")))?;
        folio_db::health_check(&pool)
            .await
            .map_err(|e| GatewayError::ClientInit(format!("Document store health check failed: {e}")))?;
        folio_db::run_migrations(&pool)
            .await
            .map_err(|e| GatewayError::ClientInit(format!("Document store migrations failed: {e}")))?;
        tracing::info!("Direct CMS client connected");
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl DirectClient for PgDirectClient {
    async fn find(&self, query: &CollectionQuery) -> Result<DocumentList, GatewayError> {
        Ok(DocumentRepo::find(&self.pool, query).await?)
    }

    async fn find_global(&self, slug: GlobalSlug) -> Result<Option<Document>, GatewayError> {
        Ok(DocumentRepo::find_global(&self.pool, slug.as_str()).await?)
    }
}
