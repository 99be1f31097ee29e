use std::sync::Arc;

use folio_gateway::ContentGateway;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Content gateway; the only way handlers read CMS content.
    pub gateway: Arc<ContentGateway>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
