/// Errors from either content source.
///
/// These never cross the [`ContentGateway`](crate::gateway::ContentGateway)
/// boundary: they are logged there and replaced by fallback values.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Network, DNS, TLS or timeout failure talking to the REST API.
    #[error("CMS unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),

    /// The REST API answered with a non-2xx status code.
    #[error("CMS rejected request ({status}): {body}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// A 2xx response whose body was not the expected JSON.
    #[error("Malformed CMS response: {0}")]
    Decode(String),

    /// The direct client failed to run a query.
    #[error("Direct client query failed: {0}")]
    Direct(#[from] sqlx::Error),

    /// The direct client could not be created.
    #[error("Direct client initialization failed: {0}")]
    ClientInit(String),

    /// Gateway settings could not be parsed or applied.
    #[error("Invalid gateway configuration: {0}")]
    Config(String),
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            GatewayError::Decode(err.to_string())
        } else {
            GatewayError::Unreachable(err)
        }
    }
}

impl GatewayError {
    /// Coarse category used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            GatewayError::Unreachable(_) => "source_unreachable",
            GatewayError::Rejected { .. } | GatewayError::Direct(_) => "source_rejected",
            GatewayError::Decode(_) => "malformed_response",
            GatewayError::ClientInit(_) => "client_init",
            GatewayError::Config(_) => "config",
        }
    }
}
