use crate::error::AppError;

/// ANY /admin, /admin/{*path}
///
/// Content is edited in the CMS admin, which runs on its own host.
pub async fn not_configured() -> AppError {
    AppError::NotImplemented(
        "The CMS admin is not served by this service; open it on the CMS host".to_string(),
    )
}
