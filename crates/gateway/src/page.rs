//! Page-level content assembly.

use folio_core::view_model::{select_featured, HomePage};

use crate::gateway::ContentGateway;

/// Load everything the landing page renders.
///
/// The three reads are independent and run concurrently. Each degrades to
/// its own fallback, so one failing source never blocks the others.
pub async fn load_home_page(gateway: &ContentGateway) -> HomePage {
    let (projects, site, about) = tokio::join!(
        gateway.published_projects(),
        gateway.site_config(),
        gateway.about_section(),
    );
    let featured = select_featured(&projects).cloned();

    tracing::debug!(
        projects = projects.len(),
        featured = featured.as_ref().map(|p| p.slug.as_str()),
        "Home page content loaded"
    );

    HomePage {
        projects,
        featured,
        site,
        about,
    }
}
