//! Content gateway.
//!
//! Every read goes to exactly one source, chosen once at construction:
//! the in-process [`DirectClient`](crate::direct::DirectClient) when the
//! deployment is capable of it and the CMS secret is configured, the REST
//! API otherwise. No error leaves this module. Failed list reads become
//! `{docs: []}` and failed global reads become the static fallback record.

use std::sync::Arc;

use folio_core::defaults::global_fallback;
use folio_core::normalize;
use folio_core::query::{CollectionQuery, DocumentList, GlobalSlug, Resource};
use folio_core::schema;
use folio_core::types::Document;
use folio_core::view_model::{published_in_order, AboutView, ProjectView, SiteConfigView};

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::handle::DirectClientHandle;
use crate::rest::RestClient;

/// Where reads are served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Direct,
    Rest,
}

impl Source {
    pub fn as_str(self) -> &'static str {
        match self {
            Source::Direct => "direct",
            Source::Rest => "rest",
        }
    }
}

/// Pick the source from the injected capability and secret presence.
pub fn select_source(direct_capable: bool, secret_configured: bool) -> Source {
    if direct_capable && secret_configured {
        Source::Direct
    } else {
        Source::Rest
    }
}

/// Outcome of resolving a [`Resource`].
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    List(DocumentList),
    Global(Option<Document>),
}

pub struct ContentGateway {
    source: Source,
    rest: RestClient,
    direct: Option<Arc<DirectClientHandle>>,
}

impl ContentGateway {
    /// Build a gateway from configuration.
    ///
    /// `direct` is the process-wide client handle; passing `None` declares
    /// the deployment incapable of direct reads regardless of the config
    /// flag.
    pub fn new(
        config: &GatewayConfig,
        direct: Option<Arc<DirectClientHandle>>,
    ) -> Result<Self, GatewayError> {
        let rest = RestClient::new(
            config.rest_base_url.clone(),
            config.api_token.clone(),
            config.request_timeout(),
        )?;
        let source = match direct {
            Some(_) if config.direct_enabled() => Source::Direct,
            _ => Source::Rest,
        };
        tracing::info!(
            source = source.as_str(),
            rest_base_url = %config.rest_base_url,
            "Content gateway configured"
        );
        Ok(Self::with_parts(source, rest, direct))
    }

    /// Assemble a gateway from already-built parts.
    pub fn with_parts(
        source: Source,
        rest: RestClient,
        direct: Option<Arc<DirectClientHandle>>,
    ) -> Self {
        let source = match (source, &direct) {
            (Source::Direct, None) => Source::Rest,
            (s, _) => s,
        };
        Self {
            source,
            rest,
            direct,
        }
    }

    pub fn source(&self) -> Source {
        self.source
    }

    /// Whether the direct client has been initialized in this process.
    pub fn direct_client_ready(&self) -> bool {
        self.direct.as_ref().is_some_and(|h| h.is_initialized())
    }

    // -----------------------------------------------------------------------
    // Raw reads
    // -----------------------------------------------------------------------

    /// Resolve any resource descriptor.
    pub async fn resolve(&self, resource: &Resource) -> Resolved {
        match resource {
            Resource::Collection(query) => Resolved::List(self.find(query).await),
            Resource::Global(slug) => Resolved::Global(self.find_global(*slug).await),
        }
    }

    /// Run a list query; any failure yields an empty list.
    pub async fn find(&self, query: &CollectionQuery) -> DocumentList {
        match self.try_find(query).await {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!(
                    collection = %query.collection,
                    source = self.source.as_str(),
                    kind = e.kind(),
                    error = %e,
                    "Content read failed, serving empty list"
                );
                DocumentList::empty()
            }
        }
    }

    /// Fetch a global; any failure yields its static fallback record.
    /// `None` means the read succeeded and the global does not exist.
    pub async fn find_global(&self, slug: GlobalSlug) -> Option<Document> {
        match self.try_find_global(slug).await {
            Ok(doc) => doc,
            Err(e) => {
                self.log_global_failure(slug, &e);
                Some(global_fallback(slug))
            }
        }
    }

    /// The stored global only; failures and missing globals are both `None`.
    async fn stored_global(&self, slug: GlobalSlug) -> Option<Document> {
        self.try_find_global(slug)
            .await
            .unwrap_or_else(|e| {
                self.log_global_failure(slug, &e);
                None
            })
    }

    fn log_global_failure(&self, slug: GlobalSlug, e: &GatewayError) {
        tracing::warn!(
            slug = %slug,
            source = self.source.as_str(),
            kind = e.kind(),
            error = %e,
            "Content read failed, serving fallback record"
        );
    }

    async fn try_find(&self, query: &CollectionQuery) -> Result<DocumentList, GatewayError> {
        match (self.source, &self.direct) {
            (Source::Direct, Some(handle)) => {
                let client = handle.get().await?;
                client.find(query).await
            }
            _ => self.rest.find(query).await,
        }
    }

    async fn try_find_global(&self, slug: GlobalSlug) -> Result<Option<Document>, GatewayError> {
        match (self.source, &self.direct) {
            (Source::Direct, Some(handle)) => {
                let client = handle.get().await?;
                client.find_global(slug).await
            }
            _ => self.rest.find_global(slug).await,
        }
    }

    // -----------------------------------------------------------------------
    // View model reads
    // -----------------------------------------------------------------------

    /// Published projects in display order.
    pub async fn published_projects(&self) -> Vec<ProjectView> {
        let list = self.find(&CollectionQuery::published_projects()).await;
        let projects = published_in_order(normalize::projects(&list.docs));
        report_violations("projects", schema::audit_project_list(&projects));
        for project in &projects {
            report_violations(&project.slug, schema::audit_project(project));
        }
        projects
    }

    /// The featured published project, if one is flagged.
    pub async fn featured_project(&self) -> Option<ProjectView> {
        let list = self.find(&CollectionQuery::featured_project()).await;
        list.docs
            .first()
            .map(normalize::project)
            .filter(ProjectView::is_published)
    }

    /// A published project by slug.
    pub async fn project_by_slug(&self, slug: &str) -> Option<ProjectView> {
        let list = self.find(&CollectionQuery::project_by_slug(slug)).await;
        list.docs
            .iter()
            .map(normalize::project)
            .find(|p| p.slug == slug && p.is_published())
    }

    pub async fn site_config(&self) -> SiteConfigView {
        self.global_view(GlobalSlug::SiteConfig, normalize::site_config, schema::audit_site_config)
            .await
    }

    pub async fn about_section(&self) -> AboutView {
        self.global_view(GlobalSlug::AboutSection, normalize::about_section, schema::audit_about)
            .await
    }

    /// Normalize a global, auditing only what the CMS actually stored. The
    /// static fallback record is served as-is.
    async fn global_view<V>(
        &self,
        slug: GlobalSlug,
        to_view: impl Fn(&Document) -> V,
        audit: impl Fn(&V) -> Vec<schema::FieldViolation>,
    ) -> V {
        match self.stored_global(slug).await {
            Some(doc) => {
                let view = to_view(&doc);
                report_violations(slug.as_str(), audit(&view));
                view
            }
            None => to_view(&global_fallback(slug)),
        }
    }
}

fn report_violations(resource: &str, violations: Vec<schema::FieldViolation>) {
    for violation in violations {
        tracing::warn!(
            resource,
            field = %violation.field,
            rule = %violation.rule_type,
            message = %violation.message,
            "Content does not meet schema constraint"
        );
    }
}
