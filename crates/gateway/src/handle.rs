//! Process-wide memoized handle to the direct client.
//!
//! The handle is created once at startup and shared by reference. The
//! client behind it is built lazily on first use through a single-flight
//! [`OnceCell`]: concurrent first callers wait on the same
//! initialization, later callers get the stored client. A failed
//! initialization stores nothing, so a later call tries again. The stored
//! client is never replaced.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use futures::future::BoxFuture;
use futures::FutureExt;
use tokio::sync::OnceCell;

use crate::direct::{DirectClient, PgDirectClient};
use crate::error::GatewayError;

/// Future produced by a [`DirectClientHandle`] factory.
pub type ClientFuture = BoxFuture<'static, Result<Arc<dyn DirectClient>, GatewayError>>;

type ClientFactory = Box<dyn Fn() -> ClientFuture + Send + Sync>;

pub struct DirectClientHandle {
    cell: OnceCell<Arc<dyn DirectClient>>,
    factory: ClientFactory,
    attempts: AtomicUsize,
}

impl DirectClientHandle {
    /// Create a handle that builds its client with `factory` on first use.
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> ClientFuture + Send + Sync + 'static,
    {
        Self {
            cell: OnceCell::new(),
            factory: Box::new(factory),
            attempts: AtomicUsize::new(0),
        }
    }

    /// Handle over the Postgres document store at `database_url`.
    pub fn postgres(database_url: String) -> Self {
        Self::new(move || {
            let url = database_url.clone();
            async move {
                let client = PgDirectClient::connect(&url).await?;
                Ok::<_, GatewayError>(Arc::new(client) as Arc<dyn DirectClient>)
            }
            .boxed()
        })
    }

    /// Handle around an already-built client.
    pub fn ready(client: Arc<dyn DirectClient>) -> Self {
        Self {
            cell: OnceCell::new_with(Some(client)),
            factory: Box::new(|| {
                async {
                    Err::<Arc<dyn DirectClient>, _>(GatewayError::ClientInit(
                        "handle was created initialized".to_string(),
                    ))
                }
                .boxed()
            }),
            attempts: AtomicUsize::new(0),
        }
    }

    /// The shared client, initializing it if this is the first call.
    pub async fn get(&self) -> Result<Arc<dyn DirectClient>, GatewayError> {
        self.cell
            .get_or_try_init(|| {
                self.attempts.fetch_add(1, Ordering::SeqCst);
                (self.factory)()
            })
            .await
            .cloned()
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.initialized()
    }

    /// How many times the factory has been invoked.
    pub fn init_attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl std::fmt::Debug for DirectClientHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectClientHandle")
            .field("initialized", &self.is_initialized())
            .field("init_attempts", &self.init_attempts())
            .finish()
    }
}
