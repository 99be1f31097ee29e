//! Content gateway for the portfolio site.
//!
//! Reads CMS content from either an in-process document store or the CMS
//! REST API, absorbs every source failure into fallback values, and hands
//! normalized view models to callers.

pub mod config;
pub mod direct;
pub mod error;
pub mod gateway;
pub mod handle;
pub mod page;
pub mod rest;

pub use config::GatewayConfig;
pub use error::GatewayError;
pub use gateway::{ContentGateway, Source};
pub use handle::DirectClientHandle;
