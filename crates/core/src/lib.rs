//! Domain core of the portfolio content service.
//!
//! Resource descriptors, raw input shapes, the view model normalizer,
//! schema rules, media rules and static fallbacks. No I/O lives here.

pub mod defaults;
pub mod error;
pub mod media;
pub mod normalize;
pub mod query;
pub mod schema;
pub mod shapes;
pub mod types;
pub mod view_model;
