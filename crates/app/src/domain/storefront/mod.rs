//! Storefront
//!
//! Aggregates the cart, session and catalog payloads served to storefront
//! pages. The payloads themselves belong to upstream services and are passed
//! through untouched.

pub mod errors;
pub mod models;
pub mod service;
pub mod sources;

pub use errors::{StorefrontServiceError, StorefrontSource, StorefrontSourceError};
pub use models::{CatalogListings, ConsolidatedData, StorefrontSession};
pub use service::*;
pub use sources::{
    HttpStorefrontSources, MockStorefrontSources, StorefrontSources, StorefrontSourcesConfig,
};
