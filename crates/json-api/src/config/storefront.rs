//! Storefront Config

use std::time::Duration;

use clap::Args;

use erido_app::domain::storefront::StorefrontSourcesConfig;

/// Upstream storefront data sources.
#[derive(Debug, Args)]
pub struct StorefrontConfig {
    /// URL serving the shopper's cart contents
    #[arg(long, env = "STOREFRONT_CART_URL")]
    pub cart_url: String,

    /// URL serving the shopper's session status
    #[arg(long, env = "STOREFRONT_USER_STATUS_URL")]
    pub user_status_url: String,

    /// URL serving catalog listings
    #[arg(long, env = "STOREFRONT_CATALOG_URL")]
    pub catalog_url: String,

    /// Per-request upstream timeout in seconds
    #[arg(long, env = "STOREFRONT_TIMEOUT_SECONDS", default_value_t = 5_u64)]
    pub timeout_seconds: u64,
}

impl StorefrontConfig {
    #[must_use]
    pub fn sources(&self) -> StorefrontSourcesConfig {
        StorefrontSourcesConfig {
            cart_url: self.cart_url.clone(),
            user_status_url: self.user_status_url.clone(),
            catalog_url: self.catalog_url.clone(),
            timeout: Duration::from_secs(self.timeout_seconds),
        }
    }
}
