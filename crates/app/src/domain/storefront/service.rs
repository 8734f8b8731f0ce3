//! Storefront service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::domain::storefront::{
    errors::{StorefrontServiceError, StorefrontSource},
    models::{ConsolidatedData, StorefrontSession},
    sources::StorefrontSources,
};

/// Merges the three upstream payloads; the first failure fails the request.
#[derive(Clone)]
pub struct AggregatingStorefrontService {
    sources: Arc<dyn StorefrontSources>,
}

impl AggregatingStorefrontService {
    #[must_use]
    pub fn new(sources: Arc<dyn StorefrontSources>) -> Self {
        Self { sources }
    }
}

#[async_trait]
impl StorefrontService for AggregatingStorefrontService {
    async fn consolidated_data(
        &self,
        session: StorefrontSession,
    ) -> Result<ConsolidatedData, StorefrontServiceError> {
        let (user_status, cart, catalog) = tokio::try_join!(
            async {
                self.sources
                    .user_status(&session)
                    .await
                    .map_err(StorefrontServiceError::upstream(StorefrontSource::UserStatus))
            },
            async {
                self.sources
                    .cart_contents(&session)
                    .await
                    .map_err(StorefrontServiceError::upstream(StorefrontSource::Cart))
            },
            async {
                self.sources
                    .catalog_listings(&session)
                    .await
                    .map_err(StorefrontServiceError::upstream(StorefrontSource::Catalog))
            },
        )?;

        Ok(ConsolidatedData::compose(user_status, cart, catalog))
    }
}

#[automock]
#[async_trait]
pub trait StorefrontService: Send + Sync {
    /// Collects user status, cart and catalog listings into one payload.
    async fn consolidated_data(
        &self,
        session: StorefrontSession,
    ) -> Result<ConsolidatedData, StorefrontServiceError>;
}
