//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{
        coupons::{
            CouponGenerationPolicy, CouponGenerator, CouponsService, PgCouponGenerator,
            PgCouponsService,
        },
        storefront::{
            AggregatingStorefrontService, HttpStorefrontSources, StorefrontService,
            StorefrontSourcesConfig,
        },
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to build storefront HTTP client")]
    Storefront(#[source] reqwest::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub coupons: Arc<dyn CouponsService>,
    pub coupon_generator: Arc<dyn CouponGenerator>,
    pub storefront: Arc<dyn StorefrontService>,
}

impl AppContext {
    /// Build application context from a database URL and upstream settings.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails or the
    /// storefront HTTP client cannot be built.
    pub async fn from_database_url(
        url: &str,
        policy: CouponGenerationPolicy,
        sources: StorefrontSourcesConfig,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool);

        let sources = HttpStorefrontSources::new(sources).map_err(AppInitError::Storefront)?;

        Ok(Self {
            coupons: Arc::new(PgCouponsService::new(db.clone())),
            coupon_generator: Arc::new(PgCouponGenerator::new(db, policy)),
            storefront: Arc::new(AggregatingStorefrontService::new(Arc::new(sources))),
        })
    }
}
