//! State

use std::sync::Arc;

use erido_app::{
    context::AppContext,
    domain::{
        coupons::{CouponGenerator, CouponsService},
        storefront::StorefrontService,
    },
};

/// Services shared by every request, immutable after start-up.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) coupons: Arc<dyn CouponsService>,
    pub(crate) coupon_generator: Arc<dyn CouponGenerator>,
    pub(crate) storefront: Arc<dyn StorefrontService>,
}

impl From<AppContext> for State {
    fn from(app: AppContext) -> Self {
        Self {
            coupons: app.coupons,
            coupon_generator: app.coupon_generator,
            storefront: app.storefront,
        }
    }
}

impl State {
    #[must_use]
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(app.into())
    }
}
