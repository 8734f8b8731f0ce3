//! Test helpers.

use std::sync::Arc;

use erido_app::domain::{
    coupons::{MockCouponGenerator, MockCouponsService},
    storefront::MockStorefrontService,
};
use salvo::{affix_state::inject, prelude::*};

use crate::state::State;

/// Coupons mock that fails the test on any call.
pub(crate) fn strict_coupons_mock() -> MockCouponsService {
    let mut coupons = MockCouponsService::new();

    coupons.expect_list_coupons().never();
    coupons.expect_validate_coupon().never();
    coupons.expect_create_coupon().never();

    coupons
}

/// Generator mock that fails the test on any call.
pub(crate) fn strict_generator_mock() -> MockCouponGenerator {
    let mut generator = MockCouponGenerator::new();

    generator.expect_generate_coupons().never();

    generator
}

/// Storefront mock that fails the test on any call.
pub(crate) fn strict_storefront_mock() -> MockStorefrontService {
    let mut storefront = MockStorefrontService::new();

    storefront.expect_consolidated_data().never();

    storefront
}

pub(crate) fn make_state(
    coupons: MockCouponsService,
    coupon_generator: MockCouponGenerator,
    storefront: MockStorefrontService,
) -> Arc<State> {
    Arc::new(State {
        coupons: Arc::new(coupons),
        coupon_generator: Arc::new(coupon_generator),
        storefront: Arc::new(storefront),
    })
}

pub(crate) fn coupons_service(
    coupons: MockCouponsService,
    coupon_generator: MockCouponGenerator,
    route: Router,
) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(make_state(
                coupons,
                coupon_generator,
                strict_storefront_mock(),
            )))
            .push(route),
    )
}

pub(crate) fn storefront_service(storefront: MockStorefrontService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(make_state(
                strict_coupons_mock(),
                strict_generator_mock(),
                storefront,
            )))
            .push(route),
    )
}
