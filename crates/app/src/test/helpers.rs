//! Test Helpers

use rust_decimal::Decimal;

use crate::{
    domain::coupons::{
        CouponsService, CouponsServiceError, data::NewCoupon, records::CouponRecord,
        records::CouponUuid,
    },
    test::TestContext,
};

pub(crate) async fn create_coupon(
    ctx: &TestContext,
    code: &str,
    discount: Decimal,
    active: bool,
) -> Result<CouponRecord, CouponsServiceError> {
    ctx.coupons
        .create_coupon(NewCoupon {
            uuid: CouponUuid::new(),
            code: code.to_string(),
            discount,
            active,
        })
        .await
}
