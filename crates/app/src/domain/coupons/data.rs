//! Coupons Data

use rust_decimal::Decimal;

use crate::domain::coupons::records::CouponUuid;

/// New Coupon Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewCoupon {
    pub uuid: CouponUuid,
    pub code: String,
    pub discount: Decimal,
    pub active: bool,
}

/// A coupon drafted by the generator, not yet persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct CouponDraft {
    pub code: String,
    pub discount: Decimal,
}
