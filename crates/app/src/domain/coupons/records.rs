//! Coupon Records

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::uuids::TypedUuid;

/// Coupon UUID
pub type CouponUuid = TypedUuid<CouponRecord>;

/// Coupon Record
#[derive(Debug, Clone, PartialEq)]
pub struct CouponRecord {
    pub uuid: CouponUuid,

    /// Code shoppers type in; unique across the store.
    pub code: String,

    pub discount: Decimal,
    pub active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
