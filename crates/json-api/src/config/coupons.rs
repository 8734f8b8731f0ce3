//! Coupons Config

use clap::Args;
use rust_decimal::Decimal;

use erido_app::domain::coupons::{
    CouponGenerationPolicy,
    generator::{CouponPolicyError, DEFAULT_BATCH_SIZE, DEFAULT_CODE_LENGTH},
};

/// Coupon generation settings.
#[derive(Debug, Args)]
pub struct CouponsConfig {
    /// Coupons generated per request
    #[arg(long, env = "COUPON_BATCH_SIZE", default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Characters per generated code
    #[arg(long, env = "COUPON_CODE_LENGTH", default_value_t = DEFAULT_CODE_LENGTH)]
    pub code_length: usize,

    /// Discount amounts generated coupons draw from, comma separated
    #[arg(
        long,
        env = "COUPON_DISCOUNTS",
        value_delimiter = ',',
        default_value = "5.00,10.00,15.00,20.00"
    )]
    pub discounts: Vec<Decimal>,
}

impl CouponsConfig {
    /// Build the generation policy these settings describe.
    ///
    /// # Errors
    ///
    /// Returns an error when the settings could never produce a coupon.
    pub fn policy(&self) -> Result<CouponGenerationPolicy, CouponPolicyError> {
        CouponGenerationPolicy::new(
            self.batch_size,
            self.code_length,
            self.discounts.iter().copied(),
        )
    }
}
