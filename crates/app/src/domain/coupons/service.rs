//! Coupons service.

use async_trait::async_trait;
use mockall::automock;
use rust_decimal::Decimal;

use crate::{
    database::Db,
    domain::coupons::{
        data::NewCoupon, errors::CouponsServiceError, records::CouponRecord,
        repository::PgCouponsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgCouponsService {
    db: Db,
    repository: PgCouponsRepository,
}

impl PgCouponsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCouponsRepository::new(),
        }
    }
}

#[async_trait]
impl CouponsService for PgCouponsService {
    async fn list_coupons(&self) -> Result<Vec<CouponRecord>, CouponsServiceError> {
        let mut tx = self.db.begin().await?;

        let coupons = self.repository.list_coupons(&mut tx).await?;

        tx.commit().await?;

        Ok(coupons)
    }

    async fn validate_coupon(&self, code: &str) -> Result<Decimal, CouponsServiceError> {
        let mut tx = self.db.begin().await?;

        let coupon = self.repository.find_coupon_by_code(&mut tx, code).await?;

        tx.commit().await?;

        redeemable_discount(coupon)
    }

    async fn create_coupon(&self, coupon: NewCoupon) -> Result<CouponRecord, CouponsServiceError> {
        if coupon.code.trim().is_empty() {
            return Err(CouponsServiceError::MissingRequiredData);
        }

        if coupon.discount.is_sign_negative() {
            return Err(CouponsServiceError::InvalidData);
        }

        let mut tx = self.db.begin().await?;

        let created = self.repository.create_coupon(&mut tx, coupon).await?;

        tx.commit().await?;

        Ok(created)
    }
}

/// Resolve the discount a looked-up coupon grants.
///
/// # Errors
///
/// [`CouponsServiceError::NotFound`] when there is no coupon and
/// [`CouponsServiceError::Inactive`] when it has been switched off.
pub fn redeemable_discount(coupon: Option<CouponRecord>) -> Result<Decimal, CouponsServiceError> {
    let coupon = coupon.ok_or(CouponsServiceError::NotFound)?;

    if !coupon.active {
        return Err(CouponsServiceError::Inactive);
    }

    Ok(coupon.discount)
}

#[automock]
#[async_trait]
pub trait CouponsService: Send + Sync {
    /// Retrieves every coupon in the order they were stored.
    async fn list_coupons(&self) -> Result<Vec<CouponRecord>, CouponsServiceError>;

    /// Looks up a coupon by its exact code and returns its discount if it is active.
    async fn validate_coupon(&self, code: &str) -> Result<Decimal, CouponsServiceError>;

    /// Stores a coupon created by an administrator.
    async fn create_coupon(&self, coupon: NewCoupon) -> Result<CouponRecord, CouponsServiceError>;
}
