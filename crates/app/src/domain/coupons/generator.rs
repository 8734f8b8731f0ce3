//! Coupon generation.
//!
//! Codes are drawn uniformly from upper-case letters and digits; each coupon
//! receives one of the configured discount amounts. Codes that collide with an
//! existing coupon are skipped rather than retried, so a batch may persist
//! fewer coupons than requested.

use async_trait::async_trait;
use mockall::automock;
use rand::{Rng, seq::SliceRandom};
use rust_decimal::{Decimal, dec};
use smallvec::{SmallVec, smallvec};
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    database::Db,
    domain::coupons::{
        data::CouponDraft, errors::CouponsServiceError, records::CouponRecord,
        repository::PgCouponsRepository,
    },
};

/// Coupons generated per call unless configured otherwise.
pub const DEFAULT_BATCH_SIZE: usize = 10;

/// Characters per generated code unless configured otherwise.
pub const DEFAULT_CODE_LENGTH: usize = 8;

const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CouponPolicyError {
    #[error("batch size must be at least 1")]
    ZeroBatchSize,

    #[error("code length must be at least 1")]
    ZeroCodeLength,

    #[error("at least one discount amount is required")]
    NoDiscounts,

    #[error("discount amounts cannot be negative (got {0})")]
    NegativeDiscount(Decimal),
}

/// How many coupons to generate and what they look like.
#[derive(Debug, Clone, PartialEq)]
pub struct CouponGenerationPolicy {
    batch_size: usize,
    code_length: usize,
    discounts: SmallVec<[Decimal; 4]>,
}

impl CouponGenerationPolicy {
    /// Build a policy, rejecting values that could never produce a coupon.
    ///
    /// # Errors
    ///
    /// Returns an error for a zero batch size or code length, an empty
    /// discount list, or a negative discount.
    pub fn new(
        batch_size: usize,
        code_length: usize,
        discounts: impl IntoIterator<Item = Decimal>,
    ) -> Result<Self, CouponPolicyError> {
        if batch_size == 0 {
            return Err(CouponPolicyError::ZeroBatchSize);
        }

        if code_length == 0 {
            return Err(CouponPolicyError::ZeroCodeLength);
        }

        let discounts: SmallVec<[Decimal; 4]> = discounts.into_iter().collect();

        if discounts.is_empty() {
            return Err(CouponPolicyError::NoDiscounts);
        }

        if let Some(negative) = discounts.iter().find(|discount| discount.is_sign_negative()) {
            return Err(CouponPolicyError::NegativeDiscount(*negative));
        }

        Ok(Self {
            batch_size,
            code_length,
            discounts,
        })
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn code_length(&self) -> usize {
        self.code_length
    }

    pub fn discounts(&self) -> &[Decimal] {
        &self.discounts
    }

    /// Draft a batch of coupons without touching storage.
    pub fn draft<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<CouponDraft> {
        let mut drafts = Vec::with_capacity(self.batch_size);

        for _ in 0..self.batch_size {
            let Some(discount) = self.discounts.choose(&mut *rng).copied() else {
                break;
            };

            drafts.push(CouponDraft {
                code: self.draft_code(&mut *rng),
                discount,
            });
        }

        drafts
    }

    fn draft_code<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        (0..self.code_length)
            .filter_map(|_| CODE_ALPHABET.choose(&mut *rng))
            .map(|&byte| char::from(byte))
            .collect()
    }
}

impl Default for CouponGenerationPolicy {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            code_length: DEFAULT_CODE_LENGTH,
            discounts: smallvec![dec!(5.00), dec!(10.00), dec!(15.00), dec!(20.00)],
        }
    }
}

#[derive(Debug, Clone)]
pub struct PgCouponGenerator {
    db: Db,
    repository: PgCouponsRepository,
    policy: CouponGenerationPolicy,
}

impl PgCouponGenerator {
    #[must_use]
    pub fn new(db: Db, policy: CouponGenerationPolicy) -> Self {
        Self {
            db,
            repository: PgCouponsRepository::new(),
            policy,
        }
    }
}

#[async_trait]
impl CouponGenerator for PgCouponGenerator {
    async fn generate_coupons(&self) -> Result<Vec<CouponRecord>, CouponsServiceError> {
        let drafts = self.policy.draft(&mut rand::thread_rng());

        let mut tx = self.db.begin().await?;
        let mut created = Vec::with_capacity(drafts.len());

        for draft in drafts {
            match self
                .repository
                .insert_generated_coupon(&mut tx, &draft.code, draft.discount)
                .await?
            {
                Some(coupon) => created.push(coupon),
                None => debug!(code = %draft.code, "generated code already taken, skipping"),
            }
        }

        tx.commit().await?;

        info!(
            requested = self.policy.batch_size(),
            created = created.len(),
            "coupons generated"
        );

        Ok(created)
    }
}

#[automock]
#[async_trait]
pub trait CouponGenerator: Send + Sync {
    /// Generates a batch of coupons and persists them, returning the ones stored.
    async fn generate_coupons(&self) -> Result<Vec<CouponRecord>, CouponsServiceError>;
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};
    use testresult::TestResult;

    use crate::{
        domain::coupons::CouponsService,
        test::{TestContext, helpers::create_coupon},
    };

    use super::*;

    #[test]
    fn default_policy_drafts_ten_eight_character_codes() {
        let policy = CouponGenerationPolicy::default();
        let drafts = policy.draft(&mut StdRng::seed_from_u64(7));

        assert_eq!(drafts.len(), DEFAULT_BATCH_SIZE);

        for draft in &drafts {
            assert_eq!(draft.code.len(), DEFAULT_CODE_LENGTH);
            assert!(
                draft.code.bytes().all(|byte| CODE_ALPHABET.contains(&byte)),
                "unexpected character in {}",
                draft.code
            );
            assert!(
                policy.discounts().contains(&draft.discount),
                "unexpected discount {}",
                draft.discount
            );
        }
    }

    #[test]
    fn draft_is_deterministic_for_a_seed() {
        let policy = CouponGenerationPolicy::default();

        let first = policy.draft(&mut StdRng::seed_from_u64(42));
        let second = policy.draft(&mut StdRng::seed_from_u64(42));

        assert_eq!(first, second);
    }

    #[test]
    fn single_discount_policy_always_uses_it() -> TestResult {
        let policy = CouponGenerationPolicy::new(5, 4, [dec!(12.50)])?;

        let drafts = policy.draft(&mut StdRng::seed_from_u64(1));

        assert!(drafts.iter().all(|draft| draft.discount == dec!(12.50)));
        assert!(drafts.iter().all(|draft| draft.code.len() == 4));

        Ok(())
    }

    #[test]
    fn policy_rejects_zero_batch_size() {
        assert_eq!(
            CouponGenerationPolicy::new(0, 8, [dec!(5)]),
            Err(CouponPolicyError::ZeroBatchSize)
        );
    }

    #[test]
    fn policy_rejects_zero_code_length() {
        assert_eq!(
            CouponGenerationPolicy::new(1, 0, [dec!(5)]),
            Err(CouponPolicyError::ZeroCodeLength)
        );
    }

    #[test]
    fn policy_rejects_empty_discounts() {
        assert_eq!(
            CouponGenerationPolicy::new(1, 8, Vec::new()),
            Err(CouponPolicyError::NoDiscounts)
        );
    }

    #[test]
    fn policy_rejects_negative_discount() {
        assert_eq!(
            CouponGenerationPolicy::new(1, 8, [dec!(5), dec!(-1)]),
            Err(CouponPolicyError::NegativeDiscount(dec!(-1)))
        );
    }

    #[tokio::test]
    async fn generate_coupons_persists_active_batch() -> TestResult {
        let ctx = TestContext::new().await;
        let generator = ctx.generator(CouponGenerationPolicy::default());

        let generated = generator.generate_coupons().await?;
        let stored = ctx.coupons.list_coupons().await?;

        assert_eq!(generated.len(), DEFAULT_BATCH_SIZE);
        assert_eq!(stored, generated);
        assert!(stored.iter().all(|coupon| coupon.active));

        Ok(())
    }

    #[tokio::test]
    async fn generate_coupons_appends_after_existing_coupons() -> TestResult {
        let ctx = TestContext::new().await;

        create_coupon(&ctx, "EXISTING-1", dec!(10.00), true).await?;

        let generator = ctx.generator(CouponGenerationPolicy::new(3, 8, [dec!(5.00)])?);

        generator.generate_coupons().await?;

        let stored = ctx.coupons.list_coupons().await?;

        assert_eq!(stored.len(), 4);
        assert_eq!(stored.first().map(|coupon| coupon.code.as_str()), Some("EXISTING-1"));

        Ok(())
    }

    #[tokio::test]
    async fn generate_coupons_skips_taken_codes() -> TestResult {
        let ctx = TestContext::new().await;

        // Single-character codes guarantee collisions within a batch of 100.
        let generator = ctx.generator(CouponGenerationPolicy::new(100, 1, [dec!(5.00)])?);

        let generated = generator.generate_coupons().await?;
        let stored = ctx.coupons.list_coupons().await?;

        assert!(generated.len() <= CODE_ALPHABET.len());
        assert_eq!(stored.len(), generated.len());

        let mut codes: Vec<&str> = stored.iter().map(|coupon| coupon.code.as_str()).collect();
        codes.sort_unstable();
        codes.dedup();

        assert_eq!(codes.len(), stored.len(), "codes must stay unique");

        Ok(())
    }
}
