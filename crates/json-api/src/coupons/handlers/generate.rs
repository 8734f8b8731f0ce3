//! Generate Coupons Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use erido_app::domain::coupons::records::CouponRecord;

use crate::{errors::ApiError, extensions::*, state::State};

/// Coupon Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CouponResponse {
    pub code: String,

    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub discount: Decimal,
}

impl From<CouponRecord> for CouponResponse {
    fn from(coupon: CouponRecord) -> Self {
        Self {
            code: coupon.code,
            discount: coupon.discount,
        }
    }
}

/// Generate Coupons Handler
///
/// Generates a new batch of coupons, then returns every stored coupon in the
/// order it was created.
#[endpoint(tags("coupons"), summary = "Generate Coupons")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<CouponResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .coupon_generator
        .generate_coupons()
        .await
        .or_500("failed to generate coupons")?;

    let coupons = state
        .coupons
        .list_coupons()
        .await
        .or_500("failed to list coupons")?;

    Ok(Json(coupons.into_iter().map(Into::into).collect()))
}
