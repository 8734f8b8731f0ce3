//! Validate Coupon Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    coupons::errors::{MISSING_CODE, into_coupon_error},
    errors::ApiError,
    extensions::*,
    state::State,
};

const COUPON_FIELD: &str = "coupon";

/// Discount Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DiscountResponse {
    /// Amount taken off the order
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub discount: Decimal,
}

/// Validate Coupon Handler
///
/// Looks up the `coupon` form field and returns its discount when the coupon
/// exists and is active.
#[endpoint(
    tags("coupons"),
    summary = "Validate Coupon",
    responses(
        (status_code = StatusCode::OK, description = "Coupon is redeemable"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing, unknown or inactive coupon"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<DiscountResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let code = req
        .form::<String>(COUPON_FIELD)
        .await
        .filter(|code| !code.is_empty())
        .ok_or_else(|| ApiError::bad_request(MISSING_CODE))?;

    let discount = state
        .coupons
        .validate_coupon(&code)
        .await
        .map_err(into_coupon_error)?;

    Ok(Json(DiscountResponse { discount }))
}

/// Answers every method other than POST on the validate route.
#[handler]
pub(crate) async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed()
}
