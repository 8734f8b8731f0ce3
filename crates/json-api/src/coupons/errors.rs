//! Coupon Errors

use tracing::error;

use erido_app::domain::coupons::CouponsServiceError;

use crate::errors::ApiError;

pub(crate) const MISSING_CODE: &str = "No coupon code provided.";
pub(crate) const INVALID_CODE: &str = "Invalid coupon code.";
pub(crate) const INACTIVE_CODE: &str = "Coupon is not active.";

pub(crate) fn into_coupon_error(error: CouponsServiceError) -> ApiError {
    match error {
        CouponsServiceError::NotFound => ApiError::bad_request(INVALID_CODE),
        CouponsServiceError::Inactive => ApiError::bad_request(INACTIVE_CODE),
        CouponsServiceError::MissingRequiredData => ApiError::bad_request(MISSING_CODE),
        CouponsServiceError::AlreadyExists | CouponsServiceError::InvalidData => {
            error!("unexpected coupon error: {error}");

            ApiError::internal()
        }
        CouponsServiceError::Sql(source) => {
            error!("coupon lookup failed: {source}");

            ApiError::internal()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_invalid_code() {
        assert_eq!(
            into_coupon_error(CouponsServiceError::NotFound),
            ApiError::bad_request(INVALID_CODE)
        );
    }

    #[test]
    fn inactive_maps_to_not_active() {
        assert_eq!(
            into_coupon_error(CouponsServiceError::Inactive),
            ApiError::bad_request(INACTIVE_CODE)
        );
    }
}
