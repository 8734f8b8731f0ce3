//! Storefront Errors

use tracing::error;

use erido_app::domain::storefront::StorefrontServiceError;

use crate::errors::ApiError;

pub(crate) fn into_storefront_error(error: StorefrontServiceError) -> ApiError {
    let StorefrontServiceError::Upstream { kind, error } = error;

    error!(source = %kind, "failed to load storefront data: {error}");

    ApiError::bad_gateway(format!("Failed to load {kind}."))
}

#[cfg(test)]
mod tests {
    use erido_app::domain::storefront::{StorefrontSource, StorefrontSourceError};
    use salvo::http::StatusCode;

    use super::*;

    fn upstream(kind: StorefrontSource) -> StorefrontServiceError {
        StorefrontServiceError::Upstream {
            kind,
            error: StorefrontSourceError::UnexpectedStatus {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: String::new(),
            },
        }
    }

    #[test]
    fn upstream_failure_names_the_source() {
        assert_eq!(
            into_storefront_error(upstream(StorefrontSource::UserStatus)),
            ApiError::bad_gateway("Failed to load user status.")
        );
        assert_eq!(
            into_storefront_error(upstream(StorefrontSource::Catalog)),
            ApiError::bad_gateway("Failed to load catalog.")
        );
    }
}
