//! Consolidated Data Handler

use std::sync::Arc;

use salvo::{http::header::COOKIE, oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use erido_app::domain::storefront::{ConsolidatedData, StorefrontSession};

use crate::{
    errors::ApiError, extensions::*, state::State, storefront::errors::into_storefront_error,
};

/// Consolidated Data Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ConsolidatedDataResponse {
    #[salvo(schema(value_type = Object))]
    pub user_status: Value,

    #[salvo(schema(value_type = Object))]
    pub cart: Value,

    #[salvo(schema(value_type = Object))]
    pub discounted_products: Value,

    #[salvo(schema(value_type = Object))]
    pub best_selling_products: Value,

    #[salvo(schema(value_type = Object))]
    pub brands: Value,

    #[salvo(schema(value_type = Object))]
    pub categories: Value,

    #[salvo(schema(value_type = Object))]
    pub subcategories: Value,
}

impl From<ConsolidatedData> for ConsolidatedDataResponse {
    fn from(data: ConsolidatedData) -> Self {
        Self {
            user_status: data.user_status,
            cart: data.cart,
            discounted_products: data.discounted_products,
            best_selling_products: data.best_selling_products,
            brands: data.brands,
            categories: data.categories,
            subcategories: data.subcategories,
        }
    }
}

/// Consolidated Data Handler
///
/// Returns the shopper's status and cart alongside catalog listings.
#[endpoint(
    tags("storefront"),
    summary = "Consolidated Storefront Data",
    responses(
        (status_code = StatusCode::OK, description = "All sources loaded"),
        (status_code = StatusCode::BAD_GATEWAY, description = "An upstream source failed"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ConsolidatedDataResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let session = StorefrontSession {
        cookie: req
            .headers()
            .get(COOKIE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned),
    };

    let data = state
        .storefront
        .consolidated_data(session)
        .await
        .map_err(into_storefront_error)?;

    Ok(Json(data.into()))
}
