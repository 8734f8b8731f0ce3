//! App Router

use salvo::Router;

use crate::{coupons, storefront};

/// Storefront and coupon routes; state and middleware are attached by the caller.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("consolidated-data").get(storefront::consolidated::handler))
        .push(
            Router::with_path("coupons")
                .push(Router::with_path("generate").get(coupons::generate::handler))
                .push(
                    Router::with_path("validate")
                        .post(coupons::validate::handler)
                        .goal(coupons::validate::method_not_allowed),
                ),
        )
}

#[cfg(test)]
mod tests {
    use salvo::{affix_state::inject, prelude::*, test::TestClient};

    use crate::test_helpers::{
        make_state, strict_coupons_mock, strict_generator_mock, strict_storefront_mock,
    };

    use super::*;

    fn service() -> Service {
        Service::new(
            Router::new()
                .hoop(inject(make_state(
                    strict_coupons_mock(),
                    strict_generator_mock(),
                    strict_storefront_mock(),
                )))
                .push(app_router()),
        )
    }

    #[tokio::test]
    async fn validate_route_answers_get_with_405() {
        let res = TestClient::get("http://example.com/coupons/validate")
            .send(&service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::METHOD_NOT_ALLOWED));
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let res = TestClient::get("http://example.com/coupons/redeem")
            .send(&service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }
}
