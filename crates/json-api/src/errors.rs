//! API Errors

use salvo::{
    http::StatusCode,
    oapi::{
        self, Components, Content, EndpointOutRegister, Operation, Responses, ToResponses,
        ToSchema,
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

/// Error body returned by every domain endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorResponse {
    /// Human-readable reason
    pub error: String,
}

/// A status code paired with the message rendered as `{"error": ...}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub(crate) fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub(crate) fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub(crate) fn method_not_allowed() -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, "Invalid request method.")
    }

    pub(crate) fn bad_gateway(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, message)
    }

    pub(crate) fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error.")
    }
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        res.status_code(self.status);
        res.render(Json(ErrorResponse {
            error: self.message,
        }));
    }
}

impl ToResponses for ApiError {
    fn to_responses(components: &mut Components) -> Responses {
        let schema = ErrorResponse::to_schema(components);

        [
            (StatusCode::BAD_REQUEST, "Bad request"),
            (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed"),
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
            (StatusCode::BAD_GATEWAY, "Upstream failure"),
        ]
        .into_iter()
        .fold(Responses::new(), |responses, (status, description)| {
            responses.response(
                status.as_str(),
                oapi::Response::new(description)
                    .add_content("application/json", Content::new(schema.clone())),
            )
        })
    }
}

impl EndpointOutRegister for ApiError {
    fn register(components: &mut Components, operation: &mut Operation) {
        operation
            .responses
            .append(&mut Self::to_responses(components));
    }
}

#[cfg(test)]
mod tests {
    use salvo::{
        oapi::OpenApi,
        test::{ResponseExt, TestClient},
    };
    use serde_json::Value;
    use testresult::TestResult;

    use super::*;

    #[handler]
    async fn failing() -> Result<&'static str, ApiError> {
        Err(ApiError::bad_request("No coupon code provided."))
    }

    #[tokio::test]
    async fn api_error_renders_status_and_error_body() -> TestResult {
        let router = Router::with_path("fail").get(failing);

        let mut res = TestClient::get("http://example.com/fail")
            .send(&Service::new(router))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.error, "No coupon code provided.");

        Ok(())
    }

    #[endpoint]
    async fn failing_endpoint() -> Result<Json<ErrorResponse>, ApiError> {
        Err(ApiError::bad_gateway("Failed to load cart."))
    }

    #[tokio::test]
    async fn endpoint_error_renders_json_body() -> TestResult {
        let router = Router::with_path("upstream").get(failing_endpoint);

        let mut res = TestClient::get("http://example.com/upstream")
            .send(&Service::new(router))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_GATEWAY));
        assert_eq!(body.error, "Failed to load cart.");

        Ok(())
    }

    #[test]
    fn endpoint_documents_every_error_status() -> TestResult {
        let router = Router::with_path("upstream").get(failing_endpoint);
        let doc = serde_json::to_value(OpenApi::new("test", "0.0.0").merge_router(&router))?;

        let responses = doc
            .pointer("/paths/~1upstream/get/responses")
            .and_then(Value::as_object)
            .ok_or("missing responses for /upstream")?;

        for status in ["400", "405", "500", "502"] {
            assert!(
                responses.contains_key(status),
                "expected {status} in documented responses"
            );
        }

        Ok(())
    }
}
