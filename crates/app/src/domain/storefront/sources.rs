//! Upstream storefront data sources.

use std::time::Duration;

use async_trait::async_trait;
use mockall::automock;
use reqwest::{Client, header::COOKIE};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::domain::storefront::{
    errors::StorefrontSourceError,
    models::{CatalogListings, StorefrontSession},
};

/// Upstream error bodies are cut to this many bytes before being kept.
const MAX_ERROR_BODY_BYTES: usize = 512;

/// Where each upstream payload is fetched from.
#[derive(Debug, Clone)]
pub struct StorefrontSourcesConfig {
    /// URL returning the shopper's cart contents.
    pub cart_url: String,

    /// URL returning the shopper's session status.
    pub user_status_url: String,

    /// URL returning catalog listings for the storefront.
    pub catalog_url: String,

    /// Per-request timeout.
    pub timeout: Duration,
}

/// Fetches storefront payloads from HTTP upstreams, forwarding the shopper's cookies.
#[derive(Debug, Clone)]
pub struct HttpStorefrontSources {
    config: StorefrontSourcesConfig,
    http: Client,
}

impl HttpStorefrontSources {
    /// Create sources from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: StorefrontSourcesConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { config, http })
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        url: &str,
        session: &StorefrontSession,
    ) -> Result<T, StorefrontSourceError> {
        let mut request = self.http.get(url);

        if let Some(cookie) = &session.cookie {
            request = request.header(COOKIE, cookie);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = truncate_body(response.text().await.unwrap_or_default());

            return Err(StorefrontSourceError::UnexpectedStatus { status, body });
        }

        debug!(%url, %status, "fetched storefront payload");

        Ok(response.json().await?)
    }
}

fn truncate_body(mut body: String) -> String {
    if body.len() <= MAX_ERROR_BODY_BYTES {
        return body;
    }

    let mut end = MAX_ERROR_BODY_BYTES;

    while !body.is_char_boundary(end) {
        end -= 1;
    }

    body.truncate(end);

    body
}

#[async_trait]
impl StorefrontSources for HttpStorefrontSources {
    async fn cart_contents(
        &self,
        session: &StorefrontSession,
    ) -> Result<Value, StorefrontSourceError> {
        self.fetch(&self.config.cart_url, session).await
    }

    async fn user_status(&self, session: &StorefrontSession) -> Result<Value, StorefrontSourceError> {
        self.fetch(&self.config.user_status_url, session).await
    }

    async fn catalog_listings(
        &self,
        session: &StorefrontSession,
    ) -> Result<CatalogListings, StorefrontSourceError> {
        self.fetch(&self.config.catalog_url, session).await
    }
}

/// One method per upstream the storefront aggregates.
#[automock]
#[async_trait]
pub trait StorefrontSources: Send + Sync {
    /// Contents of the shopper's cart.
    async fn cart_contents(&self, session: &StorefrontSession)
    -> Result<Value, StorefrontSourceError>;

    /// Whether the shopper is logged in, and who they are.
    async fn user_status(&self, session: &StorefrontSession) -> Result<Value, StorefrontSourceError>;

    /// Session-independent catalog listings.
    async fn catalog_listings(
        &self,
        session: &StorefrontSession,
    ) -> Result<CatalogListings, StorefrontSourceError>;
}

#[cfg(test)]
mod tests {
    use salvo::{
        conn::tcp::TcpAcceptor,
        http::{StatusCode, header::COOKIE as COOKIE_HEADER},
        prelude::*,
    };
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[handler]
    async fn echo_cookie(req: &mut Request, res: &mut Response) {
        let cookie = req
            .headers()
            .get(COOKIE_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        res.render(Json(json!({ "cookie": cookie })));
    }

    #[handler]
    async fn unavailable(res: &mut Response) {
        res.status_code(StatusCode::SERVICE_UNAVAILABLE);
        res.render("é".repeat(2_000));
    }

    #[handler]
    async fn not_json(res: &mut Response) {
        res.render("<html>maintenance</html>");
    }

    #[handler]
    async fn full_catalog(res: &mut Response) {
        res.render(Json(json!({
            "discounted_products": [{ "sku": "D-1" }],
            "best_selling_products": [{ "sku": "B-1" }],
            "brands": ["acme"],
            "categories": ["tools"],
            "subcategories": ["saws"],
        })));
    }

    #[handler]
    async fn catalog_without_subcategories(res: &mut Response) {
        res.render(Json(json!({
            "discounted_products": [],
            "best_selling_products": [],
            "brands": [],
            "categories": [],
        })));
    }

    /// Serves canned upstream responses on an ephemeral local port.
    async fn spawn_upstream() -> TestResult<String> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let base_url = format!("http://{}", listener.local_addr()?);
        let acceptor = TcpAcceptor::try_from(listener)?;

        let router = Router::new()
            .push(Router::with_path("cart").get(echo_cookie))
            .push(Router::with_path("unavailable").get(unavailable))
            .push(Router::with_path("not-json").get(not_json))
            .push(Router::with_path("catalog").get(full_catalog))
            .push(Router::with_path("catalog-partial").get(catalog_without_subcategories));

        tokio::spawn(Server::new(acceptor).serve(router));

        Ok(base_url)
    }

    fn sources(base_url: &str, catalog_path: &str) -> TestResult<HttpStorefrontSources> {
        Ok(HttpStorefrontSources::new(StorefrontSourcesConfig {
            cart_url: format!("{base_url}/cart"),
            user_status_url: format!("{base_url}/unavailable"),
            catalog_url: format!("{base_url}/{catalog_path}"),
            timeout: Duration::from_secs(5),
        })?)
    }

    #[tokio::test]
    async fn forwards_session_cookie_upstream() -> TestResult {
        let base_url = spawn_upstream().await?;
        let sources = sources(&base_url, "catalog")?;

        let session = StorefrontSession {
            cookie: Some("sessionid=abc123".to_string()),
        };

        let cart = sources.cart_contents(&session).await?;

        assert_eq!(cart, json!({ "cookie": "sessionid=abc123" }));

        Ok(())
    }

    #[tokio::test]
    async fn omits_cookie_for_anonymous_session() -> TestResult {
        let base_url = spawn_upstream().await?;
        let sources = sources(&base_url, "catalog")?;

        let cart = sources
            .cart_contents(&StorefrontSession::default())
            .await?;

        assert_eq!(cart, json!({ "cookie": null }));

        Ok(())
    }

    #[tokio::test]
    async fn non_success_status_is_unexpected_status_with_capped_body() -> TestResult {
        let base_url = spawn_upstream().await?;
        let sources = sources(&base_url, "catalog")?;

        let result = sources.user_status(&StorefrontSession::default()).await;

        let Err(StorefrontSourceError::UnexpectedStatus { status, body }) = result else {
            panic!("expected UnexpectedStatus, got {result:?}");
        };

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(
            body.len() <= MAX_ERROR_BODY_BYTES,
            "body should be capped, got {} bytes",
            body.len()
        );
        assert!(body.starts_with('é'), "body should keep its leading text");

        Ok(())
    }

    #[tokio::test]
    async fn undecodable_body_is_http_error() -> TestResult {
        let base_url = spawn_upstream().await?;
        let sources = sources(&base_url, "not-json")?;

        let result = sources.catalog_listings(&StorefrontSession::default()).await;

        assert!(
            matches!(result, Err(StorefrontSourceError::Http(_))),
            "expected Http error, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn decodes_complete_catalog() -> TestResult {
        let base_url = spawn_upstream().await?;
        let sources = sources(&base_url, "catalog")?;

        let listings = sources
            .catalog_listings(&StorefrontSession::default())
            .await?;

        assert_eq!(listings.brands, json!(["acme"]));
        assert_eq!(listings.subcategories, json!(["saws"]));

        Ok(())
    }

    #[tokio::test]
    async fn catalog_missing_a_section_is_rejected() -> TestResult {
        let base_url = spawn_upstream().await?;
        let sources = sources(&base_url, "catalog-partial")?;

        let result = sources.catalog_listings(&StorefrontSession::default()).await;

        assert!(
            matches!(result, Err(StorefrontSourceError::Http(_))),
            "expected decode failure, got {result:?}"
        );

        Ok(())
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let body = truncate_body(format!("a{}", "é".repeat(MAX_ERROR_BODY_BYTES)));

        assert_eq!(body.len(), MAX_ERROR_BODY_BYTES - 1);
        assert!(body.ends_with('é'));

        let short = truncate_body("down".to_string());

        assert_eq!(short, "down");
    }
}
