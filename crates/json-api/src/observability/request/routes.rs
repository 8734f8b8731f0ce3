//! Route labels for spans and metrics.

/// Paths the server answers; anything else shares one label.
const KNOWN_ROUTES: [&str; 6] = [
    "/consolidated-data",
    "/coupons/generate",
    "/coupons/validate",
    "/healthcheck",
    "/metrics",
    "/api-doc/openapi.json",
];

const DOCS_PREFIX: &str = "/docs";

const UNMATCHED: &str = "unmatched";

pub(super) fn route_label(path: &str) -> &'static str {
    let path = path.trim_end_matches('/');

    if let Some(route) = KNOWN_ROUTES.iter().find(|route| **route == path) {
        return route;
    }

    if path == DOCS_PREFIX || path.starts_with("/docs/") {
        return DOCS_PREFIX;
    }

    UNMATCHED
}

pub(super) fn span_name(method: &str, route: &str) -> String {
    format!("{method} {route}")
}
