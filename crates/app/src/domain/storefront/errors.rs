//! Storefront errors.

use std::fmt::{Display, Formatter, Result as FmtResult};

use reqwest::StatusCode;
use thiserror::Error;

/// The upstream a payload comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorefrontSource {
    Cart,
    UserStatus,
    Catalog,
}

impl Display for StorefrontSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::Cart => "cart",
            Self::UserStatus => "user status",
            Self::Catalog => "catalog",
        })
    }
}

/// Errors raised while fetching a single upstream payload.
#[derive(Debug, Error)]
pub enum StorefrontSourceError {
    /// Transport failure or undecodable body.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream responded with status {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },
}

#[derive(Debug, Error)]
pub enum StorefrontServiceError {
    #[error("failed to load {kind}")]
    Upstream {
        kind: StorefrontSource,

        #[source]
        error: StorefrontSourceError,
    },
}

impl StorefrontServiceError {
    pub(crate) fn upstream(kind: StorefrontSource) -> impl FnOnce(StorefrontSourceError) -> Self {
        move |error| Self::Upstream { kind, error }
    }

    /// Which upstream failed.
    #[must_use]
    pub fn kind(&self) -> StorefrontSource {
        match self {
            Self::Upstream { kind, .. } => *kind,
        }
    }
}
