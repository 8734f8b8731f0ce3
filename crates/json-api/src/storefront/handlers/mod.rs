//! Storefront Handlers

pub(crate) mod consolidated;
