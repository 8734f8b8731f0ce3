//! Erido Domain Concerns

pub mod coupons;
pub mod storefront;
