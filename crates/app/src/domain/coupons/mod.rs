//! Coupons

pub mod data;
pub mod errors;
pub mod generator;
pub mod records;
mod repository;
pub mod service;

pub use errors::CouponsServiceError;
pub use generator::{CouponGenerationPolicy, CouponGenerator, MockCouponGenerator, PgCouponGenerator};
pub use service::*;
