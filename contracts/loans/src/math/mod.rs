//! Fixed-point arithmetic used by the fee and interest engine.

pub mod decimal;

pub use decimal::Decimal;

/// Scale of basis-point style parameters (`10_000` = 1.0 on the `/ PRECISION` axis).
pub const PRECISION: u32 = 10_000;

/// Financial year of 360 days, in seconds.
pub const SECONDS_IN_YEAR: u64 = 360 * 86_400;

/// Scale of `Decimal` (18 decimals).
pub const WAD: u128 = 1_000_000_000_000_000_000;
