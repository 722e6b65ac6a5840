//! Exact money and stay-duration arithmetic

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

/// Monetary amount, always base-10 exact
pub type Money = Decimal;

/// Digits kept on the per-minute rate before it is multiplied out
pub const RATE_SCALE: u32 = 6;

/// Digits on any fee handed back to a caller
pub const FEE_SCALE: u32 = 2;

const MINUTES_PER_HOUR: i64 = 60;

/// Whole minutes between two instants, fractional minutes discarded
pub fn elapsed_minutes(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    (end - start).num_minutes()
}

/// Hourly rate converted to a per-minute rate, rounded half-up to six places
pub fn per_minute_rate(rate_per_hour: Money) -> Money {
    (rate_per_hour / Decimal::from(MINUTES_PER_HOUR))
        .round_dp_with_strategy(RATE_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Round half-up to two places and pad so `0` renders as `0.00`
pub fn round_fee(amount: Money) -> Money {
    let mut fee = amount.round_dp_with_strategy(FEE_SCALE, RoundingStrategy::MidpointAwayFromZero);
    fee.rescale(FEE_SCALE);
    fee
}
