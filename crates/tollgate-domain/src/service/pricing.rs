//! Pricing policies: turn a stay interval into a fee

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use tollgate_types::{Error, Result};

use crate::model::money::{elapsed_minutes, per_minute_rate, round_fee};
use crate::model::Money;

/// Fee calculator applied by a parking when a ticket is released
pub trait PricingPolicy: fmt::Debug + Send + Sync {
    /// Price the stay between `start` and `end`
    ///
    /// Fails with `InvalidDate` when either time is missing or `start` is
    /// after `end`. Equal times are a zero-length stay.
    fn calculate_price(&self, start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Result<Money>;
}

/// Linear tariff: a fixed fee plus an hourly rate charged per elapsed whole minute
///
/// The per-minute rate is kept to six places before it is multiplied out,
/// then the total is rounded half-up to two places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PerHourPricing {
    rate_per_hour: Money,
    fixed_amount: Money,
}

impl PerHourPricing {
    /// Hourly rate with no fixed part
    pub fn new(rate_per_hour: Money) -> Result<Self> {
        Self::with_fixed_amount(rate_per_hour, Decimal::ZERO)
    }

    /// Hourly rate plus a fixed amount charged once per stay
    pub fn with_fixed_amount(rate_per_hour: Money, fixed_amount: Money) -> Result<Self> {
        if rate_per_hour < Decimal::ZERO || fixed_amount < Decimal::ZERO {
            return Err(Error::InvalidAmount("The amounts cannot be negative".to_string()));
        }
        Ok(Self {
            rate_per_hour,
            fixed_amount,
        })
    }

    /// Zero rate, zero fixed amount
    pub fn free() -> Self {
        Self {
            rate_per_hour: Decimal::ZERO,
            fixed_amount: Decimal::ZERO,
        }
    }

    pub fn rate_per_hour(&self) -> Money {
        self.rate_per_hour
    }

    pub fn fixed_amount(&self) -> Money {
        self.fixed_amount
    }
}

impl Default for PerHourPricing {
    fn default() -> Self {
        Self::free()
    }
}

impl PricingPolicy for PerHourPricing {
    fn calculate_price(&self, start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Result<Money> {
        let (start, end) = match (start, end) {
            (Some(start), Some(end)) => (start, end),
            _ => return Err(Error::InvalidDate("The dates cannot be null".to_string())),
        };
        if start > end {
            return Err(Error::InvalidDate(
                "The start date must be prior to the end date".to_string(),
            ));
        }

        let minutes = elapsed_minutes(start, end);
        let total = per_minute_rate(self.rate_per_hour)
            .checked_mul(Decimal::from(minutes))
            .and_then(|total| total.checked_add(self.fixed_amount))
            .ok_or_else(|| {
                Error::InvalidAmount(format!(
                    "Fee for {} minutes at {} exceeds representable range",
                    minutes, self
                ))
            })?;
        Ok(round_fee(total))
    }
}

impl fmt::Display for PerHourPricing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fixed_amount.is_zero() {
            write!(f, "{}/hour", self.rate_per_hour)
        } else {
            write!(f, "{} + {}/hour", self.fixed_amount, self.rate_per_hour)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use rust_decimal_macros::dec;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap()
    }

    fn price(policy: &PerHourPricing, stay: Duration) -> Money {
        policy
            .calculate_price(Some(start()), Some(start() + stay))
            .unwrap()
    }

    #[test]
    fn test_negative_rate_rejected() {
        assert!(matches!(
            PerHourPricing::new(dec!(-1)),
            Err(Error::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_negative_fixed_amount_rejected() {
        assert!(matches!(
            PerHourPricing::with_fixed_amount(dec!(2), dec!(-0.01)),
            Err(Error::InvalidAmount(_))
        ));
        assert!(matches!(
            PerHourPricing::with_fixed_amount(dec!(-2), dec!(1)),
            Err(Error::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_zero_amounts_accepted() {
        let policy = PerHourPricing::with_fixed_amount(Decimal::ZERO, Decimal::ZERO).unwrap();
        assert_eq!(policy, PerHourPricing::free());
    }

    #[test]
    fn test_missing_dates() {
        let policy = PerHourPricing::new(dec!(1)).unwrap();
        assert!(matches!(
            policy.calculate_price(None, Some(start())),
            Err(Error::InvalidDate(_))
        ));
        assert!(matches!(
            policy.calculate_price(Some(start()), None),
            Err(Error::InvalidDate(_))
        ));
        assert!(matches!(policy.calculate_price(None, None), Err(Error::InvalidDate(_))));
    }

    #[test]
    fn test_start_after_end() {
        let policy = PerHourPricing::new(dec!(1)).unwrap();
        let result = policy.calculate_price(Some(start()), Some(start() - Duration::seconds(1)));
        assert!(matches!(result, Err(Error::InvalidDate(_))));
    }

    #[test]
    fn test_same_start_and_end_charges_fixed_amount() {
        let policy = PerHourPricing::with_fixed_amount(dec!(7), dec!(2.5)).unwrap();
        assert_eq!(price(&policy, Duration::zero()), dec!(2.50));
        let policy = PerHourPricing::new(dec!(7)).unwrap();
        assert_eq!(price(&policy, Duration::zero()), dec!(0.00));
    }

    #[test]
    fn test_per_hour_twenty_minutes() {
        let policy = PerHourPricing::new(dec!(1)).unwrap();
        assert_eq!(price(&policy, Duration::minutes(20)), dec!(0.33));
    }

    #[test]
    fn test_per_hour_one_day_two_minutes() {
        let policy = PerHourPricing::new(dec!(10)).unwrap();
        let fee = price(&policy, Duration::days(1) + Duration::minutes(2));
        assert_eq!(fee, dec!(240.33));
        assert_eq!(fee.to_string(), "240.33");
    }

    #[test]
    fn test_fixed_amount_seventy_five_minutes() {
        let policy = PerHourPricing::with_fixed_amount(dec!(5), dec!(10)).unwrap();
        assert_eq!(price(&policy, Duration::minutes(75)), dec!(16.25));
    }

    #[test]
    fn test_partial_minutes_not_charged() {
        let policy = PerHourPricing::new(dec!(60)).unwrap();
        assert_eq!(price(&policy, Duration::seconds(59)), dec!(0.00));
        assert_eq!(price(&policy, Duration::seconds(119)), dec!(1.00));
    }

    #[test]
    fn test_free_policy_is_always_zero() {
        let policy = PerHourPricing::free();
        assert_eq!(price(&policy, Duration::days(3)).to_string(), "0.00");
    }

    #[test]
    fn test_monotonic_in_duration() {
        let policy = PerHourPricing::with_fixed_amount(dec!(3.75), dec!(1)).unwrap();
        let mut previous = price(&policy, Duration::zero());
        for minutes in (0..=3000).step_by(7) {
            let fee = price(&policy, Duration::minutes(minutes));
            assert!(fee >= previous, "fee dropped at {} minutes", minutes);
            previous = fee;
        }
    }

    #[test]
    fn test_fee_overflow_is_an_error() {
        let policy = PerHourPricing::new(Decimal::MAX).unwrap();
        let result = policy.calculate_price(Some(start()), Some(start() + Duration::minutes(120)));
        assert!(matches!(result, Err(Error::InvalidAmount(_))));

        let policy = PerHourPricing::with_fixed_amount(dec!(60), Decimal::MAX).unwrap();
        let result = policy.calculate_price(Some(start()), Some(start() + Duration::minutes(120)));
        assert!(matches!(result, Err(Error::InvalidAmount(_))));
    }

    #[test]
    fn test_display() {
        assert_eq!(PerHourPricing::new(dec!(2)).unwrap().to_string(), "2/hour");
        assert_eq!(
            PerHourPricing::with_fixed_amount(dec!(5), dec!(10)).unwrap().to_string(),
            "10 + 5/hour"
        );
    }
}
