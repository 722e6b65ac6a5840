//! Billing scenarios through the public parking API

use chrono::{Duration, TimeZone, Utc};
use rust_decimal_macros::dec;
use tollgate_domain::{ManualClock, Money, Parking, PerHourPricing, PricingPolicy};
use tollgate_types::{Error, VehicleCategory};

fn opening() -> ManualClock {
    ManualClock::new(Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap())
}

fn bill_stay(policy: Option<Box<dyn PricingPolicy>>, stay: Duration) -> Money {
    let clock = opening();
    let mut parking = Parking::with_pricing_policy(1, 0, 0, policy)
        .unwrap()
        .with_clock(clock.clone());
    let ticket = parking.admit(VehicleCategory::Standard).unwrap();
    clock.advance(stay);
    parking.release(&ticket).unwrap().amount().unwrap()
}

#[test]
fn test_free_parking_twenty_minutes() {
    let clock = opening();
    let mut parking = Parking::new(1, 0, 0).unwrap().with_clock(clock.clone());
    let ticket = parking.admit(VehicleCategory::Standard).unwrap();
    assert!(parking.admit(VehicleCategory::Standard).is_none());

    clock.advance(Duration::minutes(20));
    let billed = parking.release(&ticket).unwrap();
    assert_eq!(billed.amount(), Some(dec!(0.00)));
    assert_eq!(billed.duration(), Some(Duration::minutes(20)));
}

#[test]
fn test_per_hour_twenty_minutes() {
    let policy = PerHourPricing::new(dec!(1)).unwrap();
    assert_eq!(bill_stay(Some(Box::new(policy)), Duration::minutes(20)), dec!(0.33));
}

#[test]
fn test_per_hour_with_fixed_amount_seventy_five_minutes() {
    let policy = PerHourPricing::with_fixed_amount(dec!(5), dec!(10)).unwrap();
    assert_eq!(bill_stay(Some(Box::new(policy)), Duration::minutes(75)), dec!(16.25));
}

#[test]
fn test_per_hour_one_day_two_minutes() {
    let policy = PerHourPricing::new(dec!(10)).unwrap();
    let stay = Duration::days(1) + Duration::minutes(2);
    assert_eq!(bill_stay(Some(Box::new(policy)), stay), dec!(240.33));
}

#[test]
fn test_missing_policy_falls_back_to_free() {
    assert_eq!(bill_stay(None, Duration::hours(5)), dec!(0.00));
}

#[test]
fn test_release_lifecycle() {
    let clock = opening();
    let policy = PerHourPricing::new(dec!(2)).unwrap();
    let mut parking = Parking::with_pricing_policy(2, 1, 1, Some(Box::new(policy)))
        .unwrap()
        .with_clock(clock.clone());

    let a = parking.admit(VehicleCategory::Electric50kW).unwrap();
    let b = parking.admit(VehicleCategory::Standard).unwrap();
    assert_ne!(a.id(), b.id());
    assert!(parking.admit(VehicleCategory::Electric50kW).is_none());

    clock.advance(Duration::minutes(90));
    let billed = parking.release(&a).unwrap();
    assert_eq!(billed.amount(), Some(dec!(3.00)));
    assert!(billed.is_released());
    assert_eq!(parking.available(VehicleCategory::Electric50kW), 1);
    assert_eq!(parking.available(VehicleCategory::Standard), 1);

    assert!(matches!(parking.release(&a), Err(Error::TicketNotFound(_))));
    assert!(parking.release(&b).is_ok());
    assert_eq!(parking.active_count(), 0);
}

#[test]
fn test_released_ticket_serializes() {
    let clock = opening();
    let mut parking = Parking::new(1, 0, 0).unwrap().with_clock(clock.clone());
    let ticket = parking.admit(VehicleCategory::Standard).unwrap();
    clock.advance(Duration::minutes(1));
    let billed = parking.release(&ticket).unwrap();

    let json = serde_json::to_value(&billed).unwrap();
    assert_eq!(json["category"], "standard");
    assert_eq!(json["amount"], "0.00");
    assert_eq!(json["id"], billed.id());
}
