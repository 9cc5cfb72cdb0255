use chrono::DateTime;
use civtime::{epochs, Duration, Instant, JulianDay, Time, UtcOffset, Weekday};
use qtty::Days;

#[test]
fn calendar_timeline_round_trip_across_a_leap_day() {
    let before = Time::new(2024, 2, 28, 23, 0, 0).unwrap();
    let after = Time::from_instant(before.to_instant() + Duration::from_seconds(2 * 3_600));
    assert_eq!(after, Time::new(2024, 2, 29, 1, 0, 0).unwrap());
    assert_eq!(after.weekday(), Weekday::Thursday);
}

#[test]
fn julian_day_agrees_with_the_epoch_engine() {
    let t = Time::new(2000, 1, 1, 12, 0, 0).unwrap();
    let via_calendar = JulianDay::from_time(&t);
    let via_instant = JulianDay::from_instant(&t.to_instant());
    assert_eq!(via_calendar.value(), 2_451_545.0);
    assert!((via_calendar - via_instant).abs() < Days::new(1e-9));
}

#[test]
fn chrono_and_calendar_paths_agree() {
    let datetime = DateTime::from_timestamp(946_728_000, 250_000_000).unwrap();
    let instant = Instant::from_datetime(datetime);
    let t = Time::from_instant(instant);
    assert_eq!(t, Time::with_subsec(2000, 1, 1, 12, 0, 0, 250, 0, 0).unwrap());
    assert_eq!(instant.to_datetime().unwrap(), datetime);
}

#[test]
fn offsets_and_epochs_compose() {
    // GPS week 0 starts at local midnight in UTC-0; shift it to +05:30.
    let gps_origin = epochs::GPS.to_instant();
    let ist = UtcOffset::from_hms(5, 30, 0).unwrap();
    let local = Time::from_instant_with_offset(gps_origin, ist);
    assert_eq!(local, Time::new(1980, 1, 6, 5, 30, 0).unwrap());
    assert_eq!(local.to_instant_with_offset(ist), gps_origin);
}

#[test]
fn checked_arithmetic_guards_the_clock_domain() {
    let far_future = Time::new(2262, 4, 11, 23, 47, 16).unwrap().to_instant();
    // Under a second below the i64 nanosecond bound.
    assert!(far_future
        .checked_add(&Duration::from_seconds(1))
        .is_err());
    assert_eq!(
        far_future.saturating_add(&Duration::from_seconds(1)),
        Instant::MAX
    );
    assert!(far_future
        .checked_sub(&Duration::from_seconds(1))
        .is_ok());
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trips_preserve_values() {
    let t = Time::with_subsec(2024, 1, 15, 12, 30, 45, 123, 456, 789).unwrap();
    let json = serde_json::to_string(&t).unwrap();
    assert!(json.contains("\"year\":2024"));
    assert_eq!(serde_json::from_str::<Time>(&json).unwrap(), t);

    // Field validation still applies on the way in.
    assert!(serde_json::from_str::<Time>(
        r#"{"year":2023,"month":2,"day":29,"hour":0,"minute":0,"second":0}"#
    )
    .is_err());

    let jd = JulianDay::new(2_451_545.0);
    assert_eq!(serde_json::to_string(&jd).unwrap(), "2451545.0");
    assert_eq!(serde_json::from_str::<JulianDay>("2451545.0").unwrap(), jd);
}
