use chrono::{Datelike, NaiveDate};
use jptime::normalize::normalize;
use jptime::{Era, from_gregorian, make_era_date};
use proptest::prelude::*;

// 1868-01-25 .. 2100-12-31 as days since the Common Era.
fn covered_date() -> impl Strategy<Value = NaiveDate> {
    let first = Era::Meiji.begin().num_days_from_ce();
    let last = NaiveDate::from_ymd_opt(2100, 12, 31).unwrap().num_days_from_ce();
    (first..=last).prop_map(|days| NaiveDate::from_num_days_from_ce_opt(days).unwrap())
}

proptest! {
    #[test]
    fn gregorian_round_trip(date in covered_date()) {
        let era_date = from_gregorian(date).unwrap();
        prop_assert_eq!(era_date.to_gregorian(), date);
        prop_assert!(era_date.era().contains(date));
        prop_assert_eq!(from_gregorian(era_date.to_gregorian()), Ok(era_date));
    }

    #[test]
    fn tuple_round_trip(date in covered_date()) {
        let (e, y, m, d) = from_gregorian(date).unwrap().to_tuple();
        let rebuilt = make_era_date(u32::from(e), y, m, d).unwrap();
        prop_assert_eq!(rebuilt.to_gregorian(), date);
    }

    #[test]
    fn normalization_is_idempotent(s in "\\PC{0,24}") {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }
}

#[test]
fn era_boundaries_are_inclusive() {
    for era in Era::ALL {
        let first = from_gregorian(era.begin()).unwrap();
        assert_eq!(first.era(), era);
        assert_eq!(first.era_year(), 1);

        if era.is_current() {
            continue;
        }
        let last = from_gregorian(era.end()).unwrap();
        assert_eq!(last.era(), era);
        assert_eq!(Some(last.era_year()), era.max_year());

        let next_day = era.end().succ_opt().unwrap();
        let next = from_gregorian(next_day).unwrap();
        assert_eq!(u32::from(next.era_code()), u32::from(era.code()) + 1);

        let under_previous = make_era_date(
            u32::from(era.code()),
            next_day.year() as u32 - era.begin().year() as u32 + 1,
            next_day.month(),
            next_day.day(),
        );
        assert!(under_previous.is_err());
    }
}
