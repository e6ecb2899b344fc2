use chrono::{Days, NaiveDate};
use nongli::LunarDate;
use nongli::chinese::{self, table};
use proptest::prelude::*;

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 31).unwrap()
}

/// Number of days covered by the year table.
fn supported_days() -> u64 {
    (table::FIRST_YEAR..=table::LAST_YEAR)
        .map(|y| table::total_days(y).unwrap() as u64)
        .sum()
}

fn key(date: &LunarDate) -> (i32, chinese::Month, u32) {
    (date.year(), date.lunar_month(), date.day())
}

proptest! {
    #[test]
    fn components_round_trip(offset in 0..supported_days()) {
        let solar = epoch() + Days::new(offset);
        let lunar = LunarDate::from_solar_date(solar).unwrap();
        let rebuilt = LunarDate::from_components_with_leap(
            lunar.year(),
            lunar.month(),
            lunar.day(),
            lunar.is_leap_month(),
        )
        .unwrap();
        prop_assert_eq!(lunar, rebuilt);
        prop_assert_eq!(solar, rebuilt.to_solar());
    }

    #[test]
    fn conversion_is_monotonic(offset in 0..supported_days(), step in 1u64..800) {
        let a = epoch() + Days::new(offset);
        let b = a + Days::new(step);
        let la = LunarDate::from_solar_date(a).unwrap();
        match LunarDate::from_solar_date(b) {
            Ok(lb) => prop_assert!(key(&la) < key(&lb), "{} -> {:?}, {} -> {:?}", a, la, b, lb),
            Err(e) => prop_assert_eq!(nongli::ConversionError::OutOfRangeYear { year: 2100 }, e),
        }
    }

    #[test]
    fn stem_branch_has_period_60(year in 1900i32..2100, cycles in 1i32..4) {
        prop_assert_eq!(chinese::stem_branch(year), chinese::stem_branch(year + 60 * cycles));
        prop_assert_ne!(chinese::stem_branch(year), chinese::stem_branch(year + 1));
    }

    #[test]
    fn zodiac_has_period_12(year in 1900i32..2100, cycles in 1i32..10) {
        prop_assert_eq!(chinese::zodiac(year), chinese::zodiac(year + 12 * cycles));
        prop_assert_ne!(chinese::zodiac(year), chinese::zodiac(year + 1));
    }

    #[test]
    fn total_days_is_popcount(year in 1900i32..2100) {
        let code = table::YearCode::get(year).unwrap();
        let expected = 348 + ((code.code >> 4) & 0xfff).count_ones() + table::leap_days(year).unwrap();
        prop_assert_eq!(expected, table::total_days(year).unwrap());
    }
}
