//! Walks every solar day of the supported range and checks that the lunar
//! calendar advances one day at a time.

use chrono::NaiveDate;
use nongli::chinese::{Month, fmt, table, term};
use nongli::{ConversionError, LunarDate};

#[test]
fn every_day_advances_by_one() {
    let mut solar = NaiveDate::from_ymd_opt(1900, 1, 31).unwrap();
    let mut prev = LunarDate::from_solar_date(solar).unwrap();
    assert_eq!((1900, Month::Common(1), 1), (prev.year(), prev.lunar_month(), prev.day()));

    let mut leap_segments = 0;
    loop {
        solar = solar.succ_opt().unwrap();
        let next = match LunarDate::from_solar_date(solar) {
            Ok(next) => next,
            Err(e) => {
                assert_eq!(ConversionError::OutOfRangeYear { year: 2100 }, e);
                break;
            }
        };
        if next.day() == prev.day() + 1 {
            assert_eq!(
                (prev.year(), prev.lunar_month()),
                (next.year(), next.lunar_month()),
                "{solar}"
            );
        } else {
            assert_eq!(1, next.day(), "{solar}");
            assert!(prev.day() == 29 || prev.day() == 30, "{solar}: {prev:?}");
            let leap = table::leap_month(prev.year()).unwrap();
            let expected = match prev.lunar_month() {
                Month::Common(12) if leap != 12 => (prev.year() + 1, Month::Common(1)),
                Month::Common(m) if m == leap => (prev.year(), Month::Leap(m)),
                Month::Common(m) | Month::Leap(m) => (prev.year(), Month::Common(m + 1)),
            };
            assert_eq!(expected, (next.year(), next.lunar_month()), "{solar}");
            if next.is_leap_month() {
                leap_segments += 1;
            }
        }
        prev = next;
    }

    let leap_years = (table::FIRST_YEAR..=table::LAST_YEAR)
        .filter(|&y| table::leap_month(y).unwrap() > 0)
        .count();
    assert_eq!(leap_years, leap_segments);
}

#[test]
fn leap_segment_lengths_match_table() {
    for year in table::FIRST_YEAR..=table::LAST_YEAR {
        let leap = table::leap_month(year).unwrap();
        if leap == 0 {
            continue;
        }
        let first = LunarDate::from_components(year, leap, 1).unwrap();
        let len = table::leap_days(year).unwrap();
        let last = LunarDate::from_components(year, leap, len).unwrap();
        assert!(first.is_leap_month() && last.is_leap_month(), "{year}");
        assert_eq!(len as i64 - 1, (last.to_solar() - first.to_solar()).num_days(), "{year}");

        let before = LunarDate::from_solar_date(first.to_solar().pred_opt().unwrap()).unwrap();
        let after = LunarDate::from_solar_date(last.to_solar().succ_opt().unwrap()).unwrap();
        assert_eq!(Month::Common(leap), before.lunar_month(), "{year}");
        assert_eq!(Month::Common(leap + 1), after.lunar_month(), "{year}");
    }
}

#[test]
fn month_stem_branch_changes_on_jie_only() {
    let mut solar = NaiveDate::from_ymd_opt(1900, 1, 31).unwrap();
    let mut prev = LunarDate::from_solar_date(solar).unwrap();
    let mut changes = 0;
    while let Ok(next) = LunarDate::from_solar_date(solar.succ_opt().unwrap()) {
        solar = next.to_solar();
        let on_jie = term::on(solar).unwrap().is_some_and(|name| {
            let n = (0..24).find(|&n| fmt::solar_term(n) == name).unwrap();
            n % 2 == 0
        });
        if on_jie {
            changes += 1;
            let expected = fmt::sexagenary_for_month(prev.to_solar()).unwrap() % 60 + 1;
            assert_eq!(fmt::sexagenary(expected), next.month_stem_branch_name(), "{solar}");
        } else {
            assert_eq!(prev.month_stem_branch_name(), next.month_stem_branch_name(), "{solar}");
        }
        assert_eq!(next.term(), term::on(solar).unwrap(), "{solar}");
        prev = next;
    }
    // 1900-02-04 立春起，至 2100-02-04 立春止
    assert_eq!(200 * 12 + 1, changes);
}
