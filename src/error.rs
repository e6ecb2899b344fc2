//! Error type shared by every fallible conversion in this crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in this crate.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum ConversionError {
    /// The lunar year (requested directly or reached by conversion) has no
    /// table data.
    #[error("year {year} is outside the supported range 1900..=2099")]
    OutOfRangeYear {
        /// The unsupported year.
        year: i32,
    },

    /// The solar date precedes 1900-01-31, the first day of lunar year 1900.
    #[error("date {date} precedes the supported range starting at 1900-01-31")]
    BeforeSupportedRange {
        /// The solar date given.
        date: NaiveDate,
    },

    /// The lunar month or day does not exist in the resolved year.
    #[error("no lunar date {year}-{}{month:02}-{day:02}", leap_marker(.leap))]
    InvalidComponents {
        /// Lunar year.
        year: i32,
        /// Month number, `1..=12`.
        month: u32,
        /// Day of month.
        day: u32,
        /// Whether the leap month was selected.
        leap: bool,
    },

    /// Month or day is out of range for a solar date.
    #[error("invalid solar month/day {month}/{day}")]
    InvalidSolarDate {
        /// Solar month, expected `1..=12`.
        month: u32,
        /// Solar day, expected `1..=31`.
        day: u32,
    },
}

fn leap_marker(leap: &bool) -> &'static str {
    if *leap { "leap " } else { "" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_year() {
        let e = ConversionError::OutOfRangeYear { year: 2100 };
        assert_eq!(e.to_string(), "year 2100 is outside the supported range 1900..=2099");
    }

    #[test]
    fn before_supported_range() {
        let date = NaiveDate::from_ymd_opt(1900, 1, 30).unwrap();
        let e = ConversionError::BeforeSupportedRange { date };
        assert_eq!(
            e.to_string(),
            "date 1900-01-30 precedes the supported range starting at 1900-01-31"
        );
    }

    #[test]
    fn invalid_components() {
        let e = ConversionError::InvalidComponents {
            year: 2017,
            month: 6,
            day: 31,
            leap: true,
        };
        assert_eq!(e.to_string(), "no lunar date 2017-leap 06-31");
        let e = ConversionError::InvalidComponents {
            year: 2017,
            month: 13,
            day: 1,
            leap: false,
        };
        assert_eq!(e.to_string(), "no lunar date 2017-13-01");
    }

    #[test]
    fn invalid_solar_date() {
        let e = ConversionError::InvalidSolarDate { month: 13, day: 1 };
        assert_eq!(e.to_string(), "invalid solar month/day 13/1");
    }

    #[test]
    fn error_is_std_error_and_thread_safe() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<ConversionError>();
    }
}
