//! Utilities for converting Gregorian dates into the Chinese lunar calendar.
//!
//! Conversion covers lunar years 1900 through 2099 and is driven by a fixed
//! table of month lengths and leap months, one packed integer per year (see
//! [`chinese::table`]). Nothing is computed astronomically, so results are
//! only as good as the table and dates outside its range are rejected.
//! Solar terms and the month stem-branch come from a second table keyed by
//! Gregorian year (see [`chinese::term`]).
//!
//! # Examples
//!
//! Converting a solar date:
//!
//! ```
//! use chrono::NaiveDate;
//! use nongli::LunarDate;
//!
//! let date = LunarDate::from_solar_date(NaiveDate::from_ymd_opt(2020, 1, 25).unwrap()).unwrap();
//!
//! assert_eq!((2020, 1, 1), (date.year(), date.month(), date.day()));
//! assert_eq!("农历庚子鼠年正月初一", date.to_string());
//! assert_eq!(vec!["春节"], date.festivals());
//! ```
//!
//! Leap months keep the number of the month they follow:
//!
//! ```
//! use nongli::LunarDate;
//! use nongli::chinese::Month::*;
//!
//! let date = LunarDate::from_components(2023, 2, 1).unwrap();
//!
//! assert_eq!(Leap(2), date.lunar_month());
//! assert_eq!("2023-03-22", date.to_solar().to_string());
//! ```
//!
//! Every conversion emits `trace`-level events through [`tracing`]; install a
//! subscriber to see them.

pub mod chinese;
pub mod error;
pub mod gregorian;

pub use chinese::LunarDate;
pub use error::ConversionError;
