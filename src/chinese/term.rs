//! 二十四節氣
//!
//! 節氣日期取自預製的速查表，不作天文推算。每個公曆年一個 `u128`，自高位起每 4 位記一個節氣在其公曆月中的日序，依次為小寒、大寒、立春……冬至，共 24 個，佔低 96 位：
//!
//! - 每月前一個節氣（「節」，如小寒、立春）直接記日序；
//! - 每月後一個節氣（「氣」，如大寒、雨水）記日序減 15。
//!
//! 速查表涵蓋公曆 1900 至 2100 年，以 `年份 - 1900` 為索引，足以覆蓋 [`table`](super::table) 所支持的全部日期。

use chrono::{Datelike, NaiveDate};

use super::fmt;
use crate::error::ConversionError;

/// 速查表首年（公曆）
pub const FIRST_YEAR: i32 = 1900;
/// 速查表末年（公曆）
pub const LAST_YEAR: i32 = 2100;

#[rustfmt::skip]
static TERM_INFO: [u128; 201] = [
    0x6544_6655_6667_7888_8899_8877, 0x6644_6656_6767_8889_8999_8887, 0x6654_6666_6777_8989_8999_8888, 0x6655_7766_7777_8999_9999_8888, // 1900
    0x7655_6655_6667_7888_8899_8877, 0x6644_6656_6767_8889_8999_8887, 0x6654_6666_6767_8989_8999_8888, 0x6655_7766_7777_8999_9999_8888, // 1904
    0x7655_6655_6667_7888_8899_8877, 0x6644_6656_6767_8889_8999_8887, 0x6654_6666_6767_8989_8999_8888, 0x6655_7766_7777_8999_9999_8888, // 1908
    0x7655_6655_6667_7888_8899_8877, 0x6544_6656_6767_8889_8999_8887, 0x6644_6656_6767_8989_8999_8888, 0x6655_6766_6777_8989_9999_8888, // 1912
    0x6655_6655_6667_7888_8889_8777, 0x6544_6656_6667_8889_8899_8877, 0x6644_6656_6767_8989_8999_8887, 0x6655_6766_6777_8989_9999_8888, // 1916
    0x6655_6655_6667_7888_8889_8777, 0x6544_6655_6667_8889_8899_8877, 0x6644_6656_6767_8989_8999_8887, 0x6654_6666_6777_8989_9999_8888, // 1920
    0x6655_6655_6667_7888_8889_8777, 0x6544_6655_6667_8889_8899_8877, 0x6644_6656_6767_8889_8999_8887, 0x6654_6666_6777_8989_8999_8888, // 1924
    0x6655_6655_6666_7888_8888_7777, 0x6544_6655_6667_7888_8899_8877, 0x6644_6656_6767_8889_8999_8887, 0x6654_6666_6777_8989_8999_8888, // 1928
    0x6655_6655_6666_7888_8888_7777, 0x6544_6655_6667_7888_8899_8877, 0x6644_6656_6767_8889_8999_8887, 0x6654_6666_6767_8989_8999_8888, // 1932
    0x6655_6655_6666_7888_8888_7777, 0x6544_6655_6667_7888_8899_8877, 0x6644_6656_6767_8889_8999_8887, 0x6654_6666_6767_8989_8999_8888, // 1936
    0x6655_6655_6666_7888_8888_7777, 0x6544_6655_6667_7888_8899_8877, 0x6644_6656_6767_8889_8999_8887, 0x6654_6666_6767_8989_8999_8888, // 1940
    0x6655_6655_5666_7888_8888_7777, 0x6544_6655_6667_7888_8889_8777, 0x6544_6656_6767_8889_8899_8887, 0x6644_6656_6767_8989_8999_8888, // 1944
    0x6655_5655_5666_7878_8888_7777, 0x5544_6655_6667_7888_8889_8777, 0x6544_6655_6667_8889_8899_8887, 0x6644_6656_6767_8989_8999_8888, // 1948
    0x6655_5655_5666_7878_8888_7777, 0x5544_6655_6667_7888_8889_8777, 0x6544_6655_6667_8889_8899_8877, 0x6644_6656_6767_8889_8999_8887, // 1952
    0x6655_5555_5666_7878_8888_7777, 0x5544_6655_6667_7888_8889_8777, 0x6544_6655_6667_7888_8899_8877, 0x6644_6656_6767_8889_8999_8887, // 1956
    0x6654_5555_5666_7878_7888_7777, 0x5544_6655_6666_7888_8888_7777, 0x6544_6655_6667_7888_8899_8877, 0x6644_6656_6767_8889_8999_8887, // 1960
    0x6654_5555_5666_7878_7888_7777, 0x5544_6655_6666_7888_8888_7777, 0x6544_6655_6667_7888_8899_8877, 0x6644_6656_6767_8889_8999_8887, // 1964
    0x6654_5555_5656_7878_7888_7777, 0x5544_6655_6666_7888_8888_7777, 0x6544_6655_6667_7888_8899_8877, 0x6644_6656_6767_8889_8999_8887, // 1968
    0x6654_5555_5656_7878_7888_7777, 0x5544_6655_5666_7888_8888_7777, 0x6544_6655_6667_7888_8899_8877, 0x6644_6656_6767_8889_8899_8887, // 1972
    0x6654_5545_5656_7878_7888_7777, 0x5544_6655_5666_7878_8888_7777, 0x6544_6655_6667_7888_8889_8877, 0x6644_6656_6667_8889_8899_8887, // 1976
    0x6654_5545_5656_7878_7888_7777, 0x5544_6655_5666_7878_8888_7777, 0x6544_6655_6667_7888_8889_8777, 0x6544_6655_6667_8889_8899_8887, // 1980
    0x6644_5545_5656_7778_7888_7777, 0x5544_5655_5666_7878_8888_7777, 0x5544_6655_6667_7888_8889_8777, 0x6544_6655_6667_7889_8899_8877, // 1984
    0x6644_5545_5656_7778_7888_7776, 0x5544_5555_5666_7878_7888_7777, 0x5544_6655_6666_7888_8889_8777, 0x6544_6655_6667_7888_8899_8877, // 1988
    0x6644_5545_5656_7778_7888_7776, 0x5543_5555_5666_7878_7888_7777, 0x5544_6655_6666_7888_8888_7777, 0x6544_6655_6667_7888_8899_8877, // 1992
    0x6644_5545_5656_7778_7888_7776, 0x5543_5555_5656_7878_7888_7777, 0x5544_6655_6666_7888_8888_7777, 0x6544_6655_6667_7888_8899_8877, // 1996
    0x6644_5545_5656_7778_7888_7776, 0x5543_5555_5656_7878_7888_7777, 0x5544_6655_6666_7888_8888_7777, 0x6544_6655_6667_7888_8899_8877, // 2000
    0x6644_5545_5656_7778_7888_7776, 0x5543_5555_5656_7878_7888_7777, 0x5544_6655_5666_7878_8888_7777, 0x6544_6655_6667_7888_8899_8877, // 2004
    0x6644_5545_5656_7778_7788_7776, 0x5543_5545_5656_7878_7888_7777, 0x5544_6655_5666_7878_8888_7777, 0x6544_6655_6667_7888_8889_8877, // 2008
    0x6644_5545_5556_7778_7788_7776, 0x5543_5545_5656_7778_7888_7777, 0x5544_6655_5666_7878_8888_7777, 0x6544_6655_6667_7888_8889_8777, // 2012
    0x6544_5544_5556_7778_7788_7776, 0x5533_5545_5656_7778_7888_7777, 0x5544_5655_5666_7878_8888_7777, 0x5544_6655_6666_7888_8889_8777, // 2016
    0x6544_5544_5556_6777_7788_7776, 0x5533_5545_5656_7778_7888_7776, 0x5544_5555_5666_7878_7888_7777, 0x5544_6655_6666_7888_8889_8777, // 2020
    0x6544_5544_5556_6777_7788_7766, 0x5533_5545_5656_7778_7888_7776, 0x5543_5555_5656_7878_7888_7777, 0x5544_6655_6666_7888_8888_7777, // 2024
    0x6544_5544_5556_6777_7788_7766, 0x5533_5545_5656_7778_7888_7776, 0x5543_5555_5656_7878_7888_7777, 0x5544_6655_6666_7888_8888_7777, // 2028
    0x6544_5544_5556_6777_7788_7766, 0x5533_5545_5656_7778_7888_7776, 0x5543_5555_5656_7878_7888_7777, 0x5544_6655_5666_7878_8888_7777, // 2032
    0x6544_5544_5556_6777_7788_7766, 0x5533_5545_5656_7778_7888_7776, 0x5543_5555_5656_7878_7888_7777, 0x5544_6655_5666_7878_8888_7777, // 2036
    0x6544_5544_5556_6777_7788_7766, 0x5533_5545_5556_7778_7788_7776, 0x5543_5545_5656_7878_7888_7777, 0x5544_6655_5666_7878_8888_7777, // 2040
    0x6544_5544_5556_6777_7778_7766, 0x5533_5544_5556_7778_7788_7776, 0x5543_5545_5656_7778_7888_7777, 0x5544_6655_5666_7878_8888_7777, // 2044
    0x6544_5544_5555_6777_7778_7666, 0x5433_5544_5556_6777_7788_7776, 0x5533_5545_5656_7778_7888_7777, 0x5544_5555_5666_7878_7888_7777, // 2048
    0x5544_5544_5555_6777_7778_7666, 0x5433_5544_5556_6777_7788_7776, 0x5533_5545_5656_7778_7888_7777, 0x5544_5555_5656_7878_7888_7777, // 2052
    0x5544_5544_5555_6777_7778_7666, 0x5433_5544_5556_6777_7788_7766, 0x5533_5545_5656_7778_7888_7776, 0x5544_5555_5656_7878_7888_7777, // 2056
    0x5544_5544_5555_6777_7777_6666, 0x5433_5544_5556_6777_7788_7766, 0x5533_5545_5656_7778_7888_7776, 0x5543_5555_5656_7878_7888_7777, // 2060
    0x5544_5544_5555_6777_7777_6666, 0x5433_5544_5556_6777_7788_7766, 0x5533_5545_5656_7778_7888_7776, 0x5543_5555_5656_7878_7888_7777, // 2064
    0x5544_5544_4555_6767_7777_6666, 0x5433_5544_5556_6777_7788_7766, 0x5533_5545_5556_7778_7788_7776, 0x5543_5555_5656_7878_7888_7777, // 2068
    0x5544_5544_4555_6767_7777_6666, 0x5433_5544_5556_6777_7778_7766, 0x5533_5545_5556_7778_7788_7776, 0x5543_5545_5656_7778_7888_7777, // 2072
    0x5544_5544_4555_6767_7777_6666, 0x5433_5544_5556_6777_7778_7766, 0x5533_5544_5556_6778_7788_7776, 0x5543_5545_5656_7778_7888_7777, // 2076
    0x5544_5544_4555_6767_7777_6666, 0x5433_5544_5555_6777_7778_7666, 0x5533_5544_5556_6777_7788_7776, 0x5533_5545_5656_7778_7888_7777, // 2080
    0x5544_4444_4555_6767_6777_6666, 0x4433_5544_5555_6777_7778_7666, 0x5433_5544_5556_6777_7788_7776, 0x5533_5545_5656_7778_7888_7777, // 2084
    0x5544_4444_4545_6767_6777_6666, 0x4433_5544_5555_6777_7778_7666, 0x5433_5544_5556_6777_7788_7766, 0x5533_5545_5656_7778_7888_7776, // 2088
    0x5544_4444_4545_6767_6777_6666, 0x4433_5544_5555_6777_7777_6666, 0x5433_5544_5556_6777_7788_7766, 0x5533_5545_5656_7778_7888_7776, // 2092
    0x5543_4444_4545_6767_6777_6666, 0x4433_5544_5555_6767_7777_6666, 0x5433_5544_5556_6777_7788_7766, 0x5533_5545_5656_7778_7888_7776, // 2096
    0x5543_5555_5656_7878_7888_7777, // 2100
];

/// 取得公曆 `year` 年第 `n` 個節氣所在的日，`n` 為 `0..24`，0 為小寒、23 為冬至。第 `n` 個節氣必在 `n / 2 + 1` 月。
///
/// 年份不在速查表範圍內則回報 [`ConversionError::OutOfRangeYear`]。
///
/// # 用例
///
/// ```
/// use nongli::chinese::term;
///
/// assert_eq!(Ok(4), term::day_of(2020, 2)); // 立春
/// assert_eq!(Ok(21), term::day_of(2020, 23)); // 冬至
/// assert!(term::day_of(2101, 0).is_err());
/// ```
///
/// # Panics
///
/// 若 `n` 不在 `0..24` 間則 panic。
pub fn day_of(year: i32, n: u32) -> Result<u32, ConversionError> {
    assert!(n < 24, "solar term {n} not in 0..24");
    if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
        return Err(ConversionError::OutOfRangeYear { year });
    }
    let code = TERM_INFO[(year - FIRST_YEAR) as usize];
    let nibble = ((code >> (4 * (23 - n))) & 0xf) as u32;
    Ok(if n % 2 == 0 { nibble } else { nibble + 15 })
}

/// 所給日期所在公曆月的兩個節氣：前一個的序號及兩者的日序。
fn month_terms(date: NaiveDate) -> Result<(u32, u32, u32), ConversionError> {
    let first = 2 * date.month0();
    Ok((
        first,
        day_of(date.year(), first)?,
        day_of(date.year(), first + 1)?,
    ))
}

/// 取得恰在所給日期交節的節氣，該日不交節則為 `None`。
///
/// # 用例
///
/// ```
/// use chrono::NaiveDate;
/// use nongli::chinese::term;
///
/// let date = NaiveDate::from_ymd_opt(2020, 2, 4).unwrap();
/// assert_eq!(Ok(Some("立春")), term::on(date));
/// assert_eq!(Ok(None), term::on(date.succ_opt().unwrap()));
/// ```
pub fn on(date: NaiveDate) -> Result<Option<&'static str>, ConversionError> {
    let (first, a, b) = month_terms(date)?;
    Ok(match date.day() {
        d if d == a => Some(fmt::solar_term(first)),
        d if d == b => Some(fmt::solar_term(first + 1)),
        _ => None,
    })
}

/// 取得所給日期所處的節氣，即該日或其前最近一次交節的節氣。
///
/// # 用例
///
/// ```
/// use chrono::NaiveDate;
/// use nongli::chinese::term;
///
/// let date = NaiveDate::from_ymd_opt(2020, 2, 10).unwrap();
/// assert_eq!(Ok("立春"), term::current(date));
/// let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
/// assert_eq!(Ok("冬至"), term::current(date));
/// ```
pub fn current(date: NaiveDate) -> Result<&'static str, ConversionError> {
    let (first, a, b) = month_terms(date)?;
    let n = match date.day() {
        d if d >= b => first + 1,
        d if d >= a => first,
        // 上月後一個節氣，一月則為上年冬至
        _ => first + 23,
    };
    Ok(fmt::solar_term(n))
}
