//! 農曆年表數據及其解碼
//!
//! 每年以一個整數編碼，自低位起：
//!
//! - 第 0–3 位：閏月月序（`1..=12`），無閏月則為 0
//! - 第 4–15 位：正月至臘月的大小，正月在第 15 位、臘月在第 4 位，1 為大月（30 日）、0 為小月（29 日）
//! - 第 16 位：閏月大小，1 為大月，0 為小月；無閏月時無意義
//!
//! 年表涵蓋 1900 至 2099 年，以 `年份 - 1900` 為索引。

use crate::error::ConversionError;

/// 年表首年
pub const FIRST_YEAR: i32 = 1900;
/// 年表末年
pub const LAST_YEAR: i32 = 2099;

#[rustfmt::skip]
static LUNAR_INFO: [u32; 200] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2, // 1900
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977, // 1910
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, // 1920
    0x06566, 0x0d4a0, 0x0ea50, 0x16a95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, // 1930
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557, // 1940
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0, // 1950
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, // 1960
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6, // 1970
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, // 1980
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0, // 1990
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2000
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, // 2010
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, // 2020
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, // 2030
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, // 2040
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0, // 2050
    0x092e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4, // 2060
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0, // 2070
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160, // 2080
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252, // 2090
];

/// 一年的編碼，見模塊文檔。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct YearCode {
    /// 農曆年
    pub year: i32,
    /// 該年編碼
    pub code: u32,
}

impl YearCode {
    /// 取得農曆 `year` 年的編碼。
    ///
    /// 年表無該年數據則回報 [`ConversionError::OutOfRangeYear`]。
    ///
    /// # 用例
    ///
    /// ```
    /// use nongli::chinese::table::YearCode;
    ///
    /// assert_eq!(0x04bd8, YearCode::get(1900).unwrap().code);
    /// assert!(YearCode::get(2100).is_err());
    /// ```
    pub fn get(year: i32) -> Result<Self, ConversionError> {
        if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
            return Err(ConversionError::OutOfRangeYear { year });
        }
        Ok(Self {
            year,
            code: LUNAR_INFO[(year - FIRST_YEAR) as usize],
        })
    }

    /// 閏月月序，無閏月為 0。
    pub fn leap_month(&self) -> u32 {
        self.code & 0xf
    }

    /// 閏月日數，無閏月為 0。
    pub fn leap_days(&self) -> u32 {
        match self.leap_month() {
            0 => 0,
            _ if self.code & 0x10000 != 0 => 30,
            _ => 29,
        }
    }

    /// 平月 `month` 的日數，`month` 應在 `1..=12` 間。
    pub fn month_days(&self, month: u32) -> u32 {
        debug_assert!((1..=12).contains(&month), "month {month} not in 1..=12");
        if self.code & (0x10000 >> month) != 0 { 30 } else { 29 }
    }

    /// 全年日數，含閏月。
    pub fn total_days(&self) -> u32 {
        348 + (self.code & 0xfff0).count_ones() + self.leap_days()
    }

    /// 取得某月日數；`leap` 為 `true` 時取閏月，若該月並非本年閏月或月序越界則返回 `None`。
    pub(crate) fn days_in(&self, month: u32, leap: bool) -> Option<u32> {
        match (month, leap) {
            (1..=12, false) => Some(self.month_days(month)),
            (1..=12, true) if month == self.leap_month() => Some(self.leap_days()),
            _ => None,
        }
    }
}

/// 農曆 `year` 年的總日數。
///
/// # 用例
///
/// ```
/// use nongli::chinese::table;
///
/// assert_eq!(Ok(384), table::total_days(1900));
/// assert_eq!(Ok(354), table::total_days(2021));
/// ```
pub fn total_days(year: i32) -> Result<u32, ConversionError> {
    YearCode::get(year).map(|c| c.total_days())
}

/// 農曆 `year` 年閏哪個月，`1..=12`，無閏月為 0。
pub fn leap_month(year: i32) -> Result<u32, ConversionError> {
    YearCode::get(year).map(|c| c.leap_month())
}

/// 農曆 `year` 年閏月的日數，無閏月為 0。
pub fn leap_days(year: i32) -> Result<u32, ConversionError> {
    YearCode::get(year).map(|c| c.leap_days())
}

/// 農曆 `year` 年平月 `month` 的日數（29 或 30）。
///
/// `month` 不在 `1..=12` 間則回報 [`ConversionError::InvalidComponents`]。
pub fn month_days(year: i32, month: u32) -> Result<u32, ConversionError> {
    let code = YearCode::get(year)?;
    if !(1..=12).contains(&month) {
        return Err(ConversionError::InvalidComponents {
            year,
            month,
            day: 1,
            leap: false,
        });
    }
    Ok(code.month_days(month))
}
