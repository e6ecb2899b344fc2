//! Chinese calendar
//!
//! Note: 為方便處理諸多術語，本模塊文檔用中文。
//!
//! 本程序以預製的年表編算 1900 至 2099 年的夏曆，見 [`table`]。年表僅記錄各年大小月與閏月，並非天文推算，故不適用於範圍以外的年份。
//!
//! 日期換算以公曆 1900 年 1 月 31 日（農曆 1900 年正月初一）為曆元，所有換算均先求所給日期距曆元的日數。
//!
//! 節氣及干支紀月另以節氣速查表推得，見 [`term`]。

use std::cmp::Ordering;
use std::fmt::{self as std_fmt, Display, Formatter};

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use tracing::trace;

use crate::error::ConversionError;
use table::YearCode;

pub mod festival;
pub mod fmt;
pub mod table;
pub mod term;

/// 曆元（公曆 1900-01-31）的 [`NaiveDate::num_days_from_ce`] 值。
pub const EPOCH_DAYS_FROM_CE: i32 = 693_626;
/// 曆元（公曆 1900-01-31 00:00 UTC）的 Unix 毫秒時間戳。
pub const EPOCH_MILLIS: i64 = -2_206_396_800_000;

/// 生肖，自 1900 年（鼠年）起依序輪替。
const ZODIAC: &[&str] = &[
    "鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪",
];

/// 月名，`Common` 為平月，`Leap` 為閏月。
///
/// 排序時閏月在其本月之後、次月之前，即 `Common(n) < Leap(n) < Common(n + 1)`。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Month {
    Common(u32),
    Leap(u32),
}

impl Month {
    /// 取得月序號，無論平閏。
    pub fn num(&self) -> u32 {
        use Month::*;
        *match self {
            Common(v) | Leap(v) => v,
        }
    }
    /// 閏月為 `true`，平月為 `false`
    pub fn is_leap(&self) -> bool {
        matches!(self, Self::Leap(_))
    }
    /// 取得月名的文本形式，正月、十一、十二月稱「正月」「冬月」「腊月」。
    pub fn name(&self) -> String {
        fmt::month(*self)
    }
}

impl Ord for Month {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.num(), self.is_leap()).cmp(&(other.num(), other.is_leap()))
    }
}

impl PartialOrd for Month {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// 農曆日期，建立後不可變。
///
/// 可由公曆日期換算得到，亦可直接以農曆年月日建立；兩種方式均會校驗日期確實存在，並記下對應的公曆日期。
///
/// # 用例
///
/// ```
/// use chrono::NaiveDate;
/// use nongli::LunarDate;
/// use nongli::chinese::Month::*;
///
/// let solar = NaiveDate::from_ymd_opt(2017, 7, 23).unwrap();
/// let date = LunarDate::from_solar_date(solar).unwrap();
///
/// assert_eq!((2017, Leap(6), 1), (date.year(), date.lunar_month(), date.day()));
/// assert_eq!("农历丁酉鸡年闰六月初一", date.to_string());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct LunarDate {
    year: i32,
    month: Month,
    day: u32,
    solar: NaiveDate,
    /// 月干支序號，由 `solar` 推得
    month_sexagenary: u32,
}

impl LunarDate {
    /// 由公曆日期換算。
    ///
    /// 日期早於曆元則回報 [`ConversionError::BeforeSupportedRange`]，晚於 2099 年末則回報 [`ConversionError::OutOfRangeYear`]。
    ///
    /// # 用例
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use nongli::LunarDate;
    ///
    /// let date = LunarDate::from_solar_date(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()).unwrap();
    /// assert_eq!("1999-11-25", date.to_iso_like_string());
    /// ```
    #[tracing::instrument(level = "trace")]
    pub fn from_solar_date(date: NaiveDate) -> Result<Self, ConversionError> {
        let day_offset = date.num_days_from_ce() - EPOCH_DAYS_FROM_CE;
        if day_offset < 0 {
            return Err(ConversionError::BeforeSupportedRange { date });
        }
        locate(date, day_offset)
    }

    /// 由帶時區的時刻換算，取該時刻在其自身時區的日期。
    ///
    /// # 用例
    ///
    /// ```
    /// use chrono::{FixedOffset, TimeZone};
    /// use nongli::LunarDate;
    ///
    /// let cst = FixedOffset::east_opt(8 * 3600).unwrap();
    /// let instant = cst.with_ymd_and_hms(2020, 1, 25, 0, 30, 0).unwrap();
    /// let date = LunarDate::from_solar_instant(&instant).unwrap();
    /// assert_eq!("2020-01-01", date.to_iso_like_string());
    /// ```
    pub fn from_solar_instant<Tz: TimeZone>(instant: &DateTime<Tz>) -> Result<Self, ConversionError> {
        Self::from_solar_date(instant.date_naive())
    }

    /// 由 Unix 毫秒時間戳換算，日期以 UTC 為準。
    ///
    /// # 用例
    ///
    /// ```
    /// use nongli::LunarDate;
    /// use nongli::chinese::EPOCH_MILLIS;
    ///
    /// let date = LunarDate::from_epoch_millis(EPOCH_MILLIS).unwrap();
    /// assert_eq!("1900-01-01", date.to_iso_like_string());
    /// ```
    pub fn from_epoch_millis(millis: i64) -> Result<Self, ConversionError> {
        match DateTime::<Utc>::from_timestamp_millis(millis) {
            Some(instant) => Self::from_solar_instant(&instant),
            None if millis < 0 => Err(ConversionError::BeforeSupportedRange {
                date: NaiveDate::MIN,
            }),
            None => Err(ConversionError::OutOfRangeYear {
                year: NaiveDate::MAX.year(),
            }),
        }
    }

    /// 以農曆年月日建立。若 `month` 恰為該年閏月，則取閏月。
    ///
    /// 年份不在年表範圍內則回報 [`ConversionError::OutOfRangeYear`]，月日不存在則回報 [`ConversionError::InvalidComponents`]。
    ///
    /// # 用例
    ///
    /// ```
    /// use nongli::LunarDate;
    ///
    /// let date = LunarDate::from_components(2020, 4, 1).unwrap();
    /// assert!(date.is_leap_month());
    /// assert_eq!("2020-05-23", date.to_solar().to_string());
    ///
    /// assert!(LunarDate::from_components(2021, 1, 30).is_err()); // 2021 年正月小
    /// ```
    pub fn from_components(year: i32, month: u32, day: u32) -> Result<Self, ConversionError> {
        Self::from_components_with_leap(year, month, day, true)
    }

    /// 以農曆年月日建立，`leap` 指明是否取閏月。若 `month` 並非該年閏月，`leap` 無效，一律取平月。
    ///
    /// # 用例
    ///
    /// ```
    /// use nongli::LunarDate;
    ///
    /// let date = LunarDate::from_components_with_leap(2020, 4, 1, false).unwrap();
    /// assert!(!date.is_leap_month());
    /// assert_eq!("2020-04-23", date.to_solar().to_string());
    /// ```
    pub fn from_components_with_leap(
        year: i32,
        month: u32,
        day: u32,
        leap: bool,
    ) -> Result<Self, ConversionError> {
        let code = YearCode::get(year)?;
        let leap = leap && month == code.leap_month();
        let invalid = ConversionError::InvalidComponents {
            year,
            month,
            day,
            leap,
        };
        let len = code.days_in(month, leap).ok_or(invalid)?;
        if !(1..=len).contains(&day) {
            return Err(invalid);
        }

        let mut offset = (table::FIRST_YEAR..year)
            .map(table::total_days)
            .sum::<Result<u32, _>>()?;
        for m in 1..month {
            offset += code.month_days(m);
            if m == code.leap_month() {
                offset += code.leap_days();
            }
        }
        if leap {
            offset += code.month_days(month);
        }
        offset += day - 1;
        let solar = NaiveDate::from_num_days_from_ce_opt(EPOCH_DAYS_FROM_CE + offset as i32)
            .ok_or(ConversionError::OutOfRangeYear { year })?;

        Ok(Self {
            year,
            month: if leap { Month::Leap(month) } else { Month::Common(month) },
            day,
            solar,
            month_sexagenary: fmt::sexagenary_for_month(solar)?,
        })
    }

    /// 農曆年
    pub fn year(&self) -> i32 {
        self.year
    }
    /// 農曆月序號 `1..=12`，閏月取其本月序號。
    pub fn month(&self) -> u32 {
        self.month.num()
    }
    /// 帶平閏信息的月名
    pub fn lunar_month(&self) -> Month {
        self.month
    }
    /// 農曆日 `1..=30`
    pub fn day(&self) -> u32 {
        self.day
    }
    /// 是否閏月
    pub fn is_leap_month(&self) -> bool {
        self.month.is_leap()
    }
    /// 對應的公曆日期
    pub fn to_solar(&self) -> NaiveDate {
        self.solar
    }

    /// 數序月名，如「一月」「闰四月」。
    pub fn chinese_month(&self) -> String {
        fmt::month_numeral(self.month)
    }
    /// 傳統月名，如「正月」「腊月」。
    pub fn chinese_month_name(&self) -> String {
        fmt::month(self.month)
    }
    /// 日名，如「初一」「廿九」。
    pub fn chinese_day_name(&self) -> String {
        fmt::day(self.day)
    }

    /// 該日的全部節日，無則為空。閏月不計節日。
    ///
    /// # 用例
    ///
    /// ```
    /// use nongli::LunarDate;
    ///
    /// let date = LunarDate::from_components(2020, 12, 30).unwrap();
    /// assert_eq!(vec!["除夕"], date.festivals());
    /// ```
    pub fn festivals(&self) -> Vec<&'static str> {
        let Month::Common(month) = self.month else {
            return Vec::new();
        };
        let mut rt = festival::on(month, self.day);
        if month == 12 && YearCode::get(self.year).is_ok_and(|c| c.month_days(12) == self.day) {
            rt.push(festival::NEW_YEARS_EVE);
        }
        rt
    }

    /// 年干支，如「庚子」。
    pub fn stem_branch_name(&self) -> String {
        stem_branch(self.year)
    }
    /// 年生肖，如「鼠」。
    pub fn zodiac_name(&self) -> &'static str {
        zodiac_of(self.year)
    }
    /// 月干支，以節氣為界，如公曆 2020 年 2 月 4 日（立春）起為「戊寅」。
    pub fn month_stem_branch_name(&self) -> String {
        fmt::sexagenary(self.month_sexagenary)
    }
    /// 日干支，如「丁卯」。
    pub fn day_stem_branch_name(&self) -> String {
        fmt::sexagenary(fmt::sexagenary_for_day(self.solar))
    }
    /// 年月日干支，如「庚子年丁丑月丁卯日」。年依農曆年，月依節氣。
    ///
    /// # 用例
    ///
    /// ```
    /// use nongli::LunarDate;
    ///
    /// let date = LunarDate::from_components(2020, 1, 1).unwrap();
    /// assert_eq!("庚子年丁丑月丁卯日", date.cyclical_ymd());
    /// ```
    pub fn cyclical_ymd(&self) -> String {
        format!(
            "{}年{}月{}日",
            self.stem_branch_name(),
            self.month_stem_branch_name(),
            self.day_stem_branch_name()
        )
    }

    /// 該日交節的節氣，不交節則為 `None`。
    ///
    /// # 用例
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use nongli::LunarDate;
    ///
    /// let date = LunarDate::from_solar_date(NaiveDate::from_ymd_opt(2020, 2, 4).unwrap()).unwrap();
    /// assert_eq!(Some("立春"), date.term());
    /// ```
    pub fn term(&self) -> Option<&'static str> {
        // 速查表覆蓋全部可建立的日期
        term::on(self.solar).ok().flatten()
    }

    /// `年-月-日` 形式，閏月取其本月序號，如「2020-04-01」。
    pub fn to_iso_like_string(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month.num(), self.day)
    }
    /// 默認文本形式，見 [`fmt::DisplayFormat::Gxss`]。
    pub fn to_display_string(&self) -> String {
        fmt::display(self, fmt::DisplayFormat::default())
    }
}

impl Display for LunarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std_fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

/// 由距曆元的日數推得農曆日期。先逐年扣減全年日數定年，再逐月扣減定月日。
fn locate(solar: NaiveDate, day_offset: i32) -> Result<LunarDate, ConversionError> {
    let mut offset = day_offset;
    let mut year = table::FIRST_YEAR;
    let code = loop {
        let code = YearCode::get(year)?;
        let days = code.total_days() as i32;
        if offset < days {
            break code;
        }
        offset -= days;
        year += 1;
    };

    let leap = code.leap_month();
    let mut is_leap = false;
    let mut month = 1;
    let mut last = 0;
    while month < 13 && offset > 0 {
        if leap > 0 && month == leap + 1 && !is_leap {
            // 閏月不佔月序，下一輪仍為其本月之次月
            month -= 1;
            is_leap = true;
            last = code.leap_days() as i32;
        } else {
            last = code.month_days(month) as i32;
        }
        if is_leap && month == leap + 1 {
            is_leap = false;
        }
        offset -= last;
        month += 1;
    }
    // 恰好扣盡時落在下月初一，閏月與其前後平月的分界須在此校正
    if offset == 0 && leap > 0 && month == leap + 1 {
        if is_leap {
            is_leap = false;
        } else {
            is_leap = true;
            month -= 1;
        }
    }
    if offset < 0 {
        offset += last;
        month -= 1;
    }

    let month = if is_leap { Month::Leap(month) } else { Month::Common(month) };
    let day = offset as u32 + 1;
    trace!(day_offset, year, ?month, day, "located lunar date");
    Ok(LunarDate {
        year,
        month,
        day,
        solar,
        month_sexagenary: fmt::sexagenary_for_month(solar)?,
    })
}

/// 取得所給農曆年的干支序號，`1` 為甲子，`60` 為癸亥。
///
/// # 用例
///
/// ```
/// use nongli::chinese::sexagenary_for_year;
///
/// assert_eq!(37, sexagenary_for_year(1900)); // 庚子
/// assert_eq!(17, sexagenary_for_year(2000)); // 庚辰
/// ```
pub fn sexagenary_for_year(year: i32) -> u32 {
    // 1900 年為庚子，居六十甲子第 37
    ((year.rem_euclid(60) + 60 - 1900 % 60 + 36) % 60 + 1) as u32
}

/// 取得所給農曆年的干支名。
///
/// # 用例
///
/// ```
/// use nongli::chinese::stem_branch;
///
/// assert_eq!("庚子", stem_branch(1900));
/// assert_eq!("甲辰", stem_branch(2024));
/// ```
pub fn stem_branch(year: i32) -> String {
    fmt::sexagenary(sexagenary_for_year(year))
}

/// 取得所給農曆年的生肖。早於 1900 年則回報 [`ConversionError::OutOfRangeYear`]。
///
/// # 用例
///
/// ```
/// use nongli::chinese::zodiac;
///
/// assert_eq!(Ok("鼠"), zodiac(1900));
/// assert_eq!(Ok("龙"), zodiac(2024));
/// assert!(zodiac(1899).is_err());
/// ```
pub fn zodiac(year: i32) -> Result<&'static str, ConversionError> {
    if year < table::FIRST_YEAR {
        return Err(ConversionError::OutOfRangeYear { year });
    }
    Ok(zodiac_of(year))
}

fn zodiac_of(year: i32) -> &'static str {
    ZODIAC[(year - table::FIRST_YEAR).rem_euclid(12) as usize]
}
