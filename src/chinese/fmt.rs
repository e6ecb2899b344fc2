//! 格式化日期相關功能
//!
//! 輸出文本一律用簡體字，如「闰」「腊月」。

use chrono::{Datelike, NaiveDate};

use super::{LunarDate, Month, term};
use crate::error::ConversionError;

/// 漢數字，第 `1..=9` 項分別為「一」到「九」。為便於格式化日期，第 0 項為「十」。
pub const NUM_CHINESE: &[&str] = &["十", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// 數序月名，不含「月」字。
const MONTH_NUMERAL: &[&str] = &[
    "一", "二", "三", "四", "五", "六", "七", "八", "九", "十", "十一", "十二",
];
/// 傳統月名，不含「月」字。
const MONTH_TRADITIONAL: &[&str] = &[
    "正", "二", "三", "四", "五", "六", "七", "八", "九", "十", "冬", "腊",
];
/// 日名十位前綴，依 `日 / 10` 取用。
const DAY_TENS: &[&str] = &["初", "十", "廿", "卅"];

/// 干支序號轉為文本形式，`1` 為甲子，`60` 為癸亥。
///
/// # 用例
///
/// ```
/// use nongli::chinese;
///
/// assert_eq!("乙巳", chinese::fmt::sexagenary(42));
/// ```
pub fn sexagenary(num: u32) -> String {
    static STEMS: &[&str] = &["癸", "甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬"];
    static BRANCHES: &[&str] = &[
        "亥", "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌",
    ];
    STEMS[(num % 10) as usize].to_owned() + BRANCHES[(num % 12) as usize]
}

/// 取得所給公曆日期的日干支序號，`1` 為甲子。
///
/// # 用例
///
/// ```
/// use chrono::NaiveDate;
/// use nongli::chinese::fmt;
///
/// let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
/// assert_eq!(55, fmt::sexagenary_for_day(date)); // 戊午
/// ```
pub fn sexagenary_for_day(date: NaiveDate) -> u32 {
    // 儒略日數 = num_days_from_ce + 1721425
    ((date.num_days_from_ce() as i64 + 1721425 + 49).rem_euclid(60) + 1) as u32
}

/// 取得所給公曆日期的月干支序號，`1` 為甲子。
///
/// 干支紀月以「節」為界，每月交節之日起換月，如立春起為寅月，不依農曆月份。
/// 日期所在年份超出節氣速查表則回報 [`ConversionError::OutOfRangeYear`]。
///
/// # 用例
///
/// ```
/// use chrono::NaiveDate;
/// use nongli::chinese::fmt;
///
/// let date = NaiveDate::from_ymd_opt(2020, 2, 4).unwrap(); // 立春
/// assert_eq!(Ok("戊寅".to_owned()), fmt::sexagenary_for_month(date).map(fmt::sexagenary));
/// let date = NaiveDate::from_ymd_opt(2020, 2, 3).unwrap();
/// assert_eq!(Ok("丁丑".to_owned()), fmt::sexagenary_for_month(date).map(fmt::sexagenary));
/// ```
pub fn sexagenary_for_month(date: NaiveDate) -> Result<u32, ConversionError> {
    let first = term::day_of(date.year(), 2 * date.month0())?;
    // 1900 年 1 月小寒前為丙子月，序號 13
    let mut months = (date.year() - term::FIRST_YEAR) * 12 + date.month0() as i32 + 12;
    if date.day() >= first {
        months += 1;
    }
    Ok((months.rem_euclid(60) + 1) as u32)
}

/// 取得節氣名，`0` 為小寒、`2` 為立春、`23` 為冬至，序號以 24 為週期。
///
/// # 用例
///
/// ```
/// use nongli::chinese;
///
/// assert_eq!("谷雨", chinese::fmt::solar_term(7));
/// assert_eq!("小寒", chinese::fmt::solar_term(24));
/// ```
pub fn solar_term(n: u32) -> &'static str {
    const NAMES: &[&str] = &[
        "小寒", "大寒", "立春", "雨水", "惊蛰", "春分", "清明", "谷雨", "立夏", "小满", "芒种",
        "夏至", "小暑", "大暑", "立秋", "处暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪",
        "大雪", "冬至",
    ];
    NAMES[n.rem_euclid(24) as usize]
}

/// 取得傳統月名（含「月」字），正月、冬月、腊月另有稱呼。
///
/// # 用例
///
/// ```
/// use nongli::chinese::{self, Month::*};
///
/// assert_eq!("冬月", chinese::fmt::month(Common(11)));
/// assert_eq!("闰正月", chinese::fmt::month(Leap(1)));
/// ```
///
/// # Panics
///
/// 若月序號不在 `1..=12` 間則 panic。
pub fn month(m: Month) -> String {
    month_with(m, MONTH_TRADITIONAL)
}

/// 取得數序月名（含「月」字），如「一月」「十二月」。
///
/// # 用例
///
/// ```
/// use nongli::chinese::{self, Month::*};
///
/// assert_eq!("十二月", chinese::fmt::month_numeral(Common(12)));
/// assert_eq!("闰四月", chinese::fmt::month_numeral(Leap(4)));
/// ```
///
/// # Panics
///
/// 若月序號不在 `1..=12` 間則 panic。
pub fn month_numeral(m: Month) -> String {
    month_with(m, MONTH_NUMERAL)
}

fn month_with(m: Month, names: &[&str]) -> String {
    let num = m.num();
    assert!((1..=12).contains(&num), "month {} not in 1..=12", num);
    let mut rt = String::new();
    if m.is_leap() {
        rt += "闰";
    }
    rt += names[num as usize - 1];
    rt += "月";
    rt
}

/// 取得日名，前十日為「初一」到「初十」，第 21 至 29 日為「廿一」到「廿九」。
///
/// # 用例
///
/// ```
/// use nongli::chinese;
///
/// assert_eq!("初十", chinese::fmt::day(10));
/// assert_eq!("廿五", chinese::fmt::day(25));
/// assert_eq!("三十", chinese::fmt::day(30));
/// ```
///
/// # Panics
///
/// 若日序號不在 `1..=30` 間則 panic。
pub fn day(d: u32) -> String {
    match d {
        10 => "初十".to_owned(),
        20 => "二十".to_owned(),
        30 => "三十".to_owned(),
        1..=29 => DAY_TENS[(d / 10) as usize].to_owned() + NUM_CHINESE[(d % 10) as usize],
        _ => panic!("day {} not in 1..=30", d),
    }
}

/// 取得該日全部節日，以「,」連接，無節日則為空字符串。
///
/// # 用例
///
/// ```
/// use nongli::LunarDate;
/// use nongli::chinese::fmt;
///
/// let date = LunarDate::from_components(2024, 1, 15).unwrap();
/// assert_eq!("元宵节,上元节", fmt::festivals(&date));
/// ```
pub fn festivals(date: &LunarDate) -> String {
    date.festivals().join(",")
}

/// 農曆日期的文本格式
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum DisplayFormat {
    /// 干支紀年、數序紀月、數序紀日，如「农历庚子年一月初一」
    Gss,
    /// 生肖紀年、數序紀月、數序紀日，如「农历鼠年一月初一」
    Xss,
    /// 干支生肖紀年、傳統月名、數序紀日，如「农历庚子鼠年正月初一」
    #[default]
    Gxss,
    /// 干支紀年、數序紀月、干支紀日，如「农历庚子年一月丁卯日」
    Gsg,
    /// 干支紀年、干支紀月、干支紀日，如「农历庚子年丁丑月丁卯日」，月以節氣為界
    Ggg,
    /// 公元年加干支紀年，如「公元2020年农历庚子年一月初一」
    Mix,
}

/// 依 `format` 格式化農曆日期。
///
/// # 用例
///
/// ```
/// use nongli::LunarDate;
/// use nongli::chinese::fmt::{self, DisplayFormat};
///
/// let date = LunarDate::from_components(2020, 1, 1).unwrap();
/// assert_eq!("农历庚子鼠年正月初一", fmt::display(&date, DisplayFormat::Gxss));
/// assert_eq!("公元2020年农历庚子年一月初一", fmt::display(&date, DisplayFormat::Mix));
/// ```
pub fn display(date: &LunarDate, format: DisplayFormat) -> String {
    let year = date.stem_branch_name();
    let month = month_numeral(date.lunar_month());
    let day = day(date.day());
    match format {
        DisplayFormat::Gss => format!("农历{year}年{month}{day}"),
        DisplayFormat::Xss => format!("农历{}年{month}{day}", date.zodiac_name()),
        DisplayFormat::Gxss => format!(
            "农历{year}{}年{}{day}",
            date.zodiac_name(),
            date.chinese_month_name()
        ),
        DisplayFormat::Gsg => format!(
            "农历{year}年{month}{}日",
            sexagenary(sexagenary_for_day(date.to_solar()))
        ),
        DisplayFormat::Ggg => format!("农历{}", date.cyclical_ymd()),
        DisplayFormat::Mix => format!("公元{}年农历{year}年{month}{day}", date.year()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sexagenary() {
        for (std, num) in [("甲子", 1), ("庚子", 37), ("庚寅", 27), ("癸亥", 60)] {
            assert_eq!(std, sexagenary(num));
        }
    }

    #[test]
    fn test_sexagenary_for_day() {
        for ((y, m, d), std) in [((1970, 1, 1), 18), ((2021, 9, 8), 56), ((2000, 1, 1), 55)] {
            let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
            assert_eq!(std, sexagenary_for_day(date), "{date}");
        }
    }

    #[test]
    fn test_sexagenary_for_month() {
        for ((y, m, d), std) in [
            ((1900, 1, 5), "丙子"),
            ((1900, 1, 6), "丁丑"),
            ((1993, 1, 6), "癸丑"),
            ((1992, 12, 26), "壬子"),
            ((2020, 1, 25), "丁丑"),
            ((2020, 2, 3), "丁丑"),
            ((2020, 2, 4), "戊寅"),
            ((2020, 8, 28), "甲申"),
            ((2024, 2, 10), "丙寅"),
        ] {
            let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
            assert_eq!(Ok(std.to_owned()), sexagenary_for_month(date).map(sexagenary), "{date}");
        }
        let date = NaiveDate::from_ymd_opt(2101, 1, 1).unwrap();
        assert_eq!(
            Err(ConversionError::OutOfRangeYear { year: 2101 }),
            sexagenary_for_month(date)
        );
    }

    #[test]
    fn test_solar_term() {
        for (std, n) in [("小寒", 0), ("立春", 2), ("惊蛰", 4), ("夏至", 11), ("冬至", 23), ("大寒", 25)] {
            assert_eq!(std, solar_term(n));
        }
    }

    #[test]
    fn test_month() {
        use Month::*;
        for (std, m) in [
            ("正月", Common(1)),
            ("十月", Common(10)),
            ("冬月", Common(11)),
            ("腊月", Common(12)),
            ("闰六月", Leap(6)),
        ] {
            assert_eq!(std, month(m));
        }
        for (std, m) in [
            ("一月", Common(1)),
            ("十一月", Common(11)),
            ("十二月", Common(12)),
            ("闰二月", Leap(2)),
        ] {
            assert_eq!(std, month_numeral(m));
        }
    }

    #[test]
    #[should_panic(expected = "month 13 not in 1..=12")]
    fn test_month_out_of_range() {
        month(Month::Common(13));
    }

    #[test]
    fn test_day() {
        let stds = [
            "初一", "初二", "初三", "初四", "初五", "初六", "初七", "初八", "初九", "初十",
            "十一", "十二", "十三", "十四", "十五", "十六", "十七", "十八", "十九", "二十",
            "廿一", "廿二", "廿三", "廿四", "廿五", "廿六", "廿七", "廿八", "廿九", "三十",
        ];
        for (d, std) in (1..).zip(stds) {
            assert_eq!(std, day(d), "day {d}");
        }
    }

    #[test]
    #[should_panic(expected = "day 31 not in 1..=30")]
    fn test_day_out_of_range() {
        day(31);
    }

    #[test]
    fn test_display() {
        let date = LunarDate::from_components(2020, 1, 1).unwrap();
        for (format, std) in [
            (DisplayFormat::Gss, "农历庚子年一月初一"),
            (DisplayFormat::Xss, "农历鼠年一月初一"),
            (DisplayFormat::Gxss, "农历庚子鼠年正月初一"),
            (DisplayFormat::Gsg, "农历庚子年一月丁卯日"),
            (DisplayFormat::Ggg, "农历庚子年丁丑月丁卯日"),
            (DisplayFormat::Mix, "公元2020年农历庚子年一月初一"),
        ] {
            assert_eq!(std, display(&date, format), "{format:?}");
        }
        let leap = LunarDate::from_components(2020, 4, 2).unwrap();
        assert_eq!("农历庚子鼠年闰四月初二", display(&leap, DisplayFormat::default()));
        // 立春後換寅月，農曆仍在正月
        let date = LunarDate::from_components(2020, 1, 11).unwrap();
        assert_eq!("农历庚子年戊寅月丁丑日", display(&date, DisplayFormat::Ggg));
    }
}
