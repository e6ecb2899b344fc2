//! Helpers tied to the Gregorian (solar) calendar.

use crate::error::ConversionError;

/// First day of the second sign in each solar month, January first.
const CUTOVER_DAYS: [u32; 12] = [20, 19, 21, 20, 21, 22, 23, 23, 23, 24, 23, 22];
/// Signs in calendar order, starting from the one in effect on January 1;
/// Capricorn appears at both ends.
const SIGNS: [&str; 13] = [
    "摩羯座", "水瓶座", "双鱼座", "白羊座", "金牛座", "双子座", "巨蟹座", "狮子座", "处女座",
    "天秤座", "天蝎座", "射手座", "摩羯座",
];

/// Returns the western zodiac sign (in Chinese) for a solar `month` and
/// `day`.
///
/// Fails with [`ConversionError::InvalidSolarDate`] if `month` is not in
/// `1..=12` or `day` is not in `1..=31`. The day is not checked against the
/// actual length of the month.
///
/// # Example
///
/// ```
/// use nongli::gregorian::western_zodiac;
///
/// assert_eq!(Ok("白羊座"), western_zodiac(3, 21));
/// assert_eq!(Ok("双鱼座"), western_zodiac(3, 20));
/// ```
pub fn western_zodiac(month: u32, day: u32) -> Result<&'static str, ConversionError> {
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(ConversionError::InvalidSolarDate { month, day });
    }
    let idx = month as usize - 1;
    Ok(if day < CUTOVER_DAYS[idx] {
        SIGNS[idx]
    } else {
        SIGNS[idx + 1]
    })
}
