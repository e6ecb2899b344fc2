//! 農曆節日

/// 固定日期的農曆節日，以 `MMDD` 為鍵。同一日可有多個節日。
pub const FESTIVALS: &[(&str, &str)] = &[
    ("0101", "春节"),
    ("0102", "犬日"),
    ("0103", "猪日"),
    ("0104", "羊日"),
    ("0105", "破五"),
    ("0107", "人日"),
    ("0115", "元宵节"),
    ("0115", "上元节"),
    ("0202", "龙抬头"),
    ("0303", "上巳节"),
    ("0408", "浴佛节"),
    ("0505", "端午节"),
    ("0606", "天贶节"),
    ("0707", "七夕节"),
    ("0715", "中元节"),
    ("0815", "中秋节"),
    ("0909", "重阳节"),
    ("1001", "寒衣节"),
    ("1015", "下元节"),
    ("1208", "腊八节"),
    ("1223", "北方小年"),
    ("1224", "南方小年"),
];

/// 除夕，臘月最末日，依該年臘月大小而定。
pub const NEW_YEARS_EVE: &str = "除夕";

/// 查找 `month` 月 `day` 日的固定節日，無則返回空列表。
///
/// # 用例
///
/// ```
/// use nongli::chinese::festival;
///
/// assert_eq!(vec!["元宵节", "上元节"], festival::on(1, 15));
/// assert!(festival::on(2, 3).is_empty());
/// ```
pub fn on(month: u32, day: u32) -> Vec<&'static str> {
    let key = format!("{month:02}{day:02}");
    FESTIVALS
        .iter()
        .filter(|(k, _)| *k == key)
        .map(|&(_, name)| name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_valid() {
        for (key, name) in FESTIVALS {
            assert_eq!(4, key.len(), "{name}");
            let month: u32 = key[..2].parse().unwrap();
            let day: u32 = key[2..].parse().unwrap();
            assert!((1..=12).contains(&month), "{name}");
            assert!((1..=30).contains(&day), "{name}");
        }
    }

    #[test]
    fn lookup() {
        for ((m, d), std) in [
            ((1, 1), vec!["春节"]),
            ((1, 15), vec!["元宵节", "上元节"]),
            ((8, 15), vec!["中秋节"]),
            ((12, 8), vec!["腊八节"]),
            ((2, 3), vec![]),
            ((12, 30), vec![]),
        ] {
            assert_eq!(std, on(m, d), "{m:02}{d:02}");
        }
    }
}
