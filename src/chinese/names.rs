// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sexagenary cycle, stems, branches and seasons.
//!
//! Years and days are numbered `1..=60` in the sexagenary cycle. Number `n`
//! combines stem `(n − 1) mod 10` with branch `(n − 1) mod 12`, so `1` is
//! Jia-Zi and `60` is Gui-Hai.

use std::fmt;

use crate::fixed::FixedDate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Five phases (wuxing).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Polarity {
    Yang,
    Yin,
}

/// Heavenly stem (tiangan).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

impl Stem {
    pub const ALL: [Stem; 10] = [
        Stem::Jia,
        Stem::Yi,
        Stem::Bing,
        Stem::Ding,
        Stem::Wu,
        Stem::Ji,
        Stem::Geng,
        Stem::Xin,
        Stem::Ren,
        Stem::Gui,
    ];

    /// Stem of sexagenary number `n` (any integer, reduced modulo 60).
    #[inline]
    pub fn of_sexagenary(n: i64) -> Self {
        Self::ALL[(n - 1).rem_euclid(10) as usize]
    }

    /// Position in the cycle, `1..=10`.
    #[inline]
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    /// Pinyin name.
    pub fn name(self) -> &'static str {
        match self {
            Stem::Jia => "Jia",
            Stem::Yi => "Yi",
            Stem::Bing => "Bing",
            Stem::Ding => "Ding",
            Stem::Wu => "Wu",
            Stem::Ji => "Ji",
            Stem::Geng => "Geng",
            Stem::Xin => "Xin",
            Stem::Ren => "Ren",
            Stem::Gui => "Gui",
        }
    }

    pub fn character(self) -> char {
        ['甲', '乙', '丙', '丁', '戊', '己', '庚', '辛', '壬', '癸'][self as usize]
    }

    /// Consecutive pairs of stems share a phase: Jia and Yi are Wood, etc.
    pub fn element(self) -> Element {
        match self {
            Stem::Jia | Stem::Yi => Element::Wood,
            Stem::Bing | Stem::Ding => Element::Fire,
            Stem::Wu | Stem::Ji => Element::Earth,
            Stem::Geng | Stem::Xin => Element::Metal,
            Stem::Ren | Stem::Gui => Element::Water,
        }
    }

    /// Odd-numbered stems are yang.
    pub fn polarity(self) -> Polarity {
        if (self as u32) % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Earthly branch (dizhi).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

impl Branch {
    pub const ALL: [Branch; 12] = [
        Branch::Zi,
        Branch::Chou,
        Branch::Yin,
        Branch::Mao,
        Branch::Chen,
        Branch::Si,
        Branch::Wu,
        Branch::Wei,
        Branch::Shen,
        Branch::You,
        Branch::Xu,
        Branch::Hai,
    ];

    /// Branch of sexagenary number `n` (any integer, reduced modulo 60).
    #[inline]
    pub fn of_sexagenary(n: i64) -> Self {
        Self::ALL[(n - 1).rem_euclid(12) as usize]
    }

    /// Position in the cycle, `1..=12`.
    #[inline]
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    /// Pinyin name.
    pub fn name(self) -> &'static str {
        match self {
            Branch::Zi => "Zi",
            Branch::Chou => "Chou",
            Branch::Yin => "Yin",
            Branch::Mao => "Mao",
            Branch::Chen => "Chen",
            Branch::Si => "Si",
            Branch::Wu => "Wu",
            Branch::Wei => "Wei",
            Branch::Shen => "Shen",
            Branch::You => "You",
            Branch::Xu => "Xu",
            Branch::Hai => "Hai",
        }
    }

    pub fn character(self) -> char {
        [
            '子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥',
        ][self as usize]
    }

    pub fn element(self) -> Element {
        match self {
            Branch::Zi | Branch::Hai => Element::Water,
            Branch::Yin | Branch::Mao => Element::Wood,
            Branch::Si | Branch::Wu => Element::Fire,
            Branch::Shen | Branch::You => Element::Metal,
            Branch::Chou | Branch::Chen | Branch::Wei | Branch::Xu => Element::Earth,
        }
    }

    /// Season of the branch: Yin, Mao and Chen open the year in spring.
    pub fn season(self) -> Season {
        match self {
            Branch::Yin | Branch::Mao | Branch::Chen => Season::Spring,
            Branch::Si | Branch::Wu | Branch::Wei => Season::Summer,
            Branch::Shen | Branch::You | Branch::Xu => Season::Autumn,
            Branch::Hai | Branch::Zi | Branch::Chou => Season::Winter,
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
        })
    }
}

/// Season of a lunar month together with the month's branch.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MonthSeason {
    pub season: Season,
    pub branch: Branch,
}

/// Season and branch of lunar `month` (`1..=12`); month 1 is Yin, month 11
/// is Zi. Returns `None` for month numbers outside `1..=12`.
///
/// # Example
///
/// ```
/// use lunisolar::{season_for_month, Branch, Season};
///
/// let s = season_for_month(5).unwrap();
/// assert_eq!((Season::Summer, Branch::Wu), (s.season, s.branch));
/// assert!(season_for_month(13).is_none());
/// ```
pub fn season_for_month(month: u32) -> Option<MonthSeason> {
    if !(1..=12).contains(&month) {
        return None;
    }
    let branch = Branch::ALL[((month + 1) % 12) as usize];
    Some(MonthSeason {
        season: branch.season(),
        branch,
    })
}

/// `"<Stem>-<Branch>"` name of sexagenary number `n`.
///
/// # Example
///
/// ```
/// use lunisolar::sexagenary_name;
///
/// assert_eq!("Jia-Zi", sexagenary_name(1));
/// assert_eq!("Gui-Hai", sexagenary_name(60));
/// ```
pub fn sexagenary_name(n: i64) -> String {
    format!("{}-{}", Stem::of_sexagenary(n), Branch::of_sexagenary(n))
}

/// Two-character name of sexagenary number `n`, e.g. `甲子`.
pub fn sexagenary_characters(n: i64) -> String {
    [
        Stem::of_sexagenary(n).character(),
        Branch::of_sexagenary(n).character(),
    ]
    .iter()
    .collect()
}

/// Sexagenary number `1..=60` of the day `date` (the day pillar).
///
/// January 1, 2000 is day 55, Wu-Wu.
#[inline]
pub fn sexagenary_day(date: FixedDate) -> u32 {
    ((date.value() + 14).rem_euclid(60) + 1) as u32
}

/// Chinese name of a lunar month, with the 閏 prefix for leap months.
/// Months 11 and 12 are 冬月 and 臘月. `None` outside `1..=12`.
pub fn month_label(month: u32, is_leap: bool) -> Option<String> {
    let number = match month {
        1 => "正",
        2..=10 => NUMERALS[month as usize % 10],
        11 => "冬",
        12 => "臘",
        _ => return None,
    };
    let prefix = if is_leap { "閏" } else { "" };
    Some(format!("{prefix}{number}月"))
}

/// Chinese name of a day of the lunar month: 初一 … 初十, 十一 …, 廿一 …,
/// 三十. `None` outside `1..=30`.
pub fn day_label(day: u32) -> Option<String> {
    let tens = match day {
        1..=10 => "初",
        11..=19 => "十",
        20 => "二",
        21..=29 => "廿",
        30 => "三",
        _ => return None,
    };
    Some(format!("{tens}{}", NUMERALS[(day % 10) as usize]))
}

/// Numerals `一..九` at `1..=9`, with 十 at index 0.
const NUMERALS: [&str; 10] = ["十", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed::fixed_from_gregorian;

    #[test]
    fn cycle_endpoints() {
        assert_eq!("Jia-Zi", sexagenary_name(1));
        assert_eq!("Yi-Chou", sexagenary_name(2));
        assert_eq!("Jia-Xu", sexagenary_name(11));
        assert_eq!("Gui-Hai", sexagenary_name(60));
        assert_eq!("甲子", sexagenary_characters(1));
        assert_eq!("癸亥", sexagenary_characters(60));
    }

    #[test]
    fn sexagenary_periodicity() {
        for n in 1..=60 {
            assert_eq!(sexagenary_name(n), sexagenary_name(n + 60));
            assert_eq!(sexagenary_name(n), sexagenary_name(n - 60));
        }
    }

    #[test]
    fn sixty_distinct_names() {
        let mut names: Vec<String> = (1..=60).map(sexagenary_name).collect();
        names.sort();
        names.dedup();
        assert_eq!(60, names.len());
    }

    #[test]
    fn stem_attributes() {
        assert_eq!(Element::Wood, Stem::Jia.element());
        assert_eq!(Element::Water, Stem::Gui.element());
        assert_eq!(Polarity::Yang, Stem::Jia.polarity());
        assert_eq!(Polarity::Yin, Stem::Yi.polarity());
        assert_eq!('己', Stem::Ji.character());
        assert_eq!(6, Stem::Ji.number());
    }

    #[test]
    fn branch_attributes() {
        assert_eq!(Element::Water, Branch::Zi.element());
        assert_eq!(Element::Earth, Branch::Xu.element());
        assert_eq!('亥', Branch::Hai.character());
        assert_eq!(12, Branch::Hai.number());
    }

    #[test]
    fn month_seasons() {
        let expected = [
            (1, Season::Spring, Branch::Yin),
            (3, Season::Spring, Branch::Chen),
            (4, Season::Summer, Branch::Si),
            (7, Season::Autumn, Branch::Shen),
            (10, Season::Winter, Branch::Hai),
            (11, Season::Winter, Branch::Zi),
            (12, Season::Winter, Branch::Chou),
        ];
        for (month, season, branch) in expected {
            assert_eq!(Some(MonthSeason { season, branch }), season_for_month(month));
        }
        assert_eq!(None, season_for_month(0));
    }

    #[test]
    fn day_pillar() {
        let date = fixed_from_gregorian(2000, 1, 1);
        assert_eq!(55, sexagenary_day(date));
        assert_eq!("Wu-Wu", sexagenary_name(sexagenary_day(date) as i64));
        assert_eq!(56, sexagenary_day(date + 1));
        assert_eq!(sexagenary_day(date), sexagenary_day(date + 60));
    }

    #[test]
    fn chinese_labels() {
        for (label, month, leap) in [
            ("正月", 1, false),
            ("閏四月", 4, true),
            ("十月", 10, false),
            ("冬月", 11, false),
            ("臘月", 12, false),
        ] {
            assert_eq!(Some(label.to_owned()), month_label(month, leap));
        }
        for (label, day) in [
            ("初一", 1),
            ("初十", 10),
            ("十一", 11),
            ("二十", 20),
            ("廿五", 25),
            ("三十", 30),
        ] {
            assert_eq!(Some(label.to_owned()), day_label(day));
        }
        assert_eq!(None, month_label(13, false));
        assert_eq!(None, day_label(31));
    }
}
