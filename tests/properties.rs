use proptest::prelude::*;

use lunisolar::{
    chinese_from_fixed, current_major_solar_term, fixed_from_gregorian, gregorian_from_fixed,
    lunar_longitude, sexagenary_day, sexagenary_name, solar_longitude, FixedDate, UniversalTime,
};

/// Fixed dates from 1800-01-01 to 2200-12-31.
fn modern_date() -> impl Strategy<Value = FixedDate> {
    (657_072i64..803_533).prop_map(FixedDate::new)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn gregorian_roundtrip(date in -1_000_000i64..1_500_000) {
        let date = FixedDate::new(date);
        let (y, m, d) = gregorian_from_fixed(date);
        prop_assert_eq!(date, fixed_from_gregorian(y, m, d));
        prop_assert_eq!(date, FixedDate::from_gregorian(y, m, d).unwrap());
    }

    #[test]
    fn longitudes_are_normalized(moment in 600_000.0f64..850_000.0) {
        let t = UniversalTime::new(moment);
        let sun = solar_longitude(t);
        let moon = lunar_longitude(t);
        prop_assert!((0.0..360.0).contains(&sun));
        prop_assert!((0.0..360.0).contains(&moon));
    }

    #[test]
    fn sexagenary_cycles_repeat(n in -10_000i64..10_000, day in 600_000i64..800_000) {
        prop_assert_eq!(sexagenary_name(n), sexagenary_name(n + 60));
        let date = FixedDate::new(day);
        prop_assert_eq!(sexagenary_day(date), sexagenary_day(date + 60));
        prop_assert!((1..=60).contains(&sexagenary_day(date)));
    }

    #[test]
    fn major_term_in_range(date in modern_date()) {
        prop_assert!((1..=12).contains(&current_major_solar_term(date)));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn chinese_fields_in_range(date in modern_date()) {
        let chinese = chinese_from_fixed(date).unwrap();
        prop_assert!((1..=60).contains(&chinese.year));
        prop_assert!((1..=12).contains(&chinese.month));
        prop_assert!((1..=30).contains(&chinese.day));
        prop_assert_eq!(sexagenary_name(chinese.year as i64), chinese.name);
    }

    #[test]
    fn consecutive_days_advance_the_chinese_date(date in modern_date()) {
        let today = chinese_from_fixed(date).unwrap();
        let tomorrow = chinese_from_fixed(date + 1).unwrap();
        if tomorrow.day == 1 {
            prop_assert!(today.day == 29 || today.day == 30);
            if tomorrow.is_leap_month {
                prop_assert_eq!(today.month, tomorrow.month);
                prop_assert!(!today.is_leap_month);
            } else {
                prop_assert_eq!(today.month % 12 + 1, tomorrow.month);
            }
        } else {
            prop_assert_eq!(today.day + 1, tomorrow.day);
            prop_assert_eq!(today.month, tomorrow.month);
            prop_assert_eq!(today.is_leap_month, tomorrow.is_leap_month);
        }
    }

    #[test]
    fn to_fixed_inverts_chinese_from_fixed(date in modern_date()) {
        let chinese = chinese_from_fixed(date).unwrap();
        prop_assert_eq!(date, chinese.to_fixed().unwrap());
    }

    #[test]
    fn at_most_one_leap_month_per_year(date in modern_date()) {
        let mut start = date - (chinese_from_fixed(date).unwrap().day as i64 - 1);
        let mut leaps = 0;
        for _ in 0..13 {
            let chinese = chinese_from_fixed(start).unwrap();
            if chinese.is_leap_month {
                leaps += 1;
            }
            start = start + 30;
            start = start - (chinese_from_fixed(start).unwrap().day as i64 - 1);
        }
        prop_assert!(leaps <= 1);
    }
}
