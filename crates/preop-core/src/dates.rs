//! Calendar helpers: day-block normalization and week identifiers.
//!
//! A week is identified by its Monday, formatted `YYYY-MM-DD`. All
//! arithmetic is on [`NaiveDate`], so there is no clock or timezone input
//! to destabilize the result.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use preop_map::DayBlock;

/// Day block for a calendar date.
pub fn block_for(date: NaiveDate) -> DayBlock {
    match date.weekday() {
        Weekday::Mon => DayBlock::Lunes,
        Weekday::Tue => DayBlock::Martes,
        Weekday::Wed => DayBlock::Miercoles,
        Weekday::Thu => DayBlock::Jueves,
        Weekday::Fri => DayBlock::Viernes,
        Weekday::Sat => DayBlock::Sabado,
        Weekday::Sun => DayBlock::Domingo,
    }
}

/// The Monday on-or-before `date`.
pub fn week_monday(date: NaiveDate) -> NaiveDate {
    let back = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(back)).unwrap_or(date)
}

/// Week identifier: the Monday of `date`'s week as `YYYY-MM-DD`.
pub fn week_id(date: NaiveDate) -> String {
    week_monday(date).format("%Y-%m-%d").to_string()
}

/// Form date format: `D/M/YYYY`, no zero padding.
pub fn format_day(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.day(), date.month(), date.year())
}

/// Month-year label for the form header, e.g. `MARZO/2024`.
pub fn month_year_label(date: NaiveDate) -> String {
    const MONTHS: [&str; 12] = [
        "ENERO",
        "FEBRERO",
        "MARZO",
        "ABRIL",
        "MAYO",
        "JUNIO",
        "JULIO",
        "AGOSTO",
        "SEPTIEMBRE",
        "OCTUBRE",
        "NOVIEMBRE",
        "DICIEMBRE",
    ];
    let month = MONTHS[date.month0() as usize];
    format!("{month}/{}", date.year())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use preop_map::DayBlock;

    use super::{block_for, format_day, month_year_label, week_id, week_monday};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn thursday_2024_03_14() {
        let thursday = date(2024, 3, 14);
        assert_eq!(block_for(thursday), DayBlock::Jueves);
        assert_eq!(block_for(thursday).ordinal(), 3);
        assert_eq!(week_id(thursday), "2024-03-11");
    }

    #[test]
    fn week_id_constant_across_the_span() {
        let monday = date(2024, 3, 11);
        for offset in 0..7 {
            let d = monday + chrono::Days::new(offset);
            assert_eq!(week_id(d), "2024-03-11");
        }
        assert_eq!(week_id(date(2024, 3, 18)), "2024-03-18");
        assert_eq!(week_id(date(2024, 3, 10)), "2024-03-04");
    }

    #[test]
    fn week_id_crosses_month_and_year_boundaries() {
        // 2024-01-01 was a Monday; the prior week's Monday is 2023-12-25.
        assert_eq!(week_id(date(2024, 1, 1)), "2024-01-01");
        assert_eq!(week_id(date(2023, 12, 31)), "2023-12-25");
        assert_eq!(week_monday(date(2024, 3, 1)), date(2024, 2, 26));
    }

    #[test]
    fn day_format_has_no_padding() {
        assert_eq!(format_day(date(2024, 3, 4)), "4/3/2024");
        assert_eq!(format_day(date(2024, 12, 25)), "25/12/2024");
    }

    #[test]
    fn month_year_labels() {
        assert_eq!(month_year_label(date(2024, 3, 14)), "MARZO/2024");
        assert_eq!(month_year_label(date(2025, 1, 2)), "ENERO/2025");
        assert_eq!(month_year_label(date(2025, 12, 2)), "DICIEMBRE/2025");
    }
}
