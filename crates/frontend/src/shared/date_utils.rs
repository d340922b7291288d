/// Utilities for date formatting and the Monday-based work week.
use chrono::{Datelike, Days, NaiveDate};

/// Format a date as DD.MM.YYYY.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// ISO format for `<input type="date">` values.
pub fn to_input_value(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn from_input_value(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Indonesian day name for a plan day (1 = Monday .. 6 = Saturday).
pub fn day_name(day: u8) -> &'static str {
    match day {
        1 => "Senin",
        2 => "Selasa",
        3 => "Rabu",
        4 => "Kamis",
        5 => "Jumat",
        6 => "Sabtu",
        _ => "",
    }
}

/// The Monday of the week containing `date`.
pub fn monday_of_week(date: NaiveDate) -> NaiveDate {
    let back = date.weekday().num_days_from_monday() as u64;
    date.checked_sub_days(Days::new(back)).unwrap_or(date)
}

/// Calendar dates of the working days (Mon..Sat) of the current week.
pub fn working_week(today: NaiveDate) -> [NaiveDate; 6] {
    let monday = monday_of_week(today);
    std::array::from_fn(|i| {
        monday
            .checked_add_days(Days::new(i as u64))
            .unwrap_or(monday)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(format_date(date), "15.03.2024");
    }

    #[test]
    fn test_input_value_round_trip() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(to_input_value(date), "2024-12-31");
        assert_eq!(from_input_value("2024-12-31"), Some(date));
        assert_eq!(from_input_value("bogus"), None);
    }

    #[test]
    fn monday_of_week_handles_sunday() {
        // 2024-03-17 is a Sunday; its week started on the 11th
        let sunday = NaiveDate::from_ymd_opt(2024, 3, 17).unwrap();
        assert_eq!(
            monday_of_week(sunday),
            NaiveDate::from_ymd_opt(2024, 3, 11).unwrap()
        );
    }

    #[test]
    fn working_week_runs_monday_to_saturday() {
        let wednesday = NaiveDate::from_ymd_opt(2024, 3, 13).unwrap();
        let week = working_week(wednesday);
        assert_eq!(week[0], NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
        assert_eq!(week[5], NaiveDate::from_ymd_opt(2024, 3, 16).unwrap());
    }

    #[test]
    fn test_day_name() {
        assert_eq!(day_name(1), "Senin");
        assert_eq!(day_name(6), "Sabtu");
        assert_eq!(day_name(7), "");
    }
}
