//! Decomposition of an instant into the seven cron field values.

use chrono::{Datelike, Timelike};

use cronpat_core::Field;

/// Field values of one instant, as the matchers see them.
///
/// Weekday follows the cron convention `0 = Sunday`. No timezone conversion
/// happens here: the fields are read exactly as the source value carries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeFields {
    pub second: i32,
    pub minute: i32,
    pub hour: i32,
    pub day_of_month: i32,
    pub month: i32,
    pub day_of_week: i32,
    pub year: i32,
}

impl TimeFields {
    pub fn from_datetime<T: Datelike + Timelike>(dt: &T) -> Self {
        Self {
            second: dt.second() as i32,
            minute: dt.minute() as i32,
            hour: dt.hour() as i32,
            day_of_month: dt.day() as i32,
            month: dt.month() as i32,
            day_of_week: dt.weekday().num_days_from_sunday() as i32,
            year: dt.year(),
        }
    }

    pub fn get(&self, field: Field) -> i32 {
        match field {
            Field::Second => self.second,
            Field::Minute => self.minute,
            Field::Hour => self.hour,
            Field::DayOfMonth => self.day_of_month,
            Field::Month => self.month,
            Field::DayOfWeek => self.day_of_week,
            Field::Year => self.year,
        }
    }

    /// Number of days in this instant's month.
    pub fn month_length(&self) -> i32 {
        days_in_month(self.year, self.month)
    }
}

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_month(year: i32, month: i32) -> i32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn fields_from_naive_datetime() {
        // 2024-03-10 was a Sunday.
        let dt = NaiveDate::from_ymd_opt(2024, 3, 10)
            .unwrap()
            .and_hms_opt(14, 5, 9)
            .unwrap();
        let fields = TimeFields::from_datetime(&dt);
        assert_eq!(
            fields,
            TimeFields {
                second: 9,
                minute: 5,
                hour: 14,
                day_of_month: 10,
                month: 3,
                day_of_week: 0,
                year: 2024,
            }
        );
        assert_eq!(fields.get(Field::Hour), 14);
        assert_eq!(fields.get(Field::DayOfWeek), 0);
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2023, 4), 30);
        assert_eq!(days_in_month(2023, 12), 31);
    }
}
