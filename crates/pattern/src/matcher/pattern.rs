//! Seven-field composite matcher for one schedule alternative.

use std::fmt;

use chrono::{Datelike, Timelike};

use cronpat_core::{DayMatch, Field};

use super::ValueMatcher;
use crate::time::TimeFields;

/// One fully compiled alternative of a schedule.
///
/// Immutable after construction; safe to share across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatcher {
    second: ValueMatcher,
    minute: ValueMatcher,
    hour: ValueMatcher,
    day_of_month: ValueMatcher,
    month: ValueMatcher,
    day_of_week: ValueMatcher,
    year: ValueMatcher,
    day_match: DayMatch,
}

impl PatternMatcher {
    /// Assemble from matchers in expression order
    /// (second, minute, hour, day-of-month, month, day-of-week, year).
    pub fn new(matchers: [ValueMatcher; 7], day_match: DayMatch) -> Self {
        let [second, minute, hour, day_of_month, month, day_of_week, year] = matchers;
        Self {
            second,
            minute,
            hour,
            day_of_month,
            month,
            day_of_week,
            year,
            day_match,
        }
    }

    pub fn get(&self, field: Field) -> &ValueMatcher {
        match field {
            Field::Second => &self.second,
            Field::Minute => &self.minute,
            Field::Hour => &self.hour,
            Field::DayOfMonth => &self.day_of_month,
            Field::Month => &self.month,
            Field::DayOfWeek => &self.day_of_week,
            Field::Year => &self.year,
        }
    }

    pub fn day_match(&self) -> DayMatch {
        self.day_match
    }

    /// Check an instant, seconds included.
    pub fn matches<T: Datelike + Timelike>(&self, dt: &T) -> bool {
        self.matches_fields(&TimeFields::from_datetime(dt), true)
    }

    /// Check decomposed field values. With `match_second == false` the
    /// seconds matcher is skipped.
    pub fn matches_fields(&self, fields: &TimeFields, match_second: bool) -> bool {
        (!match_second || self.second.matches(fields.second))
            && self.minute.matches(fields.minute)
            && self.hour.matches(fields.hour)
            && self.month.matches(fields.month)
            && self.year.matches(fields.year)
            && self.matches_day(fields)
    }

    fn matches_day(&self, fields: &TimeFields) -> bool {
        let dom = self
            .day_of_month
            .matches_day_of_month(fields.day_of_month, fields.month_length());
        let dow = self.day_of_week.matches(fields.day_of_week);

        match self.day_match {
            DayMatch::All => dom && dow,
            // An unrestricted side never widens the match.
            DayMatch::Either if self.day_of_month.is_always() || self.day_of_week.is_always() => {
                dom && dow
            }
            DayMatch::Either => dom || dow,
        }
    }
}

impl fmt::Display for PatternMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = Field::ALL
            .iter()
            .map(|field| self.get(*field).to_string())
            .collect::<Vec<_>>();
        f.write_str(&parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::{DayOfMonthMatcher, DenseMatcher};

    fn dense(field: Field, values: &[i32]) -> ValueMatcher {
        ValueMatcher::Dense(DenseMatcher::new(field, values))
    }

    fn fields(day_of_month: i32, day_of_week: i32) -> TimeFields {
        TimeFields {
            second: 0,
            minute: 0,
            hour: 0,
            day_of_month,
            month: 6,
            day_of_week,
            year: 2025,
        }
    }

    fn midnight(day_of_month: ValueMatcher, day_of_week: ValueMatcher, mode: DayMatch) -> PatternMatcher {
        PatternMatcher::new(
            [
                dense(Field::Second, &[0]),
                dense(Field::Minute, &[0]),
                dense(Field::Hour, &[0]),
                day_of_month,
                ValueMatcher::Always,
                day_of_week,
                ValueMatcher::Always,
            ],
            mode,
        )
    }

    #[test]
    fn all_mode_requires_both_day_fields() {
        let p = midnight(
            ValueMatcher::DayOfMonth(DayOfMonthMatcher::new(&[1])),
            dense(Field::DayOfWeek, &[1]),
            DayMatch::All,
        );
        assert!(p.matches_fields(&fields(1, 1), true));
        assert!(!p.matches_fields(&fields(1, 2), true));
        assert!(!p.matches_fields(&fields(2, 1), true));
    }

    #[test]
    fn either_mode_accepts_one_day_field() {
        let p = midnight(
            ValueMatcher::DayOfMonth(DayOfMonthMatcher::new(&[1])),
            dense(Field::DayOfWeek, &[1]),
            DayMatch::Either,
        );
        assert!(p.matches_fields(&fields(1, 2), true));
        assert!(p.matches_fields(&fields(2, 1), true));
        assert!(!p.matches_fields(&fields(2, 2), true));
    }

    #[test]
    fn either_mode_with_wildcard_side_is_conjunction() {
        let p = midnight(ValueMatcher::Always, dense(Field::DayOfWeek, &[1]), DayMatch::Either);
        assert!(p.matches_fields(&fields(9, 1), true));
        assert!(!p.matches_fields(&fields(9, 2), true));
    }

    #[test]
    fn seconds_can_be_skipped() {
        let p = midnight(ValueMatcher::Always, ValueMatcher::Always, DayMatch::All);
        let mut t = fields(3, 3);
        t.second = 42;
        assert!(!p.matches_fields(&t, true));
        assert!(p.matches_fields(&t, false));
    }

    #[test]
    fn display_is_field_ordered() {
        let p = midnight(ValueMatcher::Always, dense(Field::DayOfWeek, &[1, 5]), DayMatch::All);
        assert_eq!(p.to_string(), "0 0 0 * * 1,5 *");
        assert_eq!(p.get(Field::DayOfWeek).values(Field::DayOfWeek), vec![1, 5]);
    }
}
