//! Field value matchers and the seven-field composite.
//!
//! [`ValueMatcher`] is a closed set of variants: adding a kind means every
//! `match` over it has to handle the new case.

mod day_of_month;
mod dense;
mod pattern;
mod year;

use std::fmt;

use cronpat_core::Field;

pub use self::day_of_month::DayOfMonthMatcher;
pub use self::dense::DenseMatcher;
pub use self::pattern::PatternMatcher;
pub use self::year::YearMatcher;

/// Compiled predicate for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueMatcher {
    /// `*` or `?`: every value matches.
    Always,
    /// Bitset over a small bounded field.
    Dense(DenseMatcher),
    /// Day-of-month with last-day semantics.
    DayOfMonth(DayOfMonthMatcher),
    /// Explicit set of years.
    Year(YearMatcher),
}

impl ValueMatcher {
    pub fn is_always(&self) -> bool {
        matches!(self, ValueMatcher::Always)
    }

    /// Plain numeric membership.
    pub fn matches(&self, value: i32) -> bool {
        match self {
            ValueMatcher::Always => true,
            ValueMatcher::Dense(m) => m.matches(value),
            ValueMatcher::DayOfMonth(m) => m.matches(value),
            ValueMatcher::Year(m) => m.matches(value),
        }
    }

    /// Membership of a day-of-month within a month of `month_length` days.
    ///
    /// Only the day-of-month variant uses the calendar context; the others
    /// fall back to [`ValueMatcher::matches`].
    pub fn matches_day_of_month(&self, day: i32, month_length: i32) -> bool {
        match self {
            ValueMatcher::DayOfMonth(m) => m.matches_in_month(day, month_length),
            other => other.matches(day),
        }
    }

    /// Concrete match set in ascending order. `Always` expands to the whole
    /// bound of `field`.
    pub fn values(&self, field: Field) -> Vec<i32> {
        match self {
            ValueMatcher::Always => (field.min()..=field.max()).collect(),
            ValueMatcher::Dense(m) => m.values(),
            ValueMatcher::DayOfMonth(m) => m.values(),
            ValueMatcher::Year(m) => m.values(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ValueMatcher::Always => "always",
            ValueMatcher::Dense(_) => "dense",
            ValueMatcher::DayOfMonth(_) => "day_of_month",
            ValueMatcher::Year(_) => "year",
        }
    }
}

impl fmt::Display for ValueMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values = match self {
            ValueMatcher::Always => return f.write_str("*"),
            ValueMatcher::Dense(m) => m.values(),
            ValueMatcher::DayOfMonth(m) => m.values(),
            ValueMatcher::Year(m) => m.values(),
        };
        let joined = values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(",");
        f.write_str(&joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_matches_everything() {
        let m = ValueMatcher::Always;
        assert!(m.is_always());
        assert!(m.matches(-5));
        assert!(m.matches(3000));
        assert_eq!(m.values(Field::Hour).len(), 24);
        assert_eq!(m.to_string(), "*");
    }

    #[test]
    fn day_of_month_uses_calendar_only_when_asked() {
        let m = ValueMatcher::DayOfMonth(DayOfMonthMatcher::new(&[31]));
        assert!(!m.matches(30));
        assert!(m.matches_day_of_month(30, 30));

        let dense = ValueMatcher::Dense(DenseMatcher::new(Field::Hour, &[5]));
        assert!(dense.matches_day_of_month(5, 30));
        assert!(!dense.matches_day_of_month(30, 30));
    }

    #[test]
    fn display_lists_values() {
        let m = ValueMatcher::Dense(DenseMatcher::new(Field::Minute, &[30, 0, 15]));
        assert_eq!(m.to_string(), "0,15,30");
        assert_eq!(m.kind(), "dense");

        let y = ValueMatcher::Year(YearMatcher::new(&[2031, 2030]));
        assert_eq!(y.to_string(), "2030,2031");
    }
}
