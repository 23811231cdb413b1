//! Calendar-aware day-of-month matcher.

use cronpat_core::Field;

use super::dense::DenseMatcher;

/// Explicit days plus a last-day flag.
///
/// Day 31 (what `L` resolves to) doubles as "last day of the month": it also
/// matches the 30th, 29th or 28th when that is the month's final day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayOfMonthMatcher {
    days: DenseMatcher,
    last_day: bool,
}

impl DayOfMonthMatcher {
    pub fn new(values: &[i32]) -> Self {
        let last = Field::DayOfMonth.max();
        Self {
            days: DenseMatcher::new(Field::DayOfMonth, values),
            last_day: values.contains(&last),
        }
    }

    /// Literal membership, without calendar context.
    pub fn matches(&self, day: i32) -> bool {
        self.days.matches(day)
    }

    /// Membership for a day in a month of `month_length` days.
    pub fn matches_in_month(&self, day: i32, month_length: i32) -> bool {
        self.days.matches(day) || (self.last_day && day == month_length)
    }

    pub fn is_last_day(&self) -> bool {
        self.last_day
    }

    pub fn values(&self) -> Vec<i32> {
        self.days.values()
    }
}
