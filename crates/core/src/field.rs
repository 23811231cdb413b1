//! Field descriptors: the seven positional fields of a cron expression,
//! their numeric bounds, and their alias tables.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ParseError, Result};

/// Alias resolving to a field's maximum value.
pub const LAST_ALIAS: &str = "L";

/// Month aliases, `(short, long)`; position + 1 is the month number.
const MONTH_NAMES: [(&str, &str); 12] = [
    ("jan", "january"),
    ("feb", "february"),
    ("mar", "march"),
    ("apr", "april"),
    ("may", "may"),
    ("jun", "june"),
    ("jul", "july"),
    ("aug", "august"),
    ("sep", "september"),
    ("oct", "october"),
    ("nov", "november"),
    ("dec", "december"),
];

/// Weekday aliases, `(short, long)`; position is the weekday number (0 = Sunday).
const WEEKDAY_NAMES: [(&str, &str); 7] = [
    ("sun", "sunday"),
    ("mon", "monday"),
    ("tue", "tuesday"),
    ("wed", "wednesday"),
    ("thu", "thursday"),
    ("fri", "friday"),
    ("sat", "saturday"),
];

/// One positional field of a cron expression.
///
/// Declaration order is the canonical field order of a 7-field expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Second,
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
    Year,
}

impl Field {
    /// All fields in expression order.
    pub const ALL: [Field; 7] = [
        Field::Second,
        Field::Minute,
        Field::Hour,
        Field::DayOfMonth,
        Field::Month,
        Field::DayOfWeek,
        Field::Year,
    ];

    pub const fn min(self) -> i32 {
        match self {
            Field::Second | Field::Minute | Field::Hour | Field::DayOfWeek => 0,
            Field::DayOfMonth | Field::Month => 1,
            Field::Year => 1970,
        }
    }

    pub const fn max(self) -> i32 {
        match self {
            Field::Second | Field::Minute => 59,
            Field::Hour => 23,
            Field::DayOfMonth => 31,
            Field::Month => 12,
            Field::DayOfWeek => 6,
            Field::Year => 2099,
        }
    }

    /// Inclusive `(min, max)` bound.
    pub const fn bound(self) -> (i32, i32) {
        (self.min(), self.max())
    }

    /// Number of distinct values in the bound.
    pub const fn span(self) -> usize {
        (self.max() - self.min() + 1) as usize
    }

    /// Position of the field in a 7-field expression.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Field::Second => "second",
            Field::Minute => "minute",
            Field::Hour => "hour",
            Field::DayOfMonth => "day-of-month",
            Field::Month => "month",
            Field::DayOfWeek => "day-of-week",
            Field::Year => "year",
        }
    }

    /// Resolve a symbolic name (`L`, month or weekday name) to its number.
    ///
    /// Matching is case-insensitive. The result is not bounds-checked here;
    /// `L` always yields [`Field::max`] and named values are in range by
    /// construction.
    pub fn resolve_alias(self, name: &str) -> Result<i32> {
        if name.eq_ignore_ascii_case(LAST_ALIAS) {
            return Ok(self.max());
        }

        if let Some((names, base)) = self.alias_table() {
            let found = names.iter().position(|&(short, long)| {
                name.eq_ignore_ascii_case(short) || name.eq_ignore_ascii_case(long)
            });
            if let Some(pos) = found {
                return Ok(pos as i32 + base);
            }
        }

        Err(ParseError::InvalidAlias {
            field: self,
            alias: name.to_string(),
        })
    }

    /// Every alias this field accepts, `L` first.
    pub fn aliases(self) -> Vec<&'static str> {
        let mut out = vec![LAST_ALIAS];
        if let Some((names, _)) = self.alias_table() {
            for &(short, long) in names {
                out.push(short);
                if short != long {
                    out.push(long);
                }
            }
        }
        out
    }

    /// Bounds-check a value, folding weekday `7` to `0` (Sunday) first.
    pub fn check_value(self, value: i64) -> Result<i32> {
        let value = if self == Field::DayOfWeek && value == 7 {
            0
        } else {
            value
        };

        let (min, max) = self.bound();
        if value < i64::from(min) || value > i64::from(max) {
            return Err(ParseError::OutOfRange {
                field: self,
                value,
                min,
                max,
            });
        }
        Ok(value as i32)
    }

    /// Normalize a raw literal into the field's range and bounds-check it.
    ///
    /// A negative literal `-k` is an offset from the top of the range and
    /// resolves to `max - k`.
    pub fn resolve_value(self, raw: i64) -> Result<i32> {
        let value = if raw < 0 {
            raw + i64::from(self.max())
        } else {
            raw
        };
        self.check_value(value)
    }

    /// Resolve the starting point of a `v/step` token.
    ///
    /// Only the upper bound is enforced: a start below the field min (such
    /// as `0` for day-of-month) is raised to the min.
    pub fn resolve_start(self, raw: i64) -> Result<i32> {
        let value = if raw < 0 {
            raw + i64::from(self.max())
        } else if self == Field::DayOfWeek && raw == 7 {
            0
        } else {
            raw
        };

        let (min, max) = self.bound();
        if value > i64::from(max) {
            return Err(ParseError::OutOfRange {
                field: self,
                value,
                min,
                max,
            });
        }
        Ok(value.max(i64::from(min)) as i32)
    }

    fn alias_table(self) -> Option<(&'static [(&'static str, &'static str)], i32)> {
        match self {
            Field::Month => Some((&MONTH_NAMES[..], 1)),
            Field::DayOfWeek => Some((&WEEKDAY_NAMES[..], 0)),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_ordered() {
        for field in Field::ALL {
            let (min, max) = field.bound();
            assert!(min <= max, "{field} has min > max");
            assert_eq!(field.span(), (max - min + 1) as usize);
        }
    }

    #[test]
    fn index_follows_expression_order() {
        for (i, field) in Field::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    #[test]
    fn last_alias_is_field_max() {
        assert_eq!(Field::DayOfMonth.resolve_alias("L").unwrap(), 31);
        assert_eq!(Field::Month.resolve_alias("l").unwrap(), 12);
        assert_eq!(Field::DayOfWeek.resolve_alias("L").unwrap(), 6);
        assert_eq!(Field::Year.resolve_alias("L").unwrap(), 2099);
    }

    #[test]
    fn month_names_short_and_long() {
        assert_eq!(Field::Month.resolve_alias("jan").unwrap(), 1);
        assert_eq!(Field::Month.resolve_alias("JAN").unwrap(), 1);
        assert_eq!(Field::Month.resolve_alias("September").unwrap(), 9);
        assert_eq!(Field::Month.resolve_alias("dec").unwrap(), 12);
    }

    #[test]
    fn weekday_names_short_and_long() {
        assert_eq!(Field::DayOfWeek.resolve_alias("sun").unwrap(), 0);
        assert_eq!(Field::DayOfWeek.resolve_alias("Monday").unwrap(), 1);
        assert_eq!(Field::DayOfWeek.resolve_alias("SAT").unwrap(), 6);
    }

    #[test]
    fn names_are_scoped_to_their_field() {
        let err = Field::Hour.resolve_alias("jan").unwrap_err();
        assert!(matches!(err, ParseError::InvalidAlias { field: Field::Hour, .. }));
        assert!(Field::Month.resolve_alias("mon").is_err());
    }

    #[test]
    fn sunday_seven_folds_to_zero() {
        assert_eq!(Field::DayOfWeek.check_value(7).unwrap(), 0);
        assert_eq!(Field::DayOfWeek.check_value(0).unwrap(), 0);
        assert!(Field::DayOfWeek.check_value(8).is_err());
        assert!(Field::Hour.check_value(7).is_ok());
    }

    #[test]
    fn check_value_rejects_out_of_range() {
        let err = Field::Minute.check_value(60).unwrap_err();
        assert_eq!(
            err,
            ParseError::OutOfRange {
                field: Field::Minute,
                value: 60,
                min: 0,
                max: 59
            }
        );
        assert!(Field::DayOfMonth.check_value(0).is_err());
        assert!(Field::Year.check_value(1969).is_err());
    }

    #[test]
    fn step_start_is_raised_to_min() {
        assert_eq!(Field::DayOfMonth.resolve_start(0).unwrap(), 1);
        assert_eq!(Field::Month.resolve_start(0).unwrap(), 1);
        assert_eq!(Field::Minute.resolve_start(-10).unwrap(), 49);
        assert_eq!(Field::DayOfWeek.resolve_start(7).unwrap(), 0);
        assert!(matches!(
            Field::Minute.resolve_start(70).unwrap_err(),
            ParseError::OutOfRange { value: 70, .. }
        ));
    }

    #[test]
    fn negative_literal_counts_down_from_max() {
        assert_eq!(Field::DayOfMonth.resolve_value(-1).unwrap(), 30);
        assert_eq!(Field::Minute.resolve_value(-10).unwrap(), 49);
        assert!(Field::Hour.resolve_value(-30).is_err());
    }

    #[test]
    fn aliases_list() {
        assert_eq!(Field::Hour.aliases(), vec!["L"]);
        let months = Field::Month.aliases();
        assert!(months.contains(&"feb"));
        assert!(months.contains(&"february"));
        assert_eq!(months.iter().filter(|a| **a == "may").count(), 1);
    }
}
