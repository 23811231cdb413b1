//! Per-field grammar: comma groups, steps, ranges and values.

use indexmap::IndexSet;
use tracing::trace;

use cronpat_core::{Field, ParseError, Result};

use crate::matcher::{DayOfMonthMatcher, DenseMatcher, ValueMatcher, YearMatcher};

/// Wildcards that match the whole field.
const MATCH_ALL: [&str; 2] = ["*", "?"];

static PARSERS: [FieldParser; 7] = [
    FieldParser::new(Field::Second),
    FieldParser::new(Field::Minute),
    FieldParser::new(Field::Hour),
    FieldParser::new(Field::DayOfMonth),
    FieldParser::new(Field::Month),
    FieldParser::new(Field::DayOfWeek),
    FieldParser::new(Field::Year),
];

fn is_match_all(text: &str) -> bool {
    MATCH_ALL.contains(&text)
}

/// Compiles one field's sub-expression into a [`ValueMatcher`].
///
/// Holds no per-call state; [`FieldParser::for_field`] hands out shared
/// instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldParser {
    field: Field,
}

impl FieldParser {
    pub const fn new(field: Field) -> Self {
        Self { field }
    }

    /// Shared parser for `field`.
    pub fn for_field(field: Field) -> &'static FieldParser {
        &PARSERS[field.index()]
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn parse(&self, text: &str) -> Result<ValueMatcher> {
        let matcher = match self.parse_values(text)? {
            None => ValueMatcher::Always,
            Some(values) => self.build(&values),
        };
        trace!(field = %self.field, text, matcher = %matcher, "compiled field");
        Ok(matcher)
    }

    /// Resolve `text` to its value set in first-seen order, duplicates
    /// removed. `None` means the whole field (a bare `*` or `?`).
    pub fn parse_values(&self, text: &str) -> Result<Option<Vec<i32>>> {
        let text = text.trim();
        if text.is_empty() {
            return Err(self.invalid_part(text));
        }

        let mut match_all = false;
        let mut values = IndexSet::new();
        for token in text.split(',') {
            let token = token.trim();
            if token.is_empty() {
                return Err(self.invalid_part(text));
            }
            match self.parse_step(token)? {
                Some(resolved) => values.extend(resolved),
                None => match_all = true,
            }
        }

        if match_all {
            return Ok(None);
        }
        Ok(Some(values.into_iter().collect()))
    }

    /// `range` or `range/step`.
    fn parse_step(&self, token: &str) -> Result<Option<Vec<i32>>> {
        let parts: Vec<&str> = token.split('/').collect();
        match parts.as_slice() {
            [range] => self.parse_range(token, range, None),
            [range, step] => {
                let step = self.parse_step_size(token, step)?;
                self.parse_range(token, range, Some(step))
            }
            _ => Err(ParseError::InvalidSyntax {
                field: self.field,
                part: token.to_string(),
            }),
        }
    }

    fn parse_step_size(&self, token: &str, step: &str) -> Result<usize> {
        let non_positive = || ParseError::NonPositiveStep {
            field: self.field,
            part: token.to_string(),
        };
        let step: i64 = step.trim().parse().map_err(|_| non_positive())?;
        if step < 1 {
            return Err(non_positive());
        }
        Ok(usize::try_from(step).unwrap_or(usize::MAX))
    }

    /// `*`, `v` or `a-b`, optionally stepped. A single value with a step is a
    /// starting point running to the field max; a reversed range wraps past
    /// the max back to the min. A weekday range ending in `7` runs up to
    /// Sunday instead of wrapping.
    fn parse_range(&self, token: &str, range: &str, step: Option<usize>) -> Result<Option<Vec<i32>>> {
        let range = range.trim();
        if range.is_empty() {
            return Err(self.invalid_part(token));
        }

        let (min, max) = self.field.bound();
        if is_match_all(range) {
            return Ok(step.map(|step| enumerate(min, max, step)));
        }

        match split_range(range).as_slice() {
            [value] => Ok(Some(match step {
                Some(step) => {
                    let start = self.parse_start(token, value)?;
                    enumerate(start, max, step)
                }
                None => vec![self.parse_number(token, value)?],
            })),
            [raw_start, end] => {
                let start = self.parse_number(token, raw_start)?;
                let step = step.unwrap_or(1);
                if self.field == Field::DayOfWeek && end.trim() == "7" {
                    let start = if raw_start.trim() == "7" { 7 } else { start };
                    return Ok(Some(
                        enumerate(start, 7, step)
                            .into_iter()
                            .map(|day| day % 7)
                            .collect(),
                    ));
                }
                let end = self.parse_number(token, end)?;
                let values = if start <= end {
                    enumerate(start, end, step)
                } else {
                    let mut values = enumerate(start, max, step);
                    values.extend(enumerate(min, end, step));
                    values
                };
                Ok(Some(values))
            }
            _ => Err(ParseError::MalformedRange {
                field: self.field,
                part: token.to_string(),
            }),
        }
    }

    /// Integer literal, negative offset from max, or alias; bounds-checked.
    fn parse_number(&self, token: &str, text: &str) -> Result<i32> {
        let text = text.trim();
        if text.is_empty() {
            return Err(self.invalid_part(token));
        }
        match text.parse::<i64>() {
            Ok(raw) => self.field.resolve_value(raw),
            Err(_) => {
                let value = self.field.resolve_alias(text)?;
                self.field.check_value(i64::from(value))
            }
        }
    }

    /// Starting point of `v/step`: resolved like a value, but only the upper
    /// bound is enforced.
    fn parse_start(&self, token: &str, text: &str) -> Result<i32> {
        let text = text.trim();
        if text.is_empty() {
            return Err(self.invalid_part(token));
        }
        let raw = match text.parse::<i64>() {
            Ok(raw) => raw,
            Err(_) => i64::from(self.field.resolve_alias(text)?),
        };
        self.field.resolve_start(raw)
    }

    fn build(&self, values: &[i32]) -> ValueMatcher {
        match self.field {
            Field::DayOfMonth => ValueMatcher::DayOfMonth(DayOfMonthMatcher::new(values)),
            Field::Year => ValueMatcher::Year(YearMatcher::new(values)),
            _ => ValueMatcher::Dense(DenseMatcher::new(self.field, values)),
        }
    }

    fn invalid_part(&self, part: &str) -> ParseError {
        ParseError::InvalidPartValue {
            field: self.field,
            part: part.to_string(),
        }
    }
}

/// `from, from+step, ...` while `<= to`.
fn enumerate(from: i32, to: i32, step: usize) -> Vec<i32> {
    (from..=to).step_by(step).collect()
}

/// Split a range on `-`. A `-` at the start of a segment is the sign of a
/// negative literal, so `-5-3` is `["-5", "3"]` and `5--1` is `["5", "-1"]`.
fn split_range(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    for (i, byte) in text.bytes().enumerate() {
        if byte == b'-' && i > start {
            parts.push(&text[start..i]);
            start = i + 1;
        }
    }
    parts.push(&text[start..]);
    parts
}
