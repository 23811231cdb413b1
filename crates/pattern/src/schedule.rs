//! Compiled schedule: an ordered OR of pattern matchers.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Timelike};

use cronpat_core::{ParseError, Result};

use crate::matcher::PatternMatcher;
use crate::parser::PatternParser;
use crate::time::TimeFields;

/// The compiled form of a cron expression.
///
/// Alternatives keep their declaration order from the `A|B|C` text. A
/// schedule is never modified after parsing; a changed expression means a
/// fresh parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    expression: String,
    patterns: Vec<PatternMatcher>,
}

impl Schedule {
    pub(crate) fn new(expression: String, patterns: Vec<PatternMatcher>) -> Self {
        Self {
            expression,
            patterns,
        }
    }

    /// Parse with default options. See [`PatternParser`] for the rest.
    pub fn parse(text: &str) -> Result<Self> {
        PatternParser::new().parse(text)
    }

    /// The trimmed source text.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn patterns(&self) -> &[PatternMatcher] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Does any alternative match the instant, seconds included.
    pub fn matches<T: Datelike + Timelike>(&self, dt: &T) -> bool {
        self.matches_fields(&TimeFields::from_datetime(dt), true)
    }

    /// Minute-resolution check: the seconds field is ignored.
    pub fn matches_ignoring_second<T: Datelike + Timelike>(&self, dt: &T) -> bool {
        self.matches_fields(&TimeFields::from_datetime(dt), false)
    }

    pub fn matches_fields(&self, fields: &TimeFields, match_second: bool) -> bool {
        self.patterns
            .iter()
            .any(|pattern| pattern.matches_fields(fields, match_second))
    }
}

impl FromStr for Schedule {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Schedule::parse(s)
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expression)
    }
}
