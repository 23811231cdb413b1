//! Whole-expression parsing: `|` alternatives, field counts and offsets.

use tracing::debug;

use cronpat_core::{DayMatch, Field, MatchingConfig, ParseError, Result};

use super::field::FieldParser;
use crate::matcher::PatternMatcher;
use crate::schedule::Schedule;

/// Seconds value used when an alternative has only 5 fields.
const DEFAULT_SECOND: &str = "0";

/// Year token used when an alternative has fewer than 7 fields.
const DEFAULT_YEAR: &str = "*";

/// Split one alternative into its seven field tokens in expression order,
/// filling the defaulted seconds and year.
pub(crate) fn field_tokens(alternative: &str) -> Result<[&str; 7]> {
    let parts: Vec<&str> = alternative.split_whitespace().collect();
    let offset = match parts.len() {
        5 => 0,
        6 | 7 => 1,
        count => {
            return Err(ParseError::InvalidFieldCount {
                alternative: alternative.to_string(),
                count,
            })
        }
    };

    let second = if offset == 1 { parts[0] } else { DEFAULT_SECOND };
    let year = parts.get(6).copied().unwrap_or(DEFAULT_YEAR);
    Ok([
        second,
        parts[offset],
        parts[offset + 1],
        parts[offset + 2],
        parts[offset + 3],
        parts[offset + 4],
        year,
    ])
}

/// Compiles a full expression into a [`Schedule`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatternParser {
    day_match: DayMatch,
}

impl PatternParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &MatchingConfig) -> Self {
        Self::new().with_day_match(config.day_match)
    }

    /// Set how day-of-month and day-of-week combine in compiled patterns.
    pub fn with_day_match(mut self, day_match: DayMatch) -> Self {
        self.day_match = day_match;
        self
    }

    pub fn day_match(&self) -> DayMatch {
        self.day_match
    }

    /// Parse `text`, possibly holding `|`-joined alternatives.
    ///
    /// Fails on the first violation; nothing partial is returned.
    pub fn parse(&self, text: &str) -> Result<Schedule> {
        let expression = text.trim();
        if expression.is_empty() {
            return Err(ParseError::EmptyExpression);
        }

        let mut patterns = Vec::new();
        for (index, alternative) in expression.split('|').enumerate() {
            let alternative = alternative.trim();
            if alternative.is_empty() {
                return Err(ParseError::EmptyAlternative {
                    expression: expression.to_string(),
                    index,
                });
            }
            patterns.push(self.parse_alternative(alternative)?);
        }

        debug!(
            expression,
            alternatives = patterns.len(),
            day_match = %self.day_match,
            "compiled cron schedule"
        );
        Ok(Schedule::new(expression.to_string(), patterns))
    }

    /// Parse a single alternative of 5, 6 or 7 fields.
    pub fn parse_alternative(&self, text: &str) -> Result<PatternMatcher> {
        let [second, minute, hour, day_of_month, month, day_of_week, year] = field_tokens(text)?;
        Ok(PatternMatcher::new(
            [
                FieldParser::for_field(Field::Second).parse(second)?,
                FieldParser::for_field(Field::Minute).parse(minute)?,
                FieldParser::for_field(Field::Hour).parse(hour)?,
                FieldParser::for_field(Field::DayOfMonth).parse(day_of_month)?,
                FieldParser::for_field(Field::Month).parse(month)?,
                FieldParser::for_field(Field::DayOfWeek).parse(day_of_week)?,
                FieldParser::for_field(Field::Year).parse(year)?,
            ],
            self.day_match,
        ))
    }
}
