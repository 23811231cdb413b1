//! Expression checks: structure, per-field grammar, and reachability.

use cronpat_core::{DayMatch, Field, ParseError};

use super::fuzzy::fuzzy_match;
use super::ValidationResult;
use crate::matcher::ValueMatcher;
use crate::parser::{field_tokens, FieldParser};
use crate::time::days_in_month;

/// A leap year, so February offers 29 days.
const LEAP_YEAR: i32 = 2000;

pub(super) fn validate_expression(text: &str, day_match: DayMatch, result: &mut ValidationResult) {
    let expression = text.trim();
    if expression.is_empty() {
        result.error("", ParseError::EmptyExpression.to_string());
        return;
    }

    for (index, alternative) in expression.split('|').enumerate() {
        let path = format!("alternatives[{index}]");
        let alternative = alternative.trim();
        if alternative.is_empty() {
            let err = ParseError::EmptyAlternative {
                expression: expression.to_string(),
                index,
            };
            result.error(&path, err.to_string());
            continue;
        }

        if let Some(matchers) = validate_alternative(&path, alternative, result) {
            check_day_fields(&path, &matchers, day_match, result);
        }
    }
}

/// Parse every field, reporting each failure. Returns the matchers only when
/// all seven compiled.
fn validate_alternative(
    path: &str,
    alternative: &str,
    result: &mut ValidationResult,
) -> Option<Vec<ValueMatcher>> {
    let tokens = match field_tokens(alternative) {
        Ok(tokens) => tokens,
        Err(e) => {
            result.error(path, e.to_string());
            return None;
        }
    };

    let mut matchers = Vec::with_capacity(Field::ALL.len());
    let mut failed = false;
    for (field, token) in Field::ALL.into_iter().zip(tokens) {
        match FieldParser::for_field(field).parse(token) {
            Ok(matcher) => matchers.push(matcher),
            Err(e) => {
                failed = true;
                report_field_error(&format!("{path}.{field}"), field, &e, result);
            }
        }
    }

    (!failed).then_some(matchers)
}

fn report_field_error(path: &str, field: Field, err: &ParseError, result: &mut ValidationResult) {
    if let ParseError::InvalidAlias { alias, .. } = err {
        if let Some(s) = fuzzy_match(alias, &field.aliases()) {
            result.error_with_suggestion(path, err.to_string(), format!("Did you mean '{s}'?"));
            return;
        }
    }
    result.error(path, err.to_string());
}

fn check_day_fields(
    path: &str,
    matchers: &[ValueMatcher],
    day_match: DayMatch,
    result: &mut ValidationResult,
) {
    let day_of_month = &matchers[Field::DayOfMonth.index()];
    let day_of_week = &matchers[Field::DayOfWeek.index()];
    let month = &matchers[Field::Month.index()];
    let both_restricted = !day_of_month.is_always() && !day_of_week.is_always();

    if both_restricted && day_match == DayMatch::All {
        result.warn(
            path,
            "day-of-month and day-of-week are both restricted and must both match; \
             use day match 'either' for classic cron behaviour",
        );
    }

    // Under 'either' the weekday alone can still fire the alternative.
    let weekday_can_match = both_restricted && day_match == DayMatch::Either;
    if !weekday_can_match && !day_fits_some_month(day_of_month, month) {
        result.warn(
            format!("{path}.{}", Field::DayOfMonth),
            "no selected day-of-month exists in any selected month; this alternative never matches",
        );
    }
}

fn day_fits_some_month(day_of_month: &ValueMatcher, month: &ValueMatcher) -> bool {
    let days = match day_of_month {
        ValueMatcher::Always => return true,
        ValueMatcher::DayOfMonth(m) if m.is_last_day() => return true,
        other => other.values(Field::DayOfMonth),
    };
    month.values(Field::Month).into_iter().any(|m| {
        let length = days_in_month(LEAP_YEAR, m);
        days.iter().any(|d| *d <= length)
    })
}
