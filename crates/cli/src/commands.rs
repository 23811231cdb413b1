//! Subcommand implementations. Each returns its rendered output so `main`
//! only decides where it goes and which exit code to use.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, Utc};
use tracing::debug;

use cronpat_core::{Field, MatchingConfig};
use cronpat_pattern::validation::{validate_with, ValidationResult};
use cronpat_pattern::PatternParser;

/// Rendered command output plus whether the command succeeded.
#[derive(Debug)]
pub struct Outcome {
    pub success: bool,
    pub output: String,
}

// ── check ───────────────────────────────────────────────────

pub fn check(expression: &str, matching: &MatchingConfig, json: bool) -> Result<Outcome> {
    let result = validate_with(expression, matching.day_match);
    let output = if json {
        serde_json::to_string_pretty(&result).context("failed to serialize validation result")?
    } else {
        render_validation(expression, &result)
    };
    Ok(Outcome {
        success: result.valid,
        output,
    })
}

fn render_validation(expression: &str, result: &ValidationResult) -> String {
    let mut out = String::new();
    for err in &result.errors {
        let _ = write!(out, "error: {}: {}", err.path, err.message);
        if let Some(ref suggestion) = err.suggestion {
            let _ = write!(out, " ({suggestion})");
        }
        out.push('\n');
    }
    for warning in &result.warnings {
        let _ = writeln!(out, "warning: {}: {}", warning.path, warning.message);
    }
    if result.valid {
        let _ = writeln!(out, "valid: {expression}");
    }
    out
}

// ── explain ─────────────────────────────────────────────────

pub fn explain(expression: &str, matching: &MatchingConfig) -> Result<Outcome> {
    let schedule = PatternParser::from_config(matching)
        .parse(expression)
        .with_context(|| format!("invalid expression '{expression}'"))?;

    let mut out = String::new();
    let _ = writeln!(out, "day match: {}", matching.day_match);
    for (i, pattern) in schedule.patterns().iter().enumerate() {
        let _ = writeln!(out, "alternative {}: {}", i + 1, pattern);
        for field in Field::ALL {
            let _ = writeln!(out, "  {:<13} {}", field.name(), pattern.get(field));
        }
    }
    Ok(Outcome {
        success: true,
        output: out,
    })
}

// ── matches ─────────────────────────────────────────────────

/// With `matching.match_second` off the seconds field is skipped.
pub fn matches(expression: &str, at: Option<&str>, matching: &MatchingConfig) -> Result<Outcome> {
    let match_second = matching.match_second;
    let schedule = PatternParser::from_config(matching)
        .parse(expression)
        .with_context(|| format!("invalid expression '{expression}'"))?;
    let instant = resolve_instant(at)?;
    debug!(%instant, match_second, "checking instant");

    let matched = if match_second {
        schedule.matches(&instant)
    } else {
        schedule.matches_ignoring_second(&instant)
    };
    let verdict = if matched { "match" } else { "no match" };
    Ok(Outcome {
        success: matched,
        output: format!("{verdict}: {} at {}\n", schedule, instant.to_rfc3339()),
    })
}

fn resolve_instant(at: Option<&str>) -> Result<DateTime<FixedOffset>> {
    match at {
        Some(text) => DateTime::parse_from_rfc3339(text)
            .with_context(|| format!("invalid RFC 3339 timestamp '{text}'")),
        None => Ok(Utc::now().fixed_offset()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cronpat_core::DayMatch;

    fn matching(day_match: DayMatch, match_second: bool) -> MatchingConfig {
        MatchingConfig {
            day_match,
            match_second,
        }
    }

    fn defaults() -> MatchingConfig {
        MatchingConfig::default()
    }

    #[test]
    fn check_reports_valid() {
        let outcome = check("*/15 * * * *", &defaults(), false).unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.output, "valid: */15 * * * *\n");
    }

    #[test]
    fn check_reports_errors_with_suggestion() {
        let outcome = check("0 0 * jann *", &defaults(), false).unwrap();
        assert!(!outcome.success);
        assert!(outcome.output.starts_with("error: alternatives[0].month:"));
        assert!(outcome.output.contains("Did you mean 'jan'?"));
        assert!(!outcome.output.contains("valid:"));
    }

    #[test]
    fn check_json_output() {
        let outcome = check("0 0 30 2 *", &defaults(), true).unwrap();
        assert!(outcome.success);
        let value: serde_json::Value = serde_json::from_str(&outcome.output).unwrap();
        assert_eq!(value["valid"], true);
        assert_eq!(value["errors"].as_array().unwrap().len(), 0);
        assert!(!value["warnings"].as_array().unwrap().is_empty());
    }

    #[test]
    fn explain_lists_fields() {
        let outcome = explain("0 15 10 ? * mon-wed", &defaults()).unwrap();
        assert!(outcome.output.starts_with("day match: all\n"));
        assert!(outcome.output.contains("alternative 1: 0 15 10 * * 1,2,3 *\n"));
        assert!(outcome.output.contains("  day-of-week   1,2,3\n"));
        assert!(outcome.output.contains("  year          *\n"));
    }

    #[test]
    fn explain_rejects_invalid() {
        let err = explain("0 0 * * * * * *", &defaults()).unwrap_err();
        assert!(err.to_string().contains("invalid expression"));
    }

    #[test]
    fn matches_at_given_instant() {
        let hit = matches("0 15 10 ? * 1", Some("2025-07-14T10:15:00Z"), &matching(DayMatch::All, true)).unwrap();
        assert!(hit.success);
        assert!(hit.output.starts_with("match: "));

        let miss = matches("0 15 10 ? * 1", Some("2025-07-15T10:15:00Z"), &matching(DayMatch::All, true)).unwrap();
        assert!(!miss.success);
        assert!(miss.output.starts_with("no match: "));
    }

    #[test]
    fn matches_reads_offset_local_fields() {
        // 10:15 at +02:00 is 08:15 UTC; fields are read as written.
        let hit = matches("0 15 10 * * *", Some("2025-07-14T10:15:00+02:00"), &matching(DayMatch::All, true)).unwrap();
        assert!(hit.success);
    }

    #[test]
    fn matches_ignoring_second() {
        let at = Some("2025-07-14T10:15:42Z");
        assert!(!matches("15 10 * * *", at, &matching(DayMatch::All, true)).unwrap().success);
        assert!(matches("15 10 * * *", at, &matching(DayMatch::All, false)).unwrap().success);
    }

    #[test]
    fn matches_day_match_mode() {
        // 2025-05-13 is a Tuesday.
        let at = Some("2025-05-13T00:00:00Z");
        assert!(!matches("0 0 13 * fri", at, &matching(DayMatch::All, true)).unwrap().success);
        assert!(matches("0 0 13 * fri", at, &matching(DayMatch::Either, true)).unwrap().success);
    }

    #[test]
    fn matches_rejects_bad_timestamp() {
        let err = matches("* * * * *", Some("yesterday"), &matching(DayMatch::All, true)).unwrap_err();
        assert!(err.to_string().contains("invalid RFC 3339 timestamp"));
    }
}
