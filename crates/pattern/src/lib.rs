//! Cron-style schedule expression compiler.
//!
//! This crate provides:
//! - Per-field grammar parsing (groups, steps, ranges, reverse ranges, aliases)
//! - Matcher variants for dense fields, day-of-month and year
//! - `|`-separated compound schedules with 5, 6 and 7 field alternatives
//! - Structured validation with suggestions for tooling

pub mod matcher;
pub mod parser;
pub mod schedule;
pub mod time;
pub mod validation;

pub use cronpat_core::{DayMatch, Field, ParseError, Result};
pub use matcher::{PatternMatcher, ValueMatcher};
pub use parser::{parse, FieldParser, PatternParser};
pub use schedule::Schedule;
pub use time::TimeFields;
