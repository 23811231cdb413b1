//! Expression parsing: [`PatternParser`] for whole expressions and
//! [`FieldParser`] for single fields.

mod field;
mod pattern;


pub use self::field::FieldParser;
pub use self::pattern::PatternParser;

pub(crate) use self::pattern::field_tokens;

use cronpat_core::Result;

use crate::schedule::Schedule;

/// Parse an expression with default options.
pub fn parse(text: &str) -> Result<Schedule> {
    PatternParser::new().parse(text)
}
