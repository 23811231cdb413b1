pub mod config;
pub mod error;
pub mod field;

pub use config::{Config, DayMatch, LogConfig, MatchingConfig};
pub use error::*;
pub use field::*;
