use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// Read a profiled env var: tries {PROFILE}_{KEY} first, falls back to {KEY}.
fn profiled_env_opt(profile: &str, key: &str) -> Option<String> {
    if !profile.is_empty() {
        let prefixed = format!("{}_{}", profile, key);
        if let Some(v) = env_opt(&prefixed) {
            return Some(v);
        }
    }
    env_opt(key)
}

fn profiled_env_or(profile: &str, key: &str, default: &str) -> String {
    profiled_env_opt(profile, key).unwrap_or_else(|| default.to_string())
}

fn profiled_env_parsed<T: FromStr>(profile: &str, key: &str, default: T) -> T {
    match profiled_env_opt(profile, key) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "Unparseable config value, using default");
            default
        }),
        None => default,
    }
}

fn active_profile() -> String {
    env_or("CRONPAT_PROFILE", "").to_uppercase()
}

// ── Day matching mode ─────────────────────────────────────────

/// How the day-of-month and day-of-week fields combine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayMatch {
    /// Both fields must match (plain conjunction of all seven fields).
    #[default]
    All,
    /// Classic Unix cron: when both fields are restricted, either may match.
    Either,
}

impl DayMatch {
    pub fn as_str(self) -> &'static str {
        match self {
            DayMatch::All => "all",
            DayMatch::Either => "either",
        }
    }
}

impl fmt::Display for DayMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayMatch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "and" => Ok(DayMatch::All),
            "either" | "or" => Ok(DayMatch::Either),
            other => Err(format!("unknown day match mode '{}', expected 'all' or 'either'", other)),
        }
    }
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Active profile name (empty = default).
    pub profile: String,
    pub matching: MatchingConfig,
    pub log: LogConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    /// Profile is read from `CRONPAT_PROFILE` env var. When set (e.g. `PROD`),
    /// every key is first looked up as `{PROFILE}_{KEY}`, falling back to `{KEY}`.
    pub fn from_env() -> Self {
        Self::for_profile(&active_profile())
    }

    /// Build config for a specific named profile (empty string = default).
    pub fn for_profile(profile: &str) -> Self {
        let p = profile.to_uppercase();
        let p = p.as_str();
        Self {
            profile: p.to_string(),
            matching: MatchingConfig::from_env_profiled(p),
            log: LogConfig::from_env_profiled(p),
        }
    }

    pub fn profile_label(&self) -> &str {
        if self.profile.is_empty() { "default" } else { &self.profile }
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded (profile: {}):", self.profile_label());
        tracing::info!(
            "  matching:    day_match={}, match_second={}",
            self.matching.day_match,
            self.matching.match_second
        );
        tracing::info!("  log:         filter={}", self.log.filter);
    }

    /// Return the effective config as JSON.
    pub fn summary(&self) -> serde_json::Value {
        serde_json::json!({
            "profile": self.profile_label(),
            "matching": {
                "day_match": self.matching.day_match,
                "match_second": self.matching.match_second,
            },
            "log": { "filter": self.log.filter },
        })
    }
}

// ── Matching ──────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    pub day_match: DayMatch,
    /// Whether the seconds field takes part in instant matching.
    pub match_second: bool,
}

impl MatchingConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            day_match: profiled_env_parsed(p, "CRONPAT_DAY_MATCH", DayMatch::All),
            match_second: profiled_env_parsed(p, "CRONPAT_MATCH_SECOND", true),
        }
    }
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            day_match: DayMatch::All,
            match_second: true,
        }
    }
}

// ── Logging ───────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default `tracing` filter when `RUST_LOG` is unset.
    pub filter: String,
}

impl LogConfig {
    /// Read only the logging section, so a subscriber can be installed
    /// before the rest of the config emits its warnings.
    pub fn from_env() -> Self {
        Self::for_profile(&active_profile())
    }

    pub fn for_profile(profile: &str) -> Self {
        Self::from_env_profiled(&profile.to_uppercase())
    }

    fn from_env_profiled(p: &str) -> Self {
        Self {
            filter: profiled_env_or(p, "CRONPAT_LOG", "warn"),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}
