//! Rule document model and loader.
//!
//! The rule document is a small JSON object, edited externally, re-read on
//! every invocation:
//!
//! ```json
//! { "enabled": true, "start_hour": 9, "end_hour": 17, "days": ["Mon", "Fri"] }
//! ```
//!
//! Only `enabled` is required; the optional fields are normalized with
//! defaults at load time. A `RuleSet` is immutable for the duration of one
//! invocation and is never cached across invocations.

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// The fixed weekday token vocabulary, Monday first.
pub const WEEKDAY_TOKENS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Normalized scheduling rules for one invocation.
///
/// `start_hour` and `end_hour` are defaulted independently and deliberately
/// not validated against each other: an inverted range (start > end) loads
/// fine and simply denies every hour. Wrap-around ("overnight") semantics
/// are intentionally not implemented.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSet {
    /// Global kill switch. Required; a document without it fails to load.
    pub enabled: bool,
    /// First allowed hour of day, inclusive.
    #[serde(default = "default_start_hour")]
    pub start_hour: u8,
    /// Last allowed hour of day, inclusive.
    #[serde(default = "default_end_hour")]
    pub end_hour: u8,
    /// Allowed weekday tokens, matched case-sensitively. Unrecognized
    /// tokens never match a real day but are not load errors.
    #[serde(default = "default_days")]
    pub days: Vec<String>,
}

fn default_start_hour() -> u8 {
    0
}
fn default_end_hour() -> u8 {
    23
}
fn default_days() -> Vec<String> {
    ["Mon", "Tue", "Wed", "Thu", "Fri"]
        .iter()
        .map(|d| d.to_string())
        .collect()
}

impl RuleSet {
    /// Parse a rule document from raw bytes.
    ///
    /// # Errors
    /// Returns [`LoadError::InvalidFormat`] if the bytes are not a JSON
    /// object or the object lacks a boolean `enabled` key.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, LoadError> {
        serde_json::from_slice(bytes).map_err(|e| LoadError::InvalidFormat(e.to_string()))
    }

    /// Whether the given weekday token is in the allowed set.
    pub fn allows_day(&self, token: &str) -> bool {
        self.days.iter().any(|d| d == token)
    }

    /// Whether the given hour falls inside `[start_hour, end_hour]`,
    /// inclusive on both ends. Always false for an inverted range.
    pub fn allows_hour(&self, hour: u8) -> bool {
        self.start_hour <= hour && hour <= self.end_hour
    }

    /// Non-fatal oddities worth surfacing in `rules check`: day tokens
    /// outside the fixed vocabulary, and an inverted hour range.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        for day in &self.days {
            if !WEEKDAY_TOKENS.contains(&day.as_str()) {
                warnings.push(format!("unrecognized day token '{day}' will never match"));
            }
        }
        if self.start_hour > self.end_hour {
            warnings.push(format!(
                "inverted hour range {}-{} denies every hour",
                self.start_hour, self.end_hour
            ));
        }
        warnings
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            enabled: false,
            start_hour: default_start_hour(),
            end_hour: default_end_hour(),
            days: default_days(),
        }
    }
}
