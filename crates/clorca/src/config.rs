use std::fmt;
use std::io::Write;

use serde::{Deserialize, Serialize};

pub const DEFAULT_ERROR_PREFIX: &str = "clorca error: ";

/// Upper bound on the number of positional arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArgLimit {
    #[default]
    Unlimited,
    AtMost(usize),
}

impl ArgLimit {
    /// Whether `count` positional arguments go over the limit.
    pub fn is_exceeded_by(self, count: usize) -> bool {
        match self {
            Self::Unlimited => false,
            Self::AtMost(max) => count > max,
        }
    }
}

impl fmt::Display for ArgLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unlimited => f.write_str("unlimited"),
            Self::AtMost(max) => write!(f, "{max}"),
        }
    }
}

/// Parser settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    /// Prefixed to every diagnostic line written to stderr.
    pub error_prefix: String,
    /// When false, nothing is written to stderr.
    pub verbose: bool,
    pub positional_limit: ArgLimit,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            error_prefix: DEFAULT_ERROR_PREFIX.to_string(),
            verbose: true,
            positional_limit: ArgLimit::Unlimited,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.error_prefix = prefix.into();
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn positional_limit(mut self, limit: ArgLimit) -> Self {
        self.positional_limit = limit;
        self
    }

    /// Shorthand for `positional_limit(ArgLimit::AtMost(max))`.
    pub fn max_positionals(self, max: usize) -> Self {
        self.positional_limit(ArgLimit::AtMost(max))
    }

    /// Write `error_prefix` + `message` as one line to `out` unless `verbose`
    /// is off. Write failures are ignored.
    pub(crate) fn report_to(&self, out: &mut dyn Write, message: &str) {
        if self.verbose {
            let _ = writeln!(out, "{}{}", self.error_prefix, message);
        }
    }
}
