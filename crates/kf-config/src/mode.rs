//! Build mode selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The active build mode. Exactly one is active per build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Development,
    Test,
    /// Fallback for missing or unrecognized mode values.
    #[default]
    Production,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Development, Mode::Test, Mode::Production];

    /// Resolve a raw environment value (e.g. `NODE_ENV`).
    ///
    /// Anything other than `development`, `test` or `production` falls back to
    /// [`Mode::Production`].
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("unrecognized build mode {raw:?}, falling back to production");
                Mode::Production
            }),
            None => Mode::Production,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Development => "development",
            Mode::Test => "test",
            Mode::Production => "production",
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Mode::Development)
    }

    pub fn is_test(&self) -> bool {
        matches!(self, Mode::Test)
    }

    pub fn is_prod(&self) -> bool {
        matches!(self, Mode::Production)
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Mode::Development),
            "test" => Ok(Mode::Test),
            "production" => Ok(Mode::Production),
            other => Err(format!("Invalid build mode: {}", other)),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
