//! Target platform environment.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseEnvironmentError;

/// Which Slike deployment a request is sent to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Environment {
    /// The live platform. Used whenever no environment is given.
    #[default]
    Production,
    /// The development deployment, authenticated with a separate token.
    Development,
}

impl Environment {
    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Development => "development",
        }
    }

    /// Resolve an optional raw value supplied by a caller.
    ///
    /// `None` and the empty string both mean production; anything else must
    /// parse, so a typo never silently lands on the wrong deployment.
    pub fn resolve(raw: Option<&str>) -> Result<Self, ParseEnvironmentError> {
        match raw {
            None => Ok(Self::Production),
            Some(value) if value.is_empty() => Ok(Self::Production),
            Some(value) => value.parse(),
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl FromStr for Environment {
    type Err = ParseEnvironmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Self::Production),
            "development" | "dev" => Ok(Self::Development),
            _ => Err(ParseEnvironmentError(s.to_string())),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
