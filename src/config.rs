//! Parser options and environment loading

use serde::{Deserialize, Serialize};

/// Environment variable selecting strict or parity parameter handling
pub const STRICT_PARAMS_ENV: &str = "GOSIG_STRICT_PARAMS";

/// Options controlling how forgiving the parameter decomposer is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Reject untyped trailing names, empty segments and trailing text after
    /// the parameter list. When off, untyped names are dropped and empty
    /// segments skipped.
    pub strict: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { strict: true }
    }
}

impl ParseOptions {
    pub fn strict() -> Self {
        Self { strict: true }
    }

    /// Lenient mode matching what gocode-era tooling produced
    pub fn parity() -> Self {
        Self { strict: false }
    }

    /// Load options from `GOSIG_STRICT_PARAMS`, defaulting to strict.
    pub fn from_env() -> Self {
        let value = std::env::var(STRICT_PARAMS_ENV).ok();
        Self::from_env_value(value.as_deref())
    }

    pub fn from_env_value(value: Option<&str>) -> Self {
        let Some(raw) = value else {
            return Self::default();
        };

        match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Self::strict(),
            "0" | "false" | "no" | "off" => Self::parity(),
            other => {
                tracing::warn!(
                    "Unrecognized {} value {:?}, falling back to strict parsing",
                    STRICT_PARAMS_ENV,
                    other
                );
                Self::default()
            }
        }
    }
}
