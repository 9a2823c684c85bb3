mod scan;
pub mod signature;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single named parameter, e.g. `b int` out of `a, b int`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.ty)
    }
}

/// A function type split into its parameters and raw return fragment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSignature {
    /// Parameters in call-site order, grouped names already expanded
    pub params: Vec<Parameter>,
    /// Everything after the parameter list, trimmed; empty when nothing is returned
    pub returns: String,
}

impl ParsedSignature {
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|p| p.name.as_str())
    }

    pub fn is_void(&self) -> bool {
        self.returns.is_empty()
    }

    /// Return fragment split at its top-level commas.
    ///
    /// No attempt is made to tell a result name from its type, so
    /// `(n int, err error)` gives `["n int", "err error"]`.
    pub fn result_types(&self) -> Vec<String> {
        signature::split_results(&self.returns)
    }
}

impl fmt::Display for ParsedSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("func(")?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", param)?;
        }
        f.write_str(")")?;
        if !self.returns.is_empty() {
            write!(f, " {}", self.returns)?;
        }
        Ok(())
    }
}
