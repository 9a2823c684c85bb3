//! Error types for signature parsing

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, SignatureError>;

/// Raised when a signature is too malformed to split.
///
/// Both variants keep the offending input so callers can log it or fall back
/// to showing the raw text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// Missing `func(` prefix, or the parameter list never closes
    #[error("malformed function signature ({reason}): {input}")]
    MalformedSignature { input: String, reason: &'static str },

    /// Parameter list with the wrong shape or an untyped trailing name
    #[error("malformed parameter list ({reason}): {input}")]
    MalformedParameterList { input: String, reason: &'static str },
}

impl SignatureError {
    pub(crate) fn signature(input: &str, reason: &'static str) -> Self {
        tracing::debug!("Rejecting signature {:?}: {}", input, reason);
        Self::MalformedSignature {
            input: input.to_string(),
            reason,
        }
    }

    pub(crate) fn param_list(input: &str, reason: &'static str) -> Self {
        tracing::debug!("Rejecting parameter list {:?}: {}", input, reason);
        Self::MalformedParameterList {
            input: input.to_string(),
            reason,
        }
    }

    /// The text that failed to parse
    pub fn input(&self) -> &str {
        match self {
            Self::MalformedSignature { input, .. }
            | Self::MalformedParameterList { input, .. } => input,
        }
    }

    pub fn reason(&self) -> &'static str {
        match self {
            Self::MalformedSignature { reason, .. }
            | Self::MalformedParameterList { reason, .. } => reason,
        }
    }
}
