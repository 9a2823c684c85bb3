//! Splits Go function types, as rendered by tools like gocode, into their
//! parameters and return fragment.
//!
//! ```
//! let parsed = gosig::parse_func("func(a, b int, d func(e error) error) (int, error)").unwrap();
//! assert_eq!(parsed.params.len(), 3);
//! assert_eq!(parsed.params[2].ty, "func(e error) error");
//! assert_eq!(parsed.returns, "(int, error)");
//! ```

pub mod config;
pub mod error;
pub mod parser;

pub use config::ParseOptions;
pub use error::{Result, SignatureError};
pub use parser::signature::{split_results, SignatureParser};
pub use parser::{Parameter, ParsedSignature};

/// Parse a full signature with default (strict) options
pub fn parse_func(signature: &str) -> Result<ParsedSignature> {
    SignatureParser::default().parse(signature)
}

/// Parse a parenthesized parameter list with default (strict) options
pub fn parse_params(list: &str) -> Result<Vec<Parameter>> {
    SignatureParser::default().parse_params(list)
}

/// Route `tracing` output through the test harness, filtered by `RUST_LOG`.
#[cfg(test)]
pub(crate) fn init_test_tracing() {
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new("error"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_test_writer()
        .try_init();
}
