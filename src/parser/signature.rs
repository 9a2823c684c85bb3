use super::scan;
use super::{Parameter, ParsedSignature};
use crate::config::ParseOptions;
use crate::error::{Result, SignatureError};

const FUNC_KEYWORD: &str = "func";

/// Splits Go function types such as `func(a, b int) error` into parameters
/// and return fragment, using parenthesis depth instead of a grammar.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignatureParser {
    options: ParseOptions,
}

impl SignatureParser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// Parse a full `func(...) ...` signature.
    ///
    /// The return fragment is kept verbatim (trimmed), parentheses included:
    /// `func(a int) (int, error)` returns `"(int, error)"`.
    pub fn parse(&self, signature: &str) -> Result<ParsedSignature> {
        if !signature.starts_with("func(") {
            return Err(SignatureError::signature(signature, "missing `func(` prefix"));
        }

        let start = FUNC_KEYWORD.len();
        let close = scan::matching_close(&signature[start..])
            .ok_or_else(|| SignatureError::signature(signature, "unbalanced parentheses"))?;
        let end = start + close + 1;

        let params = self.parse_params(&signature[start..end])?;
        let returns = signature[end..].trim().to_string();

        Ok(ParsedSignature { params, returns })
    }

    /// Parse a parenthesized parameter list like `(a, b int, c chan int)`.
    ///
    /// Names without a type wait in a pending buffer until the next typed
    /// declaration, whose type is then shared by all of them.
    pub fn parse_params(&self, list: &str) -> Result<Vec<Parameter>> {
        if !(list.starts_with('(') && list.ends_with(')')) {
            return Err(SignatureError::param_list(list, "expected surrounding parentheses"));
        }

        let split = scan::split_list(list)
            .ok_or_else(|| SignatureError::param_list(list, "unbalanced parentheses"))?;
        if self.options.strict && split.close != list.len() - 1 {
            return Err(SignatureError::param_list(list, "text after closing parenthesis"));
        }

        // `()` and `( )`
        if let [only] = split.segments.as_slice() {
            if only.trim().is_empty() {
                return Ok(Vec::new());
            }
        }

        let mut params = Vec::new();
        let mut pending: Vec<&str> = Vec::new();
        for segment in split.segments {
            let decl = segment.trim();
            if decl.is_empty() {
                if self.options.strict {
                    return Err(SignatureError::param_list(list, "empty parameter"));
                }
                continue;
            }

            let (name, ty) = partition(decl);
            pending.push(name);
            if !ty.is_empty() {
                params.extend(pending.drain(..).map(|name| Parameter::new(name, ty)));
            }
        }

        if !pending.is_empty() {
            if self.options.strict {
                return Err(SignatureError::param_list(list, "parameter without a type"));
            }
            tracing::debug!("Dropping untyped parameters {:?} from {:?}", pending, list);
        }

        Ok(params)
    }
}

/// Split a declaration at its first whitespace run into name and type.
fn partition(decl: &str) -> (&str, &str) {
    match decl.split_once(char::is_whitespace) {
        Some((name, ty)) => (name, ty.trim_start()),
        None => (decl, ""),
    }
}

/// Split a return fragment into its top-level results.
///
/// An unparenthesized fragment is a single result. A fragment whose
/// parentheses never balance is returned whole.
pub fn split_results(returns: &str) -> Vec<String> {
    let returns = returns.trim();
    if returns.is_empty() {
        return Vec::new();
    }
    if !returns.starts_with('(') {
        return vec![returns.to_string()];
    }

    match scan::split_list(returns) {
        Some(split) if split.close == returns.len() - 1 => split
            .segments
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        _ => vec![returns.to_string()],
    }
}
