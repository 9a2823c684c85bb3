//! Parenthesis depth scanning shared by the splitter and decomposer.
//!
//! All delimiters are ASCII, so scanning bytes and slicing at their offsets
//! never lands inside a multi-byte character.

/// Byte offset of the `)` matching the `(` at the start of `text`.
///
/// Returns `None` when `text` does not open with `(` or runs out before the
/// depth gets back to zero.
pub(crate) fn matching_close(text: &str) -> Option<usize> {
    if !text.starts_with('(') {
        return None;
    }

    let mut depth = 0usize;
    for (i, b) in text.bytes().enumerate() {
        match b {
            b'(' => depth += 1,
            b')' => depth -= 1,
            _ => {}
        }
        tracing::trace!(offset = i, byte = %(b as char), depth, "scan");
        if depth == 0 {
            return Some(i);
        }
    }
    None
}

/// Depth-1 pieces of a parenthesized list
#[derive(Debug)]
pub(crate) struct ListSplit<'a> {
    /// Untrimmed text between consecutive top-level `,` / closing `)`
    pub segments: Vec<&'a str>,
    /// Offset of the closing parenthesis of the list
    pub close: usize,
}

/// Split `(x, y z, w func(a, b) c)` into its top-level segments.
///
/// A `,` or `)` is a boundary only while the depth before it is exactly one,
/// which keeps commas of nested function types inside their segment. Scanning
/// stops at the parenthesis that closes the list.
pub(crate) fn split_list(list: &str) -> Option<ListSplit<'_>> {
    let close = matching_close(list)?;

    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut last = 1;
    for (i, b) in list.bytes().enumerate().take(close + 1) {
        if depth == 1 && matches!(b, b',' | b')') {
            let segment = &list[last..i];
            tracing::trace!(start = last, end = i, segment, "boundary");
            segments.push(segment);
            last = i + 1;
        }
        match b {
            b'(' => depth += 1,
            b')' => depth -= 1,
            _ => {}
        }
    }

    Some(ListSplit { segments, close })
}
