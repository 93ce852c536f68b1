//! Comment removal for raw source text

use regex::Regex;

/// Remove block and line comments from raw code.
///
/// Block comments are matched non-greedily (shortest `/* ... */` span,
/// across newlines), then line comments to end of line. Not aware of
/// string or character literals: a `/*` or `//` inside a literal is
/// treated as a real comment start. Always succeeds. Line counts may
/// shrink, so line-number bookkeeping on the result no longer maps back
/// to the original text.
pub fn strip_comments(code: &str) -> String {
    let block_comments = Regex::new(r"(?s)/\*.*?\*/").unwrap();
    let s = block_comments.replace_all(code, "");
    let line_comments = Regex::new(r"//[^\n]*").unwrap();
    line_comments.replace_all(&s, "").to_string()
}
