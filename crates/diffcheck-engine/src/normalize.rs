//! Whitespace normalization for bodies and single lines

use regex::Regex;

/// Canonical single-line form of a function body.
///
/// Carriage returns removed, tabs become spaces, whitespace runs collapse
/// to one space, braces shed surrounding whitespace, ends trimmed.
/// Idempotent. Two bodies compare equal iff their normalized forms are
/// character-identical.
pub fn normalize_body(body: &str) -> String {
    let s = body.replace('\r', "").replace('\t', " ");
    let whitespace = Regex::new(r"\s+").unwrap();
    let s = whitespace.replace_all(&s, " ");
    let open_brace = Regex::new(r"\s*\{\s*").unwrap();
    let s = open_brace.replace_all(&s, "{");
    let close_brace = Regex::new(r"\s*\}\s*").unwrap();
    let s = close_brace.replace_all(&s, "}");
    s.trim().to_string()
}

/// Comparison key for a single line: tabs to spaces, runs collapsed, trimmed.
///
/// Diff rows still store the original line text; this form is only used
/// for equality checks.
pub fn normalize_line(line: &str) -> String {
    let s = line.replace('\t', " ");
    let whitespace = Regex::new(r"\s+").unwrap();
    whitespace.replace_all(&s, " ").trim().to_string()
}

/// Split text into lines on `\n`, keeping empty parts, carriage returns removed.
pub fn to_lines(text: &str) -> Vec<String> {
    text.replace('\r', "")
        .split('\n')
        .map(String::from)
        .collect()
}
