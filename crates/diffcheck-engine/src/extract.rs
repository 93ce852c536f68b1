//! Heuristic function extraction from comment-stripped source

use regex::Regex;

use crate::normalize::{normalize_body, to_lines};
use crate::strip::strip_comments;
use crate::types::{FunctionBlock, FunctionTable};

/// Extract named function blocks from raw code.
///
/// Comments are stripped first, then the text is scanned for an
/// identifier-like token (`:` and `~` allowed, covering qualified names
/// and destructors) followed by a parenthesized argument list with no
/// nested parentheses and an opening brace. The body is delimited by an
/// explicit brace-depth scan from the first `{` at or after the match
/// start; candidates with no matching close are silently discarded.
/// Later matches overwrite earlier ones with the same name.
///
/// This is pattern matching, not parsing: string and character literals
/// containing braces corrupt the depth count, and nested functions,
/// templates, and macros are not understood.
pub fn extract_functions(code: &str) -> FunctionTable {
    let mut out = FunctionTable::new();
    let stripped = strip_comments(code);
    let signature_re = Regex::new(r"([\w:~]+)\s*\([^)]*\)\s*\{").unwrap();
    for caps in signature_re.captures_iter(&stripped) {
        let start = match caps.get(0) {
            Some(m) => m.start(),
            None => continue,
        };
        let brace_start = match stripped[start..].find('{') {
            Some(offset) => start + offset,
            None => continue,
        };
        let brace_end = match matching_brace(&stripped, brace_start) {
            Some(pos) => pos,
            None => continue,
        };
        let signature = stripped[start..brace_start].trim().to_string();
        let name = caps[1].trim().to_string();
        let body = &stripped[brace_start + 1..brace_end];
        out.insert(
            name,
            FunctionBlock {
                signature,
                body: body.to_string(),
                normalized_body: normalize_body(body),
                body_lines: to_lines(body),
            },
        );
    }
    out
}

/// Position of the brace matching the one at `open`, by depth counting.
///
/// Returns None when the text ends before the depth returns to zero.
fn matching_brace(text: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (pos, byte) in text.bytes().enumerate().skip(open) {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(pos);
                }
            }
            _ => {}
        }
    }
    None
}
