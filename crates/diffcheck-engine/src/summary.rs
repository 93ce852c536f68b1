//! Missing/new/changed function summary across two tables

use crate::types::FunctionTable;

/// Build the textual summary of two function tables.
///
/// Three sections in fixed order: functions missing from the new source,
/// functions new to it, and functions present in both whose normalized
/// bodies differ. Headers are always printed, counts included, names in
/// lexicographic order. Note that reordering whole lines changes the
/// normalized single-line body, so a reorder-only function is reported
/// as changed here.
pub fn build_summary(orig: &FunctionTable, news: &FunctionTable) -> String {
    let mut lines = vec!["=== Summary ===".to_string()];
    let mut missing_funcs = Vec::new();
    let mut new_funcs = Vec::new();
    let mut changed_funcs = Vec::new();
    for (name, block) in orig {
        match news.get(name) {
            None => missing_funcs.push(name.as_str()),
            Some(new_block) if new_block.normalized_body != block.normalized_body => {
                changed_funcs.push(name.as_str())
            }
            Some(_) => {}
        }
    }
    for name in news.keys() {
        if !orig.contains_key(name) {
            new_funcs.push(name.as_str());
        }
    }
    lines.push(format!("Missing functions in new ({}):", missing_funcs.len()));
    for name in &missing_funcs {
        lines.push(format!(" - {}", name));
    }
    lines.push(format!("New functions not in original ({}):", new_funcs.len()));
    for name in &new_funcs {
        lines.push(format!(" + {}", name));
    }
    lines.push(format!("Changed function bodies ({}):", changed_funcs.len()));
    for name in &changed_funcs {
        lines.push(format!(" * {}", name));
    }
    lines.join("\n")
}
