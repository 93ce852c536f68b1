//! Plain-text rendering of per-function diffs

use diffcheck_engine::{build_summary, diff_lines, DiffRow, FunctionTable, Marker};

/// Render the full comparison report: one section per function present in
/// both tables (original-table order, i.e. lexicographic), then the summary.
pub fn build_report(
    orig: &FunctionTable,
    news: &FunctionTable,
    show_unchanged: bool,
) -> String {
    let mut out = String::new();
    for (name, block) in orig {
        let Some(new_block) = news.get(name) else {
            continue;
        };
        let rows = diff_lines(&block.body_lines, &new_block.body_lines);
        out.push_str(&render_function_diff(name, &rows, show_unchanged));
        out.push('\n');
    }
    out.push_str(&build_summary(orig, news));
    out.push('\n');
    out
}

/// Render one function's diff rows with marker prefixes.
///
/// Unchanged rows print the original text, removed rows the original,
/// added rows the new, and reordered rows the new text falling back to
/// the original when empty.
pub fn render_function_diff(name: &str, rows: &[DiffRow], show_unchanged: bool) -> String {
    let mut out = format!("=== Function: {} ===\n", name);
    for row in rows {
        let line = match row.marker {
            Marker::Unchanged => {
                if !show_unchanged {
                    continue;
                }
                format!(" {}", row.original)
            }
            Marker::Removed => format!("- {}", row.original),
            Marker::Added => format!("+ {}", row.new),
            Marker::Reordered => {
                let text = if row.new.is_empty() { &row.original } else { &row.new };
                format!("~ {}", text)
            }
        };
        out.push_str(&line);
        out.push('\n');
    }
    out
}
