//! LCS line alignment and reorder classification

use crate::normalize::normalize_line;
use crate::types::{DiffRow, Marker};

/// Align two body-line sequences into an ordered diff sequence.
///
/// Lines are compared by their normalized form but rows store the
/// original text. Classic O(n*m) longest-common-subsequence dynamic
/// programming, filled from the bottom-right corner; the backtrack
/// tie-break favors Removed so output is deterministic. Remaining
/// original lines flush as Removed, remaining new lines as Added, then
/// the reorder pass runs in place before returning.
///
/// Quadratic cost is fine at function-body scale; this is not meant for
/// whole-file diffing.
pub fn diff_lines(original_lines: &[String], new_lines: &[String]) -> Vec<DiffRow> {
    let n = original_lines.len();
    let m = new_lines.len();
    // Normalize each line once up front instead of at every table cell
    let original_keys: Vec<String> = original_lines.iter().map(|l| normalize_line(l)).collect();
    let new_keys: Vec<String> = new_lines.iter().map(|l| normalize_line(l)).collect();

    let mut dp = vec![vec![0usize; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            dp[i][j] = if original_keys[i] == new_keys[j] {
                1 + dp[i + 1][j + 1]
            } else {
                dp[i + 1][j].max(dp[i][j + 1])
            };
        }
    }

    let mut result = Vec::new();
    let mut i = 0;
    let mut j = 0;
    while i < n && j < m {
        if original_keys[i] == new_keys[j] {
            result.push(DiffRow::unchanged(&original_lines[i], &new_lines[j]));
            i += 1;
            j += 1;
        } else if dp[i + 1][j] >= dp[i][j + 1] {
            result.push(DiffRow::removed(&original_lines[i]));
            i += 1;
        } else {
            result.push(DiffRow::added(&new_lines[j]));
            j += 1;
        }
    }
    while i < n {
        result.push(DiffRow::removed(&original_lines[i]));
        i += 1;
    }
    while j < m {
        result.push(DiffRow::added(&new_lines[j]));
        j += 1;
    }

    mark_reordered(&mut result);
    result
}

/// Reclassify Added rows as Reordered when a textually-equal Removed row
/// exists anywhere in the sequence.
///
/// The matched Removed row keeps its marker; only the Added side flips.
/// The asymmetry is intentional and observable in the rendered output.
pub fn mark_reordered(rows: &mut [DiffRow]) {
    for k in 0..rows.len() {
        if rows[k].marker != Marker::Added {
            continue;
        }
        let added_key = normalize_line(&rows[k].new);
        let has_removed_twin = rows
            .iter()
            .any(|row| row.marker == Marker::Removed && normalize_line(&row.original) == added_key);
        if has_removed_twin {
            rows[k].marker = Marker::Reordered;
        }
    }
}
