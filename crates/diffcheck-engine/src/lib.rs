//! Function-aware code comparison engine
//!
//! Extracts named function blocks from raw C/C++-style source text,
//! normalizes them for style-insensitive equality, computes an LCS-based
//! line diff between two versions of a same-named function, and reports
//! missing/new/changed functions across two sources.
//!
//! The engine is heuristic: a regex signature scan plus a brace-depth
//! counter, not a real parser. It is purely functional; every operation
//! takes immutable inputs and returns a new value.

mod diff;
mod extract;
mod normalize;
mod strip;
mod summary;
mod types;

pub use diff::{diff_lines, mark_reordered};
pub use extract::extract_functions;
pub use normalize::{normalize_body, normalize_line, to_lines};
pub use strip::strip_comments;
pub use summary::build_summary;
pub use types::{DiffRow, FunctionBlock, FunctionTable, Marker};
