//! Type definitions for function extraction and line diffing

use std::collections::BTreeMap;

/// One extracted function: signature, raw body, and comparison forms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionBlock {
    /// Text from the start of the signature match up to the opening brace
    pub signature: String,
    /// Text strictly between the outer braces
    pub body: String,
    /// Whitespace-canonicalized single-line form of the body
    pub normalized_body: String,
    /// Body split into lines, carriage returns removed
    pub body_lines: Vec<String>,
}

/// Function name to block, iterated in lexicographic key order.
///
/// An ordered map keeps enumeration and summary output deterministic;
/// on duplicate names the last occurrence in the source wins.
pub type FunctionTable = BTreeMap<String, FunctionBlock>;

/// Classification of one aligned diff row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Unchanged,
    Removed,
    Added,
    Reordered,
}

impl Marker {
    pub fn as_str(&self) -> &str {
        match self {
            Marker::Unchanged => " ",
            Marker::Removed => "-",
            Marker::Added => "+",
            Marker::Reordered => "~",
        }
    }
}

/// One aligned line pair in a diff sequence.
///
/// Only Unchanged rows carry both texts; Removed/Reordered-from rows carry
/// the original side, Added rows the new side, the other field empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffRow {
    pub marker: Marker,
    pub original: String,
    pub new: String,
}

impl DiffRow {
    pub fn unchanged(original: &str, new: &str) -> Self {
        DiffRow {
            marker: Marker::Unchanged,
            original: original.to_string(),
            new: new.to_string(),
        }
    }

    pub fn removed(original: &str) -> Self {
        DiffRow {
            marker: Marker::Removed,
            original: original.to_string(),
            new: String::new(),
        }
    }

    pub fn added(new: &str) -> Self {
        DiffRow {
            marker: Marker::Added,
            original: String::new(),
            new: new.to_string(),
        }
    }
}
