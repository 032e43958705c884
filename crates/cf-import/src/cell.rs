//! Spreadsheet cell values.

use serde::{Deserialize, Serialize};

/// One cell of an ingested spreadsheet row.
///
/// Deserializes untagged from JSON row files, so `null`, `12.5`, and
/// `"12,5"` are all valid cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    /// Empty cell
    Null,
    /// Numeric cell
    Number(f64),
    /// Text cell
    Text(String),
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Null
    }
}

impl Cell {
    /// Trimmed text content; numbers render with their natural display,
    /// empty cells as "".
    pub fn as_text(&self) -> String {
        match self {
            Cell::Null => String::new(),
            Cell::Number(n) => n.to_string(),
            Cell::Text(s) => s.trim().to_string(),
        }
    }

    /// Permissive numeric reading: text is parsed after swapping a
    /// decimal comma for a dot; anything non-numeric is 0.
    pub fn as_number(&self) -> f64 {
        match self {
            Cell::Null => 0.0,
            Cell::Number(n) => *n,
            Cell::Text(s) => s.trim().replace(',', ".").parse().unwrap_or(0.0),
        }
    }

    /// True for empty cells and whitespace-only text.
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Null => true,
            Cell::Number(_) => false,
            Cell::Text(s) => s.trim().is_empty(),
        }
    }
}

#[cfg(test)]
#[path = "cell_test.rs"]
mod tests;
