//! cf-import - Spreadsheet ingestion for Costflow
//!
//! Construction estimates routinely arrive as semi-structured
//! spreadsheets: section headings interleaved with line items, numbers
//! typed as text, codes missing. This crate classifies raw rows into
//! section headers vs. line items, normalizes them into estimate items,
//! and replaces a project's estimate with the result.

pub mod cell;
pub mod error;
pub mod normalize;

pub use cell::Cell;
pub use error::{ImportError, ImportResult};
pub use normalize::{import_rows, normalize};
