//! CLI command implementations

pub mod clean;
pub mod common;
pub mod eval;
pub mod import;
pub mod init;
pub mod ls;
pub mod price;
pub mod recompute;
pub mod set_dims;
