//! Estimate database for Costflow.
//!
//! Provides a DuckDB-backed store for project parameters, the norm
//! catalog, estimate templates, and the per-project bill of quantities.
//! All write paths that replace a project's derived data run inside a
//! single transaction via [`EstimateDb::transaction`], so a recompute is
//! all-or-nothing.

pub mod catalog;
pub mod connection;
pub mod ddl;
pub mod error;
pub mod estimates;
pub mod params;
pub mod templates;

pub use connection::EstimateDb;
pub use error::{StoreError, StoreResult};
