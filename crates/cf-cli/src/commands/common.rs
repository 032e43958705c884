//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use cf_core::{Config, ParameterSet};
use cf_store::EstimateDb;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::cli::GlobalArgs;

/// Locate the config file from the global arguments.
pub(crate) fn config_path(global: &GlobalArgs) -> PathBuf {
    match &global.config {
        Some(path) => PathBuf::from(path),
        None => Path::new(&global.project_dir).join("costflow.yml"),
    }
}

/// Load costflow.yml and open the estimate database it points at.
pub(crate) fn open_db(global: &GlobalArgs) -> Result<(Config, EstimateDb)> {
    let path = config_path(global);
    let config = Config::from_file(&path)
        .with_context(|| format!("failed to load {}", path.display()))?;

    let db_path = config.database_path_absolute(Path::new(&global.project_dir));
    if global.verbose {
        eprintln!("[verbose] Opening estimate database at {}", db_path.display());
    }
    let db = EstimateDb::open(&db_path)
        .with_context(|| format!("failed to open {}", db_path.display()))?;
    Ok((config, db))
}

/// Read a parameter map from `--params` inline JSON or `--params-file`.
///
/// The JSON shape is a flat object of name → number, e.g.
/// `{"san_nha": 120, "so_tang": 3}`.
pub(crate) fn read_parameters(
    inline: Option<&str>,
    file: Option<&str>,
) -> Result<ParameterSet> {
    let text = match (inline, file) {
        (Some(inline), _) => inline.to_string(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read parameter file {path}"))?,
        (None, None) => "{}".to_string(),
    };

    let map: BTreeMap<String, f64> =
        serde_json::from_str(&text).context("parameters must be a JSON object of name -> number")?;
    Ok(map.into_iter().collect())
}

/// Print recompute warnings the way users expect to see them.
pub(crate) fn print_warnings(warnings: &[String]) {
    for warning in warnings {
        println!("  warning: {warning}");
    }
}

#[cfg(test)]
#[path = "common_test.rs"]
mod tests;
