//! Init command implementation

use anyhow::{bail, Context, Result};
use cf_store::EstimateDb;
use std::path::Path;

use crate::cli::{GlobalArgs, InitArgs};
use crate::commands::common::config_path;

/// Execute the init command
pub fn execute(args: &InitArgs, global: &GlobalArgs) -> Result<()> {
    let path = config_path(global);
    if path.exists() {
        bail!("{} already exists", path.display());
    }

    let content = format!(
        "name: {}\ndatabase_path: costflow.duckdb\n",
        args.name
    );
    std::fs::write(&path, content)
        .with_context(|| format!("failed to write {}", path.display()))?;

    let db_path = Path::new(&global.project_dir).join("costflow.duckdb");
    EstimateDb::open(&db_path)
        .with_context(|| format!("failed to create {}", db_path.display()))?;

    println!("Initialized costflow project '{}' in {}", args.name, global.project_dir);
    Ok(())
}
