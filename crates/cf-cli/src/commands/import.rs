//! Import command implementation

use anyhow::{Context, Result};
use cf_import::{import_rows, Cell};

use crate::cli::{GlobalArgs, ImportArgs};
use crate::commands::common::open_db;

/// Execute the import command
pub fn execute(args: &ImportArgs, global: &GlobalArgs) -> Result<()> {
    let (config, db) = open_db(global)?;

    let content = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file))?;
    let rows: Vec<Vec<Cell>> =
        serde_json::from_str(&content).context("row file must be a JSON array of cell arrays")?;

    if global.verbose {
        eprintln!("[verbose] Read {} rows from {}", rows.len(), args.file);
    }

    let section = args.section.as_deref().unwrap_or(&config.default_section);
    let count = import_rows(&db, args.project, &rows, section)?;

    println!("Imported {count} items into project {}", args.project);
    Ok(())
}
