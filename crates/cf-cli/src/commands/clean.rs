//! Clean command implementation

use anyhow::Result;

use crate::cli::{CleanArgs, GlobalArgs};
use crate::commands::common::open_db;

/// Execute the clean command
pub fn execute(args: &CleanArgs, global: &GlobalArgs) -> Result<()> {
    let (_, db) = open_db(global)?;
    db.clear_project_data(args.project)?;
    println!("Removed parameters and estimate items for project {}", args.project);
    Ok(())
}
