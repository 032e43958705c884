//! Ls command implementation

use anyhow::Result;
use cf_core::estimate::estimate_total;
use cf_store::estimates;

use crate::cli::{GlobalArgs, LsArgs, OutputFormat};
use crate::commands::common::open_db;

/// Execute the ls command
pub fn execute(args: &LsArgs, global: &GlobalArgs) -> Result<()> {
    let (_, db) = open_db(global)?;
    let items = estimates::load_project_items(db.conn(), args.project)?;

    match args.output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
        OutputFormat::Table => {
            let mut section = "";
            for item in &items {
                if item.section_name != section {
                    section = &item.section_name;
                    println!("{section}");
                }
                println!(
                    "  [{}] {} {} | {} {} x {} = {}",
                    item.id,
                    item.material_code,
                    item.material_name,
                    item.quantity,
                    item.unit,
                    item.unit_price,
                    item.total_cost()
                );
            }
            println!(
                "{} items, total {}",
                items.len(),
                estimate_total(&items)
            );
        }
    }
    Ok(())
}
