//! Price command implementation

use anyhow::Result;
use cf_engine::resolve_norm_unit_price;

use crate::cli::{GlobalArgs, PriceArgs};
use crate::commands::common::{open_db, print_warnings};

/// Execute the price command
pub fn execute(args: &PriceArgs, global: &GlobalArgs) -> Result<()> {
    let (_, db) = open_db(global)?;
    let rolled = resolve_norm_unit_price(&db, &args.norm_code)?;

    println!("{} = {}", args.norm_code, rolled.unit_price);
    print_warnings(&rolled.warnings);
    Ok(())
}
