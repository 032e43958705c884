//! Set-dims command implementation

use anyhow::Result;
use cf_core::Dimensions;
use cf_engine::update_item_dimensions;

use crate::cli::{GlobalArgs, SetDimsArgs};
use crate::commands::common::open_db;

/// Execute the set-dims command
pub fn execute(args: &SetDimsArgs, global: &GlobalArgs) -> Result<()> {
    let (_, db) = open_db(global)?;

    let dims = Dimensions {
        length: args.length,
        width: args.width,
        height: args.height,
        factor: args.factor,
    };

    let quantity = update_item_dimensions(&db, args.project, args.item, &dims)?;
    println!("Item {} quantity is now {quantity}", args.item);
    Ok(())
}
