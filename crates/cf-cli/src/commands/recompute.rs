//! Recompute command implementation

use anyhow::{bail, Result};
use cf_engine::{recompute_from_categories, recompute_from_template};
use cf_store::templates;

use crate::cli::{GlobalArgs, RecomputeArgs};
use crate::commands::common::{open_db, print_warnings, read_parameters};

/// Execute the recompute command
pub fn execute(args: &RecomputeArgs, global: &GlobalArgs) -> Result<()> {
    let (_, db) = open_db(global)?;
    let params = read_parameters(args.params.as_deref(), args.params_file.as_deref())?;

    let outcome = if let Some(template_name) = &args.template {
        let Some(template) = templates::find_template(db.conn(), template_name)? else {
            bail!("no template named '{template_name}'");
        };
        if global.verbose {
            eprintln!(
                "[verbose] Recomputing project {} from template '{}'",
                args.project, template.name
            );
        }
        recompute_from_template(&db, args.project, template.id, &params)?
    } else if !args.categories.is_empty() {
        if global.verbose {
            eprintln!(
                "[verbose] Recomputing project {} from categories {:?}",
                args.project, args.categories
            );
        }
        recompute_from_categories(&db, args.project, &params, &args.categories)?
    } else {
        bail!("specify either --template or --categories");
    };

    println!(
        "Recomputed project {}: {} items, {} warnings",
        args.project,
        outcome.count,
        outcome.warnings.len()
    );
    print_warnings(&outcome.warnings);
    Ok(())
}
