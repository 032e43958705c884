//! Eval command implementation

use anyhow::Result;

use crate::cli::{EvalArgs, GlobalArgs};
use crate::commands::common::read_parameters;

/// Execute the eval command
pub fn execute(args: &EvalArgs, global: &GlobalArgs) -> Result<()> {
    let params = read_parameters(args.params.as_deref(), args.params_file.as_deref())?;
    if global.verbose {
        eprintln!("[verbose] Evaluating with {} parameters", params.len());
    }

    let value = cf_eval::evaluate(&args.formula, &params.values())?;
    println!("{value}");
    Ok(())
}
