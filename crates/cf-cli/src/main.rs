//! Costflow CLI - norm-based quantity and cost estimation

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::Cli;
use commands::{clean, eval, import, init, ls, price, recompute, set_dims};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        cli::Commands::Init(args) => init::execute(args, &cli.global),
        cli::Commands::Eval(args) => eval::execute(args, &cli.global),
        cli::Commands::Price(args) => price::execute(args, &cli.global),
        cli::Commands::Recompute(args) => recompute::execute(args, &cli.global),
        cli::Commands::Import(args) => import::execute(args, &cli.global),
        cli::Commands::SetDims(args) => set_dims::execute(args, &cli.global),
        cli::Commands::Ls(args) => ls::execute(args, &cli.global),
        cli::Commands::Clean(args) => clean::execute(args, &cli.global),
    }
}
