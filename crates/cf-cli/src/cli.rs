//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Costflow - norm-based quantity and cost estimation for construction projects
#[derive(Parser, Debug)]
#[command(name = "cf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,

    /// Override config file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a costflow.yml and an empty estimate database
    Init(InitArgs),

    /// Evaluate a formula against a parameter set
    Eval(EvalArgs),

    /// Roll up a norm's unit price from its resource lines
    Price(PriceArgs),

    /// Regenerate a project's estimate from a template or categories
    Recompute(RecomputeArgs),

    /// Import a spreadsheet row file into a project's estimate
    Import(ImportArgs),

    /// Recompute one estimate item's quantity from manual dimensions
    SetDims(SetDimsArgs),

    /// List a project's estimate items
    Ls(LsArgs),

    /// Remove a project's parameters and estimate items
    Clean(CleanArgs),
}

/// Arguments for the clean command
#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Project to clean
    #[arg(long)]
    pub project: i64,
}

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project name to write into costflow.yml
    #[arg(short, long, default_value = "costflow")]
    pub name: String,
}

/// Arguments for the eval command
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Formula to evaluate, e.g. "san_nha * so_tang * 1.05"
    pub formula: String,

    /// Parameters as inline JSON, e.g. '{"san_nha": 120, "so_tang": 3}'
    #[arg(long)]
    pub params: Option<String>,

    /// Path to a JSON file with the parameter map
    #[arg(long)]
    pub params_file: Option<String>,
}

/// Arguments for the price command
#[derive(Args, Debug)]
pub struct PriceArgs {
    /// Norm code to price, e.g. "AF.11213"
    pub norm_code: String,
}

/// Arguments for the recompute command
#[derive(Args, Debug)]
pub struct RecomputeArgs {
    /// Project to recompute
    #[arg(long)]
    pub project: i64,

    /// Template name to instantiate
    #[arg(short, long, conflicts_with = "categories")]
    pub template: Option<String>,

    /// Task categories to instantiate (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub categories: Vec<String>,

    /// Parameters as inline JSON
    #[arg(long)]
    pub params: Option<String>,

    /// Path to a JSON file with the parameter map
    #[arg(long)]
    pub params_file: Option<String>,
}

/// Arguments for the import command
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Project to import into
    #[arg(long)]
    pub project: i64,

    /// Path to a JSON file holding an array of rows (arrays of cells)
    #[arg(short, long)]
    pub file: String,

    /// Section label for rows before the first section header
    #[arg(long)]
    pub section: Option<String>,
}

/// Arguments for the set-dims command
#[derive(Args, Debug)]
pub struct SetDimsArgs {
    /// Project owning the item
    #[arg(long)]
    pub project: i64,

    /// Estimate item to update
    #[arg(long)]
    pub item: i64,

    /// Length
    #[arg(long)]
    pub length: Option<f64>,

    /// Width
    #[arg(long)]
    pub width: Option<f64>,

    /// Height
    #[arg(long)]
    pub height: Option<f64>,

    /// Multiplier
    #[arg(long)]
    pub factor: Option<f64>,
}

/// Arguments for the ls command
#[derive(Args, Debug)]
pub struct LsArgs {
    /// Project to list
    #[arg(long)]
    pub project: i64,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,
}

/// Output formats for the ls command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON array
    Json,
}
