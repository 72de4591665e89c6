//! Topics CLI
//!
//! Binary entry point. CLI parsing (clap) and logging setup. Core logic
//! lives in the library crate.

mod cli;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "topics")]
#[command(about = "Search the computer-science topic catalog")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log level (logs go to stderr)
    #[arg(
        short,
        long,
        global = true,
        default_value = "warn",
        value_parser = ["error", "warn", "info", "debug", "trace"]
    )]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search topics by free-text query
    Search(SearchArgs),
    /// Show a random selection of topics
    Suggest(SuggestArgs),
    /// List categories with topic counts
    Categories(CategoriesArgs),
    /// List topics, optionally filtered by category or difficulty
    List(ListArgs),
    /// Show details for a single topic
    Info(InfoArgs),
    /// Validate a catalog file
    Validate(ValidateArgs),
    /// Write a default config file
    Setup(SetupArgs),
}

/// Shared catalog source arguments for CLI subcommands.
#[derive(clap::Args, Debug, Clone)]
struct CatalogArgs {
    /// Catalog file to load, TOML or JSON (can be specified multiple times).
    /// Defaults to the config's catalog paths, then the built-in catalog.
    #[arg(long)]
    catalog: Vec<PathBuf>,
}

#[derive(clap::Args, Debug)]
struct SearchArgs {
    /// Search query
    query: String,

    /// Maximum number of results (default from config, else 8)
    #[arg(long)]
    limit: Option<usize>,

    /// Minimum trimmed query length (default from config, else 2)
    #[arg(long)]
    min_length: Option<usize>,

    /// Only search topics in this category
    #[arg(long)]
    category: Option<String>,

    /// Only search topics with this difficulty
    #[arg(long)]
    difficulty: Option<String>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    catalogs: CatalogArgs,
}

#[derive(clap::Args, Debug)]
struct SuggestArgs {
    /// Number of topics to suggest (default from config, else 6)
    #[arg(long)]
    count: Option<usize>,

    /// Seed for a reproducible selection
    #[arg(long)]
    seed: Option<u64>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    catalogs: CatalogArgs,
}

#[derive(clap::Args, Debug)]
struct CategoriesArgs {
    #[command(flatten)]
    catalogs: CatalogArgs,
}

#[derive(clap::Args, Debug)]
struct ListArgs {
    /// Filter by category (exact, case-insensitive)
    #[arg(long)]
    category: Option<String>,

    /// Filter by difficulty (exact, case-insensitive)
    #[arg(long)]
    difficulty: Option<String>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    catalogs: CatalogArgs,
}

#[derive(clap::Args, Debug)]
struct InfoArgs {
    /// Topic name (case-insensitive)
    name: String,

    #[command(flatten)]
    catalogs: CatalogArgs,
}

#[derive(clap::Args, Debug)]
struct ValidateArgs {
    /// Path to the catalog file to validate
    path: PathBuf,
}

#[derive(clap::Args, Debug)]
struct SetupArgs {
    /// Catalog files to record in the config
    #[arg(long)]
    catalog: Vec<PathBuf>,

    /// Overwrite an existing config file
    #[arg(long)]
    force: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(&cli.log_level);

    match cli.command {
        Command::Search(args) => cli::search::run_search(args),
        Command::Suggest(args) => cli::search::run_suggest(args),
        Command::Categories(args) => cli::search::run_categories(args),
        Command::List(args) => cli::search::run_list(args),
        Command::Info(args) => cli::search::run_info(args),
        Command::Validate(args) => cli::author::run_validate(args),
        Command::Setup(args) => cli::setup::run_setup(args),
    }
}

/// Install the stderr tracing subscriber.
fn init_tracing(log_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(
                    format!("topic_search={log_level}")
                        .parse()
                        .expect("valid log directive"),
                )
                .add_directive(
                    format!("topics={log_level}")
                        .parse()
                        .expect("valid log directive"),
                ),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
