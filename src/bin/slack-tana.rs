//! slack-tana CLI: converts a Slack export into a Tana Intermediate File.
//!
//! Usage:
//!   slack-tana <SOURCE_DIR> <OUTPUT_NAME> [--config file] [--truncate-names N] [--sequential-ids]

use clap::Parser;
use slack_tana::{
    write_intermediate_file, ConvertError, ConverterConfig, IdStrategy, SlackConverter,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "slack-tana",
    version,
    about = "Convert a Slack workspace export into a Tana Intermediate File"
)]
struct Cli {
    /// Slack export directory (containing users.json)
    source: PathBuf,
    /// Output base name; `.tif.json` is appended
    output: PathBuf,
    /// YAML config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Cut node labels and user names to N characters
    #[arg(long, value_name = "N")]
    truncate_names: Option<usize>,
    /// Issue sequential node uids instead of random UUIDs
    #[arg(long)]
    sequential_ids: bool,
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<ConverterConfig, ConvertError> {
    let mut config = match &cli.config {
        Some(path) => ConverterConfig::load(path)?,
        None => ConverterConfig::default(),
    };
    if cli.truncate_names.is_some() {
        config.truncate_names = cli.truncate_names;
    }
    if cli.sequential_ids {
        config.id_strategy = IdStrategy::Sequential;
    }
    Ok(config)
}

fn run(cli: &Cli) -> Result<(), ConvertError> {
    let config = load_config(cli)?;
    let file = SlackConverter::new(config).convert(&cli.source)?;

    if file.is_empty() {
        println!("No nodes found");
        return Ok(());
    }

    println!("{}", file.summary);
    let path = write_intermediate_file(&cli.output, &file)?;
    info!(nodes = file.summary.total_nodes, "done: {}", path.display());
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
