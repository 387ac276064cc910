mod models;

use std::fs;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use fabrica_core::{Error as CoreError, Record};
use fabrica_generate::{Engine, GenerateOptions, Overrides, RuleTable};
use models::{Address, DisputeCase, Order, Product};

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Core(#[from] CoreError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "fabrica", version, about = "Synthetic test data generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate records for one of the built-in demo models.
    Demo(DemoArgs),
    /// Generate records shaped like a sample JSON document.
    FromJson(FromJsonArgs),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DemoModel {
    Address,
    Product,
    DisputeCase,
    Order,
}

#[derive(Args, Debug)]
struct DemoArgs {
    /// Which demo model to generate.
    #[arg(long, value_enum, default_value_t = DemoModel::DisputeCase)]
    model: DemoModel,
    /// How many records to generate.
    #[arg(long, default_value_t = 1)]
    count: usize,
    /// JSON rule file keyed by dotted field path.
    #[arg(long)]
    rules: Option<PathBuf>,
    /// Per-field overrides file keyed by `field_name_<name>`.
    #[arg(long)]
    overrides: Option<PathBuf>,
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args, Debug)]
struct FromJsonArgs {
    /// Sample JSON document acting as the shape template.
    #[arg(long, value_name = "FILE")]
    sample: PathBuf,
    /// How many records to generate.
    #[arg(long, default_value_t = 1)]
    count: usize,
    /// JSON rule file keyed by dotted field path.
    #[arg(long)]
    rules: Option<PathBuf>,
    /// Per-field overrides file keyed by `field_name_<name>`.
    #[arg(long)]
    overrides: Option<PathBuf>,
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Demo(args) => run_demo(args),
        Command::FromJson(args) => run_from_json(args),
    }
}

fn run_demo(args: DemoArgs) -> Result<(), CliError> {
    let rules = load_rules(args.rules.as_deref())?;
    let overrides = load_overrides(args.overrides.as_deref())?;
    let engine = engine_with_seed(args.seed);

    let mut records = Vec::with_capacity(args.count);
    for _ in 0..args.count {
        let record = match args.model {
            DemoModel::Address => engine.generate_for::<Address>(&rules, &overrides)?,
            DemoModel::Product => engine.generate_for::<Product>(&rules, &overrides)?,
            DemoModel::DisputeCase => engine.generate_for::<DisputeCase>(&rules, &overrides)?,
            DemoModel::Order => engine.generate_for::<Order>(&rules, &overrides)?,
        };
        records.push(record);
    }

    tracing::info!(model = ?args.model, count = records.len(), "demo records generated");
    print_records(&records)
}

fn run_from_json(args: FromJsonArgs) -> Result<(), CliError> {
    let sample: serde_json::Value = serde_json::from_str(&fs::read_to_string(&args.sample)?)?;
    let rules = load_rules(args.rules.as_deref())?;
    let overrides = load_overrides(args.overrides.as_deref())?;
    let engine = engine_with_seed(args.seed);

    let records = engine.generate_from_sample(&sample, args.count, &rules, &overrides)?;

    tracing::info!(sample = %args.sample.display(), count = records.len(), "sample-driven records generated");
    print_records(&records)
}

fn engine_with_seed(seed: Option<u64>) -> Engine {
    let options = GenerateOptions {
        seed,
        ..GenerateOptions::default()
    };
    Engine::new(options)
}

fn load_rules(path: Option<&std::path::Path>) -> Result<RuleTable, CliError> {
    match path {
        Some(path) => {
            let doc: serde_json::Value = serde_json::from_str(&fs::read_to_string(path)?)?;
            Ok(RuleTable::from_json(&doc)?)
        }
        None => Ok(RuleTable::new()),
    }
}

fn load_overrides(path: Option<&std::path::Path>) -> Result<Overrides, CliError> {
    match path {
        Some(path) => {
            let doc: serde_json::Value = serde_json::from_str(&fs::read_to_string(path)?)?;
            Ok(Overrides::from_json(&doc)?)
        }
        None => Ok(Overrides::new()),
    }
}

fn print_records(records: &[Record]) -> Result<(), CliError> {
    let rendered: Vec<serde_json::Value> = records.iter().map(Record::to_json).collect();
    println!("{}", serde_json::to_string_pretty(&rendered)?);
    Ok(())
}
