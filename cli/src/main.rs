//! premine-gen: prints the premine allocation parameters for a genesis record.

mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;

use config::{GeneratorConfig, OutputFormat};
use premine_allocation::{render, render_json, AllocationBuilder, PrefixValidator};
use premine_types::{AllocationPolicy, AmountWidth};
use premine_utils::LogFormat;

/// Exit code for a successful run.
const EXIT_OK: u8 = 0;
/// Exit code when the command line is malformed.
const EXIT_USAGE: u8 = 1;
/// Exit code when the allocation cannot be built.
const EXIT_FAILURE: u8 = 2;

const INSTRUCTIONS: &str = "\
Instructions:
  1. Generate a wallet to receive the premine and note its address.
  2. Run premine-gen with that address.
  3. Give the printed atomic amount hex to the genesis transaction builder.
  4. Put the resulting blob in the chain config as GENESIS_TX and rebuild.

Example:
  premine-gen ox123456789abcdef...";

#[derive(Parser, Debug)]
#[command(
    name = "premine-gen",
    version,
    about = "Compute the premine allocation for a new ledger's genesis record",
    after_help = INSTRUCTIONS
)]
struct Cli {
    /// Address that receives the premine.
    #[arg(allow_hyphen_values = true)]
    destination: String,

    /// Output format.
    #[arg(long, value_enum, env = "PREMINE_FORMAT")]
    format: Option<OutputFormat>,

    /// Require destinations to start with this prefix (Base58 shape check).
    #[arg(long, env = "PREMINE_ADDRESS_PREFIX")]
    address_prefix: Option<String>,

    /// Require destinations to be exactly this many characters long.
    #[arg(long, env = "PREMINE_ADDRESS_LENGTH")]
    address_length: Option<usize>,

    /// Width of the on-chain amount field: "u64" or "u128".
    #[arg(long, env = "PREMINE_AMOUNT_WIDTH")]
    amount_width: Option<AmountWidth>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "PREMINE_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "PREMINE_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    /// Layer command-line values over the file config.
    fn merge_into(&self, file: GeneratorConfig) -> GeneratorConfig {
        GeneratorConfig {
            format: self.format.unwrap_or(file.format),
            address_prefix: self.address_prefix.clone().or(file.address_prefix),
            address_length: self.address_length.or(file.address_length),
            amount_width: self.amount_width.unwrap_or(file.amount_width),
            log_level: self.log_level.clone().unwrap_or(file.log_level),
            log_format: self.log_format.unwrap_or(file.log_format),
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return usage(e),
    };

    match run(&cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::from(EXIT_OK)
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

/// Print help/version, or the usage message for a malformed command line.
fn usage(e: clap::Error) -> ExitCode {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            print!("{}", e.render());
            ExitCode::from(EXIT_OK)
        }
        _ => {
            println!("{}", e.render());
            println!("{INSTRUCTIONS}");
            ExitCode::from(EXIT_USAGE)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let file_config = match &cli.config {
        Some(path) => GeneratorConfig::from_toml_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GeneratorConfig::default(),
    };
    let config = cli.merge_into(file_config);

    premine_utils::init_logging(config.log_format, &config.log_level)?;
    if let Some(path) = &cli.config {
        tracing::info!("Loaded config from {}", path.display());
    }

    let policy = AllocationPolicy::default().with_amount_width(config.amount_width);
    let builder = builder_for(&config);
    tracing::info!(
        validator = builder.validator_name(),
        amount_width = %policy.amount_width,
        "building premine allocation"
    );

    let descriptor = builder
        .build(&cli.destination, &policy)
        .context("cannot build premine allocation")?;

    match config.format {
        OutputFormat::Text => Ok(render(&descriptor)),
        OutputFormat::Json => Ok(render_json(&descriptor)? + "\n"),
    }
}

fn builder_for(config: &GeneratorConfig) -> AllocationBuilder {
    if !config.validates_addresses() {
        return AllocationBuilder::new();
    }
    let mut validator = PrefixValidator::new(config.address_prefix.clone().unwrap_or_default());
    if let Some(len) = config.address_length {
        validator = validator.with_length(len);
    }
    AllocationBuilder::with_validator(validator)
}
