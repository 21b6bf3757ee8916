use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use tally_finance::StatementProcessor;
use tracing_subscriber::EnvFilter;

mod config;
mod output;

use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "tally", version, about = "Extract transactions from bank statement text")]
struct Cli {
    /// Processor config file (TOML); defaults to ~/.tally/config.toml when present
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Built-in configuration preset: canonical or detailed
    #[arg(long, global = true)]
    preset: Option<String>,

    /// Log level for stderr diagnostics
    #[arg(long, global = true, env = "TALLY_LOG", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract transactions and a summary from statement text (FILE or stdin)
    Process {
        /// Text file holding the statement; reads stdin when omitted
        file: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Indent JSON output
        #[arg(long)]
        pretty: bool,

        /// Fail when no transaction could be extracted
        #[arg(long)]
        require_transactions: bool,
    },

    /// Processor configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    /// List category rules in evaluation order
    Categories,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the canonical configuration (to --config or ~/.tally/config.toml)
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration as TOML
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match cli.command {
        Command::Process {
            file,
            format,
            pretty,
            require_transactions,
        } => {
            let processor = build_processor(cli.config.as_deref(), cli.preset.as_deref())?;
            let bytes = read_input(file.as_deref())?;
            let result = processor.process_bytes(&bytes);

            if !result.success {
                if format == OutputFormat::Json {
                    output::write_json(std::io::stdout().lock(), &result, pretty)?;
                }
                let reason = result.error.unwrap_or_default();
                return Err(anyhow!("processing failed: {reason}"));
            }

            match format {
                OutputFormat::Json => output::write_json(std::io::stdout().lock(), &result, pretty)?,
                OutputFormat::Csv => output::write_csv(std::io::stdout().lock(), &result.transactions)?,
            }

            if require_transactions && result.transactions.is_empty() {
                bail!("no transactions could be extracted; the input may not contain statement rows");
            }
        }

        Command::Config { command } => match command {
            ConfigCommand::Init { force } => {
                config::init_config(cli.config.as_deref(), force)?;
            }
            ConfigCommand::Show => {
                let cfg = config::load_config(cli.config.as_deref(), cli.preset.as_deref())?;
                cfg.validate()?;
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },

        Command::Categories => {
            let processor = build_processor(cli.config.as_deref(), cli.preset.as_deref())?;
            let rules = &processor.config().categories;
            for category in processor.categorizer().labels() {
                let keywords: Vec<&str> = rules
                    .iter()
                    .filter(|r| r.category == category)
                    .flat_map(|r| r.keywords.iter().map(String::as_str))
                    .collect();
                if keywords.is_empty() {
                    println!("{:<16} (default)", category.label());
                } else {
                    println!("{:<16} {}", category.label(), keywords.join(", "));
                }
            }
        }
    }

    Ok(())
}

/// `RUST_LOG` wins when set; otherwise every tally crate logs at `level`.
fn log_directives(level: &str, rust_log: Option<String>) -> String {
    match rust_log {
        Some(directives) if !directives.trim().is_empty() => directives,
        _ => format!("tally={level},tally_core={level},tally_ingest={level},tally_finance={level}"),
    }
}

fn init_logging(level: &str) {
    let directives = log_directives(level, std::env::var(EnvFilter::DEFAULT_ENV).ok());
    let filter = EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_processor(config: Option<&Path>, preset: Option<&str>) -> Result<StatementProcessor> {
    let cfg = config::load_config(config, preset)?;
    StatementProcessor::new(cfg).context("building statement processor")
}

fn read_input(file: Option<&Path>) -> Result<Vec<u8>> {
    match file {
        Some(path) => {
            if !path.exists() {
                bail!("statement not found: {}", path.display());
            }
            std::fs::read(path).with_context(|| format!("read {}", path.display()))
        }
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .context("read stdin")?;
            Ok(buf)
        }
    }
}
