use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use hclexpr::config::{save_config, DiscardPolicy, HclExprConfig, CONFIG_FILENAME};
use hclexpr::converter::ExpressionConverter;
use tracing_subscriber::EnvFilter;

/// Resolve references in Terraform interpolation strings.
#[derive(Parser)]
#[command(
    name = "hclexpr",
    about = "Resolve references in Terraform interpolation strings"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration file
    Init {
        /// Configuration file to create
        #[arg(long, default_value = CONFIG_FILENAME)]
        config: PathBuf,
    },
    /// Print the expression tree for each interpolation string
    Convert {
        /// Interpolation strings to convert
        #[arg(required = true)]
        expressions: Vec<String>,
        /// JSON array of known node identifiers
        #[arg(short, long)]
        catalog: PathBuf,
        /// Configuration file; built-in defaults apply when it does not exist
        #[arg(long, default_value = CONFIG_FILENAME)]
        config: PathBuf,
        /// Override the configured handling of text dropped around a lone reference
        #[arg(long, value_parser = parse_discard_policy)]
        discard_policy: Option<DiscardPolicy>,
    },
    /// Print the references found in an interpolation string
    Refs {
        /// Interpolation string to scan
        expression: String,
        /// JSON array of known node identifiers
        #[arg(short, long)]
        catalog: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Parses a `--discard-policy` value (`ignore`, `warn` or `error`).
fn parse_discard_policy(s: &str) -> Result<DiscardPolicy, String> {
    DiscardPolicy::from_str(s)
        .ok_or_else(|| format!("unknown discard policy '{}' (expected ignore, warn or error)", s))
}

fn run(cli: Cli) -> hclexpr::errors::Result<()> {
    match cli.command {
        Commands::Init { config } => {
            save_config(&config, &HclExprConfig::default())?;
            println!("Wrote default configuration to {}", config.display());
        }
        Commands::Convert {
            expressions,
            catalog,
            config,
            discard_policy,
        } => {
            let mut converter = ExpressionConverter::open(&catalog, Some(&config))?;
            if let Some(policy) = discard_policy {
                converter = converter.with_discard_policy(policy);
            }
            for expr in converter.convert_all(&expressions)? {
                println!("{}", serde_json::to_string_pretty(&expr)?);
            }
        }
        Commands::Refs {
            expression,
            catalog,
        } => {
            let converter = ExpressionConverter::open(&catalog, None)?;
            let refs = converter.references(&expression)?;
            if refs.is_empty() {
                println!("No references found in '{}'", expression);
            } else {
                for r in &refs {
                    println!(
                        "{}..{} {} -> {}",
                        r.start, r.end, r.referencee.full, r.referencee.id
                    );
                }
            }
        }
    }
    Ok(())
}
