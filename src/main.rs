//! Command-line interface for adm-gen
//!
//! # Usage Examples
//!
//! ```bash
//! # Reproducible run with pretty-printed records
//! adm-gen --seed 7 --count 3 --pretty
//!
//! # Settings from YAML, with a flag override
//! adm-gen --config generator.yaml --max-members 8 --output out.adm
//!
//! # Unquoted numeric payloads for insert statements
//! adm-gen --format-mode direct-insertion
//! ```
//!
//! Logs go to stderr; set `RUST_LOG=info` to see the run summary.

use adm_gen::{open_output, Cli, RecordAssembler};
use adm_generator::ValueGenerator;
use anyhow::Context;
use clap::Parser;
use tracing::info;

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = cli.generator_config()?;
    let generator = ValueGenerator::new(config).context("Invalid generator config")?;

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(seed, count = cli.count, "Generating records");

    let mut assembler =
        RecordAssembler::new(generator, seed, cli.record_options(), cli.encoder_options())
            .context("Invalid record options")?;

    let mut writer = open_output(cli.output.as_deref())
        .with_context(|| format!("Failed to open output {:?}", cli.output))?;
    assembler
        .write_records(&mut writer, cli.count)
        .context("Failed to write records")?;

    Ok(())
}
