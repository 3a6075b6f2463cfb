//! CLI argument definitions.

use adm_core::FormatMode;
use adm_encoder::EncoderOptions;
use adm_generator::{GeneratorConfig, Shares};
use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::record::RecordOptions;

/// How typed payloads are written.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatModeArg {
    /// Quote every typed payload, for bulk loading
    #[default]
    LoadDataset,
    /// Leave finite numeric payloads unquoted, for insert statements
    DirectInsertion,
}

impl From<FormatModeArg> for FormatMode {
    fn from(arg: FormatModeArg) -> Self {
        match arg {
            FormatModeArg::LoadDataset => FormatMode::LoadDataset,
            FormatModeArg::DirectInsertion => FormatMode::DirectInsertion,
        }
    }
}

/// Generate random ADM records, one per line.
#[derive(Parser, Clone, Debug)]
#[command(name = "adm-gen", version, about)]
pub struct Cli {
    /// Number of records to generate
    #[arg(long, short = 'n', default_value = "10", env = "ADM_GEN_COUNT")]
    pub count: u64,

    /// Random seed (same seed = same records); drawn at random when omitted
    #[arg(long, env = "ADM_GEN_SEED")]
    pub seed: Option<u64>,

    /// Generator config YAML file; flags below override its values
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Category weights as PRIMITIVE:INCOMPLETE:DERIVED, e.g. 6:1:3
    #[arg(long)]
    pub shares: Option<Shares>,

    /// Fewest members per object, array or multiset
    #[arg(long)]
    pub min_members: Option<usize>,

    /// Most members per object, array or multiset
    #[arg(long)]
    pub max_members: Option<usize>,

    /// Nesting ceiling below the record itself
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Indent records with four spaces
    #[arg(long)]
    pub pretty: bool,

    /// Payload quoting for typed values
    #[arg(long, value_enum, default_value_t = FormatModeArg::LoadDataset)]
    pub format_mode: FormatModeArg,

    /// Output file (stdout when omitted)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Key every record must contain; filled with a generated value if absent
    #[arg(long)]
    pub key: Option<String>,

    /// Field that receives a sequential record id
    #[arg(long)]
    pub id_field: Option<String>,

    /// First id written to --id-field
    #[arg(long, default_value = "0")]
    pub id_start: i64,
}

impl Cli {
    /// The YAML config (or defaults) with command-line overrides applied.
    pub fn generator_config(&self) -> anyhow::Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::from_file(path)
                .with_context(|| format!("Failed to load generator config from {path:?}"))?,
            None => GeneratorConfig::default(),
        };

        if let Some(shares) = self.shares {
            config.shares = shares;
        }
        if let Some(min_members) = self.min_members {
            config.min_members = min_members;
        }
        if let Some(max_members) = self.max_members {
            config.max_members = max_members;
        }
        if let Some(max_depth) = self.max_depth {
            config.max_depth = max_depth;
        }
        Ok(config)
    }

    pub fn encoder_options(&self) -> EncoderOptions {
        EncoderOptions::new(self.pretty, self.format_mode.into())
    }

    pub fn record_options(&self) -> RecordOptions {
        RecordOptions {
            key: self.key.clone(),
            id_field: self.id_field.clone(),
            id_start: self.id_start,
        }
    }
}
