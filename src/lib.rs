//! adm-gen library
//!
//! Assembles random ADM records from the workspace crates:
//!
//! - `adm_core` - the value model and its literal notation
//! - `adm_generator` - the weighted recursive generator
//! - `adm_encoder` - rendering value trees to ADM text
//!
//! This crate adds what a runnable tool needs on top: CLI arguments, record
//! assembly with optional key and id fields, and output selection.
//!
//! # CLI Usage
//!
//! ```bash
//! # Ten compact records to stdout
//! adm-gen --seed 42
//!
//! # Deeper documents with an id column, written to a file
//! adm-gen --count 1000 --max-depth 4 --shares 6:1:3 \
//!   --id-field id --id-start 1 --output data.adm
//! ```

pub mod args;
pub mod output;
pub mod record;

pub use args::{Cli, FormatModeArg};
pub use output::open_output;
pub use record::{RecordAssembler, RecordError, RecordOptions, RunMetrics};
