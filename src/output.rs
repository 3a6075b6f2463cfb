//! Output selection: a file when a path is given, stdout otherwise.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Default buffer size for record writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Open a buffered writer for the records.
pub fn open_output(path: Option<&Path>) -> io::Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            info!("Writing records to '{}'", path.display());
            let file = File::create(path)?;
            Ok(Box::new(BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file)))
        }
        None => Ok(Box::new(BufWriter::with_capacity(
            DEFAULT_BUFFER_SIZE,
            io::stdout().lock(),
        ))),
    }
}
