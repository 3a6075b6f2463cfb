//! Record assembly: generated documents with optional key and id fields.

use adm_core::{escape, Value, ValueError};
use adm_encoder::{render_with, EncodeError, EncoderOptions};
use adm_generator::{GeneratorError, ValueGenerator};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Errors that can occur while producing records.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// Generator error.
    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),

    /// Key or id could not be added to the record.
    #[error("Value error: {0}")]
    Value(#[from] ValueError),

    /// Record could not be rendered.
    #[error("Encode error: {0}")]
    Encode(#[from] EncodeError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Fields layered onto every generated record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordOptions {
    /// Key every record must contain.
    pub key: Option<String>,
    /// Field receiving a sequential id.
    pub id_field: Option<String>,
    /// First id.
    pub id_start: i64,
}

/// Metrics from a generation run.
#[derive(Debug, Clone, Default)]
pub struct RunMetrics {
    /// Number of records written.
    pub records_written: u64,
    /// Number of records dropped after a failure.
    pub records_skipped: u64,
    /// Bytes written, newlines included.
    pub bytes_written: u64,
    /// Total time taken.
    pub elapsed: Duration,
}

impl RunMetrics {
    /// Calculate records per second.
    pub fn records_per_second(&self) -> f64 {
        if self.elapsed.as_secs_f64() > 0.0 {
            self.records_written as f64 / self.elapsed.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Produces rendered records from one seeded random stream.
pub struct RecordAssembler {
    generator: ValueGenerator,
    rng: StdRng,
    options: RecordOptions,
    encoder: EncoderOptions,
    next_id: i64,
}

impl RecordAssembler {
    /// Create an assembler.
    ///
    /// Key and id field names are checked against the encoder markers here,
    /// so a bad name fails the run instead of every record.
    pub fn new(
        generator: ValueGenerator,
        seed: u64,
        options: RecordOptions,
        encoder: EncoderOptions,
    ) -> Result<Self, RecordError> {
        for name in options.key.iter().chain(options.id_field.iter()) {
            escape::check_text(name)?;
        }
        Ok(Self {
            generator,
            rng: StdRng::seed_from_u64(seed),
            next_id: options.id_start,
            options,
            encoder,
        })
    }

    /// Id the next record will receive.
    pub fn current_id(&self) -> i64 {
        self.next_id
    }

    /// Generate the next record as a value tree.
    ///
    /// The id counter advances whether or not the record succeeds, so ids
    /// stay tied to record positions.
    pub fn next_record(&mut self) -> Result<Value, RecordError> {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);

        let bounds = self.generator.bounds();
        let mut record = self.generator.generate_object(bounds, &mut self.rng)?;

        if let Some(key) = &self.options.key {
            let present = record
                .as_object()
                .is_some_and(|members| members.contains_key(key));
            if !present {
                let value = self.generator.generate(&mut self.rng)?;
                record.add_key(key.clone(), value)?;
            }
        }

        if let Some(field) = &self.options.id_field {
            record.add_key(field.clone(), id_value(id))?;
        }

        Ok(record)
    }

    /// Render the next record to text.
    pub fn next_rendered(&mut self) -> Result<String, RecordError> {
        let record = self.next_record()?;
        Ok(render_with(&record, &self.encoder)?)
    }

    /// Write `count` records, one per line.
    ///
    /// A record that fails to generate or render is logged and skipped.
    /// Write failures end the run.
    pub fn write_records<W: Write>(
        &mut self,
        writer: &mut W,
        count: u64,
    ) -> Result<RunMetrics, RecordError> {
        let start_time = Instant::now();
        let mut metrics = RunMetrics::default();

        for index in 0..count {
            let text = match self.next_rendered() {
                Ok(text) => text,
                Err(e) => {
                    warn!(index, error = %e, "Skipping record");
                    metrics.records_skipped += 1;
                    continue;
                }
            };

            writer.write_all(text.as_bytes())?;
            writeln!(writer)?;
            metrics.records_written += 1;
            metrics.bytes_written += text.len() as u64 + 1;

            if metrics.records_written % 10000 == 0 {
                debug!("Written {} records", metrics.records_written);
            }
        }

        writer.flush()?;
        metrics.elapsed = start_time.elapsed();

        info!(
            "Generation complete: {} records ({} skipped), {} bytes in {:?} ({:.2} records/sec)",
            metrics.records_written,
            metrics.records_skipped,
            metrics.bytes_written,
            metrics.elapsed,
            metrics.records_per_second()
        );

        Ok(metrics)
    }
}

/// Plain JSON number while it fits in 32 bits, `bigint` beyond.
fn id_value(id: i64) -> Value {
    match i32::try_from(id) {
        Ok(small) => Value::Int32(small),
        Err(_) => Value::BigInt(id),
    }
}
