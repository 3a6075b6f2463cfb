//! Leaf value generators.
//!
//! Each submodule draws one family of scalar values from the caller's RNG.
//! [`generate_primitive`] dispatches on a [`PrimitiveKind`]; composites are
//! assembled by [`ValueGenerator`](crate::ValueGenerator).

pub mod binary;
pub mod numeric;
pub mod spatial;
pub mod temporal;
pub mod text;
pub mod uuid;

use crate::config::GeneratorConfig;
use adm_core::{Value, ValueError};
use rand::Rng;

/// Every leaf variant the generator can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    Boolean,
    String,
    TinyInt,
    SmallInt,
    Int32,
    BigInt,
    Float32,
    Float64,
    Binary,
    Point,
    Line,
    Rectangle,
    Circle,
    Polygon,
    Date,
    Time,
    DateTime,
    Duration,
    YearMonthDuration,
    DayTimeDuration,
    Interval,
    Uuid,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 22] = [
        Self::Boolean,
        Self::String,
        Self::TinyInt,
        Self::SmallInt,
        Self::Int32,
        Self::BigInt,
        Self::Float32,
        Self::Float64,
        Self::Binary,
        Self::Point,
        Self::Line,
        Self::Rectangle,
        Self::Circle,
        Self::Polygon,
        Self::Date,
        Self::Time,
        Self::DateTime,
        Self::Duration,
        Self::YearMonthDuration,
        Self::DayTimeDuration,
        Self::Interval,
        Self::Uuid,
    ];

    /// Pick a kind uniformly.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// Generate one leaf value of the given kind.
pub fn generate_primitive<R: Rng>(
    kind: PrimitiveKind,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Value, ValueError> {
    let special = config.special_float_probability;
    match kind {
        PrimitiveKind::Boolean => Ok(text::generate_boolean(rng)),
        PrimitiveKind::String => {
            text::generate_string(rng, config.string_length, &config.string_alphabet)
        }
        PrimitiveKind::TinyInt => numeric::generate_tiny_int(rng),
        PrimitiveKind::SmallInt => numeric::generate_small_int(rng),
        PrimitiveKind::Int32 => numeric::generate_int32(rng),
        PrimitiveKind::BigInt => numeric::generate_big_int(rng),
        PrimitiveKind::Float32 => numeric::generate_float(rng, special),
        PrimitiveKind::Float64 => numeric::generate_double(rng, special),
        PrimitiveKind::Binary => Ok(binary::generate_hex(rng, config.binary_bytes)),
        PrimitiveKind::Point => Ok(spatial::generate_point(rng)),
        PrimitiveKind::Line => Ok(spatial::generate_line(rng)),
        PrimitiveKind::Rectangle => Ok(spatial::generate_rectangle(rng)),
        PrimitiveKind::Circle => Ok(spatial::generate_circle(rng)),
        PrimitiveKind::Polygon => spatial::generate_polygon(rng, config.polygon_points),
        PrimitiveKind::Date => temporal::generate_date(rng),
        PrimitiveKind::Time => temporal::generate_time(rng),
        PrimitiveKind::DateTime => temporal::generate_datetime(rng),
        PrimitiveKind::Duration => Ok(temporal::generate_duration(rng)),
        PrimitiveKind::YearMonthDuration => Ok(temporal::generate_year_month_duration(rng)),
        PrimitiveKind::DayTimeDuration => Ok(temporal::generate_day_time_duration(rng)),
        PrimitiveKind::Interval => temporal::generate_interval(rng),
        PrimitiveKind::Uuid => Ok(uuid::generate_uuid_v4(rng)),
    }
}

/// Null or Missing with equal probability.
pub fn generate_incomplete<R: Rng>(rng: &mut R) -> Value {
    if rng.random_bool(0.5) {
        Value::Null
    } else {
        Value::Missing
    }
}
