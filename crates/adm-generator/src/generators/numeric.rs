//! Integer and floating point generators.

use adm_core::{Value, ValueError};
use rand::Rng;

const SPECIAL_VALUES: [f64; 3] = [f64::NAN, f64::INFINITY, f64::NEG_INFINITY];

pub fn generate_tiny_int<R: Rng>(rng: &mut R) -> Result<Value, ValueError> {
    Value::tiny_int(rng.random_range(i8::MIN..=i8::MAX).into())
}

pub fn generate_small_int<R: Rng>(rng: &mut R) -> Result<Value, ValueError> {
    Value::small_int(rng.random_range(i16::MIN..=i16::MAX).into())
}

pub fn generate_int32<R: Rng>(rng: &mut R) -> Result<Value, ValueError> {
    Value::int32(rng.random_range(i32::MIN..=i32::MAX).into())
}

pub fn generate_big_int<R: Rng>(rng: &mut R) -> Result<Value, ValueError> {
    Value::big_int(rng.random_range(i64::MIN..=i64::MAX).into())
}

/// NaN, +Inf or -Inf with equal probability.
pub fn random_special<R: Rng>(rng: &mut R) -> f64 {
    SPECIAL_VALUES[rng.random_range(0..SPECIAL_VALUES.len())]
}

/// Uniform value in `[-max, max)`, scaled from a unit draw.
pub fn random_symmetric<R: Rng>(rng: &mut R, max: f64) -> f64 {
    (rng.random::<f64>() * 2.0 - 1.0) * max
}

/// Coordinate for spatial values, drawn from the finite single precision
/// range.
pub fn random_coordinate<R: Rng>(rng: &mut R) -> f64 {
    random_symmetric(rng, f32::MAX as f64)
}

/// Generate a float, special with probability `special_probability`.
pub fn generate_float<R: Rng>(rng: &mut R, special_probability: f64) -> Result<Value, ValueError> {
    if rng.random_bool(special_probability) {
        Value::float(random_special(rng))
    } else {
        Value::float(random_symmetric(rng, f32::MAX as f64))
    }
}

/// Generate a double, special with probability `special_probability`.
pub fn generate_double<R: Rng>(rng: &mut R, special_probability: f64) -> Result<Value, ValueError> {
    if rng.random_bool(special_probability) {
        Value::double(random_special(rng))
    } else {
        Value::double(random_symmetric(rng, f64::MAX))
    }
}
