//! Binary value generator.

use adm_core::{Binary, Value};
use rand::Rng;

/// Generate `num_bytes` random bytes as an uppercase hex value.
pub fn generate_hex<R: Rng>(rng: &mut R, num_bytes: usize) -> Value {
    let mut bytes = vec![0u8; num_bytes];
    rng.fill(bytes.as_mut_slice());
    Value::Binary(Binary::hex_from_bytes(&bytes))
}
