//! Boolean and string generators.

use adm_core::escape;
use adm_core::{Value, ValueError};
use rand::Rng;

pub fn generate_boolean<R: Rng>(rng: &mut R) -> Value {
    Value::Boolean(rng.random_bool(0.5))
}

/// Draw `length` symbols uniformly from `alphabet`.
///
/// The alphabet is not checked here; callers that accept user alphabets go
/// through [`generate_string`] or validate the config first.
pub fn random_text<R: Rng>(rng: &mut R, length: usize, alphabet: &[char]) -> String {
    if alphabet.is_empty() {
        return String::new();
    }
    (0..length)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())])
        .collect()
}

/// Generate a random string over `alphabet`.
///
/// Fails with [`ValueError::EscapeMarkerCollision`] before drawing anything
/// if the alphabet holds a reserved symbol.
pub fn generate_string<R: Rng>(
    rng: &mut R,
    length: usize,
    alphabet: &str,
) -> Result<Value, ValueError> {
    escape::check_alphabet(alphabet)?;
    let symbols: Vec<char> = alphabet.chars().collect();
    Value::string(random_text(rng, length, &symbols))
}
