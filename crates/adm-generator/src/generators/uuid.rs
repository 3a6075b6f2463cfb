//! UUID value generator.

use adm_core::Value;
use rand::Rng;
use uuid::Builder;

/// Version 4 UUID built from 16 bytes of the caller's stream.
pub fn generate_uuid_v4<R: Rng>(rng: &mut R) -> Value {
    let bytes: [u8; 16] = rng.random();
    Value::uuid(Builder::from_random_bytes(bytes).into_uuid())
}
