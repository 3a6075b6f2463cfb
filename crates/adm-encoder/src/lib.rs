//! ADM text encoder.
//!
//! ADM is a superset of JSON with two features no JSON library emits:
//! typed scalars written as an unquoted call, `date("2024-02-29")`, and
//! multisets delimited by braces, `{ 1, 2 }`. This crate renders
//! [`Value`](adm_core::Value) trees in two passes:
//!
//! ```text
//!  Value tree
//!      │  Marked: Serialize
//!      ▼
//!  serde_json (compact or 4-space pretty)
//!      │  "😃date(♡2024-02-29♡)😃"   ["😘", 1, 2, "😘"]
//!      ▼
//!  repair pass (regex)
//!      │  date("2024-02-29")          { 1, 2 }
//!      ▼
//!  ADM text
//! ```
//!
//! Values without typed scalars or multisets come out byte-for-byte as
//! `serde_json` would write the equivalent plain JSON.
//!
//! # Example
//!
//! ```rust
//! use adm_core::Value;
//! use adm_encoder::render;
//!
//! let value = Value::multiset(vec![Value::Int32(1), Value::tiny_int(2).unwrap()]);
//! assert_eq!(render(&value, false).unwrap(), r#"{1,tinyint("2")}"#);
//! ```

pub mod encoder;
pub mod repair;

// Re-exports for convenience
pub use encoder::{render, render_with, to_marked_json, EncodeError, EncoderOptions, Marked, INDENT};
