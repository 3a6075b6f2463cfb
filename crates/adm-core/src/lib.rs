//! Core value types for the adm-gen document generator.
//!
//! This crate provides the foundational types used across the generator
//! workspace, including:
//!
//! - [`Value`] - The closed union of every ADM value variant
//! - [`ValueError`] - Construction-time validation failures
//! - [`TypedLiteral`] - The `type_name("payload")` grammar of typed scalars
//! - [`FormatMode`] - Payload quoting policy chosen by the caller
//! - [`escape`] - Reserved marker characters and the alphabet guard
//!
//! # Architecture
//!
//! ```text
//! adm-core (this crate)
//!    │
//!    ├─── adm-generator  (builds random Value trees)
//!    │
//!    └─── adm-encoder    (renders Value trees to ADM text)
//! ```
//!
//! # Example
//!
//! ```rust
//! use adm_core::Value;
//!
//! let date = Value::date(2024, 2, 29).unwrap();
//! assert_eq!(date.to_literal().unwrap(), r#"date("2024-02-29")"#);
//!
//! assert!(Value::date(2023, 2, 29).is_err());
//! ```

pub mod binary;
pub mod error;
pub mod escape;
pub mod literal;
pub mod spatial;
pub mod temporal;
pub mod value;

// Re-exports for convenience
pub use binary::{Binary, BinaryEncoding};
pub use error::ValueError;
pub use literal::{FormatMode, Payload, TypedLiteral};
pub use spatial::{Circle, Point, Polygon, Segment};
pub use temporal::{DayTimeDuration, Duration, Interval, YearMonthDuration};
pub use value::{Object, Value};
