//! Random value generator for ADM documents.
//!
//! This crate provides the [`ValueGenerator`], which builds random
//! [`Value`](adm_core::Value) trees from a weighted choice between three
//! categories:
//!
//! ```text
//!        Shares { primitive : incomplete : derived }
//!                         │
//!            draw uniformly in [1, total]
//!                         │
//!      ┌──────────────────┼─────────────────────┐
//!      ▼                  ▼                     ▼
//!  primitive          incomplete             derived
//!  (22 leaf kinds)    (Null | Missing)       (Object | Array | Multiset)
//!                                               │
//!                                 per member: fresh bounds, depth - 1
//!                                               │
//!                                               └──► recurse
//! ```
//!
//! The derived share is ignored once the depth budget reaches zero, so every
//! tree is finite. Generation only reads from the RNG it is handed, which
//! makes a seeded `StdRng` the whole reproducibility story.
//!
//! # Example
//!
//! ```rust
//! use adm_generator::{GeneratorConfig, ValueGenerator};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let generator = ValueGenerator::new(GeneratorConfig::default()).unwrap();
//! let mut rng = StdRng::seed_from_u64(42);
//! let value = generator.generate(&mut rng).unwrap();
//! println!("{value:?}");
//! ```

pub mod config;
pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use config::{ConfigError, GeneratorConfig, Shares};
pub use generator::{Bounds, Category, CompositeKind, GeneratorError, ValueGenerator};
pub use generators::PrimitiveKind;
