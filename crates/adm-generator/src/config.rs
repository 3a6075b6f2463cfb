//! Generator configuration.
//!
//! A [`GeneratorConfig`] can be built in code, loaded from YAML, or both:
//! every field has a default, so a YAML file only needs the keys it changes.
//!
//! ```yaml
//! shares:
//!   primitive: 6
//!   incomplete: 1
//!   derived: 3
//! min_members: 1
//! max_members: 4
//! max_depth: 2
//! special_float_probability: 0.1
//! ```

use adm_core::escape;
use adm_core::ValueError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Default alphabet for generated strings and object keys.
pub const LOWERCASE_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Error type for configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading config file
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Member count bounds are inverted
    #[error("min_members ({min}) is greater than max_members ({max})")]
    InvalidMemberBounds { min: usize, max: usize },

    /// No leaf category can be chosen once depth is exhausted
    #[error("primitive and incomplete shares are both zero; generation could never terminate")]
    NoLeafShare,

    /// Probability outside [0, 1]
    #[error("special_float_probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),

    /// Alphabet has no symbols
    #[error("{0} must not be empty")]
    EmptyAlphabet(&'static str),

    /// Shares string could not be parsed
    #[error("invalid shares '{0}', expected PRIMITIVE:INCOMPLETE:DERIVED")]
    InvalidShares(String),

    /// Alphabet collides with encoder markers
    #[error(transparent)]
    Value(#[from] ValueError),
}

/// Relative weights of the three value categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shares {
    pub primitive: u32,
    pub incomplete: u32,
    pub derived: u32,
}

impl Shares {
    pub fn new(primitive: u32, incomplete: u32, derived: u32) -> Self {
        Self {
            primitive,
            incomplete,
            derived,
        }
    }
}

impl Default for Shares {
    fn default() -> Self {
        Self::new(1, 1, 1)
    }
}

impl fmt::Display for Shares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.primitive, self.incomplete, self.derived)
    }
}

impl FromStr for Shares {
    type Err = ConfigError;

    /// Parse `PRIMITIVE:INCOMPLETE:DERIVED`, e.g. `6:1:3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        let &[primitive, incomplete, derived] = parts.as_slice() else {
            return Err(ConfigError::InvalidShares(s.to_string()));
        };
        let parse = |part: &str| {
            part.parse::<u32>()
                .map_err(|_| ConfigError::InvalidShares(s.to_string()))
        };
        Ok(Self::new(
            parse(primitive)?,
            parse(incomplete)?,
            parse(derived)?,
        ))
    }
}

/// Settings for the weighted recursive generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Category weights
    pub shares: Shares,
    /// Fewest members a composite may have
    pub min_members: usize,
    /// Most members a composite may have
    pub max_members: usize,
    /// Nesting ceiling; 0 means only leaves are generated
    pub max_depth: usize,
    /// Length of the random prefix of object keys
    pub key_length: usize,
    /// Symbols drawn for object key prefixes
    pub key_alphabet: String,
    /// Length of generated strings
    pub string_length: usize,
    /// Symbols drawn for generated strings
    pub string_alphabet: String,
    /// Chance that a float or double is NaN or an infinity
    pub special_float_probability: f64,
    /// Size of generated binary values in bytes
    pub binary_bytes: usize,
    /// Vertices per generated polygon; values below 4 are raised to 4
    pub polygon_points: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            shares: Shares::default(),
            min_members: 1,
            max_members: 5,
            max_depth: 2,
            key_length: 5,
            key_alphabet: LOWERCASE_ALPHABET.to_string(),
            string_length: 5,
            string_alphabet: LOWERCASE_ALPHABET.to_string(),
            special_float_probability: 0.05,
            binary_bytes: 20,
            polygon_points: 6,
        }
    }
}

impl GeneratorConfig {
    /// Parse a configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load a configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Check the settings before any value is generated.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_members > self.max_members {
            return Err(ConfigError::InvalidMemberBounds {
                min: self.min_members,
                max: self.max_members,
            });
        }
        if self.shares.primitive == 0 && self.shares.incomplete == 0 {
            return Err(ConfigError::NoLeafShare);
        }
        if !(0.0..=1.0).contains(&self.special_float_probability) {
            return Err(ConfigError::InvalidProbability(
                self.special_float_probability,
            ));
        }
        if self.key_alphabet.is_empty() {
            return Err(ConfigError::EmptyAlphabet("key_alphabet"));
        }
        if self.string_alphabet.is_empty() {
            return Err(ConfigError::EmptyAlphabet("string_alphabet"));
        }
        escape::check_alphabet(&self.key_alphabet)?;
        escape::check_alphabet(&self.string_alphabet)?;
        Ok(())
    }
}
