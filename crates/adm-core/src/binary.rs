//! Binary payloads.

use crate::error::ValueError;
use base64::Engine;
use std::fmt::Write;

/// How a [`Binary`] payload is spelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryEncoding {
    /// Uppercase hexadecimal, two digits per byte
    Hex,
    /// Standard base64 with padding
    Base64,
}

impl BinaryEncoding {
    /// ADM constructor name.
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Base64 => "base64",
        }
    }
}

/// Encoded binary data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binary {
    digits: String,
    encoding: BinaryEncoding,
}

impl Binary {
    /// Wrap an existing hex string.
    ///
    /// The string must have even length and consist of uppercase hex digits.
    pub fn hex(digits: impl Into<String>) -> Result<Self, ValueError> {
        let digits = digits.into();
        if digits.len() % 2 != 0 {
            return Err(ValueError::StructuralMismatch(format!(
                "hex payload has odd length {}",
                digits.len()
            )));
        }
        if let Some(bad) = digits
            .chars()
            .find(|c| !matches!(c, '0'..='9' | 'A'..='F'))
        {
            return Err(ValueError::StructuralMismatch(format!(
                "'{bad}' is not an uppercase hex digit"
            )));
        }
        Ok(Self {
            digits,
            encoding: BinaryEncoding::Hex,
        })
    }

    /// Hex-encode raw bytes.
    pub fn hex_from_bytes(bytes: &[u8]) -> Self {
        let mut digits = String::with_capacity(bytes.len() * 2);
        for byte in bytes {
            // Writing into a String cannot fail
            let _ = write!(digits, "{byte:02X}");
        }
        Self {
            digits,
            encoding: BinaryEncoding::Hex,
        }
    }

    /// Base64-encode raw bytes.
    pub fn base64_from_bytes(bytes: &[u8]) -> Self {
        Self {
            digits: base64::engine::general_purpose::STANDARD.encode(bytes),
            encoding: BinaryEncoding::Base64,
        }
    }

    /// The encoded payload.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn encoding(&self) -> BinaryEncoding {
        self.encoding
    }
}
