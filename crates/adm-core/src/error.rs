//! Error types for value construction.

use thiserror::Error;

/// Errors raised while constructing a [`Value`](crate::Value).
///
/// All of them are local and synchronous: a constructor either returns a
/// valid value or one of these, nothing is retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueError {
    /// Scalar outside the bounds of its variant.
    #[error("{value} is out of range for {type_name} (min: {min}, max: {max})")]
    OutOfRange {
        type_name: &'static str,
        value: String,
        min: String,
        max: String,
    },

    /// Impossible calendar or clock component.
    #[error("invalid {field} {value}: {reason}")]
    MalformedCalendarField {
        field: &'static str,
        value: i64,
        reason: String,
    },

    /// A symbol contains one of the reserved encoder markers.
    #[error("symbol '{symbol}' collides with the reserved escape marker {marker:?}")]
    EscapeMarkerCollision { symbol: String, marker: char },

    /// Shape of a composite or spatial value does not fit its variant.
    #[error("structural mismatch: {0}")]
    StructuralMismatch(String),
}

impl ValueError {
    pub(crate) fn out_of_range<V, B>(type_name: &'static str, value: V, min: B, max: B) -> Self
    where
        V: ToString,
        B: ToString,
    {
        Self::OutOfRange {
            type_name,
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    pub(crate) fn calendar(field: &'static str, value: impl Into<i64>, reason: impl Into<String>) -> Self {
        Self::MalformedCalendarField {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }
}
