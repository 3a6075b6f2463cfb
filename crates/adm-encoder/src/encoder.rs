//! First pass: serialize a value tree with markers through `serde_json`.

use crate::repair::repair;
use adm_core::escape::{REMOVE_QUOTE, REPLACE_BRACES, SET_QUOTE};
use adm_core::{FormatMode, TypedLiteral, Value};
use serde::ser::{Error as _, SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::ser::PrettyFormatter;

/// Indentation used in pretty mode.
pub const INDENT: &[u8] = b"    ";

/// Error type for rendering.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The serializer produced bytes that are not UTF-8
    #[error("Serializer produced invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Rendering options supplied by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncoderOptions {
    /// Indent nested structures by four spaces per level
    pub pretty: bool,
    /// Payload quoting policy
    pub mode: FormatMode,
}

impl EncoderOptions {
    pub fn new(pretty: bool, mode: FormatMode) -> Self {
        Self { pretty, mode }
    }
}

/// Serde view of a value in which every typed scalar and multiset carries
/// the markers the repair pass looks for.
#[derive(Debug, Clone, Copy)]
pub struct Marked<'a> {
    value: &'a Value,
    mode: FormatMode,
}

impl<'a> Marked<'a> {
    pub fn new(value: &'a Value, mode: FormatMode) -> Self {
        Self { value, mode }
    }

    fn child(&self, value: &'a Value) -> Self {
        Self::new(value, self.mode)
    }
}

/// `😃name(♡payload♡)😃`: the outer markers unquote the JSON string, the
/// inner ones become real quotes.
fn marked_literal(literal: &TypedLiteral) -> String {
    let mut out = String::new();
    out.push(REMOVE_QUOTE);
    literal.write_to(&mut out, SET_QUOTE);
    out.push(REMOVE_QUOTE);
    out
}

impl Serialize for Marked<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if let Some(literal) = self.value.typed_literal(self.mode) {
            return serializer.serialize_str(&marked_literal(&literal));
        }

        match self.value {
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::String(s) => serializer.serialize_str(s),
            Value::Int32(i) => serializer.serialize_i32(*i),
            Value::Null => serializer.serialize_unit(),
            Value::Object(members) => {
                let mut map = serializer.serialize_map(Some(members.len()))?;
                for (key, value) in members {
                    map.serialize_entry(key, &self.child(value))?;
                }
                map.end()
            }
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(&self.child(item))?;
                }
                seq.end()
            }
            Value::Multiset(items) => {
                // A lone marker stands for the empty multiset
                if items.is_empty() {
                    let mut seq = serializer.serialize_seq(Some(1))?;
                    seq.serialize_element(&REPLACE_BRACES)?;
                    return seq.end();
                }
                let mut seq = serializer.serialize_seq(Some(items.len() + 2))?;
                seq.serialize_element(&REPLACE_BRACES)?;
                for item in items {
                    seq.serialize_element(&self.child(item))?;
                }
                seq.serialize_element(&REPLACE_BRACES)?;
                seq.end()
            }
            other => Err(S::Error::custom(format!(
                "{} value has no typed literal",
                other.type_name()
            ))),
        }
    }
}

/// Run only the first pass, returning the marker-laden JSON.
pub fn to_marked_json(value: &Value, options: &EncoderOptions) -> Result<String, EncodeError> {
    let marked = Marked::new(value, options.mode);
    let mut buf = Vec::new();
    if options.pretty {
        let formatter = PrettyFormatter::with_indent(INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        marked.serialize(&mut serializer)?;
    } else {
        serde_json::to_writer(&mut buf, &marked)?;
    }
    Ok(String::from_utf8(buf)?)
}

/// Render a value as ADM text in load-dataset mode.
pub fn render(value: &Value, pretty: bool) -> Result<String, EncodeError> {
    render_with(value, &EncoderOptions::new(pretty, FormatMode::default()))
}

/// Render a value as ADM text with explicit options.
pub fn render_with(value: &Value, options: &EncoderOptions) -> Result<String, EncodeError> {
    let intermediate = to_marked_json(value, options)?;
    Ok(repair(&intermediate))
}
