//! Literal grammar for typed scalars.
//!
//! A typed scalar renders as `type_name("payload")`. The payload grammar of
//! each variant lives here, once, as a [`TypedLiteral`]. Callers choose the
//! quote character when writing it out: `to_literal` uses a real `"`, while
//! the encoder substitutes its private quote marker so the JSON serializer
//! never escapes it.

use crate::value::Value;
use std::fmt;

/// Payload quoting policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatMode {
    /// Every typed payload stays quoted, as bulk-load files expect.
    #[default]
    LoadDataset,
    /// Finite numeric payloads are written unquoted, as in insert statements.
    DirectInsertion,
}

/// Argument list of a typed literal.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Wrapped in quotes
    Quoted(String),
    /// Written verbatim
    Bare(String),
    /// Two nested literals, e.g. the endpoints of an interval
    Pair(Box<TypedLiteral>, Box<TypedLiteral>),
}

/// A `name(payload)` fragment, or a bare `name` token when there is no
/// payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedLiteral {
    pub name: &'static str,
    pub payload: Option<Payload>,
}

impl TypedLiteral {
    fn quoted(name: &'static str, payload: impl Into<String>) -> Self {
        Self {
            name,
            payload: Some(Payload::Quoted(payload.into())),
        }
    }

    fn numeric(name: &'static str, payload: String, finite: bool, mode: FormatMode) -> Self {
        let payload = match mode {
            FormatMode::DirectInsertion if finite => Payload::Bare(payload),
            _ => Payload::Quoted(payload),
        };
        Self {
            name,
            payload: Some(payload),
        }
    }

    fn token(name: &'static str) -> Self {
        Self {
            name,
            payload: None,
        }
    }

    /// Append this literal to `out`, using `quote` around quoted payloads.
    pub fn write_to(&self, out: &mut String, quote: char) {
        out.push_str(self.name);
        let Some(payload) = &self.payload else {
            return;
        };
        out.push('(');
        match payload {
            Payload::Quoted(text) => {
                out.push(quote);
                out.push_str(text);
                out.push(quote);
            }
            Payload::Bare(text) => out.push_str(text),
            Payload::Pair(first, second) => {
                first.write_to(out, quote);
                out.push_str(", ");
                second.write_to(out, quote);
            }
        }
        out.push(')');
    }
}

impl fmt::Display for TypedLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write_to(&mut out, '"');
        f.write_str(&out)
    }
}

/// Magnitudes in `[EXPONENT_BELOW, EXPONENT_FROM)` are written positionally,
/// all others in exponent form.
const EXPONENT_BELOW: f64 = 1e-4;
const EXPONENT_FROM: f64 = 1e16;

fn needs_exponent(value: f64) -> bool {
    let magnitude = value.abs();
    magnitude != 0.0 && !(EXPONENT_BELOW..EXPONENT_FROM).contains(&magnitude)
}

/// Format a double, spelling the special values the way ADM parses them.
///
/// Finite values use the shortest text that reads back to the same double:
/// `2.5`, `0`, `1.536e307`, `2.5e-7`.
pub fn format_double(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "INF".to_string()
    } else if value == f64::NEG_INFINITY {
        "-INF".to_string()
    } else if needs_exponent(value) {
        format!("{value:e}")
    } else {
        value.to_string()
    }
}

/// Single precision counterpart of [`format_double`]; digits are the
/// shortest that round-trip through `f32`.
fn format_float(value: f32) -> String {
    if !value.is_finite() {
        format_double(f64::from(value))
    } else if needs_exponent(f64::from(value)) {
        format!("{value:e}")
    } else {
        value.to_string()
    }
}

fn coordinates(x: f64, y: f64) -> String {
    format!("{},{}", format_double(x), format_double(y))
}

fn datetime_literal(value: &chrono::NaiveDateTime) -> TypedLiteral {
    TypedLiteral::quoted("datetime", value.format("%Y-%m-%dT%H:%M:%S").to_string())
}

impl Value {
    /// Typed literal of this value, or `None` for values that render as
    /// plain JSON (booleans, strings, ints, null) and for composites.
    pub fn typed_literal(&self, mode: FormatMode) -> Option<TypedLiteral> {
        let literal = match self {
            Self::TinyInt(v) => TypedLiteral::numeric("tinyint", v.to_string(), true, mode),
            Self::SmallInt(v) => TypedLiteral::numeric("smallint", v.to_string(), true, mode),
            Self::BigInt(v) => TypedLiteral::numeric("bigint", v.to_string(), true, mode),
            Self::Float32(v) => TypedLiteral::numeric("float", format_float(*v), v.is_finite(), mode),
            Self::Float64(v) => {
                TypedLiteral::numeric("double", format_double(*v), v.is_finite(), mode)
            }
            Self::Binary(b) => TypedLiteral::quoted(b.encoding().type_name(), b.digits()),
            Self::Point(p) => TypedLiteral::quoted(
                "point",
                format!("{}, {}", format_double(p.x), format_double(p.y)),
            ),
            Self::Line(s) => TypedLiteral::quoted(
                "line",
                format!(
                    "{} {}",
                    coordinates(s.start.x, s.start.y),
                    coordinates(s.end.x, s.end.y)
                ),
            ),
            Self::Rectangle(s) => TypedLiteral::quoted(
                "rectangle",
                format!(
                    "{} {}",
                    coordinates(s.start.x, s.start.y),
                    coordinates(s.end.x, s.end.y)
                ),
            ),
            Self::Circle(c) => TypedLiteral::quoted(
                "circle",
                format!(
                    "{} {}",
                    coordinates(c.center.x, c.center.y),
                    format_double(c.radius)
                ),
            ),
            Self::Polygon(p) => {
                let points: Vec<String> = p.points().map(|pt| coordinates(pt.x, pt.y)).collect();
                TypedLiteral::quoted("polygon", points.join(" "))
            }
            Self::Date(d) => TypedLiteral::quoted("date", d.format("%Y-%m-%d").to_string()),
            Self::Time(t) => TypedLiteral::quoted("time", t.format("%H:%M:%S").to_string()),
            Self::DateTime(dt) => datetime_literal(dt),
            Self::Duration(d) => TypedLiteral::quoted(
                "duration",
                format!(
                    "P{}Y{}M{}DT{}H{}M{}S",
                    d.years, d.months, d.days, d.hours, d.minutes, d.seconds
                ),
            ),
            Self::YearMonthDuration(d) => {
                TypedLiteral::quoted("year_month_duration", format!("P{}Y{}M", d.years, d.months))
            }
            Self::DayTimeDuration(d) => TypedLiteral::quoted(
                "day_time_duration",
                format!("P{}DT{}H{}M{}S", d.days, d.hours, d.minutes, d.seconds),
            ),
            Self::Interval(i) => TypedLiteral {
                name: "interval",
                payload: Some(Payload::Pair(
                    Box::new(datetime_literal(&i.start)),
                    Box::new(datetime_literal(&i.end)),
                )),
            },
            Self::Uuid(u) => TypedLiteral::quoted("uuid", u.hyphenated().to_string()),
            Self::Missing => TypedLiteral::token("missing"),
            Self::Boolean(_)
            | Self::String(_)
            | Self::Int32(_)
            | Self::Null
            | Self::Object(_)
            | Self::Array(_)
            | Self::Multiset(_) => return None,
        };
        Some(literal)
    }

    /// Marker-free notation of a non-composite value in load-dataset mode.
    ///
    /// Composites return `None`; rendering them is the encoder's job.
    pub fn to_literal(&self) -> Option<String> {
        if let Some(literal) = self.typed_literal(FormatMode::LoadDataset) {
            return Some(literal.to_string());
        }
        match self {
            Self::Boolean(b) => Some(b.to_string()),
            Self::Int32(i) => Some(i.to_string()),
            Self::Null => Some("null".to_string()),
            Self::String(s) => serde_json::to_string(s).ok(),
            _ => None,
        }
    }
}
