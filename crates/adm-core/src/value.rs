//! The ADM value union.

use crate::binary::Binary;
use crate::error::ValueError;
use crate::escape;
use crate::spatial::{Circle, Point, Polygon, Segment};
use crate::temporal::{self, DayTimeDuration, Duration, Interval, YearMonthDuration};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use indexmap::IndexMap;
use uuid::Uuid;

/// Members of an object, in insertion order.
pub type Object = IndexMap<String, Value>;

/// A single ADM value.
///
/// Every variant that carries a range invariant stores it in a type that can
/// only hold valid data (`i8` for tiny ints, `NaiveDate` for dates, and so
/// on). The checked constructors below accept wider inputs and report the
/// violation instead of truncating.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    // Primitive
    Boolean(bool),
    String(String),
    TinyInt(i8),
    SmallInt(i16),
    Int32(i32),
    BigInt(i64),
    Float32(f32),
    Float64(f64),
    Binary(Binary),

    // Spatial
    Point(Point),
    Line(Segment),
    Rectangle(Segment),
    Circle(Circle),
    Polygon(Polygon),

    // Temporal
    Date(NaiveDate),
    Time(NaiveTime),
    DateTime(NaiveDateTime),
    Duration(Duration),
    YearMonthDuration(YearMonthDuration),
    DayTimeDuration(DayTimeDuration),
    Interval(Interval),

    Uuid(Uuid),

    // Incomplete information
    /// Known absence of a value
    Null,
    /// Field-level absence, distinct from `Null`
    Missing,

    // Composite
    Object(Object),
    Array(Vec<Value>),
    /// Unordered bag; duplicates allowed, order carries no meaning
    Multiset(Vec<Value>),
}

fn checked_int<T>(type_name: &'static str, value: i128, min: T, max: T) -> Result<T, ValueError>
where
    T: TryFrom<i128> + Into<i128> + Copy + ToString,
{
    if value < min.into() || value > max.into() {
        return Err(ValueError::out_of_range(type_name, value, min, max));
    }
    T::try_from(value).map_err(|_| ValueError::out_of_range(type_name, value, min, max))
}

fn is_special_float(value: f64) -> bool {
    value.is_nan() || value.is_infinite()
}

impl Value {
    pub fn boolean(value: bool) -> Self {
        Self::Boolean(value)
    }

    /// Create a string value. Text containing an encoder marker is rejected.
    pub fn string(value: impl Into<String>) -> Result<Self, ValueError> {
        let value = value.into();
        escape::check_text(&value)?;
        Ok(Self::String(value))
    }

    pub fn tiny_int(value: i64) -> Result<Self, ValueError> {
        checked_int("tinyint", value.into(), i8::MIN, i8::MAX).map(Self::TinyInt)
    }

    pub fn small_int(value: i64) -> Result<Self, ValueError> {
        checked_int("smallint", value.into(), i16::MIN, i16::MAX).map(Self::SmallInt)
    }

    pub fn int32(value: i64) -> Result<Self, ValueError> {
        checked_int("int", value.into(), i32::MIN, i32::MAX).map(Self::Int32)
    }

    pub fn big_int(value: i128) -> Result<Self, ValueError> {
        checked_int("bigint", value, i64::MIN, i64::MAX).map(Self::BigInt)
    }

    /// Create a single precision float.
    ///
    /// NaN and the infinities bypass the range check; finite values must fit
    /// in an `f32`.
    pub fn float(value: f64) -> Result<Self, ValueError> {
        if !is_special_float(value) && (value < f32::MIN as f64 || value > f32::MAX as f64) {
            return Err(ValueError::out_of_range("float", value, f32::MIN, f32::MAX));
        }
        Ok(Self::Float32(value as f32))
    }

    pub fn double(value: f64) -> Result<Self, ValueError> {
        if !is_special_float(value) && !(f64::MIN..=f64::MAX).contains(&value) {
            return Err(ValueError::out_of_range("double", value, f64::MIN, f64::MAX));
        }
        Ok(Self::Float64(value))
    }

    /// Create a hex binary value from an uppercase hex string.
    pub fn hex(digits: impl Into<String>) -> Result<Self, ValueError> {
        Binary::hex(digits).map(Self::Binary)
    }

    pub fn base64(bytes: &[u8]) -> Self {
        Self::Binary(Binary::base64_from_bytes(bytes))
    }

    pub fn point(x: f64, y: f64) -> Self {
        Self::Point(Point::new(x, y))
    }

    pub fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::Line(Segment::new(x1, y1, x2, y2))
    }

    pub fn rectangle(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::Rectangle(Segment::new(x1, y1, x2, y2))
    }

    pub fn circle(x: f64, y: f64, radius: f64) -> Self {
        Self::Circle(Circle {
            center: Point::new(x, y),
            radius,
        })
    }

    pub fn polygon(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self, ValueError> {
        Polygon::new(xs, ys).map(Self::Polygon)
    }

    pub fn date(year: i32, month: u32, day: u32) -> Result<Self, ValueError> {
        temporal::date(year, month, day).map(Self::Date)
    }

    pub fn time(hour: u32, minute: u32, second: u32) -> Result<Self, ValueError> {
        temporal::time(hour, minute, second).map(Self::Time)
    }

    pub fn datetime(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, ValueError> {
        temporal::datetime(year, month, day, hour, minute, second).map(Self::DateTime)
    }

    pub fn duration(
        years: u32,
        months: u32,
        days: u32,
        hours: u32,
        minutes: u32,
        seconds: u32,
    ) -> Self {
        Self::Duration(Duration {
            years,
            months,
            days,
            hours,
            minutes,
            seconds,
        })
    }

    pub fn year_month_duration(years: u32, months: u32) -> Self {
        Self::YearMonthDuration(YearMonthDuration { years, months })
    }

    pub fn day_time_duration(days: u32, hours: u32, minutes: u32, seconds: u32) -> Self {
        Self::DayTimeDuration(DayTimeDuration {
            days,
            hours,
            minutes,
            seconds,
        })
    }

    pub fn interval(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self::Interval(Interval { start, end })
    }

    pub fn uuid(value: Uuid) -> Self {
        Self::Uuid(value)
    }

    pub fn null() -> Self {
        Self::Null
    }

    pub fn missing() -> Self {
        Self::Missing
    }

    /// Create an object from key/value pairs.
    ///
    /// Duplicate keys and keys containing an encoder marker are rejected.
    pub fn object<I>(members: I) -> Result<Self, ValueError>
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        let mut object = Object::new();
        for (key, value) in members {
            escape::check_text(&key)?;
            if object.contains_key(&key) {
                return Err(ValueError::StructuralMismatch(format!(
                    "duplicate object key '{key}'"
                )));
            }
            object.insert(key, value);
        }
        Ok(Self::Object(object))
    }

    pub fn array(items: Vec<Value>) -> Self {
        Self::Array(items)
    }

    pub fn multiset(items: Vec<Value>) -> Self {
        Self::Multiset(items)
    }

    /// Insert or replace a member of an object value.
    ///
    /// Returns the previous value stored under `key`, if any. Fails when
    /// `self` is not an object.
    pub fn add_key(&mut self, key: impl Into<String>, value: Value) -> Result<Option<Value>, ValueError> {
        let key = key.into();
        escape::check_text(&key)?;
        match self {
            Self::Object(members) => Ok(members.insert(key, value)),
            other => Err(ValueError::StructuralMismatch(format!(
                "cannot add key '{key}' to a {} value",
                other.type_name()
            ))),
        }
    }

    /// ADM name of this variant.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Boolean(_) => "boolean",
            Self::String(_) => "string",
            Self::TinyInt(_) => "tinyint",
            Self::SmallInt(_) => "smallint",
            Self::Int32(_) => "int",
            Self::BigInt(_) => "bigint",
            Self::Float32(_) => "float",
            Self::Float64(_) => "double",
            Self::Binary(b) => b.encoding().type_name(),
            Self::Point(_) => "point",
            Self::Line(_) => "line",
            Self::Rectangle(_) => "rectangle",
            Self::Circle(_) => "circle",
            Self::Polygon(_) => "polygon",
            Self::Date(_) => "date",
            Self::Time(_) => "time",
            Self::DateTime(_) => "datetime",
            Self::Duration(_) => "duration",
            Self::YearMonthDuration(_) => "year_month_duration",
            Self::DayTimeDuration(_) => "day_time_duration",
            Self::Interval(_) => "interval",
            Self::Uuid(_) => "uuid",
            Self::Null => "null",
            Self::Missing => "missing",
            Self::Object(_) => "object",
            Self::Array(_) => "array",
            Self::Multiset(_) => "multiset",
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Object(_) | Self::Array(_) | Self::Multiset(_))
    }

    pub fn is_incomplete(&self) -> bool {
        matches!(self, Self::Null | Self::Missing)
    }

    /// Nesting depth: 0 for scalars, 1 for a composite of scalars, and so on.
    pub fn depth(&self) -> usize {
        let children: Box<dyn Iterator<Item = &Value>> = match self {
            Self::Object(members) => Box::new(members.values()),
            Self::Array(items) | Self::Multiset(items) => Box::new(items.iter()),
            _ => return 0,
        };
        1 + children.map(Value::depth).max().unwrap_or(0)
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(members) => Some(members),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_multiset(&self) -> Option<&[Value]> {
        match self {
            Self::Multiset(items) => Some(items),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::escape::REMOVE_QUOTE;

    #[test]
    fn test_integer_bounds() {
        assert_eq!(Value::tiny_int(127).unwrap(), Value::TinyInt(127));
        assert_eq!(Value::tiny_int(-128).unwrap(), Value::TinyInt(-128));
        assert_eq!(Value::small_int(-32768).unwrap(), Value::SmallInt(-32768));
        assert_eq!(Value::int32(i32::MAX as i64).unwrap(), Value::Int32(i32::MAX));
        assert_eq!(Value::big_int(i64::MIN as i128).unwrap(), Value::BigInt(i64::MIN));
    }

    #[test]
    fn test_integer_out_of_range() {
        match Value::tiny_int(128) {
            Err(ValueError::OutOfRange {
                type_name,
                value,
                min,
                max,
            }) => {
                assert_eq!(type_name, "tinyint");
                assert_eq!(value, "128");
                assert_eq!(min, "-128");
                assert_eq!(max, "127");
            }
            other => panic!("Expected OutOfRange, got {other:?}"),
        }
        assert!(Value::small_int(32768).is_err());
        assert!(Value::int32(i32::MIN as i64 - 1).is_err());
        assert!(Value::big_int(i64::MAX as i128 + 1).is_err());
    }

    #[test]
    fn test_float_range_and_specials() {
        assert!(Value::float(1.5).is_ok());
        assert!(Value::float(f64::NAN).is_ok());
        assert!(Value::float(f64::INFINITY).is_ok());
        assert!(Value::float(f64::NEG_INFINITY).is_ok());
        assert!(matches!(
            Value::float(f64::MAX),
            Err(ValueError::OutOfRange { type_name: "float", .. })
        ));
        assert!(Value::double(f64::MAX).is_ok());
        assert!(Value::double(f64::NAN).is_ok());
    }

    #[test]
    fn test_string_rejects_markers() {
        assert!(Value::string("plain").is_ok());
        assert!(matches!(
            Value::string(format!("a{REMOVE_QUOTE}")),
            Err(ValueError::EscapeMarkerCollision { .. })
        ));
    }

    #[test]
    fn test_object_rejects_duplicate_keys() {
        let result = Value::object(vec![
            ("a".to_string(), Value::Null),
            ("a".to_string(), Value::Missing),
        ]);
        assert!(matches!(result, Err(ValueError::StructuralMismatch(_))));
    }

    #[test]
    fn test_add_key() {
        let mut object = Value::object(vec![("a".to_string(), Value::Null)]).unwrap();
        assert_eq!(object.add_key("b", Value::Boolean(true)).unwrap(), None);
        assert_eq!(
            object.add_key("a", Value::Missing).unwrap(),
            Some(Value::Null)
        );
        let members = object.as_object().unwrap();
        assert_eq!(members.len(), 2);
        assert_eq!(members["a"], Value::Missing);

        let mut array = Value::array(vec![]);
        assert!(matches!(
            array.add_key("a", Value::Null),
            Err(ValueError::StructuralMismatch(_))
        ));
    }

    #[test]
    fn test_depth() {
        assert_eq!(Value::Null.depth(), 0);
        assert_eq!(Value::array(vec![]).depth(), 1);
        let nested = Value::multiset(vec![
            Value::Int32(1),
            Value::array(vec![Value::object(vec![]).unwrap()]),
        ]);
        assert_eq!(nested.depth(), 3);
    }
}
