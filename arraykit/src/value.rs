//! This module defines [Value], the dynamically shaped value that the utilities of this crate
//! operate on, together with [Record], a flat mapping from field names to values.

use std::cmp::Ordering;

use linked_hash_map::LinkedHashMap;

#[cfg(test)]
use quickcheck::{Arbitrary, Gen};

/// Mapping from field names to [Value]s.
///
/// Fields keep the order in which they were inserted.
pub type Record = LinkedHashMap<String, Value>;

/// Enum of the different shapes a [Value] can take.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ValueDomain {
    /// Absence of a value
    Undefined,
    /// The explicit null value
    Null,
    /// Domain of `true` and `false`
    Boolean,
    /// Domain of all 64bit floating point numbers incl. ±Inf, ±0, NaN
    Number,
    /// Domain of all strings of Unicode glyphs
    String,
    /// Ordered lists of values
    Sequence,
    /// Mappings from field names to values
    Record,
}

impl ValueDomain {
    /// Return whether values of this domain are primitives,
    /// i.e. booleans, numbers or strings.
    pub fn is_primitive(self) -> bool {
        matches!(
            self,
            ValueDomain::Boolean | ValueDomain::Number | ValueDomain::String
        )
    }

    /// Return whether values of this domain contain other values.
    pub fn is_container(self) -> bool {
        matches!(self, ValueDomain::Sequence | ValueDomain::Record)
    }

    /// Rank of primitive domains in the order used for grouping.
    fn primitive_rank(self) -> Option<u8> {
        match self {
            ValueDomain::Boolean => Some(0),
            ValueDomain::Number => Some(1),
            ValueDomain::String => Some(2),
            _ => None,
        }
    }
}

/// A dynamically shaped value.
///
/// The derived [PartialEq] compares structurally (including field order of records).
/// The comparison used by the equality and duplicate utilities is [Value::strict_eq].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absence of a value
    #[default]
    Undefined,
    /// The explicit null value
    Null,
    /// A boolean
    Boolean(bool),
    /// A number, which may also be NaN or infinite
    Number(f64),
    /// A string
    String(String),
    /// An ordered list of values
    Sequence(Vec<Value>),
    /// A mapping from field names to values
    Record(Record),
}

impl Value {
    /// Return the [ValueDomain] of this value.
    pub fn domain(&self) -> ValueDomain {
        match self {
            Value::Undefined => ValueDomain::Undefined,
            Value::Null => ValueDomain::Null,
            Value::Boolean(_) => ValueDomain::Boolean,
            Value::Number(_) => ValueDomain::Number,
            Value::String(_) => ValueDomain::String,
            Value::Sequence(_) => ValueDomain::Sequence,
            Value::Record(_) => ValueDomain::Record,
        }
    }

    /// Return whether this value is a boolean, a number or a string.
    pub fn is_primitive(&self) -> bool {
        self.domain().is_primitive()
    }

    /// Return the contained values if this is a [Value::Sequence].
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(values) => Some(values),
            _ => None,
        }
    }

    /// Return the contained values if this is a [Value::Sequence].
    pub fn as_sequence_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Sequence(values) => Some(values),
            _ => None,
        }
    }

    /// Return the contained [Record] if this is a [Value::Record].
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Return the contained [Record] if this is a [Value::Record].
    pub fn as_record_mut(&mut self) -> Option<&mut Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Return the string slice if this is a [Value::String].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(string) => Some(string),
            _ => None,
        }
    }

    /// Return the number if this is a [Value::Number].
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Return the boolean if this is a [Value::Boolean].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(boolean) => Some(*boolean),
            _ => None,
        }
    }

    /// Strict equality.
    ///
    /// Primitives are equal if they have the same domain and value.
    /// NaN is not equal to anything and `-0` equals `0`.
    /// [Value::Undefined] and [Value::Null] are only equal to themselves.
    /// Sequences and records are never strictly equal,
    /// since two owned values do not share an identity.
    pub fn strict_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Boolean(left), Value::Boolean(right)) => left == right,
            (Value::Number(left), Value::Number(right)) => left == right,
            (Value::String(left), Value::String(right)) => left == right,
            _ => false,
        }
    }

    /// Total order on primitives: booleans before numbers before strings,
    /// natural order within each domain.
    ///
    /// Returns `None` if one of the values is not a primitive.
    pub fn primitive_cmp(&self, other: &Self) -> Option<Ordering> {
        let rank_self = self.domain().primitive_rank()?;
        let rank_other = other.domain().primitive_rank()?;

        Some(match (self, other) {
            (Value::Boolean(left), Value::Boolean(right)) => left.cmp(right),
            (Value::Number(left), Value::Number(right)) => left.total_cmp(right),
            (Value::String(left), Value::String(right)) => left.cmp(right),
            _ => rank_self.cmp(&rank_other),
        })
    }

    /// Return whether this value counts as `true` in a boolean context.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Boolean(boolean) => *boolean,
            Value::Number(number) => *number != 0.0 && !number.is_nan(),
            Value::String(string) => !string.is_empty(),
            Value::Sequence(_) | Value::Record(_) => true,
        }
    }

    /// Numeric interpretation of this value.
    ///
    /// Booleans count as `0` and `1`, [Value::Null] as `0`.
    /// Strings are parsed with [string_to_number].
    /// Everything else is NaN.
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Null => 0.0,
            Value::Boolean(boolean) => f64::from(u8::from(*boolean)),
            Value::Number(number) => *number,
            Value::String(string) => string_to_number(string),
            Value::Undefined | Value::Sequence(_) | Value::Record(_) => f64::NAN,
        }
    }
}

/// Parse a string the way JavaScript converts strings to numbers.
///
/// Surrounding whitespace is ignored and a blank string is `0`.
/// Accepts decimal literals with optional sign, fraction and exponent,
/// `Infinity` with optional sign,
/// and unsigned integers with a `0x`, `0o` or `0b` prefix.
/// Everything else, including `inf` and `nan`, is NaN.
pub fn string_to_number(string: &str) -> f64 {
    let trimmed = string.trim();

    match trimmed {
        "" => return 0.0,
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match trimmed.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };

    if let Some(radix) = radix {
        let digits = &trimmed[2..];
        if digits.is_empty() {
            return f64::NAN;
        }

        return digits
            .chars()
            .try_fold(0.0, |number: f64, digit| {
                digit
                    .to_digit(radix)
                    .map(|digit| number * f64::from(radix) + f64::from(digit))
            })
            .unwrap_or(f64::NAN);
    }

    let decimal = trimmed
        .chars()
        .all(|character| character.is_ascii_digit() || "+-.eE".contains(character));
    if !decimal {
        return f64::NAN;
    }

    trimmed.parse().unwrap_or(f64::NAN)
}

/// Construct a [Record] from `field => value` pairs.
///
/// Values are converted with [`Value::from`].
///
/// # Example
///
/// ```
/// let record = arraykit::record! { "name" => "ada", "age" => 36 };
/// assert_eq!(record.len(), 2);
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::value::Record::new()
    };
    ($( $field:expr => $value:expr ),+ $(,)?) => {{
        let mut record = $crate::value::Record::new();
        $(
            record.insert(
                ::std::string::String::from($field),
                $crate::value::Value::from($value),
            );
        )+
        record
    }};
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Value::Record(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::Sequence(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Undefined, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Sequence(iter.into_iter().collect())
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(boolean) => Value::Boolean(boolean),
            serde_json::Value::Number(number) => Value::Number(number.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(string) => Value::String(string),
            serde_json::Value::Array(values) => {
                Value::Sequence(values.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Record(
                map.into_iter()
                    .map(|(field, value)| (field, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    /// JSON has no representation for [Value::Undefined] and non-finite numbers,
    /// those are turned into `null`.
    fn from(value: Value) -> Self {
        match value {
            Value::Undefined | Value::Null => serde_json::Value::Null,
            Value::Boolean(boolean) => serde_json::Value::Bool(boolean),
            Value::Number(number) => json_number(number),
            Value::String(string) => serde_json::Value::String(string),
            Value::Sequence(values) => {
                serde_json::Value::Array(values.into_iter().map(serde_json::Value::from).collect())
            }
            Value::Record(record) => serde_json::Value::Object(
                record
                    .into_iter()
                    .map(|(field, value)| (field, serde_json::Value::from(value)))
                    .collect(),
            ),
        }
    }
}

/// Integral numbers in the i64 range, except for `-0`, are written without a fractional part.
fn json_number(number: f64) -> serde_json::Value {
    const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

    let negative_zero = number == 0.0 && number.is_sign_negative();

    if number.fract() == 0.0 && !negative_zero && (-I64_BOUND..I64_BOUND).contains(&number) {
        #[allow(clippy::cast_possible_truncation)]
        let integer = number as i64;
        return serde_json::Value::from(integer);
    }

    serde_json::Number::from_f64(number).map_or(serde_json::Value::Null, serde_json::Value::Number)
}

#[cfg(test)]
impl Arbitrary for Value {
    /// Only generates primitives from small domains, so that duplicates are likely.
    fn arbitrary(g: &mut Gen) -> Self {
        match u8::arbitrary(g) % 3 {
            0 => Value::Boolean(bool::arbitrary(g)),
            1 => Value::Number(f64::from(i8::arbitrary(g) % 8)),
            _ => Value::from(
                *g.choose(&["a", "b", "c", "ab", ""])
                    .expect("choice list is not empty"),
            ),
        }
    }
}
