//! [`Value`] — the dynamic value type every encode/decode call works on.

use std::fmt;

/// An integer in the combined range `-2^63 ..= 2^64 - 1`.
///
/// Non-negative numbers are always stored unsigned, so two integers compare
/// equal exactly when they denote the same number, whichever wire family
/// they were read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Integer {
    pub(crate) n: IntRepr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum IntRepr {
    /// Always `>= 0`.
    PosInt(u64),
    /// Always `< 0`.
    NegInt(i64),
}

impl Integer {
    /// Returns `true` if the integer is below zero.
    pub fn is_negative(&self) -> bool {
        matches!(self.n, IntRepr::NegInt(_))
    }

    /// Returns the integer as `i64` if it fits.
    pub fn as_i64(&self) -> Option<i64> {
        match self.n {
            IntRepr::PosInt(n) => i64::try_from(n).ok(),
            IntRepr::NegInt(n) => Some(n),
        }
    }

    /// Returns the integer as `u64` if it is non-negative.
    pub fn as_u64(&self) -> Option<u64> {
        match self.n {
            IntRepr::PosInt(n) => Some(n),
            IntRepr::NegInt(_) => None,
        }
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Integer {
            fn from(n: $t) -> Self {
                Integer { n: IntRepr::PosInt(n as u64) }
            }
        })*
    };
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Integer {
            fn from(n: $t) -> Self {
                if n < 0 {
                    Integer { n: IntRepr::NegInt(n as i64) }
                } else {
                    Integer { n: IntRepr::PosInt(n as u64) }
                }
            }
        })*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, usize);
impl_from_signed!(i8, i16, i32, i64, isize);

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.n {
            IntRepr::PosInt(n) => n.fmt(f),
            IntRepr::NegInt(n) => n.fmt(f),
        }
    }
}

/// Dynamic value accepted by the encoder and produced by the decoder.
///
/// `Bytes` carries string payloads: the wire format does not record a text
/// encoding. `Map` keeps its pairs in order and may hold duplicate keys.
///
/// `Float` has no wire representation in this codec. It exists so that
/// dynamically-typed input (for example a JSON number with a fraction) can
/// reach the encoder, which rejects it.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// MsgPack nil
    Nil,
    Bool(bool),
    Integer(Integer),
    /// Raw string payload
    Bytes(Vec<u8>),
    Array(Vec<Value>),
    /// Ordered key-value pairs
    Map(Vec<(Value, Value)>),
    /// Not encodable
    Float(f64),
}

impl Value {
    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Integer(_) => "integer",
            Value::Bytes(_) => "bytes",
            Value::Array(_) => "array",
            Value::Map(_) => "map",
            Value::Float(_) => "float",
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<Integer> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.as_integer().and_then(|n| n.as_i64())
    }

    pub fn as_u64(&self) -> Option<u64> {
        self.as_integer().and_then(|n| n.as_u64())
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the payload as text if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        self.as_bytes().and_then(|b| std::str::from_utf8(b).ok())
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&[(Value, Value)]> {
        match self {
            Value::Map(pairs) => Some(pairs),
            _ => None,
        }
    }

    /// Looks up the last value stored under a text key.
    ///
    /// Later duplicates shadow earlier ones, matching how the map would read
    /// once loaded into an associative container.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_map()?
            .iter()
            .rev()
            .find(|(k, _)| k.as_bytes() == Some(key.as_bytes()))
            .map(|(_, v)| v)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Nil
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Integer> for Value {
    fn from(n: Integer) -> Self {
        Value::Integer(n)
    }
}

macro_rules! impl_value_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(n: $t) -> Self {
                Value::Integer(Integer::from(n))
            }
        })*
    };
}

impl_value_from_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Bytes(s.as_bytes().to_vec())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Bytes(s.into_bytes())
    }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Value::Bytes(b.to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Bytes(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Vec<(Value, Value)>> for Value {
    fn from(pairs: Vec<(Value, Value)>) -> Self {
        Value::Map(pairs)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Nil, Into::into)
    }
}
