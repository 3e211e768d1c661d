//! [`Value`] — the tagged union the rencode encoder and decoder operate on.

/// A JSON-like value as seen by the rencode wire format.
///
/// Strings and binary data share the [`Value::Bytes`] variant: the codec
/// never distinguishes text from raw bytes, that distinction belongs to the
/// JSON adapter. Float precision is part of the variant, so a decoded float
/// round-trips at the precision it was encoded with.
///
/// Maps are association lists: keys may be any `Value`, insertion order is
/// preserved and is the encoding order, and duplicate keys are kept as-is.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    /// Integer representable in 64 bits signed.
    Int(i64),
    /// Integer outside the 64-bit signed range: ASCII decimal digits with an
    /// optional leading `-`, fewer than 64 characters.
    BigInt(String),
    Float32(f32),
    Float64(f64),
    /// Text or binary payload, written verbatim on the wire.
    Bytes(Vec<u8>),
    List(Vec<Value>),
    Map(Vec<(Value, Value)>),
}

impl Value {
    /// Convenience constructor for a text value.
    pub fn str(s: &str) -> Self {
        Value::Bytes(s.as_bytes().to_vec())
    }

    /// Returns the UTF-8 text of a `Bytes` value, when it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Bytes(b) => std::str::from_utf8(b).ok(),
            _ => None,
        }
    }

    /// Returns the integer of an `Int` value, when it is one.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float32(f)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float64(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::str(s)
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
        Value::List(items)
    }
}
