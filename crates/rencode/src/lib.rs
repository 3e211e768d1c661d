//! rencode — a compact, self-describing binary serialization codec.
//!
//! A bencode-derived format: JSON-like values (null, booleans, integers,
//! floats, byte strings, lists, maps) become a dense tagged byte stream.
//! Small integers, short strings, and short collections fit entirely in
//! their tag byte, which keeps typical structured payloads (UI state, RPC
//! arguments) small.
//!
//! The core operates on [`Value`]; the [`json`] module adapts
//! `serde_json::Value` at the boundary.
//!
//! ```
//! use rencode::{decode, encode, FloatBits, Value};
//!
//! let value = Value::Map(vec![(Value::str("key"), Value::Int(42))]);
//! let bytes = encode(&value, FloatBits::F64).unwrap();
//! let (back, consumed) = decode(&bytes).unwrap();
//! assert_eq!(back, value);
//! assert_eq!(consumed, bytes.len());
//! ```

mod constants;
mod decoder;
mod encoder;
mod error;
mod value;

pub mod json;

pub use constants::*;
pub use decoder::{DecodeOptions, RencodeDecoder};
pub use encoder::{EncodeOptions, FloatBits, RencodeEncoder};
pub use error::RencodeError;
pub use value::Value;

/// Encodes a value with the given float precision.
pub fn encode(value: &Value, float_bits: FloatBits) -> Result<Vec<u8>, RencodeError> {
    RencodeEncoder::new(EncodeOptions { float_bits }).encode(value)
}

/// Decodes one value from the start of `bytes`, returning it together with
/// the number of bytes consumed.
pub fn decode(bytes: &[u8]) -> Result<(Value, usize), RencodeError> {
    RencodeDecoder::default().decode(bytes)
}

/// Encodes a JSON document. The JSON-level counterpart of [`encode`].
pub fn dumps(json: &serde_json::Value, float_bits: FloatBits) -> Result<Vec<u8>, RencodeError> {
    encode(&json::from_json(json, float_bits), float_bits)
}

/// Decodes a whole buffer back into a JSON document. The JSON-level
/// counterpart of [`decode`]; trailing bytes after the first value are
/// ignored.
pub fn loads(bytes: &[u8]) -> Result<serde_json::Value, RencodeError> {
    let (value, _) = decode(bytes)?;
    json::to_json(&value)
}
