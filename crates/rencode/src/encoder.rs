//! `RencodeEncoder` — [`Value`] → rencode byte stream.
//!
//! Each value is written with the shortest legal tag: small magnitudes and
//! short collections go into "fixed" single-byte tags, everything else into
//! a marker plus a fixed-width payload or an open, terminator-delimited form.

use rencode_buffers::Writer;

use crate::constants::*;
use crate::error::RencodeError;
use crate::value::Value;

/// Float precision applied per encode call.
///
/// Replaces the process-wide mutable `FLOAT_BITS` setting of classic rencode
/// implementations; threading it through the encoder makes concurrent use
/// with different precisions safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FloatBits {
    /// Encode floats as 32-bit (`CHR_FLOAT32` + 4 bytes).
    #[default]
    F32,
    /// Encode floats as 64-bit (`CHR_FLOAT64` + 8 bytes).
    F64,
}

impl FloatBits {
    /// Converts a raw bit count, for callers holding `32` or `64` as an
    /// integer.
    pub fn from_bits(bits: u32) -> Result<Self, RencodeError> {
        match bits {
            32 => Ok(FloatBits::F32),
            64 => Ok(FloatBits::F64),
            other => Err(RencodeError::InvalidFloatPrecision(other)),
        }
    }
}

/// Per-call encoder configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct EncodeOptions {
    /// Wire precision for `Float32`/`Float64` values.
    pub float_bits: FloatBits,
}

/// Stateless-per-call rencode encoder.
///
/// The writer is owned only as a reusable output buffer; no configuration or
/// value state survives between [`RencodeEncoder::encode`] calls.
pub struct RencodeEncoder {
    pub writer: Writer,
    options: EncodeOptions,
}

impl Default for RencodeEncoder {
    fn default() -> Self {
        Self::new(EncodeOptions::default())
    }
}

impl RencodeEncoder {
    pub fn new(options: EncodeOptions) -> Self {
        Self {
            writer: Writer::new(),
            options,
        }
    }

    /// Encodes a single value into a fresh byte vector.
    pub fn encode(&mut self, value: &Value) -> Result<Vec<u8>, RencodeError> {
        self.writer.reset();
        self.write_any(value)?;
        Ok(self.writer.flush())
    }

    pub fn write_any(&mut self, value: &Value) -> Result<(), RencodeError> {
        match value {
            Value::Null => {
                self.writer.u8(CHR_NONE);
                Ok(())
            }
            Value::Bool(b) => {
                self.writer.u8(if *b { CHR_TRUE } else { CHR_FALSE });
                Ok(())
            }
            Value::Int(i) => {
                self.write_integer(*i);
                Ok(())
            }
            Value::BigInt(digits) => self.write_big_number(digits),
            Value::Float32(f) => {
                self.write_float(*f as f64);
                Ok(())
            }
            Value::Float64(f) => {
                self.write_float(*f);
                Ok(())
            }
            Value::Bytes(b) => {
                self.write_str(b);
                Ok(())
            }
            Value::List(items) => self.write_list(items),
            Value::Map(pairs) => self.write_dict(pairs),
        }
    }

    /// Minimal-width integer ladder: fixed tag, then int8/int16/int32/int64.
    pub fn write_integer(&mut self, int: i64) {
        if (0..INT_POS_FIXED_COUNT as i64).contains(&int) {
            self.writer.u8(INT_POS_FIXED_START + int as u8);
        } else if (-(INT_NEG_FIXED_COUNT as i64)..0).contains(&int) {
            self.writer.u8((INT_NEG_FIXED_START as i64 - 1 - int) as u8);
        } else if (i8::MIN as i64..=i8::MAX as i64).contains(&int) {
            self.writer.u8(CHR_INT1);
            self.writer.i8(int as i8);
        } else if (i16::MIN as i64..=i16::MAX as i64).contains(&int) {
            self.writer.u8(CHR_INT2);
            self.writer.i16(int as i16);
        } else if (i32::MIN as i64..=i32::MAX as i64).contains(&int) {
            self.writer.u8(CHR_INT4);
            self.writer.i32(int as i32);
        } else {
            self.writer.u8(CHR_INT8);
            self.writer.i64(int);
        }
    }

    /// ASCII decimal between `CHR_INT` and `CHR_TERM`. Digit strings at or
    /// past the length ceiling are a hard error, not a fallback.
    pub fn write_big_number(&mut self, digits: &str) -> Result<(), RencodeError> {
        if digits.len() >= MAX_INT_LENGTH {
            return Err(RencodeError::IntegerTooLong);
        }
        let unsigned = digits.strip_prefix('-').unwrap_or(digits);
        if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RencodeError::UnsupportedValueType(
                "big number must be decimal digits with an optional leading '-'",
            ));
        }
        self.writer.u8(CHR_INT);
        self.writer.ascii(digits);
        self.writer.u8(CHR_TERM);
        Ok(())
    }

    pub fn write_float(&mut self, float: f64) {
        match self.options.float_bits {
            FloatBits::F32 => {
                self.writer.u8(CHR_FLOAT32);
                self.writer.f32(float as f32);
            }
            FloatBits::F64 => {
                self.writer.u8(CHR_FLOAT64);
                self.writer.f64(float);
            }
        }
    }

    /// Raw bytes, fixed tag below 64, ASCII `<len>:` prefix otherwise. The
    /// body is written verbatim; the decoder never re-enters tag dispatch
    /// inside it because the length is known up front.
    pub fn write_str(&mut self, bytes: &[u8]) {
        let len = bytes.len();
        if len < STR_FIXED_COUNT as usize {
            self.writer.u8(STR_FIXED_START + len as u8);
        } else {
            self.writer.ascii(&len.to_string());
            self.writer.u8(b':');
        }
        self.writer.buf(bytes);
    }

    pub fn write_list(&mut self, items: &[Value]) -> Result<(), RencodeError> {
        if items.len() < LIST_FIXED_COUNT as usize {
            self.writer.u8(LIST_FIXED_START + items.len() as u8);
            for item in items {
                self.write_any(item)?;
            }
        } else {
            self.writer.u8(CHR_LIST);
            for item in items {
                self.write_any(item)?;
            }
            self.writer.u8(CHR_TERM);
        }
        Ok(())
    }

    /// Pairs are written in the map's own order, which keeps output
    /// reproducible for a given `Value`.
    pub fn write_dict(&mut self, pairs: &[(Value, Value)]) -> Result<(), RencodeError> {
        if pairs.len() < DICT_FIXED_COUNT as usize {
            self.writer.u8(DICT_FIXED_START + pairs.len() as u8);
            for (key, value) in pairs {
                self.write_any(key)?;
                self.write_any(value)?;
            }
        } else {
            self.writer.u8(CHR_DICT);
            for (key, value) in pairs {
                self.write_any(key)?;
                self.write_any(value)?;
            }
            self.writer.u8(CHR_TERM);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(value: &Value) -> Vec<u8> {
        RencodeEncoder::default().encode(value).unwrap()
    }

    #[test]
    fn null_and_bools_are_single_bytes() {
        assert_eq!(encode(&Value::Null), [CHR_NONE]);
        assert_eq!(encode(&Value::Bool(true)), [CHR_TRUE]);
        assert_eq!(encode(&Value::Bool(false)), [CHR_FALSE]);
    }

    #[test]
    fn fixed_positive_integers() {
        assert_eq!(encode(&Value::Int(0)), [0]);
        assert_eq!(encode(&Value::Int(2)), [0x02]);
        assert_eq!(encode(&Value::Int(43)), [43]);
        // 44 falls off the fixed range onto the int8 form.
        assert_eq!(encode(&Value::Int(44)), [CHR_INT1, 44]);
    }

    #[test]
    fn fixed_negative_integers() {
        assert_eq!(encode(&Value::Int(-1)), [INT_NEG_FIXED_START]);
        assert_eq!(encode(&Value::Int(-32)), [INT_NEG_FIXED_START + 31]);
        assert_eq!(encode(&Value::Int(-33)), [CHR_INT1, (-33i8) as u8]);
    }

    #[test]
    fn integer_width_ladder() {
        assert_eq!(encode(&Value::Int(127)), [CHR_INT1, 127]);
        assert_eq!(encode(&Value::Int(128)), [CHR_INT2, 0x00, 0x80]);
        assert_eq!(encode(&Value::Int(-129)), [CHR_INT2, 0xff, 0x7f]);
        assert_eq!(encode(&Value::Int(32767)), [CHR_INT2, 0x7f, 0xff]);
        assert_eq!(encode(&Value::Int(32768)), [CHR_INT4, 0, 0, 0x80, 0]);
        let bytes = encode(&Value::Int(i32::MAX as i64));
        assert_eq!(bytes[0], CHR_INT4);
        let bytes = encode(&Value::Int(i32::MAX as i64 + 1));
        assert_eq!(bytes[0], CHR_INT8);
        assert_eq!(bytes.len(), 9);
    }

    #[test]
    fn big_number_form() {
        let digits = "123456789012345678901234567890";
        let bytes = encode(&Value::BigInt(digits.into()));
        assert_eq!(bytes[0], CHR_INT);
        assert_eq!(&bytes[1..bytes.len() - 1], digits.as_bytes());
        assert_eq!(*bytes.last().unwrap(), CHR_TERM);
    }

    #[test]
    fn big_number_length_ceiling() {
        let too_long = "9".repeat(MAX_INT_LENGTH);
        let mut enc = RencodeEncoder::default();
        assert_eq!(
            enc.encode(&Value::BigInt(too_long)),
            Err(RencodeError::IntegerTooLong)
        );
        let just_fits = "9".repeat(MAX_INT_LENGTH - 1);
        assert!(enc.encode(&Value::BigInt(just_fits)).is_ok());
    }

    #[test]
    fn big_number_rejects_non_digits() {
        let mut enc = RencodeEncoder::default();
        for bad in ["", "-", "12a3", "1.5", "--4"] {
            assert!(matches!(
                enc.encode(&Value::BigInt(bad.into())),
                Err(RencodeError::UnsupportedValueType(_))
            ));
        }
        assert!(enc.encode(&Value::BigInt("-42".into())).is_ok());
    }

    #[test]
    fn float_precision_follows_options() {
        let mut f32_enc = RencodeEncoder::new(EncodeOptions {
            float_bits: FloatBits::F32,
        });
        let mut f64_enc = RencodeEncoder::new(EncodeOptions {
            float_bits: FloatBits::F64,
        });
        let bytes = f32_enc.encode(&Value::Float64(1.5)).unwrap();
        assert_eq!(bytes[0], CHR_FLOAT32);
        assert_eq!(bytes.len(), 5);
        let bytes = f64_enc.encode(&Value::Float32(1.5)).unwrap();
        assert_eq!(bytes[0], CHR_FLOAT64);
        assert_eq!(bytes.len(), 9);
    }

    #[test]
    fn fixed_string() {
        let bytes = encode(&Value::str("irony"));
        assert_eq!(bytes[0], STR_FIXED_START + 5);
        assert_eq!(&bytes[1..], b"irony");
    }

    #[test]
    fn length_prefixed_string() {
        let body = vec![b'x'; 64];
        let bytes = encode(&Value::Bytes(body.clone()));
        assert_eq!(&bytes[..3], b"64:");
        assert_eq!(&bytes[3..], &body[..]);
        // One below the ceiling still uses the fixed form.
        let bytes = encode(&Value::Bytes(vec![b'x'; 63]));
        assert_eq!(bytes[0], STR_FIXED_START + 63);
    }

    #[test]
    fn fixed_list() {
        let bytes = encode(&Value::List(vec![
            Value::Bool(false),
            Value::Bool(true),
        ]));
        assert_eq!(bytes, [LIST_FIXED_START + 2, CHR_FALSE, CHR_TRUE]);
    }

    #[test]
    fn open_list_at_ceiling() {
        let items: Vec<Value> = (0..64).map(|_| Value::Null).collect();
        let bytes = encode(&Value::List(items));
        assert_eq!(bytes[0], CHR_LIST);
        assert_eq!(*bytes.last().unwrap(), CHR_TERM);
        assert_eq!(bytes.len(), 66);
        let items: Vec<Value> = (0..63).map(|_| Value::Null).collect();
        let bytes = encode(&Value::List(items));
        assert_eq!(bytes[0], LIST_FIXED_START + 63);
    }

    #[test]
    fn fixed_dict() {
        let bytes = encode(&Value::Map(vec![(Value::str("1"), Value::Int(2))]));
        assert_eq!(bytes, [DICT_FIXED_START + 1, STR_FIXED_START + 1, b'1', 2]);
    }

    #[test]
    fn open_dict_at_ceiling() {
        let pairs: Vec<(Value, Value)> =
            (0..25).map(|i| (Value::Int(i), Value::Null)).collect();
        let bytes = encode(&Value::Map(pairs));
        assert_eq!(bytes[0], CHR_DICT);
        assert_eq!(*bytes.last().unwrap(), CHR_TERM);
        let pairs: Vec<(Value, Value)> =
            (0..24).map(|i| (Value::Int(i), Value::Null)).collect();
        let bytes = encode(&Value::Map(pairs));
        assert_eq!(bytes[0], DICT_FIXED_START + 24);
    }

    #[test]
    fn from_bits_validation() {
        assert_eq!(FloatBits::from_bits(32), Ok(FloatBits::F32));
        assert_eq!(FloatBits::from_bits(64), Ok(FloatBits::F64));
        assert_eq!(
            FloatBits::from_bits(16),
            Err(RencodeError::InvalidFloatPrecision(16))
        );
    }
}
