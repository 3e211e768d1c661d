//! `RencodeDecoder` — rencode byte stream → [`Value`].
//!
//! A depth-first walk of the implicit value tree, driven entirely by the tag
//! byte at the cursor. Every read is bounds-checked; terminator scans are
//! bounded by the buffer end, so truncated input is an error rather than an
//! infinite loop or a panic.

use rencode_buffers::Reader;

use crate::constants::*;
use crate::error::RencodeError;
use crate::value::Value;

/// Decoder configuration.
#[derive(Debug, Clone, Copy)]
pub struct DecodeOptions {
    /// Maximum nesting depth of lists/dictionaries accepted before the
    /// decoder gives up with [`RencodeError::NestingTooDeep`].
    pub max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self { max_depth: 1024 }
    }
}

/// Stateless rencode decoder.
#[derive(Default)]
pub struct RencodeDecoder {
    options: DecodeOptions,
}

impl RencodeDecoder {
    pub fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    /// Decodes one value from the start of `input`, returning it together
    /// with the number of bytes consumed. Trailing bytes are left untouched,
    /// so concatenated values decode by calling again at the returned offset.
    pub fn decode(&self, input: &[u8]) -> Result<(Value, usize), RencodeError> {
        let mut reader = Reader::new(input);
        let value = self.read_any(&mut reader, 0)?;
        Ok((value, reader.x))
    }

    fn read_any(&self, r: &mut Reader, depth: usize) -> Result<Value, RencodeError> {
        if depth > self.options.max_depth {
            return Err(RencodeError::NestingTooDeep);
        }
        let typecode = r.peek().map_err(|_| RencodeError::UnexpectedEndOfBuffer)?;
        match typecode {
            CHR_INT1 => {
                r.skip(1)?;
                Ok(Value::Int(r.i8()? as i64))
            }
            CHR_INT2 => {
                r.skip(1)?;
                Ok(Value::Int(r.i16()? as i64))
            }
            CHR_INT4 => {
                r.skip(1)?;
                Ok(Value::Int(r.i32()? as i64))
            }
            CHR_INT8 => {
                r.skip(1)?;
                Ok(Value::Int(r.i64()?))
            }
            CHR_FLOAT32 => {
                r.skip(1)?;
                Ok(Value::Float32(r.f32()?))
            }
            CHR_FLOAT64 => {
                r.skip(1)?;
                Ok(Value::Float64(r.f64()?))
            }
            CHR_NONE => {
                r.skip(1)?;
                Ok(Value::Null)
            }
            CHR_TRUE => {
                r.skip(1)?;
                Ok(Value::Bool(true))
            }
            CHR_FALSE => {
                r.skip(1)?;
                Ok(Value::Bool(false))
            }
            CHR_INT => self.read_big_number(r),
            CHR_LIST => self.read_list(r, depth),
            CHR_DICT => self.read_dict(r, depth),
            tag if (INT_POS_FIXED_START..INT_POS_FIXED_START + INT_POS_FIXED_COUNT)
                .contains(&tag) =>
            {
                r.skip(1)?;
                Ok(Value::Int((tag - INT_POS_FIXED_START) as i64))
            }
            tag if (INT_NEG_FIXED_START..INT_NEG_FIXED_START + INT_NEG_FIXED_COUNT)
                .contains(&tag) =>
            {
                r.skip(1)?;
                Ok(Value::Int(-((tag - INT_NEG_FIXED_START) as i64 + 1)))
            }
            tag if (STR_FIXED_START..=STR_FIXED_START + (STR_FIXED_COUNT - 1))
                .contains(&tag) =>
            {
                r.skip(1)?;
                let size = (tag - STR_FIXED_START) as usize;
                Ok(Value::Bytes(r.buf(size)?.to_vec()))
            }
            b'1'..=b'9' => self.read_str(r),
            tag if tag >= LIST_FIXED_START => {
                r.skip(1)?;
                let count = (tag - LIST_FIXED_START) as usize;
                let mut items = Vec::with_capacity(count);
                for _ in 0..count {
                    items.push(self.read_any(r, depth + 1)?);
                }
                Ok(Value::List(items))
            }
            tag if (DICT_FIXED_START..DICT_FIXED_START + DICT_FIXED_COUNT).contains(&tag) => {
                r.skip(1)?;
                let count = (tag - DICT_FIXED_START) as usize;
                let mut pairs = Vec::with_capacity(count);
                for _ in 0..count {
                    let key = self.read_any(r, depth + 1)?;
                    let value = self.read_any(r, depth + 1)?;
                    pairs.push((key, value));
                }
                Ok(Value::Map(pairs))
            }
            unknown => Err(RencodeError::UnknownTypeCode(unknown)),
        }
    }

    /// ASCII decimal digits between `CHR_INT` and `CHR_TERM`. Values that
    /// fit 64 bits come back as `Int`, anything larger stays a `BigInt`.
    fn read_big_number(&self, r: &mut Reader) -> Result<Value, RencodeError> {
        r.skip(1)?;
        let len = r
            .find(CHR_TERM)
            .ok_or(RencodeError::UnterminatedCollectionOrNumber)?;
        let digits = std::str::from_utf8(r.buf(len)?)
            .map_err(|_| RencodeError::UnsupportedValueType("big number is not ASCII"))?
            .to_owned();
        r.skip(1)?; // terminator
        let unsigned = digits.strip_prefix('-').unwrap_or(&digits);
        if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RencodeError::UnsupportedValueType(
                "big number must be decimal digits with an optional leading '-'",
            ));
        }
        match digits.parse::<i64>() {
            Ok(n) => Ok(Value::Int(n)),
            Err(_) => Ok(Value::BigInt(digits)),
        }
    }

    /// Length-prefixed string: ASCII decimal length, `:`, raw bytes.
    fn read_str(&self, r: &mut Reader) -> Result<Value, RencodeError> {
        let len_end = r
            .find(b':')
            .ok_or(RencodeError::UnterminatedCollectionOrNumber)?;
        let len_digits = r.buf(len_end)?;
        r.skip(1)?; // ':'
        let mut size = 0usize;
        for &b in len_digits {
            if !b.is_ascii_digit() {
                return Err(RencodeError::UnknownTypeCode(b));
            }
            size = size
                .checked_mul(10)
                .and_then(|s| s.checked_add((b - b'0') as usize))
                .ok_or(RencodeError::IntegerTooLong)?;
        }
        Ok(Value::Bytes(r.buf(size)?.to_vec()))
    }

    fn read_list(&self, r: &mut Reader, depth: usize) -> Result<Value, RencodeError> {
        r.skip(1)?;
        let mut items = Vec::new();
        loop {
            match r.peek() {
                Ok(CHR_TERM) => {
                    r.skip(1)?;
                    return Ok(Value::List(items));
                }
                Ok(_) => items.push(self.read_any(r, depth + 1)?),
                Err(_) => return Err(RencodeError::UnterminatedCollectionOrNumber),
            }
        }
    }

    fn read_dict(&self, r: &mut Reader, depth: usize) -> Result<Value, RencodeError> {
        r.skip(1)?;
        let mut pairs = Vec::new();
        loop {
            match r.peek() {
                Ok(CHR_TERM) => {
                    r.skip(1)?;
                    return Ok(Value::Map(pairs));
                }
                Ok(_) => {
                    let key = self.read_any(r, depth + 1)?;
                    let value = self.read_any(r, depth + 1)?;
                    pairs.push((key, value));
                }
                Err(_) => return Err(RencodeError::UnterminatedCollectionOrNumber),
            }
        }
    }
}
