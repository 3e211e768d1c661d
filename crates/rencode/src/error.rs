use rencode_buffers::BufferError;
use thiserror::Error;

use crate::constants::MAX_INT_LENGTH;

/// Errors produced by the rencode encoder and decoder.
///
/// Every failure is surfaced to the immediate caller; the codec never
/// substitutes a null or default value for malformed input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RencodeError {
    /// A read would extend past the end of the input buffer.
    #[error("unexpected end of buffer")]
    UnexpectedEndOfBuffer,
    /// The tag byte at the cursor matches no range or marker in the
    /// typecode table.
    #[error("unknown typecode {0}")]
    UnknownTypeCode(u8),
    /// An open-form list, dictionary, or big number is missing its
    /// terminator, or a length-prefixed string is missing its `:` delimiter.
    #[error("unterminated collection or number")]
    UnterminatedCollectionOrNumber,
    /// A big-number payload reached the [`MAX_INT_LENGTH`] character ceiling.
    #[error("number is longer than {MAX_INT_LENGTH} characters")]
    IntegerTooLong,
    /// A value cannot be represented in the requested form.
    #[error("unsupported value: {0}")]
    UnsupportedValueType(&'static str),
    /// Float precision other than 32 or 64 bits was requested.
    #[error("float bits ({0}) is not 32 or 64")]
    InvalidFloatPrecision(u32),
    /// Input nesting exceeded the decoder's configured depth bound.
    #[error("maximum nesting depth exceeded")]
    NestingTooDeep,
}

impl From<BufferError> for RencodeError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::EndOfBuffer => RencodeError::UnexpectedEndOfBuffer,
        }
    }
}
