//! The rencode typecode table.
//!
//! A constant partition of the byte value space shared by encoder and
//! decoder. Small integers, short strings, and short collections embed their
//! value or length directly in the tag byte ("fixed" forms); everything else
//! uses a single-byte marker followed by a fixed-width payload or a
//! terminator-delimited one ("open" forms).

/// Open list marker; elements follow until [`CHR_TERM`].
pub const CHR_LIST: u8 = 59;
/// Open dictionary marker; key/value pairs follow until [`CHR_TERM`].
pub const CHR_DICT: u8 = 60;
/// Big-number marker; ASCII decimal digits follow until [`CHR_TERM`].
pub const CHR_INT: u8 = 61;
/// 8-bit signed integer marker, 1 payload byte.
pub const CHR_INT1: u8 = 62;
/// 16-bit signed integer marker, 2 payload bytes big-endian.
pub const CHR_INT2: u8 = 63;
/// 32-bit signed integer marker, 4 payload bytes big-endian.
pub const CHR_INT4: u8 = 64;
/// 64-bit signed integer marker, 8 payload bytes big-endian.
pub const CHR_INT8: u8 = 65;
/// 32-bit float marker, 4 payload bytes big-endian.
pub const CHR_FLOAT32: u8 = 66;
/// 64-bit float marker, 8 payload bytes big-endian.
pub const CHR_FLOAT64: u8 = 44;
/// Boolean true.
pub const CHR_TRUE: u8 = 67;
/// Boolean false.
pub const CHR_FALSE: u8 = 68;
/// Null.
pub const CHR_NONE: u8 = 69;
/// Terminator sentinel ending an open list, dictionary, or big number.
pub const CHR_TERM: u8 = 127;

/// First tag byte of the fixed positive integer range; value = tag.
pub const INT_POS_FIXED_START: u8 = 0;
/// Number of fixed positive integer tags (values `0..44`).
pub const INT_POS_FIXED_COUNT: u8 = 44;

/// First tag byte of the fixed negative integer range; value = -(tag - start + 1).
pub const INT_NEG_FIXED_START: u8 = 70;
/// Number of fixed negative integer tags (values `-32..0`).
pub const INT_NEG_FIXED_COUNT: u8 = 32;

/// First tag byte of the fixed dictionary range; entry count = tag - start.
pub const DICT_FIXED_START: u8 = 102;
/// Number of fixed dictionary tags (counts `0..25`).
pub const DICT_FIXED_COUNT: u8 = 25;

/// First tag byte of the fixed string range; byte length = tag - start.
pub const STR_FIXED_START: u8 = 128;
/// Number of fixed string tags (lengths `0..64`).
pub const STR_FIXED_COUNT: u8 = 64;

/// First tag byte of the fixed list range; element count = tag - start.
pub const LIST_FIXED_START: u8 = STR_FIXED_START + STR_FIXED_COUNT;
/// Number of fixed list tags (counts `0..64`).
pub const LIST_FIXED_COUNT: u8 = 64;

/// Maximum number of ASCII characters in a big-number payload, exclusive.
pub const MAX_INT_LENGTH: usize = 64;
