//! MessagePack tag bytes.
//!
//! Only the families this codec speaks are listed. Float, bin, ext and the
//! reserved `0xc1` byte are deliberately absent: the decoder rejects them as
//! undecodeable tags.

/// One-byte markers that carry their whole value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MsgPackMarker {
    Nil = 0xc0,
    False = 0xc2,
    True = 0xc3,
}

pub const NIL: u8 = MsgPackMarker::Nil as u8;
pub const FALSE: u8 = MsgPackMarker::False as u8;
pub const TRUE: u8 = MsgPackMarker::True as u8;

// Fixed-width integers (payload follows the tag, big-endian)
pub const UINT8: u8 = 0xcc;
pub const UINT16: u8 = 0xcd;
pub const UINT32: u8 = 0xce;
pub const UINT64: u8 = 0xcf;
pub const INT8: u8 = 0xd0;
pub const INT16: u8 = 0xd1;
pub const INT32: u8 = 0xd2;
pub const INT64: u8 = 0xd3;

// Length-prefixed families
pub const STR8: u8 = 0xd9;
pub const STR16: u8 = 0xda;
pub const STR32: u8 = 0xdb;
pub const ARRAY16: u8 = 0xdc;
pub const ARRAY32: u8 = 0xdd;
pub const MAP16: u8 = 0xde;
pub const MAP32: u8 = 0xdf;

// Compact forms: overlay | embedded value
pub const FIXMAP: u8 = 0b1000_0000;
pub const FIXARRAY: u8 = 0b1001_0000;
pub const FIXSTR: u8 = 0b1010_0000;
pub const NEGATIVE_FIXINT: u8 = 0b1110_0000;

/// Largest value a positive fixint embeds.
pub const POSITIVE_FIXINT_MAX: u8 = 0x7f;
/// Smallest value a negative fixint embeds.
pub const NEGATIVE_FIXINT_MIN: i64 = -32;

/// Longest payload a fixstr header embeds.
pub const FIXSTR_MAX_LEN: usize = 31;
/// Longest array or map a fixarray/fixmap header embeds.
pub const FIXCOLLECTION_MAX_LEN: usize = 15;
