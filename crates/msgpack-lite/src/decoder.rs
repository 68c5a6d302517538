//! `Decoder` — MessagePack decoder with skip and validation.
//!
//! The decoder walks a single borrowed buffer with a cursor. Nested arrays
//! and maps recurse on the same cursor, so "bytes consumed" is simply how
//! far the cursor moved. Nesting is bounded by [`DecoderConfig::max_depth`].

use log::{debug, trace};
use msgpack_lite_buffers::Reader;

use crate::constants::*;
use crate::error::DecodeError;
use crate::value::{Integer, Value};

/// Default bound on array/map nesting.
pub const DEFAULT_MAX_DEPTH: usize = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Deepest array/map nesting accepted. A top-level scalar has depth 0,
    /// `[[]]` has depth 2.
    pub max_depth: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// What a tag byte (plus its length or payload field) announces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Header {
    Nil,
    Bool(bool),
    Int(Integer),
    Str(usize),
    Array(usize),
    Map(usize),
}

#[derive(Debug, Clone, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode exactly one value spanning the whole input.
    pub fn decode(&self, input: &[u8]) -> Result<Value, DecodeError> {
        let (value, consumed) = self.decode_one(input, 0)?;
        if consumed != input.len() {
            debug!("decode: {} trailing bytes", input.len() - consumed);
            return Err(DecodeError::TrailingBytes {
                consumed,
                len: input.len(),
            });
        }
        Ok(value)
    }

    /// Decode one value starting at `offset`, returning it together with the
    /// number of bytes it occupied.
    pub fn decode_one(&self, input: &[u8], offset: usize) -> Result<(Value, usize), DecodeError> {
        trace!("decode_one: offset {offset} of {} bytes", input.len());
        let mut reader = Reader::from_offset(input, offset);
        match self.read_any(&mut reader, 0) {
            Ok(value) => Ok((value, reader.x - offset)),
            Err(err) => {
                debug!("decode_one: {err}");
                Err(err)
            }
        }
    }

    /// Measure the value starting at `offset` without materialising it.
    pub fn skip_one(&self, input: &[u8], offset: usize) -> Result<usize, DecodeError> {
        let mut reader = Reader::from_offset(input, offset);
        self.skip_any(&mut reader, 0)?;
        Ok(reader.x - offset)
    }

    /// Check that `input[offset..offset + size]` holds exactly one value.
    pub fn validate(&self, input: &[u8], offset: usize, size: usize) -> Result<(), DecodeError> {
        let actual = self.skip_one(input, offset)?;
        if actual != size {
            return Err(DecodeError::InvalidSize {
                expected: size,
                actual,
            });
        }
        Ok(())
    }

    fn read_any(&self, reader: &mut Reader<'_>, depth: usize) -> Result<Value, DecodeError> {
        match read_header(reader)? {
            Header::Nil => Ok(Value::Nil),
            Header::Bool(b) => Ok(Value::Bool(b)),
            Header::Int(n) => Ok(Value::Integer(n)),
            Header::Str(len) => Ok(Value::Bytes(reader.buf(len)?.to_vec())),
            Header::Array(len) => {
                let depth = self.descend(depth)?;
                trace!("array of {len} at offset {}", reader.x);
                let mut items = Vec::with_capacity(len.min(reader.size()));
                for _ in 0..len {
                    items.push(self.read_any(reader, depth)?);
                }
                Ok(Value::Array(items))
            }
            Header::Map(len) => {
                let depth = self.descend(depth)?;
                trace!("map of {len} pairs at offset {}", reader.x);
                let mut pairs = Vec::with_capacity(len.min(reader.size() / 2));
                for _ in 0..len {
                    let key = self.read_any(reader, depth)?;
                    let val = self.read_any(reader, depth)?;
                    pairs.push((key, val));
                }
                Ok(Value::Map(pairs))
            }
        }
    }

    fn skip_any(&self, reader: &mut Reader<'_>, depth: usize) -> Result<(), DecodeError> {
        match read_header(reader)? {
            Header::Nil | Header::Bool(_) | Header::Int(_) => {}
            Header::Str(len) => reader.skip(len)?,
            Header::Array(len) => {
                let depth = self.descend(depth)?;
                for _ in 0..len {
                    self.skip_any(reader, depth)?;
                }
            }
            Header::Map(len) => {
                let depth = self.descend(depth)?;
                for _ in 0..len {
                    self.skip_any(reader, depth)?; // key
                    self.skip_any(reader, depth)?; // value
                }
            }
        }
        Ok(())
    }

    fn descend(&self, depth: usize) -> Result<usize, DecodeError> {
        let depth = depth + 1;
        if depth > self.config.max_depth {
            return Err(DecodeError::DepthLimitExceeded {
                max_depth: self.config.max_depth,
            });
        }
        Ok(depth)
    }
}

/// Read a tag byte and whatever fixed-size field follows it.
///
/// The tag space is partitioned by its high bits: `0xxxxxxx` positive
/// fixint, `1000xxxx` fixmap, `1001xxxx` fixarray, `101xxxxx` fixstr,
/// `111xxxxx` negative fixint; everything in `0xc0..=0xdf` is matched
/// exactly.
fn read_header(reader: &mut Reader<'_>) -> Result<Header, DecodeError> {
    let offset = reader.x;
    let byte = reader.u8()?;
    let header = match byte {
        0x00..=0x7f => Header::Int(Integer::from(byte)),
        0x80..=0x8f => Header::Map((byte & 0x0f) as usize),
        0x90..=0x9f => Header::Array((byte & 0x0f) as usize),
        0xa0..=0xbf => Header::Str((byte & 0x1f) as usize),
        NIL => Header::Nil,
        FALSE => Header::Bool(false),
        TRUE => Header::Bool(true),
        UINT8 => Header::Int(reader.u8()?.into()),
        UINT16 => Header::Int(reader.u16()?.into()),
        UINT32 => Header::Int(reader.u32()?.into()),
        UINT64 => Header::Int(reader.u64()?.into()),
        INT8 => Header::Int(reader.i8()?.into()),
        INT16 => Header::Int(reader.i16()?.into()),
        INT32 => Header::Int(reader.i32()?.into()),
        INT64 => Header::Int(reader.i64()?.into()),
        STR8 => Header::Str(reader.u8()? as usize),
        STR16 => Header::Str(reader.u16()? as usize),
        STR32 => Header::Str(reader.u32()? as usize),
        ARRAY16 => Header::Array(reader.u16()? as usize),
        ARRAY32 => Header::Array(reader.u32()? as usize),
        MAP16 => Header::Map(reader.u16()? as usize),
        MAP32 => Header::Map(reader.u32()? as usize),
        0xe0..=0xff => Header::Int(Integer::from(byte as i8)),
        _ => {
            reader.x = offset;
            return Err(DecodeError::UndecodeableTag { tag: byte, offset });
        }
    };
    Ok(header)
}
