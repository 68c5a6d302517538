//! `Encoder` — canonical MessagePack encoder.
//!
//! Every value is written in the shortest wire form that can hold it.
//! Signed multi-byte integers are written big-endian two's-complement.

use log::trace;
use msgpack_lite_buffers::Writer;

use crate::constants::*;
use crate::error::EncodeError;
use crate::value::{IntRepr, Integer, Value};

pub struct Encoder {
    pub writer: Writer,
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    /// Encodes one value.
    ///
    /// On error nothing is returned and the internal buffer is cleared, so
    /// the encoder can be reused right away.
    pub fn encode(&mut self, value: &Value) -> Result<Vec<u8>, EncodeError> {
        self.writer.reset();
        trace!("encode: {} value", value.kind());
        match self.write_any(value) {
            Ok(()) => Ok(self.writer.flush()),
            Err(err) => {
                self.writer.reset();
                Err(err)
            }
        }
    }

    pub fn write_any(&mut self, value: &Value) -> Result<(), EncodeError> {
        match value {
            Value::Nil => self.write_nil(),
            Value::Bool(b) => self.write_bool(*b),
            Value::Integer(n) => self.write_integer(*n),
            Value::Bytes(b) => self.write_str(b)?,
            Value::Array(items) => self.write_arr(items)?,
            Value::Map(pairs) => self.write_map(pairs)?,
            Value::Float(_) => {
                return Err(EncodeError::UnencodeableType {
                    kind: value.kind(),
                })
            }
        }
        Ok(())
    }

    pub fn write_nil(&mut self) {
        self.writer.u8(NIL);
    }

    pub fn write_bool(&mut self, b: bool) {
        self.writer.u8(if b { TRUE } else { FALSE });
    }

    pub fn write_integer(&mut self, n: Integer) {
        match n.n {
            IntRepr::PosInt(uint) => self.write_uint(uint),
            IntRepr::NegInt(int) => self.write_negative(int),
        }
    }

    /// Encode a non-negative integer.
    pub fn write_uint(&mut self, uint: u64) {
        if uint <= POSITIVE_FIXINT_MAX as u64 {
            self.writer.u8(uint as u8);
        } else if uint <= u8::MAX as u64 {
            self.writer.u8u8(UINT8, uint as u8);
        } else if uint <= u16::MAX as u64 {
            self.writer.u8u16(UINT16, uint as u16);
        } else if uint <= u32::MAX as u64 {
            self.writer.u8u32(UINT32, uint as u32);
        } else {
            self.writer.u8u64(UINT64, uint);
        }
    }

    /// Encode a signed integer, picking the unsigned families for values
    /// at or above zero.
    pub fn write_int(&mut self, int: i64) {
        if int >= 0 {
            self.write_uint(int as u64);
        } else {
            self.write_negative(int);
        }
    }

    fn write_negative(&mut self, int: i64) {
        debug_assert!(int < 0);
        if int >= NEGATIVE_FIXINT_MIN {
            // 111xxxxx is the low byte of the two's-complement form
            self.writer.i8(int as i8);
        } else if int >= i8::MIN as i64 {
            self.writer.u8(INT8);
            self.writer.i8(int as i8);
        } else if int >= i16::MIN as i64 {
            self.writer.u8(INT16);
            self.writer.i16(int as i16);
        } else if int >= i32::MIN as i64 {
            self.writer.u8(INT32);
            self.writer.i32(int as i32);
        } else {
            self.writer.u8(INT64);
            self.writer.i64(int);
        }
    }

    pub fn write_str_hdr(&mut self, length: usize) -> Result<(), EncodeError> {
        let len = length_u32("bytes", length)?;
        if length <= FIXSTR_MAX_LEN {
            self.writer.u8(FIXSTR | len as u8);
        } else if len <= u8::MAX as u32 {
            self.writer.u8u8(STR8, len as u8);
        } else if len <= u16::MAX as u32 {
            self.writer.u8u16(STR16, len as u16);
        } else {
            self.writer.u8u32(STR32, len);
        }
        Ok(())
    }

    /// Write a string payload: header, then the bytes verbatim.
    pub fn write_str(&mut self, bytes: &[u8]) -> Result<(), EncodeError> {
        self.write_str_hdr(bytes.len())?;
        self.writer.buf(bytes);
        Ok(())
    }

    pub fn write_arr_hdr(&mut self, length: usize) -> Result<(), EncodeError> {
        let len = length_u32("array", length)?;
        if length <= FIXCOLLECTION_MAX_LEN {
            self.writer.u8(FIXARRAY | len as u8);
        } else if len <= u16::MAX as u32 {
            self.writer.u8u16(ARRAY16, len as u16);
        } else {
            self.writer.u8u32(ARRAY32, len);
        }
        Ok(())
    }

    pub fn write_arr(&mut self, items: &[Value]) -> Result<(), EncodeError> {
        self.write_arr_hdr(items.len())?;
        for item in items {
            self.write_any(item)?;
        }
        Ok(())
    }

    pub fn write_map_hdr(&mut self, length: usize) -> Result<(), EncodeError> {
        let len = length_u32("map", length)?;
        if length <= FIXCOLLECTION_MAX_LEN {
            self.writer.u8(FIXMAP | len as u8);
        } else if len <= u16::MAX as u32 {
            self.writer.u8u16(MAP16, len as u16);
        } else {
            self.writer.u8u32(MAP32, len);
        }
        Ok(())
    }

    pub fn write_map(&mut self, pairs: &[(Value, Value)]) -> Result<(), EncodeError> {
        self.write_map_hdr(pairs.len())?;
        for (key, val) in pairs {
            self.write_any(key)?;
            self.write_any(val)?;
        }
        Ok(())
    }
}

fn length_u32(kind: &'static str, len: usize) -> Result<u32, EncodeError> {
    u32::try_from(len).map_err(|_| EncodeError::UnencodeableLength { kind, len })
}
