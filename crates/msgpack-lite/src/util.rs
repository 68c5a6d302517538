//! Convenience MessagePack helpers.
//!
//! Each call builds a fresh encoder or decoder with default settings.

use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::{DecodeError, EncodeError};
use crate::json::{from_json, to_json};
use crate::value::Value;

/// Binary MessagePack payload alias.
pub type MsgPack = Vec<u8>;

pub fn encode(value: &Value) -> Result<MsgPack, EncodeError> {
    Encoder::new().encode(value)
}

/// Decode one value that must span the whole input.
pub fn decode(blob: &[u8]) -> Result<Value, DecodeError> {
    Decoder::new().decode(blob)
}

/// Decode one value at `offset`, returning it with the bytes it consumed.
pub fn decode_one(blob: &[u8], offset: usize) -> Result<(Value, usize), DecodeError> {
    Decoder::new().decode_one(blob, offset)
}

/// Encode a JSON document. Non-integer numbers fail with
/// [`EncodeError::UnencodeableType`].
pub fn encode_json(json: &serde_json::Value) -> Result<MsgPack, EncodeError> {
    encode(&from_json(json))
}

/// Decode into JSON, applying the key rules of [`to_json`].
pub fn decode_json(blob: &[u8]) -> Result<serde_json::Value, DecodeError> {
    to_json(&decode(blob)?)
}
