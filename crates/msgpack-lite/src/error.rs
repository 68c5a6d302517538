//! MessagePack encoder and decoder error types.

use msgpack_lite_buffers::BufferError;
use thiserror::Error;

/// Error returned by the encoder.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("value of type {kind} has no MessagePack representation")]
    UnencodeableType { kind: &'static str },
    #[error("{kind} length {len} exceeds the 32-bit length limit")]
    UnencodeableLength { kind: &'static str, len: usize },
}

/// Error returned by the decoder.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("undecodeable tag byte {tag:#04x} at offset {offset}")]
    UndecodeableTag { tag: u8, offset: usize },
    #[error("truncated input at offset {offset}: needed {needed} bytes, {remaining} remaining")]
    TruncatedInput {
        offset: usize,
        needed: usize,
        remaining: usize,
    },
    #[error("map key of type {kind} cannot be used as an object key")]
    UnsupportedKeyType { kind: &'static str },
    #[error("nesting deeper than {max_depth} levels")]
    DepthLimitExceeded { max_depth: usize },
    #[error("{} trailing bytes after value ({consumed} of {len} consumed)", .len - .consumed)]
    TrailingBytes { consumed: usize, len: usize },
    #[error("invalid size: expected {expected} bytes, value spans {actual}")]
    InvalidSize { expected: usize, actual: usize },
    #[error("invalid UTF-8")]
    InvalidUtf8,
}

impl From<BufferError> for DecodeError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::EndOfBuffer {
                offset,
                needed,
                remaining,
            } => DecodeError::TruncatedInput {
                offset,
                needed,
                remaining,
            },
        }
    }
}
