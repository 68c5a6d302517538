//! Canonical MessagePack codec over a closed dynamic value type.
//!
//! The codec covers nil, booleans, integers across the full signed and
//! unsigned 64-bit ranges, string payloads, arrays and maps. Every value is
//! encoded in its shortest wire form; floats, bin and ext are not supported.
//!
//! ```
//! use msgpack_lite::{decode, encode, Value};
//!
//! let value = Value::Map(vec![(Value::from("foo"), Value::from("bar"))]);
//! let bytes = encode(&value).unwrap();
//! assert_eq!(bytes, [0x81, 0xa3, b'f', b'o', b'o', 0xa3, b'b', b'a', b'r']);
//! assert_eq!(decode(&bytes).unwrap(), value);
//! ```

pub mod constants;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod json;
pub mod util;
pub mod value;

pub use constants::MsgPackMarker;
pub use decoder::{Decoder, DecoderConfig, DEFAULT_MAX_DEPTH};
pub use encoder::Encoder;
pub use error::{DecodeError, EncodeError};
pub use json::{from_json, to_json};
pub use util::{decode, decode_json, decode_one, encode, encode_json, MsgPack};
pub use value::{Integer, Value};
