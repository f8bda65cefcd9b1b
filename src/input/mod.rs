//! Input decoding: raw keys and typed tokens to calculator commands.

mod decoder;

pub use decoder::{Command, Key, decode_key, decode_token, tokenize};
