//! Byte-level integer tokenizing for puzzle inputs.
pub mod scalar;

pub use scalar::{atoi, Token, Tokenizer};
