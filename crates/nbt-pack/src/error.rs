//! Crate-wide error type.

use thiserror::Error;

use crate::Tag;

#[derive(Debug, Error, PartialEq)]
pub enum NbtError {
    #[error("unknown tag 0x{0:02x}")]
    UnknownTag(u8),
    #[error("expected compound tag at root, found 0x{0:02x}")]
    UnexpectedRootTag(u8),
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("list element tag {found:?} does not match declared tag {expected:?}")]
    HeterogeneousList { expected: Tag, found: Tag },
    #[error("invalid modified UTF-8 in string")]
    InvalidUtf8,
    #[error("encoded string is {0} bytes, longer than the 65535-byte limit")]
    StringTooLong(usize),
    #[error("unsupported value kind: {0}")]
    UnsupportedValueKind(&'static str),
    #[error("value does not match the dispatched tag")]
    TagMismatch,
}
