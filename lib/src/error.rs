//! Errors raised by the address helpers and the message codec.
//!
//! Every failure is local and synchronous: `pack` and `unpack` either return a
//! complete value or one of these, never a half-written buffer or a
//! half-populated message.

use crate::attrs::AttrType;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// dotted-quad text that does not parse
    #[error("bad address format: {0}")]
    Format(String),

    /// numeric address outside `0..=u32::MAX`
    #[error("numeric address out of range: {0}")]
    Range(u64),

    /// transaction id absent or not 16 bytes, body length mismatch,
    /// truncated attribute, unknown message type
    #[error("malformed message: {0}")]
    MalformedMessage(String),

    /// recognized attribute type with no write path
    #[error("unsupported attribute: {0:?}")]
    UnsupportedAttribute(AttrType),

    #[error("unsupported address family: {0:#04x}")]
    UnsupportedFamily(u8),

    #[error("buffer overrun: need {need} bytes, {remaining} remaining")]
    BufferOverrun { need: usize, remaining: usize },

    /// value shape does not belong to the attribute type it was added under
    #[error("value does not match attribute type: {0:?}")]
    ValueMismatch(AttrType),
}
