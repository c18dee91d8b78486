//! Codec for classic (RFC 3489 style) binding messages.
//!
//! [`message::Message`] maps between a message and its bytes,
//! [`responder::build_response`] turns a binding request into its reply,
//! and [`util`] carries the dotted-quad helpers. There is no socket code in
//! this crate.

pub mod attrs;
pub mod constants;
pub mod cursor;
pub mod error;
pub mod header;
pub mod message;
pub mod nat;
pub mod responder;
pub mod util;

pub use error::{Error, Result};
pub use message::Message;
