use crate::constants::*;
use crate::cursor::{Reader, Writer};
use crate::error::{Error, Result};
use bytes::Bytes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageClass {
    BindingRequest,
    BindingResponse,
    BindingError,
    SharedSecretRequest,
    SharedSecretResponse,
    SharedSecretError,
}

impl MessageClass {
    pub fn code(&self) -> u16 {
        match self {
            MessageClass::BindingRequest => MESSAGE_TYPE_BIND_REQ,
            MessageClass::BindingResponse => MESSAGE_TYPE_BIND_RES,
            MessageClass::BindingError => MESSAGE_TYPE_BIND_ERR_RES,
            MessageClass::SharedSecretRequest => MESSAGE_TYPE_SECRET_REQ,
            MessageClass::SharedSecretResponse => MESSAGE_TYPE_SECRET_RES,
            MessageClass::SharedSecretError => MESSAGE_TYPE_SECRET_ERR_RES,
        }
    }

    pub fn from_code(code: u16) -> Option<Self> {
        let class = match code {
            MESSAGE_TYPE_BIND_REQ => MessageClass::BindingRequest,
            MESSAGE_TYPE_BIND_RES => MessageClass::BindingResponse,
            MESSAGE_TYPE_BIND_ERR_RES => MessageClass::BindingError,
            MESSAGE_TYPE_SECRET_REQ => MessageClass::SharedSecretRequest,
            MESSAGE_TYPE_SECRET_RES => MessageClass::SharedSecretResponse,
            MESSAGE_TYPE_SECRET_ERR_RES => MessageClass::SharedSecretError,
            _ => return None,
        };
        Some(class)
    }

    pub fn name(&self) -> &'static str {
        match self {
            MessageClass::BindingRequest => "breq",
            MessageClass::BindingResponse => "bres",
            MessageClass::BindingError => "berr",
            MessageClass::SharedSecretRequest => "sreq",
            MessageClass::SharedSecretResponse => "sres",
            MessageClass::SharedSecretError => "serr",
        }
    }
}

// rfc 3489, 11.1
#[derive(Debug, Clone)]
pub struct Header {
    pub class: MessageClass,

    // not counting the 20 header bytes
    pub msg_len: u16,

    pub trans_id: Bytes,
}

impl Header {
    pub fn new(class: MessageClass, msg_len: u16, trans_id: Bytes) -> Self {
        Self {
            class,
            msg_len,
            trans_id,
        }
    }

    pub fn pack(&self, w: &mut Writer) -> Result<()> {
        if self.trans_id.len() != TRANS_ID_LEN {
            return Err(Error::MalformedMessage(format!(
                "transaction id len:{} != {}",
                self.trans_id.len(),
                TRANS_ID_LEN
            )));
        }

        w.ensure(HEADER_LEN)?;
        w.put_u16(self.class.code())?;
        w.put_u16(self.msg_len)?;
        w.put_slice(&self.trans_id)
    }

    /// Only checks sizes and the message type, not the body.
    pub fn unpack(r: &mut Reader) -> Result<Self> {
        if r.remaining() < HEADER_LEN {
            return Err(Error::MalformedMessage(format!(
                "header buf len:{} < {}",
                r.remaining(),
                HEADER_LEN
            )));
        }

        let code = r.read_u16()?;
        let class = match MessageClass::from_code(code) {
            Some(v) => v,
            None => {
                return Err(Error::MalformedMessage(format!(
                    "unknown message type: {:#06x}",
                    code
                )));
            }
        };
        let msg_len = r.read_u16()?;
        let trans_id = r.split(TRANS_ID_LEN)?;

        Ok(Self {
            class,
            msg_len,
            trans_id,
        })
    }
}
