//! Binding message codec.
//!
//! A [`Message`] is built either through its setters and [`Message::add_attr`],
//! then written once with [`Message::pack`], or produced in one piece by
//! [`Message::unpack`] from a received datagram. Attribute types are unique
//! in a message: adding a type that is already present replaces the value in
//! place and keeps its position.

#![allow(clippy::len_without_is_empty)]

use crate::attrs::{AttrType, AttrValue, Attribute};
use crate::constants::*;
use crate::cursor::{Reader, Writer};
use crate::error::{Error, Result};
use crate::header::{Header, MessageClass};
use bytes::Bytes;
use log::trace;

#[derive(Debug, Clone)]
pub struct Message {
    class: MessageClass,
    trans_id: Option<Bytes>,
    attrs: Vec<Attribute>,
}

impl Default for Message {
    fn default() -> Self {
        Self::new()
    }
}

impl Message {
    pub fn new() -> Self {
        Self {
            class: MessageClass::BindingRequest,
            trans_id: None,
            attrs: vec![],
        }
    }

    /// Back to an empty binding request. The transaction id is kept.
    pub fn init(&mut self) {
        self.class = MessageClass::BindingRequest;
        self.attrs.clear();
    }

    pub fn class(&self) -> MessageClass {
        self.class
    }

    pub fn set_class(&mut self, class: MessageClass) {
        self.class = class;
    }

    pub fn trans_id(&self) -> Option<&Bytes> {
        self.trans_id.as_ref()
    }

    /// Length is checked by `pack`, not here.
    pub fn set_trans_id(&mut self, trans_id: Bytes) {
        self.trans_id = Some(trans_id);
    }

    pub fn add_attr(&mut self, attr_type: AttrType, value: AttrValue) -> Result<()> {
        let attr = Attribute::new(attr_type, value)?;
        self.insert(attr);
        Ok(())
    }

    fn insert(&mut self, attr: Attribute) {
        match self.attrs.iter_mut().find(|v| v.attr_type == attr.attr_type) {
            Some(v) => v.value = attr.value,
            None => self.attrs.push(attr),
        }
    }

    pub fn attrs(&self) -> &[Attribute] {
        &self.attrs
    }

    pub fn get_attr(&self, attr_type: AttrType) -> Option<&AttrValue> {
        self.attrs
            .iter()
            .find(|v| v.attr_type == attr_type)
            .map(|v| &v.value)
    }

    /// Full wire size, header included.
    pub fn len(&self) -> Result<usize> {
        let mut total = HEADER_LEN;
        for v in self.attrs.iter() {
            total += v.len()?;
        }
        Ok(total)
    }

    pub fn pack(&self) -> Result<Bytes> {
        let total = self.len()?;

        let trans_id = match &self.trans_id {
            Some(v) if v.len() == TRANS_ID_LEN => v.clone(),
            Some(v) => {
                return Err(Error::MalformedMessage(format!(
                    "transaction id len:{} != {}",
                    v.len(),
                    TRANS_ID_LEN
                )));
            }
            None => {
                return Err(Error::MalformedMessage(
                    "transaction id not set".to_string(),
                ));
            }
        };

        let body_len = total - HEADER_LEN;
        if body_len > u16::MAX as usize {
            return Err(Error::MalformedMessage(format!(
                "body len:{} > {}",
                body_len,
                u16::MAX
            )));
        }

        let mut w = Writer::new(total);
        Header::new(self.class, body_len as u16, trans_id).pack(&mut w)?;
        for v in self.attrs.iter() {
            v.pack(&mut w)?;
        }

        Ok(w.freeze())
    }

    /// The transaction id of the result shares `buf`'s allocation.
    pub fn unpack(buf: Bytes) -> Result<Self> {
        let total = buf.len();
        let mut r = Reader::new(buf);

        let header = Header::unpack(&mut r)?;
        if total - HEADER_LEN != header.msg_len as usize {
            return Err(Error::MalformedMessage(format!(
                "header len:{} != {}",
                header.msg_len,
                total - HEADER_LEN
            )));
        }

        let mut message = Message {
            class: header.class,
            trans_id: Some(header.trans_id),
            attrs: vec![],
        };

        while r.remaining() > 0 {
            let code = r.read_u16()?;
            let attr_len = r.read_u16()? as usize;

            if r.remaining() < attr_len {
                return Err(Error::MalformedMessage(format!(
                    "attr code:{:#06x} remaining:{} len:{}",
                    code,
                    r.remaining(),
                    attr_len
                )));
            }
            let mut value = Reader::new(r.split(attr_len)?);

            let attr_type = match AttrType::from_code(code) {
                Some(v) => v,
                None => {
                    trace!("skip unknown attr {:#06x}, len:{}", code, attr_len);
                    continue;
                }
            };

            match Attribute::unpack(attr_type, &mut value)? {
                Some(attr) => message.insert(attr),
                None => {
                    trace!("skip unsupported attr {:?}, len:{}", attr_type, attr_len);
                }
            }
        }

        Ok(message)
    }
}
