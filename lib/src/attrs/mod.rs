//! Attribute registry and value shapes.
//!
//! [`AttrType`] is the closed set of attribute codes this crate knows by
//! name. Only some of them have a value shape ([`AttrValue`]) and a write
//! path; the rest are recognized so they can be skipped on read and refused
//! on write.

use crate::constants::*;
use crate::cursor::{Reader, Writer};
use crate::error::{Error, Result};

pub mod address_attr;
pub mod change_request;
pub mod timestamp;
pub mod xor_address;

use address_attr::AddressAttr;
use change_request::ChangeRequest;
use timestamp::Timestamp;
use xor_address::XorMappedAddress;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttrType {
    MappedAddress,
    ResponseAddress,
    ChangeRequest,
    SourceAddress,
    ChangedAddress,
    Username,
    Password,
    MessageIntegrity,
    ErrorCode,
    UnknownAttributes,
    ReflectedFrom,
    XorMappedAddress,
    Timestamp,
}

impl AttrType {
    pub fn code(&self) -> u16 {
        match self {
            AttrType::MappedAddress => ATTR_MAPPED_ADDRESS,
            AttrType::ResponseAddress => ATTR_RESPONSE_ADDRESS,
            AttrType::ChangeRequest => ATTR_CHANGE_REQUEST,
            AttrType::SourceAddress => ATTR_SOURCE_ADDRESS,
            AttrType::ChangedAddress => ATTR_CHANGED_ADDRESS,
            AttrType::Username => ATTR_USERNAME,
            AttrType::Password => ATTR_PASSWORD,
            AttrType::MessageIntegrity => ATTR_MESSAGE_INTEGRITY,
            AttrType::ErrorCode => ATTR_ERROR_CODE,
            AttrType::UnknownAttributes => ATTR_UNKNOWN_ATTRIBUTES,
            AttrType::ReflectedFrom => ATTR_REFLECTED_FROM,
            AttrType::XorMappedAddress => ATTR_XOR_MAPPED_ADDRESS,
            AttrType::Timestamp => ATTR_TIMESTAMP,
        }
    }

    pub fn from_code(code: u16) -> Option<Self> {
        let attr_type = match code {
            ATTR_MAPPED_ADDRESS => AttrType::MappedAddress,
            ATTR_RESPONSE_ADDRESS => AttrType::ResponseAddress,
            ATTR_CHANGE_REQUEST => AttrType::ChangeRequest,
            ATTR_SOURCE_ADDRESS => AttrType::SourceAddress,
            ATTR_CHANGED_ADDRESS => AttrType::ChangedAddress,
            ATTR_USERNAME => AttrType::Username,
            ATTR_PASSWORD => AttrType::Password,
            ATTR_MESSAGE_INTEGRITY => AttrType::MessageIntegrity,
            ATTR_ERROR_CODE => AttrType::ErrorCode,
            ATTR_UNKNOWN_ATTRIBUTES => AttrType::UnknownAttributes,
            ATTR_REFLECTED_FROM => AttrType::ReflectedFrom,
            ATTR_XOR_MAPPED_ADDRESS => AttrType::XorMappedAddress,
            ATTR_TIMESTAMP => AttrType::Timestamp,
            _ => return None,
        };
        Some(attr_type)
    }

    /// Bytes taken on the wire, TLV header included. `None` means the type
    /// has no write path.
    pub fn wire_size(&self) -> Option<usize> {
        match self {
            AttrType::MappedAddress
            | AttrType::ResponseAddress
            | AttrType::SourceAddress
            | AttrType::ChangedAddress
            | AttrType::XorMappedAddress => Some(ATTR_HEADER_LEN + ADDRESS_VALUE_LEN as usize),
            AttrType::ChangeRequest => Some(ATTR_HEADER_LEN + CHANGE_REQUEST_VALUE_LEN as usize),
            AttrType::Timestamp => Some(ATTR_HEADER_LEN + TIMESTAMP_VALUE_LEN as usize),
            AttrType::Username
            | AttrType::Password
            | AttrType::MessageIntegrity
            | AttrType::ErrorCode
            | AttrType::UnknownAttributes
            | AttrType::ReflectedFrom => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Address(AddressAttr),
    XorAddress(XorMappedAddress),
    ChangeRequest(ChangeRequest),
    Timestamp(Timestamp),
}

impl From<AddressAttr> for AttrValue {
    fn from(v: AddressAttr) -> Self {
        AttrValue::Address(v)
    }
}

impl From<XorMappedAddress> for AttrValue {
    fn from(v: XorMappedAddress) -> Self {
        AttrValue::XorAddress(v)
    }
}

impl From<ChangeRequest> for AttrValue {
    fn from(v: ChangeRequest) -> Self {
        AttrValue::ChangeRequest(v)
    }
}

impl From<Timestamp> for AttrValue {
    fn from(v: Timestamp) -> Self {
        AttrValue::Timestamp(v)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub attr_type: AttrType,
    pub value: AttrValue,
}

impl Attribute {
    /// Checks that `value` may be stored under `attr_type`.
    ///
    /// Types without a write path take any value; `pack` refuses them later.
    pub fn new(attr_type: AttrType, value: AttrValue) -> Result<Self> {
        match (attr_type, &value) {
            (
                AttrType::MappedAddress
                | AttrType::ResponseAddress
                | AttrType::SourceAddress
                | AttrType::ChangedAddress,
                AttrValue::Address(v),
            ) => v.validate()?,
            (AttrType::XorMappedAddress, AttrValue::XorAddress(_))
            | (AttrType::ChangeRequest, AttrValue::ChangeRequest(_))
            | (AttrType::Timestamp, AttrValue::Timestamp(_)) => {}
            (
                AttrType::MappedAddress
                | AttrType::ResponseAddress
                | AttrType::SourceAddress
                | AttrType::ChangedAddress
                | AttrType::XorMappedAddress
                | AttrType::ChangeRequest
                | AttrType::Timestamp,
                _,
            ) => return Err(Error::ValueMismatch(attr_type)),
            (
                AttrType::Username
                | AttrType::Password
                | AttrType::MessageIntegrity
                | AttrType::ErrorCode
                | AttrType::UnknownAttributes
                | AttrType::ReflectedFrom,
                _,
            ) => {}
        }

        Ok(Self { attr_type, value })
    }

    pub fn len(&self) -> Result<usize> {
        self.attr_type
            .wire_size()
            .ok_or(Error::UnsupportedAttribute(self.attr_type))
    }

    /// Writes the whole TLV.
    pub fn pack(&self, w: &mut Writer) -> Result<()> {
        let code = self.attr_type.code();
        match self.attr_type {
            AttrType::MappedAddress
            | AttrType::ResponseAddress
            | AttrType::SourceAddress
            | AttrType::ChangedAddress => match &self.value {
                AttrValue::Address(v) => v.pack(code, w),
                _ => Err(Error::ValueMismatch(self.attr_type)),
            },
            AttrType::XorMappedAddress => match &self.value {
                AttrValue::XorAddress(v) => v.pack(w),
                _ => Err(Error::ValueMismatch(self.attr_type)),
            },
            AttrType::ChangeRequest => match &self.value {
                AttrValue::ChangeRequest(v) => v.pack(w),
                _ => Err(Error::ValueMismatch(self.attr_type)),
            },
            AttrType::Timestamp => match &self.value {
                AttrValue::Timestamp(v) => v.pack(w),
                _ => Err(Error::ValueMismatch(self.attr_type)),
            },
            AttrType::Username
            | AttrType::Password
            | AttrType::MessageIntegrity
            | AttrType::ErrorCode
            | AttrType::UnknownAttributes
            | AttrType::ReflectedFrom => Err(Error::UnsupportedAttribute(self.attr_type)),
        }
    }

    /// Parses one attribute value. `r` holds exactly the declared value
    /// bytes. `Ok(None)` means the type is recognized but has no read path
    /// and was skipped.
    pub fn unpack(attr_type: AttrType, r: &mut Reader) -> Result<Option<Self>> {
        let value_len = r.remaining();
        let value = match attr_type {
            AttrType::MappedAddress
            | AttrType::ResponseAddress
            | AttrType::SourceAddress
            | AttrType::ChangedAddress => {
                expect_len(attr_type, value_len, ADDRESS_VALUE_LEN)?;
                AttrValue::Address(AddressAttr::unpack(r)?)
            }
            AttrType::XorMappedAddress => {
                expect_len(attr_type, value_len, ADDRESS_VALUE_LEN)?;
                AttrValue::XorAddress(XorMappedAddress::unpack(r)?)
            }
            AttrType::ChangeRequest => {
                expect_len(attr_type, value_len, CHANGE_REQUEST_VALUE_LEN)?;
                AttrValue::ChangeRequest(ChangeRequest::unpack(r)?)
            }
            AttrType::Timestamp => {
                expect_len(attr_type, value_len, TIMESTAMP_VALUE_LEN)?;
                AttrValue::Timestamp(Timestamp::unpack(r)?)
            }
            AttrType::Username
            | AttrType::Password
            | AttrType::MessageIntegrity
            | AttrType::ErrorCode
            | AttrType::UnknownAttributes
            | AttrType::ReflectedFrom => return Ok(None),
        };

        Ok(Some(Self { attr_type, value }))
    }
}

fn expect_len(attr_type: AttrType, got: usize, want: u16) -> Result<()> {
    if got != want as usize {
        return Err(Error::MalformedMessage(format!(
            "attr {:?} ({:#06x}) len:{} != {}",
            attr_type,
            attr_type.code(),
            got,
            want
        )));
    }
    Ok(())
}
