use crate::attrs::address_attr::{self, AddressAttr, Family};
use crate::constants::*;
use crate::cursor::{Reader, Writer};
use crate::error::Result;
use crate::util;

// xor-mapped-address, same layout as the plain address attributes.
//
// `port` and `address` hold the values as they travel on the wire, i.e.
// already xor-ed with the key. Nothing in the codec applies the key; use
// `mask` to build one from a plain address and `reveal` to get it back.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XorMappedAddress {
    pub family: Family,
    pub port: u16,
    pub address: u32,
}

impl XorMappedAddress {
    pub fn new(port: u16, address: u32) -> Self {
        Self {
            family: Family::Ipv4,
            port,
            address,
        }
    }

    /// address ^ key, port ^ upper 16 bits of key
    pub fn mask(plain: &AddressAttr, key: u32) -> Result<Self> {
        let address = util::address_to_integer(&plain.address)?;
        Ok(Self {
            family: plain.family,
            port: plain.port ^ (key >> 16) as u16,
            address: address ^ key,
        })
    }

    pub fn reveal(&self, key: u32) -> Result<AddressAttr> {
        Ok(AddressAttr {
            family: self.family,
            port: self.port ^ (key >> 16) as u16,
            address: util::integer_to_address(self.address ^ key)?,
        })
    }

    pub(crate) fn pack(&self, w: &mut Writer) -> Result<()> {
        address_attr::pack_frame(
            w,
            ATTR_XOR_MAPPED_ADDRESS,
            self.family,
            self.port,
            self.address,
        )
    }

    pub(crate) fn unpack(r: &mut Reader) -> Result<Self> {
        let (family, port, address) = address_attr::unpack_frame(r)?;
        Ok(Self {
            family,
            port,
            address,
        })
    }
}
