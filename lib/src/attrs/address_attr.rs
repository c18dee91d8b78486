use crate::constants::*;
use crate::cursor::{Reader, Writer};
use crate::error::{Error, Result};
use crate::util;

// address-shaped attributes
//
// mapped-address  response-address  source-address  changed-address
//
// 0        reserved, always 0
// 1        family, only ipv4 (0x01)
// 2..4     port
// 4..8     address

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Ipv4,
}

impl Family {
    pub fn code(&self) -> u8 {
        match self {
            Family::Ipv4 => ATTR_FAMILY_IPV4,
        }
    }

    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            ATTR_FAMILY_IPV4 => Ok(Family::Ipv4),
            v => Err(Error::UnsupportedFamily(v)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressAttr {
    pub family: Family,
    pub port: u16,

    // dotted-quad
    pub address: String,
}

impl AddressAttr {
    pub fn new(address: &str, port: u16) -> Self {
        Self {
            family: Family::Ipv4,
            port,
            address: address.to_string(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        util::address_to_integer(&self.address).map(|_| ())
    }

    pub(crate) fn pack(&self, code: u16, w: &mut Writer) -> Result<()> {
        let address = util::address_to_integer(&self.address)?;
        pack_frame(w, code, self.family, self.port, address)
    }

    pub(crate) fn unpack(r: &mut Reader) -> Result<Self> {
        let (family, port, address) = unpack_frame(r)?;
        Ok(Self {
            family,
            port,
            address: util::integer_to_address(address)?,
        })
    }
}

pub(crate) fn pack_frame(
    w: &mut Writer,
    code: u16,
    family: Family,
    port: u16,
    address: u32,
) -> Result<()> {
    w.ensure(ATTR_HEADER_LEN + ADDRESS_VALUE_LEN as usize)?;

    w.put_u16(code)?;
    w.put_u16(ADDRESS_VALUE_LEN)?;
    w.put_u8(0)?;
    w.put_u8(family.code())?;
    w.put_u16(port)?;
    w.put_u32(address)
}

pub(crate) fn unpack_frame(r: &mut Reader) -> Result<(Family, u16, u32)> {
    r.skip(1)?;
    let family = Family::from_code(r.read_u8()?)?;
    let port = r.read_u16()?;
    let address = r.read_u32()?;
    Ok((family, port, address))
}
