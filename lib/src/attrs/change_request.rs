use crate::constants::*;
use crate::cursor::{Reader, Writer};
use crate::error::Result;

const FLAG_CHANGE_IP: u32 = 0x04;
const FLAG_CHANGE_PORT: u32 = 0x02;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeRequest {
    pub change_ip: bool,
    pub change_port: bool,
}

impl ChangeRequest {
    pub fn new(change_ip: bool, change_port: bool) -> Self {
        Self {
            change_ip,
            change_port,
        }
    }

    pub(crate) fn pack(&self, w: &mut Writer) -> Result<()> {
        w.ensure(ATTR_HEADER_LEN + CHANGE_REQUEST_VALUE_LEN as usize)?;

        let mut flag: u32 = 0;
        if self.change_ip {
            flag |= FLAG_CHANGE_IP;
        }
        if self.change_port {
            flag |= FLAG_CHANGE_PORT;
        }

        w.put_u16(ATTR_CHANGE_REQUEST)?;
        w.put_u16(CHANGE_REQUEST_VALUE_LEN)?;
        w.put_u32(flag)
    }

    pub(crate) fn unpack(r: &mut Reader) -> Result<Self> {
        let flag = r.read_u32()?;
        Ok(Self {
            change_ip: flag & FLAG_CHANGE_IP == FLAG_CHANGE_IP,
            change_port: flag & FLAG_CHANGE_PORT == FLAG_CHANGE_PORT,
        })
    }
}
