use crate::constants::*;
use crate::cursor::{Reader, Writer};
use crate::error::Result;

// 0..2     response delay, ms
// 2..4     timestamp, echoed back by the server
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timestamp {
    pub resp_delay: u16,
    pub timestamp: u16,
}

impl Timestamp {
    pub fn new(resp_delay: u16, timestamp: u16) -> Self {
        Self {
            resp_delay,
            timestamp,
        }
    }

    pub(crate) fn pack(&self, w: &mut Writer) -> Result<()> {
        w.ensure(ATTR_HEADER_LEN + TIMESTAMP_VALUE_LEN as usize)?;

        w.put_u16(ATTR_TIMESTAMP)?;
        w.put_u16(TIMESTAMP_VALUE_LEN)?;
        w.put_u16(self.resp_delay)?;
        w.put_u16(self.timestamp)
    }

    pub(crate) fn unpack(r: &mut Reader) -> Result<Self> {
        let resp_delay = r.read_u16()?;
        let timestamp = r.read_u16()?;
        Ok(Self {
            resp_delay,
            timestamp,
        })
    }
}
