//! Binding response construction.
//!
//! Pure: builds the reply [`Message`] and nothing else. Sending it is up to
//! the caller.

use crate::attrs::address_attr::AddressAttr;
use crate::attrs::timestamp::Timestamp;
use crate::attrs::xor_address::XorMappedAddress;
use crate::attrs::{AttrType, AttrValue};
use crate::error::{Error, Result};
use crate::header::MessageClass;
use crate::message::Message;
use std::time::Instant;

/// First 4 bytes of the transaction id field, big-endian.
pub fn xor_key(req: &Message) -> Result<u32> {
    let trans_id = match req.trans_id() {
        Some(v) if v.len() >= 4 => v,
        _ => {
            return Err(Error::MalformedMessage(
                "no transaction id to derive xor key from".to_string(),
            ));
        }
    };

    Ok(u32::from_be_bytes([
        trans_id[0],
        trans_id[1],
        trans_id[2],
        trans_id[3],
    ]))
}

/// Reply to a binding request seen from `peer_addr:peer_port` on the
/// endpoint bound to `local_addr:local_port`.
///
/// A timestamp is echoed only when the request carried a non-zero one; its
/// delay field is the milliseconds since `received_at`, truncated to 16 bits.
pub fn build_response(
    req: &Message,
    peer_addr: &str,
    peer_port: u16,
    local_addr: &str,
    local_port: u16,
    received_at: Instant,
) -> Result<Message> {
    let key = xor_key(req)?;

    let mut res = Message::new();
    res.set_class(MessageClass::BindingResponse);
    if let Some(trans_id) = req.trans_id() {
        res.set_trans_id(trans_id.clone());
    }

    let mapped = AddressAttr::new(peer_addr, peer_port);
    let xor_mapped = XorMappedAddress::mask(&mapped, key)?;
    res.add_attr(AttrType::MappedAddress, mapped.into())?;
    res.add_attr(AttrType::XorMappedAddress, xor_mapped.into())?;

    if let Some(AttrValue::Timestamp(ts)) = req.get_attr(AttrType::Timestamp) {
        if ts.timestamp != 0 {
            let delay = (received_at.elapsed().as_millis() & 0xffff) as u16;
            res.add_attr(
                AttrType::Timestamp,
                Timestamp::new(delay, ts.timestamp).into(),
            )?;
        }
    }

    res.add_attr(
        AttrType::SourceAddress,
        AddressAttr::new(local_addr, local_port).into(),
    )?;

    Ok(res)
}
