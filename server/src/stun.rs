use bytes::Bytes;
use log::{debug, error};
use std::net::SocketAddr;
use std::time::Instant;
use tokio::net::UdpSocket;

use stun_lite::header::MessageClass;
use stun_lite::responder::build_response;
use stun_lite::util::print_bytes;
use stun_lite::{Error, Message};

pub fn parse_request(buf: Bytes) -> Result<Message, Error> {
    Message::unpack(buf)
}

fn split_v4(addr: SocketAddr) -> Result<(String, u16), Error> {
    match addr {
        SocketAddr::V4(v) => Ok((v.ip().to_string(), v.port())),
        SocketAddr::V6(_) => Err(Error::Format(format!("ipv6 not support: {}", addr))),
    }
}

// decode, answer binding requests, ignore everything else
pub fn handle_datagram(
    buf: Bytes,
    remote_addr: SocketAddr,
    local_addr: SocketAddr,
    received_at: Instant,
) -> Result<Option<Bytes>, Error> {
    let request = parse_request(buf)?;

    if request.class() != MessageClass::BindingRequest {
        debug!("ignore {} from {}", request.class().name(), remote_addr);
        return Ok(None);
    }

    let (peer_ip, peer_port) = split_v4(remote_addr)?;
    let (local_ip, local_port) = split_v4(local_addr)?;

    let response = build_response(
        &request,
        &peer_ip,
        peer_port,
        &local_ip,
        local_port,
        received_at,
    )?;

    response.pack().map(Some)
}

pub async fn send_response(
    socket: &UdpSocket,
    data: &[u8],
    src_addr: SocketAddr,
    dst_addr: SocketAddr,
) {
    match socket.send_to(data, dst_addr).await {
        Ok(v) => {
            debug!(
                "{} ---> {}\n{}",
                src_addr,
                dst_addr,
                print_bytes(data, " ", 8)
            );
            debug!("sent: {}", v);
        }
        Err(e) => {
            error!("error, {} ---> {}, {:?}", src_addr, dst_addr, e);
        }
    };
}
