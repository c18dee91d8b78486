/*
one udp socket
receive task: read datagram, stamp the receive time, hand it to the queue
process task: decode, build response, send it back from the same socket
a watch channel stops both
*/

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tokio::net::UdpSocket;
use tokio::sync::mpsc::{self, Receiver, Sender};
use tokio::sync::watch::Receiver as WatchReceiver;

use bytes::Bytes;
use log::{debug, error, info};
use stun_lite::util::print_bytes;

use crate::stun::{handle_datagram, send_response};

// remote addr, recv data, recv time
type SocketInput = (SocketAddr, Bytes, Instant);

pub struct Server {
    local_addr: SocketAddr,
    signal_rx: WatchReceiver<u8>,
    queue_tx: Arc<Sender<SocketInput>>,
    queue_rx: Receiver<SocketInput>,
    socket: Arc<UdpSocket>,
}

impl Server {
    pub async fn new(bind_addr: SocketAddr, signal_rx: WatchReceiver<u8>) -> io::Result<Self> {
        let (queue_tx, queue_rx) = mpsc::channel::<SocketInput>(100);

        let socket = UdpSocket::bind(bind_addr).await?;
        let local_addr = socket.local_addr()?;
        info!("listening: {}", local_addr);

        let server = Self {
            local_addr,
            signal_rx,
            queue_tx: Arc::new(queue_tx),
            queue_rx,
            socket: Arc::new(socket),
        };
        Ok(server)
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub async fn run(self) {
        let mut handles = vec![];

        let socket = self.socket.clone();
        let local_addr = self.local_addr;
        let sender = self.queue_tx.clone();
        let signal_rx = self.signal_rx.clone();

        let h = tokio::spawn(async move {
            recv_udp(socket, local_addr, sender, signal_rx).await;
        });
        handles.push(h);

        let h = tokio::spawn(async move {
            process_udp(self.queue_rx, self.signal_rx, self.local_addr, self.socket).await;
        });
        handles.push(h);

        for v in handles {
            let _ = v.await;
        }
    }
}

//--------------------------------------------------

async fn recv_udp(
    socket: Arc<UdpSocket>,
    local_addr: SocketAddr,
    sender: Arc<Sender<SocketInput>>,
    mut signal_rx: WatchReceiver<u8>,
) {
    let mut buf = vec![0u8; 32 * 1024];

    loop {
        tokio::select! {
            Ok((len,remote_addr)) = socket.recv_from(&mut buf) => {
                let received_at = Instant::now();
                let data = Bytes::copy_from_slice(&buf[..len]);

                debug!("recv len: {}", data.len());
                debug!("{} <--- {}\n{}",local_addr,remote_addr,print_bytes(&data," ",8));

                match sender.send((remote_addr,data,received_at)).await {
                    Ok(_) => {}
                    Err(e) => {
                        error!("error, recv_udp, {}, {:?}",local_addr,e);
                    }
                };
            },
             _ = signal_rx.changed() => {
                debug!("recv signal, recv_udp, {} will exit.", local_addr);
                break;
            }
        }
    }
}

async fn process_udp(
    mut receiver: Receiver<SocketInput>,
    mut signal_rx: WatchReceiver<u8>,
    local_addr: SocketAddr,
    socket: Arc<UdpSocket>,
) {
    loop {
        tokio::select! {
            Some(input) = receiver.recv() => {
               process_one(input, local_addr, &socket).await;
            },
             _ = signal_rx.changed() => {
                debug!("recv signal, process_udp, will exit.");
                break;
            }
        }
    }
}

async fn process_one(input: SocketInput, local_addr: SocketAddr, socket: &UdpSocket) {
    let (remote_addr, buf, received_at) = input;

    match handle_datagram(buf, remote_addr, local_addr, received_at) {
        Ok(Some(response)) => {
            send_response(socket, &response, local_addr, remote_addr).await;
        }
        Ok(None) => {}
        Err(e) => {
            error!(
                "drop datagram, from remote:{}, local:{}, {}",
                remote_addr, local_addr, e
            );
        }
    }
}
