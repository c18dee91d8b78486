// ./stun-lite-server --ip 0.0.0.0 --port 3478

use log::{error, info};
use std::net::{IpAddr, SocketAddr};

use clap::builder::ValueParser;
use clap::{Arg, Command};
use tokio::sync::watch;

use server::server::Server;
use server::signal::shutdown_on_signal;
use stun_lite::constants::DEFAULT_PORT;

const APP_NAME: &str = env!("CARGO_PKG_NAME");
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

fn parse_ip(s: &str) -> Result<IpAddr, String> {
    let ip = match s.parse::<IpAddr>() {
        Ok(v) => v,
        Err(e) => {
            return Err(format!("{}", e));
        }
    };
    // the address attributes only carry ipv4
    if ip.is_ipv6() {
        return Err("ipv6 not support".to_string());
    }

    Ok(ip)
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let default_port = DEFAULT_PORT.to_string();
    let app = Command::new(APP_NAME)
        .version(APP_VERSION)
        .about("a small binding-request responder")
        .arg(
            Arg::new("ip")
                .long("ip")
                .takes_value(true)
                .default_value("0.0.0.0")
                .help("bind ip")
                .value_parser(ValueParser::new(parse_ip)),
        )
        .arg(
            Arg::new("port")
                .long("port")
                .takes_value(true)
                .default_value(&default_port)
                .help("bind port")
                .value_parser(clap::value_parser!(u16)),
        )
        .get_matches();

    let ip: IpAddr = match app.get_one::<IpAddr>("ip") {
        Some(v) => *v,
        None => {
            error!("missing ip");
            return;
        }
    };
    let port: u16 = match app.get_one::<u16>("port") {
        Some(v) => *v,
        None => {
            error!("missing port");
            return;
        }
    };

    let (signal_tx, signal_rx) = watch::channel(0_u8);

    let _signal_handle = tokio::spawn(shutdown_on_signal(signal_tx));

    let server = match Server::new(SocketAddr::new(ip, port), signal_rx).await {
        Ok(v) => v,
        Err(e) => {
            error!("error, bind {}:{}, {:?}", ip, port, e);
            return;
        }
    };

    info!("start server on {} ...", server.local_addr());

    let server_handle = tokio::spawn(async move {
        server.run().await;
    });

    let _ = server_handle.await;

    info!("end.");
}
