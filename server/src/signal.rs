use log::{error, info};
use tokio::sync::watch::Sender;

#[cfg(windows)]
async fn wait_signal() -> &'static str {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("error, ctrl_c, {:?}", e);
    }
    "ctrl_c"
}

#[cfg(unix)]
async fn wait_signal() -> &'static str {
    use tokio::signal::unix::{signal, SignalKind};

    let mut terminate = match signal(SignalKind::terminate()) {
        Ok(v) => v,
        Err(e) => {
            error!("error, signal, {:?}", e);
            let _ = tokio::signal::ctrl_c().await;
            return "ctrl_c";
        }
    };

    tokio::select! {
        _ = terminate.recv() => "terminate",
        _ = tokio::signal::ctrl_c() => "ctrl_c",
    }
}

/// Blocks until ctrl-c (or SIGTERM on unix), then tells every task
/// watching `tx` to stop.
pub async fn shutdown_on_signal(tx: Sender<u8>) {
    let name = wait_signal().await;
    info!("recv {} signal, shutting down", name);

    if let Err(e) = tx.send(1) {
        error!("error, notify shutdown, {:?}", e);
    }
}
