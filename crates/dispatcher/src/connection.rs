//! Persistent, auto-reconnecting TCP writer task.

use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio::time;
use tracing::{info, warn};

const RECONNECT_DELAY: Duration = Duration::from_secs(2);

/// Owns the downstream TCP connection. Reconnects with a fixed 2-second delay on any connect or
/// write failure; exits once `rx`'s sender is dropped.
pub async fn run(addr: String, mut rx: mpsc::Receiver<Vec<u8>>) {
    loop {
        let mut stream = match TcpStream::connect(&addr).await {
            Ok(stream) => stream,
            Err(error) => {
                warn!(%addr, %error, "downstream connect failed, retrying");
                time::sleep(RECONNECT_DELAY).await;
                continue;
            }
        };
        info!(%addr, "downstream connected");

        loop {
            let Some(line) = rx.recv().await else {
                return;
            };
            if let Err(error) = stream.write_all(&line).await {
                warn!(%error, "downstream write failed, reconnecting");
                break;
            }
        }

        time::sleep(RECONNECT_DELAY).await;
    }
}
