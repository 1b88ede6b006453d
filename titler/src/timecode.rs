//! UDP-backed external timecode source.

use std::io;
use std::sync::Arc;

use parking_lot::RwLock;
use scheduler::TimeSource;
use tokio::net::UdpSocket;
use tracing::warn;

/// A [`TimeSource`] fed by newline-terminated `<address> <float>` UDP datagrams. The latest
/// accepted reading is stored behind a `parking_lot::RwLock` the scheduler's tick reads from.
#[derive(Clone)]
pub struct UdpTimeSource {
    reading: Arc<RwLock<Option<f64>>>,
}

impl TimeSource for UdpTimeSource {
    fn get_time(&self) -> Option<f64> {
        *self.reading.read()
    }
}

fn parse_datagram(bytes: &[u8], address: &str, strict: bool) -> Option<f64> {
    let text = std::str::from_utf8(bytes).ok()?;
    let mut parts = text.trim().splitn(2, char::is_whitespace);
    let token = parts.next()?;
    let value = parts.next()?;

    let matches = if strict { token == address } else { token.ends_with(address) };
    if !matches {
        return None;
    }

    value.trim().parse().ok()
}

/// Binds `bind_addr` and spawns the background task that reads datagrams and updates the
/// returned [`UdpTimeSource`]'s latest reading.
pub async fn spawn(bind_addr: &str, address: String, strict: bool) -> io::Result<UdpTimeSource> {
    let socket = UdpSocket::bind(bind_addr).await?;
    let reading = Arc::new(RwLock::new(None));
    let source = UdpTimeSource { reading: reading.clone() };

    tokio::spawn(async move {
        let mut buf = [0u8; 512];
        loop {
            match socket.recv_from(&mut buf).await {
                Ok((len, _from)) => {
                    if let Some(value) = parse_datagram(&buf[..len], &address, strict) {
                        *reading.write() = Some(value);
                    }
                }
                Err(error) => warn!(%error, "timecode socket read failed"),
            }
        }
    });

    Ok(source)
}
