//! Downstream dispatcher: converts scheduler title commands into OP-47 packets and transmits
//! them to the video-mixer server as `APPLY` command lines.

mod command;
mod connection;

use scheduler::TitleSink;
use teletext::{PACKET_SIZE, PageConfig, PageEncoder};
use tokio::sync::mpsc;
use tracing::warn;

/// Implements [`TitleSink`] by encoding rows into an OP-47 page and enqueuing the resulting
/// `APPLY` command line onto a single-slot channel drained by a background connection task.
///
/// The channel holds at most one pending line: if the connection task is mid-write or
/// reconnecting, newer writes are dropped rather than queued, matching the scheduler's
/// latest-state-wins tick model.
pub struct Dispatcher {
    tx: mpsc::Sender<Vec<u8>>,
    encoder: PageEncoder,
    channel_layer: u32,
}

impl Dispatcher {
    /// Spawns the background connection task and returns a `Dispatcher` bound to it.
    pub fn spawn(addr: String, channel_layer: u32, page_config: PageConfig) -> Self {
        let (tx, rx) = mpsc::channel(1);
        tokio::spawn(connection::run(addr, rx));
        Self { tx, encoder: PageEncoder::new(page_config), channel_layer }
    }

    fn dispatch_rows(&self, rows: &[String]) {
        let page_bytes = self.encoder.encode_subtitle(rows);
        let packets: Vec<Vec<u8>> = page_bytes.chunks(PACKET_SIZE).map(<[u8]>::to_vec).collect();
        let line = command::apply_command(self.channel_layer, &packets).into_bytes();

        if self.tx.try_send(line).is_err() {
            warn!("dropped a downstream write: connection busy or reconnecting");
        }
    }
}

impl TitleSink for Dispatcher {
    fn send_title(&self, lines: &[String]) {
        self.dispatch_rows(lines);
    }

    fn clear_title(&self) {
        self.dispatch_rows(&[]);
    }
}
