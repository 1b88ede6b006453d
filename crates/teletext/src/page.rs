//! Page assembly: header, display rows, and (in `x26` mode) enhancement packets.

use crate::config::{DiacriticsMode, PageConfig};
use crate::{header, row};
use x26::X26Encoder;

/// Builds complete OP-47 page packet streams from a [`PageConfig`].
///
/// A single `PageEncoder` is constructed per page build (mirroring the one-X26-encoder-per-build
/// ownership of [`X26Encoder`]) and consumed by [`PageEncoder::encode_subtitle`] or
/// [`PageEncoder::encode_dummy`].
#[derive(Debug, Clone)]
pub struct PageEncoder {
    config: PageConfig,
}

impl PageEncoder {
    pub fn new(config: PageConfig) -> Self {
        Self { config }
    }

    /// Encodes a subtitle page: header (erase set), then for `x26` mode the enhancement packets
    /// (emitted before the display rows so a decoder has diacritic data at row-paint time), then
    /// one display-row packet per entry in `rows`, starting at `start_row`.
    ///
    /// Returns the concatenated packet bytes for the whole page; each packet is 45 bytes.
    pub fn encode_subtitle(&self, rows: &[String]) -> Vec<u8> {
        let mut out = header::build(self.config.magazine, self.config.page, 0, true);

        match self.config.diacritics_mode {
            DiacriticsMode::X26 => {
                let mut encoder = X26Encoder::new(&self.config.x26);
                let framed: Vec<String> = rows
                    .iter()
                    .enumerate()
                    .map(|(i, text)| {
                        let row_location = self.config.start_row + i as u8;
                        let framed = row::frame(text);
                        encoder.encode_row(row_location, &framed)
                    })
                    .collect();

                for packet in encoder.enhancement_packets() {
                    out.extend_from_slice(&crate::prefix::build(self.config.magazine, 26));
                    out.extend_from_slice(&packet);
                }

                for (i, substituted) in framed.iter().enumerate() {
                    let row_location = self.config.start_row + i as u8;
                    out.extend_from_slice(&row::encode_packet(self.config.magazine, row_location, substituted));
                }
            }
            DiacriticsMode::Latin2 => {
                for (i, text) in rows.iter().enumerate() {
                    let row_location = self.config.start_row + i as u8;
                    let framed = row::frame(text);
                    let folded = row::fold_latin2(&framed);
                    out.extend_from_slice(&row::encode_packet(self.config.magazine, row_location, &folded));
                }
            }
        }

        out
    }

    /// Encodes the fixed dummy/placeholder page (header only, 45 bytes).
    pub fn encode_dummy(&self) -> Vec<u8> {
        header::build_dummy(self.config.magazine)
    }
}
