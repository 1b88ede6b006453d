//! ETS 300 706 packet type 26 (X/26) enhancement triplet encoder.
//!
//! An [`X26Encoder`] is owned for the scope of a single page build: each call to
//! [`X26Encoder::encode_row`] substitutes composable Czech diacritics in a display row and
//! accumulates the enhancement triplets needed to restore them, and
//! [`X26Encoder::enhancement_packets`] materializes the accumulated triplets into the X/26 packet
//! payloads (one per group of 13 triplets, Hamming-encoded) once all rows have been processed.

#![deny(unsafe_code)]

mod composition;
mod packet;
mod row;
mod triplet;

pub use composition::{CaronEncoding, CompositionEntry, CompositionTable, DIACRITIC_ACUTE, DIACRITIC_RING, G2Variant, X26Config};
pub use triplet::{EnhancementTriplet, TRIPLETS_PER_PACKET, row_address};

/// Owns a [`CompositionTable`] and the enhancement triplets accumulated while encoding a page's
/// display rows.
#[derive(Debug)]
pub struct X26Encoder {
    table: CompositionTable,
    triplets: Vec<EnhancementTriplet>,
}

impl X26Encoder {
    /// Builds a new encoder, constructing the Czech composition table from `config`.
    pub fn new(config: &X26Config) -> Self {
        Self { table: CompositionTable::build(config), triplets: Vec::new() }
    }

    /// Encodes one display row, returning the row with diacritics substituted and recording the
    /// enhancement triplets needed to restore them.
    pub fn encode_row(&mut self, row_location: u8, text: &str) -> String {
        let (out, mut triplets) = row::encode_row(&self.table, row_location, text);
        self.triplets.append(&mut triplets);
        out
    }

    /// Materializes the accumulated triplets into X/26 packet payloads (40 bytes each, excluding
    /// the common packet prefix).
    pub fn enhancement_packets(&self) -> Vec<Vec<u8>> {
        packet::build_packets(&self.triplets)
    }

    /// True if any row encoded so far produced at least one enhancement triplet.
    pub fn has_enhancements(&self) -> bool {
        !self.triplets.is_empty()
    }
}
