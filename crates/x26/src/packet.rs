//! X/26 packet assembly: chunks accumulated triplets into groups of 13 and encodes each group's
//! designation byte and triplets via the Hamming parity codecs.

use crate::triplet::{EnhancementTriplet, TRIPLETS_PER_PACKET};
use parity::{encode_hamming8, encode_hamming24};

/// Builds the X/26 packet payloads (one per group of up to 13 triplets) for `triplets`.
///
/// Each returned payload is exactly `1 + 13 * 3 = 40` bytes: a Hamming 8/4-encoded designation
/// code byte, followed by 13 Hamming 24/18-encoded triplets (filler triplets pad the final group
/// to exactly [`TRIPLETS_PER_PACKET`]).
pub fn build_packets(triplets: &[EnhancementTriplet]) -> Vec<Vec<u8>> {
    if triplets.is_empty() {
        return Vec::new();
    }

    triplets
        .chunks(TRIPLETS_PER_PACKET)
        .enumerate()
        .map(|(designation, group)| build_one_packet(designation as u8, group))
        .collect()
}

fn build_one_packet(designation: u8, group: &[EnhancementTriplet]) -> Vec<u8> {
    let mut payload = Vec::with_capacity(1 + TRIPLETS_PER_PACKET * 3);
    payload.push(encode_hamming8(designation & 0x0F));

    let filler_count = TRIPLETS_PER_PACKET - group.len();
    for triplet in group {
        payload.extend_from_slice(&encode_hamming24(triplet.pack()));
    }
    for i in 0..filler_count {
        let is_last = i == filler_count - 1;
        payload.extend_from_slice(&encode_hamming24(EnhancementTriplet::filler(is_last).pack()));
    }

    debug_assert_eq!(payload.len(), 1 + TRIPLETS_PER_PACKET * 3);
    payload
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triplet::MODE_TERMINATION_MARKER;
    use parity::decode_hamming24;

    fn triplet_at(payload: &[u8], index: usize) -> u32 {
        let start = 1 + index * 3;
        decode_hamming24([payload[start], payload[start + 1], payload[start + 2]]).unwrap()
    }

    #[test]
    fn empty_input_produces_no_packets() {
        assert!(build_packets(&[]).is_empty());
    }

    #[test]
    fn every_packet_has_exactly_thirteen_triplets_worth_of_bytes() {
        let triplets = vec![EnhancementTriplet::set_active_position(41); 5];
        let packets = build_packets(&triplets);
        assert_eq!(packets.len(), 1);
        assert_eq!(packets[0].len(), 1 + TRIPLETS_PER_PACKET * 3);
    }

    #[test]
    fn last_filler_carries_0xff_others_carry_0x00() {
        let triplets = vec![EnhancementTriplet::set_active_position(41); 2];
        let packets = build_packets(&triplets);
        let payload = &packets[0];

        for i in 2..(TRIPLETS_PER_PACKET - 1) {
            let word = triplet_at(payload, i);
            let data = (word >> 11) & 0x7F;
            let mode = (word >> 6) & 0x1F;
            assert_eq!(mode, MODE_TERMINATION_MARKER as u32);
            assert_eq!(data, 0x00, "filler {i} should carry 0x00");
        }
        let last = triplet_at(payload, TRIPLETS_PER_PACKET - 1);
        assert_eq!((last >> 11) & 0x7F, 0xFF);
    }

    #[test]
    fn splits_into_multiple_packets_past_thirteen_triplets() {
        let triplets = vec![EnhancementTriplet::set_active_position(41); 20];
        let packets = build_packets(&triplets);
        assert_eq!(packets.len(), 2);
        assert_eq!(packets[1].len(), 1 + TRIPLETS_PER_PACKET * 3);
    }
}
