//! Common 5-byte teletext packet prefix: clock run-in/framing code plus the Hamming-encoded
//! magazine/packet-number address bytes.

use parity::encode_hamming8;

/// Builds the 5-byte prefix shared by every teletext packet: `0x55 0x55 0x27` followed by two
/// Hamming 8/4-encoded address nibbles.
///
/// `magazine` is the 3-bit magazine number as configured (`0..=7`; by broadcast convention
/// magazine 0 is displayed to viewers as magazine 8, but the wire value is unchanged). `packet`
/// is the 5-bit packet number within the magazine (0 for the header, 1..=24 for display rows,
/// 26 for X/26 enhancement packets).
pub fn build(magazine: u8, packet: u8) -> [u8; 5] {
    debug_assert!(magazine <= 7);
    debug_assert!(packet <= 31);

    let nibble1 = (magazine & 0x07) | ((packet & 0x01) << 3);
    let nibble2 = (packet >> 1) & 0x0F;

    [0x55, 0x55, 0x27, encode_hamming8(nibble1), encode_hamming8(nibble2)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_clock_run_in_and_framing_code() {
        let prefix = build(0, 0);
        assert_eq!(&prefix[0..3], &[0x55, 0x55, 0x27]);
    }

    #[test]
    fn is_five_bytes() {
        assert_eq!(build(3, 26).len(), 5);
    }
}
