//! `APPLY` command formatting for the downstream video-mixer protocol.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Builds the CRLF-terminated `APPLY <channelLayer> OP47 <packets...>` command line, base64
/// encoding each packet with the standard alphabet.
pub fn apply_command(channel_layer: u32, packets: &[Vec<u8>]) -> String {
    let encoded: Vec<String> = packets.iter().map(|packet| STANDARD.encode(packet)).collect();
    format!("APPLY {channel_layer} OP47 {}\r\n", encoded.join(" "))
}
