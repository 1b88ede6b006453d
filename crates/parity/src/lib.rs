//! Parity codecs for ETS 300 706 teletext: Hamming 8/4, Hamming 24/18, and odd-parity byte
//! application.
//!
//! This crate is the lowest layer of the OP-47 VANC encoding pipeline: every other crate in the
//! workspace (`x26`, `teletext`) encodes control and text bytes through the functions here. It
//! has no dependency on anything above it and performs no I/O.
//!
//! Decoding is provided alongside encoding so the codec can verify its own round-trip and
//! single-bit-error-correction properties in tests; this crate never decodes a broadcast
//! teletext stream back to text (that is explicitly out of scope for the wider system).

#![deny(unsafe_code)]

pub mod hamming8;
pub mod hamming24;
pub mod odd_parity;

pub use hamming8::{Hamming8Error, decode as decode_hamming8, encode_nibble as encode_hamming8};
pub use hamming24::{Hamming24Error, decode as decode_hamming24, encode as encode_hamming24};
pub use odd_parity::apply as odd_parity;
