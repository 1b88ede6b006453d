//! Minimal WebVTT cue extraction: timestamps and joined, whitespace-collapsed text.
//!
//! Cue styling, regions, and WebVTT metadata blocks are out of scope; this crate extracts only
//! the slice of WebVTT the segmenter needs.

mod cue;
mod error;
mod parser;

pub use cue::Cue;
pub use error::VttError;
pub use parser::parse_str;

/// Reads `path` and parses it as WebVTT. I/O failures are the only error case; a malformed or
/// empty file is not an error and yields an empty cue list (see [`parse_str`]).
pub fn parse_file(path: impl AsRef<std::path::Path>) -> Result<Vec<Cue>, VttError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(parse_str(&contents))
}
