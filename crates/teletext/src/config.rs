//! WST page encoder configuration.

use x26::X26Config;

/// How non-ASCII diacritics in display rows are represented on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiacriticsMode {
    /// Fold accented letters to their base ASCII letter; no X/26 enhancements are emitted.
    Latin2,
    /// Substitute base letters/spaces and restore the accent via X/26 enhancement triplets.
    #[default]
    X26,
}

/// Configuration for a [`crate::PageEncoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageConfig {
    /// Magazine number, `0..=7` (magazine 0 is displayed to viewers as magazine 8).
    pub magazine: u8,
    /// Page number, BCD-nibble split into tens/units.
    pub page: u8,
    /// First display row a subtitle page's rows are placed at. Default 19.
    pub start_row: u8,
    pub diacritics_mode: DiacriticsMode,
    pub x26: X26Config,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            magazine: 0,
            page: 0x01,
            start_row: 19,
            diacritics_mode: DiacriticsMode::default(),
            x26: X26Config::default(),
        }
    }
}
