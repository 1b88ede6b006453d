//! Czech G0/G2 diacritic composition table.

use std::collections::HashMap;

/// How caron-accented letters (č ď ě ň ř š ť ž and their capitals) are encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaronEncoding {
    /// Emit the base letter plus a composed X/26 diacritic triplet (decoder-independent).
    #[default]
    Compose,
    /// Emit a precomposed G2 character code instead (decoder-specific; see [`G2Variant`]).
    G2,
}

/// Which precomposed G2 code-set a decoder expects for caron letters, when
/// [`CaronEncoding::G2`] is selected. The "correct" variant is decoder-dependent and cannot be
/// determined from the source material; all four are exposed so deployments can pick empirically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum G2Variant {
    #[default]
    Default,
    Alt1,
    Alt2,
    Iso88592,
}

/// Diacritic index for the acute accent (á é í ó ú ý and capitals).
pub const DIACRITIC_ACUTE: u8 = 2;
/// Diacritic index for the ring (ů Ů).
pub const DIACRITIC_RING: u8 = 10;

/// Configuration for the Czech composition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct X26Config {
    pub caron_encoding: CaronEncoding,
    /// Diacritic index used for composed caron letters, `1..=15`. Default 15.
    pub caron_diacritic_index: u8,
    pub g2_variant: G2Variant,
}

impl Default for X26Config {
    fn default() -> Self {
        Self {
            caron_encoding: CaronEncoding::default(),
            caron_diacritic_index: 15,
            g2_variant: G2Variant::default(),
        }
    }
}

/// How a single composable character is represented on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositionEntry {
    /// Base G0 letter, emitted alongside a diacritic enhancement triplet.
    Composed { base: u8, diacritic_index: u8 },
    /// A precomposed G2 character; the row cell itself becomes a space.
    Precomposed { code: u8 },
}

/// Canonical caron letter order used by every G2 code-set table: č ď ě ň ř š ť ž.
const CARON_LOWER: [char; 8] = ['č', 'ď', 'ě', 'ň', 'ř', 'š', 'ť', 'ž'];
const CARON_UPPER: [char; 8] = ['Č', 'Ď', 'Ě', 'Ň', 'Ř', 'Š', 'Ť', 'Ž'];
const CARON_BASE_LOWER: [u8; 8] = [b'c', b'd', b'e', b'n', b'r', b's', b't', b'z'];
const CARON_BASE_UPPER: [u8; 8] = [b'C', b'D', b'E', b'N', b'R', b'S', b'T', b'Z'];

fn g2_bytes(variant: G2Variant) -> ([u8; 8], [u8; 8]) {
    match variant {
        G2Variant::Default => (
            [0x62, 0x64, 0x65, 0x6E, 0x72, 0x73, 0x74, 0x7A],
            [0x42, 0x44, 0x45, 0x4E, 0x52, 0x53, 0x54, 0x5A],
        ),
        G2Variant::Alt1 => (
            [0x63, 0x64, 0x65, 0x6E, 0x72, 0x73, 0x74, 0x79],
            [0x43, 0x44, 0x45, 0x4E, 0x52, 0x53, 0x54, 0x59],
        ),
        G2Variant::Alt2 => (
            [0x68, 0x6A, 0x6B, 0x70, 0x78, 0x79, 0x7A, 0x7E],
            [0x48, 0x4A, 0x4B, 0x50, 0x58, 0x59, 0x5A, 0x5E],
        ),
        G2Variant::Iso88592 => (
            [0x68, 0x6F, 0x6C, 0x72, 0x78, 0x39, 0x3B, 0x2E],
            [0x48, 0x4F, 0x4C, 0x52, 0x58, 0x28, 0x2B, 0x2C],
        ),
    }
}

/// An immutable lookup table from Czech letters to their wire representation, built once from an
/// [`X26Config`] at encoder construction time.
#[derive(Debug, Clone)]
pub struct CompositionTable {
    entries: HashMap<char, CompositionEntry>,
}

impl CompositionTable {
    /// Builds the table per the configured caron strategy. Acute and ring letters are always
    /// composed, regardless of configuration.
    pub fn build(config: &X26Config) -> Self {
        debug_assert!(
            (1..=15).contains(&config.caron_diacritic_index),
            "caron_diacritic_index must be in 1..=15, got {}",
            config.caron_diacritic_index
        );
        let mut entries = HashMap::new();

        for (&ch, &base) in [('á', b'a'), ('é', b'e'), ('í', b'i'), ('ó', b'o'), ('ú', b'u'), ('ý', b'y')]
            .iter()
            .chain([('Á', b'A'), ('É', b'E'), ('Í', b'I'), ('Ó', b'O'), ('Ú', b'U'), ('Ý', b'Y')].iter())
        {
            entries.insert(ch, CompositionEntry::Composed { base, diacritic_index: DIACRITIC_ACUTE });
        }

        entries.insert('ů', CompositionEntry::Composed { base: b'u', diacritic_index: DIACRITIC_RING });
        entries.insert('Ů', CompositionEntry::Composed { base: b'U', diacritic_index: DIACRITIC_RING });

        match config.caron_encoding {
            CaronEncoding::Compose => {
                for (i, &ch) in CARON_LOWER.iter().enumerate() {
                    entries.insert(
                        ch,
                        CompositionEntry::Composed {
                            base: CARON_BASE_LOWER[i],
                            diacritic_index: config.caron_diacritic_index,
                        },
                    );
                }
                for (i, &ch) in CARON_UPPER.iter().enumerate() {
                    entries.insert(
                        ch,
                        CompositionEntry::Composed {
                            base: CARON_BASE_UPPER[i],
                            diacritic_index: config.caron_diacritic_index,
                        },
                    );
                }
            }
            CaronEncoding::G2 => {
                let (lower, upper) = g2_bytes(config.g2_variant);
                for (i, &ch) in CARON_LOWER.iter().enumerate() {
                    entries.insert(ch, CompositionEntry::Precomposed { code: lower[i] });
                }
                for (i, &ch) in CARON_UPPER.iter().enumerate() {
                    entries.insert(ch, CompositionEntry::Precomposed { code: upper[i] });
                }
            }
        }

        Self { entries }
    }

    /// Looks up the wire representation for `ch`, if it is a composable Czech letter.
    pub fn get(&self, ch: char) -> Option<CompositionEntry> {
        self.entries.get(&ch).copied()
    }
}
