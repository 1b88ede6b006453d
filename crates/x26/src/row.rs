//! Per-row diacritic substitution and enhancement triplet accumulation.

use crate::composition::{CompositionEntry, CompositionTable};
use crate::triplet::{EnhancementTriplet, MODE_DIACRITIC_BASE, MODE_G2_CHARACTER, row_address};

/// Encodes one display row: substitutes composable Czech characters with their base letter (or
/// a space, for precomposed G2 characters) and accumulates the enhancement triplets needed to
/// restore the diacritics at decode time.
///
/// `row_location` is the display row, `1..=24`. `row` is scanned by Unicode scalar value; the
/// column address of each triplet is the character's 0-based position within `row`, so callers
/// that frame the row (e.g. with boxing control codes) must pass the already-framed string for
/// the column addresses to land correctly. Any character that is neither ASCII nor a composable
/// Czech letter folds to `?`, keeping the returned string one byte per input character.
pub fn encode_row(table: &CompositionTable, row_location: u8, row: &str) -> (String, Vec<EnhancementTriplet>) {
    let address = row_address(row_location);
    let mut out = String::with_capacity(row.len());
    let mut triplets = Vec::new();
    let mut active_position_emitted = false;

    for (column, ch) in row.chars().enumerate() {
        match table.get(ch) {
            Some(CompositionEntry::Composed { base, diacritic_index }) => {
                out.push(base as char);
                if !active_position_emitted {
                    triplets.push(EnhancementTriplet::set_active_position(address));
                    active_position_emitted = true;
                }
                let mode = MODE_DIACRITIC_BASE + (diacritic_index - 1);
                triplets.push(EnhancementTriplet::new(mode, column as u8, base));
            }
            Some(CompositionEntry::Precomposed { code }) => {
                out.push(' ');
                if !active_position_emitted {
                    triplets.push(EnhancementTriplet::set_active_position(address));
                    active_position_emitted = true;
                }
                triplets.push(EnhancementTriplet::new(MODE_G2_CHARACTER, column as u8, code));
            }
            None if ch.is_ascii() => out.push(ch),
            None => out.push('?'),
        }
    }

    (out, triplets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composition::X26Config;

    #[test]
    fn plain_ascii_row_is_unchanged_and_produces_no_triplets() {
        let table = CompositionTable::build(&X26Config::default());
        let (row, triplets) = encode_row(&table, 19, "Hello world");
        assert_eq!(row, "Hello world");
        assert!(triplets.is_empty());
    }

    #[test]
    fn single_set_active_position_per_row() {
        let table = CompositionTable::build(&X26Config::default());
        let (row, triplets) = encode_row(&table, 19, "čeří");
        assert_eq!(row, "ceri");
        // One SetActivePosition, then one diacritic triplet per composed letter.
        assert_eq!(triplets.len(), 1 + 4);
        assert_eq!(triplets[0], EnhancementTriplet::set_active_position(row_address(19)));
    }

    #[test]
    fn diacritic_triplet_addresses_match_column_index() {
        let table = CompositionTable::build(&X26Config::default());
        let (_, triplets) = encode_row(&table, 1, "ač");
        // 'a' is plain ASCII (column 0, no entry); 'č' is composed at column 1.
        assert_eq!(triplets.len(), 2);
        assert_eq!(triplets[0].address, row_address(1));
        assert_eq!(triplets[1].address, 1);
    }

    #[test]
    fn characters_outside_ascii_and_czech_fold_to_question_mark() {
        let table = CompositionTable::build(&X26Config::default());
        let (row, _) = encode_row(&table, 19, "日本語");
        assert_eq!(row, "???");
        assert_eq!(row.len(), 3, "output must be one byte per input character");
    }
}
