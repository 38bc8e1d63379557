// File: src/core/converter.rs
use crate::core::alphabet::{letter_for, letter_value};
use crate::core::types::LetterCode;

/// Separator between the numbers of a serialized sequence.
pub const SEPARATOR: &str = ".";

/// Converts creole words to dot-separated number sequences and back.
#[derive(Debug, Default, Clone, Copy)]
pub struct CreoleCodec;

impl CreoleCodec {
    pub fn new() -> Self {
        Self
    }

    /// Encodes a word, e.g. `"bonzour"` -> `"2.15.14.26.15.21.18"`.
    ///
    /// The word is trimmed and uppercased first. Characters without an
    /// alphabet value are skipped.
    pub fn encode(&self, word: &str) -> String {
        self.values(word)
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(SEPARATOR)
    }

    /// Decodes a sequence into unaccented uppercase letters.
    ///
    /// Never fails: tokens that are not plain decimal numbers in `1..=26` are
    /// dropped.
    pub fn decode(&self, sequence: &str) -> String {
        sequence
            .split(SEPARATOR)
            .filter(|token| is_decimal(token))
            .filter_map(|token| token.parse::<u64>().ok())
            .filter_map(letter_for)
            .collect()
    }

    /// Alphabet values of the mapped characters of `word`, in order.
    pub fn values(&self, word: &str) -> Vec<u8> {
        word.trim()
            .to_uppercase()
            .chars()
            .filter_map(letter_value)
            .collect()
    }

    /// Sum of the alphabet values of `word`; unmapped characters count 0.
    pub fn word_value(&self, word: &str) -> u64 {
        self.values(word).iter().map(|&v| v as u64).sum()
    }

    /// Per-character breakdown of the uppercased word.
    ///
    /// Positions are 1-based over every character, so skipped characters
    /// still advance the position.
    pub fn letter_codes(&self, word: &str) -> Vec<LetterCode> {
        word.to_uppercase()
            .chars()
            .enumerate()
            .filter_map(|(i, letter)| {
                letter_value(letter).map(|value| LetterCode {
                    position: i + 1,
                    letter,
                    value,
                })
            })
            .collect()
    }
}

/// True for a non-empty run of ASCII digits.
pub(crate) fn is_decimal(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_known_word() {
        let codec = CreoleCodec::new();
        assert_eq!(codec.encode("BONZOUR"), "2.15.14.26.15.21.18");
        assert_eq!(codec.encode("  bonzour "), "2.15.14.26.15.21.18");
    }

    #[test]
    fn encode_skips_unmapped_characters() {
        let codec = CreoleCodec::new();
        assert_eq!(codec.encode("sa va!"), "19.1.22.1");
        assert_eq!(codec.encode("Жa"), "1");
        assert_eq!(codec.encode("42"), "");
    }

    #[test]
    fn accented_letters_encode_to_base_value() {
        let codec = CreoleCodec::new();
        assert_eq!(codec.encode("karé"), "11.1.18.5");
        assert_eq!(codec.encode("ÇÑ"), "3.14");
    }

    #[test]
    fn encode_joins_with_separator() {
        let codec = CreoleCodec::new();
        let sequence = codec.encode("viv");
        assert_eq!(sequence.split(SEPARATOR).collect::<Vec<_>>(), ["22", "9", "22"]);
        assert_eq!(codec.decode(&sequence), "VIV");
    }

    #[test]
    fn decode_drops_bad_tokens() {
        let codec = CreoleCodec::new();
        assert_eq!(codec.decode("2.15.14.26.15.21.18"), "BONZOUR");
        assert_eq!(codec.decode("0.1.27.x.2..+3.-4. 5"), "AB");
        assert_eq!(codec.decode(""), "");
        assert_eq!(codec.decode("99999999999999999999999.1"), "A");
    }

    #[test]
    fn round_trip_loses_accents_only() {
        let codec = CreoleCodec::new();
        let decoded = codec.decode(&codec.encode("Mérsi"));
        assert_eq!(decoded, "MERSI");
        assert_eq!(codec.word_value("Mérsi"), codec.word_value(&decoded));
    }

    #[test]
    fn letter_codes_keep_positions() {
        let codec = CreoleCodec::new();
        let codes = codec.letter_codes("a-b");
        assert_eq!(codes.len(), 2);
        assert_eq!((codes[0].position, codes[0].letter, codes[0].value), (1, 'A', 1));
        assert_eq!((codes[1].position, codes[1].letter, codes[1].value), (3, 'B', 2));
    }
}
