// File: src/core/lexicon.rs
//! Fixed word and number tables of the Réunion creole analyzer.

/// Common creole words (uppercase) and their French gloss.
const KNOWN_WORDS: [(&str, &str); 12] = [
    ("BONZOUR", "Bonjour"),
    ("SAVA", "Ça va"),
    ("MÉRSI", "Merci"),
    ("WALÉ", "Regarde"),
    ("LAKAZ", "Maison"),
    ("ZANFAN", "Enfant"),
    ("GRAMOUN", "Vieillard"),
    ("KARÉ", "Carré"),
    ("ZOURÉ", "Travailler"),
    ("VIV", "Vivre"),
    ("MANZ", "Manger"),
    ("DORMI", "Dormir"),
];

/// Meaning of a few numbers in creole culture.
const NUMBER_MEANINGS: [(u64, &str); 12] = [
    (1, "Kommenman, inité"),
    (2, "Koupl, dualité"),
    (3, "Famni, Trinité"),
    (4, "Karé, stabilité"),
    (5, "Senk - senk sans (les cinq sens)"),
    (6, "Sièz - labitid"),
    (7, "Sèt - bonèr"),
    (8, "Wit - infinité"),
    (9, "Nèf - akonplisman"),
    (10, "Dis - totalité"),
    (15, "Kenz - importan dan kiltir kréol"),
    (26, "Vensisé - nonb lèt alfabè"),
];

const DEFAULT_MEANING: &str = "Nonb jénéral";

/// Gloss of a known word. The whole word is matched after uppercasing.
pub fn gloss(word: &str) -> Option<&'static str> {
    let upper = word.to_uppercase();
    KNOWN_WORDS
        .iter()
        .find(|(known, _)| *known == upper)
        .map(|&(_, gloss)| gloss)
}

/// Cultural meaning of `n`, or the general-number phrase.
pub fn number_meaning(n: u64) -> &'static str {
    NUMBER_MEANINGS
        .iter()
        .find(|&&(value, _)| value == n)
        .map_or(DEFAULT_MEANING, |&(_, meaning)| meaning)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(gloss("bonzour"), Some("Bonjour"));
        assert_eq!(gloss("Karé"), Some("Carré"));
        assert_eq!(gloss("kare"), None);
        assert_eq!(gloss("bonzour la"), None);
    }

    #[test]
    fn meanings_fall_back_to_default() {
        assert_eq!(number_meaning(26), "Vensisé - nonb lèt alfabè");
        assert_eq!(number_meaning(15), "Kenz - importan dan kiltir kréol");
        assert_eq!(number_meaning(0), DEFAULT_MEANING);
        assert_eq!(number_meaning(111), DEFAULT_MEANING);
    }
}
