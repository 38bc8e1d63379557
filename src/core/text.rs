// File: src/core/text.rs
use crate::core::alphabet::letter_value;
use crate::core::lexicon;
use crate::core::types::Lexeme;
use std::collections::BTreeSet;

const VOWELS: &str = "AEÉÈÊËÀÂIÎÏOÔÖUÛÜY";
const CONSONANTS: &str = "BCÇDFGHJKLMNÑPQRSTVWXZ";

/// Case- and space-insensitive palindrome check over the letters of `word`.
pub fn is_palindrome(word: &str) -> bool {
    let letters: Vec<char> = word
        .to_uppercase()
        .chars()
        .filter(|&c| c != ' ')
        .filter(|&c| letter_value(c).is_some() || c.is_alphabetic())
        .collect();
    letters.iter().eq(letters.iter().rev())
}

pub fn count_vowels(word: &str) -> usize {
    count_in(word, VOWELS)
}

pub fn count_consonants(word: &str) -> usize {
    count_in(word, CONSONANTS)
}

fn count_in(word: &str, set: &str) -> usize {
    word.to_uppercase().chars().filter(|&c| set.contains(c)).count()
}

/// Distinct uppercase characters of `word` in code-point order.
pub fn unique_letters(word: &str) -> String {
    word.to_uppercase()
        .chars()
        .collect::<BTreeSet<char>>()
        .into_iter()
        .collect()
}

pub fn lookup(word: &str) -> Lexeme {
    match lexicon::gloss(word) {
        Some(gloss) => Lexeme::Known { gloss: gloss.to_string() },
        None => Lexeme::Possible,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palindromes() {
        assert!(is_palindrome("Kayak"));
        assert!(is_palindrome("ésé"));
        assert!(is_palindrome("a ba"));
        assert!(is_palindrome(""));
        assert!(is_palindrome("Z"));
        assert!(!is_palindrome("karé"));
    }

    #[test]
    fn palindrome_ignores_punctuation() {
        assert!(is_palindrome("ana!"));
        assert!(is_palindrome("a-n-a"));
    }

    #[test]
    fn counts_accented_vowels_and_consonants() {
        assert_eq!(count_vowels("bonzour"), 3);
        assert_eq!(count_consonants("bonzour"), 4);
        assert_eq!(count_vowels("Mérsi"), 2);
        assert_eq!(count_consonants("Ça"), 1);
        assert_eq!(count_consonants("ñ"), 1);
        assert_eq!(count_vowels("y"), 1);
        assert_eq!(count_consonants("12 !"), 0);
    }

    #[test]
    fn unique_letters_are_sorted() {
        assert_eq!(unique_letters("bonzour"), "BNORUZ");
        assert_eq!(unique_letters("sa va"), " ASV");
        assert_eq!(unique_letters(""), "");
    }

    #[test]
    fn lookup_reports_gloss() {
        assert_eq!(
            lookup("Lakaz"),
            Lexeme::Known { gloss: "Maison".to_string() }
        );
        assert_eq!(lookup("lakaze"), Lexeme::Possible);
        assert_eq!(lookup("Lakaz").to_string(), "Mo kréol konn: Maison");
    }
}
