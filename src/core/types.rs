// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// One mapped character of a word and its alphabet value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterCode {
    /// 1-based position in the uppercased word.
    pub position: usize,
    pub letter: char,
    pub value: u8,
}

/// Result of the known-word lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Lexeme {
    /// The word is in the dictionary; `gloss` is its French meaning.
    Known { gloss: String },
    /// Not in the dictionary. No validation is attempted.
    Possible,
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lexeme::Known { gloss } => write!(f, "Mo kréol konn: {gloss}"),
            Lexeme::Possible => f.write_str("Mo kréol posib"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parity {
    Even,
    Odd,
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parity::Even => f.write_str("Pèr (Even)"),
            Parity::Odd => f.write_str("Enpèr (Odd)"),
        }
    }
}

/// Primality of the word value. 0 and 1 are reported as composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimeStatus {
    Prime,
    Composite,
}

impl fmt::Display for PrimeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimeStatus::Prime => f.write_str("Prim (Prime)"),
            PrimeStatus::Composite => f.write_str("Konpozé (Composite)"),
        }
    }
}

/// The input word and its textual properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub original: String,
    pub uppercase: String,
    pub lowercase: String,
    /// Length in characters.
    pub length: usize,
    pub is_palindrome: bool,
    pub vowels: usize,
    pub consonants: usize,
    pub unique_letters: String,
    pub lexeme: Lexeme,
    /// Dot-separated encoding of the word.
    pub sequence: String,
    /// Decoding of `sequence`, kept as a check value.
    pub decoded: String,
    pub letters: Vec<LetterCode>,
}

/// A non-negative integer and its derived numeric properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberRecord {
    pub decimal: u64,
    pub hexadecimal: String,
    pub binary: String,
    pub octal: String,
    pub parity: Parity,
    pub factors: Vec<u64>,
    pub prime_status: PrimeStatus,
    pub digit_sum: u32,
    pub digit_count: usize,
    pub square: u128,
    pub cube: u128,
    /// NaN when undefined.
    pub square_root: f64,
    pub md5: String,
    pub sha256: String,
    pub base64: String,
    pub meaning: String,
}

/// Everything computed for one input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub word: WordRecord,
    pub number: NumberRecord,
}

impl AnalysisResult {
    /// Sum of the alphabet values of the word.
    pub fn total_value(&self) -> u64 {
        self.number.decimal
    }
}
