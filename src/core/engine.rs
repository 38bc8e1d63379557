use crate::core::converter::{is_decimal, CreoleCodec, SEPARATOR};
use crate::core::numeric::analyze_number;
use crate::core::text;
use crate::core::types::{AnalysisResult, WordRecord};
use crate::error::Result;
use tracing::debug;

/// How a raw input line is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Analyzed as written.
    Word(String),
    /// A dot-separated number sequence, decoded before analysis.
    Sequence(String),
}

/// Classifies trimmed input.
///
/// Anything with at least one `.` whose pieces are all decimal digits is a
/// sequence, so a literal word like `"1.2"` cannot be analyzed as a word.
pub fn classify(raw: &str) -> Input {
    let input = raw.trim();
    if input.contains(SEPARATOR) && input.split(SEPARATOR).all(is_decimal) {
        Input::Sequence(input.to_string())
    } else {
        Input::Word(input.to_string())
    }
}

/// Outcome of dispatching one input.
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatched {
    /// The sequence the analyzed word was decoded from, if any.
    pub decoded_from: Option<String>,
    pub result: AnalysisResult,
}

/// Runs the codec and both analyzers over a word.
#[derive(Debug, Default)]
pub struct AnalysisEngine {
    pub codec: CreoleCodec,
}

impl AnalysisEngine {
    pub fn new() -> Self {
        Self { codec: CreoleCodec::new() }
    }

    /// Classifies `raw` and analyzes the resulting word.
    pub fn dispatch(&self, raw: &str) -> Result<Dispatched> {
        match classify(raw) {
            Input::Sequence(sequence) => {
                let word = self.codec.decode(&sequence);
                debug!(%sequence, %word, "decoded sequence input");
                Ok(Dispatched {
                    result: self.analyze(&word)?,
                    decoded_from: Some(sequence),
                })
            }
            Input::Word(word) => Ok(Dispatched {
                decoded_from: None,
                result: self.analyze(&word)?,
            }),
        }
    }

    /// Builds the word record, then analyzes the sum of its letter values.
    pub fn analyze(&self, word: &str) -> Result<AnalysisResult> {
        let sequence = self.codec.encode(word);
        let total = self.codec.word_value(word);
        debug!(word, %sequence, total, "analyzing word");

        let record = WordRecord {
            original: word.to_string(),
            uppercase: word.to_uppercase(),
            lowercase: word.to_lowercase(),
            length: word.chars().count(),
            is_palindrome: text::is_palindrome(word),
            vowels: text::count_vowels(word),
            consonants: text::count_consonants(word),
            unique_letters: text::unique_letters(word),
            lexeme: text::lookup(word),
            decoded: self.codec.decode(&sequence),
            letters: self.codec.letter_codes(word),
            sequence,
        };

        Ok(AnalysisResult {
            word: record,
            number: analyze_number(total)?,
        })
    }
}
