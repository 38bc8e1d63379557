// File: src/report.rs
//! Text rendering of analysis results and of the correspondence table.

use crate::core::alphabet::{base_letters, ACCENT_GROUPS};
use crate::core::types::AnalysisResult;
use crate::error::Result;
use std::io::{self, Write};

const TABLE_ROW: usize = 6;
const MD5_PREFIX: usize = 16;

/// Line printed when an input was decoded from a sequence.
pub fn write_decode_banner<W: Write>(out: &mut W, sequence: &str, word: &str) -> io::Result<()> {
    writeln!(out, "🔓 Sékans dékodé : {sequence} → {word}")
}

/// The full multi-section report.
pub fn write_report<W: Write>(out: &mut W, result: &AnalysisResult) -> io::Result<()> {
    let word = &result.word;
    let number = &result.number;

    writeln!(out, "{}", "=".repeat(80))?;
    writeln!(out, "ANALIZ KONPLÈ MO KRÉOL: '{}'", word.original)?;
    writeln!(out, "{}", "=".repeat(80))?;

    writeln!(out, "\nENFÒMASYON JÉNÉRAL")?;
    writeln!(out, "    Mo orijinal : {}", word.original)?;
    writeln!(out, "    An majiskil : {}", word.uppercase)?;
    writeln!(out, "    An miniskil : {}", word.lowercase)?;
    writeln!(out, "    Longè mo : {} karaktè", word.length)?;
    writeln!(out, "    Palindrome : {}", yes_no(word.is_palindrome, "Wi (Yes)", "Non (No)"))?;

    writeln!(out, "\nANALIZ LENGWISTIK")?;
    writeln!(out, "    Nonb vwayèl : {}", word.vowels)?;
    writeln!(out, "    Nonb konson : {}", word.consonants)?;
    writeln!(out, "    Lèt inik : {}", word.unique_letters)?;
    writeln!(out, "    Nòt kréol : {}", word.lexeme)?;

    writeln!(out, "\nANKODAJ KRÉOL")?;
    writeln!(out, "    Sékans numérik : {}", word.sequence)?;
    writeln!(out, "    Mo dékodé (vérifikasyon) : {}", word.decoded)?;
    writeln!(out, "    Valè numérik total : {}", number.decimal)?;

    writeln!(out, "\nANALIZ NUMÉRIK VALÈ TOTAL")?;
    writeln!(out, "    Décimal : {}", number.decimal)?;
    writeln!(out, "    Égzadésimal : {}", number.hexadecimal)?;
    writeln!(out, "    Binèr : {}", number.binary)?;
    writeln!(out, "    Oktal : {}", number.octal)?;

    let factors: Vec<String> = number.factors.iter().map(u64::to_string).collect();
    writeln!(out, "\n    Parité : {}", number.parity)?;
    writeln!(out, "    Faktè : {}", factors.join(", "))?;
    writeln!(out, "    Prim ou Konpozé : {}", number.prime_status)?;
    writeln!(out, "    Sòm chif : {}", number.digit_sum)?;

    writeln!(out, "\n    Karé : {}", number.square)?;
    writeln!(out, "    Kib : {}", number.cube)?;
    if !number.square_root.is_nan() {
        writeln!(out, "    Rasin karé : {:.4}", number.square_root)?;
    }

    writeln!(out, "\nHASH KRIPTOGRAFI")?;
    writeln!(out, "    MD5 : {}", number.md5)?;
    writeln!(out, "    SHA-256 : {}", number.sha256)?;
    writeln!(out, "    Base64 : {}", number.base64)?;

    writeln!(out, "\nSIGNIFIKASYON KRÉOL")?;
    writeln!(out, "    Signifikasyon nonb : {}", number.meaning)?;

    writeln!(out, "\nDÉTAIL ANKODAJ LÈT PA LÈT")?;
    for code in &word.letters {
        writeln!(out, "    {:2}. {} = {:2}", code.position, code.letter, code.value)?;
    }
    Ok(())
}

/// Condensed interactive summary.
pub fn write_summary<W: Write>(out: &mut W, result: &AnalysisResult) -> io::Result<()> {
    let word = &result.word;
    let md5_prefix: String = result.number.md5.chars().take(MD5_PREFIX).collect();

    writeln!(out, "\n📊 RÉZIMÉ POU '{}':", word.original)?;
    writeln!(out, "   Sékans: {}", word.sequence)?;
    writeln!(out, "   Valè total: {}", result.number.decimal)?;
    writeln!(out, "   Longè: {} karaktè", word.length)?;
    writeln!(out, "   Palindrome: {}", yes_no(word.is_palindrome, "Wi", "Non"))?;
    writeln!(out, "   MD5: {md5_prefix}...")
}

/// Base letters in rows of six, then the accented groups.
pub fn write_table<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", "=".repeat(70))?;
    writeln!(out, "TABLO KORESPONDANS KRÉOL RÉYONÉ KONPLÈ")?;
    writeln!(out, "{}", "=".repeat(70))?;

    writeln!(out, "Alfabè dé baz:")?;
    let letters: Vec<(char, u8)> = base_letters().collect();
    for row in letters.chunks(TABLE_ROW) {
        for (letter, value) in row {
            write!(out, "{letter}={value:2}  ")?;
        }
        writeln!(out)?;
    }

    writeln!(out, "\nKaraktè asan-tild (akson kréol):")?;
    for (group, value) in ACCENT_GROUPS {
        writeln!(out, "  {group:15} = {value:2}")?;
    }
    Ok(())
}

/// Pretty JSON rendering of the whole result.
pub fn write_json<W: Write>(out: &mut W, result: &AnalysisResult) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, result)?;
    writeln!(out)?;
    Ok(())
}

fn yes_no(flag: bool, yes: &'static str, no: &'static str) -> &'static str {
    if flag {
        yes
    } else {
        no
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::AnalysisEngine;

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn table_lists_letters_in_rows_of_six() {
        let text = render(|out| write_table(out));
        assert!(text.contains("A= 1  B= 2  C= 3  D= 4  E= 5  F= 6  \n"));
        assert!(text.contains("Y=25  Z=26  \n"));
        assert!(text.contains("  É, È, Ê, Ë      =  5\n"));
        assert!(text.contains("  Ñ               = 14\n"));
    }

    #[test]
    fn report_has_every_section() {
        let result = AnalysisEngine::new().analyze("Bonzour").unwrap();
        let text = render(|out| write_report(out, &result));
        assert!(text.contains("ANALIZ KONPLÈ MO KRÉOL: 'Bonzour'"));
        assert!(text.contains("    Palindrome : Non (No)\n"));
        assert!(text.contains("    Nòt kréol : Mo kréol konn: Bonjour\n"));
        assert!(text.contains("    Sékans numérik : 2.15.14.26.15.21.18\n"));
        assert!(text.contains("    Égzadésimal : 6F\n"));
        assert!(text.contains("    Faktè : 3, 37\n"));
        assert!(text.contains("    Rasin karé : 10.5357\n"));
        assert!(text.contains("     1. B =  2\n"));
        assert!(text.contains("     4. Z = 26\n"));
    }

    #[test]
    fn summary_truncates_md5() {
        let result = AnalysisEngine::new().analyze("a").unwrap();
        let text = render(|out| write_summary(out, &result));
        assert!(text.contains("   Valè total: 1\n"));
        assert!(text.contains("   Palindrome: Wi\n"));
        assert!(text.contains("   MD5: c4ca4238a0b92382...\n"));
    }

    #[test]
    fn json_carries_the_records() {
        let result = AnalysisEngine::new().analyze("viv").unwrap();
        let mut out = Vec::new();
        write_json(&mut out, &result).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["word"]["sequence"], "22.9.22");
        assert_eq!(value["word"]["lexeme"]["gloss"], "Vivre");
        assert_eq!(value["number"]["decimal"], 53);
        assert_eq!(value["number"]["prime_status"], "prime");
    }
}
