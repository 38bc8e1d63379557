// File: src/session.rs
//! The interactive read-analyze loop.

use crate::config::ReportOptions;
use crate::core::engine::AnalysisEngine;
use crate::error::AnalysisError;
use crate::report;
use crate::terminal::{Line, LineSource};
use std::io::{self, Write};
use tracing::{info, warn};

pub const FAREWELL: &str = "Orevwar! À la prochaine!";
pub const ERROR_PREFIX: &str = "❌ Erèr :";

const EXIT_WORDS: [&str; 4] = ["kité", "kite", "exit", "quit"];
const TABLE_WORD: &str = "tablo";
const YES_WORDS: [&str; 4] = ["w", "wi", "y", "yes"];

/// Outcome of one loop iteration.
#[derive(Debug)]
pub enum Turn {
    /// Input handled, or an empty line skipped.
    Done,
    /// Analysis failed; the session goes on.
    Failed(AnalysisError),
    /// Exit keyword.
    Exit,
    /// Ctrl-C or end of input while a prompt was waiting.
    Interrupted,
}

pub struct Session<S, W> {
    engine: AnalysisEngine,
    source: S,
    out: W,
    options: ReportOptions,
}

impl<S: LineSource, W: Write> Session<S, W> {
    pub fn new(source: S, out: W, options: ReportOptions) -> Self {
        Self {
            engine: AnalysisEngine::new(),
            source,
            out,
            options,
        }
    }

    /// Runs until an exit signal. Only console I/O failures end it early.
    pub fn run(&mut self) -> io::Result<()> {
        info!("interactive session started");
        self.write_banner()?;

        loop {
            match self.turn()? {
                Turn::Done => {}
                Turn::Failed(e) => {
                    warn!(error = %e, "analysis failed");
                    writeln!(self.out, "{ERROR_PREFIX} {e}")?;
                }
                Turn::Exit => {
                    writeln!(self.out, "{FAREWELL}")?;
                    break;
                }
                Turn::Interrupted => {
                    writeln!(self.out, "\n\n{FAREWELL}")?;
                    break;
                }
            }
        }

        info!("interactive session ended");
        self.out.flush()
    }

    /// Reads one input and acts on it.
    pub fn turn(&mut self) -> io::Result<Turn> {
        let entry = match self.prompt("\nAntre yon mo ou yon sékans : ")? {
            Line::Text(text) => text.trim().to_string(),
            Line::Interrupted | Line::Closed => return Ok(Turn::Interrupted),
        };

        let command = entry.to_lowercase();
        if EXIT_WORDS.contains(&command.as_str()) {
            return Ok(Turn::Exit);
        }
        if command == TABLE_WORD {
            report::write_table(&mut self.out)?;
            return Ok(Turn::Done);
        }
        if entry.is_empty() {
            return Ok(Turn::Done);
        }

        let dispatched = match self.engine.dispatch(&entry) {
            Ok(dispatched) => dispatched,
            Err(e) => return Ok(Turn::Failed(e)),
        };
        let result = &dispatched.result;
        if let Some(sequence) = &dispatched.decoded_from {
            report::write_decode_banner(&mut self.out, sequence, &result.word.original)?;
        }
        report::write_summary(&mut self.out, result)?;

        let answer = match self.prompt("\nWè analiz konplè? (w/n): ")? {
            Line::Text(text) => text.trim().to_lowercase(),
            Line::Interrupted | Line::Closed => return Ok(Turn::Interrupted),
        };
        if YES_WORDS.contains(&answer.as_str()) {
            report::write_report(&mut self.out, result)?;
            if self.options.table_in_details {
                report::write_table(&mut self.out)?;
            }
        }
        Ok(Turn::Done)
    }

    /// Consumes the session, returning its output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    fn prompt(&mut self, text: &str) -> io::Result<Line> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        self.source.read_line()
    }

    fn write_banner(&mut self) -> io::Result<()> {
        writeln!(self.out, "=== ANALIZ KRÉOL RÉYONÉ KONPLÈ ===")?;
        writeln!(self.out, "Analiz lengwistik, ankodaj, propriété mathématik, hash")?;
        writeln!(self.out, "\nLòd:")?;
        writeln!(self.out, "  - Antre yon mo kréol pou analizé")?;
        writeln!(self.out, "  - Antre yon sékans numérik pou dékodé é analizé")?;
        writeln!(self.out, "  - '{TABLE_WORD}' pou wè tablo korespondans")?;
        writeln!(self.out, "  - 'kité' pou sorti")?;
        writeln!(self.out, "{}", "-".repeat(70))
    }
}
