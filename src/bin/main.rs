use clap::Parser;
use kreol_core::config::ReportOptions;
use kreol_core::report;
use kreol_core::session::{Session, ERROR_PREFIX};
use kreol_core::terminal::{exit_on_interrupt, BufferedLines, TerminalLines};
use kreol_core::{AnalysisEngine, AnalysisError};
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

const SUCCESS: u8 = 0;
const FAILURE: u8 = 1;

/// Réunion creole word analyzer: encoding, numeric properties, digests.
#[derive(Parser)]
#[command(name = "kreol-truth", version)]
struct Cli {
    /// A creole word, or a dot-separated sequence such as 2.15.14.26.15.21.18.
    /// Without it, an interactive session starts. Pass words starting with
    /// `-` after `--`.
    input: Vec<String>,

    /// Print the analysis as JSON instead of the text report.
    #[arg(long)]
    json: bool,

    /// Do not print the correspondence table after the report.
    #[arg(long)]
    no_table: bool,

    /// Print the correspondence table after the interactive full report.
    #[arg(long)]
    details_table: bool,
}

impl Cli {
    fn options(&self) -> ReportOptions {
        ReportOptions {
            table_after_report: !self.no_table,
            table_in_details: self.details_table,
            json: self.json,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let code = if cli.input.is_empty() {
        match interactive(cli.options()) {
            Ok(()) => SUCCESS,
            Err(e) => fail(&mut io::stdout().lock(), &e.into()),
        }
    } else {
        run(&cli, &mut io::stdout().lock())
    };
    ExitCode::from(code)
}

/// One-shot mode: exactly one input, otherwise usage and failure.
fn run<W: Write>(cli: &Cli, out: &mut W) -> u8 {
    let [input] = cli.input.as_slice() else {
        let _ = print_usage(out);
        return FAILURE;
    };
    match one_shot(input, cli.options(), out) {
        Ok(()) => SUCCESS,
        Err(e) => fail(out, &e),
    }
}

fn fail<W: Write>(out: &mut W, error: &AnalysisError) -> u8 {
    if !is_broken_pipe(error) {
        let _ = writeln!(out, "{ERROR_PREFIX} {error}");
    }
    FAILURE
}

fn is_broken_pipe(error: &AnalysisError) -> bool {
    match error {
        AnalysisError::Io(e) => e.kind() == io::ErrorKind::BrokenPipe,
        AnalysisError::Json(e) => e.io_error_kind() == Some(io::ErrorKind::BrokenPipe),
        AnalysisError::PowerOverflow { .. } => false,
    }
}

fn one_shot<W: Write>(input: &str, options: ReportOptions, out: &mut W) -> Result<(), AnalysisError> {
    let engine = AnalysisEngine::new();
    let dispatched = engine.dispatch(input)?;

    if options.json {
        return report::write_json(out, &dispatched.result);
    }
    if let Some(sequence) = &dispatched.decoded_from {
        report::write_decode_banner(out, sequence, &dispatched.result.word.original)?;
    }
    report::write_report(out, &dispatched.result)?;
    if options.table_after_report {
        report::write_table(out)?;
    }
    out.flush()?;
    Ok(())
}

fn interactive(options: ReportOptions) -> io::Result<()> {
    if io::stdin().is_terminal() {
        Session::new(TerminalLines::new(), io::stdout(), options).run()
    } else {
        exit_on_interrupt()?;
        Session::new(BufferedLines::new(io::stdin().lock()), io::stdout(), options).run()
    }
}

fn print_usage<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Itilizasyon: kreol-truth <mo_kréol>")?;
    writeln!(out, "Égzamp: kreol-truth BONZOUR")?;
    writeln!(out, "Égzamp: kreol-truth \"2.15.14.26.15.21.18\" (pou dékodé)")
}
