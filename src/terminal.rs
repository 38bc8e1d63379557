// File: src/terminal.rs
//! Line input for the interactive session.

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use std::io::{self, BufRead, Write};

/// One read from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Text(String),
    /// Ctrl-C while typing.
    Interrupted,
    /// End of input.
    Closed,
}

/// Where the session reads its lines from.
pub trait LineSource {
    fn read_line(&mut self) -> io::Result<Line>;
}

/// Reads newline-terminated lines from any buffered reader.
pub struct BufferedLines<R> {
    reader: R,
}

impl<R: BufRead> BufferedLines<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for BufferedLines<R> {
    fn read_line(&mut self) -> io::Result<Line> {
        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            return Ok(Line::Closed);
        }
        let len = input.trim_end_matches(['\r', '\n']).len();
        input.truncate(len);
        Ok(Line::Text(input))
    }
}

/// Reads keys in raw mode so Ctrl-C arrives as input rather than a signal.
#[derive(Debug, Default)]
pub struct TerminalLines;

impl TerminalLines {
    pub fn new() -> Self {
        Self
    }
}

/// Leaves raw mode when dropped, including on early return.
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

impl LineSource for TerminalLines {
    fn read_line(&mut self) -> io::Result<Line> {
        let _raw = RawMode::enable()?;
        let mut stdout = io::stdout();
        let mut buffer = String::new();

        loop {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            match key.code {
                KeyCode::Char('c') if ctrl => {
                    write!(stdout, "\r\n")?;
                    stdout.flush()?;
                    return Ok(Line::Interrupted);
                }
                KeyCode::Char('d') if ctrl && buffer.is_empty() => {
                    write!(stdout, "\r\n")?;
                    stdout.flush()?;
                    return Ok(Line::Closed);
                }
                KeyCode::Enter => {
                    write!(stdout, "\r\n")?;
                    stdout.flush()?;
                    return Ok(Line::Text(buffer));
                }
                KeyCode::Backspace => {
                    if buffer.pop().is_some() {
                        write!(stdout, "\u{8} \u{8}")?;
                    }
                }
                KeyCode::Char(c) if !ctrl => {
                    buffer.push(c);
                    write!(stdout, "{c}")?;
                }
                _ => {}
            }
            stdout.flush()?;
        }
    }
}

/// Says farewell and exits with status 0 on SIGINT.
///
/// Buffered reads block inside `read_line`, so a piped session cannot see
/// Ctrl-C as input. A watcher thread takes the signal instead.
#[cfg(unix)]
pub fn exit_on_interrupt() -> io::Result<()> {
    use signal_hook::consts::SIGINT;
    use signal_hook::iterator::Signals;

    use crate::session::FAREWELL;

    let mut signals = Signals::new([SIGINT])?;
    std::thread::spawn(move || {
        if signals.forever().next().is_some() {
            tracing::info!("interrupted, leaving session");
            let mut stdout = io::stdout();
            let _ = writeln!(stdout, "\n\n{FAREWELL}");
            let _ = stdout.flush();
            std::process::exit(0);
        }
    });
    Ok(())
}

#[cfg(not(unix))]
pub fn exit_on_interrupt() -> io::Result<()> {
    Ok(())
}
