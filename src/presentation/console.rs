use crate::presentation::style::StyleHint;
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

/// Line-oriented operator I/O.
pub trait Console {
    /// Shows `message` and blocks for one line. `None` once input is closed.
    fn prompt_line(&mut self, message: &str) -> Result<Option<String>>;

    fn emit_line(&mut self, text: &str, style: StyleHint);
}

/// Console over a line reader and a writer, stdin/stdout by default.
pub struct TerminalConsole<R = io::StdinLock<'static>, W = io::Stdout> {
    input: R,
    output: W,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self::with_io(io::stdin().lock(), io::stdout())
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn with_io(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn prompt_line(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{} ", message).context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush prompt")?;

        // Raw bytes: a line that is not UTF-8 must not end the session.
        let mut buf = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .context("Failed to read input")?;

        if read == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn emit_line(&mut self, text: &str, style: StyleHint) {
        if let Err(e) = writeln!(self.output, "{}", style.render(text)) {
            tracing::warn!("Failed to write output: {}", e);
        }
    }
}
