use crate::generator::GenerationError;
use crate::pipeline::ProgressObserver;
use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::{self, Write};

/// Progress lines on a terminal stream (stderr by default, so stdout stays
/// clean for the script itself).
pub struct TerminalProgress<W: Write = io::Stderr> {
    out: W,
}

impl TerminalProgress {
    pub fn stderr() -> Self {
        Self { out: io::stderr() }
    }
}

impl<W: Write> TerminalProgress<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(
        &mut self,
        color: Color,
        text: String,
    ) {
        // Progress is best effort; a closed stderr must not abort the run.
        let _ = execute!(
            self.out,
            SetForegroundColor(color),
            Print(text),
            ResetColor,
            Print("\n")
        );
    }
}

impl<W: Write> ProgressObserver for TerminalProgress<W> {
    fn fragment_started(
        &mut self,
        index: usize,
        total: usize,
    ) {
        self.line(
            Color::Cyan,
            format!("▲ Processing fragment {}/{}", index + 1, total),
        );
    }

    fn fragment_failed(
        &mut self,
        index: usize,
        total: usize,
        error: &GenerationError,
    ) {
        self.line(
            Color::Red,
            format!("✘ fragment {}/{} failed: {}", index + 1, total, error),
        );
    }
}
