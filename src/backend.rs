//! Execution backend contract and console output classification
//!
//! Running code is delegated to external engines (a local interpreter
//! runtime or remote compile-and-run services). This module owns the
//! call contract those engines implement and the console-side
//! classification of what they return. Backends receive the raw
//! source text plus queued stdin lines and report their streams in
//! one outcome; nothing here performs execution itself.

use crate::error::Result;

/// Classification of a console entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    /// Program standard output
    Stdout,
    /// Program standard error
    Stderr,
    /// Compiler diagnostics
    CompileError,
    /// Playground status messages
    System,
}

/// Result of one backend invocation.
///
/// Field shapes mirror what compile-and-run services report: separate
/// program output, program error and compiler error streams plus an
/// exit status.
#[derive(Debug, Clone, Default)]
pub struct ExecOutcome {
    pub program_output: String,
    pub program_error: String,
    pub compile_error: String,
    pub status: i32,
}

/// An engine that can run playground source text
pub trait ExecutionBackend {
    /// Engine name, for status messages
    fn name(&self) -> &str;

    /// Run source text with the given stdin lines
    fn run(&mut self, source: &str, stdin_lines: &[String]) -> Result<ExecOutcome>;
}

/// Line-buffered console classifier.
///
/// Stream chunks arrive in arbitrary pieces; emitting them directly
/// would fragment lines across console entries. The buffer holds the
/// partial tail of the current stream until a newline completes it or
/// a flush forces it out.
#[derive(Debug, Default)]
pub struct ConsoleBuffer {
    entries: Vec<(OutputKind, String)>,
    partial: String,
    partial_kind: Option<OutputKind>,
}

impl ConsoleBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stream chunk, emitting any lines it completes
    pub fn push(&mut self, kind: OutputKind, chunk: &str) {
        if chunk.is_empty() {
            return;
        }

        // Switching streams finishes the previous partial line
        if self.partial_kind.is_some_and(|k| k != kind) {
            self.flush();
        }
        self.partial_kind = Some(kind);
        self.partial.push_str(chunk);

        while let Some(newline) = self.partial.find('\n') {
            let line: String = self.partial.drain(..=newline).collect();
            self.entries.push((kind, line.trim_end_matches('\n').to_string()));
        }
    }

    /// Emit a status entry, finishing any partial line first
    pub fn note(&mut self, message: impl Into<String>) {
        self.flush();
        self.entries.push((OutputKind::System, message.into()));
    }

    /// Force out the partial tail, if any
    pub fn flush(&mut self) {
        if !self.partial.is_empty() {
            let kind = self.partial_kind.unwrap_or(OutputKind::Stdout);
            let line = std::mem::take(&mut self.partial);
            self.entries.push((kind, line));
        }
        self.partial_kind = None;
    }

    /// Classified entries emitted so far
    pub fn entries(&self) -> &[(OutputKind, String)] {
        &self.entries
    }

    /// Consume the buffer, flushing first
    pub fn into_entries(mut self) -> Vec<(OutputKind, String)> {
        self.flush();
        self.entries
    }
}

/// Classify a backend outcome into console entries.
///
/// Empty streams produce no entries; a nonzero exit status with no
/// diagnostics gets a status note, as does a clean run with no output.
pub fn classify_outcome(outcome: &ExecOutcome) -> Vec<(OutputKind, String)> {
    let mut console = ConsoleBuffer::new();
    console.push(OutputKind::Stdout, &outcome.program_output);
    console.flush();
    console.push(OutputKind::Stderr, &outcome.program_error);
    console.flush();
    console.push(OutputKind::CompileError, &outcome.compile_error);
    console.flush();

    let silent = outcome.program_output.is_empty() && outcome.program_error.is_empty();
    if outcome.status == 0 && silent && outcome.compile_error.is_empty() {
        console.note("Program finished with no output.");
    } else if outcome.status != 0 && silent && outcome.compile_error.is_empty() {
        console.note(format!("Program exited with status: {}", outcome.status));
    }

    console.into_entries()
}
