//! Every grading decision produces exactly one line of feedback. Sinks decide
//! where that line goes: the console for learners, a buffer for tests.

use std::io::{self, Stdout, Write};

use grade_core::errors::{ErrorInfo, GradeError};

/// Receives feedback lines.
pub trait FeedbackSink {
    /// Emits a single line of feedback.
    fn emit(&mut self, line: &str) -> Result<(), GradeError>;
}

/// Writes each line, newline terminated, to an [`io::Write`] target.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    /// Wraps the writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<Stdout> {
    /// Sink writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> FeedbackSink for WriterSink<W> {
    fn emit(&mut self, line: &str) -> Result<(), GradeError> {
        writeln!(self.writer, "{line}")
            .and_then(|()| self.writer.flush())
            .map_err(|err| GradeError::Output(ErrorInfo::new("write-failed", err.to_string())))
    }
}

/// Collects lines in memory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemorySink {
    /// Lines in emission order.
    pub lines: Vec<String>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the most recent line, if any.
    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }
}

impl FeedbackSink for MemorySink {
    fn emit(&mut self, line: &str) -> Result<(), GradeError> {
        self.lines.push(line.to_string());
        Ok(())
    }
}

impl<S: FeedbackSink + ?Sized> FeedbackSink for &mut S {
    fn emit(&mut self, line: &str) -> Result<(), GradeError> {
        (**self).emit(line)
    }
}
