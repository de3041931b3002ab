//! Collection and emission of syntax diagnostics.
//!
//! Reporting never fails the parse: an `ErrorReporter` stores every error in
//! the order it was detected, raises its failure flag, and forwards the error
//! to an optional sink for immediate output.

use std::io::Write;

use log::{debug, warn};

use super::errors::Error;

/// Receives diagnostics as soon as they are reported.
pub trait DiagnosticSink {
    fn emit(&mut self, error: &Error);
}

/// Writes each diagnostic as a `>>> ` prefixed line to a listing writer.
pub struct ListingSink<W: Write> {
    writer: W,
}

impl<W: Write> ListingSink<W> {
    pub fn new(writer: W) -> Self {
        ListingSink { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DiagnosticSink for ListingSink<W> {
    fn emit(&mut self, error: &Error) {
        if let Err(io_error) = writeln!(self.writer, ">>> {}", error) {
            warn!("Failed to write diagnostic to listing: {}", io_error);
        }
    }
}

#[derive(Default)]
pub struct ErrorReporter {
    errors: Vec<Error>,
    sink: Option<Box<dyn DiagnosticSink>>,
}

impl ErrorReporter {
    /// Creates a reporter that only records diagnostics.
    pub fn new() -> Self {
        ErrorReporter {
            errors: Vec::new(),
            sink: None,
        }
    }

    /// Creates a reporter that also forwards every diagnostic to `sink`.
    pub fn with_sink(sink: Box<dyn DiagnosticSink>) -> Self {
        ErrorReporter {
            errors: Vec::new(),
            sink: Some(sink),
        }
    }

    pub fn report(&mut self, error: Error) {
        debug!("{} reported: {}", error.get_error_name(), error);

        if let Some(sink) = self.sink.as_mut() {
            sink.emit(&error);
        }
        self.errors.push(error);
    }

    /// The failure flag: true once any error has been reported.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }
}
