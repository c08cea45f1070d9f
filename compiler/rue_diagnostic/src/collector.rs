//! Error collection and the buffering policy.

use rue_ir::SourceMap;

use crate::{ComplexError, Error};

/// What [`ErrorCollector::report`] does with a flat error.
///
/// Fixed at construction; a collector never changes mode mid-run.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ReportMode {
    /// Accumulate in memory until [`ErrorCollector::drain`] is called.
    Buffer,
    /// Render and forward to the log sink immediately; retain nothing.
    Emit,
}

/// Collects flat errors according to a [`ReportMode`].
///
/// The collector is single-owner: it is mutated only by the thread
/// driving the type checker. Concurrent checker passes each get their
/// own collector and merge the drained batches afterwards.
#[derive(Debug)]
pub struct ErrorCollector {
    mode: ReportMode,
    buffer: Vec<Error>,
}

impl ErrorCollector {
    /// Create a collector with the given mode.
    pub fn new(mode: ReportMode) -> Self {
        ErrorCollector {
            mode,
            buffer: Vec::new(),
        }
    }

    /// The mode chosen at construction.
    pub fn mode(&self) -> ReportMode {
        self.mode
    }

    /// Report a flat error.
    ///
    /// Buffer mode appends it; emit mode renders it and forwards the
    /// text to the sink without retaining anything.
    pub fn report(&mut self, sources: &SourceMap, error: Error) {
        match self.mode {
            ReportMode::Buffer => self.buffer.push(error),
            ReportMode::Emit => emit(&error.render(sources)),
        }
    }

    /// Report a structured error.
    ///
    /// Structured errors bypass the buffer: they are rendered and
    /// forwarded immediately in both modes.
    pub fn report_complex(&self, sources: &SourceMap, error: &ComplexError) {
        emit(&error.render(sources));
    }

    /// Take the full buffered batch, in insertion order, clearing the
    /// buffer.
    ///
    /// Destructive and exactly-once per batch: a second call returns an
    /// empty batch. In emit mode this always returns empty; that is a
    /// valid call, not an error.
    pub fn drain(&mut self) -> Vec<Error> {
        std::mem::take(&mut self.buffer)
    }

    /// Number of buffered errors.
    pub fn error_count(&self) -> usize {
        self.buffer.len()
    }

    /// Check whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

/// Forward rendered error text to the log sink.
fn emit(rendered: &str) {
    tracing::error!(target: "rue::typecheck", "{rendered}");
}
