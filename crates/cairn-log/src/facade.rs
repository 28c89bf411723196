//! The serialized write path and the process-wide logger slot.
//!
//! A [`Logger`] pairs one [`Sink`] with the mutex that serializes its
//! timestamp-plus-write sequence. The process-wide slot holds exactly one
//! `Logger`: [`try_init`] writes it once, and anything emitting before that
//! installs the stdout default permanently. Initialization is a startup-only
//! operation and must happen on one thread before any concurrent emit.

use std::sync::{Mutex, OnceLock, PoisonError};

use cairn_error::{Error, Report, Result, ResultExt, Site, here};

use crate::sink::{Sink, StdoutSink};

/// Timestamp prefix on every emitted line, `YYYY-MM-DD HH:MM:SS`.
const STAMP_FORMAT: &str = "%F %T";

/// A sink plus the gate serializing its write path. Safe to share across
/// threads; concurrent emitters interleave at line granularity only.
pub struct Logger {
    sink: Box<dyn Sink>,
    gate: Mutex<()>,
}

impl Logger {
    /// A standalone logger for explicit dependency injection, with its own
    /// serialization gate.
    pub fn new(sink: impl Sink + 'static) -> Logger {
        Logger {
            sink: Box::new(sink),
            gate: Mutex::new(()),
        }
    }

    /// Timestamp `text` and hand the combined line to the sink. The gate is
    /// held for the whole format-and-write sequence and released before a
    /// sink failure is annotated and returned, so the failure path cannot
    /// re-enter the lock.
    pub fn emit(&self, text: &str) -> Result<()> {
        let outcome = {
            // The gate guards ordering only; a poisoned guard still
            // serializes correctly.
            let _serialized = self.gate.lock().unwrap_or_else(PoisonError::into_inner);
            let line = format!("{} {}", chrono::Local::now().format(STAMP_FORMAT), text);
            self.sink.accept(&line)
        };
        outcome.annotate(here!())
    }

    /// Emit the rendered form of an already-built report.
    pub fn emit_report(&self, report: &Report) -> Result<()> {
        self.emit(&report.render())
    }

    /// Flatten a failure chain and emit its report.
    pub fn emit_error(&self, failure: &Error) -> Result<()> {
        self.emit_report(&failure.report())
    }

    /// Flatten a failure chain with the handler's own coordinate seeded as
    /// the report location, then emit it. The usual shape of a top-level
    /// catch: `logger.emit_error_at(here!(), &failure)`.
    pub fn emit_error_at(&self, site: Site, failure: &Error) -> Result<()> {
        self.emit_report(&Report::of_at(site, failure))
    }
}

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Failures installing the process-wide logger.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// The slot was already written, by an earlier `try_init` or by the
    /// stdout default installed on first emit.
    #[error("global log sink already initialized")]
    AlreadyInitialized,
}

impl From<LogError> for Error {
    fn from(failure: LogError) -> Error {
        Error::foreign(failure.to_string())
    }
}

/// Install `sink` as the process-wide logger. Startup-only: call it on one
/// thread before anything emits concurrently.
pub fn try_init(sink: impl Sink + 'static) -> Result<(), LogError> {
    GLOBAL
        .set(Logger::new(sink))
        .map_err(|_| LogError::AlreadyInitialized)
}

/// The process-wide logger, defaulting to [`StdoutSink`] on first use.
pub fn global() -> &'static Logger {
    GLOBAL.get_or_init(|| Logger::new(StdoutSink))
}

/// Timestamp and emit one line through the process-wide logger.
pub fn emit(text: &str) -> Result<()> {
    global().emit(text)
}

/// Render `report` and emit it through the process-wide logger.
pub fn emit_report(report: &Report) -> Result<()> {
    global().emit_report(report)
}

/// Flatten `failure` and emit its report through the process-wide logger.
pub fn emit_error(failure: &Error) -> Result<()> {
    global().emit_error(failure)
}

/// Flatten `failure` with `site` seeded as the report location and emit it
/// through the process-wide logger.
pub fn emit_error_at(site: Site, failure: &Error) -> Result<()> {
    global().emit_error_at(site, failure)
}
