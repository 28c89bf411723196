//! Where emitted lines ultimately land.

use std::io::Write;

use cairn_error::Result;

/// Capability consumed by the facade: accept one complete line per call.
///
/// `accept` may fail; the facade funnels the failure back to the emitting
/// caller instead of swallowing it. Implementations are shared across
/// threads, so any internal state needs its own synchronization: the
/// facade's lock only guarantees that calls arrive one line at a time.
pub trait Sink: Send + Sync {
    fn accept(&self, line: &str) -> Result<()>;
}

/// Default sink: the line plus a trailing terminator to the process's
/// standard output, flushed immediately so nothing buffers across calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn accept(&self, line: &str) -> Result<()> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{line}")?;
        out.flush()?;
        Ok(())
    }
}

/// Bridge into the `tracing` ecosystem: every accepted line becomes one INFO
/// event under the `cairn_log` target, for processes that already run a
/// subscriber stack.
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

#[cfg(feature = "tracing")]
impl Sink for TracingSink {
    fn accept(&self, line: &str) -> Result<()> {
        tracing::info!(target: "cairn_log", "{line}");
        Ok(())
    }
}
