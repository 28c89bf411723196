//! Boundary helper: log the failure, keep the result.

use cairn_error::Error;

/// Best-effort emission at subsystem boundaries: the `Err` arm's report goes
/// to the process-wide logger, the result itself comes back unchanged for
/// the caller to handle.
pub trait LogResultExt<T> {
    fn log_err(self) -> Self;
}

impl<T> LogResultExt<T> for Result<T, Error> {
    fn log_err(self) -> Self {
        if let Err(ref failure) = self {
            // Emission failures are dropped here; the primary failure is
            // what the caller must see.
            let _ = crate::facade::emit_error(failure);
        }
        self
    }
}
