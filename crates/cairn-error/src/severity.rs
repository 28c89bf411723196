//! Coarse-grained classification carried by classified failure records.
//!
//! Typical mappings:
//! - Default: an ordinary failure, rendered under the plain "Error" label
//! - Warning: a condition worth surfacing that still outranks Default
//! - Critical: irrecoverable for the current operation
//!
//! The derived ordering (`Default < Warning < Critical`) is what the report
//! builder maxes over when a chain carries several classified records.

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Severity {
    #[default]
    Default,
    Warning,
    Critical,
}

impl Severity {
    /// Label used by the report renderer. `Default` deliberately reads as
    /// plain "Error" in rendered output.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Default => "Error",
            Severity::Warning => "Warning",
            Severity::Critical => "Critical",
        }
    }
}
