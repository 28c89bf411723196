//! Node payloads for error chains.
//!
//! Every chain node carries exactly one [`Record`]; the kinds mirror the four
//! ways a failure enters the system: raised with a domain classification,
//! tagged with a source coordinate, batched from independent attempts, or
//! imported from outside the taxonomy.

use crate::{Pack, Severity, Site};

/// One node's payload in an error chain. Immutable once constructed.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Record {
    /// A domain failure with a message and a severity classification.
    #[error("{message}")]
    Classified { severity: Severity, message: String },

    /// A pure source-position annotation; carries no message and never
    /// contributes to a report's message list.
    #[error("{0}")]
    Location(Site),

    /// An aggregate of independently-failed chains, frozen once raised.
    #[error("{0}")]
    Pack(Pack),

    /// A failure that originated outside this taxonomy, normalized to
    /// descriptive text.
    #[error("{text}")]
    Foreign { text: String },
}

impl Record {
    /// A classified record with `Default` severity.
    pub fn message(message: impl Into<String>) -> Record {
        Record::classified(Severity::Default, message)
    }

    pub fn warning(message: impl Into<String>) -> Record {
        Record::classified(Severity::Warning, message)
    }

    pub fn critical(message: impl Into<String>) -> Record {
        Record::classified(Severity::Critical, message)
    }

    pub fn classified(severity: Severity, message: impl Into<String>) -> Record {
        Record::Classified {
            severity,
            message: message.into(),
        }
    }

    pub fn foreign(text: impl Into<String>) -> Record {
        Record::Foreign { text: text.into() }
    }

    /// Whether this record carries a domain classification. Classified heads
    /// pass through [`Error::annotate`](crate::Error::annotate) untouched.
    pub fn is_classified(&self) -> bool {
        matches!(self, Record::Classified { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::Record;
    use crate::Severity;

    #[test]
    fn constructors_pick_the_right_severity() {
        for (record, expected) in [
            (Record::message("m"), Severity::Default),
            (Record::warning("m"), Severity::Warning),
            (Record::critical("m"), Severity::Critical),
        ] {
            match record {
                Record::Classified { severity, message } => {
                    assert_eq!(severity, expected);
                    assert_eq!(message, "m");
                }
                other => panic!("expected a classified record, got {other:?}"),
            }
        }
    }

    #[test]
    fn display_shows_the_message_only() {
        assert_eq!(Record::critical("disk full").to_string(), "disk full");
        assert_eq!(Record::foreign("raw text").to_string(), "raw text");
    }
}
