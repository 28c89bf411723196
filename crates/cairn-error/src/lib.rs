//! Chained error records flattened into single-line diagnostic reports.
//!
//! Failures travel as explicit [`Error`] values: each node owns one
//! [`Record`] (a classified domain failure, a source-location marker, a
//! [`Pack`] of batched failures, or foreign text) plus an optional boxed
//! cause, the chain that was propagating when the node was raised. A
//! top-level handler flattens any chain with [`Error::report`] and renders
//! it as one ordered line.
//!
//! ```
//! use cairn_error::{Error, Record, ResultExt, Severity, here};
//!
//! fn open_store() -> cairn_error::Result<()> {
//!     Err(Error::critical("primary store unavailable").at(here!()))
//! }
//!
//! let failure = open_store()
//!     .wrap(Record::message("loading profile"))
//!     .unwrap_err();
//!
//! let report = failure.report();
//! assert_eq!(report.severity, Severity::Critical);
//! assert_eq!(report.messages, ["loading profile", "primary store unavailable"]);
//! assert!(report.location.is_some());
//! assert!(report.render().starts_with("Critical | loading profile"));
//! ```
//!
//! Chains are plain owned values (`Send + Sync`), never shared between
//! concurrent propagations; building and rendering a report borrows the
//! chain and is safe from any thread.

pub mod pack;
pub mod record;
pub mod report;
pub mod result_ext;
pub mod severity;
pub mod site;

// public exports
pub use pack::Pack;
pub use record::Record;
pub use report::Report;
pub use result_ext::{IterResultExt, ResultExt};
pub use severity::Severity;
pub use site::Site;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// One propagating failure: a head [`Record`] plus the chain it was raised
/// over. Acyclic and finite by construction, since wrapping moves the prior
/// chain in as the exclusive cause.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{record}")]
pub struct Error {
    record: Record,
    #[source]
    cause: Option<Box<Error>>,
}

impl Error {
    /// Begin a fresh chain from a classified record with `Default` severity.
    pub fn new(message: impl Into<String>) -> Error {
        Record::message(message).into()
    }

    pub fn warning(message: impl Into<String>) -> Error {
        Record::warning(message).into()
    }

    pub fn critical(message: impl Into<String>) -> Error {
        Record::critical(message).into()
    }

    pub fn foreign(text: impl Into<String>) -> Error {
        Record::foreign(text).into()
    }

    /// Raise `record` on top of this chain: the new node owns `self` as its
    /// cause. Wrapping is unconditional; identical messages are kept.
    pub fn wrap(self, record: Record) -> Error {
        Error {
            record,
            cause: Some(Box::new(self)),
        }
    }

    /// Push a location marker above the head, unconditionally. Pair with a
    /// fresh raise to tag its origin: `Error::critical("...").at(here!())`.
    pub fn at(self, site: Site) -> Error {
        self.wrap(Record::Location(site))
    }

    /// Annotate a boundary that does not know this failure's classification:
    /// a classified head re-propagates unchanged, anything else gains a
    /// location marker. Only unclassified failures accrue breadcrumbs.
    pub fn annotate(self, site: Site) -> Error {
        if self.record.is_classified() {
            self
        } else {
            self.at(site)
        }
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    pub fn cause(&self) -> Option<&Error> {
        self.cause.as_deref()
    }

    /// Flatten this chain into its [`Report`].
    pub fn report(&self) -> Report {
        Report::of(self)
    }
}

impl From<Record> for Error {
    fn from(record: Record) -> Error {
        Error {
            record,
            cause: None,
        }
    }
}

/// OS-level failures are normalized to the fixed `"system error <code> :
/// <text>"` description; other I/O errors keep their plain display text.
impl From<std::io::Error> for Error {
    fn from(failure: std::io::Error) -> Error {
        let text = match failure.raw_os_error() {
            Some(code) => format!("system error {code} : {failure}"),
            None => failure.to_string(),
        };
        Record::Foreign { text }.into()
    }
}
