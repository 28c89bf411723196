//! Combinators threading error chains through `Result`, so call sites wrap
//! and annotate without touching the `Ok` arm.
//!
//! - `wrap`: extend the propagating chain with a new record.
//! - `wrap_at`: same, with a location marker directly above the new record.
//! - `annotate`: tag a generic boundary; classified failures pass through
//!   verbatim.
//!
//! Example
//! ```
//! use cairn_error::{Record, ResultExt, here};
//!
//! fn read_index() -> cairn_error::Result<String> {
//!     std::fs::read_to_string("definitely-missing-index")
//!         .wrap_at(here!(), Record::critical("index unreadable"))
//! }
//!
//! let report = read_index().unwrap_err().report();
//! assert_eq!(report.messages.first().unwrap(), "index unreadable");
//! assert!(report.location.is_some());
//! ```

use crate::{Error, Pack, Record, Result, Site};

/// Extension trait lifting the chain operations over any `Result` whose
/// error converts into [`Error`].
pub trait ResultExt<T> {
    /// Wrap the `Err` arm's chain with one more record.
    fn wrap(self, record: Record) -> Result<T>;

    /// Wrap the `Err` arm's chain with `record`, then a location marker, so
    /// the coordinate sits directly above the record just raised.
    fn wrap_at(self, site: Site, record: Record) -> Result<T>;

    /// Annotate the `Err` arm with a source coordinate unless its head is
    /// already classified; domain classifications survive generic
    /// boundaries untouched.
    fn annotate(self, site: Site) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    fn wrap(self, record: Record) -> Result<T> {
        self.map_err(|failure| failure.into().wrap(record))
    }

    fn wrap_at(self, site: Site, record: Record) -> Result<T> {
        self.map_err(|failure| failure.into().wrap(record).at(site))
    }

    fn annotate(self, site: Site) -> Result<T> {
        self.map_err(|failure| failure.into().annotate(site))
    }
}

/// Iterator helper for loops that must try every item even when earlier ones
/// fail, batching the failures into a [`Pack`].
pub trait IterResultExt<T>: Sized {
    /// Drive every item to completion. `Ok(values)` only when all succeeded;
    /// otherwise the accumulated pack is raised as one aggregate chain.
    fn collect_packed(self) -> Result<Vec<T>>;
}

impl<I, T, E> IterResultExt<T> for I
where
    I: IntoIterator<Item = std::result::Result<T, E>>,
    E: Into<Error>,
{
    fn collect_packed(self) -> Result<Vec<T>> {
        let mut values = Vec::new();
        let mut pack = Pack::new();
        for item in self {
            match item {
                Ok(value) => values.push(value),
                Err(failure) => pack.accumulate(failure.into()),
            }
        }
        pack.finish()?;
        Ok(values)
    }
}
