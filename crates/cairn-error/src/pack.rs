//! Batching for loops that must try every item even when earlier ones fail.
//!
//! A [`Pack`] accumulates the chains of independently-failed attempts and is
//! raised as a single aggregate once the loop completes. Raising goes through
//! [`Pack::finish`], which never propagates an empty pack:
//!
//! ```
//! use cairn_error::{Error, Pack};
//!
//! fn send(item: u32) -> cairn_error::Result<()> {
//!     if item % 2 == 0 {
//!         return Err(Error::warning(format!("item {item} rejected")));
//!     }
//!     Ok(())
//! }
//!
//! let mut pack = Pack::new();
//! for item in [1, 2, 3, 4] {
//!     if let Err(failure) = send(item) {
//!         pack.accumulate(failure);
//!     }
//! }
//! let failure = pack.finish().unwrap_err();
//! // Most recently accumulated attempt reports first.
//! assert_eq!(
//!     failure.report().messages,
//!     ["item 4 rejected", "item 2 rejected"],
//! );
//! ```

use std::fmt;

use crate::{Error, Record};

/// An ordered collection of independently-raised error chains.
///
/// Mutable while accumulating; frozen for good once moved into the
/// [`Record::Pack`] raised by [`finish`](Pack::finish).
#[derive(Debug, Clone, Default)]
pub struct Pack {
    items: Vec<Error>,
}

impl Pack {
    pub fn new() -> Pack {
        Pack::default()
    }

    /// Capture one more failed chain without ending the enclosing loop.
    pub fn accumulate(&mut self, failure: Error) {
        self.items.push(failure);
    }

    /// Remove and return one accumulated chain, last-in-first-out.
    /// `None` signals the pack is empty.
    pub fn take(&mut self) -> Option<Error> {
        self.items.pop()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Accumulated chains in accumulation order. The report builder walks
    /// these newest-first to match [`take`](Pack::take) order.
    pub fn iter(&self) -> std::slice::Iter<'_, Error> {
        self.items.iter()
    }

    /// Raise the pack as one aggregate chain if anything was accumulated.
    /// An empty pack never propagates.
    pub fn finish(self) -> crate::Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(Record::Pack(self).into())
        }
    }
}

impl fmt::Display for Pack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} accumulated failures", self.items.len())
    }
}
