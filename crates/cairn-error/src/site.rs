//! Source coordinates for tagging where a failure was raised or crossed a
//! boundary.
//!
//! A [`Site`] is an opaque `file:line` string built at compile time; the rest
//! of the crate treats it purely as payload. Use [`here!`](crate::here) at
//! the call site that wants to tag a failure's origin.

use std::fmt;

/// An immutable source coordinate, combining a file identifier and a line
/// number into one statically-constructed string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Site(&'static str);

impl Site {
    pub const fn new(coordinate: &'static str) -> Self {
        Site(coordinate)
    }

    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Capture the current source coordinate as a [`Site`].
///
/// The wrapped string has the form `"src/lib.rs:42"` and is assembled at
/// compile time; no runtime cost beyond copying the pointer.
///
/// ```
/// let site = cairn_error::here!();
/// assert!(site.as_str().contains(".rs:"));
/// ```
#[macro_export]
macro_rules! here {
    () => {
        $crate::Site::new(concat!(file!(), ":", line!()))
    };
}
