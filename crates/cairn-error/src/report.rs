//! Flattening an error chain into one ordered, human-readable report.
//!
//! [`Report::of`] walks a chain exactly once and accumulates:
//! - the maximum severity over every classified record,
//! - every message in traversal order (outermost wrap first, so the most
//!   recent context leads and deeper causes follow),
//! - the first location marker encountered.
//!
//! [`Report::render`] turns the result into a single `" | "`-separated line:
//!
//! ```
//! use cairn_error::{Error, Record, ResultExt, Site};
//!
//! let failure: cairn_error::Result<()> = Err(Error::warning("disk full"));
//! let failure = failure
//!     .wrap(Record::message("retry exhausted"))
//!     .unwrap_err();
//!
//! let mut report = failure.report();
//! report.location = Some(Site::new("io.c:42"));
//! assert_eq!(report.render(), "Warning | retry exhausted | disk full | io.c:42");
//! ```

use std::fmt;

use itertools::Itertools;

use crate::{Error, Record, Severity, Site};

/// The flattened summary of one error chain: a severity, an ordered message
/// list, and at most one source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Maximum severity over all classified records; `Default` when the
    /// chain carried none.
    pub severity: Severity,
    /// Messages in traversal order, outermost wrap first.
    pub messages: Vec<String>,
    /// The first location marker encountered, i.e. the one nearest the head
    /// of the chain.
    pub location: Option<Site>,
    /// Whether [`render`](Report::render) prefixes the severity label.
    pub show_severity: bool,
}

impl Default for Report {
    fn default() -> Report {
        Report {
            severity: Severity::Default,
            messages: Vec::new(),
            location: None,
            show_severity: true,
        }
    }
}

impl Report {
    pub fn new() -> Report {
        Report::default()
    }

    /// Build the report for a chain. Total and deterministic: walks each
    /// node exactly once, never fails, leaves the chain untouched.
    pub fn of(failure: &Error) -> Report {
        let mut report = Report::default();
        report.scan(failure);
        report
    }

    /// Build the report for a chain with the caller's own coordinate seeded
    /// as the location. The seed sits outermost, so markers inside the chain
    /// never displace it. Typical at a top-level handler:
    /// `Report::of_at(here!(), &failure)`.
    pub fn of_at(site: Site, failure: &Error) -> Report {
        let mut report = Report {
            location: Some(site),
            ..Report::default()
        };
        report.scan(failure);
        report
    }

    /// Walk one chain from its head to the deepest cause, folding every
    /// record into `self`. Pack items are scanned newest-accumulated-first,
    /// matching the order `Pack::take` would drain them.
    fn scan(&mut self, chain: &Error) {
        let mut node = Some(chain);
        while let Some(current) = node {
            match current.record() {
                Record::Classified { severity, message } => {
                    self.severity = self.severity.max(*severity);
                    self.messages.push(message.clone());
                }
                // Later markers are traversed but the first one wins.
                Record::Location(site) => {
                    if self.location.is_none() {
                        self.location = Some(*site);
                    }
                }
                Record::Pack(pack) => {
                    for item in pack.iter().rev() {
                        self.scan(item);
                    }
                }
                Record::Foreign { text } => self.messages.push(text.clone()),
            }
            node = current.cause();
        }
    }

    /// Render the single-line form: optional severity label, then every
    /// message, then the location, joined by `" | "`. A report with nothing
    /// to show renders to the empty string.
    pub fn render(&self) -> String {
        self.show_severity
            .then(|| self.severity.label())
            .into_iter()
            .chain(self.messages.iter().map(String::as_str))
            .chain(self.location.map(Site::as_str))
            .join(" | ")
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::Report;
    use crate::{Error, Pack, Record, Severity, Site};

    #[test]
    fn single_classified_record_reports_verbatim() {
        for severity in [Severity::Default, Severity::Warning, Severity::Critical] {
            let failure = Error::from(Record::classified(severity, "boom"));
            let report = failure.report();
            assert_eq!(report.severity, severity);
            assert_eq!(report.messages, ["boom"]);
            assert_eq!(report.location, None);
        }
    }

    #[test]
    fn wrapping_orders_messages_outermost_first() {
        let failure = Error::warning("inner").wrap(Record::message("outer"));
        let report = failure.report();
        assert_eq!(report.messages, ["outer", "inner"]);
        // Severity moves upward only: the Default outer wrap does not demote.
        assert_eq!(report.severity, Severity::Warning);
    }

    #[test]
    fn severity_is_the_maximum_across_the_chain() {
        let failure = Error::critical("inner")
            .wrap(Record::warning("middle"))
            .wrap(Record::message("outer"));
        assert_eq!(failure.report().severity, Severity::Critical);
    }

    #[test]
    fn annotate_preserves_a_classified_head() {
        let failure = Error::critical("boom").annotate(Site::new("caller.rs:7"));
        let report = failure.report();
        assert_eq!(report.messages, ["boom"]);
        assert_eq!(report.severity, Severity::Critical);
        assert_eq!(report.location, None);
    }

    #[test]
    fn annotate_marks_an_unclassified_head() {
        let failure = Error::foreign("raw failure").annotate(Site::new("caller.rs:7"));
        let report = failure.report();
        assert_eq!(report.messages, ["raw failure"]);
        assert_eq!(report.location, Some(Site::new("caller.rs:7")));
    }

    #[test]
    fn first_location_marker_wins() {
        let failure = Error::new("boom")
            .at(Site::new("inner.rs:2"))
            .at(Site::new("outer.rs:1"));
        let report = failure.report();
        assert_eq!(report.location, Some(Site::new("outer.rs:1")));
        assert_eq!(report.messages, ["boom"]);
    }

    #[test]
    fn location_sits_directly_above_the_raised_record() {
        let failure = Error::warning("skipped").at(Site::new("job.rs:12"));
        let report = failure.report();
        assert_eq!(report.location, Some(Site::new("job.rs:12")));
        assert_eq!(report.severity, Severity::Warning);
        assert_eq!(report.messages, ["skipped"]);
    }

    #[test]
    fn pack_report_concatenates_newest_first() {
        let mut pack = Pack::new();
        pack.accumulate(Error::new("attempt 1"));
        pack.accumulate(Error::warning("attempt 2").wrap(Record::message("ctx 2")));
        pack.accumulate(Error::critical("attempt 3"));

        let failure = pack.finish().unwrap_err();
        let report = failure.report();
        assert_eq!(
            report.messages,
            ["attempt 3", "ctx 2", "attempt 2", "attempt 1"],
        );
        assert_eq!(report.severity, Severity::Critical);
    }

    #[test]
    fn pack_keeps_the_first_location_across_items() {
        let mut pack = Pack::new();
        pack.accumulate(Error::new("older").at(Site::new("older.rs:5")));
        pack.accumulate(Error::new("newer").at(Site::new("newer.rs:9")));

        let failure = pack.finish().unwrap_err();
        // Newest item is scanned first, so its marker is encountered first.
        assert_eq!(failure.report().location, Some(Site::new("newer.rs:9")));
    }

    #[test]
    fn wrapped_pack_reports_items_before_its_cause() {
        // A pack raised while an earlier failure was already propagating.
        let mut pack = Pack::new();
        pack.accumulate(Error::new("batch item"));
        let failure = Error::new("earlier failure").wrap(Record::Pack(pack));

        assert_eq!(failure.report().messages, ["batch item", "earlier failure"]);
    }

    #[test]
    fn identical_messages_are_not_deduplicated() {
        let failure = Error::new("timeout").wrap(Record::message("timeout"));
        assert_eq!(failure.report().messages, ["timeout", "timeout"]);
    }

    #[test]
    fn seeding_supplies_the_handlers_coordinate() {
        // A classified failure crossed a generic boundary untouched; the
        // top-level handler still stamps where it was caught.
        let failure = Error::critical("boom").annotate(Site::new("edge.rs:1"));
        let report = Report::of_at(Site::new("main.rs:9"), &failure);
        assert_eq!(report.messages, ["boom"]);
        assert_eq!(report.severity, Severity::Critical);
        assert_eq!(report.location, Some(Site::new("main.rs:9")));
    }

    #[test]
    fn seeded_location_is_never_displaced_by_chain_markers() {
        let failure = Error::new("boom").at(Site::new("origin.rs:3"));
        let report = Report::of_at(Site::new("main.rs:9"), &failure);
        assert_eq!(report.location, Some(Site::new("main.rs:9")));
    }

    #[test]
    fn renders_the_documented_line_exactly() {
        let report = Report {
            severity: Severity::Warning,
            messages: vec!["disk full".into(), "retry exhausted".into()],
            location: Some(Site::new("io.c:42")),
            show_severity: true,
        };
        assert_eq!(report.render(), "Warning | disk full | retry exhausted | io.c:42");
    }

    #[test]
    fn default_severity_renders_as_error() {
        let report = Error::new("boom").report();
        assert_eq!(report.render(), "Error | boom");
    }

    #[test]
    fn hidden_severity_renders_messages_only() {
        let mut report = Error::new("boom").at(Site::new("a.rs:1")).report();
        report.show_severity = false;
        assert_eq!(report.render(), "boom | a.rs:1");
    }

    #[test]
    fn empty_report_renders_to_the_empty_string() {
        let mut report = Report::new();
        report.show_severity = false;
        assert_eq!(report.render(), "");
    }

    #[test]
    fn display_matches_render() {
        let report = Error::warning("boom").report();
        assert_eq!(report.to_string(), report.render());
    }
}
