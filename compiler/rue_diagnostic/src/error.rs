//! Diagnostic record types and their textual rendering.
//!
//! The rendered formats are bit-exact contracts:
//!
//! ```text
//! flat error:     path:L1:C1-L2:C2 message
//! section line:   path:L1[-L2] message\n<range anchor>
//! complex error:  <range anchor>\n[<code>] header\n\n<section>\n\n<section>...
//! ```
//!
//! Locations that are `Loc::NONE` render with the `???:` anchor.

use rue_ir::{Loc, SourceMap};

use crate::ErrorCode;

/// A flat, single-message diagnostic.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "errors should be reported, not silently dropped"]
pub struct Error {
    pub loc: Loc,
    pub formatted: String,
}

impl Error {
    /// Create a new flat error.
    pub fn new(loc: Loc, formatted: impl Into<String>) -> Self {
        Error {
            loc,
            formatted: formatted.into(),
        }
    }

    /// Render as `<range anchor> <message>`.
    pub fn render(&self, sources: &SourceMap) -> String {
        format!("{} {}", self.loc.range_anchor(sources), self.formatted)
    }
}

/// One location-anchored message inside an [`ErrorSection`].
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ErrorLine {
    pub loc: Loc,
    pub formatted: String,
}

impl ErrorLine {
    /// Create a new section line.
    pub fn new(loc: Loc, formatted: impl Into<String>) -> Self {
        ErrorLine {
            loc,
            formatted: formatted.into(),
        }
    }

    /// Render as `<line anchor> <message>` followed by the full range
    /// anchor on its own line; without a location, just `???: <message>`.
    pub fn render(&self, sources: &SourceMap) -> String {
        if self.loc.is_none() {
            format!("???: {}", self.formatted)
        } else {
            format!(
                "{} {}\n{}",
                self.loc.line_anchor(sources),
                self.formatted,
                self.loc.range_anchor(sources)
            )
        }
    }
}

/// A header plus an ordered run of [`ErrorLine`]s.
///
/// Insertion order is rendering order.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ErrorSection {
    pub header: String,
    pub lines: Vec<ErrorLine>,
}

impl ErrorSection {
    /// Create a new section.
    pub fn new(header: impl Into<String>, lines: Vec<ErrorLine>) -> Self {
        ErrorSection {
            header: header.into(),
            lines,
        }
    }

    /// Render the header line, then each contained line's render, each
    /// terminated by a line break.
    pub fn render(&self, sources: &SourceMap) -> String {
        let mut buf = String::new();
        buf.push_str(&self.header);
        buf.push('\n');
        for line in &self.lines {
            buf.push_str(&line.render(sources));
            buf.push('\n');
        }
        buf
    }
}

/// A structured, multi-part diagnostic: main message plus contextual
/// sections shown together.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "errors should be reported, not silently dropped"]
pub struct ComplexError {
    pub code: ErrorCode,
    pub loc: Loc,
    pub header: String,
    pub sections: Vec<ErrorSection>,
}

impl ComplexError {
    /// Create a new structured error.
    pub fn new(
        code: ErrorCode,
        loc: Loc,
        header: impl Into<String>,
        sections: Vec<ErrorSection>,
    ) -> Self {
        ComplexError {
            code,
            loc,
            header: header.into(),
            sections,
        }
    }

    /// Render the range anchor (when the location exists), the
    /// `[<code>] <header>` line, then the sections separated by exactly
    /// one blank line.
    pub fn render(&self, sources: &SourceMap) -> String {
        let mut buf = String::new();
        if self.loc.exists() {
            buf.push_str(&self.loc.range_anchor(sources));
            buf.push('\n');
        }
        buf.push_str(&format!("[{}] {}\n", self.code, self.header));
        let mut first = true;
        for section in &self.sections {
            if !first {
                buf.push('\n');
            }
            first = false;
            buf.push_str(&section.render(sources));
        }
        buf
    }
}
