//! File handles and location anchors.

use std::fmt;

use crate::source_map::SourceMap;
use crate::span::Span;

/// Handle to a file registered in a [`SourceMap`].
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct FileId(u32);

impl FileId {
    /// Sentinel for "no file" (see [`Loc::NONE`]).
    pub const NONE: FileId = FileId(u32::MAX);

    /// Create from a raw index.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        FileId(raw)
    }

    /// Get the raw index.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FileId({})", self.0)
    }
}

/// A source location: a file handle plus a byte span within it.
///
/// Locations are lightweight and immutable. They never own the file;
/// callers resolve them against the shared [`SourceMap`]. Diagnostics
/// without a source anchor use [`Loc::NONE`].
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Loc {
    pub file: FileId,
    pub span: Span,
}

impl Loc {
    /// The "no location" sentinel.
    pub const NONE: Loc = Loc {
        file: FileId::NONE,
        span: Span::DUMMY,
    };

    /// Create a new location.
    #[inline]
    pub const fn new(file: FileId, span: Span) -> Self {
        Loc { file, span }
    }

    /// Check if this is the `NONE` sentinel.
    #[inline]
    pub fn is_none(&self) -> bool {
        self.file == FileId::NONE
    }

    /// Check if this location points into a real file.
    #[inline]
    pub fn exists(&self) -> bool {
        !self.is_none()
    }

    /// A zero-width location at this location's end offset.
    #[inline]
    #[must_use]
    pub fn at_end(self) -> Loc {
        Loc {
            file: self.file,
            span: self.span.at_end(),
        }
    }

    /// The source text this location covers, or `None` for [`Loc::NONE`].
    pub fn source<'a>(&self, sources: &'a SourceMap) -> Option<&'a str> {
        if self.is_none() {
            return None;
        }
        Some(sources.snippet(*self))
    }

    /// Render the full range anchor: `path:startLine:startCol-endLine:endCol`.
    ///
    /// The `NONE` sentinel renders as the literal `???:`.
    pub fn range_anchor(&self, sources: &SourceMap) -> String {
        if self.is_none() {
            return "???:".to_owned();
        }
        let (begin, end) = sources.position(*self);
        format!(
            "{}:{}:{}-{}:{}",
            sources.path(self.file),
            begin.line,
            begin.col,
            end.line,
            end.col
        )
    }

    /// Render the line anchor: `path:startLine`, or `path:startLine-endLine`
    /// when the location spans multiple lines.
    ///
    /// The `NONE` sentinel renders as the literal `???:`.
    pub fn line_anchor(&self, sources: &SourceMap) -> String {
        if self.is_none() {
            return "???:".to_owned();
        }
        let (begin, end) = sources.position(*self);
        if begin.line == end.line {
            format!("{}:{}", sources.path(self.file), begin.line)
        } else {
            format!("{}:{}-{}", sources.path(self.file), begin.line, end.line)
        }
    }
}

impl fmt::Debug for Loc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "Loc(none)")
        } else {
            write!(f, "Loc({:?}, {:?})", self.file, self.span)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn none_sentinel() {
        assert!(Loc::NONE.is_none());
        assert!(!Loc::NONE.exists());
        let loc = Loc::new(FileId::from_raw(0), Span::new(0, 1));
        assert!(loc.exists());
    }

    #[test]
    fn none_anchors_render_placeholder() {
        let sources = SourceMap::default();
        assert_eq!(Loc::NONE.range_anchor(&sources), "???:");
        assert_eq!(Loc::NONE.line_anchor(&sources), "???:");
        assert_eq!(Loc::NONE.source(&sources), None);
    }

    #[test]
    fn range_anchor_single_line() {
        let mut sources = SourceMap::default();
        let file = sources.add_file("f", "ab boom cd");
        let loc = Loc::new(file, Span::new(3, 7));
        assert_eq!(loc.range_anchor(&sources), "f:1:4-1:8");
        assert_eq!(loc.source(&sources), Some("boom"));
    }

    #[test]
    fn line_anchor_collapses_same_line() {
        let mut sources = SourceMap::default();
        let file = sources.add_file("lib/a.rue", "one\ntwo\nthree\n");
        let same = Loc::new(file, Span::new(4, 7));
        assert_eq!(same.line_anchor(&sources), "lib/a.rue:2");
        let multi = Loc::new(file, Span::new(0, 9));
        assert_eq!(multi.line_anchor(&sources), "lib/a.rue:1-3");
    }

    #[test]
    fn at_end_stays_in_file() {
        let loc = Loc::new(FileId::from_raw(2), Span::new(3, 9));
        let end = loc.at_end();
        assert_eq!(end.file, loc.file);
        assert_eq!(end.span, Span::new(9, 9));
    }
}
