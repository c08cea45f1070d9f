//! The shared file table.
//!
//! Every [`Loc`] is resolved against a `SourceMap`: paths, line/column
//! positions, and source snippets all come from here. Line starts are
//! pre-computed at registration time so position lookups are a binary
//! search instead of a linear scan.

use crate::loc::{FileId, Loc};

/// A 1-based line/column position.
///
/// Columns count characters (not bytes) from the line start.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Pos {
    pub line: u32,
    pub col: u32,
}

/// One registered source file.
#[derive(Clone, Debug)]
struct SourceFile {
    path: String,
    text: String,
    /// Byte offset of each line start; `line_offsets[0]` is always 0.
    line_offsets: Vec<u32>,
}

impl SourceFile {
    fn new(path: String, text: String) -> Self {
        let mut line_offsets = vec![0u32];
        for (i, byte) in text.as_bytes().iter().enumerate() {
            if *byte == b'\n' {
                line_offsets.push((i + 1) as u32);
            }
        }
        SourceFile {
            path,
            text,
            line_offsets,
        }
    }

    /// 1-based (line, col) for a byte offset, by binary search over line
    /// starts.
    fn pos(&self, offset: u32) -> Pos {
        let line_idx = match self.line_offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        let line_start = self.line_offsets.get(line_idx).copied().unwrap_or(0) as usize;
        let offset = (offset as usize).min(self.text.len());
        let col = u32::try_from(self.text[line_start..offset].chars().count())
            .unwrap_or(u32::MAX - 1)
            + 1;
        Pos {
            line: (line_idx as u32) + 1,
            col,
        }
    }
}

/// The file table shared by a whole check run.
///
/// Registration is append-only; a [`FileId`] handed out once stays valid
/// for the lifetime of the map. Resolving a [`FileId`] that was never
/// registered is a caller contract violation.
#[derive(Clone, Debug, Default)]
pub struct SourceMap {
    files: Vec<SourceFile>,
}

impl SourceMap {
    /// Create an empty file table.
    pub fn new() -> Self {
        SourceMap::default()
    }

    /// Register a file and get its handle.
    pub fn add_file(&mut self, path: impl Into<String>, text: impl Into<String>) -> FileId {
        let id = FileId::from_raw(self.files.len() as u32);
        self.files.push(SourceFile::new(path.into(), text.into()));
        id
    }

    /// Path of a registered file.
    pub fn path(&self, file: FileId) -> &str {
        &self.files[file.raw() as usize].path
    }

    /// Full text of a registered file.
    pub fn text(&self, file: FileId) -> &str {
        &self.files[file.raw() as usize].text
    }

    /// The source text a location covers. Spans reaching past the end of
    /// the file are clamped.
    pub fn snippet(&self, loc: Loc) -> &str {
        let text = self.text(loc.file);
        let start = (loc.span.start as usize).min(text.len());
        let end = (loc.span.end as usize).min(text.len());
        &text[start..end.max(start)]
    }

    /// Resolve a location to its (start, end) positions.
    ///
    /// The caller guarantees `loc.exists()`; passing `Loc::NONE` or an
    /// unregistered file is a contract violation.
    pub fn position(&self, loc: Loc) -> (Pos, Pos) {
        let file = &self.files[loc.file.raw() as usize];
        (file.pos(loc.span.start), file.pos(loc.span.end))
    }

    /// Number of registered files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if no files are registered.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Span;
    use pretty_assertions::assert_eq;

    fn map_with(text: &str) -> (SourceMap, FileId) {
        let mut sources = SourceMap::new();
        let file = sources.add_file("test.rue", text);
        (sources, file)
    }

    #[test]
    fn position_single_line() {
        let (sources, file) = map_with("hello world");
        let (begin, end) = sources.position(Loc::new(file, Span::new(0, 5)));
        assert_eq!(begin, Pos { line: 1, col: 1 });
        assert_eq!(end, Pos { line: 1, col: 6 });
    }

    #[test]
    fn position_multiple_lines() {
        let (sources, file) = map_with("abc\ndefgh\nij");
        let (begin, end) = sources.position(Loc::new(file, Span::new(4, 10)));
        assert_eq!(begin, Pos { line: 2, col: 1 });
        assert_eq!(end, Pos { line: 3, col: 1 });
    }

    #[test]
    fn position_at_line_start_offset() {
        let (sources, file) = map_with("line1\nline2\nline3");
        let (begin, _) = sources.position(Loc::new(file, Span::new(6, 6)));
        assert_eq!(begin, Pos { line: 2, col: 1 });
        let (begin, _) = sources.position(Loc::new(file, Span::new(12, 12)));
        assert_eq!(begin, Pos { line: 3, col: 1 });
    }

    #[test]
    fn columns_count_chars_not_bytes() {
        // Greek letters are 2 bytes each.
        let (sources, file) = map_with("αβγ\nδε");
        let (begin, end) = sources.position(Loc::new(file, Span::new(2, 7)));
        assert_eq!(begin, Pos { line: 1, col: 2 });
        assert_eq!(end, Pos { line: 2, col: 1 });
    }

    #[test]
    fn position_clamps_past_end() {
        let (sources, file) = map_with("ab");
        let (_, end) = sources.position(Loc::new(file, Span::new(0, 99)));
        assert_eq!(end, Pos { line: 1, col: 3 });
    }

    #[test]
    fn snippet_extracts_span_text() {
        let (sources, file) = map_with("let x = f(y)\n");
        assert_eq!(sources.snippet(Loc::new(file, Span::new(8, 12))), "f(y)");
        assert_eq!(sources.snippet(Loc::new(file, Span::new(8, 99))), "f(y)\n");
    }

    #[test]
    fn paths_and_text_resolve() {
        let mut sources = SourceMap::new();
        let a = sources.add_file("a.rue", "aa");
        let b = sources.add_file("b.rue", "bb");
        assert_eq!(sources.path(a), "a.rue");
        assert_eq!(sources.path(b), "b.rue");
        assert_eq!(sources.text(b), "bb");
        assert_eq!(sources.len(), 2);
        assert!(!sources.is_empty());
    }

    #[test]
    fn empty_file_has_one_line() {
        let (sources, file) = map_with("");
        let (begin, end) = sources.position(Loc::new(file, Span::new(0, 0)));
        assert_eq!(begin, Pos { line: 1, col: 1 });
        assert_eq!(end, begin);
    }
}
