//! The accumulator handed to mismatch heuristics.

use rue_ir::Loc;

/// A proposed source edit: replace the text at `loc` with `replacement`.
///
/// A zero-width `loc` (start == end) is a pure insertion. The label is
/// shown to the user; editors apply the substitution verbatim.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Autocorrect {
    pub label: String,
    pub loc: Loc,
    pub replacement: String,
}

/// Mutable accumulator for one in-flight diagnostic.
///
/// Heuristics append explanatory notes and [`Autocorrect`] directives;
/// the owning error report renders and flushes them once the mismatch
/// evaluation is done. One builder belongs to exactly one evaluation.
#[derive(Default, Debug)]
pub struct DiagnosticBuilder {
    notes: Vec<String>,
    autocorrects: Vec<Autocorrect>,
}

impl DiagnosticBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        DiagnosticBuilder::default()
    }

    /// Attach an explanatory note.
    pub fn add_note(&mut self, note: impl Into<String>) {
        self.notes.push(note.into());
    }

    /// Propose replacing the source at `loc` with `replacement`.
    pub fn replace_with(
        &mut self,
        label: impl Into<String>,
        loc: Loc,
        replacement: impl Into<String>,
    ) {
        self.autocorrects.push(Autocorrect {
            label: label.into(),
            loc,
            replacement: replacement.into(),
        });
    }

    /// Accumulated notes, in insertion order.
    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    /// Accumulated edit directives, in insertion order.
    pub fn autocorrects(&self) -> &[Autocorrect] {
        &self.autocorrects
    }

    /// Check whether nothing has been accumulated.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty() && self.autocorrects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rue_ir::{FileId, Span};

    #[test]
    fn accumulates_in_order() {
        let mut builder = DiagnosticBuilder::new();
        assert!(builder.is_empty());

        builder.add_note("first");
        builder.add_note("second");
        let loc = Loc::new(FileId::from_raw(0), Span::new(2, 2));
        builder.replace_with("Add `.compact`", loc, ".compact");

        assert_eq!(builder.notes(), ["first", "second"]);
        assert_eq!(builder.autocorrects().len(), 1);
        assert_eq!(builder.autocorrects()[0].label, "Add `.compact`");
        assert_eq!(builder.autocorrects()[0].loc, loc);
        assert!(builder.autocorrects()[0].loc.span.is_empty());
        assert!(!builder.is_empty());
    }
}
