//! Source location primitives for the Rue compiler.
//!
//! Diagnostics in later phases are anchored to source positions through
//! three small types:
//!
//! - [`Span`]: a half-open byte range inside one file
//! - [`Loc`]: a file handle plus a span, with a `NONE` sentinel for
//!   diagnostics that have no source anchor
//! - [`SourceMap`]: the shared file table that resolves a [`Loc`] to a
//!   path, line/column positions, and source text
//!
//! A [`Loc`] never owns its file; every resolution goes through an
//! explicit `&SourceMap` so that rendering stays pure.

mod loc;
mod source_map;
mod span;

pub use loc::{FileId, Loc};
pub use source_map::{Pos, SourceMap};
pub use span::Span;
