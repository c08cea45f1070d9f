//! Diagnostic records and error reporting for the Rue type checker.
//!
//! The type checker produces two kinds of diagnostics:
//!
//! - [`Error`]: a flat, single-message diagnostic anchored to one
//!   location
//! - [`ComplexError`]: a structured diagnostic with a numeric
//!   [`ErrorCode`], a header, and ordered [`ErrorSection`]s of
//!   location-anchored [`ErrorLine`]s
//!
//! Both render to a fixed textual format against an explicit
//! `&SourceMap`; the rendered text is the user-facing contract, so
//! rendering is pure and byte-deterministic.
//!
//! The [`ErrorCollector`] owns the buffering policy: flat errors are
//! either accumulated for a later [`drain`](ErrorCollector::drain) or
//! forwarded straight to the log sink, chosen once at construction.
//! Structured errors always bypass the buffer.
//!
//! [`DiagnosticBuilder`] is the accumulator handed to the mismatch
//! heuristics in `rue_types`: they append explanatory notes and
//! [`Autocorrect`] edit directives, and the owning error report decides
//! when to flush.

mod builder;
mod collector;
mod error;
mod error_code;

pub use builder::{Autocorrect, DiagnosticBuilder};
pub use collector::{ErrorCollector, ReportMode};
pub use error::{ComplexError, Error, ErrorLine, ErrorSection};
pub use error_code::ErrorCode;
