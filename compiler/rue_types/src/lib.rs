//! Type shapes and type-mismatch diagnostics for the Rue type checker.
//!
//! This crate holds the pieces of the type system the diagnostic layer
//! inspects:
//!
//! - [`Type`]: a closed sum type over the recognized type shapes,
//!   matched exhaustively by the heuristics
//! - [`SymbolTable`]: classes, singleton-class links, type members, and
//!   the well-known symbols the heuristics compare against
//! - [`ConstraintSolver`]: the interface to the external subtype
//!   algorithm, with an [`UntypedMode`] policy for unknown types
//! - [`diagnostics`]: the ordered heuristic chains that explain a
//!   mismatch or propose an autocorrect
//!
//! The subtype algorithm itself and full symbol resolution live
//! elsewhere; everything here treats them as collaborators.

pub mod diagnostics;
mod solve;
mod symbols;
mod ty;

pub use solve::{ConstraintSolver, UntypedMode};
pub use symbols::{ClassId, MemberId, SymbolTable, ATTACHED_CLASS_NAME, LOOSE_BOOLEAN_NAME};
pub use ty::Type;
