//! Interface to the external constraint solver.

use crate::symbols::SymbolTable;
use crate::ty::Type;

/// Policy for [`Type::Untyped`] during a subtype query.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UntypedMode {
    /// Untyped is compatible with everything (gradual typing).
    AlwaysCompatible,
    /// Untyped is only compatible with itself.
    Strict,
}

/// The subtype algorithm, under whatever constraint the caller is
/// currently solving.
///
/// The diagnostic heuristics never implement subtyping themselves; they
/// ask this collaborator. Constraint state lives inside the
/// implementation, which is why queries take `&mut self`.
pub trait ConstraintSolver {
    /// Is `sub` a valid subtype of `sup` under the current constraint?
    fn is_subtype(
        &mut self,
        symbols: &SymbolTable,
        sub: &Type,
        sup: &Type,
        mode: UntypedMode,
    ) -> bool;
}
