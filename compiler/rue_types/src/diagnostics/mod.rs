//! Type-mismatch diagnostic heuristics.
//!
//! Two independent, ordered rule chains run after a subtype check has
//! already failed:
//!
//! - [`explain_type_mismatch`] attaches at most one explanatory note to
//!   the [`DiagnosticBuilder`]
//! - [`maybe_autocorrect`] proposes at most one source edit
//!
//! Each chain is a priority list, not a set: rules are tried in a fixed
//! order and evaluation stops at the first rule that claims the
//! mismatch, which may happen without an edit being proposed. A rule
//! that cannot proceed (missing shape, absent configuration) simply
//! does not apply; reaching the end of a chain without a match is a
//! normal, silent outcome. Callers must not assume a note or suggestion
//! is always produced.

use rue_diagnostic::DiagnosticBuilder;
use rue_ir::{Loc, SourceMap};

use crate::solve::{ConstraintSolver, UntypedMode};
use crate::symbols::{SymbolTable, ATTACHED_CLASS_NAME, LOOSE_BOOLEAN_NAME};
use crate::ty::Type;

/// Explicit context for one mismatch evaluation: the symbol table, the
/// file table, and the configured unsafe escape hatch (if any).
///
/// No ambient state: everything the heuristics read comes in here.
#[derive(Copy, Clone)]
pub struct TypeCtx<'a> {
    pub symbols: &'a SymbolTable,
    pub sources: &'a SourceMap,
    /// Name of the configured unsafe-wrap function (e.g. `Unsafe.cast`).
    /// When present, the wrap-in-unsafe rule fires for any mismatch the
    /// array-compact rule did not claim.
    pub suggest_unsafe: Option<&'a str>,
}

/// One rule of the explanation chain.
///
/// Returns `true` when the rule fired (a note was added) so the chain
/// stops.
trait ExplainRule {
    fn apply(
        &self,
        cx: &TypeCtx<'_>,
        builder: &mut DiagnosticBuilder,
        expected: &Type,
        got: &Type,
    ) -> bool;
}

/// The mismatch being repaired, as seen by the autocorrect rules.
struct Mismatch<'a> {
    loc: Loc,
    expected: &'a Type,
    actual: &'a Type,
}

/// One rule of the autocorrect chain.
///
/// Returns `true` when the rule claimed the mismatch so the chain
/// stops. A claiming rule does not always propose an edit: the boolean
/// rule claims every boolean-ish expectation even when no edit fits.
trait AutocorrectRule {
    fn apply(
        &self,
        cx: &TypeCtx<'_>,
        solver: &mut dyn ConstraintSolver,
        builder: &mut DiagnosticBuilder,
        mismatch: &Mismatch<'_>,
    ) -> bool;
}

/// Expected the attached class of a singleton, got a fixed class
/// reference.
///
/// The self type narrows per-subclass, so the fixed class is not
/// specific enough. Fires only when the singleton class reachable from
/// the actual class is exactly the owner of the expected parameter's
/// definition.
struct AttachedClassHint;

impl ExplainRule for AttachedClassHint {
    fn apply(
        &self,
        cx: &TypeCtx<'_>,
        builder: &mut DiagnosticBuilder,
        expected: &Type,
        got: &Type,
    ) -> bool {
        let (Type::SelfTypeParam { definition }, Type::Class(got_class)) = (expected, got) else {
            return false;
        };
        if cx.symbols.member_name(*definition) != ATTACHED_CLASS_NAME {
            return false;
        }
        let Some(singleton) = cx.symbols.lookup_singleton_class(*got_class) else {
            return false;
        };
        if singleton != cx.symbols.member_owner(*definition) {
            return false;
        }

        let got_str = got.show(cx.symbols);
        let expected_str = expected.show(cx.symbols);
        builder.add_note(format!(
            "`{got_str}` is incompatible with `{expected_str}` because when this method is \
             called on a subclass `{expected_str}` will represent a more specific subclass, \
             meaning `{got_str}` will not be specific enough. See \
             https://rue-lang.org/docs/attached-class for more."
        ));
        true
    }
}

/// A type literal appeared where a runtime value was expected.
struct TypeAsValueHint;

impl ExplainRule for TypeAsValueHint {
    fn apply(
        &self,
        _cx: &TypeCtx<'_>,
        builder: &mut DiagnosticBuilder,
        expected: &Type,
        got: &Type,
    ) -> bool {
        if !matches!(got, Type::Meta(_)) || matches!(expected, Type::Meta(_)) {
            return false;
        }
        builder.add_note(
            "It looks like you're using Rue type syntax in a runtime value position.\n    \
             If you really mean to use types as values, use `coerce` to hide the type syntax \
             from the type checker.\n    \
             Otherwise, you're likely using the type system in a way it wasn't meant to be used.",
        );
        true
    }
}

/// Expected a list of `T` but got a list of nilable `T`: suggest
/// appending `.compact`.
struct ArrayCompact;

impl AutocorrectRule for ArrayCompact {
    fn apply(
        &self,
        cx: &TypeCtx<'_>,
        solver: &mut dyn ConstraintSolver,
        builder: &mut DiagnosticBuilder,
        mismatch: &Mismatch<'_>,
    ) -> bool {
        let (
            Type::Applied {
                class: expected_class,
                targs: expected_targs,
            },
            Type::Applied {
                class: actual_class,
                targs: actual_targs,
            },
        ) = (mismatch.expected, mismatch.actual)
        else {
            return false;
        };

        if !cx.symbols.derives_from(*expected_class, SymbolTable::LIST)
            || !cx.symbols.derives_from(*actual_class, SymbolTable::LIST)
        {
            return false;
        }
        let ([expected_elem], [actual_elem]) =
            (expected_targs.as_slice(), actual_targs.as_slice())
        else {
            return false;
        };

        let without_nil = actual_elem.drop_nil();
        if without_nil.is_bottom() {
            return false;
        }
        if !solver.is_subtype(
            cx.symbols,
            &without_nil,
            expected_elem,
            UntypedMode::AlwaysCompatible,
        ) {
            return false;
        }

        // Zero-width insertion at the end of the expression.
        builder.replace_with("Add `.compact`", mismatch.loc.at_end(), ".compact");
        true
    }
}

/// The global escape hatch: wrap the whole expression in the configured
/// unsafe function.
struct UnsafeWrap;

impl AutocorrectRule for UnsafeWrap {
    fn apply(
        &self,
        cx: &TypeCtx<'_>,
        _solver: &mut dyn ConstraintSolver,
        builder: &mut DiagnosticBuilder,
        mismatch: &Mismatch<'_>,
    ) -> bool {
        let Some(name) = cx.suggest_unsafe else {
            return false;
        };
        let Some(source) = mismatch.loc.source(cx.sources) else {
            return false;
        };
        builder.replace_with(
            format!("Wrap in `{name}`"),
            mismatch.loc,
            format!("{name}({source})"),
        );
        true
    }
}

/// The actual type is nilable but otherwise fits: suggest asserting
/// non-nil with `must`.
struct MustWrap;

impl AutocorrectRule for MustWrap {
    fn apply(
        &self,
        cx: &TypeCtx<'_>,
        solver: &mut dyn ConstraintSolver,
        builder: &mut DiagnosticBuilder,
        mismatch: &Mismatch<'_>,
    ) -> bool {
        let without_nil = mismatch.actual.drop_nil();
        if without_nil.is_bottom() {
            return false;
        }
        if !solver.is_subtype(
            cx.symbols,
            &without_nil,
            mismatch.expected,
            UntypedMode::AlwaysCompatible,
        ) {
            return false;
        }
        let Some(source) = mismatch.loc.source(cx.sources) else {
            return false;
        };
        builder.replace_with("Wrap in `must`", mismatch.loc, format!("must({source})"));
        true
    }
}

/// A loose `Boolean` where the strict built-in boolean was expected:
/// suggest double negation.
///
/// Claims every mismatch whose expected type is a subtype of `Bool`;
/// the edit itself is only proposed when the actual type is exactly the
/// root-level `Boolean` alias. Later rules assume a non-boolean
/// context, so a boolean expectation ends the chain either way.
struct DoubleBang;

impl AutocorrectRule for DoubleBang {
    fn apply(
        &self,
        cx: &TypeCtx<'_>,
        solver: &mut dyn ConstraintSolver,
        builder: &mut DiagnosticBuilder,
        mismatch: &Mismatch<'_>,
    ) -> bool {
        if !solver.is_subtype(
            cx.symbols,
            mismatch.expected,
            &Type::Class(SymbolTable::BOOL),
            UntypedMode::AlwaysCompatible,
        ) {
            return false;
        }
        if let Type::Class(actual_class) = mismatch.actual {
            if cx.symbols.lookup_class(SymbolTable::ROOT, LOOSE_BOOLEAN_NAME)
                == Some(*actual_class)
            {
                if let Some(source) = mismatch.loc.source(cx.sources) {
                    builder.replace_with("Prepend `!!`", mismatch.loc, format!("!!({source})"));
                }
            }
        }
        true
    }
}

/// A type literal where a compatible runtime value was expected:
/// suggest coercing it to a value.
struct CoerceTypeValue;

impl AutocorrectRule for CoerceTypeValue {
    fn apply(
        &self,
        cx: &TypeCtx<'_>,
        solver: &mut dyn ConstraintSolver,
        builder: &mut DiagnosticBuilder,
        mismatch: &Mismatch<'_>,
    ) -> bool {
        if !matches!(mismatch.actual, Type::Meta(_)) || matches!(mismatch.expected, Type::Meta(_))
        {
            return false;
        }
        if !solver.is_subtype(
            cx.symbols,
            &Type::Class(SymbolTable::TYPE_OBJECT),
            mismatch.expected,
            UntypedMode::AlwaysCompatible,
        ) {
            return false;
        }
        let Some(source) = mismatch.loc.source(cx.sources) else {
            return false;
        };
        builder.replace_with("Wrap in `coerce`", mismatch.loc, format!("coerce({source})"));
        true
    }
}

/// Explanation rules, in priority order.
static EXPLAIN_RULES: &[&(dyn ExplainRule + Sync)] = &[&AttachedClassHint, &TypeAsValueHint];

/// Autocorrect rules, in priority order. `UnsafeWrap` fires for any
/// mismatch once configured, so it suppresses everything after it; it
/// deliberately runs after `ArrayCompact`.
static AUTOCORRECT_RULES: &[&(dyn AutocorrectRule + Sync)] = &[
    &ArrayCompact,
    &UnsafeWrap,
    &MustWrap,
    &DoubleBang,
    &CoerceTypeValue,
];

/// Attach at most one targeted note explaining why `got` is not a
/// subtype of `expected`.
///
/// No match is a silent no-op.
pub fn explain_type_mismatch(
    cx: &TypeCtx<'_>,
    builder: &mut DiagnosticBuilder,
    expected: &Type,
    got: &Type,
) {
    for rule in EXPLAIN_RULES {
        if rule.apply(cx, builder, expected, got) {
            return;
        }
    }
}

/// Propose at most one source edit that would make the mismatched
/// expression type-check.
///
/// Requires a real location (the edit needs source text to wrap); with
/// `Loc::NONE` nothing is proposed. No match is a silent no-op.
pub fn maybe_autocorrect(
    cx: &TypeCtx<'_>,
    solver: &mut dyn ConstraintSolver,
    builder: &mut DiagnosticBuilder,
    loc: Loc,
    expected: &Type,
    actual: &Type,
) {
    if !loc.exists() {
        return;
    }
    let mismatch = Mismatch {
        loc,
        expected,
        actual,
    };
    for rule in AUTOCORRECT_RULES {
        if rule.apply(cx, solver, builder, &mismatch) {
            return;
        }
    }
}
