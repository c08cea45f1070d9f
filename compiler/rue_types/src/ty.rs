//! The closed set of type shapes the diagnostic heuristics inspect.

use crate::symbols::{ClassId, MemberId, SymbolTable};

/// A type value, as seen by the diagnostic layer.
///
/// This is a closed sum type matched exhaustively: adding a shape is a
/// compile-time-checked change to every matcher. The heuristics only
/// inspect shapes; they never mutate them.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Type {
    /// A plain reference to a class, e.g. `String`.
    Class(ClassId),
    /// A self type parameter, bound to its defining type member.
    SelfTypeParam { definition: MemberId },
    /// A type literal used as a runtime value.
    Meta(Box<Type>),
    /// A parameterized generic, e.g. `List[String]`.
    Applied { class: ClassId, targs: Vec<Type> },
    /// A type that also admits `nil`, e.g. `String?`.
    Nilable(Box<Type>),
    /// The unknown type of untyped code; compatibility is a solver
    /// policy decision ([`crate::UntypedMode`]).
    Untyped,
    /// The empty type.
    Bottom,
}

impl Type {
    /// This type with its nilable variant stripped.
    ///
    /// `NilClass` on its own becomes [`Type::Bottom`], as does any
    /// nilable wrapper over it: a pure-nil type has nothing left once
    /// `nil` is removed. Types that do not admit `nil` pass through
    /// unchanged.
    #[must_use]
    pub fn drop_nil(&self) -> Type {
        match self {
            Type::Nilable(inner) => inner.drop_nil(),
            Type::Class(class) if *class == SymbolTable::NIL_CLASS => Type::Bottom,
            other => other.clone(),
        }
    }

    /// Check if this is the empty type.
    #[inline]
    pub fn is_bottom(&self) -> bool {
        matches!(self, Type::Bottom)
    }

    /// User-facing type text.
    pub fn show(&self, symbols: &SymbolTable) -> String {
        match self {
            Type::Class(class) => match symbols.attached_class(*class) {
                Some(attached) => format!("class_of({})", symbols.name(attached)),
                None => symbols.name(*class).to_owned(),
            },
            Type::SelfTypeParam { definition } => symbols.member_name(*definition).to_owned(),
            Type::Meta(inner) => format!("Type[{}]", inner.show(symbols)),
            Type::Applied { class, targs } => {
                let args: Vec<String> = targs.iter().map(|t| t.show(symbols)).collect();
                format!("{}[{}]", symbols.name(*class), args.join(", "))
            }
            Type::Nilable(inner) => format!("{}?", inner.show(symbols)),
            Type::Untyped => "untyped".to_owned(),
            Type::Bottom => "Never".to_owned(),
        }
    }

    /// Convenience constructor for a one-argument `List`.
    pub fn list_of(element: Type) -> Type {
        Type::Applied {
            class: SymbolTable::LIST,
            targs: vec![element],
        }
    }

    /// Convenience constructor for a nilable type.
    pub fn nilable(inner: Type) -> Type {
        Type::Nilable(Box::new(inner))
    }

    /// Convenience constructor for a type literal value.
    pub fn meta(inner: Type) -> Type {
        Type::Meta(Box::new(inner))
    }
}
