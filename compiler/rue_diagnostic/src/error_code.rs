use std::fmt;

/// Error codes for type-checker diagnostics.
///
/// The numeric code is stable and user-facing: it appears as the
/// `[<code>]` prefix of structured errors and in documentation links.
/// Codes are grouped by phase:
/// - 5xxx: resolver errors
/// - 7xxx: inference and subtyping errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u16)]
pub enum ErrorCode {
    /// Constant or method could not be resolved.
    UnknownName = 5001,
    /// Expression type does not match the expected type.
    TypeMismatch = 7002,
    /// Wrong argument types for a method call.
    MethodArgumentMismatch = 7004,
    /// Method does not exist on the receiver type.
    UnknownMethod = 7007,
    /// Returned value does not match the declared return type.
    ReturnTypeMismatch = 7010,
}

impl ErrorCode {
    /// The stable numeric code.
    #[inline]
    pub const fn code(self) -> u16 {
        self as u16
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn displays_bare_number() {
        assert_eq!(ErrorCode::TypeMismatch.to_string(), "7002");
        assert_eq!(ErrorCode::UnknownName.to_string(), "5001");
    }

    #[test]
    fn codes_are_distinct() {
        assert_ne!(
            ErrorCode::TypeMismatch.code(),
            ErrorCode::ReturnTypeMismatch.code()
        );
    }
}
