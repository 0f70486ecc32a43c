/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing an expression or
/// converting it to postfix notation. Parse errors include unsupported
/// characters, unknown identifiers and unbalanced parentheses.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a postfix
/// sequence, such as division by zero, missing operands or an undefined
/// tangent.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error produced by [`crate::evaluate`].
///
/// The variant tells which phase failed; the message of the inner error is
/// shown verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Tokenizing or postfix conversion failed.
    Parse(ParseError),
    /// Evaluating the postfix sequence failed.
    Runtime(RuntimeError),
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
