#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while evaluating a postfix sequence.
pub enum RuntimeError {
    /// An operator or function found fewer values on the stack than it needs.
    InsufficientOperands {
        /// The operator symbol or function name.
        symbol: String,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// Tangent of an odd multiple of 90 degrees.
    UndefinedTangent {
        /// The argument, in degrees.
        degrees: f64,
    },
    /// The value stack did not end with exactly one value.
    MalformedExpression {
        /// Number of values left on the stack.
        values: usize,
    },
    /// A token that has no meaning in postfix notation, such as a parenthesis.
    UnexpectedToken {
        /// The token encountered.
        token: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsufficientOperands { symbol } => {
                write!(f, "Error: Insufficient operands for '{symbol}'.")
            },
            Self::DivisionByZero => write!(f, "Error: Division by zero."),
            Self::UndefinedTangent { degrees } => {
                write!(f, "Error: Tangent is undefined for {degrees} degrees.")
            },
            Self::MalformedExpression { values } => write!(f,
                                                           "Error: Malformed expression. Expected a single result, but {values} values remain."),
            Self::UnexpectedToken { token } => {
                write!(f, "Error: Unexpected token in postfix expression: {token}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
