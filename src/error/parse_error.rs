#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing an expression or
/// converting it to postfix notation.
pub enum ParseError {
    /// Found a character outside the supported set.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Zero-based character index in the expression.
        position:  usize,
    },
    /// A unary minus in prefix position with nothing after it.
    UnaryMinusAtEnd,
    /// A word or literal that is neither a number nor a known function.
    InvalidToken {
        /// The text of the token.
        token: String,
    },
    /// A closing parenthesis `)` without a matching `(`.
    UnmatchedClosingParen,
    /// An opening parenthesis `(` that was never closed.
    UnmatchedOpeningParen,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character, position } => {
                write!(f, "Error at position {position}: Invalid character '{character}'.")
            },
            Self::UnaryMinusAtEnd => write!(f, "Error: Unary minus at end of expression."),
            Self::InvalidToken { token } => write!(f, "Error: Invalid token: {token}."),
            Self::UnmatchedClosingParen => write!(f, "Error: Unmatched closing parenthesis."),
            Self::UnmatchedOpeningParen => write!(f, "Error: Unmatched opening parenthesis."),
        }
    }
}

impl std::error::Error for ParseError {}
