/// The binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

/// How operators of equal precedence group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`.
    Left,
    /// `a ^ b ^ c` would group as `a ^ (b ^ c)`.
    Right,
}

impl Operator {
    /// Returns the binding strength of the operator. Higher binds tighter.
    ///
    /// # Example
    /// ```
    /// use rpncalc::token::Operator;
    ///
    /// assert!(Operator::Mul.precedence() > Operator::Add.precedence());
    /// assert_eq!(Operator::Sub.precedence(), Operator::Add.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    /// Every supported operator is left-associative.
    #[must_use]
    pub const fn associativity(self) -> Associativity {
        Associativity::Left
    }

    /// The character the operator is written with.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The built-in trigonometric functions. Each takes one argument in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    /// `sin`
    Sin,
    /// `cos`
    Cos,
    /// `tan`
    Tan,
}

impl Function {
    /// Looks up a function by its exact (lowercase) name.
    ///
    /// # Example
    /// ```
    /// use rpncalc::token::Function;
    ///
    /// assert_eq!(Function::from_name("cos"), Some(Function::Cos));
    /// assert_eq!(Function::from_name("COS"), None);
    /// assert_eq!(Function::from_name("sqrt"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            _ => None,
        }
    }

    /// The name the function is called by.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
        }
    }
}

impl std::fmt::Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A classified lexical token.
///
/// Produced by the tokenizer and consumed by the postfix converter. A postfix
/// sequence only ever holds `Number`, `Operator` and `Function` tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A numeric literal. Negative literals produced by unary minus carry their
    /// sign here.
    Number(f64),
    /// A binary operator.
    Operator(Operator),
    /// A known function name.
    Function(Function),
    /// A word that names no known function. Rejected during conversion.
    Identifier(String),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value:?}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Function(function) => write!(f, "{function}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
        }
    }
}
