use log::debug;
use logos::Logos;

use crate::{
    error::ParseError,
    token::{Function, Operator, Token},
};

/// A raw lexical unit, before numbers are parsed and unary minus is folded.
///
/// `Lexeme` only decides where one unit ends and the next begins. The
/// tokenizer turns a sequence of lexemes into classified [`Token`]s.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"\s+")]
pub enum Lexeme {
    /// A run of digits and dots, such as `42`, `2.5` or `.5`. The run is not
    /// validated here, so `1.2.3` is a single literal.
    #[regex(r"[0-9.]+", |lex| lex.slice().to_string())]
    Literal(String),
    /// A run of letters, such as `sin` or `foo`.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
    Word(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Splits an expression into raw lexemes.
///
/// # Errors
/// Returns `InvalidCharacter` for the first character that starts no lexeme.
/// Scanning stops there.
///
/// # Example
/// ```
/// use rpncalc::interpreter::lexer::{Lexeme, scan};
///
/// let lexemes = scan("2*(x)").unwrap();
/// assert_eq!(lexemes,
///            vec![Lexeme::Literal("2".to_string()),
///                 Lexeme::Star,
///                 Lexeme::LParen,
///                 Lexeme::Word("x".to_string()),
///                 Lexeme::RParen]);
/// ```
pub fn scan(expression: &str) -> Result<Vec<Lexeme>, ParseError> {
    let mut lexemes = Vec::new();
    let mut lexer = Lexeme::lexer(expression);

    while let Some(lexeme) = lexer.next() {
        if let Ok(lexeme) = lexeme {
            lexemes.push(lexeme);
        } else {
            let start = lexer.span().start;
            let character = expression[start..].chars().next().unwrap_or_default();
            return Err(ParseError::InvalidCharacter { character,
                                                      position: expression[..start].chars()
                                                                                   .count() });
        }
    }

    Ok(lexemes)
}

/// Converts an expression into a sequence of classified tokens.
///
/// Numbers are parsed once here, so later stages never look at text again.
/// Words naming a known function become [`Token::Function`]; any other word
/// is kept as [`Token::Identifier`] and rejected by the converter.
///
/// A `-` in prefix position (first in the input, or right after an operator
/// or `(`) that is directly followed by a numeric literal is merged with it
/// into one negative number. A prefix `-` followed by anything else stays an
/// operator, so `-(1 + 2)` and `-sin(30)` are not negated.
///
/// # Parameters
/// - `expression`: The infix expression text.
///
/// # Returns
/// The tokens in source order.
///
/// # Errors
/// - `InvalidCharacter` for a character outside the supported set.
/// - `InvalidToken` for a numeric literal that is not a valid number.
/// - `UnaryMinusAtEnd` for a prefix `-` with nothing after it.
///
/// # Example
/// ```
/// use rpncalc::{
///     interpreter::lexer::tokenize,
///     token::{Operator, Token},
/// };
///
/// let tokens = tokenize("-5 + 2").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number(-5.0), Token::Operator(Operator::Add), Token::Number(2.0)]);
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>, ParseError> {
    let lexemes = scan(expression)?;
    let mut tokens = Vec::with_capacity(lexemes.len());
    let mut index = 0;

    while index < lexemes.len() {
        let lexeme = &lexemes[index];

        if *lexeme == Lexeme::Minus && is_prefix_position(index, &lexemes) {
            match lexemes.get(index + 1) {
                Some(Lexeme::Literal(literal)) => {
                    tokens.push(Token::Number(-parse_number(literal)?));
                    index += 2;
                    continue;
                },
                Some(_) => {},
                None => return Err(ParseError::UnaryMinusAtEnd),
            }
        }

        tokens.push(classify(lexeme)?);
        index += 1;
    }

    debug!("tokenized {expression:?} into {tokens:?}");
    Ok(tokens)
}

/// Whether the lexeme at `index` starts an operand rather than following one.
fn is_prefix_position(index: usize, lexemes: &[Lexeme]) -> bool {
    match index.checked_sub(1).and_then(|i| lexemes.get(i)) {
        None => true,
        Some(previous) => matches!(previous,
                                   Lexeme::Plus
                                   | Lexeme::Minus
                                   | Lexeme::Star
                                   | Lexeme::Slash
                                   | Lexeme::LParen),
    }
}

fn classify(lexeme: &Lexeme) -> Result<Token, ParseError> {
    let token = match lexeme {
        Lexeme::Literal(literal) => Token::Number(parse_number(literal)?),
        Lexeme::Word(word) => {
            Function::from_name(word).map_or_else(|| Token::Identifier(word.clone()), Token::Function)
        },
        Lexeme::Plus => Token::Operator(Operator::Add),
        Lexeme::Minus => Token::Operator(Operator::Sub),
        Lexeme::Star => Token::Operator(Operator::Mul),
        Lexeme::Slash => Token::Operator(Operator::Div),
        Lexeme::LParen => Token::LeftParen,
        Lexeme::RParen => Token::RightParen,
    };
    Ok(token)
}

fn parse_number(literal: &str) -> Result<f64, ParseError> {
    literal.parse()
           .map_err(|_| ParseError::InvalidToken { token: literal.to_string() })
}
