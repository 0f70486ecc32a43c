use rpncalc::{
    error::ParseError,
    interpreter::lexer::tokenize,
    token::{Function, Operator, Token},
};

#[test]
fn numbers_operators_and_parentheses() {
    assert_eq!(tokenize("(12 + 3.5) * 2").unwrap(),
               vec![Token::LeftParen,
                    Token::Number(12.0),
                    Token::Operator(Operator::Add),
                    Token::Number(3.5),
                    Token::RightParen,
                    Token::Operator(Operator::Mul),
                    Token::Number(2.0)]);
}

#[test]
fn tokens_need_no_separating_whitespace() {
    assert_eq!(tokenize("8/2-1").unwrap(),
               vec![Token::Number(8.0),
                    Token::Operator(Operator::Div),
                    Token::Number(2.0),
                    Token::Operator(Operator::Sub),
                    Token::Number(1.0)]);
}

#[test]
fn function_names_are_classified() {
    assert_eq!(tokenize("tan(45)").unwrap(),
               vec![Token::Function(Function::Tan),
                    Token::LeftParen,
                    Token::Number(45.0),
                    Token::RightParen]);
}

#[test]
fn unknown_words_are_kept_as_identifiers() {
    assert_eq!(tokenize("foo + Sin").unwrap(),
               vec![Token::Identifier("foo".to_string()),
                    Token::Operator(Operator::Add),
                    Token::Identifier("Sin".to_string())]);
}

#[test]
fn prefix_minus_merges_with_following_number() {
    assert_eq!(tokenize("-5").unwrap(), vec![Token::Number(-5.0)]);
    assert_eq!(tokenize("2 * -3").unwrap(),
               vec![Token::Number(2.0), Token::Operator(Operator::Mul), Token::Number(-3.0)]);
    assert_eq!(tokenize("(-1.5)").unwrap(),
               vec![Token::LeftParen, Token::Number(-1.5), Token::RightParen]);
    assert_eq!(tokenize("1 - -1").unwrap(),
               vec![Token::Number(1.0), Token::Operator(Operator::Sub), Token::Number(-1.0)]);
}

#[test]
fn infix_minus_stays_an_operator() {
    assert_eq!(tokenize("4 -1").unwrap(),
               vec![Token::Number(4.0), Token::Operator(Operator::Sub), Token::Number(1.0)]);
    assert_eq!(tokenize("(4) - 1").unwrap(),
               vec![Token::LeftParen,
                    Token::Number(4.0),
                    Token::RightParen,
                    Token::Operator(Operator::Sub),
                    Token::Number(1.0)]);
}

#[test]
fn prefix_minus_before_group_or_function_stays_an_operator() {
    assert_eq!(tokenize("-(2)").unwrap(),
               vec![Token::Operator(Operator::Sub),
                    Token::LeftParen,
                    Token::Number(2.0),
                    Token::RightParen]);
    assert_eq!(tokenize("-cos(0)").unwrap(),
               vec![Token::Operator(Operator::Sub),
                    Token::Function(Function::Cos),
                    Token::LeftParen,
                    Token::Number(0.0),
                    Token::RightParen]);
    assert_eq!(tokenize("--1").unwrap(),
               vec![Token::Operator(Operator::Sub), Token::Number(-1.0)]);
}

#[test]
fn trailing_prefix_minus_is_error() {
    assert_eq!(tokenize("-"), Err(ParseError::UnaryMinusAtEnd));
    assert_eq!(tokenize("3 * -"), Err(ParseError::UnaryMinusAtEnd));
    assert_eq!(tokenize("(-"), Err(ParseError::UnaryMinusAtEnd));
}

#[test]
fn trailing_infix_minus_is_not_a_lexical_error() {
    assert_eq!(tokenize("3 -").unwrap(),
               vec![Token::Number(3.0), Token::Operator(Operator::Sub)]);
}

#[test]
fn invalid_character_reports_first_occurrence() {
    assert_eq!(tokenize("3 ^ 4 $"),
               Err(ParseError::InvalidCharacter { character: '^',
                                                  position:  2, }));
    assert_eq!(tokenize("1 + 2,5"),
               Err(ParseError::InvalidCharacter { character: ',',
                                                  position:  5, }));
}

#[test]
fn invalid_character_position_counts_characters() {
    assert_eq!(tokenize("π"),
               Err(ParseError::InvalidCharacter { character: 'π',
                                                  position:  0, }));
    assert_eq!(tokenize("1 + é"),
               Err(ParseError::InvalidCharacter { character: 'é',
                                                  position:  4, }));
}

#[test]
fn malformed_number_is_invalid_token() {
    assert_eq!(tokenize("1.2.3"),
               Err(ParseError::InvalidToken { token: "1.2.3".to_string() }));
    assert_eq!(tokenize("- ."),
               Err(ParseError::InvalidToken { token: ".".to_string() }));
}

#[test]
fn empty_input_has_no_tokens() {
    assert!(tokenize("").unwrap().is_empty());
    assert!(tokenize(" \t ").unwrap().is_empty());
}
