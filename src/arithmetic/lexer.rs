use logos::Logos;

use crate::{arithmetic::parser::ParseResult, ast::LiteralValue, error::ParseError};

/// Represents a lexical token of an arithmetic parameter expression.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Whitespace is skipped, so `"1 + 2"` and `"1+2"` lex identically.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5`, `2.0` or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", parse_float)]
    #[regex(r"[0-9]+", parse_integer)]
    Number(LiteralValue),
    /// Names, such as an unbound parameter `x`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
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

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(LiteralValue::Integer(n)) => write!(f, "{n}"),
            Self::Number(LiteralValue::Real(r)) => write!(f, "{r}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}

/// Tokenizes an arithmetic expression.
///
/// A number immediately followed by `(` is read as a multiplication, so an
/// explicit `*` token is inserted between them: `2(3+4)` lexes as
/// `2 * ( 3 + 4 )`. Whitespace between the two suppresses this, so `2 (3)`
/// stays two adjacent operands.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` for characters that are not part of
/// the arithmetic language.
///
/// # Example
/// ```
/// use lsystem::arithmetic::lexer::{Token, lex};
///
/// let tokens = lex("2(3)").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number(2.into()),
///                 Token::Star,
///                 Token::LParen,
///                 Token::Number(3.into()),
///                 Token::RParen]);
/// ```
pub fn lex(source: &str) -> ParseResult<Vec<Token>> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut lexer = Token::lexer(source);
    let mut prev_end = 0;

    while let Some(token) = lexer.next() {
        let Ok(tok) = token else {
            return Err(ParseError::UnexpectedToken { token:      lexer.slice().to_string(),
                                                     expression: source.to_string(), });
        };
        let span = lexer.span();
        if tok == Token::LParen
           && prev_end == span.start
           && matches!(tokens.last(), Some(Token::Number(_)))
        {
            tokens.push(Token::Star);
        }
        prev_end = span.end;
        tokens.push(tok);
    }

    Ok(tokens)
}

/// Parses a floating-point literal from the current token slice.
fn parse_float(lex: &logos::Lexer<Token>) -> Option<LiteralValue> {
    lex.slice().parse().ok().map(LiteralValue::Real)
}

/// Parses an integer literal from the current token slice.
///
/// Digit runs too long for `i64` are read as reals; large real results are
/// formatted without an exponent and must lex back.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<LiteralValue> {
    let slice = lex.slice();
    slice.parse()
         .map(LiteralValue::Integer)
         .or_else(|_| slice.parse().map(LiteralValue::Real))
         .ok()
}
