use std::iter::Peekable;

use crate::{
    arithmetic::lexer::Token,
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::ParseError,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete token stream into a single expression.
///
/// Fails if tokens remain after the expression, so `"2 3"` is rejected rather
/// than silently evaluating to `2`.
///
/// # Parameters
/// - `tokens`: The lexed expression.
/// - `source`: The original text, used in error messages.
pub fn parse(tokens: &[Token], source: &str) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter, source)?;
    if let Some(token) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token:      token.to_string(),
                                                          expression: source.to_string(), });
    }
    Ok(expr)
}

/// Parses a full expression.
///
/// Grammar: `expression := additive`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, source: &str) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_additive(tokens, source)
}

/// Parses addition and subtraction expressions.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
fn parse_additive<'a, I>(tokens: &mut Peekable<I>, source: &str) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_multiplicative(tokens, source)?;
    while let Some(token) = tokens.peek() {
        let op = match token {
            Token::Plus => BinaryOperator::Add,
            Token::Minus => BinaryOperator::Sub,
            _ => break,
        };
        tokens.next();
        let right = parse_multiplicative(tokens, source)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right) };
    }
    Ok(left)
}

/// Parses multiplication and division expressions.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, source: &str) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_unary(tokens, source)?;
    while let Some(token) = tokens.peek() {
        let op = match token {
            Token::Star => BinaryOperator::Mul,
            Token::Slash => BinaryOperator::Div,
            _ => break,
        };
        tokens.next();
        let right = parse_unary(tokens, source)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right) };
    }
    Ok(left)
}

/// Parses a unary expression.
///
/// Unary operators are right-associative, so `--x` is parsed as `-(-x)`. This
/// matters after parameter substitution, where `2-x` with `x = -3` becomes
/// `2--3`.
///
/// Grammar:
/// ```text
///     unary := ("-" | "+") unary
///            | primary
/// ```
fn parse_unary<'a, I>(tokens: &mut Peekable<I>, source: &str) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let op = match tokens.peek() {
        Some(Token::Minus) => UnaryOperator::Negate,
        Some(Token::Plus) => UnaryOperator::Plus,
        _ => return parse_primary(tokens, source),
    };
    tokens.next();
    let expr = parse_unary(tokens, source)?;
    Ok(Expr::UnaryOp { op,
                       expr: Box::new(expr) })
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := NUMBER | IDENTIFIER
///              | "(" expression ")"
/// ```
fn parse_primary<'a, I>(tokens: &mut Peekable<I>, source: &str) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let token = tokens.next()
                      .ok_or_else(|| ParseError::UnexpectedEndOfInput { expression:
                                                                            source.to_string() })?;

    match token {
        Token::Number(value) => Ok(Expr::Literal { value: *value }),
        Token::Identifier(name) => Ok(Expr::Name { name: name.clone() }),
        Token::LParen => {
            let expr = parse_expression(tokens, source)?;
            match tokens.next() {
                Some(Token::RParen) => Ok(expr),
                Some(other) => Err(ParseError::UnexpectedToken { token:      other.to_string(),
                                                                 expression: source.to_string(), }),
                None => Err(ParseError::UnbalancedParentheses { expression: source.to_string() }),
            }
        },
        other => Err(ParseError::UnexpectedToken { token:      other.to_string(),
                                                   expression: source.to_string(), }),
    }
}
