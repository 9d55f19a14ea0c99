use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Comparison, ComparisonOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            primary::parse_primary,
            utils::{check_nesting, unexpected},
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `depth`: Number of blocks and parentheses enclosing the expression.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression, together
/// with the height of that tree. A single operand has height 0.
pub(in crate::interpreter::parser) fn parse_additive<'a, I>(tokens: &mut Peekable<I>,
                                                            depth: usize)
                                                            -> ParseResult<(Expr, usize)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (mut left, mut height) = parse_multiplicative(tokens, depth)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let line = *line;
            tokens.next();
            let (right, right_height) = parse_multiplicative(tokens, depth)?;
            height = height.max(right_height) + 1;
            check_nesting(depth + height, line)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
            continue;
        }
        break;
    }
    Ok((left, height))
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*`, `/` and `%%`.
///
/// The rule is: `multiplicative := primary (("*" | "/" | "%%") primary)*`
///
/// # Returns
/// A binary expression tree combining primary expressions, and its height.
pub(in crate::interpreter::parser) fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>,
                                                                  depth: usize)
                                                                  -> ParseResult<(Expr, usize)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (mut left, mut height) = parse_primary(tokens, depth)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
        {
            let line = *line;
            tokens.next();
            let (right, right_height) = parse_primary(tokens, depth)?;
            height = height.max(right_height) + 1;
            check_nesting(depth + height, line)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
            continue;
        }
        break;
    }
    Ok((left, height))
}

/// Parses a single comparison: `additive <op> additive`.
///
/// This is only reachable from the condition of `if` and `while`. Exactly one
/// relational operator is required, so `a < b < c` fails at the second `<`
/// and a bare `x` fails at whatever follows it.
///
/// The rule is: `comparison := additive ("<" | ">" | "<=" | ">=" | "==" |
/// "!=") additive`
///
/// # Errors
/// Returns a `ParseError` if the relational operator or either operand is
/// missing, or if an operand nests too deeply.
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Comparison>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (left, _) = parse_additive(tokens, depth)?;

    let (op, line) = match tokens.next() {
        Some((token, line)) => match token_to_comparison_operator(token) {
            Some(op) => (op, *line),
            None => return Err(unexpected(token, *line)),
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    };

    let (right, _) = parse_additive(tokens, depth)?;

    Ok(Comparison { op,
                    left,
                    right,
                    line })
}

/// Maps a token to its corresponding arithmetic operator.
///
/// # Example
/// ```
/// use rscript::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::PercentPercent),
///            Some(BinaryOperator::Mod));
/// assert_eq!(token_to_binary_operator(&Token::Less), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::PercentPercent => Some(BinaryOperator::Mod),
        _ => None,
    }
}

/// Maps a token to its corresponding relational operator.
#[must_use]
pub const fn token_to_comparison_operator(token: &Token) -> Option<ComparisonOperator> {
    match token {
        Token::Less => Some(ComparisonOperator::Less),
        Token::Greater => Some(ComparisonOperator::Greater),
        Token::LessEqual => Some(ComparisonOperator::LessEqual),
        Token::GreaterEqual => Some(ComparisonOperator::GreaterEqual),
        Token::EqualEqual => Some(ComparisonOperator::Equal),
        Token::BangEqual => Some(ComparisonOperator::NotEqual),
        _ => None,
    }
}
