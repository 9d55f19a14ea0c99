use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_additive,
            core::ParseResult,
            utils::{check_nesting, expect, unexpected},
        },
    },
};

/// Parses a primary expression.
///
/// Primary expressions are the atoms of the expression grammar: integer
/// literals, string literals, variable references and parenthesized
/// expressions. There are no unary operators, so `-1` is rejected here.
///
/// Grammar: `primary := NUMBER | STRING | IDENT | "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
/// - `depth`: Number of blocks and parentheses enclosing the expression.
///
/// # Returns
/// The parsed expression node and the height of its tree.
///
/// # Errors
/// Returns `UnexpectedToken` for any other token, or `UnexpectedEndOfInput`
/// when the stream is exhausted.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>,
                                   depth: usize)
                                   -> ParseResult<(Expr, usize)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let expr = match tokens.next() {
        Some((Token::Number(n), line)) => Expr::Literal { value: LiteralValue::Integer(*n),
                                                          line:  *line, },
        Some((Token::Str(s), line)) => Expr::Literal { value: LiteralValue::Text(s.clone()),
                                                       line:  *line, },
        Some((Token::Identifier(name), line)) => Expr::Variable { name: name.clone(),
                                                                  line: *line, },
        Some((Token::LParen, line)) => return parse_grouping(tokens, depth + 1, *line),
        Some((tok, line)) => return Err(unexpected(tok, *line)),
        None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    };
    Ok((expr, 0))
}

/// Parses the remainder of a parenthesized expression.
///
/// The opening `(` on `line` has already been consumed. The inner expression
/// re-enters the full arithmetic grammar one level deeper and must be followed
/// by `)`.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>,
                         depth: usize,
                         line: usize)
                         -> ParseResult<(Expr, usize)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    check_nesting(depth, line)?;
    let grouped = parse_additive(tokens, depth)?;
    expect(tokens, &Token::RParen)?;
    Ok(grouped)
}
