use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_comparison,
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{expect, parse_comma_separated, skip_semicolons, unexpected},
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - an assignment (`x <- expr`),
/// - `print(expr)`,
/// - `cat(expr, ...)`,
/// - `if (comparison) block [else block]`,
/// - `while (comparison) block`.
///
/// The first token alone decides which form is parsed. Any number of `;`
/// tokens may follow a statement and are discarded.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
/// - `depth`: Number of blocks enclosing the statement.
///
/// # Returns
/// A parsed [`Statement`] node.
///
/// # Errors
/// Returns a `ParseError` for the first token that does not fit.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let statement = match tokens.next() {
        Some((Token::Identifier(name), line)) => parse_assignment(tokens, name, *line, depth)?,
        Some((Token::Print, line)) => parse_print(tokens, *line, depth)?,
        Some((Token::Cat, line)) => parse_cat(tokens, *line, depth)?,
        Some((Token::If, line)) => parse_if(tokens, *line, depth)?,
        Some((Token::While, line)) => parse_while(tokens, *line, depth)?,
        Some((tok, line)) => return Err(unexpected(tok, *line)),
        None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    };

    skip_semicolons(tokens);
    Ok(statement)
}

/// Parses the rest of an assignment once its target identifier was consumed.
///
/// Grammar: `assignment := IDENT "<-" expression`
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>,
                           name: &str,
                           line: usize,
                           depth: usize)
                           -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    expect(tokens, &Token::Assign)?;
    let value = parse_expression(tokens, depth)?;

    Ok(Statement::Assignment { name: name.to_string(),
                               value,
                               line })
}

/// Parses `print(expr)` after the `print` keyword.
fn parse_print<'a, I>(tokens: &mut Peekable<I>,
                      line: usize,
                      depth: usize)
                      -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    expect(tokens, &Token::LParen)?;
    let value = parse_expression(tokens, depth)?;
    expect(tokens, &Token::RParen)?;

    Ok(Statement::Print { value, line })
}

/// Parses `cat(expr, ...)` after the `cat` keyword. At least one argument is
/// required.
fn parse_cat<'a, I>(tokens: &mut Peekable<I>,
                    line: usize,
                    depth: usize)
                    -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    expect(tokens, &Token::LParen)?;
    let values = parse_comma_separated(tokens,
                                       |tokens| parse_expression(tokens, depth),
                                       &Token::RParen)?;

    Ok(Statement::Cat { values, line })
}

/// Parses an `if` statement with an optional `else` block.
///
/// Syntax:
/// ```text
///     if (<comparison>) { ... }
///     if (<comparison>) { ... } else { ... }
/// ```
/// There is no `else if`; nest an `if` inside the `else` block instead.
///
/// # Errors
/// - `UnexpectedToken` if the parentheses, the comparison or a brace is
///   missing.
/// - Propagates any errors from the nested blocks.
fn parse_if<'a, I>(tokens: &mut Peekable<I>,
                   line: usize,
                   depth: usize)
                   -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    expect(tokens, &Token::LParen)?;
    let condition = parse_comparison(tokens, depth)?;
    expect(tokens, &Token::RParen)?;

    let then_block = parse_block(tokens, depth + 1)?;

    let else_block = if let Some((Token::Else, _)) = tokens.peek() {
        tokens.next();
        Some(parse_block(tokens, depth + 1)?)
    } else {
        None
    };

    Ok(Statement::If { condition,
                       then_block,
                       else_block,
                       line })
}

/// Parses `while (<comparison>) { ... }` after the `while` keyword.
fn parse_while<'a, I>(tokens: &mut Peekable<I>,
                      line: usize,
                      depth: usize)
                      -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    expect(tokens, &Token::LParen)?;
    let condition = parse_comparison(tokens, depth)?;
    expect(tokens, &Token::RParen)?;

    let body = parse_block(tokens, depth + 1)?;

    Ok(Statement::While { condition,
                          body,
                          line })
}
