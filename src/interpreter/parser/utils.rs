use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{MAX_NESTING, ParseResult},
    },
};

/// Builds the error for a token the grammar does not allow at this point.
///
/// The end-of-input marker becomes `UnexpectedEndOfInput`; every other token
/// is reported with its source text.
pub(in crate::interpreter::parser) fn unexpected(token: &Token, line: usize) -> ParseError {
    match token {
        Token::EndOfInput => ParseError::UnexpectedEndOfInput { line },
        tok => ParseError::UnexpectedToken { token: tok.to_string(),
                                             line },
    }
}

/// Consumes the next token, which must equal `expected`.
///
/// # Errors
/// Returns a `ParseError` naming the token that was found instead.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token)
                                                    -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, _)) if tok == expected => Ok(()),
        Some((tok, line)) => Err(unexpected(tok, *line)),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses a comma-separated list of one or more items until a closing token.
///
/// It repeatedly calls `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token is an error, since every list in
/// the language has at least one element.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list (e.g. `)`).
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut items = Vec::new();
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((tok, _)) if tok == closing => break,
            Some((tok, line)) => return Err(unexpected(tok, *line)),
            None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
        }
    }
    Ok(items)
}

/// Skips any number of `;` tokens.
pub(in crate::interpreter::parser) fn skip_semicolons<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a (Token, usize)>
{
    while let Some((Token::Semicolon, _)) = tokens.peek() {
        tokens.next();
    }
}

/// Fails with `NestingTooDeep` once `depth` exceeds [`MAX_NESTING`].
pub(in crate::interpreter::parser) const fn check_nesting(depth: usize,
                                                          line: usize)
                                                          -> ParseResult<()> {
    if depth > MAX_NESTING {
        Err(ParseError::NestingTooDeep { line })
    } else {
        Ok(())
    }
}
