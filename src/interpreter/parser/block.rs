use std::iter::Peekable;

use crate::{
    ast::Block,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            statement::parse_statement,
            utils::{check_nesting, unexpected},
        },
    },
};

/// Parses a block delimited by braces.
///
/// A block consists of zero or more statements. Parsing continues until a
/// closing `}` token is encountered; running out of tokens first is an error.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening brace.
/// - `depth`: Nesting level of this block; top-level blocks are at 1.
///
/// # Returns
/// A block containing all parsed statements.
///
/// # Errors
/// Returns `NestingTooDeep` when `depth` exceeds
/// [`MAX_NESTING`](crate::interpreter::parser::core::MAX_NESTING).
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Block>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::LBrace, line)) => check_nesting(depth, *line)?,
        Some((tok, line)) => return Err(unexpected(tok, *line)),
        None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }

    let mut statements = Vec::new();
    loop {
        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            Some((Token::EndOfInput, line)) => return Err(unexpected(&Token::EndOfInput, *line)),
            Some(_) => statements.push(parse_statement(tokens, depth)?),
            None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
        }
    }

    Ok(Block { statements })
}
