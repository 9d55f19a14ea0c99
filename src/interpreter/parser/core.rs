use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_additive, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting the parser accepts.
///
/// Enclosing blocks and parentheses each count one level, and so does every
/// level of the operator tree an expression builds. Anything deeper is
/// rejected with `ParseError::NestingTooDeep`, which keeps parsing, evaluation
/// and dropping of the tree within a bounded stack.
pub const MAX_NESTING: usize = 256;

/// Parses a whole token stream into a program.
///
/// Statements are parsed until the end-of-input marker. The first token that
/// does not fit the grammar aborts the parse; no partial program is returned.
///
/// Grammar: `program := statement* EOF`
///
/// # Parameters
/// - `tokens`: The `(Token, line)` pairs produced by the lexer, ending in
///   `Token::EndOfInput`.
///
/// # Errors
/// Returns the first `ParseError` encountered.
///
/// # Example
/// ```
/// use rscript::interpreter::{lexer::tokenize, parser::core::parse_program};
///
/// let lexed = tokenize("x <- 1; print(x)");
/// let program = parse_program(&lexed.tokens).unwrap();
/// assert_eq!(program.statements.len(), 2);
///
/// let lexed = tokenize("if (x < ) { print(x) }");
/// assert!(parse_program(&lexed.tokens).is_err());
/// ```
pub fn parse_program(tokens: &[(Token, usize)]) -> ParseResult<Program> {
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    loop {
        match iter.peek() {
            Some((Token::EndOfInput, _)) | None => break,
            Some(_) => match parse_statement(&mut iter, 0) {
                Ok(statement) => statements.push(statement),
                Err(e) => {
                    debug!(line = e.line_number(), error = %e, "parse failed");
                    return Err(e);
                },
            },
        }
    }

    debug!(statements = statements.len(), "parsed program");
    Ok(Program { statements })
}

/// Parses a full arithmetic expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence arithmetic level, addition, and recursively descends
/// through the precedence hierarchy. Comparisons are not reachable from here.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
/// - `depth`: Number of blocks and parentheses enclosing the expression.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// Returns `NestingTooDeep` when `depth` plus the height of the expression
/// tree exceeds [`MAX_NESTING`].
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_additive(tokens, depth).map(|(expr, _)| expr)
}
