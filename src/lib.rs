//! # rscript
//!
//! rscript is an interpreter for a small scripting language with an R-like
//! surface syntax, written in Rust.
//! It tokenizes, parses and evaluates programs made of assignments, `print`,
//! `cat`, `if`/`else` and `while`, over integer and text values.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use tracing::warn;

use crate::{
    ast::Program,
    error::{ParseError, RuntimeError},
    interpreter::{
        environment::Environment,
        evaluator::core::Context,
        lexer::tokenize,
        parser::core::parse_program,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the statement, block, comparison and expression types
/// that represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source line numbers to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while running a program.
/// Every error carries the line number it refers to and formats itself as a
/// single user-facing diagnostic line.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, the variable
/// environment and value representations to provide a complete runtime for
/// source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, environment
///   and value types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Parses source text into a program.
///
/// Lexical diagnostics do not stop parsing; they are logged and the remaining
/// tokens are parsed. Use [`interpreter::lexer::tokenize`] and
/// [`interpreter::parser::core::parse_program`] directly to collect them.
///
/// # Errors
/// Returns the first syntax error. No partial program is produced.
///
/// # Examples
/// ```
/// use rscript::parse;
///
/// assert!(parse("x <- 1 + 2 * 3").is_ok());
/// assert!(parse("while (x < 3) { x <- x + 1").is_err());
/// ```
pub fn parse(source: &str) -> Result<Program, ParseError> {
    let lexed = tokenize(source);
    for error in &lexed.errors {
        warn!(line = error.line_number(), %error, "lexical error");
    }
    parse_program(&lexed.tokens)
}

/// Evaluates a parsed program against `environment`, writing to `output`.
///
/// # Errors
/// Returns the first fatal runtime error. Undefined variables are not fatal;
/// their diagnostics are written to `output`.
pub fn evaluate(program: &Program,
                environment: &mut Environment,
                output: &mut dyn Write)
                -> Result<(), RuntimeError> {
    Context::new(environment, output).run(program)
}

/// Runs a whole script: tokenize, parse, then evaluate.
///
/// Lexical diagnostics are written to `output` before parsing starts. A syntax
/// error stops the run before anything is evaluated. A fatal runtime error
/// stops it at the failing statement; output written before that point is
/// kept.
///
/// # Errors
/// Returns the syntax error, the fatal runtime error, or an I/O error from
/// `output`.
///
/// # Examples
/// ```
/// use rscript::{interpreter::environment::Environment, run_script};
///
/// let mut env = Environment::new();
/// let mut out = Vec::new();
///
/// run_script("i <- 0\nwhile (i < 3) { cat(i, \" \"); i <- i + 1 }", &mut env, &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "0 1 2 ");
///
/// // Syntax errors are reported and nothing runs.
/// let mut out = Vec::new();
/// assert!(run_script("print(1)\nprint(", &mut env, &mut out).is_err());
/// assert!(out.is_empty());
/// ```
pub fn run_script(source: &str,
                  environment: &mut Environment,
                  output: &mut dyn Write)
                  -> Result<(), Box<dyn std::error::Error>> {
    let lexed = tokenize(source);
    for error in &lexed.errors {
        writeln!(output, "{error}")?;
    }

    let program = parse_program(&lexed.tokens)?;
    let result = evaluate(&program, environment, output);
    output.flush()?;

    Ok(result?)
}
