/// Lexical errors.
///
/// Defines the diagnostics the lexer records while scanning source text.
/// Lexical errors never stop tokenization; they are collected and reported
/// alongside the token stream.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while turning a token stream into a
/// program. A parse error is fatal: no syntax tree is produced and nothing is
/// evaluated.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and execution.
/// Runtime errors include things like division by zero, type mismatches,
/// integer overflow, or a failure to write to the output sink.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
