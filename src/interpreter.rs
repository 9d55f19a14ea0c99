/// The environment module holds the variables of a program run.
///
/// A single flat namespace maps identifiers to values. It is created by the
/// caller, mutated by the evaluator and can be inspected after a run.
pub mod environment;
/// The evaluator module executes the syntax tree.
///
/// The evaluator walks statements and expressions depth-first, performs
/// arithmetic and comparisons, updates the environment and writes output.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles assignments and control flow.
/// - Reports runtime errors such as type mismatches or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// strings, identifiers, keywords and operators. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source line numbers.
/// - Skips whitespace and `#` comments.
/// - Reports lexical errors for invalid or malformed input without stopping.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// a program, or stops at the first syntax error.
///
/// # Responsibilities
/// - Converts tokens into statements, blocks and expressions.
/// - Enforces operator precedence and associativity.
/// - Confines comparisons to `if` and `while` conditions.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
pub mod value;
