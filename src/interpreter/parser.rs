/// Binary expression parsing.
///
/// Implements the precedence levels of the grammar: additive and
/// multiplicative arithmetic, plus the single comparison allowed in a
/// condition.
pub mod binary;
/// Block parsing.
///
/// Parses brace-delimited statement sequences.
pub mod block;
/// Parser entry points.
///
/// Contains the program-level parse loop and the expression entry point.
pub mod core;
/// Primary expression parsing.
///
/// Parses literals, variable references and parenthesized expressions.
pub mod primary;
/// Statement parsing.
///
/// Parses assignments, `print`, `cat`, `if` and `while`.
pub mod statement;
/// Shared parser helpers.
///
/// Token expectations, error construction and comma-separated lists.
mod utils;
