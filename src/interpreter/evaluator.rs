/// Binary operator evaluation logic.
///
/// Handles arithmetic operators and the relational operators used in
/// conditions, including the rules for mixing integers and text.
pub mod binary;

/// Core evaluation logic and context management.
///
/// Contains the evaluation context, expression evaluation and variable
/// lookup.
pub mod core;

/// Statement evaluation.
///
/// Assignments, output statements, conditionals and loops.
pub mod statement;
