/// Arithmetic on integers and text.
pub mod arithmetic;
/// Relational comparisons.
pub mod comparison;
