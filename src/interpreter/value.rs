/// The `Value` enum and its conversions.
///
/// Defines the two kinds of runtime value, integers and text, along with the
/// textual form used when values are written to the output sink.
pub mod core;
