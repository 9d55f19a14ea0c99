#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered, as it appears in the source.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Blocks, parentheses or operator chains are nested past
    /// `MAX_NESTING` levels.
    NestingTooDeep {
        /// The source line where the limit was exceeded.
        line: usize,
    },
}

impl ParseError {
    /// Gets the line number the error refers to.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line }
            | Self::NestingTooDeep { line } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Syntax error at '{token}'.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Syntax error at end of input.")
            },

            Self::NestingTooDeep { line } => {
                write!(f, "Error on line {line}: Nesting too deep.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
