#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all diagnostics that can be raised while lexing.
pub enum LexError {
    /// A character that starts no token.
    IllegalCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A string literal without a closing quote on its line.
    UnterminatedString {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A numeric literal that does not fit in a 64 bit integer.
    LiteralTooLarge {
        /// The literal as written in the source.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl LexError {
    /// Gets the line number the diagnostic refers to.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::IllegalCharacter { line, .. }
            | Self::UnterminatedString { line }
            | Self::LiteralTooLarge { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalCharacter { character, line } => {
                write!(f, "Error on line {line}: Illegal character '{character}'.")
            },
            Self::UnterminatedString { line } => {
                write!(f, "Error on line {line}: Unterminated string literal.")
            },
            Self::LiteralTooLarge { literal, line } => {
                write!(f, "Error on line {line}: Literal {literal} is too large.")
            },
        }
    }
}

impl std::error::Error for LexError {}
