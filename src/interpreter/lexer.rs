use logos::Logos;
use tracing::debug;

use crate::error::LexError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Number(i64),
    /// String literal tokens, such as `"hello\n"`. The payload is the decoded
    /// contents without the surrounding quotes.
    #[regex(r#""([^"\\\n]|\\.)*""#, parse_string)]
    Str(String),
    /// A string literal that reaches the end of its line without a closing
    /// quote. Never handed to the parser; [`tokenize`] turns it into a
    /// diagnostic.
    #[regex(r#""([^"\\\n]|\\.)*\\?"#, |lex| lex.slice().to_string())]
    UnterminatedString(String),
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `print`
    #[token("print")]
    Print,
    /// `cat`
    #[token("cat")]
    Cat,
    /// Identifier tokens; variable names such as `x` or `total_sum`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `# Comments.`
    #[regex(r"#[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// `<-`
    #[token("<-")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%%`
    #[token("%%")]
    PercentPercent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,

    /// One or more newlines. Skipped, but counted.
    #[regex(r"\n+", |lex| {
        lex.extras.line += lex.slice().len();
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
    /// Marks the end of the token stream. Appended by [`tokenize`], never
    /// matched in source text.
    EndOfInput,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "\"{}\"", s.replace('\n', "\\n")),
            Self::UnterminatedString(s) | Self::Identifier(s) => write!(f, "{s}"),
            Self::If => write!(f, "if"),
            Self::Else => write!(f, "else"),
            Self::While => write!(f, "while"),
            Self::Print => write!(f, "print"),
            Self::Cat => write!(f, "cat"),
            Self::Comment => write!(f, "#"),
            Self::Assign => write!(f, "<-"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::PercentPercent => write!(f, "%%"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBrace => write!(f, "{{"),
            Self::RBrace => write!(f, "}}"),
            Self::Comma => write!(f, ","),
            Self::Semicolon => write!(f, ";"),
            Self::EqualEqual => write!(f, "=="),
            Self::BangEqual => write!(f, "!="),
            Self::LessEqual => write!(f, "<="),
            Self::GreaterEqual => write!(f, ">="),
            Self::Less => write!(f, "<"),
            Self::Greater => write!(f, ">"),
            Self::NewLine => writeln!(f),
            Self::Ignored => write!(f, " "),
            Self::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Automatically increments as newlines are processed.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// The result of running the lexer over a whole source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexOutput {
    /// Tokens paired with their 1-based source line, in source order. The last
    /// entry is always [`Token::EndOfInput`].
    pub tokens: Vec<(Token, usize)>,
    /// Lexical diagnostics, in the order they were found.
    pub errors: Vec<LexError>,
}

/// Converts source text into a token sequence.
///
/// Lexing never stops early: illegal characters, oversized numbers and
/// unterminated strings are recorded in [`LexOutput::errors`] and scanning
/// resumes after them.
///
/// # Example
/// ```
/// use rscript::interpreter::lexer::{Token, tokenize};
///
/// let output = tokenize("x <- 5 # five\nprint(x)");
///
/// assert!(output.errors.is_empty());
/// assert_eq!(output.tokens[0], (Token::Identifier("x".to_string()), 1));
/// assert_eq!(output.tokens[1], (Token::Assign, 1));
/// assert_eq!(output.tokens[3], (Token::Print, 2));
/// assert_eq!(output.tokens.last(), Some(&(Token::EndOfInput, 2)));
/// ```
#[must_use]
pub fn tokenize(source: &str) -> LexOutput {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        let line = lexer.extras.line;
        match token {
            Ok(Token::UnterminatedString(_)) => errors.push(LexError::UnterminatedString { line }),
            Ok(tok) => tokens.push((tok, line)),
            Err(()) => {
                let slice = lexer.slice();
                if !slice.is_empty() && slice.bytes().all(|b| b.is_ascii_digit()) {
                    errors.push(LexError::LiteralTooLarge { literal: slice.to_string(),
                                                            line });
                } else if let Some(character) = slice.chars().next() {
                    errors.push(LexError::IllegalCharacter { character, line });
                }
            },
        }
    }

    tokens.push((Token::EndOfInput, lexer.extras.line));
    debug!(tokens = tokens.len(), errors = errors.len(), "tokenized source");

    LexOutput { tokens, errors }
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the literal does not fit in an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Decodes a string literal from the current token slice.
///
/// The surrounding quotes are removed and `\n` becomes a newline. Any other
/// escape is kept verbatim as backslash plus character.
fn parse_string(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    let inner = &slice[1..slice.len() - 1];

    let mut decoded = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            decoded.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => decoded.push('\n'),
            Some(other) => {
                decoded.push('\\');
                decoded.push(other);
            },
            None => decoded.push('\\'),
        }
    }
    decoded
}
