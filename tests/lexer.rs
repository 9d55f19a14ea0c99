use rscript::{
    error::LexError,
    interpreter::lexer::{Token, tokenize},
};

fn kinds(src: &str) -> Vec<Token> {
    let output = tokenize(src);
    assert!(output.errors.is_empty(), "unexpected errors: {:?}", output.errors);
    output.tokens.into_iter().map(|(token, _)| token).collect()
}

#[test]
fn keywords_are_case_sensitive() {
    assert_eq!(kinds("if else while print cat If WHILE printx"),
               vec![Token::If,
                    Token::Else,
                    Token::While,
                    Token::Print,
                    Token::Cat,
                    Token::Identifier("If".to_string()),
                    Token::Identifier("WHILE".to_string()),
                    Token::Identifier("printx".to_string()),
                    Token::EndOfInput]);
}

#[test]
fn two_character_operators_win_over_prefixes() {
    assert_eq!(kinds("<- <= < >= > == != %% + - * / ( ) { } , ;"),
               vec![Token::Assign,
                    Token::LessEqual,
                    Token::Less,
                    Token::GreaterEqual,
                    Token::Greater,
                    Token::EqualEqual,
                    Token::BangEqual,
                    Token::PercentPercent,
                    Token::Plus,
                    Token::Minus,
                    Token::Star,
                    Token::Slash,
                    Token::LParen,
                    Token::RParen,
                    Token::LBrace,
                    Token::RBrace,
                    Token::Comma,
                    Token::Semicolon,
                    Token::EndOfInput]);
}

#[test]
fn assignment_without_spaces() {
    assert_eq!(kinds("x<-10"),
               vec![Token::Identifier("x".to_string()),
                    Token::Assign,
                    Token::Number(10),
                    Token::EndOfInput]);
}

#[test]
fn digits_then_letters_split_into_two_tokens() {
    assert_eq!(kinds("123abc"),
               vec![Token::Number(123), Token::Identifier("abc".to_string()), Token::EndOfInput]);
}

#[test]
fn string_escapes_only_decode_newline() {
    assert_eq!(kinds(r#""a\nb" "tab\t" "q\"q""#),
               vec![Token::Str("a\nb".to_string()),
                    Token::Str("tab\\t".to_string()),
                    Token::Str("q\\\"q".to_string()),
                    Token::EndOfInput]);
}

#[test]
fn escapes_pair_up_from_the_left() {
    // `\\` is one escape pair, so the `n` after it stays literal.
    assert_eq!(kinds(r#""a\\n" "b\\\n""#),
               vec![Token::Str(r"a\\n".to_string()),
                    Token::Str("b\\\\\n".to_string()),
                    Token::EndOfInput]);
}

#[test]
fn line_numbers_follow_newlines() {
    let output = tokenize("a\n\n\nb # comment\n\tc\r\nd");
    let lines: Vec<usize> = output.tokens.iter().map(|(_, line)| *line).collect();

    assert!(output.errors.is_empty());
    assert_eq!(lines, vec![1, 4, 5, 6, 6]);
}

#[test]
fn comments_produce_no_tokens() {
    assert_eq!(kinds("# only a comment"), vec![Token::EndOfInput]);
    assert_eq!(kinds("x # <- 1"),
               vec![Token::Identifier("x".to_string()), Token::EndOfInput]);
}

#[test]
fn illegal_characters_are_reported_and_skipped() {
    let output = tokenize("x @ y\n$ z");

    assert_eq!(output.errors,
               vec![LexError::IllegalCharacter { character: '@',
                                                 line:      1, },
                    LexError::IllegalCharacter { character: '$',
                                                 line:      2, }]);
    assert_eq!(output.tokens,
               vec![(Token::Identifier("x".to_string()), 1),
                    (Token::Identifier("y".to_string()), 1),
                    (Token::Identifier("z".to_string()), 2),
                    (Token::EndOfInput, 2)]);
}

#[test]
fn unterminated_string_is_reported() {
    let output = tokenize("s <- \"open\nprint(s)");

    assert_eq!(output.errors, vec![LexError::UnterminatedString { line: 1 }]);
    assert_eq!(output.errors[0].line_number(), 1);
    assert_eq!(output.tokens[2], (Token::Print, 2));
}

#[test]
fn oversized_literal_is_reported() {
    let output = tokenize("x <- 99999999999999999999");

    assert_eq!(output.errors,
               vec![LexError::LiteralTooLarge { literal: "99999999999999999999".to_string(),
                                                line:    1, }]);
}
