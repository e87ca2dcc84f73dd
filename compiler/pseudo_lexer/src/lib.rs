//! Lexer for pseudo-code using logos.
//!
//! The source is lexed one line at a time, which keeps every token tagged with
//! the 1-based line it came from and lets a string literal never run past the
//! end of its line:
//!
//! - blank lines produce nothing
//! - a line whose first non-blank characters are `//` becomes one `Comment`
//!   token (elsewhere `//` is floor division)
//! - every other line is handed to the logos-generated [`RawToken`] scanner
//!
//! A leading `-` is never fused into a number: `-3` is `Operator(-)` followed
//! by `Number(3)`, and the parser builds the negation.

use logos::Logos;
use pseudo_ir::{Delimiter, Keyword, Line, Operator, Token, TokenKind};

mod lex_error;

pub use lex_error::LexError;

/// Raw token from logos, before keyword resolution.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"\s+")]
enum RawToken {
    // === Literals ===
    #[regex(r"[0-9]+(\.[0-9]*)?")]
    Number,

    #[regex(r#""[^"]*""#)]
    #[regex(r"'[^']*'")]
    String,

    /// Anything that is not whitespace, an operator or delimiter character,
    /// or a quote, not starting with a digit or `.`. Keywords and word
    /// operators are resolved from this afterwards.
    #[regex(r#"[^\s0-9.+\-*/%=<>!,;:()\[\]{}"'][^\s+\-*/%=<>!,;:()\[\]{}"']*"#)]
    Word,

    // === Operators ===
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("//")]
    DoubleSlash,
    #[token("%")]
    Percent,
    #[token("**")]
    DoubleStar,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<")]
    Lt,
    #[token("<=")]
    LtEq,
    #[token(">")]
    Gt,
    #[token(">=")]
    GtEq,
    #[token("=")]
    Assign,
    #[token("+=")]
    PlusAssign,
    #[token("-=")]
    MinusAssign,
    #[token("*=")]
    StarAssign,
    #[token("/=")]
    SlashAssign,

    // === Delimiters ===
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
}

impl RawToken {
    /// Convert to a token kind. `slice` is only consulted for words.
    fn cook(self, slice: &str) -> TokenKind {
        match self {
            RawToken::Number => TokenKind::Number,
            RawToken::String => TokenKind::String,
            RawToken::Word => cook_word(slice),

            RawToken::Plus => TokenKind::Operator(Operator::Plus),
            RawToken::Minus => TokenKind::Operator(Operator::Minus),
            RawToken::Star => TokenKind::Operator(Operator::Star),
            RawToken::Slash => TokenKind::Operator(Operator::Slash),
            RawToken::DoubleSlash => TokenKind::Operator(Operator::DoubleSlash),
            RawToken::Percent => TokenKind::Operator(Operator::Percent),
            RawToken::DoubleStar => TokenKind::Operator(Operator::DoubleStar),
            RawToken::EqEq => TokenKind::Operator(Operator::EqEq),
            RawToken::NotEq => TokenKind::Operator(Operator::NotEq),
            RawToken::Lt => TokenKind::Operator(Operator::Lt),
            RawToken::LtEq => TokenKind::Operator(Operator::LtEq),
            RawToken::Gt => TokenKind::Operator(Operator::Gt),
            RawToken::GtEq => TokenKind::Operator(Operator::GtEq),
            RawToken::Assign => TokenKind::Operator(Operator::Assign),
            RawToken::PlusAssign => TokenKind::Operator(Operator::PlusAssign),
            RawToken::MinusAssign => TokenKind::Operator(Operator::MinusAssign),
            RawToken::StarAssign => TokenKind::Operator(Operator::StarAssign),
            RawToken::SlashAssign => TokenKind::Operator(Operator::SlashAssign),

            RawToken::Comma => TokenKind::Delimiter(Delimiter::Comma),
            RawToken::Semicolon => TokenKind::Delimiter(Delimiter::Semicolon),
            RawToken::Colon => TokenKind::Delimiter(Delimiter::Colon),
            RawToken::LParen => TokenKind::Delimiter(Delimiter::LParen),
            RawToken::RParen => TokenKind::Delimiter(Delimiter::RParen),
            RawToken::LBracket => TokenKind::Delimiter(Delimiter::LBracket),
            RawToken::RBracket => TokenKind::Delimiter(Delimiter::RBracket),
            RawToken::LBrace => TokenKind::Delimiter(Delimiter::LBrace),
            RawToken::RBrace => TokenKind::Delimiter(Delimiter::RBrace),
        }
    }
}

/// Resolve a word to a keyword, a word operator, or an identifier.
fn cook_word(word: &str) -> TokenKind {
    if let Some(kw) = Keyword::lookup(word) {
        return TokenKind::Keyword(kw);
    }
    let op = if word.eq_ignore_ascii_case("and") {
        Operator::And
    } else if word.eq_ignore_ascii_case("or") {
        Operator::Or
    } else if word.eq_ignore_ascii_case("not") {
        Operator::Not
    } else {
        return TokenKind::Identifier;
    };
    TokenKind::Operator(op)
}

/// Output of lexing: every token that could be produced, plus every error.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LexOutput {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Lex the whole source, collecting all errors.
///
/// Lexing continues after an error: an unexpected character is skipped, and
/// an unterminated string swallows the rest of its line.
pub fn lex(source: &str) -> LexOutput {
    let mut output = LexOutput::default();

    for (index, text) in source.lines().enumerate() {
        let line = Line::try_from(index + 1).unwrap_or(Line::MAX);
        let trimmed = text.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with("//") {
            output
                .tokens
                .push(Token::new(trimmed, TokenKind::Comment, line));
            continue;
        }
        lex_line(text, line, &mut output);
    }

    output
}

/// Lex the source, stopping at the first lexical error.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let LexOutput { tokens, errors } = lex(source);
    match errors.into_iter().next() {
        Some(err) => Err(err),
        None => Ok(tokens),
    }
}

fn lex_line(text: &str, line: Line, output: &mut LexOutput) {
    let mut raw = RawToken::lexer(text);

    while let Some(result) = raw.next() {
        let slice = raw.slice();
        match result {
            Ok(token) => output
                .tokens
                .push(Token::new(slice, token.cook(slice), line)),
            Err(()) => {
                let found = slice.chars().next().unwrap_or(' ');
                if found == '"' || found == '\'' {
                    output.errors.push(LexError::UnterminatedString {
                        line,
                        quote: found,
                    });
                    // The literal runs to the end of the line.
                    return;
                }
                output
                    .errors
                    .push(LexError::UnexpectedCharacter { line, found });
            }
        }
    }
}
