//! Tokens produced by the lexer.
//!
//! The coarse classification (`Keyword`, `Identifier`, `Number`, `String`,
//! `Operator`, `Delimiter`, `Comment`) is what learners see in token dumps;
//! keyword, operator and delimiter tokens also carry which one they are so the
//! parser never has to re-inspect the lexeme.

use std::fmt;

use crate::Line;

mod keyword;

pub use keyword::Keyword;

/// A single lexed token. Immutable once produced.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    /// Source text of the token, exactly as written.
    pub lexeme: String,
    pub kind: TokenKind,
    /// 1-based line the token starts on.
    pub line: Line,
}

impl Token {
    pub fn new(lexeme: impl Into<String>, kind: TokenKind, line: Line) -> Self {
        Token {
            lexeme: lexeme.into(),
            kind,
            line,
        }
    }

    /// The keyword this token spells, if it is a keyword token.
    #[inline]
    pub fn keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Keyword(kw) => Some(kw),
            _ => None,
        }
    }

    #[inline]
    pub fn is_keyword(&self, kw: Keyword) -> bool {
        self.kind == TokenKind::Keyword(kw)
    }

    #[inline]
    pub fn is_operator(&self, op: Operator) -> bool {
        self.kind == TokenKind::Operator(op)
    }

    #[inline]
    pub fn is_delimiter(&self, delim: Delimiter) -> bool {
        self.kind == TokenKind::Delimiter(delim)
    }

    /// Check for a soft keyword (`then`, `do`, `to`): an identifier token that
    /// the parser treats as a keyword only in header position.
    #[inline]
    pub fn is_soft_keyword(&self, word: &str) -> bool {
        self.kind == TokenKind::Identifier && self.lexeme.eq_ignore_ascii_case(word)
    }

    /// Contents of a string literal without its surrounding quotes.
    ///
    /// Returns the lexeme unchanged for non-string tokens.
    pub fn string_contents(&self) -> &str {
        if self.kind != TokenKind::String || self.lexeme.len() < 2 {
            return &self.lexeme;
        }
        &self.lexeme[1..self.lexeme.len() - 1]
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} `{}` (line {})", self.kind, self.lexeme, self.line)
    }
}

/// Token classification.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword(Keyword),
    Identifier,
    Number,
    String,
    Operator(Operator),
    Delimiter(Delimiter),
    /// A whole `// ...` line. Never reaches the parser.
    Comment,
}

impl TokenKind {
    /// Name of the coarse class, as shown to learners.
    pub const fn class_name(self) -> &'static str {
        match self {
            TokenKind::Keyword(_) => "keyword",
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Operator(_) => "operator",
            TokenKind::Delimiter(_) => "delimiter",
            TokenKind::Comment => "comment",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// Operators, including the word operators `and`, `or`, `not`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Plus,
    Minus,
    Star,
    Slash,
    DoubleSlash,
    Percent,
    DoubleStar,
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Assign,
    PlusAssign,
    MinusAssign,
    StarAssign,
    SlashAssign,
    And,
    Or,
    Not,
}

impl Operator {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Star => "*",
            Operator::Slash => "/",
            Operator::DoubleSlash => "//",
            Operator::Percent => "%",
            Operator::DoubleStar => "**",
            Operator::EqEq => "==",
            Operator::NotEq => "!=",
            Operator::Lt => "<",
            Operator::LtEq => "<=",
            Operator::Gt => ">",
            Operator::GtEq => ">=",
            Operator::Assign => "=",
            Operator::PlusAssign => "+=",
            Operator::MinusAssign => "-=",
            Operator::StarAssign => "*=",
            Operator::SlashAssign => "/=",
            Operator::And => "and",
            Operator::Or => "or",
            Operator::Not => "not",
        }
    }
}

/// Punctuation that groups or separates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Delimiter {
    Comma,
    Semicolon,
    Colon,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
}

impl Delimiter {
    pub const fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Semicolon => ';',
            Delimiter::Colon => ':',
            Delimiter::LParen => '(',
            Delimiter::RParen => ')',
            Delimiter::LBracket => '[',
            Delimiter::RBracket => ']',
            Delimiter::LBrace => '{',
            Delimiter::RBrace => '}',
        }
    }
}
