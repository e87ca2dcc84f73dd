//! Reserved keywords.
//!
//! Keyword recognition is case-insensitive: `IF`, `If` and `if` all spell
//! [`Keyword::If`]. The soft keywords `then`, `do` and `to` are deliberately
//! absent; they stay identifiers and are only meaningful in block headers.

use std::fmt;

/// The fixed set of reserved words.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    If,
    Else,
    EndIf,
    While,
    EndWhile,
    For,
    EndFor,
    Function,
    EndFunction,
    Procedure,
    EndProcedure,
    Return,
    Print,
    Input,
    True,
    False,
    Null,
}

impl Keyword {
    pub const ALL: [Keyword; 17] = [
        Keyword::If,
        Keyword::Else,
        Keyword::EndIf,
        Keyword::While,
        Keyword::EndWhile,
        Keyword::For,
        Keyword::EndFor,
        Keyword::Function,
        Keyword::EndFunction,
        Keyword::Procedure,
        Keyword::EndProcedure,
        Keyword::Return,
        Keyword::Print,
        Keyword::Input,
        Keyword::True,
        Keyword::False,
        Keyword::Null,
    ];

    /// Canonical lowercase spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::EndIf => "endif",
            Keyword::While => "while",
            Keyword::EndWhile => "endwhile",
            Keyword::For => "for",
            Keyword::EndFor => "endfor",
            Keyword::Function => "function",
            Keyword::EndFunction => "endfunction",
            Keyword::Procedure => "procedure",
            Keyword::EndProcedure => "endprocedure",
            Keyword::Return => "return",
            Keyword::Print => "print",
            Keyword::Input => "input",
            Keyword::True => "true",
            Keyword::False => "false",
            Keyword::Null => "null",
        }
    }

    /// Case-insensitive keyword lookup.
    ///
    /// Length-buckets first (keywords are 2-12 characters) so ordinary
    /// identifiers are mostly rejected without a string comparison.
    pub fn lookup(text: &str) -> Option<Keyword> {
        if !(2..=12).contains(&text.len()) || !text.is_ascii() {
            return None;
        }
        Keyword::ALL
            .iter()
            .copied()
            .find(|kw| kw.as_str().len() == text.len() && kw.as_str().eq_ignore_ascii_case(text))
    }

    /// Whether this keyword closes a block.
    pub const fn is_terminator(self) -> bool {
        matches!(
            self,
            Keyword::EndIf
                | Keyword::EndWhile
                | Keyword::EndFor
                | Keyword::EndFunction
                | Keyword::EndProcedure
        )
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
