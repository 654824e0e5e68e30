use std::{fmt::Display, str::FromStr};

use thiserror::Error;

use crate::spelling::{check_spelling, check_tag};

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    pub fn eof() -> Self {
        Self::new(TokenKind::EndOfFile, "")
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.kind, self.literal)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    EndOfFile,
    Ident,
    Int,
    Float,
    String,
    True,
    False,
    Null,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl TokenKind {
    pub const ALL: [TokenKind; 13] = [
        TokenKind::EndOfFile,
        TokenKind::Ident,
        TokenKind::Int,
        TokenKind::Float,
        TokenKind::String,
        TokenKind::True,
        TokenKind::False,
        TokenKind::Null,
        TokenKind::Add,
        TokenKind::Sub,
        TokenKind::Mul,
        TokenKind::Div,
        TokenKind::Mod,
    ];

    /// Kind of a word or operator whose spelling alone decides it
    /// (`true`, `null`, `+`, ...).
    pub fn from_spelling(spelling: &str) -> Option<TokenKind> {
        check_spelling(spelling)
    }

    pub fn spelling(&self) -> Option<&'static str> {
        let val = match self {
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Null => "null",
            TokenKind::Add => "+",
            TokenKind::Sub => "-",
            TokenKind::Mul => "*",
            TokenKind::Div => "/",
            TokenKind::Mod => "%",
            TokenKind::EndOfFile
            | TokenKind::Ident
            | TokenKind::Int
            | TokenKind::Float
            | TokenKind::String => return None,
        };
        Some(val)
    }

    pub fn tag(&self) -> &'static str {
        match self {
            TokenKind::EndOfFile => "EndOfFile",
            TokenKind::Ident => "Ident",
            TokenKind::Int => "Int",
            TokenKind::Float => "Float",
            TokenKind::String => "String",
            TokenKind::True => "True",
            TokenKind::False => "False",
            TokenKind::Null => "Null",
            TokenKind::Add => "Add",
            TokenKind::Sub => "Sub",
            TokenKind::Mul => "Mul",
            TokenKind::Div => "Div",
            TokenKind::Mod => "Mod",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("unknown token kind `{0}`")]
    UnknownKind(String),
}

impl FromStr for TokenKind {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        check_tag(s).ok_or_else(|| TokenError::UnknownKind(s.to_owned()))
    }
}
