use phf::phf_map;

use crate::tokens::TokenKind;

pub const SPELLING: phf::Map<&'static str, TokenKind> = phf_map! {
    "true" => TokenKind::True,
    "false" => TokenKind::False,
    "null" => TokenKind::Null,
    "+" => TokenKind::Add,
    "-" => TokenKind::Sub,
    "*" => TokenKind::Mul,
    "/" => TokenKind::Div,
    "%" => TokenKind::Mod,
};

pub const TAG: phf::Map<&'static str, TokenKind> = phf_map! {
    "EndOfFile" => TokenKind::EndOfFile,
    "Ident" => TokenKind::Ident,
    "Int" => TokenKind::Int,
    "Float" => TokenKind::Float,
    "String" => TokenKind::String,
    "True" => TokenKind::True,
    "False" => TokenKind::False,
    "Null" => TokenKind::Null,
    "Add" => TokenKind::Add,
    "Sub" => TokenKind::Sub,
    "Mul" => TokenKind::Mul,
    "Div" => TokenKind::Div,
    "Mod" => TokenKind::Mod,
};

pub fn check_spelling(arg: &str) -> Option<TokenKind> {
    SPELLING.get(arg).cloned()
}

pub fn check_tag(arg: &str) -> Option<TokenKind> {
    TAG.get(arg).cloned()
}
