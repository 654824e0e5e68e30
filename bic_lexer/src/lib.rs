pub mod spelling;
pub mod tokens;

pub use tokens::{Token, TokenError, TokenKind};
