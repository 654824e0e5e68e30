pub mod error;
pub mod owned_str;
pub mod print;

pub use error::RuntimeError;
pub use owned_str::OwnedStr;
pub use print::{printable, Print, Printable, TextLike};
