use std::str::Utf8Error;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// The allocator refused a buffer of `requested` bytes.
    #[error("out of memory: could not allocate {requested} bytes")]
    OutOfMemory { requested: usize },
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("string is not valid UTF-8: {0}")]
    NotUtf8(#[from] Utf8Error),
}
