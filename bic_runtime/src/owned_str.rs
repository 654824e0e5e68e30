//! An owned, NUL-terminated byte string.

use std::fmt::Display;

use crate::error::RuntimeError;

/// A string that owns a private copy of its bytes plus a trailing NUL.
///
/// The empty value holds no buffer at all. A value built from text holds
/// exactly `size() + 1` bytes, the last of which is zero. Moving hands the
/// buffer over, `clone` copies it, and dropping the value frees it.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct OwnedStr {
    data: Option<Box<[u8]>>,
    size: usize,
}

impl OwnedStr {
    pub fn new_empty() -> Self {
        Self::default()
    }

    pub fn new(text: &str) -> Result<Self, RuntimeError> {
        Self::from_bytes(Some(text.as_bytes()))
    }

    /// Copies `bytes` into a fresh buffer. `None` plays the part of a null
    /// pointer and is rejected, as is any byte sequence with a NUL inside it.
    pub fn from_bytes(bytes: Option<&[u8]>) -> Result<Self, RuntimeError> {
        let Some(bytes) = bytes else {
            return Err(RuntimeError::InvalidArgument("text is null"));
        };

        if bytes.contains(&0) {
            return Err(RuntimeError::InvalidArgument(
                "text contains an interior NUL byte",
            ));
        }

        let size = bytes.len();
        let requested = size + 1;

        let mut data = Vec::new();
        data.try_reserve_exact(requested)
            .map_err(|_| RuntimeError::OutOfMemory { requested })?;
        data.extend_from_slice(bytes);
        data.push(0);

        tracing::trace!(size, "allocated owned string");

        Ok(Self {
            data: Some(data.into_boxed_slice()),
            size,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Contents without the terminator. Empty when no buffer is held.
    pub fn as_bytes(&self) -> &[u8] {
        match &self.data {
            Some(data) => &data[..self.size],
            None => &[],
        }
    }

    pub fn as_bytes_with_nul(&self) -> Option<&[u8]> {
        self.data.as_deref()
    }

    pub fn to_str(&self) -> Result<&str, RuntimeError> {
        Ok(std::str::from_utf8(self.as_bytes())?)
    }
}

impl TryFrom<&str> for OwnedStr {
    type Error = RuntimeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Display for OwnedStr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.as_bytes()))
    }
}
