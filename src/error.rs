//! Error types for Structured Field parsing and serialization.
//!
//! The two directions fail differently:
//!
//! - **Parsing** untrusted field values reports [`Error::Parse`] with the byte
//!   offset where the grammar was violated. The crate-root `parse_*` helpers
//!   collapse this to `None`, since a malformed field is treated as absent.
//! - **Serializing** caller-built values reports one of the value errors
//!   ([`Error::IntegerOutOfRange`], [`Error::InvalidKey`], ...) naming the
//!   offending value.
//!
//! ## Examples
//!
//! ```rust
//! use sfv_codec::{Error, Parser};
//!
//! let err = Parser::new("a=1, B=2").parse_dictionary().unwrap_err();
//! assert!(matches!(err, Error::Parse { index: 5, .. }));
//! assert!(err.to_string().contains("position 5"));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised while parsing or serializing
/// Structured Field Values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Grammar violation in the input field value
    #[error("Parse error at position {index}: {msg}")]
    Parse { index: usize, msg: String },

    /// Integer outside of the +/-999,999,999,999,999 range
    #[error("Integer out of range: {0}")]
    IntegerOutOfRange(i64),

    /// Decimal whose integer part has more than 12 digits
    #[error("Decimal out of range: {0}")]
    DecimalOutOfRange(String),

    /// Decimal built from NaN or an infinity
    #[error("Decimal must be finite")]
    NonFiniteDecimal,

    /// Dictionary or parameter key outside of the key grammar
    #[error("Invalid key: {0:?}")]
    InvalidKey(String),

    /// Token outside of the token grammar
    #[error("Invalid token: {0:?}")]
    InvalidToken(String),

    /// String containing characters outside of printable ASCII
    #[error("Invalid string: {0:?}")]
    InvalidString(String),

    /// Bare item kind not available in the selected grammar version
    #[error("{kind} is not supported by {version}")]
    UnsupportedBareItem {
        kind: &'static str,
        version: &'static str,
    },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a parse error at the given byte offset.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sfv_codec::Error;
    ///
    /// let err = Error::parse(3, "expected ','");
    /// assert_eq!(err.to_string(), "Parse error at position 3: expected ','");
    /// ```
    pub fn parse(index: usize, msg: &str) -> Self {
        Error::Parse {
            index,
            msg: msg.to_string(),
        }
    }

    /// Creates an invalid key error.
    pub fn invalid_key(key: &str) -> Self {
        Error::InvalidKey(key.to_string())
    }

    /// Creates an invalid token error.
    pub fn invalid_token(token: &str) -> Self {
        Error::InvalidToken(token.to_string())
    }

    /// Creates an invalid string error.
    pub fn invalid_string(s: &str) -> Self {
        Error::InvalidString(s.to_string())
    }

    /// Creates an error for a bare item kind that the grammar version lacks.
    pub fn unsupported_bare_item(kind: &'static str, version: &'static str) -> Self {
        Error::UnsupportedBareItem { kind, version }
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sfv_codec::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns the byte offset of a parse error.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        match self {
            Error::Parse { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// Returns `true` for errors raised while parsing input.
    #[must_use]
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse { .. })
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
