//! Configuration options for Structured Field parsing and serialization.
//!
//! This module provides types to select the grammar variant:
//!
//! - [`SfvOptions`]: Main configuration struct
//! - [`Version`]: RFC 8941 or RFC 9651 (which adds Dates and Display Strings)
//! - [`Base64Padding`]: How strictly Byte Sequence padding is checked
//!
//! ## Examples
//!
//! ```rust
//! use sfv_codec::{parse_item_with_options, SfvOptions, Version};
//!
//! // Dates are an RFC 9651 extension
//! let options = SfvOptions::new().with_version(Version::Rfc8941);
//! assert!(parse_item_with_options("@1659578233", &options).is_none());
//! assert!(parse_item_with_options("@1659578233", &SfvOptions::new()).is_some());
//! ```

use std::fmt;

/// Structured Field grammar version.
///
/// # Examples
///
/// ```rust
/// use sfv_codec::Version;
///
/// assert_eq!(Version::default(), Version::Rfc9651);
/// assert!(!Version::Rfc8941.supports_dates());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Version {
    /// The original grammar: Booleans, Integers, Decimals, Strings, Tokens
    /// and Byte Sequences.
    Rfc8941,
    /// RFC 8941 plus Dates (`@`) and Display Strings (`%"`).
    #[default]
    Rfc9651,
}

impl Version {
    /// Returns `true` if Date bare items are part of the grammar.
    #[must_use]
    pub const fn supports_dates(&self) -> bool {
        matches!(self, Version::Rfc9651)
    }

    /// Returns `true` if Display String bare items are part of the grammar.
    #[must_use]
    pub const fn supports_display_strings(&self) -> bool {
        matches!(self, Version::Rfc9651)
    }

    /// Returns the name of the defining document.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Version::Rfc8941 => "RFC 8941",
            Version::Rfc9651 => "RFC 9651",
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Padding policy for Byte Sequences.
///
/// RFC 8941 §4.2.7 says parsers SHOULD NOT fail when `=` padding is missing,
/// which is the default. Strict mode rejects unpadded input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Base64Padding {
    #[default]
    Lenient,
    Strict,
}

/// Configuration options for parsing and serializing Structured Fields.
///
/// # Examples
///
/// ```rust
/// use sfv_codec::{Base64Padding, SfvOptions, Version};
///
/// // Default: RFC 9651 with lenient padding
/// let options = SfvOptions::new();
/// assert_eq!(options.version, Version::Rfc9651);
///
/// // Custom configuration
/// let options = SfvOptions::rfc8941().with_base64_padding(Base64Padding::Strict);
/// assert_eq!(options.version, Version::Rfc8941);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SfvOptions {
    pub version: Version,
    pub base64_padding: Base64Padding,
}

impl SfvOptions {
    /// Creates default options (RFC 9651, lenient Byte Sequence padding).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options restricted to the RFC 8941 grammar.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sfv_codec::{SfvOptions, Version};
    ///
    /// let options = SfvOptions::rfc8941();
    /// assert_eq!(options.version, Version::Rfc8941);
    /// ```
    #[must_use]
    pub fn rfc8941() -> Self {
        SfvOptions {
            version: Version::Rfc8941,
            ..Default::default()
        }
    }

    /// Sets the grammar version.
    #[must_use]
    pub fn with_version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    /// Sets the Byte Sequence padding policy used while parsing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sfv_codec::{parse_item_with_options, Base64Padding, SfvOptions};
    ///
    /// let strict = SfvOptions::new().with_base64_padding(Base64Padding::Strict);
    /// assert!(parse_item_with_options(":aGVsbG8:", &strict).is_none());
    /// assert!(parse_item_with_options(":aGVsbG8=:", &strict).is_some());
    /// ```
    #[must_use]
    pub fn with_base64_padding(mut self, padding: Base64Padding) -> Self {
        self.base64_padding = padding;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = SfvOptions::default();
        assert_eq!(options.version, Version::Rfc9651);
        assert_eq!(options.base64_padding, Base64Padding::Lenient);
        assert_eq!(options, SfvOptions::new());
    }

    #[test]
    fn test_version_capabilities() {
        assert!(Version::Rfc9651.supports_dates());
        assert!(Version::Rfc9651.supports_display_strings());
        assert!(!Version::Rfc8941.supports_dates());
        assert!(!Version::Rfc8941.supports_display_strings());
        assert_eq!(Version::Rfc8941.to_string(), "RFC 8941");
    }

    #[test]
    fn test_builder_chain() {
        let options = SfvOptions::new()
            .with_version(Version::Rfc8941)
            .with_base64_padding(Base64Padding::Strict);
        assert_eq!(options.version, Version::Rfc8941);
        assert_eq!(options.base64_padding, Base64Padding::Strict);
    }
}
